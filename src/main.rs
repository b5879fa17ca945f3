use dasharrow::{dom, PageConfig};
use gloo_console::error;
use web_sys::wasm_bindgen::throw_str;

fn main() {
    match dom::mount(&PageConfig::default()) {
        Ok(mounted) => mounted.forget(),
        Err(err) => {
            error!(err.to_string());
            throw_str(&err.to_string());
        }
    }
}
