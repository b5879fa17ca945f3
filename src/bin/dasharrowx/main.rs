use gloo_console::log;
use ui::arrow_counter::ArrowCounter;

pub mod ui;

fn main() {
    log!("dasharrowx starting");
    yew::Renderer::<ArrowCounter>::new().render();
}
