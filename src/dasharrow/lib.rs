pub mod binder;
pub mod config;
pub mod counter;
pub mod display;
pub mod dom;
pub mod error;
pub mod page;
pub mod render;

pub use binder::ClickBinder;
pub use config::PageConfig;
pub use counter::Counter;
pub use display::{display_text, DisplayText};
pub use error::{Error, Result};
pub use render::{TextRenderer, TextTarget};
