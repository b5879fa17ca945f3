use std::{cell::RefCell, rc::Rc};

use gloo::events::EventListener;
use gloo::utils::document;
use gloo_console::{error, log};
use web_sys::{wasm_bindgen::{throw_str, JsValue}, Element};

use crate::binder::ClickBinder;
use crate::config::PageConfig;
use crate::error::{Error, Result};
use crate::page;
use crate::render::{TextRenderer, TextTarget};

pub type SharedBinder = Rc<RefCell<ClickBinder<Element>>>;

impl TextTarget for Element {
    fn replace_text(&mut self, text: &str) {
        // Drops every child and leaves a single text node.
        self.set_text_content(Some(text));
    }

    fn text(&self) -> String {
        self.text_content().unwrap_or_default()
    }

    fn is_present(&self) -> bool {
        self.is_connected()
    }
}

fn dom_error(err: JsValue) -> Error {
    Error::Dom(format!("{:?}", err))
}

pub fn element_by_id(id: &str) -> Result<Element> {
    document()
        .get_element_by_id(id)
        .ok_or_else(|| Error::MissingElement(id.to_string()))
}

/// Finds the container, or appends a fresh one to the body.
pub fn container(config: &PageConfig) -> Result<Element> {
    if let Ok(container) = element_by_id(&config.container_id) {
        return Ok(container);
    }
    let body = document().body().ok_or_else(|| Error::MissingElement("body".to_string()))?;
    let container = document().create_element("div").map_err(dom_error)?;
    container.set_id(&config.container_id);
    body.append_child(&container).map_err(dom_error)?;
    Ok(container)
}

/// Runs one increment-and-render cycle per click on `button`.
pub fn bind_clicks(button: &Element, binder: SharedBinder) -> EventListener {
    EventListener::new(button, "click", move |_event| {
        let result = binder.borrow_mut().click();
        if let Err(err) = result {
            error!(err.to_string());
            throw_str(&err.to_string());
        }
    })
}

/// A live page: the binder and the listener feeding it. Dropping it
/// unhooks the button.
pub struct Mounted {
    binder: SharedBinder,
    listener: EventListener,
}

impl Mounted {
    pub fn binder(&self) -> SharedBinder {
        self.binder.clone()
    }

    pub fn count(&self) -> u64 {
        self.binder.borrow().count()
    }

    /// Keeps the listener alive for the rest of the page's life.
    pub fn forget(self) {
        self.listener.forget();
    }
}

pub fn mount(config: &PageConfig) -> Result<Mounted> {
    let container = container(config)?;
    container.set_inner_html(&page::view(config, 1).to_html());

    let button = element_by_id(&config.button_id)?;
    let text = element_by_id(&config.text_id)?;
    let binder = ClickBinder::bind(TextRenderer::new(&config.text_id, text))?;
    let binder = Rc::new(RefCell::new(binder));
    let listener = bind_clicks(&button, binder.clone());

    log!(format!("dasharrow mounted into #{}", config.container_id));
    Ok(Mounted { binder, listener })
}
