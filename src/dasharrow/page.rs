use core::fmt;
use std::{fs, path::Path};

use crate::config::PageConfig;
use crate::display::display_text;
use crate::error::{Error, Result};

#[derive(Debug, PartialEq, Eq, Clone)]
pub enum Markup {
    Element {
        name: String,
        attributes: Vec<(String, String)>,
        children: Vec<Markup>,
    },
    Text(String),
}

impl Markup {
    pub fn element(name: &str) -> Self {
        Markup::Element { name: name.to_string(), attributes: Vec::new(), children: Vec::new() }
    }

    pub fn text(text: &str) -> Self {
        Markup::Text(text.to_string())
    }

    pub fn attribute(mut self, key: &str, value: &str) -> Self {
        if let Markup::Element { attributes, .. } = &mut self {
            attributes.push((key.to_string(), value.to_string()));
        }
        self
    }

    pub fn child(mut self, child: Markup) -> Self {
        if let Markup::Element { children, .. } = &mut self {
            children.push(child);
        }
        self
    }

    pub fn to_html(&self) -> String {
        self.to_string()
    }
}

const VOID_ELEMENTS: [&str; 4] = ["br", "img", "input", "meta"];

fn escape(text: &str) -> String {
    text.chars().fold(String::with_capacity(text.len()), |mut s, c| {
        match c {
            '&' => s.push_str("&amp;"),
            '<' => s.push_str("&lt;"),
            '>' => s.push_str("&gt;"),
            '"' => s.push_str("&quot;"),
            _ => s.push(c),
        }
        s
    })
}

impl fmt::Display for Markup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Markup::Text(text) => write!(f, "{}", escape(text)),
            Markup::Element { name, attributes, children } => {
                write!(f, "<{name}")?;
                for (key, value) in attributes {
                    write!(f, " {}=\"{}\"", key, escape(value))?;
                }
                write!(f, ">")?;
                if VOID_ELEMENTS.contains(&name.as_str()) {
                    return Ok(());
                }
                for child in children {
                    write!(f, "{child}")?;
                }
                write!(f, "</{name}>")
            }
        }
    }
}

/// The button and the paragraph showing the arrow for `count`.
pub fn view(config: &PageConfig, count: u64) -> Markup {
    Markup::element("div")
        .child(
            Markup::element("button")
                .attribute("id", &config.button_id)
                .attribute("type", "button")
                .child(Markup::text(&config.button_label)),
        )
        .child(
            Markup::element("p")
                .attribute("id", &config.text_id)
                .child(Markup::text(&display_text(count))),
        )
}

/// A whole static page: the container with the initial view inside, and an
/// optional module script that takes over the page once loaded.
pub fn document(config: &PageConfig, script: Option<&str>) -> String {
    let container = Markup::element("div")
        .attribute("id", &config.container_id)
        .child(view(config, 1));
    let mut body = Markup::element("body").child(container);
    if let Some(src) = script {
        body = body.child(Markup::element("script").attribute("type", "module").attribute("src", src));
    }
    let head = Markup::element("head").child(Markup::element("meta").attribute("charset", "utf-8"));
    format!("<!DOCTYPE html>{}", Markup::element("html").child(head).child(body))
}

/// Writes `document` to `path`, replacing whatever is there.
pub fn write_document(path: &Path, config: &PageConfig, script: Option<&str>) -> Result<()> {
    fs::write(path, document(config, script)).map_err(|err| Error::Io(format!("{}: {err}", path.display())))
}
