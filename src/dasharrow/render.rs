use crate::display::{display_text, DisplayText};
use crate::error::{Error, Result};

/// A node whose whole text content can be read and replaced.
pub trait TextTarget {
    /// Replaces the entire content with `text` in a single write.
    fn replace_text(&mut self, text: &str);

    fn text(&self) -> String;

    /// Whether the node is still part of its document.
    fn is_present(&self) -> bool {
        true
    }
}

/// Writes the arrow for a count into one text node.
#[derive(Debug)]
pub struct TextRenderer<T> {
    id: String,
    target: T,
}

impl<T: TextTarget> TextRenderer<T> {
    pub fn new(id: &str, target: T) -> Self {
        TextRenderer { id: id.to_string(), target }
    }

    pub fn render(&mut self, count: u64) -> Result<()> {
        if !self.target.is_present() {
            return Err(Error::MissingTextNode(self.id.clone()));
        }
        self.target.replace_text(&display_text(count));
        Ok(())
    }

    /// Reads the node back and returns the count its arrow shows.
    pub fn rendered(&self) -> Result<u64> {
        if !self.target.is_present() {
            return Err(Error::MissingTextNode(self.id.clone()));
        }
        Ok(self.target.text().parse::<DisplayText>()?.count())
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use std::{cell::RefCell, rc::Rc};

    use super::*;

    /// In-memory paragraph. Clones share the same node so a test can keep a
    /// handle for reading and detaching while the renderer owns another.
    #[derive(Debug, Clone, Default)]
    pub(crate) struct Paragraph {
        inner: Rc<RefCell<ParagraphNode>>,
    }

    #[derive(Debug, Default)]
    struct ParagraphNode {
        text: String,
        writes: usize,
        detached: bool,
    }

    impl Paragraph {
        pub(crate) fn writes(&self) -> usize {
            self.inner.borrow().writes
        }

        pub(crate) fn detach(&self) {
            self.inner.borrow_mut().detached = true;
        }

        pub(crate) fn set_raw(&self, text: &str) {
            self.inner.borrow_mut().text = text.to_string();
        }
    }

    impl TextTarget for Paragraph {
        fn replace_text(&mut self, text: &str) {
            let mut node = self.inner.borrow_mut();
            node.text = text.to_string();
            node.writes += 1;
        }

        fn text(&self) -> String {
            self.inner.borrow().text.clone()
        }

        fn is_present(&self) -> bool {
            !self.inner.borrow().detached
        }
    }

    #[test]
    fn render0() {
        let paragraph = Paragraph::default();
        let mut renderer = TextRenderer::new("text", paragraph.clone());
        renderer.render(1).unwrap();
        assert_eq!(paragraph.text(), "->");
        renderer.render(4).unwrap();
        assert_eq!(paragraph.text(), "---->");
    }

    #[test]
    fn render_replaces_whole_content() {
        let paragraph = Paragraph::default();
        paragraph.set_raw("leftover text");
        let mut renderer = TextRenderer::new("text", paragraph.clone());
        renderer.render(2).unwrap();
        assert_eq!(paragraph.text(), "-->");
    }

    #[test]
    fn render_is_idempotent() {
        let paragraph = Paragraph::default();
        let mut renderer = TextRenderer::new("text", paragraph.clone());
        renderer.render(3).unwrap();
        let first = paragraph.text();
        renderer.render(3).unwrap();
        assert_eq!(paragraph.text(), first);
        assert_eq!(paragraph.text(), "--->");
        assert_eq!(paragraph.writes(), 2);
    }

    #[test]
    fn render_missing_node() {
        let paragraph = Paragraph::default();
        let mut renderer = TextRenderer::new("text", paragraph.clone());
        paragraph.detach();
        assert_eq!(renderer.render(1), Err(Error::MissingTextNode("text".to_string())));
        assert_eq!(paragraph.writes(), 0);
    }

    #[test]
    fn rendered0() {
        let paragraph = Paragraph::default();
        let mut renderer = TextRenderer::new("text", paragraph.clone());
        renderer.render(5).unwrap();
        assert_eq!(renderer.rendered(), Ok(5));

        paragraph.set_raw("5");
        assert_eq!(renderer.rendered(), Err(Error::MalformedText("5".to_string())));
    }
}
