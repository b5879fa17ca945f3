use crate::counter::Counter;
use crate::error::Result;
use crate::render::{TextRenderer, TextTarget};

/// Owns the counter and its renderer, and turns each click into one
/// increment followed by one render.
#[derive(Debug)]
pub struct ClickBinder<T> {
    counter: Counter,
    renderer: TextRenderer<T>,
}

impl<T: TextTarget> ClickBinder<T> {
    /// Creates the counter at 1 and performs the initial render.
    pub fn bind(renderer: TextRenderer<T>) -> Result<Self> {
        let mut binder = ClickBinder { counter: Counter::new(), renderer };
        binder.renderer.render(binder.counter.count())?;
        Ok(binder)
    }

    pub fn click(&mut self) -> Result<u64> {
        let count = self.counter.increment();
        self.renderer.render(count)?;
        Ok(count)
    }

    pub fn count(&self) -> u64 {
        self.counter.count()
    }

    pub fn clicks(&self) -> u64 {
        self.counter.clicks()
    }

    pub fn rendered(&self) -> Result<u64> {
        self.renderer.rendered()
    }
}
