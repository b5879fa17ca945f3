/// Number of processed clicks plus one. Starts at 1 and only ever grows.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Counter {
    count: u64,
}

impl Default for Counter {
    fn default() -> Self {
        Counter::new()
    }
}

impl Counter {
    pub fn new() -> Self {
        Counter { count: 1 }
    }

    pub fn increment(&mut self) -> u64 {
        self.count += 1;
        self.count
    }

    pub fn count(&self) -> u64 {
        self.count
    }

    pub fn clicks(&self) -> u64 {
        self.count - 1
    }
}
