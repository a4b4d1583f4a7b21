use crate::domain::ports::{LogSink, ShelfItem};

/// An append-only, insertion-ordered collection of titled items.
#[derive(Debug, Clone)]
pub struct Shelf<T: ShelfItem> {
    items: Vec<T>,
}

impl<T: ShelfItem> Shelf<T> {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    pub fn add(&mut self, item: T) {
        self.items.push(item);
    }

    /// The earliest-added item, or `None` on an empty shelf.
    pub fn get_first(&self) -> Option<&T> {
        self.items.first()
    }

    /// First item whose title equals `title` exactly.
    pub fn find(&self, title: &str) -> Option<&T> {
        self.items.iter().find(|item| item.title() == title)
    }

    pub fn print_titles(&self, sink: &dyn LogSink) {
        for item in &self.items {
            sink.log(item.title());
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<T: ShelfItem> Default for Shelf<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ShelfItem> FromIterator<T> for Shelf<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}
