use crate::domain::ports::{LogSink, ShelfItem};
use crate::utils::error::{CatalogError, Result};

pub const DEFAULT_DEPARTMENT: &str = "Default department";

pub trait ReferenceItem {
    fn id(&self) -> u32;
    fn title(&self) -> &str;
    fn year(&self) -> u16;

    fn department(&self) -> &str {
        DEFAULT_DEPARTMENT
    }

    fn print_item(&self, sink: &dyn LogSink) {
        print_publication(self, sink);
    }

    fn print_citation(&self, sink: &dyn LogSink);
}

fn print_publication<R: ReferenceItem + ?Sized>(item: &R, sink: &dyn LogSink) {
    sink.log(&format!("{} was published in {}", item.title(), item.year()));
    sink.log(&format!("Department is {}", item.department()));
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Encyclopedia {
    id: u32,
    pub title: String,
    year: u16,
    pub edition: u32,
    copies: Option<u32>,
    publisher: Option<String>,
}

impl Encyclopedia {
    pub fn new(id: u32, title: impl Into<String>, year: u16, edition: u32) -> Self {
        tracing::debug!("Creating a new reference item {}", id);
        Self {
            id,
            title: title.into(),
            year,
            edition,
            copies: None,
            publisher: None,
        }
    }

    pub fn copies(&self) -> Option<u32> {
        self.copies
    }

    pub fn set_copies(&mut self, value: i64) -> Result<()> {
        let copies = u32::try_from(value)
            .ok()
            .filter(|copies| *copies >= 1)
            .ok_or_else(|| CatalogError::ValidationError {
                message: format!("Copies must be a positive integer, got {}", value),
            })?;
        self.copies = Some(copies);
        Ok(())
    }

    /// The publisher, upper-cased on the way out.
    pub fn publisher(&self) -> Option<String> {
        self.publisher.as_ref().map(|p| p.to_uppercase())
    }

    pub fn set_publisher(&mut self, publisher: impl Into<String>) {
        self.publisher = Some(publisher.into());
    }
}

impl ReferenceItem for Encyclopedia {
    fn id(&self) -> u32 {
        self.id
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn year(&self) -> u16 {
        self.year
    }

    fn print_item(&self, sink: &dyn LogSink) {
        print_publication(self, sink);
        sink.log(&format!("Edition: {} ({})", self.edition, self.year));
    }

    fn print_citation(&self, sink: &dyn LogSink) {
        sink.log(&format!("{} - {}", self.title, self.year));
    }
}

impl ShelfItem for Encyclopedia {
    fn title(&self) -> &str {
        &self.title
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::sink::MemorySink;

    fn encyclopedia() -> Encyclopedia {
        Encyclopedia::new(1, "WorldPedia", 1900, 10)
    }

    #[test]
    fn print_item_appends_edition() {
        let sink = MemorySink::new();
        encyclopedia().print_item(&sink);

        assert_eq!(
            sink.lines(),
            vec![
                "WorldPedia was published in 1900",
                "Department is Default department",
                "Edition: 10 (1900)",
            ]
        );
    }

    #[test]
    fn print_citation_uses_title_and_year() {
        let sink = MemorySink::new();
        encyclopedia().print_citation(&sink);
        assert_eq!(sink.lines(), vec!["WorldPedia - 1900"]);
    }

    #[test]
    fn copies_must_be_positive() {
        let mut item = encyclopedia();
        assert!(item.set_copies(0).is_err());
        assert!(item.set_copies(-3).is_err());
        assert_eq!(item.copies(), None);

        item.set_copies(4).unwrap();
        assert_eq!(item.copies(), Some(4));
    }

    #[test]
    fn publisher_reads_back_upper_cased() {
        let mut item = encyclopedia();
        assert_eq!(item.publisher(), None);

        item.set_publisher("Oxford Press");
        assert_eq!(item.publisher().as_deref(), Some("OXFORD PRESS"));
    }
}
