use crate::domain::model::{Book, Category};
use crate::domain::ports::LogSink;
use crate::utils::error::{CatalogError, Result};
use crate::utils::validation::validate_unique_ids;

/// Selects titles by author, by availability, or by id and availability together.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TitleQuery {
    ByAuthor(String),
    ByAvailability(bool),
    /// Both the id and the availability flag have to match.
    ByIdAndAvailability(u32, bool),
}

impl TitleQuery {
    pub fn matches(&self, book: &Book) -> bool {
        match self {
            TitleQuery::ByAuthor(author) => book.author == *author,
            TitleQuery::ByAvailability(available) => book.available == *available,
            TitleQuery::ByIdAndAvailability(id, available) => {
                book.id == *id && book.available == *available
            }
        }
    }
}

impl From<&str> for TitleQuery {
    fn from(author: &str) -> Self {
        TitleQuery::ByAuthor(author.to_string())
    }
}

impl From<String> for TitleQuery {
    fn from(author: String) -> Self {
        TitleQuery::ByAuthor(author)
    }
}

impl From<bool> for TitleQuery {
    fn from(available: bool) -> Self {
        TitleQuery::ByAvailability(available)
    }
}

impl From<(u32, bool)> for TitleQuery {
    fn from((id, available): (u32, bool)) -> Self {
        TitleQuery::ByIdAndAvailability(id, available)
    }
}

pub fn first_available(items: &[Book]) -> Option<&Book> {
    items.iter().find(|book| book.available)
}

pub fn author_by_index(items: &[Book], index: usize) -> Result<(String, String)> {
    let book = items.get(index).ok_or(CatalogError::OutOfRange {
        index,
        len: items.len(),
    })?;
    Ok((book.title.clone(), book.author.clone()))
}

pub fn book_by_id(items: &[Book], id: u32) -> Option<&Book> {
    items.iter().find(|book| book.id == id)
}

pub fn titles_matching(items: &[Book], query: &TitleQuery) -> Vec<String> {
    items
        .iter()
        .filter(|book| query.matches(book))
        .map(|book| book.title.clone())
        .collect()
}

pub fn log_first_available(items: &[Book], sink: &dyn LogSink) {
    sink.log(&format!("Number of books: {}", items.len()));

    match first_available(items) {
        Some(book) => sink.log(&format!("The first available book: {}", book.title)),
        None => sink.log("There are no available books"),
    }
}

pub fn log_book_titles(titles: &[String], sink: &dyn LogSink) {
    sink.log(&format!("Number of titles: {}", titles.len()));

    for title in titles {
        sink.log(title);
    }
}

pub fn print_book(book: &Book, sink: &dyn LogSink) {
    sink.log(&format!("{} by {}", book.title, book.author));
}

/// An immutable, insertion-ordered set of books with unique ids.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    books: Vec<Book>,
}

impl Catalog {
    pub fn new(books: Vec<Book>) -> Result<Self> {
        validate_unique_ids("catalog.books", books.iter().map(|book| book.id))?;
        Ok(Self { books })
    }

    /// The four-book catalog used by the demonstration.
    pub fn sample() -> Self {
        Self {
            books: vec![
                Book::new(
                    1,
                    "Refactoring JavaScript",
                    "Evan Burchard",
                    true,
                    Category::JavaScript,
                ),
                Book::new(
                    2,
                    "JavaScript Testing",
                    "Liang Yuxian Eugene",
                    false,
                    Category::JavaScript,
                ),
                Book::new(3, "CSS Secrets", "Lea Verou", true, Category::Css),
                Book::new(
                    4,
                    "Mastering JavaScript Object-Oriented Programming",
                    "Andrea Chiarelli",
                    true,
                    Category::JavaScript,
                ),
            ],
        }
    }

    pub fn all_books(&self) -> &[Book] {
        &self.books
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    pub fn titles_by_category(&self, category: Category) -> Vec<String> {
        self.books
            .iter()
            .filter(|book| book.category == category)
            .map(|book| book.title.clone())
            .collect()
    }

    pub fn first_available(&self) -> Option<&Book> {
        first_available(&self.books)
    }

    pub fn author_by_index(&self, index: usize) -> Result<(String, String)> {
        author_by_index(&self.books, index)
    }

    pub fn book_by_id(&self, id: u32) -> Option<&Book> {
        book_by_id(&self.books, id)
    }

    /// Titles of the requested books that can be lent out, in request order.
    pub fn checkout(&self, customer: &str, ids: &[u32], sink: &dyn LogSink) -> Vec<String> {
        sink.log(&format!("Customer - {}", customer));

        ids.iter()
            .filter_map(|&id| match self.book_by_id(id) {
                Some(book) if book.available => Some(book.title.clone()),
                Some(_) => {
                    tracing::debug!("Book {} is not available, skipping", id);
                    None
                }
                None => {
                    tracing::debug!("No book with id {}, skipping", id);
                    None
                }
            })
            .collect()
    }

    pub fn titles(&self, query: impl Into<TitleQuery>) -> Vec<String> {
        titles_matching(&self.books, &query.into())
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::sample()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::sink::MemorySink;

    #[test]
    fn duplicate_ids_are_rejected() {
        let books = vec![
            Book::new(1, "A", "X", true, Category::Css),
            Book::new(1, "B", "Y", true, Category::Html),
        ];
        assert!(Catalog::new(books).is_err());
    }

    #[test]
    fn first_available_skips_leading_unavailable_books() {
        let books = vec![
            Book::new(7, "Gone", "X", false, Category::Css),
            Book::new(8, "Here", "Y", true, Category::Css),
            Book::new(9, "Also here", "Z", true, Category::Css),
        ];
        assert_eq!(first_available(&books).map(|b| b.id), Some(8));
    }

    #[test]
    fn id_and_availability_query_requires_both() {
        let catalog = Catalog::sample();
        assert_eq!(catalog.titles((2u32, false)), vec!["JavaScript Testing"]);
        assert!(catalog.titles((2u32, true)).is_empty());
        assert!(catalog.titles((99u32, false)).is_empty());
    }

    #[test]
    fn log_first_available_reports_empty_case() {
        let sink = MemorySink::new();
        let books = vec![Book::new(1, "Gone", "X", false, Category::Css)];

        log_first_available(&books, &sink);

        assert_eq!(
            sink.lines(),
            vec!["Number of books: 1", "There are no available books"]
        );
    }

    #[test]
    fn log_book_titles_prints_count_then_titles() {
        let sink = MemorySink::new();
        let titles = Catalog::sample().titles_by_category(Category::Css);

        log_book_titles(&titles, &sink);

        assert_eq!(sink.lines(), vec!["Number of titles: 1", "CSS Secrets"]);
    }

    #[test]
    fn print_book_names_title_and_author() {
        let sink = MemorySink::new();
        let catalog = Catalog::sample();

        print_book(catalog.book_by_id(1).unwrap(), &sink);

        assert_eq!(sink.lines(), vec!["Refactoring JavaScript by Evan Burchard"]);
    }
}
