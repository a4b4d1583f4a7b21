use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use crate::domain::ports::{LogSink, ShelfItem};
use crate::utils::error::CatalogError;

/// Serialized by its display name and parsed case-insensitively, like the CLI flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Category {
    JavaScript,
    Css,
    Html,
    TypeScript,
    Angular,
    Software,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::JavaScript,
        Category::Css,
        Category::Html,
        Category::TypeScript,
        Category::Angular,
        Category::Software,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::JavaScript => "JavaScript",
            Category::Css => "CSS",
            Category::Html => "HTML",
            Category::TypeScript => "TypeScript",
            Category::Angular => "Angular",
            Category::Software => "Software",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|category| category.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| CatalogError::InvalidConfigValueError {
                field: "category".to_string(),
                value: s.to_string(),
                reason: format!(
                    "Unknown category. Valid categories: {}",
                    Category::ALL.map(|c| c.as_str()).join(", ")
                ),
            })
    }
}

impl TryFrom<String> for Category {
    type Error = CatalogError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Category> for String {
    fn from(category: Category) -> Self {
        category.as_str().to_string()
    }
}

/// A named callback describing damage to a book.
#[derive(Clone)]
pub struct DamageLogger {
    name: String,
    report: Arc<dyn Fn(&str) -> String + Send + Sync>,
}

impl DamageLogger {
    pub fn new<F>(name: impl Into<String>, report: F) -> Self
    where
        F: Fn(&str) -> String + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            report: Arc::new(report),
        }
    }

    /// The stock logger: `Damaged: {reason}`.
    pub fn standard() -> Self {
        Self::new("logDamage", |reason| format!("Damaged: {}", reason))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn call(&self, reason: &str) -> String {
        (self.report)(reason)
    }
}

impl fmt::Debug for DamageLogger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DamageLogger").field("name", &self.name).finish()
    }
}

impl PartialEq for DamageLogger {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Book {
    pub id: u32,
    pub title: String,
    pub author: String,
    pub available: bool,
    pub category: Category,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pages: Option<u32>,
    #[serde(skip)]
    pub mark_damaged: Option<DamageLogger>,
}

impl Book {
    pub fn new(
        id: u32,
        title: impl Into<String>,
        author: impl Into<String>,
        available: bool,
        category: Category,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            author: author.into(),
            available,
            category,
            pages: None,
            mark_damaged: None,
        }
    }

    pub fn with_pages(mut self, pages: u32) -> Self {
        self.pages = Some(pages);
        self
    }

    pub fn with_damage_logger(mut self, logger: DamageLogger) -> Self {
        self.mark_damaged = Some(logger);
        self
    }

    /// Runs the damage logger if the book carries one.
    pub fn report_damage(&self, reason: &str) -> Option<String> {
        self.mark_damaged.as_ref().map(|logger| logger.call(reason))
    }
}

impl ShelfItem for Book {
    fn title(&self) -> &str {
        &self.title
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Magazine {
    pub title: String,
    pub publisher: String,
}

impl Magazine {
    pub fn new(title: impl Into<String>, publisher: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            publisher: publisher.into(),
        }
    }
}

impl ShelfItem for Magazine {
    fn title(&self) -> &str {
        &self.title
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Library {
    pub name: String,
    pub books: u64,
    pub avg_pages_per_book: u64,
}

impl Library {
    pub fn new(name: impl Into<String>, books: u64, avg_pages_per_book: u64) -> Self {
        Self {
            name: name.into(),
            books,
            avg_pages_per_book,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub name: String,
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    #[serde(flatten)]
    pub person: Person,
    pub num_books_published: u32,
}

pub trait Librarian {
    fn name(&self) -> &str;
    fn email(&self) -> &str;
    fn department(&self) -> &str;
    fn assist_customer(&self, customer_name: &str, sink: &dyn LogSink);
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UniversityLibrarian {
    pub person: Person,
    pub department: String,
}

impl UniversityLibrarian {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        department: impl Into<String>,
    ) -> Self {
        Self {
            person: Person {
                name: name.into(),
                email: email.into(),
            },
            department: department.into(),
        }
    }
}

impl Librarian for UniversityLibrarian {
    fn name(&self) -> &str {
        &self.person.name
    }

    fn email(&self) -> &str {
        &self.person.email
    }

    fn department(&self) -> &str {
        &self.department
    }

    fn assist_customer(&self, customer_name: &str, sink: &dyn LogSink) {
        sink.log(&format!("{} is assisting {}", self.person.name, customer_name));
    }
}

/// Someone holding books taken from the catalog.
#[derive(Debug, Clone, Default)]
pub struct Reader {
    pub name: String,
    books: Vec<Book>,
}

impl Reader {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            books: Vec::new(),
        }
    }

    pub fn take(&mut self, book: Book) {
        self.books.push(book);
    }

    pub fn books(&self) -> &[Book] {
        &self.books
    }
}
