use crate::domain::model::{Author, Book, Category};
use crate::utils::error::CatalogError;
use std::fmt;
use std::str::FromStr;

/// A borrowed view of a single field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldValue<'a> {
    Number(u64),
    Text(&'a str),
    Flag(bool),
    Category(Category),
    Callable { name: &'a str },
}

/// What `get_property` hands back: callables collapse to their name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PropertyValue {
    Number(u64),
    Text(String),
    Flag(bool),
    Category(Category),
}

impl fmt::Display for PropertyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropertyValue::Number(n) => write!(f, "{}", n),
            PropertyValue::Text(s) => f.write_str(s),
            PropertyValue::Flag(b) => write!(f, "{}", b),
            PropertyValue::Category(c) => write!(f, "{}", c),
        }
    }
}

pub trait PropertySource {
    type Key: Copy;

    /// `None` when the key names an optional field that is unset.
    fn field(&self, key: Self::Key) -> Option<FieldValue<'_>>;
}

pub fn get_property<T: PropertySource>(object: &T, key: T::Key) -> Option<PropertyValue> {
    let value = match object.field(key)? {
        FieldValue::Number(n) => PropertyValue::Number(n),
        FieldValue::Text(s) => PropertyValue::Text(s.to_string()),
        FieldValue::Flag(b) => PropertyValue::Flag(b),
        FieldValue::Category(c) => PropertyValue::Category(c),
        FieldValue::Callable { name } => PropertyValue::Text(name.to_string()),
    };
    Some(value)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BookField {
    Id,
    Title,
    Author,
    Available,
    Category,
    Pages,
    MarkDamaged,
}

impl FromStr for BookField {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "id" => Ok(BookField::Id),
            "title" => Ok(BookField::Title),
            "author" => Ok(BookField::Author),
            "available" => Ok(BookField::Available),
            "category" => Ok(BookField::Category),
            "pages" => Ok(BookField::Pages),
            "markDamaged" | "mark_damaged" => Ok(BookField::MarkDamaged),
            other => Err(CatalogError::InvalidConfigValueError {
                field: "property".to_string(),
                value: other.to_string(),
                reason: "Not a book field".to_string(),
            }),
        }
    }
}

impl PropertySource for Book {
    type Key = BookField;

    fn field(&self, key: BookField) -> Option<FieldValue<'_>> {
        match key {
            BookField::Id => Some(FieldValue::Number(u64::from(self.id))),
            BookField::Title => Some(FieldValue::Text(&self.title)),
            BookField::Author => Some(FieldValue::Text(&self.author)),
            BookField::Available => Some(FieldValue::Flag(self.available)),
            BookField::Category => Some(FieldValue::Category(self.category)),
            BookField::Pages => self.pages.map(|p| FieldValue::Number(u64::from(p))),
            BookField::MarkDamaged => self
                .mark_damaged
                .as_ref()
                .map(|logger| FieldValue::Callable { name: logger.name() }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AuthorField {
    Name,
    Email,
    NumBooksPublished,
}

impl PropertySource for Author {
    type Key = AuthorField;

    fn field(&self, key: AuthorField) -> Option<FieldValue<'_>> {
        match key {
            AuthorField::Name => Some(FieldValue::Text(&self.person.name)),
            AuthorField::Email => Some(FieldValue::Text(&self.person.email)),
            AuthorField::NumBooksPublished => {
                Some(FieldValue::Number(u64::from(self.num_books_published)))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::Person;

    #[test]
    fn unset_optional_field_is_absent() {
        let book = Book::new(
            1,
            "Refactoring JavaScript",
            "Evan Burchard",
            true,
            Category::JavaScript,
        );
        assert_eq!(get_property(&book, BookField::Pages), None);
        assert_eq!(get_property(&book, BookField::MarkDamaged), None);
    }

    #[test]
    fn field_names_parse() {
        assert_eq!("markDamaged".parse::<BookField>().unwrap(), BookField::MarkDamaged);
        assert_eq!("title".parse::<BookField>().unwrap(), BookField::Title);
        assert!("isbn".parse::<BookField>().is_err());
    }

    #[test]
    fn author_fields_are_exposed() {
        let author = Author {
            person: Person {
                name: "Anton".to_string(),
                email: "anton@test.com".to_string(),
            },
            num_books_published: 4,
        };

        assert_eq!(
            get_property(&author, AuthorField::NumBooksPublished),
            Some(PropertyValue::Number(4))
        );
        assert_eq!(
            get_property(&author, AuthorField::Email).map(|v| v.to_string()).as_deref(),
            Some("anton@test.com")
        );
    }
}
