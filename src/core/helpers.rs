use crate::domain::model::Library;
use crate::domain::ports::LogSink;
use crate::utils::error::{CatalogError, Result};
use serde_json::Value;

pub fn create_customer_id(name: &str, id: u32) -> String {
    format!("{}-{}", name, id)
}

/// Logs the name, then the age and city when they carry a value.
pub fn create_customer(name: &str, age: Option<u32>, city: Option<&str>, sink: &dyn LogSink) {
    sink.log(&format!("Name - {}", name));

    if let Some(age) = age.filter(|age| *age > 0) {
        sink.log(&format!("Age - {}", age));
    }

    if let Some(city) = city.filter(|city| !city.is_empty()) {
        sink.log(&format!("City - {}", city));
    }
}

pub fn sample_libraries() -> Vec<Library> {
    vec![
        Library::new("libName1", 1_000_000_000, 250),
        Library::new("libName2", 5_000_000_000, 300),
        Library::new("libName3", 3_000_000_000, 280),
    ]
}

pub fn get_pages(library: &Library) -> u128 {
    u128::from(library.books) * u128::from(library.avg_pages_per_book)
}

pub fn calc_total_pages(libraries: &[Library]) -> u128 {
    libraries.iter().map(get_pages).sum()
}

pub fn assert_string_value(value: &Value) -> Result<&str> {
    value
        .as_str()
        .ok_or_else(|| CatalogError::type_mismatch("Value should have been a string"))
}

/// Reverses the characters of a string value and joins them with commas.
pub fn book_title_transform(value: &Value) -> Result<String> {
    let title = assert_string_value(value)?;
    let reversed: Vec<String> = title.chars().rev().map(String::from).collect();
    Ok(reversed.join(","))
}

/// Everything past the first two entries.
pub fn purge<T: Clone>(inventory: &[T]) -> Vec<T> {
    inventory.get(2..).map(<[T]>::to_vec).unwrap_or_default()
}
