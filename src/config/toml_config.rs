use crate::core::catalog::Catalog;
use crate::domain::model::{Book, Category};
use crate::utils::error::{CatalogError, Result};
use crate::utils::validation::{
    validate_non_empty_string, validate_range, validate_unique_ids, Validate,
};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::OnceLock;

pub const MAX_LOOKUP_DELAY_MS: u64 = 60_000;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    pub catalog: Option<CatalogSection>,
    pub lookup: Option<LookupSection>,
    pub checkout: Option<CheckoutSection>,
    pub logging: Option<LoggingSection>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogSection {
    #[serde(default)]
    pub books: Vec<Book>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LookupSection {
    pub category: Option<String>,
    pub delay_ms: Option<u64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CheckoutSection {
    pub customer: Option<String>,
    pub ids: Option<Vec<u32>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingSection {
    pub sink: Option<String>,
    pub json: Option<bool>,
}

fn env_placeholder() -> &'static Regex {
    static PLACEHOLDER: OnceLock<Regex> = OnceLock::new();
    PLACEHOLDER.get_or_init(|| Regex::new(r"\$\{([^}]+)\}").expect("valid placeholder pattern"))
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(CatalogError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| CatalogError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the environment value; unknown variables are left as written.
    fn substitute_env_vars(content: &str) -> String {
        env_placeholder()
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }

    /// The configured books, or the sample catalog when none are listed.
    pub fn build_catalog(&self) -> Result<Catalog> {
        match &self.catalog {
            Some(section) if !section.books.is_empty() => Catalog::new(section.books.clone()),
            _ => Ok(Catalog::sample()),
        }
    }

    pub fn category(&self) -> Result<Option<Category>> {
        self.lookup
            .as_ref()
            .and_then(|lookup| lookup.category.as_deref())
            .map(str::parse::<Category>)
            .transpose()
    }

    pub fn delay_ms(&self) -> Option<u64> {
        self.lookup.as_ref().and_then(|lookup| lookup.delay_ms)
    }

    pub fn customer(&self) -> Option<&str> {
        self.checkout
            .as_ref()
            .and_then(|checkout| checkout.customer.as_deref())
    }

    pub fn checkout_ids(&self) -> Option<&[u32]> {
        self.checkout
            .as_ref()
            .and_then(|checkout| checkout.ids.as_deref())
    }

    pub fn sink(&self) -> Option<&str> {
        self.logging.as_ref().and_then(|logging| logging.sink.as_deref())
    }

    pub fn json_logs(&self) -> bool {
        self.logging
            .as_ref()
            .and_then(|logging| logging.json)
            .unwrap_or(false)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        if let Some(section) = &self.catalog {
            validate_unique_ids("catalog.books", section.books.iter().map(|book| book.id))?;
            for book in &section.books {
                validate_non_empty_string("catalog.books.title", &book.title)?;
                validate_non_empty_string("catalog.books.author", &book.author)?;
            }
        }

        self.category()?;

        if let Some(delay_ms) = self.delay_ms() {
            validate_range("lookup.delay_ms", delay_ms, 0, MAX_LOOKUP_DELAY_MS)?;
        }

        if let Some(customer) = self.customer() {
            validate_non_empty_string("checkout.customer", customer)?;
        }

        if let Some(sink) = self.sink() {
            sink.parse::<crate::config::settings::SinkKind>()?;
        }

        Ok(())
    }
}
