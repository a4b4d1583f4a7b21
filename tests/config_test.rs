use book_catalog::config::toml_config::TomlConfig;
use book_catalog::domain::model::Category;
use book_catalog::domain::ports::ConfigProvider;
use book_catalog::utils::validation::Validate;
use book_catalog::{CatalogError, Settings, SinkKind};
use std::io::Write;
use std::time::Duration;
use tempfile::NamedTempFile;

const FULL_CONFIG: &str = r#"
[[catalog.books]]
id = 10
title = "Essential TypeScript"
author = "Adam Freeman"
available = true
category = "TypeScript"
pages = 600

[[catalog.books]]
id = 11
title = "Angular Development"
author = "Yakov Fain"
available = false
category = "Angular"

[lookup]
category = "TypeScript"
delay_ms = 150

[checkout]
customer = "Jack"
ids = [11, 10]

[logging]
sink = "stdout"
json = true
"#;

#[test]
fn test_full_config_resolves_into_settings() {
    let config = TomlConfig::from_toml_str(FULL_CONFIG).unwrap();
    let settings = Settings::from_toml(&config).unwrap();

    assert_eq!(settings.catalog.len(), 2);
    assert_eq!(settings.catalog.book_by_id(10).and_then(|b| b.pages), Some(600));
    assert_eq!(settings.category(), Category::TypeScript);
    assert_eq!(settings.lookup_delay(), Duration::from_millis(150));
    assert_eq!(settings.customer(), "Jack");
    assert_eq!(settings.checkout_ids(), &[11, 10]);
    assert_eq!(settings.sink, SinkKind::Stdout);
    assert!(settings.json_logs);
}

#[test]
fn test_config_from_file() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(FULL_CONFIG.as_bytes()).unwrap();

    let config = TomlConfig::from_file(file.path()).unwrap();
    assert!(config.validate().is_ok());
    assert_eq!(config.customer(), Some("Jack"));
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = TomlConfig::from_file(dir.path().join("absent.toml")).unwrap_err();
    assert!(matches!(err, CatalogError::IoError(_)));
}

#[test]
fn test_env_var_substitution() {
    std::env::set_var("BOOK_CATALOG_TEST_CUSTOMER", "Anton");

    let config = TomlConfig::from_toml_str(
        r#"
[checkout]
customer = "${BOOK_CATALOG_TEST_CUSTOMER}"
"#,
    )
    .unwrap();

    assert_eq!(config.customer(), Some("Anton"));
}

#[test]
fn test_duplicate_book_ids_rejected() {
    let config = TomlConfig::from_toml_str(
        r#"
[catalog]
books = [
    { id = 1, title = "A", author = "X", available = true, category = "CSS" },
    { id = 1, title = "B", author = "Y", available = true, category = "HTML" },
]
"#,
    )
    .unwrap();

    let err = config.validate().unwrap_err();
    assert!(matches!(err, CatalogError::InvalidConfigValueError { .. }));
    assert!(Settings::from_toml(&config).is_err());
}

#[test]
fn test_invalid_values_rejected() {
    let unknown_category = TomlConfig::from_toml_str("[lookup]\ncategory = \"Cobol\"\n").unwrap();
    assert!(unknown_category.validate().is_err());

    let too_slow = TomlConfig::from_toml_str("[lookup]\ndelay_ms = 600000\n").unwrap();
    assert!(too_slow.validate().is_err());

    let bad_sink = TomlConfig::from_toml_str("[logging]\nsink = \"syslog\"\n").unwrap();
    assert!(bad_sink.validate().is_err());

    let blank_customer = TomlConfig::from_toml_str("[checkout]\ncustomer = \"  \"\n").unwrap();
    assert!(blank_customer.validate().is_err());
}

#[test]
fn test_unknown_book_category_fails_to_parse() {
    let err = TomlConfig::from_toml_str(
        r#"
[catalog]
books = [{ id = 1, title = "A", author = "X", available = true, category = "Cobol" }]
"#,
    )
    .unwrap_err();
    assert!(matches!(err, CatalogError::ConfigValidationError { .. }));
}

#[test]
fn test_book_category_matches_case_insensitively() {
    let config = TomlConfig::from_toml_str(
        r#"
[catalog]
books = [
    { id = 1, title = "A", author = "X", available = true, category = "css" },
    { id = 2, title = "B", author = "Y", available = true, category = "typescript" },
]
"#,
    )
    .unwrap();

    let catalog = config.build_catalog().unwrap();
    assert_eq!(catalog.book_by_id(1).map(|b| b.category), Some(Category::Css));
    assert_eq!(catalog.book_by_id(2).map(|b| b.category), Some(Category::TypeScript));
}

#[cfg(feature = "cli")]
mod cli {
    use super::*;
    use book_catalog::{CliConfig, LogOptions};
    use clap::Parser;

    #[test]
    fn test_cli_overrides_file_values() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(FULL_CONFIG.as_bytes()).unwrap();
        let path = file.path().to_str().unwrap().to_string();

        let cli = CliConfig::parse_from([
            "book-catalog",
            "--config",
            path.as_str(),
            "--category",
            "css",
            "--delay-ms",
            "5",
            "--checkout-ids",
            "10,11",
            "--sink",
            "tracing",
        ]);
        let settings = Settings::resolve(&cli).unwrap();

        assert_eq!(settings.category(), Category::Css);
        assert_eq!(settings.lookup_delay(), Duration::from_millis(5));
        assert_eq!(settings.checkout_ids(), &[10, 11]);
        assert_eq!(settings.customer(), "Jack");
        assert_eq!(settings.sink, SinkKind::Tracing);
    }

    #[test]
    fn test_cli_without_file_uses_defaults() {
        let cli = CliConfig::parse_from(["book-catalog"]);
        let settings = Settings::resolve(&cli).unwrap();

        assert_eq!(settings.customer(), "Ann");
        assert_eq!(settings.category(), Category::JavaScript);
        assert_eq!(settings.catalog.len(), 4);
    }

    #[test]
    fn test_log_options_read_before_resolution() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(FULL_CONFIG.as_bytes()).unwrap();
        let path = file.path().to_str().unwrap().to_string();

        let cli = CliConfig::parse_from(["book-catalog", "--config", path.as_str(), "-v"]);
        assert_eq!(
            LogOptions::from_cli(&cli),
            LogOptions {
                json: true,
                verbose: true
            }
        );
    }

    #[test]
    fn test_log_options_survive_broken_config() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"[lookup\ncategory = ").unwrap();
        let path = file.path().to_str().unwrap().to_string();

        let cli = CliConfig::parse_from(["book-catalog", "--config", path.as_str()]);
        assert_eq!(LogOptions::from_cli(&cli), LogOptions::default());
        assert!(Settings::resolve(&cli).is_err());
    }

    #[test]
    fn test_cli_rejects_unknown_category() {
        let cli = CliConfig::parse_from(["book-catalog", "--category", "Cobol"]);
        assert!(Settings::resolve(&cli).is_err());
    }
}
