use crate::adapters::sink::{StdoutSink, TracingSink};
use crate::config::toml_config::{TomlConfig, MAX_LOOKUP_DELAY_MS};
use crate::core::catalog::Catalog;
use crate::core::lookup::DEFAULT_LOOKUP_DELAY;
use crate::domain::model::Category;
use crate::domain::ports::{ConfigProvider, LogSink};
use crate::utils::error::{CatalogError, Result};
use crate::utils::validation::{validate_non_empty_string, validate_range, Validate};
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SinkKind {
    #[default]
    Tracing,
    Stdout,
}

impl FromStr for SinkKind {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "tracing" | "log" => Ok(SinkKind::Tracing),
            "stdout" | "console" => Ok(SinkKind::Stdout),
            other => Err(CatalogError::InvalidConfigValueError {
                field: "logging.sink".to_string(),
                value: other.to_string(),
                reason: "Valid sinks: tracing, stdout".to_string(),
            }),
        }
    }
}

impl SinkKind {
    pub fn build(self) -> Arc<dyn LogSink> {
        match self {
            SinkKind::Tracing => Arc::new(TracingSink),
            SinkKind::Stdout => Arc::new(StdoutSink),
        }
    }
}

/// Logger options known before the full settings are resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LogOptions {
    pub json: bool,
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl LogOptions {
    /// Reads the logging flags plus `logging.json` from the config file when it loads.
    /// A broken file yields the flag values; `Settings::resolve` reports the error.
    pub fn from_cli(cli: &crate::config::CliConfig) -> Self {
        let file_json = cli
            .config
            .as_deref()
            .and_then(|path| TomlConfig::from_file(path).ok())
            .is_some_and(|config| config.json_logs());
        Self {
            json: cli.json_logs || file_json,
            verbose: cli.verbose,
        }
    }
}

/// Fully resolved settings: file values first, command-line overrides on top.
#[derive(Debug, Clone)]
pub struct Settings {
    pub catalog: Catalog,
    pub category: Category,
    pub lookup_delay: Duration,
    pub customer: String,
    pub checkout_ids: Vec<u32>,
    pub sink: SinkKind,
    pub json_logs: bool,
    pub verbose: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            catalog: Catalog::sample(),
            category: Category::JavaScript,
            lookup_delay: DEFAULT_LOOKUP_DELAY,
            customer: "Ann".to_string(),
            checkout_ids: vec![1, 2, 4],
            sink: SinkKind::Tracing,
            json_logs: false,
            verbose: false,
        }
    }
}

impl Settings {
    pub fn from_toml(config: &TomlConfig) -> Result<Self> {
        config.validate()?;

        let defaults = Self::default();
        Ok(Self {
            catalog: config.build_catalog()?,
            category: config.category()?.unwrap_or(defaults.category),
            lookup_delay: config
                .delay_ms()
                .map(Duration::from_millis)
                .unwrap_or(defaults.lookup_delay),
            customer: config
                .customer()
                .map(str::to_string)
                .unwrap_or(defaults.customer),
            checkout_ids: config
                .checkout_ids()
                .map(<[u32]>::to_vec)
                .unwrap_or(defaults.checkout_ids),
            sink: config
                .sink()
                .map(str::parse::<SinkKind>)
                .transpose()?
                .unwrap_or_default(),
            json_logs: config.json_logs(),
            verbose: false,
        })
    }

    #[cfg(feature = "cli")]
    pub fn resolve(cli: &crate::config::CliConfig) -> Result<Self> {
        let mut settings = match &cli.config {
            Some(path) => {
                crate::utils::validation::validate_path("config", path)?;
                Self::from_toml(&TomlConfig::from_file(path)?)?
            }
            None => Self::default(),
        };
        settings.apply_overrides(cli)?;
        settings.validate()?;
        Ok(settings)
    }

    #[cfg(feature = "cli")]
    pub fn apply_overrides(&mut self, cli: &crate::config::CliConfig) -> Result<()> {
        if let Some(category) = &cli.category {
            self.category = category.parse()?;
        }
        if let Some(delay_ms) = cli.delay_ms {
            self.lookup_delay = Duration::from_millis(delay_ms);
        }
        if let Some(customer) = &cli.customer {
            self.customer = customer.clone();
        }
        if !cli.checkout_ids.is_empty() {
            self.checkout_ids = cli.checkout_ids.clone();
        }
        if let Some(sink) = &cli.sink {
            self.sink = sink.parse()?;
        }
        self.json_logs |= cli.json_logs;
        self.verbose = cli.verbose;
        Ok(())
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("checkout.customer", &self.customer)?;
        let delay_ms = u64::try_from(self.lookup_delay.as_millis()).unwrap_or(u64::MAX);
        validate_range("lookup.delay_ms", delay_ms, 0, MAX_LOOKUP_DELAY_MS)?;
        Ok(())
    }
}

impl ConfigProvider for Settings {
    fn category(&self) -> Category {
        self.category
    }

    fn lookup_delay(&self) -> Duration {
        self.lookup_delay
    }

    fn customer(&self) -> &str {
        &self.customer
    }

    fn checkout_ids(&self) -> &[u32] {
        &self.checkout_ids
    }
}
