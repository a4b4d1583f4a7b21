use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Index {index} is out of range.")]
    OutOfRange { index: usize, len: usize },

    #[error("Type mismatch: {message}")]
    TypeMismatch { message: String },

    #[error("{message}")]
    NotFound { message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Background task failed: {0}")]
    TaskError(#[from] tokio::task::JoinError),

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration field: {field}")]
    MissingConfigError { field: String },

    #[error("Validation error: {message}")]
    ValidationError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Lookup,
    Input,
    Configuration,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl CatalogError {
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    pub fn type_mismatch(message: impl Into<String>) -> Self {
        Self::TypeMismatch {
            message: message.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::OutOfRange { .. } | Self::NotFound { .. } => ErrorCategory::Lookup,
            Self::TypeMismatch { .. } | Self::ValidationError { .. } => ErrorCategory::Input,
            Self::ConfigValidationError { .. }
            | Self::InvalidConfigValueError { .. }
            | Self::MissingConfigError { .. } => ErrorCategory::Configuration,
            Self::IoError(_) | Self::TaskError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            // An empty search result is reported, not fatal.
            Self::NotFound { .. } => ErrorSeverity::Low,
            Self::OutOfRange { .. } | Self::TypeMismatch { .. } => ErrorSeverity::Medium,
            Self::ValidationError { .. }
            | Self::ConfigValidationError { .. }
            | Self::InvalidConfigValueError { .. }
            | Self::MissingConfigError { .. } => ErrorSeverity::High,
            Self::IoError(_) | Self::TaskError(_) => ErrorSeverity::Critical,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::OutOfRange { index, len } => {
                format!("There is no book at position {} (catalog has {} books)", index, len)
            }
            Self::NotFound { message } => message.clone(),
            Self::TypeMismatch { message } => format!("Unexpected value: {}", message),
            Self::IoError(e) => format!("Could not read a file: {}", e),
            Self::TaskError(_) => "A background lookup did not complete".to_string(),
            Self::ConfigValidationError { field, .. }
            | Self::InvalidConfigValueError { field, .. }
            | Self::MissingConfigError { field } => {
                format!("Configuration problem with '{}'", field)
            }
            Self::ValidationError { message } => message.clone(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Lookup => "Check the index, id or category against the catalog",
            ErrorCategory::Input => "Check the value passed in",
            ErrorCategory::Configuration => "Fix the configuration file or command-line flags",
            ErrorCategory::System => "Check file permissions and try again",
        }
    }
}

pub type Result<T> = std::result::Result<T, CatalogError>;
