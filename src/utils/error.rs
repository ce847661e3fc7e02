use thiserror::Error;

#[derive(Error, Debug)]
pub enum SignatureError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse config '{path}': {message}")]
    ConfigParseError { path: String, message: String },

    #[error("Invalid value for '{field}': '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required config field: {field}")]
    MissingConfigError { field: String },

    #[error("No comment syntax known for file: {path}")]
    UnsupportedExtension { path: String },

    #[error("{failed} of {total} file(s) could not be signed")]
    PartialFailure { failed: usize, total: usize },

    #[error("File watcher error: {message}")]
    WatchError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Io,
    Configuration,
    FileType,
    Watcher,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl SignatureError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            SignatureError::IoError(_) | SignatureError::PartialFailure { .. } => ErrorCategory::Io,
            SignatureError::ConfigParseError { .. }
            | SignatureError::InvalidConfigValueError { .. }
            | SignatureError::MissingConfigError { .. } => ErrorCategory::Configuration,
            SignatureError::UnsupportedExtension { .. } => ErrorCategory::FileType,
            SignatureError::WatchError { .. } => ErrorCategory::Watcher,
        }
    }

    /// Unsupported files are expected and only warrant a warning.
    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::FileType => ErrorSeverity::Low,
            ErrorCategory::Io => ErrorSeverity::Medium,
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::Watcher => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            SignatureError::IoError(_) => {
                "Check that the file exists and that you have permission to read and write it"
            }
            SignatureError::PartialFailure { .. } => {
                "Only the files marked as failed are unchanged; fix them and sign just those files"
            }
            SignatureError::ConfigParseError { .. } => {
                "Fix the TOML syntax or regenerate the file with `add-signature init-config --force`"
            }
            SignatureError::InvalidConfigValueError { .. }
            | SignatureError::MissingConfigError { .. } => {
                "Review the [signature] table in your config file"
            }
            SignatureError::UnsupportedExtension { .. } => {
                "Run `add-signature extensions` to list the supported file types"
            }
            SignatureError::WatchError { .. } => {
                "Make sure the watched directory exists and the OS watch limit is not exhausted"
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            SignatureError::IoError(e) => format!("Could not access file: {}", e),
            SignatureError::PartialFailure { failed, total } => {
                format!("{} of {} file(s) could not be signed", failed, total)
            }
            SignatureError::ConfigParseError { path, .. } => {
                format!("Config file '{}' is not valid TOML", path)
            }
            SignatureError::InvalidConfigValueError { field, reason, .. } => {
                format!("Config value '{}' is invalid: {}", field, reason)
            }
            SignatureError::MissingConfigError { field } => {
                format!("Config value '{}' is required", field)
            }
            SignatureError::UnsupportedExtension { path } => {
                format!("File type not supported: {}", path)
            }
            SignatureError::WatchError { message } => format!("Watching failed: {}", message),
        }
    }

    /// Process exit code for the CLI; `0` means the error is only a warning.
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }
}

pub type Result<T> = std::result::Result<T, SignatureError>;
