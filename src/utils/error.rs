use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Config file error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Compute CLI '{binary}' is not available: {reason}")]
    CliUnavailable { binary: String, reason: String },

    #[error("'{command}' exited with {status}: {stderr}")]
    CliCommandFailed {
        command: String,
        status: String,
        stderr: String,
    },

    #[error("Unexpected API response for {resource}: {reason}")]
    MalformedResponse { resource: String, reason: String },

    #[error("Unrecognized disk source path: {path}")]
    UnknownDiskScope { path: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Missing required configuration field: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    CloudApi,
    Output,
    Internal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl ReportError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            ReportError::ConfigError { .. }
            | ReportError::MissingConfigError { .. }
            | ReportError::InvalidConfigValueError { .. }
            | ReportError::TomlError(_) => ErrorCategory::Configuration,
            ReportError::CliUnavailable { .. }
            | ReportError::CliCommandFailed { .. }
            | ReportError::MalformedResponse { .. } => ErrorCategory::CloudApi,
            ReportError::IoError(_) => ErrorCategory::Output,
            ReportError::UnknownDiskScope { .. } => ErrorCategory::Internal,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            ReportError::ConfigError { .. }
            | ReportError::MissingConfigError { .. }
            | ReportError::InvalidConfigValueError { .. }
            | ReportError::TomlError(_) => ErrorSeverity::Medium,
            ReportError::CliUnavailable { .. } => ErrorSeverity::Critical,
            ReportError::CliCommandFailed { .. }
            | ReportError::MalformedResponse { .. }
            | ReportError::IoError(_)
            | ReportError::UnknownDiskScope { .. } => ErrorSeverity::High,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            ReportError::CliUnavailable { binary, .. } => {
                format!("The '{}' command was not found on this machine", binary)
            }
            ReportError::CliCommandFailed {
                command, stderr, ..
            } => {
                format!("'{}' failed: {}", command, stderr.trim())
            }
            ReportError::MalformedResponse { resource, .. } => {
                format!("The API returned an unexpected payload for {}", resource)
            }
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self.category() {
            ErrorCategory::Configuration => {
                "Check the command-line arguments and the TOML config file".to_string()
            }
            ErrorCategory::CloudApi => match self {
                ReportError::CliUnavailable { binary, .. } => format!(
                    "Install the Google Cloud SDK and make sure '{}' is on PATH \
                     (https://cloud.google.com/sdk/docs/install)",
                    binary
                ),
                _ => "Verify the project/instance/zone exist and that \
                      'gcloud auth login' has been run"
                    .to_string(),
            },
            ErrorCategory::Output => {
                "Check that the output directory is writable and has free space".to_string()
            }
            ErrorCategory::Internal => {
                "Re-run with --verbose and inspect the raw describe output".to_string()
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, ReportError>;
