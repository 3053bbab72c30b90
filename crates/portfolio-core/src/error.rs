//! Error types for Portfolio

use std::fmt;

use thiserror::Error;

/// Result type alias using Portfolio's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Step of an image upload that failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadStage {
    /// The request carried no usable `image` file field
    UploadFile,
    /// The target file could not be created
    TargetFile,
    /// The upload bytes could not be written to the target file
    CopyFile,
}

impl UploadStage {
    pub fn as_str(&self) -> &'static str {
        match self {
            UploadStage::UploadFile => "upload file",
            UploadStage::TargetFile => "target file",
            UploadStage::CopyFile => "copy file",
        }
    }
}

impl fmt::Display for UploadStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Portfolio error types with helpful messages and suggestions
#[derive(Error, Debug)]
pub enum Error {
    // Entity errors (E001-E099)
    #[error("Project at position {index} not found ({len} projects listed).")]
    ProjectNotFound { index: usize, len: usize },

    #[error("Invalid project id '{0}'. Project ids are non-negative integers.")]
    InvalidProjectId(String),

    // Config errors (E600-E699)
    #[error("Configuration error: {0}")]
    ConfigError(String),

    // Input errors (E800-E899)
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Failed to parse form: {0}")]
    FormParse(String),

    #[error("Request body too large: {0}")]
    PayloadTooLarge(String),

    // Upload errors (E900-E999)
    #[error("Image upload failed ({stage}): {message}")]
    UploadFailed { stage: UploadStage, message: String },
}

impl Error {
    /// Build an upload failure for the given stage
    pub fn upload(stage: UploadStage, message: impl Into<String>) -> Self {
        Self::UploadFailed {
            stage,
            message: message.into(),
        }
    }

    /// Get error code for this error type
    pub fn code(&self) -> &'static str {
        match self {
            Self::ProjectNotFound { .. } => "E002",
            Self::InvalidProjectId(_) => "E003",
            Self::ConfigError(_) => "E600",
            Self::InvalidInput(_) => "E800",
            Self::FormParse(_) => "E801",
            Self::PayloadTooLarge(_) => "E802",
            Self::UploadFailed { .. } => "E900",
        }
    }

    /// Get suggestion for how to fix this error
    pub fn suggestion(&self) -> Option<String> {
        match self {
            Self::ProjectNotFound { len, .. } if *len == 0 => {
                Some("Add a project first at /add-project".to_string())
            }
            Self::ProjectNotFound { len, .. } => {
                Some(format!("Use a position between 0 and {}", len - 1))
            }
            Self::InvalidInput(_) => Some("Dates use the YYYY-MM-DD format".to_string()),
            Self::UploadFailed {
                stage: UploadStage::UploadFile,
                ..
            } => Some("Attach an image in the `image` field".to_string()),
            Self::PayloadTooLarge(_) => {
                Some("Upload a smaller image or raise server.max_upload_bytes".to_string())
            }
            Self::ConfigError(_) => {
                Some("Keep storage.upload_dir inside storage.public_dir".to_string())
            }
            _ => None,
        }
    }

    /// Whether the error was caused by the request rather than the server
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            Self::ProjectNotFound { .. }
                | Self::InvalidProjectId(_)
                | Self::InvalidInput(_)
                | Self::FormParse(_)
                | Self::PayloadTooLarge(_)
                | Self::UploadFailed {
                    stage: UploadStage::UploadFile,
                    ..
                }
        )
    }
}
