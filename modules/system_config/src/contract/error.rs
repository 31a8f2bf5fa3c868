//! Contract error types for system config
//!
//! These errors are transport-agnostic and used for inter-module communication.

/// System config domain errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The store has not loaded or created the record yet
    NotInitialized,
    /// The editor view could not be rendered
    Render {
        /// Render failure details
        message: String,
    },
    /// A submitted form could not be decoded
    Submission {
        /// Decode failure details
        message: String,
    },
    /// Decoded values failed validation
    Validation {
        /// Validation error message
        message: String,
    },
    /// Internal error
    Internal,
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotInitialized => {
                write!(f, "System config is not initialized")
            }
            Self::Render { message } => {
                write!(f, "Editor render failed: {}", message)
            }
            Self::Submission { message } => {
                write!(f, "Invalid submission: {}", message)
            }
            Self::Validation { message } => {
                write!(f, "Validation error: {}", message)
            }
            Self::Internal => {
                write!(f, "Internal error")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
