//! Error types and handling for the `TripWeaver` application

use thiserror::Error;

/// Main error type for the `TripWeaver` application
#[derive(Error, Debug)]
pub enum TripWeaverError {
    /// Configuration-related errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// External API communication errors (weather, classifier)
    #[error("API error: {message}")]
    Api { message: String },

    /// Input validation errors
    #[error("Invalid input: {message}")]
    Validation { message: String },

    /// Place catalog loading errors
    #[error("Catalog error: {message}")]
    Catalog { message: String },

    /// I/O operation errors
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },

    /// General application errors
    #[error("Application error: {message}")]
    General { message: String },
}

impl TripWeaverError {
    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a new API error
    pub fn api<S: Into<String>>(message: S) -> Self {
        Self::Api {
            message: message.into(),
        }
    }

    /// Create a new validation error
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create a new catalog error
    pub fn catalog<S: Into<String>>(message: S) -> Self {
        Self::Catalog {
            message: message.into(),
        }
    }

    /// Create a new general error
    pub fn general<S: Into<String>>(message: S) -> Self {
        Self::General {
            message: message.into(),
        }
    }

    /// Get a user-friendly error message
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            TripWeaverError::Config { .. } => {
                "Configuration error. Please check your config file and API keys.".to_string()
            }
            TripWeaverError::Api { .. } => {
                "Unable to connect to external services. Please check your internet connection."
                    .to_string()
            }
            TripWeaverError::Validation { message } => {
                format!("Invalid input: {message}")
            }
            TripWeaverError::Catalog { .. } => {
                "Place catalog could not be loaded. Please check the data directory.".to_string()
            }
            TripWeaverError::Io { .. } => {
                "File operation failed. Please check file permissions.".to_string()
            }
            TripWeaverError::General { message } => message.clone(),
        }
    }
}
