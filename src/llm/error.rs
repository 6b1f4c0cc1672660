//! Generation failure types.

use std::fmt;
use thiserror::Error;

/// Why a generation request failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GenerationErrorKind {
    /// No API key was configured
    MissingApiKey,
    /// The request never produced an HTTP response
    Network,
    /// The service rejected the credentials (401/403)
    Auth,
    /// Any other non-success HTTP status
    Service { status_code: u16 },
    /// The response body was not the expected JSON
    MalformedResponse,
    /// The response decoded but held no text
    EmptyResponse,
}

impl fmt::Display for GenerationErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GenerationErrorKind::MissingApiKey => write!(f, "missing API key"),
            GenerationErrorKind::Network => write!(f, "network error"),
            GenerationErrorKind::Auth => write!(f, "authentication error"),
            GenerationErrorKind::Service { status_code } => write!(f, "HTTP {}", status_code),
            GenerationErrorKind::MalformedResponse => write!(f, "malformed response"),
            GenerationErrorKind::EmptyResponse => write!(f, "empty response"),
        }
    }
}

/// A failed generation request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct GenerationError {
    pub kind: GenerationErrorKind,
    pub message: String,
}

impl GenerationError {
    pub fn new(kind: GenerationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn missing_api_key() -> Self {
        Self::new(
            GenerationErrorKind::MissingApiKey,
            "Gemini API key is missing. Set GEMINI_API_KEY or llm.api_key in config.",
        )
    }

    pub fn network(message: impl Into<String>) -> Self {
        Self::new(GenerationErrorKind::Network, message)
    }

    pub fn malformed(message: impl Into<String>) -> Self {
        Self::new(GenerationErrorKind::MalformedResponse, message)
    }

    pub fn empty() -> Self {
        Self::new(
            GenerationErrorKind::EmptyResponse,
            "Gemini response did not contain any text",
        )
    }

    /// Classify a non-success HTTP status.
    pub fn from_status(status_code: u16, detail: &str) -> Self {
        let kind = match status_code {
            401 | 403 => GenerationErrorKind::Auth,
            _ => GenerationErrorKind::Service { status_code },
        };
        let message = if detail.is_empty() {
            format!("Gemini returned HTTP {}", status_code)
        } else {
            format!("Gemini returned HTTP {}: {}", status_code, detail)
        };
        Self::new(kind, message)
    }
}
