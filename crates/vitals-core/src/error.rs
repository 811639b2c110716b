//! Shared error type across vitals crates.

use thiserror::Error;

/// Client-facing error codes (stable API).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientCode {
    /// Numeric value failed to parse for its kind.
    Validation,
    /// Kind outside {gauge, counter}.
    InvalidKind,
    /// Id already stored under a different kind.
    TypeConflict,
    /// Id absent or stored under another kind.
    NotFound,
    /// JSON body (de)serialization failure.
    Encoding,
    /// Network failure while reporting.
    Transport,
    /// Internal server error.
    Internal,
}

impl ClientCode {
    /// String representation used in logs.
    pub fn as_str(self) -> &'static str {
        match self {
            ClientCode::Validation => "VALIDATION",
            ClientCode::InvalidKind => "INVALID_KIND",
            ClientCode::TypeConflict => "TYPE_CONFLICT",
            ClientCode::NotFound => "NOT_FOUND",
            ClientCode::Encoding => "ENCODING",
            ClientCode::Transport => "TRANSPORT",
            ClientCode::Internal => "INTERNAL",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, VitalsError>;

/// Unified error type used by core, server, and agent.
#[derive(Debug, Error)]
pub enum VitalsError {
    #[error("invalid value: {0}")]
    Validation(String),
    #[error("invalid metric kind: {0}")]
    InvalidKind(String),
    #[error("metric {id} is a {stored}, refusing {requested} write")]
    TypeConflict {
        id: String,
        stored: &'static str,
        requested: &'static str,
    },
    #[error("metric not found")]
    NotFound,
    #[error("encoding: {0}")]
    Encoding(String),
    #[error("transport: {0}")]
    Transport(String),
    #[error("internal: {0}")]
    Internal(String),
}

impl VitalsError {
    /// Map internal error to a stable client-facing code.
    pub fn client_code(&self) -> ClientCode {
        match self {
            VitalsError::Validation(_) => ClientCode::Validation,
            VitalsError::InvalidKind(_) => ClientCode::InvalidKind,
            VitalsError::TypeConflict { .. } => ClientCode::TypeConflict,
            VitalsError::NotFound => ClientCode::NotFound,
            VitalsError::Encoding(_) => ClientCode::Encoding,
            VitalsError::Transport(_) => ClientCode::Transport,
            VitalsError::Internal(_) => ClientCode::Internal,
        }
    }
}
