//! # ECS Error Types
//!
//! The component operations themselves never fail: absence is reported as
//! `None` or a `false` flag. Errors only come from id exhaustion and from
//! loading configuration.

use thiserror::Error;

/// Errors that can occur around the ECS core.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EcsError {
    /// Every 32-bit entity id has already been handed out.
    #[error("entity ids exhausted after issuing {issued} ids")]
    IdsExhausted {
        /// How many ids were issued before running out.
        issued: u64,
    },

    /// Configuration failed to parse or validate.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Configuration file could not be read.
    #[error("failed to read configuration from {path}: {message}")]
    ConfigIo {
        /// The path that was read.
        path: String,
        /// The underlying I/O error message.
        message: String,
    },
}

/// Result type for ECS operations.
pub type EcsResult<T> = Result<T, EcsError>;
