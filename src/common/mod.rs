//! Common types shared across the DDR3 model.
//!
//! This module provides the error type used by the construction path and
//! the state-machine table.

/// Error types for parameter lookup and transition dispatch.
pub mod error;

pub use error::ModelError;
