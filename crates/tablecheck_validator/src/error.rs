//! Error types for validation runs.
//!
//! Only configuration and structurally unusable input are fatal; data
//! content defects are reported as violations and never surface here.

use tablecheck_core::ContractError;
use thiserror::Error;

/// The table cannot be validated at all.
#[derive(Debug, Error)]
pub enum DataError {
    /// A table with no columns is not a dataset
    #[error("table has no columns")]
    NoColumns,
}

/// Fatal validation failure, raised before any rule executes.
#[derive(Debug, Error)]
pub enum ValidateError {
    /// Malformed or inconsistent contract
    #[error(transparent)]
    Contract(#[from] ContractError),

    /// Structurally unusable table
    #[error(transparent)]
    Data(#[from] DataError),
}
