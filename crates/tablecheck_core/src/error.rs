//! Error types for data contracts.
//!
//! A `ContractError` is always a configuration problem: the contract
//! itself is malformed or inconsistent. Data content never produces one.

use thiserror::Error;

/// Result type for contract operations.
pub type Result<T> = std::result::Result<T, ContractError>;

/// Malformed or inconsistent contract.
#[derive(Error, Debug)]
pub enum ContractError {
    /// Contract declares no columns at all
    #[error("contract defines no columns")]
    EmptyColumns,

    /// The same column is declared twice
    #[error("duplicate column declaration: '{0}'")]
    DuplicateColumn(String),

    /// A key, range, or identifier references an undeclared column
    #[error("column '{column}' referenced by {referenced_by} is not declared in columns")]
    UnknownColumn {
        /// The undeclared column name
        column: String,
        /// Contract section holding the dangling reference
        referenced_by: String,
    },

    /// A range with min greater than max
    #[error("invalid range for column '{column}': min {min} exceeds max {max}")]
    InvalidRange {
        /// Column the range applies to
        column: String,
        /// Configured minimum
        min: f64,
        /// Configured maximum
        max: f64,
    },
}

impl ContractError {
    /// Creates a new dangling-reference error.
    pub fn unknown_column(column: impl Into<String>, referenced_by: impl Into<String>) -> Self {
        Self::UnknownColumn {
            column: column.into(),
            referenced_by: referenced_by.into(),
        }
    }
}
