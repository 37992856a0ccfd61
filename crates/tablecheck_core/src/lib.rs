//! # Tablecheck Core
//!
//! Core contract model for the tablecheck validation engine.
//!
//! This crate provides the typed, in-memory representation of a data
//! contract: the declarative specification of expected columns, cell
//! types, value domains, null policy, and primary-key constraints for one
//! tabular dataset. The model is storage-agnostic; parsing contract files
//! into it lives in `tablecheck_parser`, and rule evaluation lives in
//! `tablecheck_validator`.
//!
//! ## Key Concepts
//!
//! - **Contract**: the full validation specification for a dataset
//! - **ColumnRule**: expected type, domain, and null policy of one column
//! - **KeySpec**: global or within-group uniqueness constraint
//! - **RangeRule**: inclusive numeric bounds for one column
//!
//! ## Example
//!
//! ```rust
//! use tablecheck_core::{ColumnRuleBuilder, ColumnType, ContractBuilder, KeySpec};
//!
//! let contract = ContractBuilder::new("purchases", "data-quality")
//!     .column(
//!         ColumnRuleBuilder::new("session_id", ColumnType::Text)
//!             .allow_null(false)
//!             .build(),
//!     )
//!     .primary_key(KeySpec::Global {
//!         column: "session_id".to_string(),
//!     })
//!     .build();
//!
//! assert!(contract.ensure_consistent().is_ok());
//! ```

pub mod builder;
pub mod contract;
pub mod error;

pub use builder::*;
pub use contract::*;
pub use error::*;
