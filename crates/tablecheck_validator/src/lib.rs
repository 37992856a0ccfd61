//! # Tablecheck Validator
//!
//! Validation engine for tabular data contracts. This crate provides the
//! core logic for checking an in-memory table against a contract:
//!
//! - Primary-key uniqueness (global and within-group)
//! - Numeric range checks, with non-finite and non-numeric defects kept apart
//! - Strict categorical-domain checks (exact match, no normalization)
//! - Null-policy checks and the per-column null overview
//! - Generic quality checks (missing columns, all-null rows, identifier
//!   duplicates)
//!
//! plus the report emitter that renders a finished run into the
//! violation ledger, null overview, and summary artifacts.
//!
//! ## Example
//!
//! ```rust
//! use tablecheck_core::{ColumnRuleBuilder, ColumnType, ContractBuilder, KeySpec};
//! use tablecheck_validator::{Cell, Row, Table, Validator};
//!
//! let contract = ContractBuilder::new("sessions", "data-quality")
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
//! let mut row = Row::new();
//! row.insert("session_id".to_string(), Cell::from("S-001"));
//! let table = Table::new(vec!["session_id".to_string()], vec![row]);
//!
//! let run = Validator::new().validate(&contract, &table).unwrap();
//! assert!(run.passed);
//! ```

mod domains;
mod engine;
mod error;
mod keys;
mod nulls;
mod quality;
mod ranges;
pub mod report;
mod run;
mod table;

pub use engine::*;
pub use error::*;
pub use run::*;
pub use table::*;
