//! Data contract types and structures.
//!
//! This module contains the core types for describing a tabular data
//! contract: per-column rules, primary-key specifications, and numeric
//! range bounds.

use serde::{Deserialize, Serialize};

use crate::{ContractError, Result};

/// A data contract describing the expected shape and quality of a dataset.
///
/// A `Contract` is the validation specification for one tabular dataset.
/// It lists the expected columns with their types, value domains, and null
/// policy, the primary-key constraints the data must satisfy, and inclusive
/// numeric bounds for selected columns.
///
/// The order of `columns` is the declaration order; reports use it as the
/// tie-break order, so it is preserved verbatim from the contract source.
///
/// # Example
///
/// ```rust
/// use tablecheck_core::{ColumnRule, ColumnType, Contract, KeySpec};
///
/// let contract = Contract {
///     name: "sessions".to_string(),
///     version: "1.0.0".to_string(),
///     owner: "data-quality".to_string(),
///     description: None,
///     columns: vec![ColumnRule {
///         name: "session_id".to_string(),
///         column_type: ColumnType::Text,
///         required: true,
///         allow_null: false,
///         allowed_values: None,
///         description: None,
///     }],
///     primary_keys: vec![KeySpec::Global {
///         column: "session_id".to_string(),
///     }],
///     ranges: vec![],
///     identifier: None,
/// };
/// assert!(contract.ensure_consistent().is_ok());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Contract {
    /// Unique name identifying this contract
    pub name: String,

    /// Semantic version of the contract (e.g., "1.0.0")
    #[serde(default = "default_version")]
    pub version: String,

    /// Team or individual responsible for this contract
    #[serde(default)]
    pub owner: String,

    /// Human-readable description of the dataset
    pub description: Option<String>,

    /// Per-column rules, in declaration order
    pub columns: Vec<ColumnRule>,

    /// Primary-key uniqueness constraints, in evaluation order
    #[serde(default)]
    pub primary_keys: Vec<KeySpec>,

    /// Inclusive numeric bounds per column
    #[serde(default)]
    pub ranges: Vec<RangeRule>,

    /// Auxiliary identifier column expected to be globally unique,
    /// distinct from any primary key
    pub identifier: Option<String>,
}

fn default_version() -> String {
    "1.0.0".to_string()
}

impl Contract {
    /// Looks up a column rule by name.
    pub fn column(&self, name: &str) -> Option<&ColumnRule> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// Returns the column names in declaration order.
    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|c| c.name.as_str())
    }

    /// Verifies the contract's internal consistency.
    ///
    /// Every column referenced by `primary_keys`, `ranges`, or
    /// `identifier` must be declared in `columns`, column names must be
    /// unique, and every range must have `min <= max`. A contract that
    /// fails here is a configuration error and must never reach rule
    /// evaluation.
    pub fn ensure_consistent(&self) -> Result<()> {
        if self.columns.is_empty() {
            return Err(ContractError::EmptyColumns);
        }

        let mut seen = std::collections::HashSet::new();
        for rule in &self.columns {
            if !seen.insert(rule.name.as_str()) {
                return Err(ContractError::DuplicateColumn(rule.name.clone()));
            }
        }

        for key in &self.primary_keys {
            for column in key.referenced_columns() {
                if self.column(column).is_none() {
                    return Err(ContractError::unknown_column(column, "primary_keys"));
                }
            }
        }

        for range in &self.ranges {
            if self.column(&range.column).is_none() {
                return Err(ContractError::unknown_column(&range.column, "ranges"));
            }
            if range.min > range.max {
                return Err(ContractError::InvalidRange {
                    column: range.column.clone(),
                    min: range.min,
                    max: range.max,
                });
            }
        }

        if let Some(identifier) = &self.identifier {
            if self.column(identifier).is_none() {
                return Err(ContractError::unknown_column(identifier, "identifier"));
            }
        }

        Ok(())
    }
}

/// Expected cell type for a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnType {
    /// Whole numbers
    Integer,
    /// Floating point numbers
    Float,
    /// Free-form text
    Text,
    /// Text or integer codes drawn from a fixed domain
    Categorical,
}

impl ColumnType {
    /// Returns the lowercase wire name of this type.
    pub fn as_str(&self) -> &'static str {
        match self {
            ColumnType::Integer => "integer",
            ColumnType::Float => "float",
            ColumnType::Text => "text",
            ColumnType::Categorical => "categorical",
        }
    }

    /// Returns true for `Integer` and `Float` columns.
    pub fn is_numeric(&self) -> bool {
        matches!(self, ColumnType::Integer | ColumnType::Float)
    }
}

/// Validation rules for one column.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColumnRule {
    /// Column name as it appears in the dataset header
    pub name: String,

    /// Expected cell type
    #[serde(rename = "type")]
    pub column_type: ColumnType,

    /// Whether the column must be present in the dataset
    #[serde(default = "default_true")]
    pub required: bool,

    /// Whether null cells are permitted
    #[serde(default)]
    pub allow_null: bool,

    /// Optional closed value domain for this column
    #[serde(rename = "allowed")]
    pub allowed_values: Option<AllowedValues>,

    /// Optional human-readable description
    pub description: Option<String>,
}

fn default_true() -> bool {
    true
}

/// A closed value domain: either an explicit set of members or an
/// inclusive integer span.
///
/// Membership is exact. No case folding, trimming, or other normalization
/// is applied; near-matches are violations by design.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AllowedValues {
    /// Explicit members, compared byte-for-byte (text) or by value (integers)
    Set(Vec<DomainValue>),
    /// Inclusive integer span, e.g. `{ min: 0, max: 1 }` for a binary flag
    Span {
        /// Smallest allowed value
        min: i64,
        /// Largest allowed value
        max: i64,
    },
}

impl AllowedValues {
    /// Renders the domain for report output.
    pub fn describe(&self) -> String {
        match self {
            AllowedValues::Set(values) => {
                let names: Vec<String> = values.iter().map(DomainValue::to_string).collect();
                format!("{{{}}}", names.join(", "))
            }
            AllowedValues::Span { min, max } => format!("[{min}, {max}]"),
        }
    }
}

/// A single member of a value domain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DomainValue {
    /// Integer code
    Int(i64),
    /// Exact text label
    Text(String),
}

impl std::fmt::Display for DomainValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DomainValue::Int(i) => write!(f, "{i}"),
            DomainValue::Text(s) => write!(f, "{s}"),
        }
    }
}

/// A primary-key uniqueness constraint.
///
/// `Global` requires a column's non-null values to be unique across the
/// whole dataset. `PerGroup` requires them to be unique within each
/// partition of a grouping column (e.g. session ids unique within a day).
/// Null key values never collide; null handling for key columns is the
/// null-policy check's concern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "scope", rename_all = "snake_case")]
pub enum KeySpec {
    /// Column values must be unique across the whole table
    Global {
        /// Key column name
        column: String,
    },
    /// Column values must be unique within each group
    PerGroup {
        /// Column whose values partition the table
        group_by: String,
        /// Key column name
        column: String,
    },
}

impl KeySpec {
    /// Returns the key column this constraint protects.
    pub fn column(&self) -> &str {
        match self {
            KeySpec::Global { column } | KeySpec::PerGroup { column, .. } => column,
        }
    }

    /// Returns every column this constraint references.
    pub fn referenced_columns(&self) -> Vec<&str> {
        match self {
            KeySpec::Global { column } => vec![column],
            KeySpec::PerGroup { group_by, column } => vec![group_by, column],
        }
    }
}

/// Inclusive numeric bounds for one column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RangeRule {
    /// Column name
    pub column: String,
    /// Minimum allowed value (inclusive)
    pub min: f64,
    /// Maximum allowed value (inclusive)
    pub max: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ColumnRuleBuilder, ContractBuilder};
    use pretty_assertions::assert_eq;

    fn minimal_contract() -> Contract {
        ContractBuilder::new("test", "owner")
            .column(ColumnRuleBuilder::new("id", ColumnType::Text).build())
            .column(ColumnRuleBuilder::new("day", ColumnType::Integer).build())
            .build()
    }

    #[test]
    fn consistent_contract_passes() {
        let contract = minimal_contract();
        assert!(contract.ensure_consistent().is_ok());
    }

    #[test]
    fn empty_columns_rejected() {
        let contract = ContractBuilder::new("test", "owner").build();
        assert!(matches!(
            contract.ensure_consistent(),
            Err(ContractError::EmptyColumns)
        ));
    }

    #[test]
    fn duplicate_column_rejected() {
        let mut contract = minimal_contract();
        contract
            .columns
            .push(ColumnRuleBuilder::new("id", ColumnType::Text).build());
        assert!(matches!(
            contract.ensure_consistent(),
            Err(ContractError::DuplicateColumn(name)) if name == "id"
        ));
    }

    #[test]
    fn dangling_primary_key_rejected() {
        let mut contract = minimal_contract();
        contract.primary_keys.push(KeySpec::Global {
            column: "session".to_string(),
        });
        let err = contract.ensure_consistent().unwrap_err();
        assert!(matches!(
            err,
            ContractError::UnknownColumn { ref column, ref referenced_by }
                if column == "session" && referenced_by == "primary_keys"
        ));
    }

    #[test]
    fn dangling_group_column_rejected() {
        let mut contract = minimal_contract();
        contract.primary_keys.push(KeySpec::PerGroup {
            group_by: "week".to_string(),
            column: "id".to_string(),
        });
        assert!(contract.ensure_consistent().is_err());
    }

    #[test]
    fn dangling_range_rejected() {
        let mut contract = minimal_contract();
        contract.ranges.push(RangeRule {
            column: "price".to_string(),
            min: 0.0,
            max: 1.0,
        });
        assert!(contract.ensure_consistent().is_err());
    }

    #[test]
    fn inverted_range_rejected() {
        let mut contract = minimal_contract();
        contract.ranges.push(RangeRule {
            column: "day".to_string(),
            min: 100.0,
            max: 1.0,
        });
        assert!(matches!(
            contract.ensure_consistent(),
            Err(ContractError::InvalidRange { .. })
        ));
    }

    #[test]
    fn dangling_identifier_rejected() {
        let mut contract = minimal_contract();
        contract.identifier = Some("row_id".to_string());
        assert!(contract.ensure_consistent().is_err());
    }

    #[test]
    fn key_spec_referenced_columns() {
        let global = KeySpec::Global {
            column: "id".to_string(),
        };
        assert_eq!(global.referenced_columns(), vec!["id"]);
        assert_eq!(global.column(), "id");

        let grouped = KeySpec::PerGroup {
            group_by: "day".to_string(),
            column: "session".to_string(),
        };
        assert_eq!(grouped.referenced_columns(), vec!["day", "session"]);
        assert_eq!(grouped.column(), "session");
    }

    #[test]
    fn allowed_values_describe() {
        let set = AllowedValues::Set(vec![
            DomainValue::Text("morning".to_string()),
            DomainValue::Int(3),
        ]);
        assert_eq!(set.describe(), "{morning, 3}");

        let span = AllowedValues::Span { min: 0, max: 1 };
        assert_eq!(span.describe(), "[0, 1]");
    }
}
