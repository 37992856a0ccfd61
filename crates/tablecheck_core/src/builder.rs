//! Builder pattern for creating data contracts.
//!
//! This module provides ergonomic builders for constructing contracts
//! and their column rules with a fluent API.

use crate::{AllowedValues, ColumnRule, ColumnType, Contract, KeySpec, RangeRule};

/// Builder for creating a `Contract`.
///
/// # Example
///
/// ```rust
/// use tablecheck_core::{ColumnRuleBuilder, ColumnType, ContractBuilder, KeySpec};
///
/// let contract = ContractBuilder::new("sessions", "data-quality")
///     .version("1.0.0")
///     .description("Session-level purchase data")
///     .column(
///         ColumnRuleBuilder::new("session_id", ColumnType::Text)
///             .allow_null(false)
///             .build(),
///     )
///     .primary_key(KeySpec::Global {
///         column: "session_id".to_string(),
///     })
///     .build();
/// ```
#[derive(Debug, Default)]
pub struct ContractBuilder {
    name: Option<String>,
    owner: Option<String>,
    version: Option<String>,
    description: Option<String>,
    columns: Vec<ColumnRule>,
    primary_keys: Vec<KeySpec>,
    ranges: Vec<RangeRule>,
    identifier: Option<String>,
}

impl ContractBuilder {
    /// Creates a new contract builder with required fields.
    ///
    /// # Arguments
    ///
    /// * `name` - Unique contract name
    /// * `owner` - Contract owner identifier
    pub fn new(name: impl Into<String>, owner: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            owner: Some(owner.into()),
            version: Some("1.0.0".to_string()),
            ..Default::default()
        }
    }

    /// Sets the contract version.
    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    /// Sets the contract description.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Adds a column rule.
    pub fn column(mut self, rule: ColumnRule) -> Self {
        self.columns.push(rule);
        self
    }

    /// Adds a primary-key constraint.
    pub fn primary_key(mut self, key: KeySpec) -> Self {
        self.primary_keys.push(key);
        self
    }

    /// Adds inclusive numeric bounds for a column.
    pub fn range(mut self, column: impl Into<String>, min: f64, max: f64) -> Self {
        self.ranges.push(RangeRule {
            column: column.into(),
            min,
            max,
        });
        self
    }

    /// Designates the auxiliary globally-unique identifier column.
    pub fn identifier(mut self, column: impl Into<String>) -> Self {
        self.identifier = Some(column.into());
        self
    }

    /// Builds the contract.
    pub fn build(self) -> Contract {
        Contract {
            name: self.name.unwrap_or_default(),
            version: self.version.unwrap_or_else(|| "1.0.0".to_string()),
            owner: self.owner.unwrap_or_default(),
            description: self.description,
            columns: self.columns,
            primary_keys: self.primary_keys,
            ranges: self.ranges,
            identifier: self.identifier,
        }
    }
}

/// Builder for creating a `ColumnRule`.
///
/// New rules default to `required = true` and `allow_null = false`, the
/// strictest policy; tests and contract sources relax them explicitly.
#[derive(Debug)]
pub struct ColumnRuleBuilder {
    name: String,
    column_type: ColumnType,
    required: bool,
    allow_null: bool,
    allowed_values: Option<AllowedValues>,
    description: Option<String>,
}

impl ColumnRuleBuilder {
    /// Creates a new column rule builder.
    pub fn new(name: impl Into<String>, column_type: ColumnType) -> Self {
        Self {
            name: name.into(),
            column_type,
            required: true,
            allow_null: false,
            allowed_values: None,
            description: None,
        }
    }

    /// Sets whether the column must be present in the dataset.
    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    /// Sets whether null cells are permitted.
    pub fn allow_null(mut self, allow_null: bool) -> Self {
        self.allow_null = allow_null;
        self
    }

    /// Sets the closed value domain.
    pub fn allowed(mut self, allowed: AllowedValues) -> Self {
        self.allowed_values = Some(allowed);
        self
    }

    /// Sets the column description.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Builds the column rule.
    pub fn build(self) -> ColumnRule {
        ColumnRule {
            name: self.name,
            column_type: self.column_type,
            required: self.required,
            allow_null: self.allow_null,
            allowed_values: self.allowed_values,
            description: self.description,
        }
    }
}
