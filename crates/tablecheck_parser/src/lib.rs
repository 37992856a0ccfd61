//! Parser for tablecheck data contracts (YAML/TOML formats).
//!
//! This crate turns a contract file into the strongly-typed
//! [`Contract`] model and verifies its internal consistency, so a
//! structurally valid but self-contradictory contract (a range over an
//! undeclared column, say) fails at load time rather than mid-validation.
//!
//! # Example
//!
//! ```rust
//! use tablecheck_parser::parse_yaml;
//!
//! let yaml = r#"
//! name: sessions
//! owner: data-quality
//! columns:
//!   - name: session_id
//!     type: text
//!     allow_null: false
//! primary_keys:
//!   - scope: global
//!     column: session_id
//! "#;
//!
//! let contract = parse_yaml(yaml).expect("failed to parse contract");
//! assert_eq!(contract.name, "sessions");
//! ```

use std::path::Path;

use tablecheck_core::{Contract, ContractError};
use thiserror::Error;

/// Errors that can occur during contract parsing.
#[derive(Debug, Error)]
pub enum ParserError {
    /// YAML parsing or deserialization failed
    #[error("failed to parse YAML: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),

    /// TOML parsing or deserialization failed
    #[error("failed to parse TOML: {0}")]
    Toml(String),

    /// Parsed cleanly but the contract is self-contradictory
    #[error("inconsistent contract: {0}")]
    Contract(#[from] ContractError),

    /// File I/O error
    #[error("file I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Unsupported file format
    #[error("unsupported file format: {0}")]
    UnsupportedFormat(String),

    /// Invalid file extension
    #[error("invalid or missing file extension")]
    InvalidExtension,
}

/// Result type alias for parser operations.
pub type Result<T> = std::result::Result<T, ParserError>;

/// Supported contract file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContractFormat {
    /// YAML format (.yml, .yaml)
    Yaml,
    /// TOML format (.toml)
    Toml,
}

/// Parse a contract from a YAML string.
///
/// The parsed contract is consistency-checked before being returned.
pub fn parse_yaml(content: &str) -> Result<Contract> {
    let contract: Contract = serde_yaml_ng::from_str(content)?;
    contract.ensure_consistent()?;
    Ok(contract)
}

/// Parse a contract from a TOML string.
///
/// The parsed contract is consistency-checked before being returned.
pub fn parse_toml(content: &str) -> Result<Contract> {
    let contract: Contract =
        toml::from_str(content).map_err(|e| ParserError::Toml(e.to_string()))?;
    contract.ensure_consistent()?;
    Ok(contract)
}

/// Detect the contract format from a file path based on its extension.
///
/// # Supported Extensions
///
/// * `.yaml`, `.yml` → `ContractFormat::Yaml`
/// * `.toml` → `ContractFormat::Toml`
///
/// # Errors
///
/// Returns `ParserError::InvalidExtension` if the file has no extension.
/// Returns `ParserError::UnsupportedFormat` if the extension is not recognized.
pub fn detect_format(path: &Path) -> Result<ContractFormat> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .ok_or(ParserError::InvalidExtension)?;

    match extension.to_lowercase().as_str() {
        "yaml" | "yml" => Ok(ContractFormat::Yaml),
        "toml" => Ok(ContractFormat::Toml),
        other => Err(ParserError::UnsupportedFormat(other.to_string())),
    }
}

/// Parse a contract from a file with automatic format detection.
///
/// The format is determined by the file extension:
/// - `.yaml`, `.yml` → parsed as YAML
/// - `.toml` → parsed as TOML
///
/// # Example
///
/// ```no_run
/// use std::path::Path;
/// use tablecheck_parser::parse_file;
///
/// let contract = parse_file(Path::new("configs/data_contract.yaml")).unwrap();
/// println!("Loaded contract: {}", contract.name);
/// ```
pub fn parse_file(path: &Path) -> Result<Contract> {
    let content = std::fs::read_to_string(path)?;
    let format = detect_format(path)?;

    match format {
        ContractFormat::Yaml => parse_yaml(&content),
        ContractFormat::Toml => parse_toml(&content),
    }
}
