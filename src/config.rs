//! Deployment configuration: approval matrix plus rate tables, loaded from JSON.

use crate::accounting::entry::AccountingEntryBuilder;
use crate::decision::approval::{ApprovalMatrixConfig, MatrixError};
use crate::pricing::engine::PricingEngine;
use crate::tables::RateTables;
use log::info;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Errors arising while loading a pricing configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read configuration '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid configuration JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid approval matrix: {0}")]
    Matrix(#[from] MatrixError),
}

/// Everything a desk deployment calibrates.
///
/// Every section is optional in JSON; missing sections take the standard
/// calibration.
///
/// # Examples
///
/// ```
/// use ftp_engine::config::PricingConfig;
/// use rust_decimal_macros::dec;
///
/// let config = PricingConfig::from_json_str(r#"{
///     "approvalMatrix": { "autoApprovalThreshold": 18, "l1Threshold": 12, "l2Threshold": 6 }
/// }"#).unwrap();
/// assert_eq!(config.approval_matrix.l1_threshold, dec!(12));
/// assert_eq!(config.rate_tables.base_rate.intercept, dec!(3.0));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PricingConfig {
    pub approval_matrix: ApprovalMatrixConfig,
    pub rate_tables: RateTables,
    pub accounting: AccountingEntryBuilder,
}

impl PricingConfig {
    /// Parse and validate a configuration document.
    ///
    /// Misordered approval thresholds are rejected here, before they reach
    /// the router.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: PricingConfig = serde_json::from_str(json)?;
        config.approval_matrix.validate()?;
        Ok(config)
    }

    /// Load a configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let config = Self::from_json_str(&content)?;
        info!(
            "loaded pricing configuration from {} ({} behavioural models, {} liquidity knots)",
            path.display(),
            config.rate_tables.behavioural_models.len(),
            config.rate_tables.liquidity_curve.knots().len()
        );
        Ok(config)
    }

    /// Build an engine over this configuration's tables.
    pub fn engine(&self) -> PricingEngine {
        PricingEngine::new(self.rate_tables.clone()).with_accounting(self.accounting.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_empty_document_is_standard_calibration() {
        let config = PricingConfig::from_json_str("{}").unwrap();
        assert_eq!(config, PricingConfig::default());
        assert_eq!(config.approval_matrix.auto_approval_threshold, dec!(15));
    }

    #[test]
    fn test_misordered_matrix_rejected() {
        let err = PricingConfig::from_json_str(
            r#"{ "approvalMatrix": { "autoApprovalThreshold": 10, "l1Threshold": 12, "l2Threshold": 5 } }"#,
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::Matrix(_)));
    }

    #[test]
    fn test_bad_table_is_parse_error() {
        let err = PricingConfig::from_json_str(
            r#"{ "rateTables": { "liquidityCurve": [
                { "months": 12, "valueBps": 25 },
                { "months": 6, "valueBps": 15 }
            ] } }"#,
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_missing_file() {
        let err = PricingConfig::load("/nonexistent/ftp-config.json").unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
        assert!(err.to_string().contains("/nonexistent/ftp-config.json"));
    }

    #[test]
    fn test_engine_uses_configured_tables() {
        let config = PricingConfig::from_json_str(
            r#"{ "rateTables": { "baseRate": { "intercept": 1 } } }"#,
        )
        .unwrap();
        assert_eq!(config.engine().tables().base_rate.intercept, dec!(1));
    }
}
