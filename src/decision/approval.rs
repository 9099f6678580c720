use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Governance outcome for a priced transaction.
///
/// Every level is terminal: the router recomputes it from scratch on each
/// pricing call and never transitions a stored value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ApprovalLevel {
    #[default]
    Rejected,
    #[serde(rename = "L2_Committee")]
    L2Committee,
    #[serde(rename = "L1_Manager")]
    L1Manager,
    Auto,
}

impl ApprovalLevel {
    pub const ALL: [ApprovalLevel; 4] = [
        ApprovalLevel::Auto,
        ApprovalLevel::L1Manager,
        ApprovalLevel::L2Committee,
        ApprovalLevel::Rejected,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ApprovalLevel::Auto => "Auto",
            ApprovalLevel::L1Manager => "L1_Manager",
            ApprovalLevel::L2Committee => "L2_Committee",
            ApprovalLevel::Rejected => "Rejected",
        }
    }

    /// True when the deal may be booked, possibly after sign-off.
    pub fn is_bookable(&self) -> bool {
        !matches!(self, ApprovalLevel::Rejected)
    }
}

impl fmt::Display for ApprovalLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors in an approval matrix configuration.
#[derive(Debug, Error, PartialEq)]
pub enum MatrixError {
    #[error("approval thresholds must satisfy auto ({auto}) >= l1 ({l1}) >= l2 ({l2})")]
    Misordered {
        auto: Decimal,
        l1: Decimal,
        l2: Decimal,
    },
}

/// RAROC thresholds (percent) for each approval tier.
///
/// The router takes the thresholds as given. Loaders that accept user-edited
/// matrices should call [`ApprovalMatrixConfig::validate`] first.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApprovalMatrixConfig {
    pub auto_approval_threshold: Decimal,
    pub l1_threshold: Decimal,
    pub l2_threshold: Decimal,
}

impl ApprovalMatrixConfig {
    pub fn new(auto: Decimal, l1: Decimal, l2: Decimal) -> Self {
        Self {
            auto_approval_threshold: auto,
            l1_threshold: l1,
            l2_threshold: l2,
        }
    }

    /// Check the conventional ordering `auto >= l1 >= l2`.
    pub fn validate(&self) -> Result<(), MatrixError> {
        if self.auto_approval_threshold < self.l1_threshold
            || self.l1_threshold < self.l2_threshold
        {
            return Err(MatrixError::Misordered {
                auto: self.auto_approval_threshold,
                l1: self.l1_threshold,
                l2: self.l2_threshold,
            });
        }
        Ok(())
    }

    /// Route a RAROC (percent) to its approval tier.
    ///
    /// Thresholds are inclusive: a RAROC equal to a threshold lands in the
    /// higher tier.
    ///
    /// # Examples
    ///
    /// ```
    /// use ftp_engine::decision::approval::{ApprovalLevel, ApprovalMatrixConfig};
    /// use rust_decimal_macros::dec;
    ///
    /// let matrix = ApprovalMatrixConfig::new(dec!(15), dec!(10), dec!(5));
    /// assert_eq!(matrix.route(dec!(10)), ApprovalLevel::L1Manager);
    /// assert_eq!(matrix.route(dec!(4.99)), ApprovalLevel::Rejected);
    /// ```
    pub fn route(&self, raroc: Decimal) -> ApprovalLevel {
        if raroc >= self.auto_approval_threshold {
            ApprovalLevel::Auto
        } else if raroc >= self.l1_threshold {
            ApprovalLevel::L1Manager
        } else if raroc >= self.l2_threshold {
            ApprovalLevel::L2Committee
        } else {
            ApprovalLevel::Rejected
        }
    }
}

impl Default for ApprovalMatrixConfig {
    fn default() -> Self {
        Self::new(dec!(15), dec!(10), dec!(5))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matrix() -> ApprovalMatrixConfig {
        ApprovalMatrixConfig::new(dec!(15), dec!(10), dec!(5))
    }

    #[test]
    fn test_routing_tiers() {
        let m = matrix();
        assert_eq!(m.route(dec!(22)), ApprovalLevel::Auto);
        assert_eq!(m.route(dec!(12.5)), ApprovalLevel::L1Manager);
        assert_eq!(m.route(dec!(7)), ApprovalLevel::L2Committee);
        assert_eq!(m.route(dec!(-3)), ApprovalLevel::Rejected);
    }

    #[test]
    fn test_boundaries_route_to_higher_tier() {
        let m = matrix();
        assert_eq!(m.route(dec!(15)), ApprovalLevel::Auto);
        assert_eq!(m.route(dec!(10)), ApprovalLevel::L1Manager);
        assert_eq!(m.route(dec!(5)), ApprovalLevel::L2Committee);
        assert_eq!(m.route(dec!(4.9999)), ApprovalLevel::Rejected);
    }

    #[test]
    fn test_misordered_matrix_routes_as_given() {
        // l1 above auto: anything between 15 and 20 is Auto, never L1
        let m = ApprovalMatrixConfig::new(dec!(15), dec!(20), dec!(5));
        assert_eq!(m.route(dec!(18)), ApprovalLevel::Auto);
        assert_eq!(m.route(dec!(12)), ApprovalLevel::L2Committee);
        assert!(matches!(m.validate(), Err(MatrixError::Misordered { .. })));
    }

    #[test]
    fn test_validate_accepts_equal_thresholds() {
        let m = ApprovalMatrixConfig::new(dec!(10), dec!(10), dec!(10));
        assert!(m.validate().is_ok());
        assert_eq!(m.route(dec!(10)), ApprovalLevel::Auto);
        assert_eq!(m.route(dec!(9)), ApprovalLevel::Rejected);
    }

    #[test]
    fn test_level_wire_names() {
        assert_eq!(
            serde_json::to_string(&ApprovalLevel::L1Manager).unwrap(),
            "\"L1_Manager\""
        );
        let level: ApprovalLevel = serde_json::from_str("\"L2_Committee\"").unwrap();
        assert_eq!(level, ApprovalLevel::L2Committee);
        assert_eq!(ApprovalLevel::Rejected.to_string(), "Rejected");
        assert!(!ApprovalLevel::Rejected.is_bookable());
    }

    #[test]
    fn test_levels_order_by_authority() {
        assert!(ApprovalLevel::Auto > ApprovalLevel::L1Manager);
        assert!(ApprovalLevel::L2Committee > ApprovalLevel::Rejected);
    }
}
