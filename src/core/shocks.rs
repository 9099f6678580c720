use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

const BPS_PER_PERCENT: Decimal = Decimal::ONE_HUNDRED;

/// Additive market shocks for scenario analysis, in basis points.
///
/// Shocks move only the base rate and the liquidity component of the FTP.
/// Regulatory cost, capital charge, ESG charges and the strategic spread are
/// never shocked, and the client rate stays anchored to the unshocked cost.
///
/// # Examples
///
/// ```
/// use ftp_engine::core::shocks::PricingShocks;
/// use rust_decimal_macros::dec;
///
/// let shocks = PricingShocks::new(dec!(100), dec!(25));
/// assert_eq!(shocks.interest_rate_pct(), dec!(1));
/// assert_eq!(shocks.liquidity_spread_pct(), dec!(0.25));
/// assert!(PricingShocks::none().is_zero());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PricingShocks {
    pub interest_rate: Decimal,
    pub liquidity_spread: Decimal,
}

impl PricingShocks {
    pub fn new(interest_rate_bps: Decimal, liquidity_spread_bps: Decimal) -> Self {
        Self {
            interest_rate: interest_rate_bps,
            liquidity_spread: liquidity_spread_bps,
        }
    }

    pub fn none() -> Self {
        Self::default()
    }

    pub fn is_zero(&self) -> bool {
        self.interest_rate.is_zero() && self.liquidity_spread.is_zero()
    }

    /// Base-rate shock converted to percent.
    pub fn interest_rate_pct(&self) -> Decimal {
        self.interest_rate / BPS_PER_PERCENT
    }

    /// Liquidity shock converted to percent.
    pub fn liquidity_spread_pct(&self) -> Decimal {
        self.liquidity_spread / BPS_PER_PERCENT
    }
}

impl fmt::Display for PricingShocks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "rates {} bps / liquidity {} bps",
            self.interest_rate, self.liquidity_spread
        )
    }
}
