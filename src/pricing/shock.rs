use crate::core::shocks::PricingShocks;
use rust_decimal::Decimal;

/// Funding components after the shock overlay, percent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShockedFunding {
    pub base_rate: Decimal,
    pub liquidity: Decimal,
}

impl ShockedFunding {
    /// The transfer rate charged to the business: base rate plus liquidity.
    pub fn total_ftp(&self) -> Decimal {
        self.base_rate + self.liquidity
    }
}

/// Overlay `shocks` on the base rate and the liquidity cost.
///
/// Shocks are additive and touch nothing else. With zero shocks the inputs
/// pass through unchanged.
pub fn apply(base_rate: Decimal, liquidity: Decimal, shocks: &PricingShocks) -> ShockedFunding {
    ShockedFunding {
        base_rate: base_rate + shocks.interest_rate_pct(),
        liquidity: liquidity + shocks.liquidity_spread_pct(),
    }
}
