use crate::core::transaction::Transaction;
use crate::pricing::liquidity::LiquidityCost;
use crate::tables::RateTables;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Regulatory cost of a transaction, percent, with its LCR/NSFR detail.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegulatoryCost {
    /// Expected-loss proxy on the risk weight.
    pub credit_cost: Decimal,
    pub lcr_cost: Decimal,
    /// Isolated cost of the NSFR short-term floor (reporting only; the floor
    /// itself is priced inside the liquidity premium).
    pub nsfr_cost: Decimal,
}

impl RegulatoryCost {
    pub fn total(&self) -> Decimal {
        self.credit_cost + self.lcr_cost + self.nsfr_cost
    }
}

/// Price the regulatory cost from the finished liquidity stage.
pub fn calculate(deal: &Transaction, liquidity: &LiquidityCost, tables: &RateTables) -> RegulatoryCost {
    let params = &tables.regulatory;

    let credit_cost =
        (deal.risk_weight / Decimal::ONE_HUNDRED) * params.expected_loss_coefficient;

    let nsfr_cost = if liquidity.short_term_floor {
        tables.liquidity.floor_blend_weight
            * (liquidity.one_year_premium - liquidity.baseline_premium)
    } else {
        Decimal::ZERO
    };

    let lcr_cost = if deal.is_operational_segment {
        params.operational_deposit_benefit
    } else {
        Decimal::ZERO
    };

    RegulatoryCost {
        credit_cost,
        lcr_cost,
        nsfr_cost,
    }
}
