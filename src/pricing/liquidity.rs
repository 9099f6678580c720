use crate::core::transaction::{Category, Transaction};
use crate::tables::RateTables;
use log::warn;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Liquidity component of the FTP, split for audit display.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LiquidityCost {
    /// Maturity baseline before any floor blending.
    pub baseline_premium: Decimal,
    /// One-year premium read off the liquidity curve.
    pub one_year_premium: Decimal,
    /// Premium charged, after the NSFR floor blend when it applies.
    pub liquidity_premium: Decimal,
    /// Liquidity-buffer (CLC) charge.
    pub clc_charge: Decimal,
    /// Whether the NSFR short-term floor was applied.
    pub short_term_floor: bool,
}

impl LiquidityCost {
    pub fn total(&self) -> Decimal {
        self.liquidity_premium + self.clc_charge
    }
}

/// The NSFR short-term floor applies to assets below the floor tenor, or
/// wherever the transaction explicitly requests it.
pub fn applies_short_term_floor(deal: &Transaction, tables: &RateTables) -> bool {
    deal.force_nsfr_floor
        || (deal.category == Category::Asset
            && deal.duration_months < tables.liquidity.short_term_floor_months)
}

/// Maturity baseline premium, percent.
///
/// Assets pay the asset baseline; liabilities and off-balance items receive
/// the (negative) liability baseline. Long tenors pay an add-on.
pub fn baseline_premium(deal: &Transaction, tables: &RateTables) -> Decimal {
    let params = &tables.liquidity;
    let mut baseline = match deal.category {
        Category::Asset => params.asset_baseline,
        Category::Liability | Category::OffBalance => params.liability_baseline,
    };
    if deal.duration_months > params.long_tenor_months {
        baseline += params.long_tenor_add_on;
    }
    baseline
}

/// True when the transaction carries a contingent-liquidity buffer.
pub fn requires_liquidity_buffer(deal: &Transaction) -> bool {
    match deal.category {
        Category::Liability | Category::OffBalance => true,
        Category::Asset => deal.product_type.is_credit_line() && deal.is_committed,
    }
}

/// Liquidity-buffer (CLC) charge, percent.
///
/// `lcr_outflow_pct × basis spread`, halved for operational-segment deposits
/// and scaled up when the undrawn commitment exceeds the drawn amount. A
/// scaling that does not fit in a `Decimal` leaves the charge unscaled.
pub fn clc_charge(deal: &Transaction, tables: &RateTables) -> Decimal {
    if !requires_liquidity_buffer(deal) {
        return Decimal::ZERO;
    }

    let params = &tables.liquidity;
    let outflow_pct = deal.lcr_outflow_pct.unwrap_or(Decimal::ZERO);
    let basis_bps = tables.basis_spreads.spread_bps(deal.duration_months);

    let mut charge =
        (outflow_pct / Decimal::ONE_HUNDRED) * (basis_bps / Decimal::ONE_HUNDRED);

    if deal.is_operational_segment {
        charge *= params.operational_segment_factor;
    }
    if deal.amount > Decimal::ZERO && deal.undrawn_amount > deal.amount {
        let scaled = deal
            .undrawn_amount
            .checked_div(deal.amount)
            .and_then(|gap| params.undrawn_scaling.checked_mul(gap))
            .and_then(|add_on| Decimal::ONE.checked_add(add_on))
            .and_then(|factor| charge.checked_mul(factor));
        match scaled {
            Some(scaled) => charge = scaled,
            None => warn!(
                "deal {}: undrawn {} on amount {} overflows the CLC scaling, charge left unscaled",
                deal.id, deal.undrawn_amount, deal.amount
            ),
        }
    }
    charge
}

/// Full liquidity cost of a transaction.
pub fn calculate(deal: &Transaction, tables: &RateTables) -> LiquidityCost {
    let baseline = baseline_premium(deal, tables);
    let one_year = tables.one_year_premium();
    let floor = applies_short_term_floor(deal, tables);

    let premium = if floor {
        let w = tables.liquidity.floor_blend_weight;
        (Decimal::ONE - w) * baseline + w * one_year
    } else {
        baseline
    };

    LiquidityCost {
        baseline_premium: baseline,
        one_year_premium: one_year,
        liquidity_premium: premium,
        clc_charge: clc_charge(deal, tables),
        short_term_floor: floor,
    }
}
