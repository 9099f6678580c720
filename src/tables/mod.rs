//! Rate tables and calibration parameters injected into the pricing engine.
//!
//! Everything the engine looks up (liquidity curve, basis spreads, ESG grids,
//! currency offsets, behavioural models, formula coefficients) lives in a
//! [`RateTables`] value owned by the caller. Defaults reproduce the desk's
//! standard calibration.

pub mod basis;
pub mod behavioural;
pub mod curve;
pub mod esg;

use crate::core::currency::CurrencyOffsets;
use basis::BasisSpreadTable;
use behavioural::BehaviouralRegistry;
use curve::LiquidityCurve;
use esg::EsgGrid;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors arising from malformed rate tables.
#[derive(Debug, Error)]
pub enum TableError {
    #[error("liquidity curve tenors must be strictly increasing, got {previous} then {next}")]
    UnsortedCurve { previous: Decimal, next: Decimal },
    #[error("basis spread buckets must be strictly increasing, got {previous} then {next}")]
    UnsortedBasisBuckets { previous: String, next: String },
}

/// Base-rate proxy: `intercept + duration_months * slope_per_month`.
///
/// A simplified stand-in for a real yield-curve lookup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BaseRateParameters {
    pub intercept: Decimal,
    pub slope_per_month: Decimal,
}

impl Default for BaseRateParameters {
    fn default() -> Self {
        Self {
            intercept: dec!(3.0),
            slope_per_month: dec!(0.08),
        }
    }
}

/// Coefficients of the liquidity premium and the liquidity-buffer charge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LiquidityParameters {
    /// Baseline premium for assets, percent.
    pub asset_baseline: Decimal,
    /// Baseline for liabilities and off-balance items; negative is a funding benefit.
    pub liability_baseline: Decimal,
    /// Tenors strictly above this many months pay `long_tenor_add_on`.
    pub long_tenor_months: u32,
    pub long_tenor_add_on: Decimal,
    /// Assets strictly below this many months fall under the NSFR short-term floor.
    pub short_term_floor_months: u32,
    /// Weight of the one-year premium in the floor blend.
    pub floor_blend_weight: Decimal,
    /// Tenor at which the liquidity curve gives the one-year premium.
    pub one_year_tenor_months: u32,
    /// Multiplier on the buffer charge for operational-segment deposits.
    pub operational_segment_factor: Decimal,
    /// Scale applied per unit of undrawn/drawn ratio.
    pub undrawn_scaling: Decimal,
}

impl Default for LiquidityParameters {
    fn default() -> Self {
        Self {
            asset_baseline: dec!(0.45),
            liability_baseline: dec!(-0.10),
            long_tenor_months: 36,
            long_tenor_add_on: dec!(0.20),
            short_term_floor_months: 12,
            floor_blend_weight: dec!(0.5),
            one_year_tenor_months: 12,
            operational_segment_factor: dec!(0.5),
            undrawn_scaling: dec!(0.1),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RegulatoryParameters {
    /// Expected-loss proxy applied to the risk weight.
    pub expected_loss_coefficient: Decimal,
    /// LCR benefit for operational deposits, percent (negative).
    pub operational_deposit_benefit: Decimal,
}

impl Default for RegulatoryParameters {
    fn default() -> Self {
        Self {
            expected_loss_coefficient: dec!(0.85),
            operational_deposit_benefit: dec!(-0.10),
        }
    }
}

/// Spread coefficients per behavioural model type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StrategicParameters {
    /// Percent of spread per unit of CPR.
    pub cpr_coefficient: Decimal,
    /// Spread reduction at a 100% core ratio, percent.
    pub core_deposit_coefficient: Decimal,
}

impl Default for StrategicParameters {
    fn default() -> Self {
        Self {
            cpr_coefficient: dec!(0.05),
            core_deposit_coefficient: dec!(0.30),
        }
    }
}

/// All lookup tables and coefficients the pricing pipeline reads.
///
/// # Examples
///
/// ```
/// use ftp_engine::tables::RateTables;
/// use rust_decimal_macros::dec;
///
/// let tables = RateTables::default();
/// assert_eq!(tables.one_year_premium(), dec!(0.25));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RateTables {
    pub base_rate: BaseRateParameters,
    pub currency_offsets: CurrencyOffsets,
    pub liquidity_curve: LiquidityCurve,
    pub liquidity: LiquidityParameters,
    pub basis_spreads: BasisSpreadTable,
    pub regulatory: RegulatoryParameters,
    pub esg: EsgGrid,
    pub behavioural_models: BehaviouralRegistry,
    pub strategic: StrategicParameters,
}

impl RateTables {
    /// One-year liquidity premium in percent, read off the liquidity curve.
    pub fn one_year_premium(&self) -> Decimal {
        self.liquidity_curve
            .value_pct(Decimal::from(self.liquidity.one_year_tenor_months))
    }
}
