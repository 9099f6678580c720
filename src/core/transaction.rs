use crate::core::currency::CurrencyCode;
use crate::core::deal::{DealId, ProductType};
use chrono::{Months, NaiveDate};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Balance-sheet side of a transaction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    #[default]
    Asset,
    Liability,
    #[serde(rename = "Off-Balance")]
    OffBalance,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Category::Asset => write!(f, "Asset"),
            Category::Liability => write!(f, "Liability"),
            Category::OffBalance => write!(f, "Off-Balance"),
        }
    }
}

/// Climate transition-risk classification of the counterparty or project.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TransitionRisk {
    Green,
    #[default]
    Neutral,
    Amber,
    Brown,
}

/// Climate physical-risk level of the collateral or location.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PhysicalRisk {
    #[default]
    Low,
    Medium,
    High,
}

/// A transaction submitted for pricing.
///
/// Percentages are plain numbers in percent units (`2.5` means 2.5%), fields
/// suffixed `bps` are basis points. The engine never mutates a transaction;
/// the calling layer owns it.
///
/// # Examples
///
/// ```
/// use ftp_engine::core::transaction::{Category, Transaction};
/// use rust_decimal_macros::dec;
///
/// let deal = Transaction::new(Category::Asset, "USD", dec!(10_000_000), 6, "LOAN_COMM")
///     .with_capital(dec!(100), dec!(12), dec!(15))
///     .with_margin_target(dec!(2.5));
///
/// assert!(deal.is_priceable());
/// assert_eq!(deal.duration_months, 6);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Transaction {
    /// Display label, never used for pricing decisions.
    pub id: DealId,
    pub category: Category,
    pub currency: CurrencyCode,
    /// Drawn notional in currency units.
    pub amount: Decimal,
    /// Tenor in whole months. JSON accepts integers and whole-valued numbers
    /// or strings (`6`, `6.0`, `"6"`); fractional tenors are rejected.
    #[serde(deserialize_with = "whole_months")]
    pub duration_months: u32,
    /// Regulatory risk weight, percent.
    pub risk_weight: Decimal,
    /// Capital ratio held against risk-weighted assets, percent.
    pub capital_ratio: Decimal,
    /// Hurdle return on equity, percent.
    #[serde(rename = "targetROE")]
    pub target_roe: Decimal,
    pub operational_cost_bps: Decimal,
    /// Commercial margin over the unshocked FTP, percent.
    pub margin_target: Decimal,
    pub transition_risk: TransitionRisk,
    pub physical_risk: PhysicalRisk,
    pub behavioural_model_id: Option<String>,
    /// 30-day stressed outflow rate, percent.
    pub lcr_outflow_pct: Option<Decimal>,
    pub is_operational_segment: bool,
    pub undrawn_amount: Decimal,
    /// Drawn balance to book, when it differs from `amount`.
    pub drawn_amount: Option<Decimal>,
    pub is_committed: bool,
    pub product_type: ProductType,
    /// Forces the NSFR short-term floor regardless of category and tenor.
    pub force_nsfr_floor: bool,
    pub business_unit: Option<String>,
    pub start_date: Option<NaiveDate>,
}

fn whole_months<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u32, D::Error> {
    let months = <Decimal as Deserialize>::deserialize(deserializer)?;
    if months.fract() != Decimal::ZERO {
        return Err(serde::de::Error::custom(format!(
            "durationMonths must be a whole number of months, got {}",
            months
        )));
    }
    months.to_u32().ok_or_else(|| {
        serde::de::Error::custom(format!("durationMonths out of range: {}", months))
    })
}

impl Default for Transaction {
    fn default() -> Self {
        Self {
            id: DealId::default(),
            category: Category::Asset,
            currency: CurrencyCode::new("USD"),
            amount: Decimal::ZERO,
            duration_months: 0,
            risk_weight: Decimal::ZERO,
            capital_ratio: Decimal::ZERO,
            target_roe: Decimal::ZERO,
            operational_cost_bps: Decimal::ZERO,
            margin_target: Decimal::ZERO,
            transition_risk: TransitionRisk::Neutral,
            physical_risk: PhysicalRisk::Low,
            behavioural_model_id: None,
            lcr_outflow_pct: None,
            is_operational_segment: false,
            undrawn_amount: Decimal::ZERO,
            drawn_amount: None,
            is_committed: false,
            product_type: ProductType::default(),
            force_nsfr_floor: false,
            business_unit: None,
            start_date: None,
        }
    }
}

impl Transaction {
    /// Create a transaction with its identifying economics; everything else
    /// starts neutral.
    pub fn new(
        category: Category,
        currency: impl Into<CurrencyCode>,
        amount: Decimal,
        duration_months: u32,
        product_type: impl Into<ProductType>,
    ) -> Self {
        Self {
            category,
            currency: currency.into(),
            amount,
            duration_months,
            product_type: product_type.into(),
            ..Default::default()
        }
    }

    pub fn with_id(mut self, id: impl Into<DealId>) -> Self {
        self.id = id.into();
        self
    }

    /// Set risk weight, capital ratio and target ROE (all percent).
    pub fn with_capital(mut self, risk_weight: Decimal, capital_ratio: Decimal, target_roe: Decimal) -> Self {
        self.risk_weight = risk_weight;
        self.capital_ratio = capital_ratio;
        self.target_roe = target_roe;
        self
    }

    pub fn with_margin_target(mut self, margin_target: Decimal) -> Self {
        self.margin_target = margin_target;
        self
    }

    pub fn with_operational_cost_bps(mut self, bps: Decimal) -> Self {
        self.operational_cost_bps = bps;
        self
    }

    pub fn with_esg(mut self, transition: TransitionRisk, physical: PhysicalRisk) -> Self {
        self.transition_risk = transition;
        self.physical_risk = physical;
        self
    }

    pub fn with_behavioural_model(mut self, model_id: impl Into<String>) -> Self {
        self.behavioural_model_id = Some(model_id.into());
        self
    }

    pub fn with_lcr_outflow_pct(mut self, pct: Decimal) -> Self {
        self.lcr_outflow_pct = Some(pct);
        self
    }

    pub fn with_operational_segment(mut self, flag: bool) -> Self {
        self.is_operational_segment = flag;
        self
    }

    /// Mark as a commitment with `undrawn` still available to the client.
    pub fn with_commitment(mut self, undrawn: Decimal, committed: bool) -> Self {
        self.undrawn_amount = undrawn;
        self.is_committed = committed;
        self
    }

    pub fn with_forced_nsfr_floor(mut self, flag: bool) -> Self {
        self.force_nsfr_floor = flag;
        self
    }

    pub fn with_business_unit(mut self, unit: impl Into<String>) -> Self {
        self.business_unit = Some(unit.into());
        self
    }

    pub fn with_start_date(mut self, date: NaiveDate) -> Self {
        self.start_date = Some(date);
        self
    }

    /// False for incomplete deal forms: no product selected or zero amount.
    pub fn is_priceable(&self) -> bool {
        !self.product_type.is_empty() && !self.amount.is_zero()
    }

    /// Balance actually booked on the ledger.
    pub fn booked_amount(&self) -> Decimal {
        self.drawn_amount.unwrap_or(self.amount)
    }

    /// Contractual maturity, when a start date is known.
    pub fn maturity_date(&self) -> Option<NaiveDate> {
        self.start_date?
            .checked_add_months(Months::new(self.duration_months))
    }
}
