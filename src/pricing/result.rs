use crate::decision::approval::ApprovalLevel;
use crate::pricing::capital::{CapitalOutcome, CostStack};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Full FTP waterfall of one pricing call, percent units.
///
/// Recomputed on every call and owned by the caller until the next one.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FtpResult {
    /// Base rate after the rate shock.
    pub base_rate: Decimal,
    /// Total liquidity cost after the liquidity shock.
    pub liquidity_spread: Decimal,
    /// Unshocked liquidity premium (after the NSFR floor blend).
    pub liquidity_premium: Decimal,
    /// Unshocked liquidity-buffer charge.
    pub clc_charge: Decimal,
    pub strategic_spread: Decimal,
    pub regulatory_cost: Decimal,
    pub lcr_cost: Decimal,
    pub nsfr_cost: Decimal,
    pub operational_cost: Decimal,
    pub capital_charge: Decimal,
    pub esg_transition_charge: Decimal,
    pub esg_physical_charge: Decimal,
    pub floor_price: Decimal,
    pub technical_price: Decimal,
    #[serde(rename = "totalFTP")]
    pub total_ftp: Decimal,
    pub final_client_rate: Decimal,
    pub raroc: Decimal,
    pub economic_profit: Decimal,
    pub approval_level: ApprovalLevel,
}

impl FtpResult {
    /// Canonical result for an incomplete deal: all zero, `Rejected`.
    pub fn rejected_empty() -> Self {
        Self::default()
    }

    pub(crate) fn from_stages(
        stack: &CostStack,
        outcome: &CapitalOutcome,
        approval_level: ApprovalLevel,
    ) -> Self {
        Self {
            base_rate: outcome.funding.base_rate,
            liquidity_spread: outcome.funding.liquidity,
            liquidity_premium: stack.liquidity.liquidity_premium,
            clc_charge: stack.liquidity.clc_charge,
            strategic_spread: stack.strategic_spread,
            regulatory_cost: stack.regulatory.total(),
            lcr_cost: stack.regulatory.lcr_cost,
            nsfr_cost: stack.regulatory.nsfr_cost,
            operational_cost: stack.operational_cost,
            capital_charge: outcome.capital_charge,
            esg_transition_charge: stack.esg.transition,
            esg_physical_charge: stack.esg.physical,
            floor_price: outcome.floor_price,
            technical_price: outcome.technical_price,
            total_ftp: outcome.total_ftp,
            final_client_rate: outcome.final_client_rate,
            raroc: outcome.raroc,
            economic_profit: outcome.economic_profit,
            approval_level,
        }
    }

    /// True when the result is field-for-field the guard-clause result.
    ///
    /// A priced deal whose tables zero every component looks the same; use
    /// [`Transaction::is_priceable`](crate::core::transaction::Transaction::is_priceable)
    /// to tell unpriced deals apart.
    pub fn is_empty(&self) -> bool {
        *self == Self::rejected_empty()
    }

    /// Client rate minus floor price: the net income the deal earns, percent.
    pub fn net_income_pct(&self) -> Decimal {
        self.final_client_rate - self.floor_price
    }

    /// RAROC as `f64`, for charts and display.
    pub fn raroc_f64(&self) -> f64 {
        self.raroc.to_f64().unwrap_or(0.0)
    }
}

impl fmt::Display for FtpResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== FTP Waterfall ===")?;
        writeln!(f, "Base Rate:          {:>9.4}%", self.base_rate)?;
        writeln!(f, "Liquidity Spread:   {:>9.4}%", self.liquidity_spread)?;
        writeln!(f, "  Premium:          {:>9.4}%", self.liquidity_premium)?;
        writeln!(f, "  CLC Buffer:       {:>9.4}%", self.clc_charge)?;
        writeln!(f, "Total FTP:          {:>9.4}%", self.total_ftp)?;
        writeln!(f, "Regulatory Cost:    {:>9.4}%", self.regulatory_cost)?;
        writeln!(f, "  LCR:              {:>9.4}%", self.lcr_cost)?;
        writeln!(f, "  NSFR:             {:>9.4}%", self.nsfr_cost)?;
        writeln!(f, "Operational Cost:   {:>9.4}%", self.operational_cost)?;
        writeln!(f, "ESG Transition:     {:>9.4}%", self.esg_transition_charge)?;
        writeln!(f, "ESG Physical:       {:>9.4}%", self.esg_physical_charge)?;
        writeln!(f, "Strategic Spread:   {:>9.4}%", self.strategic_spread)?;
        writeln!(f, "Floor Price:        {:>9.4}%", self.floor_price)?;
        writeln!(f, "Capital Charge:     {:>9.4}%", self.capital_charge)?;
        writeln!(f, "Technical Price:    {:>9.4}%", self.technical_price)?;
        writeln!(f, "Client Rate:        {:>9.4}%", self.final_client_rate)?;
        writeln!(f, "\nRAROC:              {:>9.2}%", self.raroc)?;
        writeln!(f, "Economic Profit:    {:>9.4}%", self.economic_profit)?;
        writeln!(f, "Approval:           {}", self.approval_level)?;
        Ok(())
    }
}
