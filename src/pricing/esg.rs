use crate::core::transaction::Transaction;
use crate::tables::esg::EsgGrid;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Climate-risk charges, percent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EsgCharges {
    pub transition: Decimal,
    pub physical: Decimal,
}

impl EsgCharges {
    pub fn total(&self) -> Decimal {
        self.transition + self.physical
    }
}

/// Resolve the transaction's ESG classifications against the grids.
pub fn resolve(deal: &Transaction, grid: &EsgGrid) -> EsgCharges {
    EsgCharges {
        transition: grid.transition_bps(deal.transition_risk) / Decimal::ONE_HUNDRED,
        physical: grid.physical_bps(deal.physical_risk) / Decimal::ONE_HUNDRED,
    }
}
