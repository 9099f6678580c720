use crate::accounting::entry::{AccountingEntry, AccountingEntryBuilder};
use crate::core::shocks::PricingShocks;
use crate::core::transaction::Transaction;
use crate::decision::approval::ApprovalMatrixConfig;
use crate::pricing::capital::{self, CostStack};
use crate::pricing::result::FtpResult;
use crate::pricing::{esg, liquidity, regulatory, strategic};
use crate::tables::RateTables;
use log::{debug, trace};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A priced transaction together with its ledger preview.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quote {
    pub result: FtpResult,
    pub accounting_entry: AccountingEntry,
}

/// The FTP pricing engine.
///
/// Holds only immutable rate tables; pricing is a pure function of the
/// transaction, the approval matrix, the shocks and those tables. Inputs are
/// borrowed and never modified, so results can be memoized on the inputs.
///
/// # Examples
///
/// ```
/// use ftp_engine::prelude::*;
/// use rust_decimal_macros::dec;
///
/// let engine = PricingEngine::default();
/// let deal = Transaction::new(Category::Asset, "USD", dec!(10_000_000), 6, "LOAN_COMM")
///     .with_capital(dec!(100), dec!(12), dec!(15))
///     .with_margin_target(dec!(2.5))
///     .with_operational_cost_bps(dec!(45));
/// let matrix = ApprovalMatrixConfig::new(dec!(15), dec!(10), dec!(5));
///
/// let result = engine.price(&deal, &matrix, None);
/// assert_eq!(result.total_ftp, dec!(3.83));
/// assert_eq!(result.approval_level, ApprovalLevel::L1Manager);
/// ```
#[derive(Debug, Clone, Default)]
pub struct PricingEngine {
    tables: RateTables,
    accounting: AccountingEntryBuilder,
}

impl PricingEngine {
    pub fn new(tables: RateTables) -> Self {
        Self {
            tables,
            accounting: AccountingEntryBuilder::default(),
        }
    }

    pub fn with_accounting(mut self, accounting: AccountingEntryBuilder) -> Self {
        self.accounting = accounting;
        self
    }

    pub fn tables(&self) -> &RateTables {
        &self.tables
    }

    /// Price a transaction.
    ///
    /// Incomplete deals (no product type, or zero amount) short-circuit to
    /// [`FtpResult::rejected_empty`]. `None` shocks and zero shocks give
    /// identical results.
    pub fn price(
        &self,
        deal: &Transaction,
        matrix: &ApprovalMatrixConfig,
        shocks: Option<&PricingShocks>,
    ) -> FtpResult {
        if !deal.is_priceable() {
            debug!(
                "deal '{}' incomplete (product '{}', amount {}), returning empty result",
                deal.id, deal.product_type, deal.amount
            );
            return FtpResult::rejected_empty();
        }

        let no_shock = PricingShocks::none();
        let shocks = shocks.unwrap_or(&no_shock);

        let stack = self.cost_stack(deal);
        let outcome = capital::assemble(deal, &stack, shocks);
        let approval_level = matrix.route(outcome.raroc);

        trace!(
            "deal '{}': total FTP {} floor {} client {} RAROC {} -> {}",
            deal.id,
            outcome.total_ftp,
            outcome.floor_price,
            outcome.final_client_rate,
            outcome.raroc,
            approval_level
        );

        FtpResult::from_stages(&stack, &outcome, approval_level)
    }

    /// Price a transaction and build its accounting-entry preview.
    pub fn quote(
        &self,
        deal: &Transaction,
        matrix: &ApprovalMatrixConfig,
        shocks: Option<&PricingShocks>,
    ) -> Quote {
        let result = self.price(deal, matrix, shocks);
        let accounting_entry = self.accounting.build(deal, &result);
        Quote {
            result,
            accounting_entry,
        }
    }

    /// Unshocked cost components of a transaction.
    pub fn cost_stack(&self, deal: &Transaction) -> CostStack {
        let tables = &self.tables;

        let raw_base_rate = capital::raw_base_rate(deal, tables);
        let liquidity = liquidity::calculate(deal, tables);
        trace!(
            "deal '{}': base {} liquidity premium {} clc {} floor {}",
            deal.id,
            raw_base_rate,
            liquidity.liquidity_premium,
            liquidity.clc_charge,
            liquidity.short_term_floor
        );

        let regulatory = regulatory::calculate(deal, &liquidity, tables);
        let esg = esg::resolve(deal, &tables.esg);
        let strategic_spread =
            strategic::resolve(deal, &tables.behavioural_models, &tables.strategic);

        CostStack {
            raw_base_rate,
            liquidity,
            regulatory,
            operational_cost: deal.operational_cost_bps / Decimal::ONE_HUNDRED,
            esg,
            strategic_spread,
        }
    }
}
