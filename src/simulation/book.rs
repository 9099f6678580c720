//! Pricing a whole book of transactions.

use crate::core::deal::DealId;
use crate::core::shocks::PricingShocks;
use crate::core::transaction::Transaction;
use crate::decision::approval::{ApprovalLevel, ApprovalMatrixConfig};
use crate::pricing::engine::PricingEngine;
use crate::pricing::result::FtpResult;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Result for one deal of the book.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookEntry {
    pub id: DealId,
    pub amount: Decimal,
    pub result: FtpResult,
}

/// Aggregate view of a priced book.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookSummary {
    pub deal_count: usize,
    /// Deals skipped by the guard clause (incomplete forms).
    pub unpriced_count: usize,
    pub total_notional: Decimal,
    /// RAROC weighted by notional over priced deals, percent.
    pub weighted_raroc: Decimal,
    pub by_approval: BTreeMap<ApprovalLevel, usize>,
}

impl BookSummary {
    pub fn count(&self, level: ApprovalLevel) -> usize {
        self.by_approval.get(&level).copied().unwrap_or(0)
    }
}

/// A priced book with its summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookResult {
    pub entries: Vec<BookEntry>,
    pub summary: BookSummary,
}

/// Price every deal of `book` under the same matrix and shocks.
pub fn price_book(
    engine: &PricingEngine,
    book: &[Transaction],
    matrix: &ApprovalMatrixConfig,
    shocks: Option<&PricingShocks>,
) -> BookResult {
    let mut summary = BookSummary::default();
    let mut weighted_sum = Decimal::ZERO;

    let entries: Vec<BookEntry> = book
        .iter()
        .map(|deal| {
            let result = engine.price(deal, matrix, shocks);

            summary.deal_count += 1;
            *summary.by_approval.entry(result.approval_level).or_insert(0) += 1;
            if !deal.is_priceable() {
                summary.unpriced_count += 1;
            } else {
                summary.total_notional = summary.total_notional.saturating_add(deal.amount);
                weighted_sum = weighted_sum.saturating_add(deal.amount.saturating_mul(result.raroc));
            }

            BookEntry {
                id: deal.id.clone(),
                amount: deal.amount,
                result,
            }
        })
        .collect();

    if summary.total_notional > Decimal::ZERO {
        summary.weighted_raroc = weighted_sum
            .checked_div(summary.total_notional)
            .unwrap_or(Decimal::ZERO);
    }

    BookResult { entries, summary }
}

impl fmt::Display for BookResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== Book Pricing ===")?;
        for entry in &self.entries {
            writeln!(
                f,
                "  {:<14} {:>16} FTP {:>8.4}%  RAROC {:>8.2}%  {}",
                entry.id.as_str(),
                entry.amount,
                entry.result.total_ftp,
                entry.result.raroc,
                entry.result.approval_level
            )?;
        }
        let s = &self.summary;
        writeln!(f, "\nDeals:            {}", s.deal_count)?;
        writeln!(f, "Unpriced:         {}", s.unpriced_count)?;
        writeln!(f, "Total Notional:   {}", s.total_notional)?;
        writeln!(f, "Weighted RAROC:   {:.2}%", s.weighted_raroc)?;
        for level in ApprovalLevel::ALL {
            writeln!(f, "  {:<14} {}", level.as_str(), s.count(level))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::transaction::Category;
    use rust_decimal_macros::dec;

    fn loan(id: &str, amount: Decimal, margin: Decimal) -> Transaction {
        Transaction::new(Category::Asset, "USD", amount, 24, "LOAN_COMM")
            .with_id(id)
            .with_capital(dec!(100), dec!(10), dec!(12))
            .with_margin_target(margin)
    }

    #[test]
    fn test_summary_counts() {
        let book = vec![
            loan("A", dec!(1_000_000), dec!(3)),
            loan("B", dec!(2_000_000), dec!(0.5)),
            Transaction::default().with_id("DRAFT"),
        ];
        let result = price_book(
            &PricingEngine::default(),
            &book,
            &ApprovalMatrixConfig::default(),
            None,
        );
        assert_eq!(result.entries.len(), 3);
        assert_eq!(result.summary.deal_count, 3);
        assert_eq!(result.summary.unpriced_count, 1);
        assert_eq!(result.summary.total_notional, dec!(3_000_000));
        assert_eq!(
            result.summary.by_approval.values().sum::<usize>(),
            result.summary.deal_count
        );
        assert!(result.summary.count(ApprovalLevel::Rejected) >= 1);
    }

    #[test]
    fn test_weighted_raroc_between_extremes() {
        let book = vec![
            loan("A", dec!(1_000_000), dec!(3)),
            loan("B", dec!(3_000_000), dec!(1)),
        ];
        let result = price_book(
            &PricingEngine::default(),
            &book,
            &ApprovalMatrixConfig::default(),
            None,
        );
        let a = result.entries[0].result.raroc;
        let b = result.entries[1].result.raroc;
        let w = result.summary.weighted_raroc;
        assert!(w <= a.max(b) && w >= a.min(b));
    }

    #[test]
    fn test_zero_cost_tables_still_count_as_priced() {
        let mut tables = crate::tables::RateTables::default();
        tables.base_rate.intercept = Decimal::ZERO;
        tables.base_rate.slope_per_month = Decimal::ZERO;
        tables.liquidity.asset_baseline = Decimal::ZERO;
        tables.liquidity.floor_blend_weight = Decimal::ZERO;
        tables.regulatory.expected_loss_coefficient = Decimal::ZERO;
        let engine = PricingEngine::new(tables);

        let deal = Transaction::new(Category::Asset, "USD", dec!(1_000_000), 24, "LOAN_COMM");
        let result = price_book(&engine, &[deal], &ApprovalMatrixConfig::default(), None);
        assert!(result.entries[0].result.is_empty());
        assert_eq!(result.summary.unpriced_count, 0);
        assert_eq!(result.summary.total_notional, dec!(1_000_000));
    }

    #[test]
    fn test_huge_notional_does_not_overflow() {
        let book = vec![
            loan("A", Decimal::MAX, dec!(3)),
            loan("B", Decimal::MAX, dec!(3)),
        ];
        let result = price_book(
            &PricingEngine::default(),
            &book,
            &ApprovalMatrixConfig::default(),
            None,
        );
        assert_eq!(result.summary.total_notional, Decimal::MAX);
        assert_eq!(result.summary.unpriced_count, 0);
    }

    #[test]
    fn test_empty_book() {
        let result = price_book(
            &PricingEngine::default(),
            &[],
            &ApprovalMatrixConfig::default(),
            None,
        );
        assert_eq!(result.summary, BookSummary::default());
        assert!(result.to_string().contains("Deals:            0"));
    }
}
