use crate::core::currency::CurrencyCode;
use crate::core::transaction::{Category, Transaction};
use crate::pricing::result::FtpResult;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// General-ledger preview of the internal funds transfer for one year.
///
/// The business unit and central treasury settle the FTP between them: an
/// asset-side unit pays treasury for its funding, treasury pays a
/// liability-side unit for the funding it raises. Both legs carry the same
/// amount, so the entry always balances.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountingEntry {
    /// Account debited (the payer of the transfer).
    pub source: String,
    /// Account credited (the receiver of the transfer).
    pub dest: String,
    pub amount_debit: Decimal,
    pub amount_credit: Decimal,
    pub currency: Option<CurrencyCode>,
    pub value_date: Option<NaiveDate>,
}

impl AccountingEntry {
    /// Entry for a deal that was not priced.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.source.is_empty() && self.dest.is_empty() && self.amount_debit.is_zero()
    }

    /// Debit and credit legs are equal.
    pub fn is_balanced(&self) -> bool {
        self.amount_debit == self.amount_credit
    }
}

impl fmt::Display for AccountingEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return writeln!(f, "=== Accounting Entry ===\n(none)");
        }
        let currency = self
            .currency
            .as_ref()
            .map(|c| c.as_str())
            .unwrap_or("");
        writeln!(f, "=== Accounting Entry ===")?;
        writeln!(f, "Dr {:<20} {:>18} {}", self.source, self.amount_debit, currency)?;
        writeln!(f, "Cr {:<20} {:>18} {}", self.dest, self.amount_credit, currency)?;
        if let Some(date) = self.value_date {
            writeln!(f, "Value Date: {}", date)?;
        }
        Ok(())
    }
}

/// Builds the accounting preview from a finished pricing result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AccountingEntryBuilder {
    /// Central treasury (ALM) account.
    pub treasury_account: String,
    /// Business unit used when a deal does not name one.
    pub default_business_unit: String,
}

impl Default for AccountingEntryBuilder {
    fn default() -> Self {
        Self {
            treasury_account: "ALM_Treasury".to_string(),
            default_business_unit: "BU_Commercial".to_string(),
        }
    }
}

impl AccountingEntryBuilder {
    /// Annual FTP transfer on the booked balance: `booked × total FTP / 100`,
    /// rounded to cents.
    ///
    /// A negative transfer (e.g. a negative-rate currency) reverses the legs
    /// so that amounts stay non-negative. Transfers beyond the `Decimal`
    /// range saturate.
    pub fn build(&self, deal: &Transaction, result: &FtpResult) -> AccountingEntry {
        if !deal.is_priceable() {
            return AccountingEntry::empty();
        }

        let business_unit = deal
            .business_unit
            .clone()
            .unwrap_or_else(|| self.default_business_unit.clone());
        let treasury = self.treasury_account.clone();

        let transfer = transfer_amount(deal.booked_amount(), result.total_ftp);

        let (mut source, mut dest) = match deal.category {
            Category::Asset | Category::OffBalance => (business_unit, treasury),
            Category::Liability => (treasury, business_unit),
        };
        if transfer < Decimal::ZERO {
            std::mem::swap(&mut source, &mut dest);
        }
        let amount = transfer.abs();

        AccountingEntry {
            source,
            dest,
            amount_debit: amount,
            amount_credit: amount,
            currency: Some(deal.currency.clone()),
            value_date: deal.start_date,
        }
    }
}

fn transfer_amount(booked: Decimal, total_ftp: Decimal) -> Decimal {
    booked
        .checked_mul(total_ftp)
        .and_then(|t| t.checked_div(Decimal::ONE_HUNDRED))
        .or_else(|| (booked / Decimal::ONE_HUNDRED).checked_mul(total_ftp))
        .map(|t| t.round_dp(2))
        .unwrap_or(if booked.is_sign_negative() != total_ftp.is_sign_negative() {
            Decimal::MIN
        } else {
            Decimal::MAX
        })
}
