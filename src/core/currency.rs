use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// ISO 4217-style currency code of a transaction.
///
/// # Examples
///
/// ```
/// use ftp_engine::core::currency::CurrencyCode;
///
/// let usd = CurrencyCode::new("USD");
/// let eur = CurrencyCode::new("EUR");
/// assert_ne!(usd, eur);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CurrencyCode(String);

impl CurrencyCode {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for CurrencyCode {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// Additive base-rate offsets per currency, in percent.
///
/// The base-rate proxy is quoted for the reference currency; other currencies
/// are shifted by a flat offset (EUR −1.0, JPY −2.5 by default). Currencies
/// without an entry have no offset.
///
/// # Examples
///
/// ```
/// use ftp_engine::core::currency::{CurrencyCode, CurrencyOffsets};
/// use rust_decimal_macros::dec;
///
/// let offsets = CurrencyOffsets::default();
/// assert_eq!(offsets.offset(&CurrencyCode::new("JPY")), dec!(-2.5));
/// assert_eq!(offsets.offset(&CurrencyCode::new("GBP")), dec!(0));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CurrencyOffsets {
    offsets: HashMap<CurrencyCode, Decimal>,
}

impl CurrencyOffsets {
    /// An empty table: every currency resolves to a zero offset.
    pub fn new() -> Self {
        Self {
            offsets: HashMap::new(),
        }
    }

    /// Set the offset (percent) applied to `currency`.
    pub fn with_offset(mut self, currency: CurrencyCode, offset: Decimal) -> Self {
        self.offsets.insert(currency, offset);
        self
    }

    /// Offset for `currency`, zero when unlisted.
    pub fn offset(&self, currency: &CurrencyCode) -> Decimal {
        self.offsets.get(currency).copied().unwrap_or(Decimal::ZERO)
    }

    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }
}

impl Default for CurrencyOffsets {
    fn default() -> Self {
        Self::new()
            .with_offset(CurrencyCode::new("EUR"), dec!(-1.0))
            .with_offset(CurrencyCode::new("JPY"), dec!(-2.5))
    }
}
