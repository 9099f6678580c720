use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a transaction on the desk blotter.
///
/// The identifier is a label for display and reporting only; pricing never
/// branches on it.
///
/// # Examples
///
/// ```
/// use ftp_engine::core::deal::DealId;
///
/// let a = DealId::new("TRD-0001");
/// let b = DealId::new("TRD-0002");
/// assert_ne!(a, b);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DealId(String);

impl DealId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the string representation of this deal ID.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DealId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for DealId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for DealId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// Product code of a transaction (e.g. `LOAN_COMM`, `DEP_TERM`, `CRED_LINE`).
///
/// An empty product type marks an incomplete deal form; the pricing engine
/// short-circuits on it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductType(String);

impl ProductType {
    /// Product code used for revolving credit facilities.
    pub const CREDIT_LINE: &'static str = "CRED_LINE";

    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True when no product has been selected yet.
    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }

    /// True for credit-line products, which may carry an undrawn commitment.
    pub fn is_credit_line(&self) -> bool {
        self.0.trim().eq_ignore_ascii_case(Self::CREDIT_LINE)
    }
}

impl fmt::Display for ProductType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ProductType {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}
