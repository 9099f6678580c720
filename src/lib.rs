//! # ftp-engine
//!
//! Funds Transfer Pricing and deal decision engine for a bank's treasury desk.
//!
//! Given a single transaction (loan, deposit, credit line or off-balance
//! commitment) the engine builds the internal cost of funds, adds
//! regulatory, capital and ESG charges, derives the client rate, measures
//! risk-adjusted return and routes the deal to an approval level.
//!
//! ## Architecture
//!
//! - **core** — Transaction inputs: categories, currencies, ESG classes, shocks
//! - **tables** — Injectable rate tables: liquidity curve, basis spreads, ESG grid, behavioural models
//! - **pricing** — The pricing pipeline and the `FtpResult` waterfall
//! - **decision** — Approval matrix and RAROC routing
//! - **accounting** — Ledger-entry preview for a priced deal
//! - **simulation** — Shock ladders, book pricing and random books
//! - **config** — JSON deployment configuration

pub mod accounting;
pub mod config;
pub mod core;
pub mod decision;
pub mod pricing;
pub mod simulation;
pub mod tables;

/// Convenience re-exports for common usage.
pub mod prelude {
    pub use crate::accounting::entry::AccountingEntry;
    pub use crate::config::PricingConfig;
    pub use crate::core::currency::CurrencyCode;
    pub use crate::core::deal::{DealId, ProductType};
    pub use crate::core::shocks::PricingShocks;
    pub use crate::core::transaction::{Category, PhysicalRisk, Transaction, TransitionRisk};
    pub use crate::decision::approval::{ApprovalLevel, ApprovalMatrixConfig};
    pub use crate::pricing::engine::{PricingEngine, Quote};
    pub use crate::pricing::result::FtpResult;
    pub use crate::tables::RateTables;
}
