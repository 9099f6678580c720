//! Foundational types: transactions, currencies, deal identifiers, shocks.

pub mod currency;
pub mod deal;
pub mod shocks;
pub mod transaction;
