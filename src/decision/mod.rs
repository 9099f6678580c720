//! Governance decisions on priced transactions.

pub mod approval;
