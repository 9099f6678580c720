//! Ledger previews built from finished pricing results.

pub mod entry;
