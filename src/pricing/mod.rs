//! The FTP pricing pipeline.
//!
//! Stages run leaf-first, each consuming the previous stage's output:
//! liquidity → regulatory → ESG → strategic spread → shock overlay and
//! capital/RAROC. [`engine::PricingEngine`] is the single entry point.

pub mod capital;
pub mod engine;
pub mod esg;
pub mod liquidity;
pub mod regulatory;
pub mod result;
pub mod shock;
pub mod strategic;
