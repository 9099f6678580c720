//! Shock-ladder sensitivity of a loan and of a random book.
//!
//! Shows that shocks erode RAROC without repricing the client, and how
//! approval routing shifts across the book under stress.

use ftp_engine::prelude::*;
use ftp_engine::simulation::book::price_book;
use ftp_engine::simulation::scenarios::{run_scenarios, standard_ladder};
use ftp_engine::simulation::stress_test::{generate_random_book, BookConfig};
use rust_decimal_macros::dec;

fn main() {
    println!("╔═════════════════════════════════════════╗");
    println!("║  ftp-engine: Shock Ladder Sensitivity   ║");
    println!("╚═════════════════════════════════════════╝\n");

    let engine = PricingEngine::default();
    let matrix = ApprovalMatrixConfig::default();

    // --- Scenario 1: Single loan under the standard ladder ---
    println!("━━━ Scenario 1: 3Y Mortgage Under Standard Ladder ━━━\n");

    let mortgage = Transaction::new(Category::Asset, "USD", dec!(750_000), 36, "LOAN_MORT")
        .with_capital(dec!(35), dec!(10), dec!(12))
        .with_margin_target(dec!(1.6))
        .with_operational_cost_bps(dec!(25))
        .with_esg(TransitionRisk::Amber, PhysicalRisk::Medium)
        .with_behavioural_model("PREPAY-MORT-STD");

    let report = run_scenarios(&engine, &mortgage, &matrix, &standard_ladder());
    println!("{}", report);
    if let Some(worst) = report.worst() {
        println!("Worst case: {} (RAROC {:.2}%)\n", worst.scenario, worst.raroc);
    }
    for change in report.approval_changes() {
        println!(
            "  {} moves approval {} → {}",
            change.scenario, report.base_approval, change.approval_level
        );
    }
    println!();

    // --- Scenario 2: Random book, base vs combined stress ---
    println!("━━━ Scenario 2: Random Book, Base vs Combined Stress ━━━\n");

    let book = generate_random_book(&BookConfig {
        deal_count: 200,
        ..Default::default()
    });
    let stress = PricingShocks::new(dec!(200), dec!(50));

    let base = price_book(&engine, &book, &matrix, None);
    let stressed = price_book(&engine, &book, &matrix, Some(&stress));

    println!("{:<14} {:>8} {:>8}", "Approval", "Base", "Stress");
    for level in ApprovalLevel::ALL {
        println!(
            "{:<14} {:>8} {:>8}",
            level.as_str(),
            base.summary.count(level),
            stressed.summary.count(level)
        );
    }
    println!(
        "\nWeighted RAROC: {:.2}% → {:.2}%",
        base.summary.weighted_raroc, stressed.summary.weighted_raroc
    );
}
