//! Price one commercial loan and a term deposit.
//!
//! Walks through the full waterfall, the approval decision and the ledger
//! preview for each side of the balance sheet.

use ftp_engine::prelude::*;
use rust_decimal_macros::dec;

fn main() {
    println!("╔═════════════════════════════════════════╗");
    println!("║  ftp-engine: Worked Pricing Scenario    ║");
    println!("╚═════════════════════════════════════════╝\n");

    let engine = PricingEngine::default();
    let matrix = ApprovalMatrixConfig::new(dec!(15), dec!(10), dec!(5));

    // --- Scenario 1: Six-month commercial loan ---
    println!("━━━ Scenario 1: 6M Commercial Loan (USD 10m) ━━━\n");

    let loan = Transaction::new(Category::Asset, "USD", dec!(10_000_000), 6, "LOAN_COMM")
        .with_id("TRD-HYPO-001")
        .with_capital(dec!(100), dec!(12), dec!(15))
        .with_margin_target(dec!(2.5))
        .with_operational_cost_bps(dec!(45))
        .with_esg(TransitionRisk::Neutral, PhysicalRisk::Low);

    let quote = engine.quote(&loan, &matrix, None);
    println!("{}", quote.result);
    println!("{}", quote.accounting_entry);

    // --- Scenario 2: One-year operational deposit ---
    println!("━━━ Scenario 2: 12M Operational Deposit (EUR 5m) ━━━\n");

    let deposit = Transaction::new(Category::Liability, "EUR", dec!(5_000_000), 12, "DEP_CASA")
        .with_id("TRD-DEP-014")
        .with_margin_target(dec!(-0.75))
        .with_operational_cost_bps(dec!(15))
        .with_lcr_outflow_pct(dec!(25))
        .with_operational_segment(true)
        .with_behavioural_model("NMD-CASA-CORE")
        .with_business_unit("BU_Retail");

    let quote = engine.quote(&deposit, &matrix, None);
    println!("{}", quote.result);
    println!("{}", quote.accounting_entry);

    // --- Scenario 3: Incomplete deal form ---
    println!("━━━ Scenario 3: Incomplete Deal Form ━━━\n");

    let draft = Transaction::new(Category::Asset, "USD", dec!(0), 24, "LOAN_COMM");
    let quote = engine.quote(&draft, &matrix, None);
    println!(
        "Empty result: {}  Approval: {}  Ledger entry empty: {}",
        quote.result.is_empty(),
        quote.result.approval_level,
        quote.accounting_entry.is_empty()
    );
}
