use approx::assert_relative_eq;
use ftp_engine::config::PricingConfig;
use ftp_engine::core::shocks::PricingShocks;
use ftp_engine::core::transaction::{Category, PhysicalRisk, Transaction, TransitionRisk};
use ftp_engine::decision::approval::{ApprovalLevel, ApprovalMatrixConfig};
use ftp_engine::pricing::engine::PricingEngine;
use ftp_engine::pricing::result::FtpResult;
use ftp_engine::simulation::book::price_book;
use ftp_engine::simulation::scenarios::{run_scenarios, standard_ladder};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn worked_deal() -> Transaction {
    Transaction::new(Category::Asset, "USD", dec!(10_000_000), 6, "LOAN_COMM")
        .with_id("TRD-HYPO-001")
        .with_capital(dec!(100), dec!(12), dec!(15))
        .with_margin_target(dec!(2.5))
        .with_operational_cost_bps(dec!(45))
        .with_esg(TransitionRisk::Neutral, PhysicalRisk::Low)
}

fn standard_matrix() -> ApprovalMatrixConfig {
    ApprovalMatrixConfig::new(dec!(15), dec!(10), dec!(5))
}

fn decimal_field(json: &serde_json::Value, name: &str) -> Decimal {
    let raw = &json[name];
    let text = raw
        .as_str()
        .map(str::to_string)
        .unwrap_or_else(|| raw.to_string());
    text.parse()
        .unwrap_or_else(|e| panic!("field {} is not a decimal ({}): {}", name, text, e))
}

/// Full pipeline: deal → cost stack → capital → approval → accounting.
#[test]
fn worked_scenario_end_to_end() {
    let engine = PricingEngine::default();
    let quote = engine.quote(&worked_deal(), &standard_matrix(), None);
    let result = &quote.result;

    assert_eq!(result.base_rate, dec!(3.48));
    assert_eq!(result.liquidity_spread, dec!(0.35));
    assert_eq!(result.total_ftp, dec!(3.83));
    assert_eq!(result.regulatory_cost, dec!(0.75));
    assert_eq!(result.floor_price, dec!(5.03));
    assert_eq!(result.technical_price, dec!(6.83));
    assert_eq!(result.final_client_rate, dec!(6.33));
    assert_eq!(result.economic_profit, dec!(-0.50));
    assert_relative_eq!(result.raroc_f64(), 10.8333, epsilon = 1e-4);
    assert_eq!(result.approval_level, ApprovalLevel::L1Manager);

    let entry = &quote.accounting_entry;
    assert_eq!(entry.source, "BU_Commercial");
    assert_eq!(entry.dest, "ALM_Treasury");
    assert_eq!(entry.amount_debit, dec!(383_000));
    assert!(entry.is_balanced());
}

#[test]
fn incomplete_deal_yields_empty_quote() {
    let engine = PricingEngine::default();

    let mut no_product = worked_deal();
    no_product.product_type = "".into();
    let mut no_amount = worked_deal();
    no_amount.amount = Decimal::ZERO;

    for deal in [no_product, no_amount] {
        let shocks = PricingShocks::new(dec!(200), dec!(50));
        let quote = engine.quote(&deal, &standard_matrix(), Some(&shocks));
        assert_eq!(quote.result, FtpResult::rejected_empty());
        assert_eq!(quote.result.approval_level, ApprovalLevel::Rejected);
        assert_eq!(quote.result.total_ftp, Decimal::ZERO);
        assert!(quote.accounting_entry.is_empty());
    }
}

#[test]
fn result_json_contract() {
    let result = PricingEngine::default().price(&worked_deal(), &standard_matrix(), None);
    let json = serde_json::to_value(&result).unwrap();

    assert_eq!(json["approvalLevel"], "L1_Manager");
    assert_eq!(decimal_field(&json, "totalFTP"), dec!(3.83));
    assert_eq!(decimal_field(&json, "finalClientRate"), dec!(6.33));
    assert_eq!(decimal_field(&json, "esgTransitionCharge"), Decimal::ZERO);
    for field in [
        "baseRate",
        "liquiditySpread",
        "liquidityPremium",
        "clcCharge",
        "strategicSpread",
        "regulatoryCost",
        "lcrCost",
        "nsfrCost",
        "operationalCost",
        "capitalCharge",
        "esgPhysicalCharge",
        "floorPrice",
        "technicalPrice",
        "raroc",
        "economicProfit",
    ] {
        assert!(json.get(field).is_some(), "missing field {}", field);
    }

    let back: FtpResult = serde_json::from_value(json).unwrap();
    assert_eq!(back, result);
}

#[test]
fn deal_parsed_from_json_prices_like_builder() {
    let deal: Transaction = serde_json::from_str(
        r#"{
            "id": "TRD-HYPO-001",
            "category": "Asset",
            "currency": "USD",
            "amount": "10000000",
            "durationMonths": 6,
            "productType": "LOAN_COMM",
            "riskWeight": 100,
            "capitalRatio": 12,
            "targetROE": 15,
            "marginTarget": "2.5",
            "operationalCostBps": 45,
            "transitionRisk": "Neutral",
            "physicalRisk": "Low"
        }"#,
    )
    .unwrap();

    let engine = PricingEngine::default();
    assert_eq!(
        engine.price(&deal, &standard_matrix(), None),
        engine.price(&worked_deal(), &standard_matrix(), None)
    );
}

#[test]
fn configuration_drives_engine_and_matrix() {
    let config = PricingConfig::from_json_str(
        r#"{
            "approvalMatrix": { "autoApprovalThreshold": 18, "l1Threshold": 12, "l2Threshold": 6 },
            "accounting": { "treasuryAccount": "ALM_Central" }
        }"#,
    )
    .unwrap();

    let quote = config
        .engine()
        .quote(&worked_deal(), &config.approval_matrix, None);
    assert_eq!(quote.result.approval_level, ApprovalLevel::L2Committee);
    assert_eq!(quote.accounting_entry.dest, "ALM_Central");
    assert_eq!(quote.accounting_entry.source, "BU_Commercial");
}

#[test]
fn deposit_carries_liquidity_buffer_cost() {
    let deposit = Transaction::new(Category::Liability, "EUR", dec!(5_000_000), 12, "DEP_TERM")
        .with_margin_target(dec!(-0.5))
        .with_lcr_outflow_pct(dec!(40));

    let quote = PricingEngine::default().quote(&deposit, &standard_matrix(), None);
    let result = &quote.result;

    // 40% outflow at the longer bucket's 15 bp basis spread
    assert_eq!(result.clc_charge, dec!(0.06));
    assert_eq!(result.capital_charge, Decimal::ZERO);
    assert_eq!(result.raroc, Decimal::ZERO);
    assert_eq!(result.approval_level, ApprovalLevel::Rejected);
    assert_eq!(quote.accounting_entry.source, "ALM_Treasury");
    assert_eq!(quote.accounting_entry.dest, "BU_Commercial");
}

#[test]
fn long_dated_deposit_uses_longer_basis_bucket() {
    let deposit = Transaction::new(Category::Liability, "USD", dec!(5_000_000), 120, "DEP_TERM")
        .with_lcr_outflow_pct(dec!(40));

    let result = PricingEngine::default().price(&deposit, &standard_matrix(), None);
    assert_eq!(result.clc_charge, dec!(0.06));
}

#[test]
fn degenerate_amounts_price_without_panicking() {
    let engine = PricingEngine::default();
    let dust = Transaction::new(Category::Liability, "USD", Decimal::new(1, 20), 12, "DEP_TERM")
        .with_lcr_outflow_pct(dec!(40))
        .with_commitment(dec!(10_000_000_000), false);

    let quote = engine.quote(&dust, &standard_matrix(), None);
    assert_eq!(quote.result.clc_charge, dec!(0.06));
    assert!(quote.accounting_entry.is_balanced());

    let mut whale = worked_deal().with_id("TRD-MAX");
    whale.amount = Decimal::MAX;
    let quote = engine.quote(&whale, &standard_matrix(), None);
    assert_eq!(quote.result.total_ftp, dec!(3.83));
    assert!(quote.accounting_entry.is_balanced());
    assert!(quote.accounting_entry.amount_debit > Decimal::ZERO);

    let book = price_book(&engine, &[dust, whale], &standard_matrix(), None);
    assert_eq!(book.summary.unpriced_count, 0);
}

#[test]
fn scenario_ladder_on_worked_deal() {
    let report = run_scenarios(
        &PricingEngine::default(),
        &worked_deal(),
        &standard_matrix(),
        &standard_ladder(),
    );

    assert_eq!(report.outcomes.len(), standard_ladder().len());
    assert_eq!(report.base_approval, ApprovalLevel::L1Manager);
    let plus_100 = report
        .outcomes
        .iter()
        .find(|o| o.scenario == "Rates +100")
        .unwrap();
    assert_eq!(plus_100.raroc, dec!(2.5));
    assert_eq!(plus_100.approval_level, ApprovalLevel::Rejected);
    assert!(report
        .outcomes
        .iter()
        .all(|o| o.final_client_rate == dec!(6.33)));
}

#[test]
fn book_pricing_matches_single_deal_pricing() {
    let engine = PricingEngine::default();
    let book = vec![
        worked_deal(),
        worked_deal().with_id("TRD-HYPO-002").with_margin_target(dec!(4)),
        Transaction::default().with_id("DRAFT"),
    ];

    let result = price_book(&engine, &book, &standard_matrix(), None);
    for (entry, deal) in result.entries.iter().zip(&book) {
        assert_eq!(entry.id, deal.id);
        assert_eq!(entry.result, engine.price(deal, &standard_matrix(), None));
    }
    assert_eq!(result.summary.unpriced_count, 1);
    assert_eq!(result.summary.count(ApprovalLevel::L1Manager), 1);
    assert_eq!(result.summary.count(ApprovalLevel::Auto), 1);
    assert_eq!(result.summary.total_notional, dec!(20_000_000));
}
