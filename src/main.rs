//! ftp-engine CLI
//!
//! Price transactions from the command line.
//!
//! # Usage
//!
//! ```bash
//! # Price one deal
//! ftp-engine price --input deal.json
//!
//! # Price under a +100 bp rate shock, JSON output
//! ftp-engine price --input deal.json --shock-rate 100 --format json
//!
//! # Run the standard shock ladder
//! ftp-engine scenarios --input deal.json
//!
//! # Price a book of deals with a custom calibration
//! ftp-engine book --input book.json --config desk.json
//!
//! # Generate a random book for testing
//! ftp-engine generate --deals 25 --output book.json
//! ```

use ftp_engine::config::PricingConfig;
use ftp_engine::core::shocks::PricingShocks;
use ftp_engine::core::transaction::Transaction;
use ftp_engine::simulation::book::price_book;
use ftp_engine::simulation::scenarios::{run_scenarios, standard_ladder};
use ftp_engine::simulation::stress_test::{generate_random_book, BookConfig};
use rust_decimal::Decimal;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::process;

fn print_usage() {
    eprintln!(
        r#"ftp-engine — funds transfer pricing and deal approval

USAGE:
    ftp-engine <COMMAND> [OPTIONS]

COMMANDS:
    price       Price a single transaction
    scenarios   Price a transaction under the standard shock ladder
    book        Price a book of transactions
    generate    Generate a random deal book (for testing)
    help        Show this message

OPTIONS (price, scenarios, book):
    --input <FILE>            Path to JSON deal (or array of deals for book)
    --config <FILE>           Path to JSON pricing configuration
    --format <FORMAT>         Output format: text (default) or json

OPTIONS (price, book):
    --shock-rate <BPS>        Additive interest-rate shock in basis points
    --shock-liquidity <BPS>   Additive liquidity-spread shock in basis points

OPTIONS (generate):
    --deals <N>               Number of deals (default: 50)
    --output <FILE>           Write to file instead of stdout

EXAMPLES:
    ftp-engine price --input deal.json
    ftp-engine price --input deal.json --shock-rate 100 --format json
    ftp-engine scenarios --input deal.json --config desk.json
    ftp-engine book --input book.json --shock-liquidity 50
    ftp-engine generate --deals 25 --output book.json"#
    );
}

/// Options shared by the pricing commands.
struct PricingArgs {
    input: String,
    config: PricingConfig,
    shocks: PricingShocks,
    json: bool,
}

fn next_value(args: &[String], i: usize, flag: &str, what: &str) -> String {
    args.get(i).cloned().unwrap_or_else(|| {
        eprintln!("{} requires {}", flag, what);
        process::exit(1);
    })
}

fn parse_bps(value: &str, flag: &str) -> Decimal {
    value.parse().unwrap_or_else(|e| {
        eprintln!("Invalid {} '{}': {}", flag, value, e);
        process::exit(1);
    })
}

fn parse_pricing_args(args: &[String], allow_shocks: bool) -> PricingArgs {
    let mut input_path = None;
    let mut config_path: Option<String> = None;
    let mut format = "text".to_string();
    let mut shock_rate = Decimal::ZERO;
    let mut shock_liquidity = Decimal::ZERO;
    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--input" => {
                i += 1;
                input_path = Some(next_value(args, i, "--input", "a file path"));
            }
            "--config" => {
                i += 1;
                config_path = Some(next_value(args, i, "--config", "a file path"));
            }
            "--format" => {
                i += 1;
                format = next_value(args, i, "--format", "'text' or 'json'");
            }
            "--shock-rate" if allow_shocks => {
                i += 1;
                shock_rate = parse_bps(&next_value(args, i, "--shock-rate", "basis points"), "--shock-rate");
            }
            "--shock-liquidity" if allow_shocks => {
                i += 1;
                shock_liquidity = parse_bps(
                    &next_value(args, i, "--shock-liquidity", "basis points"),
                    "--shock-liquidity",
                );
            }
            _ => {
                eprintln!("Unknown option: {}", args[i]);
                process::exit(1);
            }
        }
        i += 1;
    }

    let input = input_path.unwrap_or_else(|| {
        eprintln!("Error: --input <FILE> is required");
        process::exit(1);
    });

    let config = match config_path {
        Some(path) => PricingConfig::load(&path).unwrap_or_else(|e| {
            eprintln!("Error: {}", e);
            process::exit(1);
        }),
        None => PricingConfig::default(),
    };

    if format != "text" && format != "json" {
        eprintln!("Unknown format '{}': expected 'text' or 'json'", format);
        process::exit(1);
    }

    PricingArgs {
        input,
        config,
        shocks: PricingShocks::new(shock_rate, shock_liquidity),
        json: format == "json",
    }
}

fn load_json<T: DeserializeOwned>(path: &str) -> T {
    let content = fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("Error reading file '{}': {}", path, e);
        process::exit(1);
    });

    serde_json::from_str(&content).unwrap_or_else(|e| {
        eprintln!("Error parsing JSON: {}", e);
        eprintln!("Expected format:");
        eprintln!(
            r#"{{
  "category": "Asset", "currency": "USD", "amount": "10000000",
  "durationMonths": 6, "productType": "LOAN_COMM",
  "riskWeight": "100", "capitalRatio": "12", "targetROE": "15",
  "marginTarget": "2.5", "operationalCostBps": "45"
}}"#
        );
        process::exit(1);
    })
}

fn to_json<T: Serialize>(value: &T) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|e| {
        eprintln!("Error serializing output: {}", e);
        process::exit(1);
    })
}

fn cmd_price(args: &[String]) {
    let opts = parse_pricing_args(args, true);
    let deal: Transaction = load_json(&opts.input);
    let engine = opts.config.engine();

    let shocks = (!opts.shocks.is_zero()).then_some(&opts.shocks);
    let quote = engine.quote(&deal, &opts.config.approval_matrix, shocks);

    if opts.json {
        println!("{}", to_json(&quote));
    } else {
        if !opts.shocks.is_zero() {
            println!("Shocks: {}\n", opts.shocks);
        }
        println!("{}", quote.result);
        println!("{}", quote.accounting_entry);
    }
}

fn cmd_scenarios(args: &[String]) {
    let opts = parse_pricing_args(args, false);
    let deal: Transaction = load_json(&opts.input);
    let engine = opts.config.engine();

    let report = run_scenarios(
        &engine,
        &deal,
        &opts.config.approval_matrix,
        &standard_ladder(),
    );

    if opts.json {
        println!("{}", to_json(&report));
    } else {
        println!("{}", report);
        if let Some(worst) = report.worst() {
            println!("Worst case: {} (RAROC {:.2}%)", worst.scenario, worst.raroc);
        }
    }
}

fn cmd_book(args: &[String]) {
    let opts = parse_pricing_args(args, true);
    let deals: Vec<Transaction> = load_json(&opts.input);
    let engine = opts.config.engine();

    let shocks = (!opts.shocks.is_zero()).then_some(&opts.shocks);
    let result = price_book(&engine, &deals, &opts.config.approval_matrix, shocks);

    if opts.json {
        println!("{}", to_json(&result));
    } else {
        println!("{}", result);
    }
}

fn cmd_generate(args: &[String]) {
    let mut deals = 50usize;
    let mut output_path: Option<String> = None;
    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--deals" => {
                i += 1;
                deals = args
                    .get(i)
                    .and_then(|s| s.parse().ok())
                    .unwrap_or_else(|| {
                        eprintln!("--deals requires a number");
                        process::exit(1);
                    });
            }
            "--output" => {
                i += 1;
                output_path = Some(next_value(args, i, "--output", "a file path"));
            }
            _ => {
                eprintln!("Unknown option: {}", args[i]);
                process::exit(1);
            }
        }
        i += 1;
    }

    let config = BookConfig {
        deal_count: deals,
        ..Default::default()
    };
    let book = generate_random_book(&config);
    let json = to_json(&book);

    if let Some(path) = output_path {
        fs::write(&path, &json).unwrap_or_else(|e| {
            eprintln!("Error writing to '{}': {}", path, e);
            process::exit(1);
        });
        eprintln!("Generated {} deals → {}", book.len(), path);
    } else {
        println!("{}", json);
    }
}

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        process::exit(1);
    }

    let command = args[1].as_str();
    let rest = &args[2..];

    match command {
        "price" => cmd_price(rest),
        "scenarios" => cmd_scenarios(rest),
        "book" => cmd_book(rest),
        "generate" => cmd_generate(rest),
        "help" | "--help" | "-h" => print_usage(),
        _ => {
            eprintln!("Unknown command: {}", command);
            print_usage();
            process::exit(1);
        }
    }
}
