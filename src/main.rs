// src/main.rs
mod bonds;
mod config;
mod extractors;
mod treasury;
mod utils;

use clap::Parser;
use serde::Serialize;
use utils::AppError;
use bonds::{BondCollection, BondRecord};
use treasury::TreasuryClient;

/// Command Line Interface for the savings bond tracker
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the YAML file listing the bonds to value
    #[arg(short, long, default_value = "./config.yaml")]
    config: String,

    /// Print the bonds and totals as JSON on stdout
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Report<'a> {
    bonds: &'a [BondRecord],
    unmatured: BondCollection,
    total_value: Option<f64>,
    total_interest: Option<f64>,
    total_purchase_price: Option<f64>,
}

/// Logs a failed total and keeps going with the others.
fn report_total(label: &str, total: Result<f64, utils::error::AggregateError>) -> Option<f64> {
    match total {
        Ok(sum) => {
            tracing::info!("{} = ${:.2}", label, sum);
            Some(sum)
        }
        Err(e) => {
            tracing::error!("Error getting {}: {}", label.to_lowercase(), e);
            None
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), AppError> {
    // 1. Setup Logging (reads RUST_LOG env var)
    utils::logging::setup_logging();

    // 2. Parse CLI Arguments
    let args = Args::parse();
    tracing::debug!("Starting with args: {:?}", args);

    // 3. Load the bond list
    let config = config::load_config(&args.config)?;

    // 4. Value every bond, in order
    let client = TreasuryClient::new()?;
    let bonds = treasury::load_bonds(&client, &config.bonds).await?;

    // 5. Totals are independent; one bad column does not hide the others
    let total_value = report_total("Total Value", bonds.total_value());
    let total_interest = report_total("Total Interest", bonds.total_interest());
    let total_purchase_price =
        report_total("Total Original Purchase Price", bonds.total_purchase_price());

    let unmatured = bonds.unmatured();
    if unmatured.is_empty() {
        tracing::info!("All bonds have matured");
    } else {
        tracing::info!("Found {} bonds still to mature", unmatured.len());
    }
    for bond in &unmatured {
        tracing::info!("Bond {} will mature on {}", bond.serial, bond.final_maturity);
    }

    if args.json {
        let report = Report {
            bonds: bonds.records(),
            unmatured,
            total_value,
            total_interest,
            total_purchase_price,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    }

    Ok(())
}
