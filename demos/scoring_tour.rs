//! Example: calling every scoring endpoint with the async client
//!
//! Run with: cargo run --example scoring_tour
//!
//! Set `MCP_BASE_URL` to point at a running server (defaults to
//! `http://localhost:8000`) and `LOUD_WIRE=1` to see the raw traffic.

use mcp_defi_rs::{Client, McpError};
use std::collections::BTreeMap;
use std::env;
use std::time::Duration;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let base_url = env::var("MCP_BASE_URL").unwrap_or_else(|_| "http://localhost:8000".to_string());
    let client = Client::builder(base_url)
        .timeout(Duration::from_secs(30))
        .build()?;

    println!("=== DeFi risk ===");
    report(client.get_defi_risk(1.5, 2_000_000.0, 0.35, Some(50_000_000.0)).await);

    println!("\n=== DAO vote ===");
    let weights = BTreeMap::from([("alice", 10), ("bob", 5), ("carol", 2)]);
    report(client.get_dao_vote_result("prop-1", &weights).await);

    println!("\n=== NFT valuation ===");
    report(client.get_nft_valuation(87.5, 1_000_000.0, 42_000.0, None).await);

    println!("\n=== Lending rate ===");
    report(client.get_lending_rate("ETH", 30, 5_000.0, Some("bullish")).await);

    println!("\n=== Stablecoin APY ===");
    report(client.get_stablecoin_apy("USDC", 10_000.0, 90, None).await);

    Ok(())
}

fn report(result: Result<serde_json::Value, McpError>) {
    match result {
        Ok(value) => println!("{value:#}"),
        Err(McpError::Api {
            status_code, url, ..
        }) => println!("Server rejected request to {url} (HTTP {status_code})"),
        Err(e) => println!("Request failed: {e}"),
    }
}
