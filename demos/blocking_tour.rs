//! Example: the synchronous client
//!
//! Run with: cargo run --example blocking_tour
//!
//! No async runtime is involved; each call blocks until the server answers.

use mcp_defi_rs::blocking::Client;
use std::env;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let base_url = env::var("MCP_BASE_URL").unwrap_or_else(|_| "http://localhost:8000".to_string());
    let client = Client::new(base_url);

    match client.get_defi_risk(0.5, 1000.0, 0.1, None) {
        Ok(risk) => println!("DeFi risk: {risk}"),
        Err(e) if e.is_request_failure() => {
            println!("Could not reach {}: {e}", e.url().unwrap_or("server"));
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    }

    let apy = client.get_stablecoin_apy("DAI", 2_500.0, 30, Some(0.1))?;
    println!("Stablecoin APY: {apy}");

    Ok(())
}
