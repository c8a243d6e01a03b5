//! Client for the MCP DeFi scoring server.
//!
//! Five GET endpoints, each returning the server's JSON verbatim:
//!
//! | Method | Endpoint |
//! |---|---|
//! | [`Client::get_defi_risk`] | `/mcp/defi/risk` |
//! | [`Client::get_dao_vote_result`] | `/mcp/dao/vote` |
//! | [`Client::get_nft_valuation`] | `/mcp/nft/valuation` |
//! | [`Client::get_lending_rate`] | `/mcp/defi/lending_rate` |
//! | [`Client::get_stablecoin_apy`] | `/mcp/defi/stablecoin_apy` |
//!
//! ```no_run
//! use mcp_defi_rs::Client;
//! use serde::Serialize;
//!
//! // Field order is kept on the wire; maps and `json!` objects are sorted.
//! #[derive(Serialize)]
//! struct Weights {
//!     bob: u32,
//!     alice: u32,
//! }
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), mcp_defi_rs::McpError> {
//! let client = Client::new("http://localhost:8000");
//!
//! let risk = client.get_defi_risk(0.5, 1000.0, 0.1, None).await?;
//! println!("risk score: {}", risk["risk_score"]);
//!
//! let weights = Weights { bob: 5, alice: 10 };
//! let vote = client.get_dao_vote_result("prop-1", &weights).await?;
//! println!("vote: {vote}");
//! # Ok(())
//! # }
//! ```
//!
//! A synchronous [`blocking::Client`] with the same methods is available
//! behind the default `blocking` feature.

mod client;
mod errors;
pub mod http;
pub mod wire_format;

#[cfg(feature = "blocking")]
pub mod blocking;

pub use client::{Client, ClientBuilder};
pub use errors::McpError;
pub use http::common::Endpoint;
