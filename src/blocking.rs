//! Synchronous client.
//!
//! Same endpoints, errors and URL construction as [`crate::Client`], but
//! every call blocks the current thread until the response has been read.
//! Built on reqwest's blocking transport, so a `blocking::Client` must not be
//! created, used or dropped on an async runtime worker thread. From async
//! code, move it into `tokio::task::spawn_blocking`.
//!
//! ```no_run
//! use mcp_defi_rs::blocking::Client;
//!
//! let client = Client::new("http://localhost:8000");
//! let apy = client.get_stablecoin_apy("USDC", 10_000.0, 30, None)?;
//! println!("{apy}");
//! # Ok::<(), mcp_defi_rs::McpError>(())
//! ```

use crate::McpError;
use crate::http::common::Endpoint;
use crate::http::request::get_json_blocking;
use reqwest::blocking::Client as ReqwestBlockingClient;
use serde::Serialize;
use serde_json::Value;
use std::time::Duration;

/// Blocking client for the MCP DeFi scoring server.
#[derive(Debug, Clone)]
pub struct Client {
    base_url: String,
    http_client: ReqwestBlockingClient,
    loud_wire: bool,
}

/// Builder for blocking [`Client`] instances.
#[derive(Debug)]
pub struct ClientBuilder {
    base_url: String,
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
    loud_wire: bool,
}

impl ClientBuilder {
    /// Sets the total request timeout.
    ///
    /// reqwest's blocking client applies a 30 second timeout by default.
    /// Unless this is called the builder disables it, so an unresponsive
    /// server blocks the calling thread indefinitely.
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Sets the connection timeout.
    #[must_use]
    pub const fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = Some(timeout);
        self
    }

    /// Prints every request and response to stderr, as if `LOUD_WIRE` were set.
    #[must_use]
    pub const fn loud_wire(mut self, enabled: bool) -> Self {
        self.loud_wire = enabled;
        self
    }

    /// Builds the blocking `Client`.
    ///
    /// # Errors
    ///
    /// Returns [`McpError::ClientBuild`] if the HTTP client cannot be created.
    pub fn build(self) -> Result<Client, McpError> {
        let mut builder = ReqwestBlockingClient::builder().timeout(self.timeout);

        if let Some(connect_timeout) = self.connect_timeout {
            builder = builder.connect_timeout(connect_timeout);
        }

        let http_client = builder
            .build()
            .map_err(|e| McpError::ClientBuild(e.to_string()))?;

        Ok(Client {
            base_url: self.base_url,
            http_client,
            loud_wire: self.loud_wire,
        })
    }
}

impl Client {
    /// Creates a new builder for blocking `Client` instances.
    #[must_use]
    pub fn builder(base_url: impl Into<String>) -> ClientBuilder {
        ClientBuilder {
            base_url: base_url.into(),
            timeout: None,
            connect_timeout: None,
            loud_wire: false,
        }
    }

    /// Creates a new blocking client with no request timeout.
    ///
    /// # Panics
    ///
    /// Panics if the TLS backend cannot be initialized, like
    /// `reqwest::blocking::Client::new`. Use [`Client::builder`] to get an
    /// error instead.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        let http_client = ReqwestBlockingClient::builder()
            .timeout(None)
            .build()
            .expect("Failed to build HTTP client");
        Self {
            base_url,
            http_client,
            loud_wire: false,
        }
    }

    /// The base URL every endpoint path is appended to.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Issues a GET for a pre-built endpoint and returns the JSON body as-is.
    ///
    /// # Errors
    ///
    /// - [`McpError::Http`] on transport failure (DNS, connection refused, timeout)
    /// - [`McpError::Api`] on any 4xx/5xx status
    /// - [`McpError::Json`] if the body is not valid JSON
    pub fn request(&self, endpoint: &Endpoint<'_>) -> Result<Value, McpError> {
        get_json_blocking(&self.http_client, &self.base_url, endpoint, self.loud_wire)
    }

    /// Retrieves a DeFi risk score.
    ///
    /// # Errors
    ///
    /// See [`Client::request`].
    pub fn get_defi_risk(
        &self,
        collateral_ratio: f64,
        liquidity: f64,
        volatility: f64,
        market_cap: Option<f64>,
    ) -> Result<Value, McpError> {
        self.request(&Endpoint::DefiRisk {
            collateral_ratio,
            liquidity,
            volatility,
            market_cap,
        })
    }

    /// Retrieves the result of a DAO vote; `voter_weights` is sent as JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`McpError::Json`] if `voter_weights` cannot be serialized,
    /// otherwise see [`Client::request`].
    pub fn get_dao_vote_result<T>(
        &self,
        proposal_id: &str,
        voter_weights: &T,
    ) -> Result<Value, McpError>
    where
        T: Serialize + ?Sized,
    {
        self.request(&Endpoint::dao_vote(proposal_id, voter_weights)?)
    }

    /// Retrieves an NFT valuation.
    ///
    /// # Errors
    ///
    /// See [`Client::request`].
    pub fn get_nft_valuation(
        &self,
        rarity_score: f64,
        market_cap: f64,
        trading_volume: f64,
        artist_reputation: Option<f64>,
    ) -> Result<Value, McpError> {
        self.request(&Endpoint::NftValuation {
            rarity_score,
            market_cap,
            trading_volume,
            artist_reputation,
        })
    }

    /// Retrieves a lending rate.
    ///
    /// # Errors
    ///
    /// See [`Client::request`].
    pub fn get_lending_rate(
        &self,
        collateral_type: &str,
        loan_duration: u32,
        loan_amount: f64,
        market_conditions: Option<&str>,
    ) -> Result<Value, McpError> {
        self.request(&Endpoint::LendingRate {
            collateral_type,
            loan_duration,
            loan_amount,
            market_conditions,
        })
    }

    /// Retrieves a stablecoin deposit APY.
    ///
    /// # Errors
    ///
    /// See [`Client::request`].
    pub fn get_stablecoin_apy(
        &self,
        stablecoin_name: &str,
        deposit_amount: f64,
        lockup_period: u32,
        platform_risk: Option<f64>,
    ) -> Result<Value, McpError> {
        self.request(&Endpoint::StablecoinApy {
            stablecoin_name,
            deposit_amount,
            lockup_period,
            platform_risk,
        })
    }
}
