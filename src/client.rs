use crate::McpError;
use crate::http::common::Endpoint;
use crate::http::request::get_json;
use reqwest::Client as ReqwestClient;
use serde::Serialize;
use serde_json::Value;
use std::time::Duration;

/// The main client for the MCP DeFi scoring server.
///
/// Holds the server's base URL and a reusable HTTP client. Cloning is cheap
/// and clones share the connection pool.
#[derive(Debug, Clone)]
pub struct Client {
    pub(crate) base_url: String,
    #[allow(clippy::struct_field_names)]
    pub(crate) http_client: ReqwestClient,
    pub(crate) loud_wire: bool,
}

/// Builder for `Client` instances.
///
/// # Example
///
/// ```
/// use mcp_defi_rs::Client;
/// use std::time::Duration;
///
/// let client = Client::builder("http://localhost:8000")
///     .timeout(Duration::from_secs(30))
///     .connect_timeout(Duration::from_secs(5))
///     .build()
///     .unwrap();
/// assert_eq!(client.base_url(), "http://localhost:8000");
/// ```
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
    /// If not set, requests never time out: an unresponsive server blocks
    /// the call indefinitely.
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Sets the connection timeout.
    ///
    /// If not set, uses reqwest's default.
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

    /// Builds the `Client`.
    ///
    /// # Errors
    ///
    /// Returns [`McpError::ClientBuild`] if the HTTP client cannot be created.
    pub fn build(self) -> Result<Client, McpError> {
        let mut builder = ReqwestClient::builder();

        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }

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
    /// Creates a new builder for `Client` instances.
    ///
    /// # Arguments
    ///
    /// * `base_url` - Scheme, host and optional port of the MCP server, e.g.
    ///   `http://localhost:8000`. Endpoint paths are appended verbatim.
    #[must_use]
    pub fn builder(base_url: impl Into<String>) -> ClientBuilder {
        ClientBuilder {
            base_url: base_url.into(),
            timeout: None,
            connect_timeout: None,
            loud_wire: false,
        }
    }

    /// Creates a new client with default settings.
    ///
    /// The base URL is not validated here; a malformed URL surfaces as
    /// [`McpError::Http`] on the first request.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            http_client: ReqwestClient::new(),
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
    pub async fn request(&self, endpoint: &Endpoint<'_>) -> Result<Value, McpError> {
        get_json(&self.http_client, &self.base_url, endpoint, self.loud_wire).await
    }

    /// Retrieves a DeFi risk score.
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use mcp_defi_rs::Client;
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let client = Client::new("http://localhost:8000");
    /// let risk = client.get_defi_risk(1.5, 2_000_000.0, 0.35, None).await?;
    /// println!("risk: {risk}");
    /// # Ok(())
    /// # }
    /// ```
    ///
    /// # Errors
    ///
    /// See [`Client::request`].
    pub async fn get_defi_risk(
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
        .await
    }

    /// Retrieves the result of a DAO vote.
    ///
    /// `voter_weights` (typically a map from voter ID to weight) is sent as a
    /// single JSON text query value, e.g. `{"alice": 10, "bob": 5}`. Maps and
    /// `json!` objects are sent sorted by key; see
    /// [`wire_format::to_json_text`](crate::wire_format::to_json_text) for
    /// keeping a fixed order.
    ///
    /// # Errors
    ///
    /// Returns [`McpError::Json`] if `voter_weights` cannot be serialized,
    /// otherwise see [`Client::request`].
    pub async fn get_dao_vote_result<T>(
        &self,
        proposal_id: &str,
        voter_weights: &T,
    ) -> Result<Value, McpError>
    where
        T: Serialize + ?Sized,
    {
        let endpoint = Endpoint::dao_vote(proposal_id, voter_weights)?;
        self.request(&endpoint).await
    }

    /// Retrieves an NFT valuation.
    ///
    /// # Errors
    ///
    /// See [`Client::request`].
    pub async fn get_nft_valuation(
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
        .await
    }

    /// Retrieves a lending rate.
    ///
    /// # Errors
    ///
    /// See [`Client::request`].
    pub async fn get_lending_rate(
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
        .await
    }

    /// Retrieves a stablecoin deposit APY.
    ///
    /// # Errors
    ///
    /// See [`Client::request`].
    pub async fn get_stablecoin_apy(
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
        .await
    }
}
