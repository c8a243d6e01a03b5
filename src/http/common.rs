use crate::wire_format::to_json_text;
use serde::Serialize;

/// Represents the scoring endpoints exposed by the MCP server.
///
/// Each variant carries the typed arguments of one endpoint. Optional
/// arguments stay in the query string even when unset; they are sent with an
/// empty value (`market_cap=`).
#[derive(Debug, Clone, PartialEq)]
pub enum Endpoint<'a> {
    /// DeFi protocol risk score
    DefiRisk {
        collateral_ratio: f64,
        liquidity: f64,
        volatility: f64,
        market_cap: Option<f64>,
    },
    /// DAO vote result for a proposal
    DaoVote {
        proposal_id: &'a str,
        /// Voter weights already encoded as JSON text, see [`Endpoint::dao_vote`]
        voter_weights: String,
    },
    /// NFT valuation
    NftValuation {
        rarity_score: f64,
        market_cap: f64,
        trading_volume: f64,
        artist_reputation: Option<f64>,
    },
    /// Lending rate quote
    LendingRate {
        collateral_type: &'a str,
        loan_duration: u32,
        loan_amount: f64,
        market_conditions: Option<&'a str>,
    },
    /// Stablecoin deposit APY
    StablecoinApy {
        stablecoin_name: &'a str,
        deposit_amount: f64,
        lockup_period: u32,
        platform_risk: Option<f64>,
    },
}

impl<'a> Endpoint<'a> {
    /// Builds a [`Endpoint::DaoVote`], encoding `voter_weights` as JSON text.
    ///
    /// # Errors
    ///
    /// Returns an error if `voter_weights` cannot be serialized.
    pub fn dao_vote<T>(proposal_id: &'a str, voter_weights: &T) -> Result<Self, serde_json::Error>
    where
        T: Serialize + ?Sized,
    {
        Ok(Self::DaoVote {
            proposal_id,
            voter_weights: to_json_text(voter_weights)?,
        })
    }

    /// The fixed URL path of this endpoint.
    #[must_use]
    pub const fn path(&self) -> &'static str {
        match self {
            Self::DefiRisk { .. } => "/mcp/defi/risk",
            Self::DaoVote { .. } => "/mcp/dao/vote",
            Self::NftValuation { .. } => "/mcp/nft/valuation",
            Self::LendingRate { .. } => "/mcp/defi/lending_rate",
            Self::StablecoinApy { .. } => "/mcp/defi/stablecoin_apy",
        }
    }

    /// Short name used in log output.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::DefiRisk { .. } => "defi_risk",
            Self::DaoVote { .. } => "dao_vote",
            Self::NftValuation { .. } => "nft_valuation",
            Self::LendingRate { .. } => "lending_rate",
            Self::StablecoinApy { .. } => "stablecoin_apy",
        }
    }

    /// Returns the query parameters for this endpoint, in wire order.
    ///
    /// Every key of the endpoint is always present. `None` becomes an empty
    /// value.
    #[must_use]
    pub fn query_params(&self) -> Vec<(&'static str, String)> {
        match self {
            Self::DefiRisk {
                collateral_ratio,
                liquidity,
                volatility,
                market_cap,
            } => vec![
                ("collateral_ratio", collateral_ratio.to_string()),
                ("liquidity", liquidity.to_string()),
                ("volatility", volatility.to_string()),
                ("market_cap", optional(*market_cap)),
            ],
            Self::DaoVote {
                proposal_id,
                voter_weights,
            } => vec![
                ("proposal_id", (*proposal_id).to_string()),
                ("voter_weights", voter_weights.clone()),
            ],
            Self::NftValuation {
                rarity_score,
                market_cap,
                trading_volume,
                artist_reputation,
            } => vec![
                ("rarity_score", rarity_score.to_string()),
                ("market_cap", market_cap.to_string()),
                ("trading_volume", trading_volume.to_string()),
                ("artist_reputation", optional(*artist_reputation)),
            ],
            Self::LendingRate {
                collateral_type,
                loan_duration,
                loan_amount,
                market_conditions,
            } => vec![
                ("collateral_type", (*collateral_type).to_string()),
                ("loan_duration", loan_duration.to_string()),
                ("loan_amount", loan_amount.to_string()),
                ("market_conditions", optional(*market_conditions)),
            ],
            Self::StablecoinApy {
                stablecoin_name,
                deposit_amount,
                lockup_period,
                platform_risk,
            } => vec![
                ("stablecoin_name", (*stablecoin_name).to_string()),
                ("deposit_amount", deposit_amount.to_string()),
                ("lockup_period", lockup_period.to_string()),
                ("platform_risk", optional(*platform_risk)),
            ],
        }
    }

    /// Percent-encoded query string, without the leading `?`.
    #[must_use]
    pub fn query_string(&self) -> String {
        self.query_params()
            .iter()
            .map(|(key, value)| {
                format!(
                    "{}={}",
                    urlencoding::encode(key),
                    urlencoding::encode(value)
                )
            })
            .collect::<Vec<_>>()
            .join("&")
    }
}

fn optional<T: ToString>(value: Option<T>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

/// Constructs the target URL of an endpoint: `{base_url}{path}`.
///
/// This is the URL reported in errors. The base URL is used verbatim, so a
/// trailing slash on it yields a double slash in the result.
#[must_use]
pub fn construct_endpoint_url(base_url: &str, endpoint: &Endpoint<'_>) -> String {
    format!("{base_url}{}", endpoint.path())
}

/// Constructs the full request URL, including the query string.
#[must_use]
pub fn construct_request_url(base_url: &str, endpoint: &Endpoint<'_>) -> String {
    format!(
        "{}?{}",
        construct_endpoint_url(base_url, endpoint),
        endpoint.query_string()
    )
}
