//! Price feed selection per network.
//!
//! Development chains get a freshly deployed `MockV3Aggregator`; every other
//! chain must be given the address of an existing feed.

use std::str::FromStr;

use odra::prelude::Address;
use thiserror::Error;

/// Chains where a mock price feed is deployed before FundMe
pub const DEVELOPMENT_CHAINS: &[&str] = &["casper-net-1", "casper-nctl", "odra-vm"];

/// Environment key holding the feed address for live chains
pub const PRICE_FEED_ENV: &str = "FUND_ME_PRICE_FEED";

/// Where the ledger's price feed comes from
#[derive(Debug, Clone, PartialEq)]
pub enum PriceFeedSource {
    /// Deploy a mock feed first and use its address
    DeployMock,
    /// Use an already deployed feed
    Existing(Address),
}

#[derive(Debug, Error, PartialEq)]
pub enum NetworkError {
    #[error("no price feed configured for chain `{0}` (set FUND_ME_PRICE_FEED)")]
    MissingPriceFeed(String),
    #[error("invalid price feed address `{0}`")]
    InvalidAddress(String),
}

pub fn is_development_chain(chain_name: &str) -> bool {
    DEVELOPMENT_CHAINS.iter().any(|chain| *chain == chain_name)
}

/// Pick the price feed for `chain_name`, given the configured address if any
pub fn resolve_price_feed(
    chain_name: &str,
    configured: Option<&str>,
) -> Result<PriceFeedSource, NetworkError> {
    if is_development_chain(chain_name) {
        return Ok(PriceFeedSource::DeployMock);
    }

    let raw = configured
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .ok_or_else(|| NetworkError::MissingPriceFeed(chain_name.to_string()))?;

    Address::from_str(raw)
        .map(PriceFeedSource::Existing)
        .map_err(|_| NetworkError::InvalidAddress(raw.to_string()))
}
