//! Tool configuration read from the environment.
//!
//! The livenet environment itself reads the `ODRA_CASPER_LIVENET_*` keys;
//! this only collects the values the binaries need on top of it.

use std::path::PathBuf;
use thiserror::Error;

use crate::deployments::DEPLOYMENTS_DIR;
use crate::network::PRICE_FEED_ENV;

pub const CHAIN_NAME_ENV: &str = "ODRA_CASPER_LIVENET_CHAIN_NAME";
pub const PAYMENT_AMOUNT_ENV: &str = "ODRA_CASPER_LIVENET_PAYMENT_AMOUNT";
pub const DEPLOYMENTS_DIR_ENV: &str = "FUND_ME_DEPLOYMENTS_DIR";

/// Gas payment per deploy/call in motes (200 CSPR)
pub const DEFAULT_PAYMENT_AMOUNT: u64 = 200_000_000_000;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("missing required environment variable {0}")]
    Missing(&'static str),
    #[error("invalid value `{value}` for {key}")]
    Invalid { key: &'static str, value: String },
}

/// Settings shared by the deploy and withdraw binaries
#[derive(Debug, Clone, PartialEq)]
pub struct ToolConfig {
    pub chain_name: String,
    pub payment_amount: u64,
    /// Price feed address for non-development chains
    pub price_feed: Option<String>,
    pub deployments_dir: PathBuf,
}

impl ToolConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let chain_name = lookup(CHAIN_NAME_ENV)
            .filter(|value| !value.trim().is_empty())
            .ok_or(ConfigError::Missing(CHAIN_NAME_ENV))?;

        let payment_amount = match lookup(PAYMENT_AMOUNT_ENV) {
            Some(value) => value.trim().parse::<u64>().map_err(|_| ConfigError::Invalid {
                key: PAYMENT_AMOUNT_ENV,
                value,
            })?,
            None => DEFAULT_PAYMENT_AMOUNT,
        };

        let deployments_dir = lookup(DEPLOYMENTS_DIR_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEPLOYMENTS_DIR));

        Ok(Self {
            chain_name: chain_name.trim().to_string(),
            payment_amount,
            price_feed: lookup(PRICE_FEED_ENV),
            deployments_dir,
        })
    }
}
