//! Deployment records.
//!
//! The deploy binary writes one JSON record per chain under `deployments/`;
//! the withdraw binary reads it back to find the deployed ledger.

use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use odra::prelude::Address;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default directory for deployment records
pub const DEPLOYMENTS_DIR: &str = "deployments";

#[derive(Debug, Error)]
pub enum DeploymentError {
    #[error("deployment record {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed deployment record: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid address `{0}` in deployment record")]
    InvalidAddress(String),
}

/// Addresses produced by one deployment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeploymentRecord {
    pub chain_name: String,
    pub fund_me: String,
    pub price_feed: String,
    /// Whether `price_feed` is a mock deployed alongside the ledger
    pub mock_price_feed: bool,
}

impl DeploymentRecord {
    pub fn new(
        chain_name: &str,
        fund_me: Address,
        price_feed: Address,
        mock_price_feed: bool,
    ) -> Self {
        Self {
            chain_name: chain_name.to_string(),
            fund_me: fund_me.to_string(),
            price_feed: price_feed.to_string(),
            mock_price_feed,
        }
    }

    pub fn fund_me_address(&self) -> Result<Address, DeploymentError> {
        parse_address(&self.fund_me)
    }

    pub fn price_feed_address(&self) -> Result<Address, DeploymentError> {
        parse_address(&self.price_feed)
    }

    /// Record location for `chain_name` inside `dir`
    pub fn path(dir: &Path, chain_name: &str) -> PathBuf {
        dir.join(format!("{chain_name}.json"))
    }

    /// Write the record, replacing any earlier deployment on the same chain
    pub fn save(&self, dir: &Path) -> Result<PathBuf, DeploymentError> {
        let path = Self::path(dir, &self.chain_name);
        fs::create_dir_all(dir).map_err(|source| DeploymentError::Io {
            path: dir.to_path_buf(),
            source,
        })?;
        let json = serde_json::to_string_pretty(self)?;
        fs::write(&path, json).map_err(|source| DeploymentError::Io {
            path: path.clone(),
            source,
        })?;
        Ok(path)
    }

    pub fn load(dir: &Path, chain_name: &str) -> Result<Self, DeploymentError> {
        let path = Self::path(dir, chain_name);
        let json = fs::read_to_string(&path).map_err(|source| DeploymentError::Io {
            path: path.clone(),
            source,
        })?;
        Ok(serde_json::from_str(&json)?)
    }
}

fn parse_address(raw: &str) -> Result<Address, DeploymentError> {
    Address::from_str(raw).map_err(|_| DeploymentError::InvalidAddress(raw.to_string()))
}
