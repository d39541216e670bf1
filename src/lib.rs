//! FundMe deployment tooling.
//!
//! Host-side helpers shared by the livenet binaries:
//! - **config**: `.env` / environment driven settings
//! - **network**: price feed selection per chain
//! - **deployments**: per-chain record of deployed contract addresses

pub mod config;
pub mod deployments;
pub mod network;
