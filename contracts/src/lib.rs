//! FundMe Contracts
//!
//! Casper crowdfunding ledger priced through an aggregator feed.
//!
//! ## Architecture
//!
//! - **FundMe**: Contributor ledger with minimum USD contribution and owner-only withdrawal
//! - **PriceConverter**: CSPR -> USD conversion over the configured price feed
//! - **MockV3Aggregator**: Settable price feed for development networks and tests

#![cfg_attr(target_arch = "wasm32", no_std)]

#[cfg(target_arch = "wasm32")]
extern crate alloc;

// Re-export odra for downstream usage
pub use odra;

// Core module declarations
pub mod types;
pub mod errors;
pub mod price_converter;

// Contract modules
pub mod fund_me;
pub mod price_feed;
