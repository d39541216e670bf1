//! Common types shared by the ledger and its price feed.

use odra::prelude::*;
use odra::casper_types::U256;

/// Round data returned by an aggregator-style price feed
#[odra::odra_type]
pub struct RoundData {
    /// Round identifier
    pub round_id: u64,
    /// Price answer, scaled by the feed's decimals
    pub answer: U256,
    /// Block time the round started at
    pub started_at: u64,
    /// Block time the answer was last updated at
    pub updated_at: u64,
    /// Round in which the answer was computed
    pub answered_in_round: u64,
}
