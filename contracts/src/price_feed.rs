//! Price Feed Interface
//!
//! Aggregator-style USD price feed consumed by the ledger, plus a mock
//! implementation with a settable answer for development networks and tests.

use odra::prelude::*;
use odra::casper_types::U256;
use crate::errors::FundMeError;
use crate::types::RoundData;

/// Decimals used by the mock feed (matches CSPR/USD style feeds)
pub const DECIMALS: u8 = 8;

/// Initial mock answer: $2000 scaled by 1e8
pub const INITIAL_ANSWER: u64 = 200_000_000_000;

/// Version reported by the mock feed
const MOCK_VERSION: u64 = 0;

/// Aggregator interface for cross-contract calls
#[odra::external_contract]
pub trait AggregatorV3 {
    /// Decimals of the answer
    fn decimals(&self) -> u8;
    /// Feed implementation version
    fn version(&self) -> U256;
    /// Most recent round
    fn latest_round_data(&self) -> RoundData;
}

/// Mock aggregator with a manually driven answer
#[odra::module]
pub struct MockV3Aggregator {
    /// Decimals of every answer
    answer_decimals: Var<u8>,
    /// Id of the latest stored round
    latest_round: Var<u64>,
    /// Stored rounds by id
    rounds: Mapping<u64, RoundData>,
}

#[odra::module]
impl MockV3Aggregator {
    /// Initialize the feed with its decimals and a first answer
    pub fn init(&mut self, decimals: u8, initial_answer: U256) {
        self.answer_decimals.set(decimals);
        self.latest_round.set(0);
        self.update_answer(initial_answer);
    }

    // ========== Aggregator Interface ==========

    pub fn decimals(&self) -> u8 {
        self.answer_decimals.get().unwrap_or(DECIMALS)
    }

    pub fn version(&self) -> U256 {
        U256::from(MOCK_VERSION)
    }

    pub fn latest_round_data(&self) -> RoundData {
        self.get_round_data(self.latest_round())
    }

    /// Get a stored round, reverting if it was never written
    pub fn get_round_data(&self, round_id: u64) -> RoundData {
        match self.rounds.get(&round_id) {
            Some(round) => round,
            None => self.env().revert(FundMeError::RoundNotFound),
        }
    }

    pub fn latest_round(&self) -> u64 {
        self.latest_round.get().unwrap_or(0)
    }

    pub fn latest_answer(&self) -> U256 {
        self.latest_round_data().answer
    }

    // ========== Mock Controls ==========

    /// Publish a new answer as the next round, stamped with the current block time
    pub fn update_answer(&mut self, answer: U256) {
        let round_id = self.latest_round() + 1;
        let now = self.env().get_block_time();
        self.store_round(round_id, answer, now, now);
    }

    /// Overwrite a round with explicit data and make it the latest
    pub fn update_round_data(
        &mut self,
        round_id: u64,
        answer: U256,
        timestamp: u64,
        started_at: u64,
    ) {
        self.store_round(round_id, answer, timestamp, started_at);
    }

    fn store_round(&mut self, round_id: u64, answer: U256, updated_at: u64, started_at: u64) {
        self.latest_round.set(round_id);
        self.rounds.set(
            &round_id,
            RoundData {
                round_id,
                answer,
                started_at,
                updated_at,
                answered_in_round: round_id,
            },
        );
    }
}
