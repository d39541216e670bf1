//! FundMe Contract
//!
//! Crowdfunding ledger that:
//! - Accepts CSPR contributions worth at least `MINIMUM_USD` at the feed price
//! - Tracks the cumulative amount funded per contributor
//! - Lets only the owner withdraw the whole balance, clearing every record
//!
//! ## Withdrawal
//!
//! Both withdrawal entry points follow the same order: snapshot the payout,
//! clear all records and the funder list, then transfer. The payout is the
//! purse balance read in the same call, so the transfer itself has no
//! ledger-side precondition left to check. If the VM rejects the transfer,
//! the call reverts with the VM's own transfer error (not a `FundMeError`)
//! and every write made before it is discarded.
//!
//! - `withdraw` walks the funder list in storage, re-reading its length and
//!   each entry on every iteration.
//! - `cheaper_withdraw` copies the list into memory once and only writes the
//!   per-funder mapping while iterating.

use odra::prelude::*;
use odra::casper_types::{U256, U512};
use crate::errors::FundMeError;
use crate::price_converter::{PriceConverter, PRICE_SCALE};

/// Minimum contribution in USD, scaled by 1e18 ($50)
pub const MINIMUM_USD: u128 = 50 * PRICE_SCALE;

/// FundMe Contract
#[odra::module]
pub struct FundMe {
    /// Deployer, the only account allowed to withdraw
    owner: Var<Address>,
    /// Aggregator used to value contributions
    price_feed: Var<Address>,
    /// Cumulative motes funded per contributor
    address_to_amount_funded: Mapping<Address, U512>,
    /// Funding events in order: index -> contributor
    funders: Mapping<u32, Address>,
    /// Live length of `funders`
    funder_count: Var<u32>,
}

#[odra::module]
impl FundMe {
    /// Initialize with the price feed; the caller becomes the owner
    pub fn init(&mut self, price_feed: Address) {
        let owner = self.env().caller();
        self.owner.set(owner);
        self.price_feed.set(price_feed);
        self.funder_count.set(0);
    }

    // ========== Funding ==========

    /// Fund the ledger with the attached CSPR
    #[odra(payable)]
    pub fn fund(&mut self) {
        let amount = self.env().attached_value();
        let price_feed = self.get_price_feed();
        let usd_value = PriceConverter::get_conversion_rate(&self.env(), price_feed, amount);
        if usd_value < U256::from(MINIMUM_USD) {
            self.env().revert(FundMeError::InsufficientContribution);
        }

        let funder = self.env().caller();
        let funded = self.get_address_to_amount_funded(funder);
        self.address_to_amount_funded.set(&funder, funded + amount);

        let count = self.get_funder_count();
        let next_count = match next_funder_count(count) {
            Some(next) => next,
            None => self.env().revert(FundMeError::FunderListFull),
        };
        self.funders.set(&count, funder);
        self.funder_count.set(next_count);
    }

    // ========== Withdrawal (Owner Only) ==========

    /// Withdraw the full balance to the owner, reading the funder list from storage
    pub fn withdraw(&mut self) {
        self.require_owner();
        let payout = self.env().self_balance();

        let mut index = 0u32;
        while index < self.funder_count.get().unwrap_or(0) {
            if let Some(funder) = self.funders.get(&index) {
                self.address_to_amount_funded.set(&funder, U512::zero());
            }
            index += 1;
        }
        self.funder_count.set(0);

        self.pay_owner(payout);
    }

    /// Withdraw the full balance to the owner, iterating an in-memory copy of the funder list
    pub fn cheaper_withdraw(&mut self) {
        self.require_owner();
        let payout = self.env().self_balance();

        let funders = self.load_funders();
        for funder in funders.iter() {
            self.address_to_amount_funded.set(funder, U512::zero());
        }
        self.funder_count.set(0);

        self.pay_owner(payout);
    }

    // ========== View Functions ==========

    pub fn get_owner(&self) -> Address {
        match self.owner.get() {
            Some(owner) => owner,
            None => self.env().revert(FundMeError::NotInitialized),
        }
    }

    pub fn get_price_feed(&self) -> Address {
        match self.price_feed.get() {
            Some(feed) => feed,
            None => self.env().revert(FundMeError::NotInitialized),
        }
    }

    /// Cumulative amount funded by `funder` since the last withdrawal
    pub fn get_address_to_amount_funded(&self, funder: Address) -> U512 {
        self.address_to_amount_funded.get(&funder).unwrap_or(U512::zero())
    }

    /// Contributor of the `index`-th funding event
    pub fn get_funder(&self, index: u32) -> Address {
        if index >= self.get_funder_count() {
            self.env().revert(FundMeError::IndexOutOfRange);
        }
        match self.funders.get(&index) {
            Some(funder) => funder,
            None => self.env().revert(FundMeError::IndexOutOfRange),
        }
    }

    pub fn get_funder_count(&self) -> u32 {
        self.funder_count.get().unwrap_or(0)
    }

    pub fn get_minimum_usd(&self) -> U256 {
        U256::from(MINIMUM_USD)
    }

    /// Balance currently held by the ledger
    pub fn get_balance(&self) -> U512 {
        self.env().self_balance()
    }

    /// Version of the configured price feed
    pub fn get_version(&self) -> U256 {
        PriceConverter::get_version(&self.env(), self.get_price_feed())
    }

    // ========== Internal Functions ==========

    fn require_owner(&self) {
        if self.env().caller() != self.get_owner() {
            self.env().revert(FundMeError::Unauthorized);
        }
    }

    /// Single read of the funder list into memory
    fn load_funders(&self) -> Vec<Address> {
        let count = self.get_funder_count();
        (0..count).filter_map(|index| self.funders.get(&index)).collect()
    }

    fn pay_owner(&mut self, payout: U512) {
        if payout.is_zero() {
            return;
        }
        let owner = self.get_owner();
        self.env().transfer_tokens(&owner, &payout);
    }
}

/// Funder list length after one more funding event; `None` once `u32` is exhausted
fn next_funder_count(count: u32) -> Option<u32> {
    count.checked_add(1)
}
