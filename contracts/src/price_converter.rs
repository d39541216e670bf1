//! Price Conversion
//!
//! Reads the latest round from an aggregator price feed and converts native
//! CSPR amounts (in motes) into USD values scaled by 1e18. Feed values are
//! trusted as returned; arithmetic that would overflow `U256` reverts with
//! `PriceOutOfRange` instead of panicking.

use odra::prelude::*;
use odra::casper_types::{RuntimeArgs, U256, U512};
use odra::CallDef;

use crate::errors::FundMeError;
use crate::types::RoundData;

/// Price scale (1e18 for USD values)
pub const PRICE_SCALE: u128 = 1_000_000_000_000_000_000;

/// Decimals of a normalized USD price
pub const PRICE_DECIMALS: u8 = 18;

/// Native currency decimals (1 CSPR = 1e9 motes)
pub const NATIVE_DECIMALS: u8 = 9;

/// Helper for price feed queries
pub struct PriceConverter;

impl PriceConverter {
    /// Latest answer and the feed's decimals
    pub fn get_latest_price(env: &odra::ContractEnv, price_feed: Address) -> (U256, u8) {
        let round = env.call_contract::<RoundData>(
            price_feed,
            CallDef::new("latest_round_data", false, RuntimeArgs::new()),
        );
        let decimals = env.call_contract::<u8>(
            price_feed,
            CallDef::new("decimals", false, RuntimeArgs::new()),
        );
        (round.answer, decimals)
    }

    /// USD price of one CSPR, scaled by 1e18
    pub fn get_price(env: &odra::ContractEnv, price_feed: Address) -> U256 {
        let (answer, decimals) = Self::get_latest_price(env, price_feed);
        match normalize_price(answer, decimals) {
            Some(price) => price,
            None => env.revert(FundMeError::PriceOutOfRange),
        }
    }

    /// USD value of `amount` motes, scaled by 1e18
    pub fn get_conversion_rate(env: &odra::ContractEnv, price_feed: Address, amount: U512) -> U256 {
        let price = Self::get_price(env, price_feed);
        match native_to_usd(price, amount) {
            Some(usd) => usd,
            None => env.revert(FundMeError::PriceOutOfRange),
        }
    }

    /// Version reported by the feed
    pub fn get_version(env: &odra::ContractEnv, price_feed: Address) -> U256 {
        env.call_contract::<U256>(
            price_feed,
            CallDef::new("version", false, RuntimeArgs::new()),
        )
    }
}

/// Rescale a feed answer with `decimals` places to 18 decimals
///
/// Returns `None` when scaling up overflows `U256`. Scaling down by a power
/// of ten too large for `U256` yields zero.
pub fn normalize_price(answer: U256, decimals: u8) -> Option<U256> {
    if decimals <= PRICE_DECIMALS {
        answer.checked_mul(pow10(PRICE_DECIMALS - decimals)?)
    } else {
        match pow10(decimals - PRICE_DECIMALS) {
            Some(divisor) => Some(answer / divisor),
            None => Some(U256::zero()),
        }
    }
}

/// USD value = price * amount / 10^NATIVE_DECIMALS
pub fn native_to_usd(price: U256, amount: U512) -> Option<U256> {
    let scaled = price.checked_mul(u512_to_u256(amount))?;
    Some(scaled / pow10(NATIVE_DECIMALS)?)
}

/// 10^exp, `None` past 10^77
fn pow10(exp: u8) -> Option<U256> {
    U256::from(10u64).checked_pow(U256::from(exp))
}

/// Convert U512 to U256 (safe for CSPR amounts which fit in U256)
///
/// Takes the lower 256 bits.
pub fn u512_to_u256(value: U512) -> U256 {
    let mut bytes = [0u8; 64];
    value.to_little_endian(&mut bytes);
    U256::from_little_endian(&bytes[..32])
}
