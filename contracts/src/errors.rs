//! Ledger error definitions.

use odra::prelude::*;

/// FundMe errors
#[repr(u16)]
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum FundMeError {
    // Funding errors (1xx)
    InsufficientContribution = 100,
    FunderListFull = 101,

    // Access control errors (2xx)
    Unauthorized = 200,

    // Accessor errors (4xx)
    IndexOutOfRange = 400,

    // Configuration errors (5xx)
    NotInitialized = 500,

    // Price feed errors (6xx)
    RoundNotFound = 600,
    PriceOutOfRange = 601,
}

impl FundMeError {
    pub const fn message(&self) -> &'static str {
        match self {
            FundMeError::InsufficientContribution => "You need to spend more CSPR!",
            FundMeError::Unauthorized => "FundMe_NotOwner",
            FundMeError::FunderListFull => "Funder list is full",
            FundMeError::IndexOutOfRange => "Funder index out of range",
            FundMeError::NotInitialized => "Contract not initialized",
            FundMeError::RoundNotFound => "Price feed round not found",
            FundMeError::PriceOutOfRange => "Price feed answer out of range",
        }
    }
}

impl core::fmt::Display for FundMeError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.message())
    }
}

impl From<FundMeError> for OdraError {
    fn from(error: FundMeError) -> Self {
        #[cfg(target_arch = "wasm32")]
        {
            OdraError::user(error as u16)
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            OdraError::user(error as u16, error.message())
        }
    }
}
