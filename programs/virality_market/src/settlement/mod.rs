//! # Settlement Module
//!
//! Pure accounting used by the instruction handlers: the parimutuel reward
//! formula and the per-market reentrancy guard.
//!
//! ## Parimutuel payout
//!
//! ```text
//!   reward = stake + floor(stake * losing_pool / winning_pool)
//!
//!   ┌──────────────┐        ┌──────────────┐
//!   │ winning pool │◀───────│ losing pool  │  redistributed pro rata
//!   └──────────────┘        └──────────────┘
//! ```
//!
//! Floor rounding leaves at most one unit of dust per claimant in the vault.
//! The authority sweeps it with `withdraw_residual`.

pub mod guard;
pub mod parimutuel;

pub use guard::*;
pub use parimutuel::*;

#[cfg(test)]
pub(crate) fn assert_market_error<T: std::fmt::Debug>(
    result: anchor_lang::Result<T>,
    expected: crate::errors::MarketError,
) {
    match result {
        Err(anchor_lang::error::Error::AnchorError(err)) => assert_eq!(
            err.error_code_number,
            expected as u32 + anchor_lang::error::ERROR_CODE_OFFSET,
            "expected {:?}, got {}",
            expected,
            err.error_name
        ),
        other => panic!("expected {:?}, got {:?}", expected, other),
    }
}
