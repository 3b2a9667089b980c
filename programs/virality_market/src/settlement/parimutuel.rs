//! # Parimutuel Reward Math
//!
//! Winners recover their stake plus a share of the losing pool proportional
//! to their fraction of the winning pool:
//!
//! ```text
//! reward = stake + stake * L / W        (integer floor division)
//! ```
//!
//! For example, with W = 150 and L = 50:
//! - 100 staked → 100 + 5000 / 150 = 133
//! - 50 staked  → 50 + 2500 / 150  = 66
//! - 1 unit of dust stays in the vault
//!
//! W = 0 has no defined reward. It only happens when the authority resolves to
//! a side nobody backed, so there is no claimant, but the formula still
//! refuses it explicitly.

use anchor_lang::prelude::*;

use crate::errors::MarketError;

pub struct Parimutuel;

impl Parimutuel {
    /// Reward owed to a winning stake
    ///
    /// # Arguments
    /// * `stake` - Original stake of the claimant
    /// * `winning_pool` - Total staked on the resolved outcome (W)
    /// * `losing_pool` - Total staked on the other outcome (L)
    pub fn reward(stake: u64, winning_pool: u64, losing_pool: u64) -> Result<u64> {
        require!(winning_pool > 0, MarketError::EmptyWinningPool);

        let share = (stake as u128)
            .checked_mul(losing_pool as u128)
            .ok_or(MarketError::Overflow)?
            .checked_div(winning_pool as u128)
            .ok_or(MarketError::EmptyWinningPool)?;

        let reward = (stake as u128)
            .checked_add(share)
            .ok_or(MarketError::Overflow)?;

        u64::try_from(reward).map_err(|_| error!(MarketError::Overflow))
    }

    /// What the vault can still owe to holders of `unclaimed_stake`.
    ///
    /// The sum of floored individual rewards never exceeds the floored reward
    /// of their aggregate, so pricing the aggregate bounds every remaining
    /// claim.
    pub fn remaining_liability(unclaimed_stake: u64, winning_pool: u64, losing_pool: u64) -> Result<u64> {
        if winning_pool == 0 {
            return Ok(0);
        }
        Self::reward(unclaimed_stake, winning_pool, losing_pool)
    }
}
