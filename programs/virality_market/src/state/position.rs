//! Participant Positions
//!
//! One position per (market, participant). The amount is zeroed on payout and
//! that zero is what blocks a second claim.

use anchor_lang::prelude::*;

use crate::errors::MarketError;
use crate::state::Outcome;

/// A participant's single stake in a market
///
/// Seeds: ["position", market, owner]
#[account]
#[derive(InitSpace, Default)]
pub struct Position {
    /// Market this position belongs to
    pub market: Pubkey,

    /// Participant who staked
    pub owner: Pubkey,

    /// Outcome the participant backed (Unset while empty)
    pub outcome: Outcome,

    /// Open stake; zero when empty or already paid
    pub amount: u64,

    /// Unix timestamp of the stake
    pub staked_at: i64,

    /// PDA bump seed
    pub bump: u8,
}

impl Position {
    pub const SEED: &'static [u8] = b"position";

    /// Record a fresh stake. Rejects a second stake while one is open.
    pub fn open(
        &mut self,
        market: Pubkey,
        owner: Pubkey,
        outcome: Outcome,
        amount: u64,
        now: i64,
        bump: u8,
    ) -> Result<()> {
        require!(self.amount == 0, MarketError::DuplicateStake);

        self.market = market;
        self.owner = owner;
        self.outcome = outcome;
        self.amount = amount;
        self.staked_at = now;
        self.bump = bump;

        Ok(())
    }

    /// Move a winning position to its terminal state and hand back the stake.
    pub fn take_winning_stake(&mut self, resolved: Outcome) -> Result<u64> {
        require!(self.amount > 0, MarketError::NoStake);
        require!(self.outcome == resolved, MarketError::WrongPrediction);

        let stake = self.amount;
        self.amount = 0;

        Ok(stake)
    }
}
