//! Virality Market State
//!
//! Each market is an independent parimutuel pool on one binary question:
//! does the referenced post cross its virality threshold?

use anchor_lang::prelude::*;

use crate::errors::MarketError;
use crate::settlement::Parimutuel;

/// Individual market account
///
/// Seeds: ["market", market_id.to_le_bytes()]
#[account]
#[derive(InitSpace, Default)]
pub struct Market {
    /// Unique market identifier
    pub id: u64,

    /// Post under observation
    #[max_len(200)]
    pub post_uri: String,

    /// Engagement count the post has to exceed for Yes to win
    pub virality_threshold: u64,

    /// Cumulative stake on Yes
    pub total_yes: u64,

    /// Cumulative stake on No
    pub total_no: u64,

    /// Unix timestamp of creation; zero means the market does not exist
    pub created_at: i64,

    /// Set once by the authority, never cleared
    pub resolved: bool,

    /// Winning outcome (only valid after resolution)
    pub outcome: Outcome,

    /// Unix timestamp of resolution
    pub resolved_at: i64,

    /// Original stakes of winners already paid out
    pub claimed_stake: u64,

    /// Rewards released so far
    pub total_paid: u64,

    /// Residual value swept by the authority
    pub residual_withdrawn: u64,

    /// Reentrancy guard for value-moving instructions
    pub locked: bool,

    /// PDA bump seed
    pub bump: u8,

    /// Vault PDA bump seed
    pub vault_bump: u8,
}

impl Market {
    pub const SEED: &'static [u8] = b"market";
    pub const VAULT_SEED: &'static [u8] = b"vault";
    pub const MAX_POST_URI_LEN: usize = 200;

    pub fn exists(&self) -> bool {
        self.created_at != 0
    }

    /// Validate a stake against the market lifecycle and its own arguments.
    pub fn check_stake(&self, outcome: Outcome, amount: u64) -> Result<()> {
        require!(!self.resolved, MarketError::MarketResolved);
        require!(outcome.is_decided(), MarketError::InvalidChoice);
        require!(amount > 0, MarketError::ZeroStake);
        Ok(())
    }

    /// Add an accepted stake to the pool of the chosen outcome.
    pub fn add_stake(&mut self, outcome: Outcome, amount: u64) -> Result<()> {
        let pool = match outcome {
            Outcome::Yes => &mut self.total_yes,
            Outcome::No => &mut self.total_no,
            Outcome::Unset => return err!(MarketError::InvalidChoice),
        };
        *pool = pool.checked_add(amount).ok_or(MarketError::Overflow)?;
        Ok(())
    }

    /// Commit the outcome. Irreversible.
    pub fn resolve(&mut self, outcome: Outcome, now: i64) -> Result<()> {
        require!(!self.resolved, MarketError::MarketResolved);
        require!(outcome.is_decided(), MarketError::InvalidChoice);

        self.resolved = true;
        self.outcome = outcome;
        self.resolved_at = now;

        Ok(())
    }

    /// (winning pool, losing pool) of a resolved market
    pub fn pools(&self) -> Result<(u64, u64)> {
        require!(self.resolved, MarketError::MarketNotResolved);
        match self.outcome {
            Outcome::Yes => Ok((self.total_yes, self.total_no)),
            Outcome::No => Ok((self.total_no, self.total_yes)),
            Outcome::Unset => err!(MarketError::MarketNotResolved),
        }
    }

    /// Price a winning stake and book it as paid. Returns the reward.
    pub fn settle_claim(&mut self, stake: u64) -> Result<u64> {
        let (winning, losing) = self.pools()?;
        let reward = Parimutuel::reward(stake, winning, losing)?;

        self.claimed_stake = self
            .claimed_stake
            .checked_add(stake)
            .ok_or(MarketError::Overflow)?;
        self.total_paid = self
            .total_paid
            .checked_add(reward)
            .ok_or(MarketError::Overflow)?;

        Ok(reward)
    }

    /// Upper bound of what the vault still owes to position holders.
    pub fn outstanding_liability(&self) -> Result<u64> {
        if !self.resolved {
            return self
                .total_yes
                .checked_add(self.total_no)
                .ok_or_else(|| error!(MarketError::Overflow));
        }

        let (winning, losing) = self.pools()?;
        let unclaimed = winning
            .checked_sub(self.claimed_stake)
            .ok_or(MarketError::Overflow)?;
        Parimutuel::remaining_liability(unclaimed, winning, losing)
    }

    /// Value in the vault not attributable to any open position.
    pub fn residual(&self, vault_balance: u64) -> Result<u64> {
        Ok(vault_balance.saturating_sub(self.outstanding_liability()?))
    }

    pub fn record_residual_withdrawal(&mut self, amount: u64) -> Result<()> {
        self.residual_withdrawn = self
            .residual_withdrawn
            .checked_add(amount)
            .ok_or(MarketError::Overflow)?;
        Ok(())
    }

    pub fn summary(&self) -> MarketSummary {
        MarketSummary {
            id: self.id,
            total_yes: self.total_yes,
            total_no: self.total_no,
            resolved: self.resolved,
            outcome: self.outcome,
            created_at: self.created_at,
            resolved_at: self.resolved_at,
        }
    }
}

/// Prediction outcome
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq, InitSpace, Debug, Default)]
pub enum Outcome {
    /// Not chosen / not yet determined
    #[default]
    Unset,
    /// The post crossed the threshold
    Yes,
    /// The post stayed below the threshold
    No,
}

impl Outcome {
    pub fn is_decided(self) -> bool {
        self != Outcome::Unset
    }
}

/// Read-only view returned by `get_market`
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct MarketSummary {
    pub id: u64,
    pub total_yes: u64,
    pub total_no: u64,
    pub resolved: bool,
    pub outcome: Outcome,
    pub created_at: i64,
    pub resolved_at: i64,
}
