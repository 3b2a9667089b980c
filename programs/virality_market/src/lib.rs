//! # Virality Market: Parimutuel Settlement
//!
//! Participants stake on whether a social-media post crosses a virality
//! threshold. A single authority reports the outcome, and winners split the
//! losing pool in proportion to their stake.
//!
//! ## How it works
//! - The authority opens a market per identifier; stakes go into a vault PDA.
//! - Each participant holds at most one position per market.
//! - The authority resolves the market exactly once.
//! - Winners claim `stake + stake * losing / winning` exactly once.
//! - Rounding dust and unsolicited deposits are swept by the authority.

use anchor_lang::prelude::*;

pub mod errors;
pub mod instructions;
pub mod settlement;
pub mod state;

pub use instructions::*;
pub use state::{MarketSummary, Outcome};

// Replace with your deployed program ID
declare_id!("VirLMkt3qGv8JrZ2Yj7oS9Nq4hTfPw1cXbKe5dUaRsA");

#[program]
pub mod virality_market {
    use super::*;

    /// Initialize the global configuration
    pub fn initialize(ctx: Context<Initialize>, authority: Pubkey) -> Result<()> {
        ctx.accounts.initialize(authority, &ctx.bumps)
    }

    /// Hand the authority role to another key (authority only)
    pub fn transfer_authority(ctx: Context<TransferAuthority>, new_authority: Pubkey) -> Result<()> {
        ctx.accounts.transfer_authority(new_authority)
    }

    /// Open a market under a fresh identifier (authority only)
    pub fn create_market(
        ctx: Context<CreateMarket>,
        market_id: u64,
        post_uri: String,
        virality_threshold: u64,
    ) -> Result<()> {
        ctx.accounts
            .create_market(market_id, post_uri, virality_threshold, &ctx.bumps)
    }

    /// Back one outcome of an open market
    pub fn place_stake(ctx: Context<PlaceStake>, outcome: Outcome, amount: u64) -> Result<()> {
        ctx.accounts.place_stake(outcome, amount, &ctx.bumps)
    }

    /// Report the outcome (authority only, once per market)
    pub fn resolve_market(ctx: Context<ResolveMarket>, outcome: Outcome) -> Result<()> {
        ctx.accounts.resolve_market(outcome)
    }

    /// Collect a winning position
    pub fn claim_reward(ctx: Context<ClaimReward>) -> Result<u64> {
        ctx.accounts.claim_reward()
    }

    /// Send value to a market vault without opening a position
    pub fn deposit(ctx: Context<Deposit>, amount: u64) -> Result<()> {
        ctx.accounts.deposit(amount)
    }

    /// Sweep vault value not owed to any position (authority only)
    pub fn withdraw_residual(ctx: Context<WithdrawResidual>) -> Result<u64> {
        ctx.accounts.withdraw_residual()
    }

    /// Read pool totals and resolution state of a market
    pub fn get_market(ctx: Context<GetMarket>, _market_id: u64) -> Result<MarketSummary> {
        ctx.accounts.get_market()
    }
}
