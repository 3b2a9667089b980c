//! Market Resolution
//!
//! The authority reports the outcome once. Nothing reopens a resolved market.
//! Resolving to a side nobody backed is allowed; the whole vault then becomes
//! residual.

use anchor_lang::prelude::*;

use crate::errors::MarketError;
use crate::settlement::ReentrancyGuard;
use crate::state::{Config, Market, Outcome};

/// Event emitted when a market is resolved
#[event]
pub struct MarketResolved {
    pub market_id: u64,
    pub outcome: Outcome,
    pub resolver: Pubkey,
    pub timestamp: i64,
}

#[derive(Accounts)]
pub struct ResolveMarket<'info> {
    pub authority: Signer<'info>,

    #[account(
        seeds = [Config::SEED],
        bump = config.bump,
        has_one = authority @ MarketError::Unauthorized,
    )]
    pub config: Account<'info, Config>,

    #[account(
        mut,
        seeds = [Market::SEED, market.id.to_le_bytes().as_ref()],
        bump = market.bump,
    )]
    pub market: Box<Account<'info, Market>>,
}

impl<'info> ResolveMarket<'info> {
    pub fn resolve_market(&mut self, outcome: Outcome) -> Result<()> {
        ReentrancyGuard::enter(&mut self.market.locked)?;

        let clock = Clock::get()?;
        self.market.resolve(outcome, clock.unix_timestamp)?;

        ReentrancyGuard::release(&mut self.market.locked);

        emit!(MarketResolved {
            market_id: self.market.id,
            outcome,
            resolver: self.authority.key(),
            timestamp: clock.unix_timestamp,
        });

        msg!(
            "Market {} resolved: {:?} (yes {} / no {})",
            self.market.id,
            outcome,
            self.market.total_yes,
            self.market.total_no
        );

        Ok(())
    }
}
