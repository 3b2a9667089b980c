//! Market Registry
//!
//! The authority opens one market per identifier. The market PDA is derived
//! from the identifier alone, so a second creation lands on the same account
//! and is rejected by its non-zero creation timestamp.

use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};

use crate::errors::MarketError;
use crate::state::{Config, Market};

/// Event emitted when a market is created
#[event]
pub struct MarketCreated {
    pub market_id: u64,
    pub post_uri: String,
    pub virality_threshold: u64,
    pub created_at: i64,
}

#[derive(Accounts)]
#[instruction(market_id: u64)]
pub struct CreateMarket<'info> {
    #[account(mut)]
    pub authority: Signer<'info>,

    #[account(
        mut,
        seeds = [Config::SEED],
        bump = config.bump,
        has_one = authority @ MarketError::Unauthorized,
    )]
    pub config: Account<'info, Config>,

    #[account(
        init_if_needed,
        payer = authority,
        space = 8 + Market::INIT_SPACE,
        seeds = [Market::SEED, market_id.to_le_bytes().as_ref()],
        bump,
    )]
    pub market: Box<Account<'info, Market>>,

    #[account(address = config.collateral_mint)]
    pub collateral_mint: InterfaceAccount<'info, Mint>,

    /// Holds every unit staked in this market
    #[account(
        init_if_needed,
        payer = authority,
        seeds = [Market::VAULT_SEED, market.key().as_ref()],
        bump,
        token::mint = collateral_mint,
        token::authority = market,
        token::token_program = token_program,
    )]
    pub vault: InterfaceAccount<'info, TokenAccount>,

    pub token_program: Interface<'info, TokenInterface>,
    pub system_program: Program<'info, System>,
}

impl<'info> CreateMarket<'info> {
    pub fn create_market(
        &mut self,
        market_id: u64,
        post_uri: String,
        virality_threshold: u64,
        bumps: &CreateMarketBumps,
    ) -> Result<()> {
        require!(!self.market.exists(), MarketError::AlreadyExists);
        require!(
            post_uri.len() <= Market::MAX_POST_URI_LEN,
            MarketError::PostUriTooLong
        );

        // zero is reserved for "does not exist"
        let created_at = Clock::get()?.unix_timestamp.max(1);

        self.market.set_inner(Market {
            id: market_id,
            post_uri: post_uri.clone(),
            virality_threshold,
            created_at,
            bump: bumps.market,
            vault_bump: bumps.vault,
            ..Default::default()
        });

        self.config.market_count = self
            .config
            .market_count
            .checked_add(1)
            .ok_or(MarketError::Overflow)?;

        emit!(MarketCreated {
            market_id,
            post_uri,
            virality_threshold,
            created_at,
        });

        msg!("Market {} created", market_id);

        Ok(())
    }
}
