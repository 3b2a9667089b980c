//! Reward Claims
//!
//! After resolution a winner collects
//!
//! ```text
//! reward = stake + floor(stake * losing_pool / winning_pool)
//! ```
//!
//! The position amount drops to zero and is written to the account before the
//! vault transfer is issued. A second claim, nested or not, finds nothing to
//! pay.

use anchor_lang::prelude::*;
use anchor_lang::AccountsExit;
use anchor_spl::token_interface::{
    transfer_checked, Mint, TokenAccount, TokenInterface, TransferChecked,
};

use crate::errors::MarketError;
use crate::settlement::ReentrancyGuard;
use crate::state::{Config, Market, Position};

/// Event emitted when a winner is paid
#[event]
pub struct RewardClaimed {
    pub market_id: u64,
    pub claimant: Pubkey,
    pub stake: u64,
    pub reward: u64,
}

#[derive(Accounts)]
pub struct ClaimReward<'info> {
    #[account(mut)]
    pub claimant: Signer<'info>,

    #[account(
        seeds = [Config::SEED],
        bump = config.bump,
    )]
    pub config: Account<'info, Config>,

    #[account(
        mut,
        seeds = [Market::SEED, market.id.to_le_bytes().as_ref()],
        bump = market.bump,
    )]
    pub market: Box<Account<'info, Market>>,

    /// Created empty when the claimant never staked, so the claim fails with NoStake
    #[account(
        init_if_needed,
        payer = claimant,
        space = 8 + Position::INIT_SPACE,
        seeds = [Position::SEED, market.key().as_ref(), claimant.key().as_ref()],
        bump,
    )]
    pub position: Account<'info, Position>,

    #[account(address = config.collateral_mint)]
    pub collateral_mint: InterfaceAccount<'info, Mint>,

    #[account(
        mut,
        token::mint = collateral_mint,
        token::authority = claimant,
    )]
    pub claimant_collateral: InterfaceAccount<'info, TokenAccount>,

    #[account(
        mut,
        seeds = [Market::VAULT_SEED, market.key().as_ref()],
        bump = market.vault_bump,
    )]
    pub vault: InterfaceAccount<'info, TokenAccount>,

    pub token_program: Interface<'info, TokenInterface>,
    pub system_program: Program<'info, System>,
}

impl<'info> ClaimReward<'info> {
    pub fn claim_reward(&mut self) -> Result<u64> {
        ReentrancyGuard::enter(&mut self.market.locked)?;

        require!(self.market.resolved, MarketError::MarketNotResolved);

        let stake = self.position.take_winning_stake(self.market.outcome)?;
        let reward = self.market.settle_claim(stake)?;

        self.position.exit(&crate::ID)?;
        self.market.exit(&crate::ID)?;

        let market_id = self.market.id.to_le_bytes();
        let market_seeds = &[Market::SEED, market_id.as_ref(), &[self.market.bump]];
        let market_signer = &[&market_seeds[..]];

        transfer_checked(
            CpiContext::new_with_signer(
                self.token_program.to_account_info(),
                TransferChecked {
                    from: self.vault.to_account_info(),
                    mint: self.collateral_mint.to_account_info(),
                    to: self.claimant_collateral.to_account_info(),
                    authority: self.market.to_account_info(),
                },
                market_signer,
            ),
            reward,
            self.collateral_mint.decimals,
        )?;

        ReentrancyGuard::release(&mut self.market.locked);

        emit!(RewardClaimed {
            market_id: self.market.id,
            claimant: self.claimant.key(),
            stake,
            reward,
        });

        Ok(reward)
    }
}
