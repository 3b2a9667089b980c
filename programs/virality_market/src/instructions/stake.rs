//! Stake Placement
//!
//! Any participant backs Yes or No once per market while it is open. The
//! stake is booked in the position and the outcome pool before collateral
//! moves into the vault.

use anchor_lang::prelude::*;
use anchor_lang::AccountsExit;
use anchor_spl::token_interface::{
    transfer_checked, Mint, TokenAccount, TokenInterface, TransferChecked,
};

use crate::settlement::ReentrancyGuard;
use crate::state::{Config, Market, Outcome, Position};

/// Event emitted when a stake is recorded
#[event]
pub struct StakeRecorded {
    pub market_id: u64,
    pub staker: Pubkey,
    pub outcome: Outcome,
    pub amount: u64,
}

#[derive(Accounts)]
pub struct PlaceStake<'info> {
    #[account(mut)]
    pub staker: Signer<'info>,

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

    #[account(
        init_if_needed,
        payer = staker,
        space = 8 + Position::INIT_SPACE,
        seeds = [Position::SEED, market.key().as_ref(), staker.key().as_ref()],
        bump,
    )]
    pub position: Account<'info, Position>,

    #[account(address = config.collateral_mint)]
    pub collateral_mint: InterfaceAccount<'info, Mint>,

    #[account(
        mut,
        token::mint = collateral_mint,
        token::authority = staker,
    )]
    pub staker_collateral: InterfaceAccount<'info, TokenAccount>,

    #[account(
        mut,
        seeds = [Market::VAULT_SEED, market.key().as_ref()],
        bump = market.vault_bump,
    )]
    pub vault: InterfaceAccount<'info, TokenAccount>,

    pub token_program: Interface<'info, TokenInterface>,
    pub system_program: Program<'info, System>,
}

impl<'info> PlaceStake<'info> {
    pub fn place_stake(
        &mut self,
        outcome: Outcome,
        amount: u64,
        bumps: &PlaceStakeBumps,
    ) -> Result<()> {
        ReentrancyGuard::enter(&mut self.market.locked)?;

        self.market.check_stake(outcome, amount)?;

        let clock = Clock::get()?;
        self.position.open(
            self.market.key(),
            self.staker.key(),
            outcome,
            amount,
            clock.unix_timestamp,
            bumps.position,
        )?;
        self.market.add_stake(outcome, amount)?;

        // Commit accounting and the lock before handing control to the token program
        self.position.exit(&crate::ID)?;
        self.market.exit(&crate::ID)?;

        transfer_checked(
            CpiContext::new(
                self.token_program.to_account_info(),
                TransferChecked {
                    from: self.staker_collateral.to_account_info(),
                    mint: self.collateral_mint.to_account_info(),
                    to: self.vault.to_account_info(),
                    authority: self.staker.to_account_info(),
                },
            ),
            amount,
            self.collateral_mint.decimals,
        )?;

        ReentrancyGuard::release(&mut self.market.locked);

        emit!(StakeRecorded {
            market_id: self.market.id,
            staker: self.staker.key(),
            outcome,
            amount,
        });

        Ok(())
    }
}
