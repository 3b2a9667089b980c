//! Vault Treasury
//!
//! Value that arrives without a stake goes through `deposit` and never touches
//! the pools. Whatever the vault holds beyond its outstanding liability
//! (deposits, rounding dust, the whole pot of a market resolved to a side
//! nobody backed) is swept by the authority with `withdraw_residual`.

use anchor_lang::prelude::*;
use anchor_lang::AccountsExit;
use anchor_spl::token_interface::{
    transfer_checked, Mint, TokenAccount, TokenInterface, TransferChecked,
};

use crate::errors::MarketError;
use crate::settlement::ReentrancyGuard;
use crate::state::{Config, Market};

/// Event emitted when value is deposited without a stake
#[event]
pub struct DepositReceived {
    pub market_id: u64,
    pub depositor: Pubkey,
    pub amount: u64,
}

/// Event emitted when the authority sweeps residual value
#[event]
pub struct ResidualWithdrawn {
    pub market_id: u64,
    pub authority: Pubkey,
    pub amount: u64,
}

#[derive(Accounts)]
pub struct Deposit<'info> {
    pub depositor: Signer<'info>,

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

    #[account(address = config.collateral_mint)]
    pub collateral_mint: InterfaceAccount<'info, Mint>,

    #[account(
        mut,
        token::mint = collateral_mint,
        token::authority = depositor,
    )]
    pub depositor_collateral: InterfaceAccount<'info, TokenAccount>,

    #[account(
        mut,
        seeds = [Market::VAULT_SEED, market.key().as_ref()],
        bump = market.vault_bump,
    )]
    pub vault: InterfaceAccount<'info, TokenAccount>,

    pub token_program: Interface<'info, TokenInterface>,
}

impl<'info> Deposit<'info> {
    pub fn deposit(&mut self, amount: u64) -> Result<()> {
        ReentrancyGuard::enter(&mut self.market.locked)?;
        require!(amount > 0, MarketError::ZeroDeposit);

        self.market.exit(&crate::ID)?;

        transfer_checked(
            CpiContext::new(
                self.token_program.to_account_info(),
                TransferChecked {
                    from: self.depositor_collateral.to_account_info(),
                    mint: self.collateral_mint.to_account_info(),
                    to: self.vault.to_account_info(),
                    authority: self.depositor.to_account_info(),
                },
            ),
            amount,
            self.collateral_mint.decimals,
        )?;

        ReentrancyGuard::release(&mut self.market.locked);

        emit!(DepositReceived {
            market_id: self.market.id,
            depositor: self.depositor.key(),
            amount,
        });

        Ok(())
    }
}

#[derive(Accounts)]
pub struct WithdrawResidual<'info> {
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

    #[account(address = config.collateral_mint)]
    pub collateral_mint: InterfaceAccount<'info, Mint>,

    #[account(
        mut,
        token::mint = collateral_mint,
        token::authority = authority,
    )]
    pub authority_collateral: InterfaceAccount<'info, TokenAccount>,

    #[account(
        mut,
        seeds = [Market::VAULT_SEED, market.key().as_ref()],
        bump = market.vault_bump,
    )]
    pub vault: InterfaceAccount<'info, TokenAccount>,

    pub token_program: Interface<'info, TokenInterface>,
}

impl<'info> WithdrawResidual<'info> {
    pub fn withdraw_residual(&mut self) -> Result<u64> {
        ReentrancyGuard::enter(&mut self.market.locked)?;

        let residual = self.market.residual(self.vault.amount)?;
        require!(residual > 0, MarketError::NothingToWithdraw);

        self.market.record_residual_withdrawal(residual)?;
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
                    to: self.authority_collateral.to_account_info(),
                    authority: self.market.to_account_info(),
                },
                market_signer,
            ),
            residual,
            self.collateral_mint.decimals,
        )?;

        ReentrancyGuard::release(&mut self.market.locked);

        emit!(ResidualWithdrawn {
            market_id: self.market.id,
            authority: self.authority.key(),
            amount: residual,
        });

        msg!("Swept {} residual from market {}", residual, self.market.id);

        Ok(residual)
    }
}
