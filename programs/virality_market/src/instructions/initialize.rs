//! Program Initialization
//!
//! Sets up the global configuration: the designated authority and the
//! collateral mint. Called once after deployment.
//!
//! Stakes are booked at their requested amount and payouts are drawn from the
//! vault at face value, so the collateral mint must move exactly what it is
//! asked to move. Token-2022 mints carrying a transfer fee, a transfer hook or
//! a permanent delegate are refused.

use anchor_lang::prelude::*;
use anchor_spl::token_2022::spl_token_2022::{
    extension::{BaseStateWithExtensions, ExtensionType, StateWithExtensions},
    state::Mint as MintState,
};
use anchor_spl::token_interface::Mint;

use crate::errors::MarketError;
use crate::state::Config;

/// Event emitted when the authority role changes hands
#[event]
pub struct AuthorityTransferred {
    pub previous: Pubkey,
    pub new_authority: Pubkey,
}

/// Accounts required for initialization
#[derive(Accounts)]
pub struct Initialize<'info> {
    /// Deployer paying for the config account
    #[account(mut)]
    pub payer: Signer<'info>,

    /// Global configuration account (created)
    #[account(
        init,
        payer = payer,
        space = 8 + Config::INIT_SPACE,
        seeds = [Config::SEED],
        bump,
    )]
    pub config: Account<'info, Config>,

    /// Collateral token mint
    pub collateral_mint: InterfaceAccount<'info, Mint>,

    pub system_program: Program<'info, System>,
}

impl<'info> Initialize<'info> {
    pub fn initialize(&mut self, authority: Pubkey, bumps: &InitializeBumps) -> Result<()> {
        self.check_collateral_mint()?;

        self.config.set_inner(Config {
            authority,
            collateral_mint: self.collateral_mint.key(),
            market_count: 0,
            bump: bumps.config,
        });

        msg!("Virality market initialized");
        msg!("Authority: {}", authority);
        msg!("Collateral: {}", self.collateral_mint.key());

        Ok(())
    }

    fn check_collateral_mint(&self) -> Result<()> {
        let info = self.collateral_mint.to_account_info();
        let data = info.try_borrow_data()?;
        let mint = StateWithExtensions::<MintState>::unpack(&data)?;

        for extension in mint.get_extension_types()? {
            require!(
                !UNSUPPORTED_MINT_EXTENSIONS.contains(&extension),
                MarketError::UnsupportedMint
            );
        }

        Ok(())
    }
}

/// Extensions that let the vault receive or keep less than was booked
const UNSUPPORTED_MINT_EXTENSIONS: [ExtensionType; 3] = [
    ExtensionType::TransferFeeConfig,
    ExtensionType::TransferHook,
    ExtensionType::PermanentDelegate,
];

#[derive(Accounts)]
pub struct TransferAuthority<'info> {
    pub authority: Signer<'info>,

    #[account(
        mut,
        seeds = [Config::SEED],
        bump = config.bump,
        has_one = authority @ MarketError::Unauthorized,
    )]
    pub config: Account<'info, Config>,
}

impl<'info> TransferAuthority<'info> {
    pub fn transfer_authority(&mut self, new_authority: Pubkey) -> Result<()> {
        let previous = self.config.authority;
        self.config.authority = new_authority;

        emit!(AuthorityTransferred {
            previous,
            new_authority,
        });

        msg!("Authority transferred from {} to {}", previous, new_authority);

        Ok(())
    }
}
