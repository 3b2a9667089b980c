//! Global Program Configuration
//!
//! Holds the designated authority and the collateral every market settles in.

use anchor_lang::prelude::*;

/// Global configuration account (singleton PDA)
///
/// Seeds: ["config"]
#[account]
#[derive(InitSpace)]
pub struct Config {
    /// Single principal allowed to create, resolve and sweep markets
    pub authority: Pubkey,

    /// Mint all stakes and rewards are denominated in
    pub collateral_mint: Pubkey,

    /// Markets created so far
    pub market_count: u64,

    /// PDA bump seed
    pub bump: u8,
}

impl Config {
    pub const SEED: &'static [u8] = b"config";
}
