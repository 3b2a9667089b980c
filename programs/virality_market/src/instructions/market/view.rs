//! Read-only market lookup, returned as instruction return data.

use anchor_lang::prelude::*;

use crate::errors::MarketError;
use crate::state::{Market, MarketSummary};

#[derive(Accounts)]
#[instruction(market_id: u64)]
pub struct GetMarket<'info> {
    /// CHECK: may not exist; ownership and layout are checked in the handler
    #[account(
        seeds = [Market::SEED, market_id.to_le_bytes().as_ref()],
        bump,
    )]
    pub market: UncheckedAccount<'info>,
}

impl<'info> GetMarket<'info> {
    pub fn get_market(&self) -> Result<MarketSummary> {
        require!(
            !self.market.data_is_empty() && self.market.owner == &crate::ID,
            MarketError::NotFound
        );

        let data = self.market.try_borrow_data()?;
        let mut slice: &[u8] = &data;
        let market = Market::try_deserialize(&mut slice)?;
        require!(market.exists(), MarketError::NotFound);

        Ok(market.summary())
    }
}
