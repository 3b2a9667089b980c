//! Per-market reentrancy guard
//!
//! The flag lives in the market account. Handlers persist it together with
//! the accounting before any outbound transfer, so a nested call into a
//! guarded instruction sees it set. A failed call reverts the transaction and
//! with it the flag.

use anchor_lang::prelude::*;

use crate::errors::MarketError;

pub struct ReentrancyGuard;

impl ReentrancyGuard {
    pub fn enter(locked: &mut bool) -> Result<()> {
        require!(!*locked, MarketError::ReentrancyRejected);
        *locked = true;
        Ok(())
    }

    pub fn release(locked: &mut bool) {
        *locked = false;
    }
}
