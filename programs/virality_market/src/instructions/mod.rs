//! Instruction handlers for the virality market program
//!
//! - `initialize` - Set up the global configuration (once)
//! - `market` - Create, resolve and look up markets (authority gated)
//! - `stake` - Back one outcome of an open market
//! - `claim` - Collect a winning position after resolution
//! - `treasury` - Unsolicited deposits and residual sweeps

pub mod initialize;
pub mod market;
pub mod stake;
pub mod claim;
pub mod treasury;

pub use initialize::*;
pub use market::*;
pub use stake::*;
pub use claim::*;
pub use treasury::*;
