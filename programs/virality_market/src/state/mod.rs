//! Account state for the virality market program

pub mod config;
pub mod market;
pub mod position;

pub use config::*;
pub use market::*;
pub use position::*;
