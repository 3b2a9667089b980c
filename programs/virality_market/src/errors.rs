use anchor_lang::prelude::*;

#[error_code]
pub enum MarketError {
    #[msg("Caller is not the market authority")]
    Unauthorized,
    /// Raised by `get_market`. State-changing instructions take the market as a
    /// typed account, so a missing market there fails account validation with
    /// Anchor's `AccountNotInitialized` (3012) instead.
    #[msg("Market does not exist")]
    NotFound,
    #[msg("A market with this identifier already exists")]
    AlreadyExists,
    #[msg("Outcome must be Yes or No")]
    InvalidChoice,
    #[msg("Stake amount must be greater than zero")]
    ZeroStake,
    #[msg("Caller already holds an open position in this market")]
    DuplicateStake,
    #[msg("Market is already resolved")]
    MarketResolved,
    #[msg("Market is not resolved yet")]
    MarketNotResolved,
    #[msg("No open stake to claim")]
    NoStake,
    #[msg("Position did not predict the resolved outcome")]
    WrongPrediction,
    #[msg("Nested call into a guarded instruction")]
    ReentrancyRejected,
    #[msg("Resolved outcome has no stake behind it")]
    EmptyWinningPool,
    #[msg("Arithmetic overflow")]
    Overflow,
    #[msg("Post URI exceeds maximum length")]
    PostUriTooLong,
    #[msg("Deposit amount must be greater than zero")]
    ZeroDeposit,
    #[msg("No residual value in the vault")]
    NothingToWithdraw,
    #[msg("Collateral mint extensions would let the vault fall short of its stakes")]
    UnsupportedMint,
}
