pub mod create_market;
pub mod resolve;
pub mod view;

pub use create_market::*;
pub use resolve::*;
pub use view::*;
