pub mod tokens_claimed;
pub mod vesting_created;

pub use tokens_claimed::*;
pub use vesting_created::*;
