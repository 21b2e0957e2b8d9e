pub mod claim;
pub mod claimable;
pub mod create_vesting;

pub use claim::*;
pub use claimable::*;
pub use create_vesting::*;
