use anchor_lang::prelude::*;

#[error_code]
pub enum VestingError {
    #[msg("Vesting schedules have already been created.")]
    AlreadyInitialized,
    #[msg("No vesting schedule at this index.")]
    UnknownSchedule,
    #[msg("Not an owner of this vesting.")]
    NotOwner,
    #[msg("Tokens are still locked.")]
    StillLocked,
    #[msg("Nothing to claim.")]
    NothingToClaim,
    #[msg("Beneficiary addresses must be distinct.")]
    DuplicateBeneficiary,
    #[msg("Signer does not hold the mint authority.")]
    NotMintAuthority,
    #[msg("Math overflow.")]
    MathOverflow,
}
