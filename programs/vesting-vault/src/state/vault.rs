use anchor_lang::prelude::*;

use crate::constants::SCHEDULE_COUNT;
use crate::error::VestingError;

/// One vesting schedule. Immutable after registration except for
/// `claimed_amount`, which only `claim` moves, and only upward.
#[derive(AnchorSerialize, AnchorDeserialize, InitSpace, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct VestingSchedule {
    pub beneficiary: Pubkey,
    /// Maximum amount this schedule ever releases, in whole tokens.
    pub total_allocation: u64,
    /// Periods that must fully elapse before anything is claimable.
    pub cliff_periods: u64,
    /// Periods over which the allocation unlocks after the cliff.
    pub total_periods: u64,
    /// Whole tokens already released.
    pub claimed_amount: u64,
}

/// Singleton vault account, PDA of `[b"vault", mint]`. Holds the eight
/// schedules plus the shared clock parameters.
#[account]
#[derive(InitSpace)]
pub struct VestingVault {
    pub admin: Pubkey,
    pub mint: Pubkey,
    /// Registration timestamp, shared by all schedules.
    pub start_time: i64,
    /// Seconds per period, shared by all schedules.
    pub period_length: i64,
    /// Mint decimals, captured at registration for base-unit scaling.
    pub decimals: u8,
    pub initialized: bool,
    pub bump: u8,
    pub schedules: [VestingSchedule; SCHEDULE_COUNT],
}

impl VestingVault {
    pub fn schedule(&self, index: u8) -> Result<&VestingSchedule> {
        self.schedules
            .get(index as usize)
            .ok_or_else(|| error!(VestingError::UnknownSchedule))
    }

    pub fn schedule_mut(&mut self, index: u8) -> Result<&mut VestingSchedule> {
        self.schedules
            .get_mut(index as usize)
            .ok_or_else(|| error!(VestingError::UnknownSchedule))
    }
}
