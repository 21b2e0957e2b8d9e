use anchor_lang::prelude::*;

use crate::{VestingError, VestingSchedule};

/// Whole periods elapsed since `start_time`. Zero before the start.
pub fn elapsed_periods(now: i64, start_time: i64, period_length: i64) -> u64 {
    if now < start_time {
        return 0;
    }
    ((now - start_time) / period_length) as u64
}

/// Cumulative unlocked amount after `elapsed_periods`, independent of how
/// much has been claimed. The allocation splits into `total_periods`
/// truncated tranches; the final period absorbs the remainder so the sum
/// over all periods equals `total_allocation` exactly.
pub fn entitled_to_date(schedule: &VestingSchedule, elapsed_periods: u64) -> Result<u64> {
    if elapsed_periods < schedule.cliff_periods {
        return Ok(0);
    }

    let periods_past_cliff =
        (elapsed_periods - schedule.cliff_periods).min(schedule.total_periods);

    if periods_past_cliff == schedule.total_periods {
        return Ok(schedule.total_allocation);
    }

    let tranche = schedule
        .total_allocation
        .checked_div(schedule.total_periods)
        .ok_or(VestingError::MathOverflow)?;
    periods_past_cliff
        .checked_mul(tranche)
        .ok_or(VestingError::MathOverflow.into())
}

/// Amount releasable right now: entitlement minus what is already claimed.
pub fn claimable_amount(schedule: &VestingSchedule, elapsed_periods: u64) -> Result<u64> {
    let entitled = entitled_to_date(schedule, elapsed_periods)?;

    if schedule.claimed_amount >= entitled {
        Ok(0)
    } else {
        entitled
            .checked_sub(schedule.claimed_amount)
            .ok_or(VestingError::MathOverflow.into())
    }
}

/// Scale a whole-token amount to base units of a mint with `decimals`.
pub fn to_base_units(amount: u64, decimals: u8) -> Result<u64> {
    let unit = 10u64
        .checked_pow(decimals as u32)
        .ok_or(VestingError::MathOverflow)?;
    amount
        .checked_mul(unit)
        .ok_or(VestingError::MathOverflow.into())
}

/// True when no two keys are equal.
pub fn all_distinct(keys: &[Pubkey]) -> bool {
    for (i, key) in keys.iter().enumerate() {
        if keys[i + 1..].contains(key) {
            return false;
        }
    }
    true
}
