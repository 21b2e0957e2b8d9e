use anchor_lang::prelude::*;

use crate::{utils, VestingVault};

#[derive(Accounts)]
pub struct ViewSchedule<'info> {
    #[account()]
    pub vault: Account<'info, VestingVault>,
    pub signer: Signer<'info>,
}

pub fn claimable_handler(ctx: Context<ViewSchedule>, index: u8) -> Result<u64> {
    let vault = &ctx.accounts.vault;
    let schedule = vault.schedule(index)?;

    let clock = Clock::get()?;
    let elapsed = utils::elapsed_periods(clock.unix_timestamp, vault.start_time, vault.period_length);

    utils::claimable_amount(schedule, elapsed)
}
