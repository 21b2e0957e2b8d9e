use anchor_lang::prelude::*;

#[event]
pub struct VestingCreated {
    pub vault: Pubkey,
    pub mint: Pubkey,
    pub admin: Pubkey,
    pub start_time: i64,
}
