use anchor_lang::prelude::*;

#[event]
pub struct TokensClaimed {
    pub vault: Pubkey,
    pub schedule_index: u8,
    pub beneficiary: Pubkey,
    /// Released amount in whole tokens.
    pub amount: u64,
    pub time: i64,
}
