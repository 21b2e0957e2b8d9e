#![allow(unexpected_cfgs)]

pub mod constants;
pub mod error;
pub mod events;
pub mod instructions;
pub mod state;
pub mod utils;

use anchor_lang::prelude::*;

pub use constants::*;
pub use error::*;
pub use instructions::*;
use solana_security_txt::security_txt;
pub use state::*;

declare_id!("3iurEHgSHPGTbY3JXwJsefBv2qUHTQVrQPhz7LzFc4Kh");

#[cfg(not(feature = "no-entrypoint"))]
security_txt! {
    name: "Vesting Vault Program",
    project_url: "https://github.com/vesting-vault/vesting-vault",
    policy: "https://github.com/vesting-vault/vesting-vault/security.md",
    contacts: "mailto:security@vesting-vault.dev",
    preferred_languages: "en",
    source_code: "https://github.com/vesting-vault/vesting-vault"
}

#[program]
pub mod vesting_vault {
    use super::*;

    /// One-time registration of the eight vesting schedules. The signer
    /// must hold the mint authority, which is handed to the vault PDA.
    #[allow(clippy::too_many_arguments)]
    pub fn create_vesting(
        ctx: Context<CreateVesting>,
        team: Pubkey,
        team_private: Pubkey,
        advisors: Pubkey,
        marketing: Pubkey,
        nft_holders: Pubkey,
        liquidity: Pubkey,
        treasury: Pubkey,
        staking: Pubkey,
    ) -> Result<()> {
        create_vesting::create_vesting_handler(
            ctx,
            team,
            team_private,
            advisors,
            marketing,
            nft_holders,
            liquidity,
            treasury,
            staking,
        )
    }

    /// Release the newly unlocked amount of schedule `index` to its
    /// beneficiary, minting it to their associated token account.
    /// Returns the released amount in whole tokens.
    pub fn claim(ctx: Context<Claim>, index: u8) -> Result<u64> {
        claim::claim_handler(ctx, index)
    }

    /// Read-only: whole tokens currently releasable for schedule `index`.
    pub fn claimable(ctx: Context<ViewSchedule>, index: u8) -> Result<u64> {
        claimable::claimable_handler(ctx, index)
    }
}
