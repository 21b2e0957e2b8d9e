use anchor_lang::prelude::*;
use anchor_lang::solana_program::program_option::COption;
use anchor_spl::token_2022::spl_token_2022::instruction::AuthorityType;
use anchor_spl::token_interface::{self, Mint, SetAuthority, TokenInterface};

use crate::constants::{PERIOD_LENGTH, SCHEDULE_PARAMS};
use crate::error::*;
use crate::events::*;
use crate::state::*;
use crate::utils;

#[derive(Accounts)]
pub struct CreateVesting<'info> {
    #[account(
        init_if_needed,
        seeds = [b"vault", mint.key().as_ref()],
        bump,
        payer = admin,
        space = 8 + VestingVault::INIT_SPACE,
    )]
    pub vault: Account<'info, VestingVault>,

    #[account(mut)]
    pub mint: InterfaceAccount<'info, Mint>,

    #[account(mut)]
    pub admin: Signer<'info>,

    pub token_program: Interface<'info, TokenInterface>,
    pub system_program: Program<'info, System>,
}

impl CreateVesting<'_> {
    /// After this CPI the vault PDA is the only signer the token program
    /// accepts for minting, so every release has to go through `claim`.
    fn hand_over_mint_authority(&self, vault_key: Pubkey) -> Result<()> {
        let cpi_accounts = SetAuthority {
            account_or_mint: self.mint.to_account_info(),
            current_authority: self.admin.to_account_info(),
        };
        let cpi_ctx = CpiContext::new(self.token_program.to_account_info(), cpi_accounts);
        token_interface::set_authority(cpi_ctx, AuthorityType::MintTokens, Some(vault_key))
    }
}

#[allow(clippy::too_many_arguments)]
pub fn create_vesting_handler(
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
    require!(
        !ctx.accounts.vault.initialized,
        VestingError::AlreadyInitialized
    );

    let beneficiaries = [
        team,
        team_private,
        advisors,
        marketing,
        nft_holders,
        liquidity,
        treasury,
        staking,
    ];
    require!(
        utils::all_distinct(&beneficiaries),
        VestingError::DuplicateBeneficiary
    );
    require!(
        ctx.accounts.mint.mint_authority == COption::Some(ctx.accounts.admin.key()),
        VestingError::NotMintAuthority
    );

    let vault_key = ctx.accounts.vault.key();
    let now = Clock::get()?.unix_timestamp;

    let vault = &mut ctx.accounts.vault;
    vault.admin = ctx.accounts.admin.key();
    vault.mint = ctx.accounts.mint.key();
    vault.start_time = now;
    vault.period_length = PERIOD_LENGTH;
    vault.decimals = ctx.accounts.mint.decimals;
    vault.initialized = true;
    vault.bump = ctx.bumps.vault;

    for (slot, (params, beneficiary)) in vault
        .schedules
        .iter_mut()
        .zip(SCHEDULE_PARAMS.iter().zip(beneficiaries))
    {
        *slot = VestingSchedule {
            beneficiary,
            total_allocation: params.total_allocation,
            cliff_periods: params.cliff_periods,
            total_periods: params.total_periods,
            claimed_amount: 0,
        };
    }

    ctx.accounts.hand_over_mint_authority(vault_key)?;

    emit!(VestingCreated {
        vault: vault_key,
        mint: ctx.accounts.mint.key(),
        admin: ctx.accounts.admin.key(),
        start_time: now,
    });

    Ok(())
}
