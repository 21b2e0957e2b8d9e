use anchor_lang::prelude::*;
use anchor_spl::{
    associated_token::AssociatedToken,
    token_2022::MintTo,
    token_interface::{self, Mint, TokenAccount, TokenInterface},
};

use crate::{error::*, events::TokensClaimed, utils, VestingVault};

#[derive(Accounts)]
pub struct Claim<'info> {
    #[account(mut, seeds = [b"vault", mint.key().as_ref()], bump = vault.bump)]
    pub vault: Account<'info, VestingVault>,

    #[account(mut)]
    pub mint: InterfaceAccount<'info, Mint>,

    #[account(
        init_if_needed,
        payer = beneficiary,
        associated_token::authority = beneficiary,
        associated_token::mint = mint,
        associated_token::token_program = token_program,
    )]
    pub beneficiary_token_account: InterfaceAccount<'info, TokenAccount>,

    #[account(mut)]
    pub beneficiary: Signer<'info>,

    pub token_program: Interface<'info, TokenInterface>,
    pub system_program: Program<'info, System>,
    pub associated_token_program: Program<'info, AssociatedToken>,
}

impl Claim<'_> {
    fn mint_tokens(&self, amount: u64) -> Result<()> {
        let cpi_accounts = MintTo {
            mint: self.mint.to_account_info(),
            to: self.beneficiary_token_account.to_account_info(),
            authority: self.vault.to_account_info(),
        };

        let mint_key = self.mint.key();
        let signer_seeds: &[&[u8]] = &[b"vault", mint_key.as_ref(), &[self.vault.bump]];
        let s = &[signer_seeds];
        let cpi_ctx =
            CpiContext::new_with_signer(self.token_program.to_account_info(), cpi_accounts, s);
        token_interface::mint_to(cpi_ctx, amount)
    }
}

pub fn claim_handler(ctx: Context<Claim>, index: u8) -> Result<u64> {
    let clock = Clock::get()?;
    let now = clock.unix_timestamp;

    let vault = &mut ctx.accounts.vault;
    let schedule = *vault.schedule(index)?;

    // Ownership is checked before any time computation, so a wrong caller
    // is rejected identically whether the schedule is locked or not.
    require_keys_eq!(
        ctx.accounts.beneficiary.key(),
        schedule.beneficiary,
        VestingError::NotOwner
    );

    let elapsed = utils::elapsed_periods(now, vault.start_time, vault.period_length);
    require!(
        elapsed >= schedule.cliff_periods,
        VestingError::StillLocked
    );

    let claimable = utils::claimable_amount(&schedule, elapsed)?;
    require!(claimable > 0, VestingError::NothingToClaim);

    let minted = utils::to_base_units(claimable, vault.decimals)?;
    vault.schedule_mut(index)?.claimed_amount = schedule
        .claimed_amount
        .checked_add(claimable)
        .ok_or(VestingError::MathOverflow)?;

    ctx.accounts.mint_tokens(minted)?;

    emit!(TokensClaimed {
        vault: ctx.accounts.vault.key(),
        schedule_index: index,
        beneficiary: ctx.accounts.beneficiary.key(),
        amount: claimable,
        time: now,
    });

    Ok(claimable)
}
