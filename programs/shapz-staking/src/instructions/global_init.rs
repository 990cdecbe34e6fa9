use anchor_lang::prelude::*;
use anchor_spl::token::{Token, TokenAccount};

use crate::constants::{CONFIG_SEED, POOL_AUTHORITY_SEED};
use crate::custody;
use crate::errors::ShapzError;
use crate::events::GlobalInitialized;
use crate::pda::PoolAuthority;
use crate::program::ShapzStaking;
use crate::state::GlobalConfig;

#[derive(Accounts)]
pub struct GlobalInit<'info> {
    #[account(mut)]
    pub master_authority: Signer<'info>,

    /// Funded shCP account, still owned by the master authority
    #[account(mut)]
    pub vault_account: Account<'info, TokenAccount>,

    /// CHECK: key-less PDA, only its address is used here
    #[account(seeds = [POOL_AUTHORITY_SEED], bump)]
    pub pool_authority: UncheckedAccount<'info>,

    #[account(
        init_if_needed,
        payer = master_authority,
        space = GlobalConfig::LEN,
        seeds = [CONFIG_SEED, pool_authority.key().as_ref()],
        bump
    )]
    pub config_account: Account<'info, GlobalConfig>,

    #[account(
        constraint = program.programdata_address()? == Some(program_data.key()) @ ShapzError::InvalidDerivedAddress,
    )]
    pub program: Program<'info, ShapzStaking>,

    pub program_data: Account<'info, ProgramData>,

    pub system_program: Program<'info, System>,
    pub token_program: Program<'info, Token>,
}

/// Only the key that can upgrade the program may bind the singleton vault.
pub fn ensure_master_authority(upgrade_authority: Option<Pubkey>, signer: &Pubkey) -> Result<()> {
    require!(
        upgrade_authority.as_ref() == Some(signer),
        ShapzError::UnauthorizedMasterAuthority
    );
    Ok(())
}

pub fn global_init_handler(ctx: Context<GlobalInit>) -> Result<()> {
    ensure_master_authority(
        ctx.accounts.program_data.upgrade_authority_address,
        &ctx.accounts.master_authority.key(),
    )?;
    // checked before the vault: a re-run must not even reach it
    require!(
        !ctx.accounts.config_account.is_initialized(),
        ShapzError::ConfigAlreadyInitialized
    );

    let vault = &ctx.accounts.vault_account;
    require_keys_eq!(
        vault.owner,
        ctx.accounts.master_authority.key(),
        ShapzError::InvalidOwner
    );
    custody::validate_vault_exclusive(vault.delegate.is_some(), vault.close_authority.is_some())?;

    let pool_authority =
        PoolAuthority::verify(&ctx.accounts.pool_authority.key(), ctx.bumps.pool_authority)?;

    custody::bind_vault(
        ctx.accounts.token_program.to_account_info(),
        ctx.accounts.vault_account.to_account_info(),
        ctx.accounts.master_authority.to_account_info(),
        &pool_authority,
    )?;

    let config = &mut ctx.accounts.config_account;
    config.set_inner(GlobalConfig {
        authority: ctx.accounts.master_authority.key(),
        vault: ctx.accounts.vault_account.key(),
        reward_mint: ctx.accounts.vault_account.mint,
        pool_authority_bump: pool_authority.bump(),
        bump: ctx.bumps.config_account,
    });

    msg!(
        "Global config initialized: vault={}, pool_authority={}, balance={}",
        config.vault,
        pool_authority.address(),
        ctx.accounts.vault_account.amount
    );

    emit!(GlobalInitialized {
        config: config.key(),
        authority: config.authority,
        vault: config.vault,
        pool_authority: pool_authority.address(),
    });

    Ok(())
}
