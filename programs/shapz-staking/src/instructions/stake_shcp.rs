use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};

use crate::constants::{ESCROW_SEED, POOL_AUTHORITY_SEED, STAKING_SEED};
use crate::custody;
use crate::errors::ShapzError;
use crate::events::ShcpStaked;
use crate::state::StakingAccount;

/// Fields are ordered so every seed and constraint only refers to accounts
/// declared above it.
#[derive(Accounts)]
pub struct StakeShcp<'info> {
    #[account(mut)]
    pub player: Signer<'info>,

    pub collateral_mint: Box<Account<'info, Mint>>,

    /// CHECK: key-less PDA, owner of the escrow
    #[account(seeds = [POOL_AUTHORITY_SEED], bump)]
    pub pool_authority: UncheckedAccount<'info>,

    #[account(
        mut,
        constraint = player_collateral_account.owner == player.key() @ ShapzError::InvalidOwner,
        constraint = player_collateral_account.mint == collateral_mint.key() @ ShapzError::CollateralMintMismatch,
    )]
    pub player_collateral_account: Box<Account<'info, TokenAccount>>,

    #[account(
        init_if_needed,
        payer = player,
        seeds = [
            ESCROW_SEED,
            pool_authority.key().as_ref(),
            player.key().as_ref(),
            collateral_mint.key().as_ref(),
        ],
        bump,
        token::mint = collateral_mint,
        token::authority = pool_authority,
    )]
    pub escrow_account: Box<Account<'info, TokenAccount>>,

    /// Any pool-authority account passes here, escrows included. The binding
    /// to the configured vault and reward mint is enforced by claim.
    #[account(
        constraint = vault_account.owner == pool_authority.key() @ ShapzError::VaultMismatch,
    )]
    pub vault_account: Box<Account<'info, TokenAccount>>,

    /// Where future rewards go; a mismatch here only fails early
    #[account(
        constraint = player_reward_account.owner == player.key() @ ShapzError::InvalidOwner,
        constraint = player_reward_account.mint == vault_account.mint @ ShapzError::RewardMintMismatch,
    )]
    pub player_reward_account: Box<Account<'info, TokenAccount>>,

    #[account(
        init_if_needed,
        payer = player,
        space = StakingAccount::LEN,
        seeds = [
            STAKING_SEED,
            pool_authority.key().as_ref(),
            player.key().as_ref(),
            collateral_mint.key().as_ref(),
        ],
        bump
    )]
    pub staking_account: Account<'info, StakingAccount>,

    pub clock: Sysvar<'info, Clock>,
    pub system_program: Program<'info, System>,
    pub token_program: Program<'info, Token>,
}

pub fn stake_shcp_handler(ctx: Context<StakeShcp>) -> Result<()> {
    ctx.accounts.staking_account.ensure_vacant()?;
    custody::validate_collateral(
        ctx.accounts.player_collateral_account.amount,
        ctx.accounts.collateral_mint.decimals,
        ctx.accounts.collateral_mint.supply,
    )?;

    custody::lock_collateral(
        ctx.accounts.token_program.to_account_info(),
        ctx.accounts.player_collateral_account.to_account_info(),
        ctx.accounts.collateral_mint.to_account_info(),
        ctx.accounts.escrow_account.to_account_info(),
        ctx.accounts.player.to_account_info(),
    )?;

    let now = ctx.accounts.clock.unix_timestamp;
    let owner = ctx.accounts.player.key();
    let collateral_mint = ctx.accounts.collateral_mint.key();
    ctx.accounts.staking_account.set_inner(StakingAccount::open(
        owner,
        collateral_mint,
        now,
        ctx.bumps.staking_account,
    ));

    msg!("Player {} staked {} at {}", owner, collateral_mint, now);

    emit!(ShcpStaked {
        owner,
        collateral_mint,
        staking_account: ctx.accounts.staking_account.key(),
        timestamp: now,
    });

    Ok(())
}
