use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};

use crate::constants::{CONFIG_SEED, POOL_AUTHORITY_SEED, STAKING_SEED};
use crate::custody;
use crate::errors::ShapzError;
use crate::events::ShcpRewardClaimed;
use crate::pda::PoolAuthority;
use crate::state::{GlobalConfig, StakingAccount};

#[derive(Accounts)]
pub struct ClaimShcpReward<'info> {
    pub player: Signer<'info>,

    #[account(
        mut,
        constraint = player_reward_account.owner == player.key() @ ShapzError::InvalidOwner,
        constraint = player_reward_account.mint == config_account.reward_mint @ ShapzError::RewardMintMismatch,
    )]
    pub player_reward_account: Account<'info, TokenAccount>,

    #[account(
        mut,
        address = config_account.vault @ ShapzError::VaultMismatch,
    )]
    pub vault_account: Account<'info, TokenAccount>,

    /// CHECK: key-less PDA that owns the vault, signs via seeds
    #[account(
        seeds = [POOL_AUTHORITY_SEED],
        bump = config_account.pool_authority_bump,
    )]
    pub pool_authority: UncheckedAccount<'info>,

    pub collateral_mint: Account<'info, Mint>,

    #[account(
        mut,
        seeds = [
            STAKING_SEED,
            pool_authority.key().as_ref(),
            player.key().as_ref(),
            collateral_mint.key().as_ref(),
        ],
        bump = staking_account.bump,
        constraint = staking_account.owner == player.key() @ ShapzError::InvalidOwner,
    )]
    pub staking_account: Account<'info, StakingAccount>,

    #[account(
        seeds = [CONFIG_SEED, pool_authority.key().as_ref()],
        bump = config_account.bump,
    )]
    pub config_account: Account<'info, GlobalConfig>,

    pub token_program: Program<'info, Token>,
}

pub fn claim_shcp_reward_handler(ctx: Context<ClaimShcpReward>) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let vault_balance = ctx.accounts.vault_account.amount;

    let reward = ctx
        .accounts
        .staking_account
        .settle_claim(now, vault_balance)?;

    if reward == 0 {
        msg!("No shCP accrued for {} yet", ctx.accounts.collateral_mint.key());
        return Ok(());
    }

    let pool_authority = PoolAuthority::verify(
        &ctx.accounts.pool_authority.key(),
        ctx.accounts.config_account.pool_authority_bump,
    )?;
    custody::release_reward(
        ctx.accounts.token_program.to_account_info(),
        ctx.accounts.vault_account.to_account_info(),
        ctx.accounts.player_reward_account.to_account_info(),
        ctx.accounts.pool_authority.to_account_info(),
        &pool_authority,
        reward,
    )?;

    ctx.accounts.vault_account.reload()?;
    let vault_balance = ctx.accounts.vault_account.amount;

    msg!(
        "Player {} claimed {} shCP base units for {}, vault balance {}",
        ctx.accounts.player.key(),
        reward,
        ctx.accounts.collateral_mint.key(),
        vault_balance
    );

    emit!(ShcpRewardClaimed {
        owner: ctx.accounts.player.key(),
        collateral_mint: ctx.accounts.collateral_mint.key(),
        amount: reward,
        vault_balance,
        timestamp: now,
    });

    Ok(())
}
