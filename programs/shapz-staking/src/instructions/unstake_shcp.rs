use anchor_lang::prelude::*;
use anchor_spl::token::{Token, TokenAccount};

use crate::constants::{COLLATERAL_AMOUNT, ESCROW_SEED, POOL_AUTHORITY_SEED, STAKING_SEED};
use crate::custody;
use crate::errors::ShapzError;
use crate::events::ShcpUnstaked;
use crate::pda::PoolAuthority;
use crate::state::StakingAccount;

#[derive(Accounts)]
pub struct UnstakeShcp<'info> {
    #[account(mut)]
    pub player: Signer<'info>,

    #[account(
        mut,
        seeds = [
            ESCROW_SEED,
            pool_authority.key().as_ref(),
            player.key().as_ref(),
            staking_account.collateral_mint.as_ref(),
        ],
        bump,
        constraint = escrow_account.amount == COLLATERAL_AMOUNT @ ShapzError::SlotNotStaked,
    )]
    pub escrow_account: Account<'info, TokenAccount>,

    #[account(
        mut,
        constraint = player_collateral_account.owner == player.key() @ ShapzError::InvalidOwner,
        constraint = player_collateral_account.mint == staking_account.collateral_mint @ ShapzError::CollateralMintMismatch,
    )]
    pub player_collateral_account: Account<'info, TokenAccount>,

    /// CHECK: key-less PDA that owns the escrow, signs via seeds
    #[account(seeds = [POOL_AUTHORITY_SEED], bump)]
    pub pool_authority: UncheckedAccount<'info>,

    #[account(
        mut,
        close = player,
        seeds = [
            STAKING_SEED,
            pool_authority.key().as_ref(),
            player.key().as_ref(),
            staking_account.collateral_mint.as_ref(),
        ],
        bump = staking_account.bump,
        constraint = staking_account.owner == player.key() @ ShapzError::InvalidOwner,
    )]
    pub staking_account: Account<'info, StakingAccount>,

    pub token_program: Program<'info, Token>,
}

/// Returns the collateral and closes the slot.
///
/// Reward accrued since the last claim is forfeited: the vault is never read
/// here, so collateral comes back even when the pool is empty. Players who
/// want the tail reward put `claim_shcp_reward` in front of this instruction
/// in the same transaction.
pub fn unstake_shcp_handler(ctx: Context<UnstakeShcp>) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let slot = &ctx.accounts.staking_account;
    // reported only, nothing is paid, so a bad clock must not trap the collateral
    let forfeited_reward = slot.pending_reward(now).unwrap_or_default();
    let total_claimed = slot.total_claimed;
    let collateral_mint = slot.collateral_mint;

    let pool_authority =
        PoolAuthority::verify(&ctx.accounts.pool_authority.key(), ctx.bumps.pool_authority)?;
    custody::return_collateral(
        ctx.accounts.token_program.to_account_info(),
        ctx.accounts.escrow_account.to_account_info(),
        ctx.accounts.player_collateral_account.to_account_info(),
        ctx.accounts.player.to_account_info(),
        ctx.accounts.pool_authority.to_account_info(),
        &pool_authority,
    )?;

    msg!(
        "Player {} unstaked {}, forfeited {} shCP base units",
        ctx.accounts.player.key(),
        collateral_mint,
        forfeited_reward
    );

    emit!(ShcpUnstaked {
        owner: ctx.accounts.player.key(),
        collateral_mint,
        forfeited_reward,
        total_claimed,
        timestamp: now,
    });

    Ok(())
}
