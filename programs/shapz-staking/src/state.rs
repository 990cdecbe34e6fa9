use anchor_lang::prelude::*;

use crate::constants::REWARD_RATE_PER_SECOND;
use crate::custody;
use crate::errors::ShapzError;
use crate::reward::accrued_reward;

// ============================================================================
// Global Config
// ============================================================================

/// Protocol singleton, written once by `global_init`.
#[account]
#[derive(Default)]
pub struct GlobalConfig {
    /// Master authority that ran `global_init`
    pub authority: Pubkey,
    /// Token account holding the shCP reward pool
    pub vault: Pubkey,
    /// Mint of the vault, every reward account must match it
    pub reward_mint: Pubkey,
    /// Bump of the `shcp_authority` PDA that owns the vault
    pub pool_authority_bump: u8,
    /// PDA bump seed
    pub bump: u8,
}

impl GlobalConfig {
    pub const LEN: usize = 8 + // discriminator
        32 + // authority
        32 + // vault
        32 + // reward_mint
        1 +  // pool_authority_bump
        1;   // bump

    /// A config account fresh out of `init_if_needed` is all zeroes.
    pub fn is_initialized(&self) -> bool {
        self.authority != Pubkey::default()
    }
}

// ============================================================================
// Staking Account
// ============================================================================

/// One live stake of one collateral unit by one owner.
///
/// The account only exists while the slot is staked: it is created by
/// `stake_shcp`, touched by `claim_shcp_reward`, and closed by `unstake_shcp`.
#[account]
#[derive(Default, Debug, PartialEq, Eq)]
pub struct StakingAccount {
    /// Wallet that staked and receives rewards
    pub owner: Pubkey,
    /// Mint of the locked collateral unit
    pub collateral_mint: Pubkey,
    /// When the collateral was locked
    pub stake_start_timestamp: i64,
    /// Accrual start of the next claim
    pub last_claim_timestamp: i64,
    /// Sum of rewards paid out for this slot
    pub total_claimed: u64,
    /// PDA bump seed
    pub bump: u8,
}

impl StakingAccount {
    pub const LEN: usize = 8 + // discriminator
        32 + // owner
        32 + // collateral_mint
        8 +  // stake_start_timestamp
        8 +  // last_claim_timestamp
        8 +  // total_claimed
        1;   // bump

    pub fn open(owner: Pubkey, collateral_mint: Pubkey, now: i64, bump: u8) -> Self {
        Self {
            owner,
            collateral_mint,
            stake_start_timestamp: now,
            last_claim_timestamp: now,
            total_claimed: 0,
            bump,
        }
    }

    pub fn is_staked(&self) -> bool {
        self.owner != Pubkey::default()
    }

    pub fn ensure_vacant(&self) -> Result<()> {
        require!(!self.is_staked(), ShapzError::SlotAlreadyStaked);
        Ok(())
    }

    pub fn pending_reward(&self, now: i64) -> Result<u64> {
        accrued_reward(self.last_claim_timestamp, now, REWARD_RATE_PER_SECOND)
    }

    /// Settle everything accrued up to `now` against a vault holding
    /// `vault_balance`, returning the amount the caller must transfer.
    ///
    /// On error nothing is modified. A zero reward leaves the slot untouched.
    pub fn settle_claim(&mut self, now: i64, vault_balance: u64) -> Result<u64> {
        let reward = self.pending_reward(now)?;
        if reward == 0 {
            return Ok(0);
        }

        custody::ensure_vault_covers(vault_balance, reward)?;
        let total_claimed = self
            .total_claimed
            .checked_add(reward)
            .ok_or(ShapzError::ArithmeticOverflow)?;

        self.total_claimed = total_claimed;
        self.last_claim_timestamp = now;

        Ok(reward)
    }
}
