use anchor_lang::prelude::*;

#[event]
pub struct GlobalInitialized {
    pub config: Pubkey,
    pub authority: Pubkey,
    pub vault: Pubkey,
    pub pool_authority: Pubkey,
}

#[event]
pub struct ShcpStaked {
    pub owner: Pubkey,
    pub collateral_mint: Pubkey,
    pub staking_account: Pubkey,
    pub timestamp: i64,
}

#[event]
pub struct ShcpRewardClaimed {
    pub owner: Pubkey,
    pub collateral_mint: Pubkey,
    pub amount: u64,
    pub vault_balance: u64,
    pub timestamp: i64,
}

#[event]
pub struct ShcpUnstaked {
    pub owner: Pubkey,
    pub collateral_mint: Pubkey,
    /// Accrued since the last claim and not paid out
    pub forfeited_reward: u64,
    pub total_claimed: u64,
    pub timestamp: i64,
}
