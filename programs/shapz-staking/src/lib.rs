use anchor_lang::prelude::*;

pub mod constants;
pub mod custody;
pub mod errors;
pub mod events;
pub mod instructions;
pub mod pda;
pub mod reward;
pub mod state;

use instructions::*;

declare_id!("Fg6PaFpoGXkYsidMpWTK6W2BeZ7FEfcYkg476zPFsLnS");

/// Shapz shCP staking: lock one NFT, earn shCP from the shared vault
/// at a fixed per-second rate for as long as it stays locked.
#[program]
pub mod shapz_staking {
    use super::*;

    /// Bind the reward vault to the program and create the config singleton
    pub fn global_init(ctx: Context<GlobalInit>) -> Result<()> {
        instructions::global_init::global_init_handler(ctx)
    }

    /// Lock one collateral unit in escrow and open the staking slot
    pub fn stake_shcp(ctx: Context<StakeShcp>) -> Result<()> {
        instructions::stake_shcp::stake_shcp_handler(ctx)
    }

    /// Pay out the reward accrued since the last claim
    pub fn claim_shcp_reward(ctx: Context<ClaimShcpReward>) -> Result<()> {
        instructions::claim_shcp_reward::claim_shcp_reward_handler(ctx)
    }

    /// Return the collateral and close the slot, forfeiting unclaimed reward
    pub fn unstake_shcp(ctx: Context<UnstakeShcp>) -> Result<()> {
        instructions::unstake_shcp::unstake_shcp_handler(ctx)
    }
}
