use anchor_lang::prelude::*;

/// Seed domain of the GlobalConfig singleton: `["shapz_config", pool_authority]`
#[constant]
pub const CONFIG_SEED: &[u8] = b"shapz_config";

/// Seed domain of a staking slot: `["shcp_staking", pool_authority, owner, collateral_mint]`
#[constant]
pub const STAKING_SEED: &[u8] = b"shcp_staking";

/// Seed domain of the key-less vault authority: `["shcp_authority"]`
#[constant]
pub const POOL_AUTHORITY_SEED: &[u8] = b"shcp_authority";

/// Seed domain of the collateral escrow: `["shcp_escrow", pool_authority, owner, collateral_mint]`
#[constant]
pub const ESCROW_SEED: &[u8] = b"shcp_escrow";

/// shCP base units paid per second of stake (9 decimals, ~0.0023 shCP/s).
#[constant]
pub const REWARD_RATE_PER_SECOND: u64 = 2_314_815;

/// A staked position is always exactly one whole collateral unit.
pub const COLLATERAL_AMOUNT: u64 = 1;

/// Collateral mints are non-divisible.
pub const COLLATERAL_DECIMALS: u8 = 0;

/// One mint, one unit in existence.
pub const COLLATERAL_SUPPLY: u64 = 1;
