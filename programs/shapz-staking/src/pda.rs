//! Program-derived addresses used by the staking program.
//!
//! None of these addresses has a private key. The program proves control of
//! them by recomputing the derivation at execution time and passing the same
//! seeds to the runtime when it needs a signature.

use anchor_lang::prelude::*;

use crate::constants::{CONFIG_SEED, ESCROW_SEED, POOL_AUTHORITY_SEED, STAKING_SEED};
use crate::errors::ShapzError;

pub fn find_pool_authority_address() -> (Pubkey, u8) {
    Pubkey::find_program_address(&[POOL_AUTHORITY_SEED], &crate::ID)
}

pub fn find_config_address(pool_authority: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[CONFIG_SEED, pool_authority.as_ref()], &crate::ID)
}

pub fn find_staking_address(
    pool_authority: &Pubkey,
    owner: &Pubkey,
    collateral_mint: &Pubkey,
) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[
            STAKING_SEED,
            pool_authority.as_ref(),
            owner.as_ref(),
            collateral_mint.as_ref(),
        ],
        &crate::ID,
    )
}

pub fn find_escrow_address(
    pool_authority: &Pubkey,
    owner: &Pubkey,
    collateral_mint: &Pubkey,
) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[
            ESCROW_SEED,
            pool_authority.as_ref(),
            owner.as_ref(),
            collateral_mint.as_ref(),
        ],
        &crate::ID,
    )
}

/// Capability to sign for the vault and escrow accounts.
///
/// The only constructor re-derives `["shcp_authority", bump]` and compares it
/// to the address the caller supplied, so holding a `PoolAuthority` means the
/// address has been checked in this instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PoolAuthority {
    address: Pubkey,
    bump: [u8; 1],
}

impl PoolAuthority {
    pub fn verify(address: &Pubkey, bump: u8) -> Result<Self> {
        let expected = Pubkey::create_program_address(&[POOL_AUTHORITY_SEED, &[bump]], &crate::ID)
            .map_err(|_| ShapzError::InvalidDerivedAddress)?;
        require_keys_eq!(expected, *address, ShapzError::InvalidDerivedAddress);

        Ok(Self {
            address: expected,
            bump: [bump],
        })
    }

    pub fn address(&self) -> Pubkey {
        self.address
    }

    pub fn bump(&self) -> u8 {
        self.bump[0]
    }

    pub fn signer_seeds(&self) -> [&[u8]; 2] {
        [POOL_AUTHORITY_SEED, &self.bump]
    }
}
