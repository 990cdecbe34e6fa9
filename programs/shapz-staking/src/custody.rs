use anchor_lang::prelude::*;
use anchor_spl::token::{
    self, spl_token::instruction::AuthorityType, CloseAccount, SetAuthority, Transfer,
    TransferChecked,
};

use crate::constants::{COLLATERAL_AMOUNT, COLLATERAL_DECIMALS, COLLATERAL_SUPPLY};
use crate::errors::ShapzError;
use crate::pda::PoolAuthority;

// ============================================================================
// Checks
// ============================================================================

/// Vault balance left after paying `amount`. Transfers are all-or-nothing.
pub fn ensure_vault_covers(vault_balance: u64, amount: u64) -> Result<u64> {
    let remaining = vault_balance
        .checked_sub(amount)
        .ok_or(ShapzError::InsufficientVaultFunds)?;
    Ok(remaining)
}

/// The source of a stake must hold the only unit of a zero-decimal mint, so
/// an escrow never holds anything but 0 or 1 unit.
pub fn validate_collateral(amount: u64, decimals: u8, supply: u64) -> Result<()> {
    require!(
        decimals == COLLATERAL_DECIMALS,
        ShapzError::InvalidCollateralDecimals
    );
    require!(
        supply == COLLATERAL_SUPPLY,
        ShapzError::InvalidCollateralSupply
    );
    require!(
        amount == COLLATERAL_AMOUNT,
        ShapzError::InvalidCollateralAmount
    );
    Ok(())
}

/// A vault handed to the program must not leave a side door open.
pub fn validate_vault_exclusive(has_delegate: bool, has_close_authority: bool) -> Result<()> {
    require!(
        !has_delegate && !has_close_authority,
        ShapzError::VaultNotExclusive
    );
    Ok(())
}

// ============================================================================
// Token CPIs
// ============================================================================

/// Hand the vault's owner authority over to the pool authority PDA.
pub fn bind_vault<'info>(
    token_program: AccountInfo<'info>,
    vault: AccountInfo<'info>,
    current_owner: AccountInfo<'info>,
    pool_authority: &PoolAuthority,
) -> Result<()> {
    let cpi_ctx = CpiContext::new(
        token_program,
        SetAuthority {
            current_authority: current_owner,
            account_or_mint: vault,
        },
    );
    token::set_authority(
        cpi_ctx,
        AuthorityType::AccountOwner,
        Some(pool_authority.address()),
    )
}

/// Move the single collateral unit from the player into escrow, player-signed.
pub fn lock_collateral<'info>(
    token_program: AccountInfo<'info>,
    from: AccountInfo<'info>,
    mint: AccountInfo<'info>,
    escrow: AccountInfo<'info>,
    player: AccountInfo<'info>,
) -> Result<()> {
    let cpi_ctx = CpiContext::new(
        token_program,
        TransferChecked {
            from,
            mint,
            to: escrow,
            authority: player,
        },
    );
    token::transfer_checked(cpi_ctx, COLLATERAL_AMOUNT, COLLATERAL_DECIMALS)
}

/// Pay `amount` out of the vault, signed by the pool authority.
pub fn release_reward<'info>(
    token_program: AccountInfo<'info>,
    vault: AccountInfo<'info>,
    destination: AccountInfo<'info>,
    pool_authority_info: AccountInfo<'info>,
    pool_authority: &PoolAuthority,
    amount: u64,
) -> Result<()> {
    let seeds = pool_authority.signer_seeds();
    let signer_seeds = &[&seeds[..]];

    let cpi_ctx = CpiContext::new_with_signer(
        token_program,
        Transfer {
            from: vault,
            to: destination,
            authority: pool_authority_info,
        },
        signer_seeds,
    );
    token::transfer(cpi_ctx, amount)
}

/// Send the escrowed unit back and close the escrow, rent going to `rent_receiver`.
pub fn return_collateral<'info>(
    token_program: AccountInfo<'info>,
    escrow: AccountInfo<'info>,
    destination: AccountInfo<'info>,
    rent_receiver: AccountInfo<'info>,
    pool_authority_info: AccountInfo<'info>,
    pool_authority: &PoolAuthority,
) -> Result<()> {
    let seeds = pool_authority.signer_seeds();
    let signer_seeds = &[&seeds[..]];

    token::transfer(
        CpiContext::new_with_signer(
            token_program.clone(),
            Transfer {
                from: escrow.clone(),
                to: destination,
                authority: pool_authority_info.clone(),
            },
            signer_seeds,
        ),
        COLLATERAL_AMOUNT,
    )?;

    // escrow balance is zero now, so the token program lets us close it
    token::close_account(CpiContext::new_with_signer(
        token_program,
        CloseAccount {
            account: escrow,
            destination: rent_receiver,
            authority: pool_authority_info,
        },
        signer_seeds,
    ))
}
