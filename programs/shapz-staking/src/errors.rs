use anchor_lang::prelude::*;

#[error_code]
pub enum ShapzError {
    // Validation
    #[msg("Account address does not match its expected derivation")]
    InvalidDerivedAddress,
    #[msg("Token account is not owned by the expected wallet")]
    InvalidOwner,
    #[msg("Collateral account must hold exactly one unit")]
    InvalidCollateralAmount,
    #[msg("Collateral mint must have zero decimals")]
    InvalidCollateralDecimals,
    #[msg("Token account mint does not match the staked collateral mint")]
    CollateralMintMismatch,
    #[msg("Token account mint does not match the reward vault mint")]
    RewardMintMismatch,
    #[msg("Vault account does not match the configured vault")]
    VaultMismatch,
    #[msg("Vault still has a delegate or close authority set")]
    VaultNotExclusive,
    #[msg("Global config already initialized for this authority")]
    ConfigAlreadyInitialized,

    // Invariant violations
    #[msg("Staking slot is already occupied")]
    SlotAlreadyStaked,
    #[msg("Staking slot holds no collateral")]
    SlotNotStaked,

    // Arithmetic
    #[msg("Arithmetic overflow")]
    ArithmeticOverflow,
    #[msg("Clock is earlier than the last claim")]
    ClockWentBackwards,

    // Funds
    #[msg("Vault balance is below the computed reward")]
    InsufficientVaultFunds,

    // Validation, appended to keep earlier codes stable
    #[msg("Collateral mint must have a total supply of exactly one")]
    InvalidCollateralSupply,
    #[msg("Signer is not the program upgrade authority")]
    UnauthorizedMasterAuthority,
}

/// Coarse classification a client uses to pick retry vs. abort vs. wait-for-funding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    InvariantViolation,
    Arithmetic,
    InsufficientFunds,
}

impl ShapzError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ShapzError::InvalidDerivedAddress
            | ShapzError::InvalidOwner
            | ShapzError::InvalidCollateralAmount
            | ShapzError::InvalidCollateralDecimals
            | ShapzError::CollateralMintMismatch
            | ShapzError::RewardMintMismatch
            | ShapzError::VaultMismatch
            | ShapzError::VaultNotExclusive
            | ShapzError::ConfigAlreadyInitialized
            | ShapzError::InvalidCollateralSupply
            | ShapzError::UnauthorizedMasterAuthority => ErrorKind::Validation,
            ShapzError::SlotAlreadyStaked | ShapzError::SlotNotStaked => {
                ErrorKind::InvariantViolation
            }
            ShapzError::ArithmeticOverflow | ShapzError::ClockWentBackwards => {
                ErrorKind::Arithmetic
            }
            ShapzError::InsufficientVaultFunds => ErrorKind::InsufficientFunds,
        }
    }
}
