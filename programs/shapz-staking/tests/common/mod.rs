//! Shared helpers for the SVM tests.

pub mod instructions;

pub use instructions::*;
pub use mock_accounts::*;
pub use setup::*;
