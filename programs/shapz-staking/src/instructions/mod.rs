pub mod claim_shcp_reward;
pub mod global_init;
pub mod stake_shcp;
pub mod unstake_shcp;

pub use claim_shcp_reward::*;
pub use global_init::*;
pub use stake_shcp::*;
pub use unstake_shcp::*;
