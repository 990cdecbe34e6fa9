use anchor_lang::prelude::*;

use crate::errors::ShapzError;

/// Reward accrued between `last_claim` and `now`: `floor((now - last_claim) * rate)`.
///
/// Accrual is pull-based: nothing ticks between instructions, the amount is
/// recomputed from the two timestamps every time a slot is claimed or closed.
/// A zero-length interval yields zero; a clock earlier than `last_claim` is an
/// error, never a zero reward.
pub fn accrued_reward(last_claim: i64, now: i64, rate_per_second: u64) -> Result<u64> {
    let elapsed = now
        .checked_sub(last_claim)
        .ok_or(ShapzError::ArithmeticOverflow)?;
    let elapsed = u64::try_from(elapsed).map_err(|_| ShapzError::ClockWentBackwards)?;

    // u64 * u64 always fits in u128, only the narrowing can fail
    let reward = elapsed as u128 * rate_per_second as u128;
    u64::try_from(reward).map_err(|_| error!(ShapzError::ArithmeticOverflow))
}
