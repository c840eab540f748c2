use crate::error::AppError;
use anchor_lang::prelude::*;

/// Seconds elapsed from `since` to `now`. A clock that reads earlier than
/// `since` counts as zero elapsed time.
pub fn seconds_since(since: i64, now: i64) -> Result<u64> {
    let elapsed = now.checked_sub(since).ok_or(AppError::Overflow)?;
    Ok(elapsed.max(0) as u64)
}

/// Timestamp at which a period of `period` seconds starting at `start` ends.
pub fn deadline(start: i64, period: u32) -> Result<i64> {
    let end = start
        .checked_add(period as i64)
        .ok_or(AppError::Overflow)?;
    Ok(end)
}
