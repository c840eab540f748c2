use crate::{constants::*, error::AppError};
use anchor_lang::prelude::*;

/// Splits `balance` into `(fee, net)` for a fee rate in basis points.
///
/// The fee is floored; whatever the division drops stays with the
/// beneficiary, so `fee + net == balance` always holds.
pub fn split_fee(balance: u64, fee_bps: u16) -> Result<(u64, u64)> {
    require!(fee_bps <= MAX_FEE_BPS, AppError::InvalidFeeBps);

    let fee = (balance as u128)
        .checked_mul(fee_bps as u128)
        .ok_or(AppError::Overflow)?
        .checked_div(BPS_DENOMINATOR as u128)
        .ok_or(AppError::Overflow)?;
    let fee = u64::try_from(fee).map_err(|_| AppError::Overflow)?;

    let net = balance.checked_sub(fee).ok_or(AppError::Underflow)?;

    Ok((fee, net))
}
