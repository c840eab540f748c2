use crate::error::AppError;
use anchor_lang::prelude::*;

/// A system account holding fewer lamports than `rent_floor` is rejected by
/// the runtime, so a deposit must bring the vault at least to the floor.
pub fn check_rent_floor(vault_lamports: u64, amount: u64, rent_floor: u64) -> Result<()> {
    let balance = vault_lamports
        .checked_add(amount)
        .ok_or(AppError::Overflow)?;
    require!(balance >= rent_floor, AppError::DepositBelowRentExemption);
    Ok(())
}

/// Lamports missing for `balance` to reach `rent_floor`, zero if already there.
pub fn rent_shortfall(balance: u64, rent_floor: u64) -> u64 {
    rent_floor.saturating_sub(balance)
}
