use crate::error::AppError;
use anchor_lang::prelude::*;

/// Rejects the call with `Unauthorized` unless `caller` is the identity the
/// operation is reserved for.
pub fn authorize(caller: &Pubkey, expected: &Pubkey) -> Result<()> {
    require_keys_eq!(*caller, *expected, AppError::Unauthorized);
    Ok(())
}
