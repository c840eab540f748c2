//! Address derivation for the program's accounts, shared by off-chain
//! clients and tests. On-chain, the same seeds are enforced by the
//! `seeds = [...]` constraints on each instruction.

use crate::constants::*;
use anchor_lang::prelude::*;

pub fn find_config_address() -> (Pubkey, u8) {
    Pubkey::find_program_address(&[CONFIG_SEED.as_bytes()], &crate::ID)
}

pub fn find_fee_vault_address() -> (Pubkey, u8) {
    Pubkey::find_program_address(&[FEE_VAULT_SEED.as_bytes()], &crate::ID)
}

pub fn find_will_address(testator: &Pubkey, beneficiary: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[WILL_SEED.as_bytes(), testator.as_ref(), beneficiary.as_ref()],
        &crate::ID,
    )
}

pub fn find_vault_address(will: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[VAULT_SEED.as_bytes(), will.as_ref()], &crate::ID)
}
