use crate::state::WillStatus;
use anchor_lang::prelude::*;

#[event]
pub struct ConfigInitialized {
    pub authority: Pubkey,
    pub fee_vault: Pubkey,
    pub token_fee_bps: u16,
    pub min_heartbeat_period: u32,
    pub max_heartbeat_period: u32,
    pub min_heartbeat_interval: u32,
}

#[event]
pub struct ConfigUpdated {
    pub authority: Pubkey,
    pub token_fee_bps: u16,
    pub min_heartbeat_period: u32,
    pub max_heartbeat_period: u32,
    pub min_heartbeat_interval: u32,
    pub paused: bool,
    pub unix_timestamp: i64,
}

#[event]
pub struct WillCreated {
    pub will: Pubkey,
    pub testator: Pubkey,
    pub beneficiary: Pubkey,
    pub vault: Pubkey,
    pub heartbeat_period: u32,
    pub created_at: i64,
}

#[event]
pub struct SolDeposited {
    pub will: Pubkey,
    pub testator: Pubkey,
    pub amount: u64,
    pub deposited_lamports: u64,
    pub status: WillStatus,
    pub unix_timestamp: i64,
}

#[event]
pub struct HeartbeatSent {
    pub will: Pubkey,
    pub testator: Pubkey,
    pub last_heartbeat: i64,
    pub expires_at: i64,
}

#[event]
pub struct WillTriggered {
    pub will: Pubkey,
    pub keeper: Pubkey,
    pub beneficiary: Pubkey,
    pub trigger_at: i64,
}

#[event]
pub struct SolWithdrawn {
    pub will: Pubkey,
    pub testator: Pubkey,
    pub amount: u64,
    pub unix_timestamp: i64,
}

#[event]
pub struct SolClaimed {
    pub will: Pubkey,
    pub beneficiary: Pubkey,
    pub amount: u64,
    pub fee: u64,
    pub fee_vault: Pubkey,
    pub unix_timestamp: i64,
}
