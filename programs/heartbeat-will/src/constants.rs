use anchor_lang::prelude::*;

// PDA seeds
#[constant]
pub const CONFIG_SEED: &str = "config";
#[constant]
pub const FEE_VAULT_SEED: &str = "fee_vault";
#[constant]
pub const WILL_SEED: &str = "will";
#[constant]
pub const VAULT_SEED: &str = "vault";

// Time units (seconds)
pub const SECONDS_PER_MINUTE: u32 = 60;
pub const SECONDS_PER_HOUR: u32 = 60 * SECONDS_PER_MINUTE;
pub const SECONDS_PER_DAY: u32 = 24 * SECONDS_PER_HOUR;
pub const SECONDS_PER_WEEK: u32 = 7 * SECONDS_PER_DAY;

// Fee configuration
pub const BPS_DENOMINATOR: u64 = 10_000;
pub const MAX_FEE_BPS: u16 = 10_000;
pub const DEFAULT_TOKEN_FEE_BPS: u16 = 250; // 2.5%

// Heartbeat defaults used by deploy scripts and tests
pub const DEFAULT_MIN_HEARTBEAT_PERIOD: u32 = SECONDS_PER_DAY;
pub const DEFAULT_MAX_HEARTBEAT_PERIOD: u32 = 365 * SECONDS_PER_DAY;
pub const DEFAULT_MIN_HEARTBEAT_INTERVAL: u32 = SECONDS_PER_MINUTE;

pub const LAMPORTS_PER_SOL: u64 = 1_000_000_000;
