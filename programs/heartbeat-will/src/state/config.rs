use crate::{constants::*, error::AppError, utils::authorize};
use anchor_lang::prelude::*;

/// Program-wide parameters. Seeds: [b"config"]
#[account]
#[derive(InitSpace, Debug, Default)]
pub struct Config {
    pub authority: Pubkey,           // may update config
    pub fee_vault: Pubkey,           // collects claim fees
    pub token_fee_bps: u16,          // fee on claimed SOL (250 = 2.5%)
    pub nft_fee_lamports: u64,       // flat NFT fee, not charged by any instruction
    pub min_heartbeat_period: u32,   // seconds
    pub max_heartbeat_period: u32,   // seconds
    pub min_heartbeat_interval: u32, // seconds - cooldown between heartbeats
    pub paused: bool,
    pub bump: u8,
    pub fee_vault_bump: u8,
}

/// Tunable fields of [`Config`], validated as a unit.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct ConfigParams {
    pub token_fee_bps: u16,
    pub nft_fee_lamports: u64,
    pub min_heartbeat_period: u32,
    pub max_heartbeat_period: u32,
    pub min_heartbeat_interval: u32,
}

/// Partial config update. `None` leaves the stored value untouched.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct UpdateConfigArgs {
    pub token_fee_bps: Option<u16>,
    pub nft_fee_lamports: Option<u64>,
    pub min_heartbeat_period: Option<u32>,
    pub max_heartbeat_period: Option<u32>,
    pub min_heartbeat_interval: Option<u32>,
    pub paused: Option<bool>,
}

impl ConfigParams {
    pub fn validate(&self) -> Result<()> {
        require!(
            self.min_heartbeat_period > 0,
            AppError::InvalidMinimumHeartbeatPeriod
        );
        require!(
            self.max_heartbeat_period > self.min_heartbeat_period,
            AppError::InvalidMaximumHeartbeatPeriod
        );
        require!(
            self.min_heartbeat_interval > 0,
            AppError::InvalidMinimumHeartbeatInterval
        );
        require!(self.token_fee_bps <= MAX_FEE_BPS, AppError::InvalidFeeBps);

        Ok(())
    }

    /// Overlays the supplied fields of `update` on top of `self`.
    pub fn merge(self, update: &UpdateConfigArgs) -> Self {
        Self {
            token_fee_bps: update.token_fee_bps.unwrap_or(self.token_fee_bps),
            nft_fee_lamports: update.nft_fee_lamports.unwrap_or(self.nft_fee_lamports),
            min_heartbeat_period: update
                .min_heartbeat_period
                .unwrap_or(self.min_heartbeat_period),
            max_heartbeat_period: update
                .max_heartbeat_period
                .unwrap_or(self.max_heartbeat_period),
            min_heartbeat_interval: update
                .min_heartbeat_interval
                .unwrap_or(self.min_heartbeat_interval),
        }
    }
}

impl Config {
    pub fn is_initialized(&self) -> bool {
        self.authority != Pubkey::default()
    }

    pub fn params(&self) -> ConfigParams {
        ConfigParams {
            token_fee_bps: self.token_fee_bps,
            nft_fee_lamports: self.nft_fee_lamports,
            min_heartbeat_period: self.min_heartbeat_period,
            max_heartbeat_period: self.max_heartbeat_period,
            min_heartbeat_interval: self.min_heartbeat_interval,
        }
    }

    fn set_params(&mut self, params: ConfigParams) {
        self.token_fee_bps = params.token_fee_bps;
        self.nft_fee_lamports = params.nft_fee_lamports;
        self.min_heartbeat_period = params.min_heartbeat_period;
        self.max_heartbeat_period = params.max_heartbeat_period;
        self.min_heartbeat_interval = params.min_heartbeat_interval;
    }

    /// First-time setup. Fails on an account that already carries an
    /// authority so a second `initialize` can never overwrite live settings.
    pub fn initialize(
        &mut self,
        authority: Pubkey,
        fee_vault: Pubkey,
        params: ConfigParams,
    ) -> Result<()> {
        require!(!self.is_initialized(), AppError::AlreadyInitialized);
        require_keys_neq!(authority, Pubkey::default(), AppError::Unauthorized);
        params.validate()?;

        self.authority = authority;
        self.fee_vault = fee_vault;
        self.set_params(params);
        self.paused = false;

        Ok(())
    }

    /// Applies `update` if `caller` is the authority and the merged result
    /// is a valid config. Nothing is written on failure.
    pub fn apply_update(&mut self, caller: &Pubkey, update: &UpdateConfigArgs) -> Result<()> {
        authorize(caller, &self.authority)?;

        let merged = self.params().merge(update);
        merged.validate()?;

        self.set_params(merged);
        if let Some(paused) = update.paused {
            self.paused = paused;
        }

        Ok(())
    }

    pub fn require_not_paused(&self) -> Result<()> {
        require!(!self.paused, AppError::Paused);
        Ok(())
    }

    pub fn check_heartbeat_period(&self, heartbeat_period: u32) -> Result<()> {
        require!(
            heartbeat_period >= self.min_heartbeat_period,
            AppError::HeartbeatPeriodTooShort
        );
        require!(
            heartbeat_period <= self.max_heartbeat_period,
            AppError::HeartbeatPeriodTooLong
        );
        Ok(())
    }
}
