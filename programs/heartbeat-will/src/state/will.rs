use crate::{
    error::AppError,
    state::Config,
    utils::{authorize, deadline, seconds_since, split_fee},
};
use anchor_lang::prelude::*;

/// One will per (testator, beneficiary). Seeds: [b"will", testator, beneficiary]
#[account]
#[derive(InitSpace, Debug, Default, PartialEq)]
pub struct Will {
    // identifiers
    pub testator: Pubkey,
    pub beneficiary: Pubkey,
    pub vault: Pubkey, // SOL escrow PDA

    pub heartbeat_period: u32, // seconds, fixed at creation

    // status & timing
    pub status: WillStatus,
    pub created_at: i64,
    pub last_heartbeat: i64,
    pub trigger_at: Option<i64>,

    // lamports escrowed through deposit_sol, zeroed on release
    pub deposited_lamports: u64,

    pub bump: u8,
    pub vault_bump: u8,
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq, InitSpace)]
pub enum WillStatus {
    #[default]
    Created, // no deposit yet
    Active,    // funded, heartbeat clock running
    Triggered, // heartbeat missed, claimable by beneficiary
    Claimed,   // paid out to beneficiary
    Withdrawn, // cancelled by testator
}

impl WillStatus {
    pub fn is_terminal(&self) -> bool {
        matches!(self, WillStatus::Claimed | WillStatus::Withdrawn)
    }

    /// Testator still controls the funds.
    pub fn is_cancellable(&self) -> bool {
        matches!(self, WillStatus::Created | WillStatus::Active)
    }
}

impl Will {
    pub fn is_initialized(&self) -> bool {
        self.testator != Pubkey::default()
    }

    pub fn create(
        &mut self,
        config: &Config,
        testator: Pubkey,
        beneficiary: Pubkey,
        heartbeat_period: u32,
        now: i64,
    ) -> Result<()> {
        config.require_not_paused()?;
        require_keys_neq!(testator, beneficiary, AppError::InvalidBeneficiary);
        config.check_heartbeat_period(heartbeat_period)?;
        require!(!self.is_initialized(), AppError::AlreadyExists);

        self.testator = testator;
        self.beneficiary = beneficiary;
        self.heartbeat_period = heartbeat_period;
        self.status = WillStatus::Created;
        self.created_at = now;
        self.last_heartbeat = now;
        self.trigger_at = None;
        self.deposited_lamports = 0;

        Ok(())
    }

    /// Records `amount` lamports entering the vault. The first deposit
    /// activates the will; every deposit counts as a heartbeat.
    /// `min_heartbeat_interval` does not apply to deposits.
    pub fn deposit(&mut self, config: &Config, caller: &Pubkey, amount: u64, now: i64) -> Result<()> {
        config.require_not_paused()?;
        authorize(caller, &self.testator)?;
        require!(amount > 0, AppError::InvalidAmount);
        require!(self.status.is_cancellable(), AppError::InvalidWillStatus);

        let deposited = self
            .deposited_lamports
            .checked_add(amount)
            .ok_or(AppError::Overflow)?;

        self.deposited_lamports = deposited;
        self.last_heartbeat = now;
        if self.status == WillStatus::Created {
            self.status = WillStatus::Active;
        }

        Ok(())
    }

    pub fn heartbeat(&mut self, config: &Config, caller: &Pubkey, now: i64) -> Result<()> {
        config.require_not_paused()?;
        authorize(caller, &self.testator)?;
        require!(self.status == WillStatus::Active, AppError::InvalidWillStatus);
        require!(
            seconds_since(self.last_heartbeat, now)? >= config.min_heartbeat_interval as u64,
            AppError::HeartbeatPeriodTooShort
        );

        self.last_heartbeat = now;

        Ok(())
    }

    /// Heartbeat period has fully elapsed since the last proof of life.
    pub fn is_expired(&self, now: i64) -> Result<bool> {
        Ok(seconds_since(self.last_heartbeat, now)? > self.heartbeat_period as u64)
    }

    pub fn is_triggerable(&self, now: i64) -> Result<bool> {
        Ok(self.status == WillStatus::Active && self.is_expired(now)?)
    }

    /// Earliest timestamp strictly after which the will may be triggered.
    pub fn expires_at(&self) -> Result<i64> {
        deadline(self.last_heartbeat, self.heartbeat_period)
    }

    /// Open to any caller; only the clock decides.
    pub fn trigger(&mut self, config: &Config, now: i64) -> Result<()> {
        config.require_not_paused()?;
        require!(self.status == WillStatus::Active, AppError::InvalidWillStatus);
        require!(self.is_expired(now)?, AppError::WillNotExpired);

        self.status = WillStatus::Triggered;
        self.trigger_at = Some(now);

        Ok(())
    }

    /// Cancels the will. The caller moves the whole vault balance back to
    /// the testator. Allowed while the program is paused.
    pub fn withdraw(&mut self, caller: &Pubkey) -> Result<()> {
        authorize(caller, &self.testator)?;
        require!(self.status.is_cancellable(), AppError::InvalidWillStatus);

        self.deposited_lamports = 0;
        self.status = WillStatus::Withdrawn;

        Ok(())
    }

    /// Settles a triggered will holding `vault_balance` lamports and returns
    /// `(fee, net)`: the fee goes to the fee vault, the rest to the
    /// beneficiary.
    pub fn claim(&mut self, config: &Config, caller: &Pubkey, vault_balance: u64) -> Result<(u64, u64)> {
        config.require_not_paused()?;
        authorize(caller, &self.beneficiary)?;
        require!(self.status == WillStatus::Triggered, AppError::InvalidWillStatus);

        let split = split_fee(vault_balance, config.token_fee_bps)?;

        self.deposited_lamports = 0;
        self.status = WillStatus::Claimed;

        Ok(split)
    }
}
