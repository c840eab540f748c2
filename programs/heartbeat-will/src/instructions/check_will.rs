use crate::{constants::*, state::*, utils::seconds_since};
use anchor_lang::prelude::*;

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct WillSummary {
    pub will: Pubkey,
    pub testator: Pubkey,
    pub beneficiary: Pubkey,
    pub status: WillStatus,
    pub heartbeat_period: u32,
    pub last_heartbeat: i64,
    pub expires_at: i64,
    pub seconds_until_expiry: u64, // 0 once expired
    pub triggerable: bool,
    pub trigger_at: Option<i64>,
    pub deposited_lamports: u64,
    pub vault_lamports: u64,
}

impl WillSummary {
    pub fn new(will_key: Pubkey, will: &Will, vault_lamports: u64, now: i64) -> Result<Self> {
        let expires_at = will.expires_at()?;

        Ok(Self {
            will: will_key,
            testator: will.testator,
            beneficiary: will.beneficiary,
            status: will.status,
            heartbeat_period: will.heartbeat_period,
            last_heartbeat: will.last_heartbeat,
            expires_at,
            seconds_until_expiry: seconds_since(now, expires_at)?,
            triggerable: will.is_triggerable(now)?,
            trigger_at: will.trigger_at,
            deposited_lamports: will.deposited_lamports,
            vault_lamports,
        })
    }
}

/// Read-only view for clients and keepers. Mutates nothing.
#[derive(Accounts)]
pub struct CheckWill<'info> {
    /// Will to inspect
    #[account(
        seeds = [
            WILL_SEED.as_bytes(),
            will.testator.as_ref(),
            will.beneficiary.as_ref(),
        ],
        bump = will.bump
    )]
    pub will: Account<'info, Will>,

    /// SOL escrow, read for its balance
    #[account(
        seeds = [VAULT_SEED.as_bytes(), will.key().as_ref()],
        bump = will.vault_bump
    )]
    pub vault: SystemAccount<'info>,
}

impl<'info> CheckWill<'info> {
    pub fn check_will(&self) -> Result<WillSummary> {
        let now = Clock::get()?.unix_timestamp;
        let summary = WillSummary::new(self.will.key(), &self.will, self.vault.lamports(), now)?;

        msg!(
            "Will {} status {:?}, expires at {}, triggerable: {}",
            summary.will,
            summary.status,
            summary.expires_at,
            if summary.triggerable { "YES" } else { "NO" }
        );

        Ok(summary)
    }
}
