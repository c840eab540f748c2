use crate::{constants::*, events::WillTriggered, state::*};
use anchor_lang::prelude::*;

/// Any signer may trigger; the heartbeat clock is the only gate.
#[derive(Accounts)]
pub struct TriggerWill<'info> {
    /// Any signer, identity is not checked
    pub keeper: Signer<'info>,

    /// Config for the pause flag
    #[account(
        seeds = [CONFIG_SEED.as_bytes()],
        bump = config.bump
    )]
    pub config: Account<'info, Config>,

    /// Will whose heartbeat period has run out
    #[account(
        mut,
        seeds = [
            WILL_SEED.as_bytes(),
            will.testator.as_ref(),
            will.beneficiary.as_ref(),
        ],
        bump = will.bump
    )]
    pub will: Account<'info, Will>,
}

impl<'info> TriggerWill<'info> {
    pub fn trigger_will(&mut self) -> Result<()> {
        let now = Clock::get()?.unix_timestamp;

        self.will.trigger(&self.config, now)?;

        msg!(
            "Will {} triggered by {} at {} (last heartbeat: {}, period: {}s)",
            self.will.key(),
            self.keeper.key(),
            now,
            self.will.last_heartbeat,
            self.will.heartbeat_period
        );

        emit!(WillTriggered {
            will: self.will.key(),
            keeper: self.keeper.key(),
            beneficiary: self.will.beneficiary,
            trigger_at: now,
        });

        Ok(())
    }
}
