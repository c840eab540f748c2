use crate::{constants::*, events::HeartbeatSent, state::*};
use anchor_lang::prelude::*;

#[derive(Accounts)]
pub struct SendHeartbeat<'info> {
    /// Testator proving liveness
    pub testator: Signer<'info>,

    /// Config for the heartbeat interval
    #[account(
        seeds = [CONFIG_SEED.as_bytes()],
        bump = config.bump
    )]
    pub config: Account<'info, Config>,

    /// Will to keep alive, must be active
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

impl<'info> SendHeartbeat<'info> {
    pub fn send_heartbeat(&mut self) -> Result<()> {
        let now = Clock::get()?.unix_timestamp;
        let testator = self.testator.key();

        self.will.heartbeat(&self.config, &testator, now)?;
        let expires_at = self.will.expires_at()?;

        msg!(
            "Heartbeat from {} for will {}, expires at {}",
            testator,
            self.will.key(),
            expires_at
        );

        emit!(HeartbeatSent {
            will: self.will.key(),
            testator,
            last_heartbeat: now,
            expires_at,
        });

        Ok(())
    }
}
