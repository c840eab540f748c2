use crate::{constants::*, events::ConfigUpdated, state::*};
use anchor_lang::prelude::*;

#[derive(Accounts)]
pub struct UpdateConfig<'info> {
    /// Must match config.authority
    pub authority: Signer<'info>,

    /// Program config to update
    #[account(
        mut,
        seeds = [CONFIG_SEED.as_bytes()],
        bump = config.bump
    )]
    pub config: Account<'info, Config>,
}

impl<'info> UpdateConfig<'info> {
    pub fn update_config(&mut self, args: UpdateConfigArgs) -> Result<()> {
        let authority = self.authority.key();
        let config = &mut self.config;

        config.apply_update(&authority, &args)?;

        msg!(
            "Config updated by {}: fee {} bps, heartbeat period {}s..{}s, interval {}s, paused: {}",
            authority,
            config.token_fee_bps,
            config.min_heartbeat_period,
            config.max_heartbeat_period,
            config.min_heartbeat_interval,
            config.paused
        );

        emit!(ConfigUpdated {
            authority,
            token_fee_bps: config.token_fee_bps,
            min_heartbeat_period: config.min_heartbeat_period,
            max_heartbeat_period: config.max_heartbeat_period,
            min_heartbeat_interval: config.min_heartbeat_interval,
            paused: config.paused,
            unix_timestamp: Clock::get()?.unix_timestamp,
        });

        Ok(())
    }
}
