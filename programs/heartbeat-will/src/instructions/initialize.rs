use crate::{constants::*, events::ConfigInitialized, state::*, utils::rent_shortfall};
use anchor_lang::{
    prelude::*,
    system_program::{transfer, Transfer},
};

#[derive(Accounts)]
pub struct Initialize<'info> {
    /// Becomes the config authority and pays for both accounts
    #[account(mut)]
    pub authority: Signer<'info>,

    /// Program config, created once
    // init_if_needed so a repeated call reaches the AlreadyInitialized check
    #[account(
        init_if_needed,
        payer = authority,
        space = 8 + Config::INIT_SPACE,
        seeds = [CONFIG_SEED.as_bytes()],
        bump
    )]
    pub config: Account<'info, Config>,

    /// Fee vault PDA, system-owned
    #[account(
        mut,
        seeds = [FEE_VAULT_SEED.as_bytes()],
        bump
    )]
    pub fee_vault: SystemAccount<'info>,

    pub system_program: Program<'info, System>,
}

impl<'info> Initialize<'info> {
    pub fn initialize(&mut self, params: ConfigParams, bumps: &InitializeBumps) -> Result<()> {
        let authority = self.authority.key();
        let fee_vault = self.fee_vault.key();

        let config = &mut self.config;
        config.initialize(authority, fee_vault, params)?;
        config.bump = bumps.config;
        config.fee_vault_bump = bumps.fee_vault;

        self.fund_fee_vault()?;

        msg!(
            "Config initialized by authority: {} (fee: {} bps, heartbeat period: {}s..{}s, interval: {}s)",
            authority,
            params.token_fee_bps,
            params.min_heartbeat_period,
            params.max_heartbeat_period,
            params.min_heartbeat_interval
        );
        msg!("Fee vault: {}", fee_vault);

        emit!(ConfigInitialized {
            authority,
            fee_vault,
            token_fee_bps: params.token_fee_bps,
            min_heartbeat_period: params.min_heartbeat_period,
            max_heartbeat_period: params.max_heartbeat_period,
            min_heartbeat_interval: params.min_heartbeat_interval,
        });

        Ok(())
    }

    /// Tops the fee vault up to the rent-exempt minimum so fee transfers of
    /// any size land on a live account.
    fn fund_fee_vault(&self) -> Result<()> {
        let rent_floor = Rent::get()?.minimum_balance(0);
        let shortfall = rent_shortfall(self.fee_vault.lamports(), rent_floor);
        if shortfall == 0 {
            return Ok(());
        }

        let ctx = CpiContext::new(
            self.system_program.to_account_info(),
            Transfer {
                from: self.authority.to_account_info(),
                to: self.fee_vault.to_account_info(),
            },
        );
        transfer(ctx, shortfall)?;

        msg!("Fee vault funded with {} lamports for rent exemption", shortfall);

        Ok(())
    }
}
