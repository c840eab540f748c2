use crate::{constants::*, events::SolDeposited, state::*, utils::check_rent_floor};
use anchor_lang::{
    prelude::*,
    system_program::{transfer, Transfer},
};

#[derive(Accounts)]
pub struct DepositSol<'info> {
    /// Testator funding the vault
    #[account(mut)]
    pub testator: Signer<'info>,

    /// Config for the pause flag
    #[account(
        seeds = [CONFIG_SEED.as_bytes()],
        bump = config.bump
    )]
    pub config: Account<'info, Config>,

    /// Will receiving the deposit, must belong to the signer
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

    /// SOL escrow for this will
    #[account(
        mut,
        seeds = [VAULT_SEED.as_bytes(), will.key().as_ref()],
        bump = will.vault_bump
    )]
    pub vault: SystemAccount<'info>,

    pub system_program: Program<'info, System>,
}

impl<'info> DepositSol<'info> {
    pub fn deposit_sol(&mut self, amount: u64) -> Result<()> {
        let now = Clock::get()?.unix_timestamp;
        let testator = self.testator.key();

        self.will.deposit(&self.config, &testator, amount, now)?;

        check_rent_floor(
            self.vault.lamports(),
            amount,
            Rent::get()?.minimum_balance(0),
        )?;

        let ctx = CpiContext::new(
            self.system_program.to_account_info(),
            Transfer {
                from: self.testator.to_account_info(),
                to: self.vault.to_account_info(),
            },
        );
        transfer(ctx, amount)?;

        msg!(
            "Testator {} deposited {} SOL into will {} (total: {} SOL)",
            testator,
            amount as f64 / LAMPORTS_PER_SOL as f64,
            self.will.key(),
            self.will.deposited_lamports as f64 / LAMPORTS_PER_SOL as f64
        );

        emit!(SolDeposited {
            will: self.will.key(),
            testator,
            amount,
            deposited_lamports: self.will.deposited_lamports,
            status: self.will.status,
            unix_timestamp: now,
        });

        Ok(())
    }
}
