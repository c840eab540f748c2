use crate::{constants::*, events::SolWithdrawn, state::*};
use anchor_lang::{
    prelude::*,
    system_program::{transfer, Transfer},
};

/// Testator cancellation. Takes no config so it keeps working while the
/// program is paused.
#[derive(Accounts)]
pub struct WithdrawSol<'info> {
    /// Testator receiving the vault balance
    #[account(mut)]
    pub testator: Signer<'info>,

    /// Will to cancel, must not be triggered yet
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

    /// SOL escrow (source)
    #[account(
        mut,
        seeds = [VAULT_SEED.as_bytes(), will.key().as_ref()],
        bump = will.vault_bump
    )]
    pub vault: SystemAccount<'info>,

    pub system_program: Program<'info, System>,
}

impl<'info> WithdrawSol<'info> {
    pub fn withdraw_sol(&mut self) -> Result<()> {
        let testator = self.testator.key();
        let amount = self.vault.lamports();

        self.will.withdraw(&testator)?;

        if amount > 0 {
            let will_key = self.will.key();
            let vault_bump = self.will.vault_bump;
            let signer_seeds: &[&[&[u8]]] =
                &[&[VAULT_SEED.as_bytes(), will_key.as_ref(), &[vault_bump]]];

            let ctx = CpiContext::new_with_signer(
                self.system_program.to_account_info(),
                Transfer {
                    from: self.vault.to_account_info(),
                    to: self.testator.to_account_info(),
                },
                signer_seeds,
            );
            transfer(ctx, amount)?;
        }

        let now = Clock::get()?.unix_timestamp;

        msg!(
            "Testator {} withdrew {} SOL from will {}",
            testator,
            amount as f64 / LAMPORTS_PER_SOL as f64,
            self.will.key()
        );

        emit!(SolWithdrawn {
            will: self.will.key(),
            testator,
            amount,
            unix_timestamp: now,
        });

        Ok(())
    }
}
