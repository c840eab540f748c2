use crate::{constants::*, events::SolClaimed, state::*};
use anchor_lang::{
    prelude::*,
    system_program::{transfer, Transfer},
};

#[derive(Accounts)]
pub struct ClaimSol<'info> {
    /// Beneficiary receiving the vault balance minus fee
    #[account(mut)]
    pub beneficiary: Signer<'info>,

    /// Config for the fee rate and the pause flag
    #[account(
        seeds = [CONFIG_SEED.as_bytes()],
        bump = config.bump
    )]
    pub config: Account<'info, Config>,

    /// Triggered will, beneficiary must match
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

    /// Fee vault PDA recorded in config
    #[account(
        mut,
        seeds = [FEE_VAULT_SEED.as_bytes()],
        bump = config.fee_vault_bump,
        address = config.fee_vault
    )]
    pub fee_vault: SystemAccount<'info>,

    pub system_program: Program<'info, System>,
}

impl<'info> ClaimSol<'info> {
    pub fn claim_sol(&mut self) -> Result<()> {
        let beneficiary = self.beneficiary.key();
        let vault_balance = self.vault.lamports();

        let (fee, net) = self.will.claim(&self.config, &beneficiary, vault_balance)?;

        self.transfer_from_vault(self.fee_vault.to_account_info(), fee)?;
        self.transfer_from_vault(self.beneficiary.to_account_info(), net)?;

        let now = Clock::get()?.unix_timestamp;

        msg!(
            "Beneficiary {} claimed {} SOL from will {} | fee: {} SOL ({} bps)",
            beneficiary,
            net as f64 / LAMPORTS_PER_SOL as f64,
            self.will.key(),
            fee as f64 / LAMPORTS_PER_SOL as f64,
            self.config.token_fee_bps
        );

        emit!(SolClaimed {
            will: self.will.key(),
            beneficiary,
            amount: net,
            fee,
            fee_vault: self.fee_vault.key(),
            unix_timestamp: now,
        });

        Ok(())
    }

    fn transfer_from_vault(&self, to: AccountInfo<'info>, amount: u64) -> Result<()> {
        if amount == 0 {
            return Ok(());
        }

        let will_key = self.will.key();
        let signer_seeds: &[&[&[u8]]] = &[&[
            VAULT_SEED.as_bytes(),
            will_key.as_ref(),
            &[self.will.vault_bump],
        ]];

        let ctx = CpiContext::new_with_signer(
            self.system_program.to_account_info(),
            Transfer {
                from: self.vault.to_account_info(),
                to,
            },
            signer_seeds,
        );
        transfer(ctx, amount)
    }
}
