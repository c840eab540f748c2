use crate::{constants::*, events::WillCreated, state::*};
use anchor_lang::prelude::*;

#[derive(Accounts)]
#[instruction(beneficiary: Pubkey)]
pub struct CreateWill<'info> {
    /// Testator creating and paying for the will
    #[account(mut)]
    pub testator: Signer<'info>,

    /// Config for heartbeat bounds and the pause flag
    #[account(
        seeds = [CONFIG_SEED.as_bytes()],
        bump = config.bump
    )]
    pub config: Account<'info, Config>,

    /// Will account for (testator, beneficiary)
    // init_if_needed so a duplicate surfaces as AlreadyExists instead of a
    // system program allocation failure
    #[account(
        init_if_needed,
        payer = testator,
        space = 8 + Will::INIT_SPACE,
        seeds = [
            WILL_SEED.as_bytes(),
            testator.key().as_ref(),
            beneficiary.as_ref(),
        ],
        bump
    )]
    pub will: Account<'info, Will>,

    /// SOL escrow for this will
    #[account(
        seeds = [VAULT_SEED.as_bytes(), will.key().as_ref()],
        bump
    )]
    pub vault: SystemAccount<'info>,

    pub system_program: Program<'info, System>,
}

impl<'info> CreateWill<'info> {
    pub fn create_will(
        &mut self,
        beneficiary: Pubkey,
        heartbeat_period: u32,
        bumps: &CreateWillBumps,
    ) -> Result<()> {
        let now = Clock::get()?.unix_timestamp;
        let testator = self.testator.key();
        let will_key = self.will.key();
        let vault = self.vault.key();

        let will = &mut self.will;
        will.create(&self.config, testator, beneficiary, heartbeat_period, now)?;
        will.vault = vault;
        will.bump = bumps.will;
        will.vault_bump = bumps.vault;

        msg!(
            "Will {} created: testator {} -> beneficiary {}, heartbeat period {}s",
            will_key,
            testator,
            beneficiary,
            heartbeat_period
        );

        emit!(WillCreated {
            will: will_key,
            testator,
            beneficiary,
            vault,
            heartbeat_period,
            created_at: now,
        });

        Ok(())
    }
}
