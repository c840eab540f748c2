pub mod constants;
pub mod error;
pub mod events;
pub mod instructions;
pub mod pda;
pub mod state;
pub mod utils;

use anchor_lang::prelude::*;

pub use constants::*;
pub use instructions::*;
pub use state::*;

declare_id!("6JC1Q9RAsixWdvYrMbPQGyJywbs6HWDijn2C77p4syUs");

#[program]
pub mod heartbeat_will {
    use super::*;

    pub fn initialize(
        ctx: Context<Initialize>,
        token_fee_bps: u16,
        nft_fee_lamports: u64,
        min_heartbeat_period: u32,
        max_heartbeat_period: u32,
        min_heartbeat_interval: u32,
    ) -> Result<()> {
        ctx.accounts.initialize(
            ConfigParams {
                token_fee_bps,
                nft_fee_lamports,
                min_heartbeat_period,
                max_heartbeat_period,
                min_heartbeat_interval,
            },
            &ctx.bumps,
        )
    }

    pub fn update_config(ctx: Context<UpdateConfig>, args: UpdateConfigArgs) -> Result<()> {
        ctx.accounts.update_config(args)
    }

    pub fn create_will(
        ctx: Context<CreateWill>,
        beneficiary: Pubkey,
        heartbeat_period: u32,
    ) -> Result<()> {
        ctx.accounts
            .create_will(beneficiary, heartbeat_period, &ctx.bumps)
    }

    pub fn deposit_sol(ctx: Context<DepositSol>, amount: u64) -> Result<()> {
        ctx.accounts.deposit_sol(amount)
    }

    pub fn send_heartbeat(ctx: Context<SendHeartbeat>) -> Result<()> {
        ctx.accounts.send_heartbeat()
    }

    pub fn trigger_will(ctx: Context<TriggerWill>) -> Result<()> {
        ctx.accounts.trigger_will()
    }

    pub fn withdraw_sol(ctx: Context<WithdrawSol>) -> Result<()> {
        ctx.accounts.withdraw_sol()
    }

    pub fn claim_sol(ctx: Context<ClaimSol>) -> Result<()> {
        ctx.accounts.claim_sol()
    }

    pub fn check_will(ctx: Context<CheckWill>) -> Result<WillSummary> {
        ctx.accounts.check_will()
    }
}
