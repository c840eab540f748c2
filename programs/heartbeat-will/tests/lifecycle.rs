use anchor_lang::prelude::*;
use heartbeat_will::{constants::*, error::AppError, pda::*, state::*, utils::split_fee};

const GENESIS: i64 = 1_700_000_000;
const NINETY_DAYS: u32 = 7_776_000;

fn assert_err<T: std::fmt::Debug>(result: Result<T>, expected: AppError) {
    let expected_name = expected.name();
    let expected_code = u32::from(expected);
    match result {
        Err(anchor_lang::error::Error::AnchorError(err)) => {
            assert_eq!(
                err.error_code_number, expected_code,
                "expected {}, got {}",
                expected_name, err.error_name
            );
        }
        other => panic!("expected {}, got {:?}", expected_name, other),
    }
}

/// In-memory ledger: one config, lamport balances per address.
struct Ledger {
    authority: Pubkey,
    config: Config,
    fee_vault: Pubkey,
    balances: std::collections::HashMap<Pubkey, u64>,
}

impl Ledger {
    fn new(token_fee_bps: u16) -> Self {
        let authority = Pubkey::new_unique();
        let (fee_vault, _) = find_fee_vault_address();
        let mut config = Config::default();
        config
            .initialize(
                authority,
                fee_vault,
                ConfigParams {
                    token_fee_bps,
                    nft_fee_lamports: 0,
                    min_heartbeat_period: SECONDS_PER_DAY,
                    max_heartbeat_period: 365 * SECONDS_PER_DAY,
                    min_heartbeat_interval: SECONDS_PER_HOUR,
                },
            )
            .unwrap();
        Self {
            authority,
            config,
            fee_vault,
            balances: Default::default(),
        }
    }

    fn balance(&self, key: &Pubkey) -> u64 {
        self.balances.get(key).copied().unwrap_or(0)
    }

    fn move_lamports(&mut self, from: &Pubkey, to: &Pubkey, amount: u64) {
        let from_balance = self.balance(from);
        assert!(from_balance >= amount, "insufficient lamports");
        self.balances.insert(*from, from_balance - amount);
        *self.balances.entry(*to).or_default() += amount;
    }

    fn create_will(&self, will: &mut Will, testator: Pubkey, beneficiary: Pubkey, now: i64) -> Result<()> {
        will.create(&self.config, testator, beneficiary, NINETY_DAYS, now)?;
        let (will_key, _) = find_will_address(&testator, &beneficiary);
        will.vault = find_vault_address(&will_key).0;
        Ok(())
    }

    fn deposit(&mut self, will: &mut Will, caller: Pubkey, amount: u64, now: i64) -> Result<()> {
        will.deposit(&self.config, &caller, amount, now)?;
        self.move_lamports(&caller, &will.vault, amount);
        Ok(())
    }

    fn withdraw(&mut self, will: &mut Will, caller: Pubkey) -> Result<()> {
        let amount = self.balance(&will.vault);
        will.withdraw(&caller)?;
        self.move_lamports(&will.vault, &caller, amount);
        Ok(())
    }

    fn claim(&mut self, will: &mut Will, caller: Pubkey) -> Result<()> {
        let (fee, net) = will.claim(&self.config, &caller, self.balance(&will.vault))?;
        let fee_vault = self.fee_vault;
        self.move_lamports(&will.vault, &fee_vault, fee);
        self.move_lamports(&will.vault, &caller, net);
        Ok(())
    }
}

#[test]
fn test_ninety_day_will_scenario() {
    let mut ledger = Ledger::new(DEFAULT_TOKEN_FEE_BPS);
    let testator = Pubkey::new_unique();
    let beneficiary = Pubkey::new_unique();
    ledger.balances.insert(testator, 5 * LAMPORTS_PER_SOL);

    let mut will = Will::default();
    ledger
        .create_will(&mut will, testator, beneficiary, GENESIS)
        .unwrap();
    assert_eq!(will.status, WillStatus::Created);

    ledger
        .deposit(&mut will, testator, LAMPORTS_PER_SOL, GENESIS)
        .unwrap();
    assert_eq!(will.status, WillStatus::Active);
    assert_eq!(ledger.balance(&will.vault), LAMPORTS_PER_SOL);

    // heartbeat before the minimum interval is throttled
    assert_err(
        will.heartbeat(&ledger.config, &testator, GENESIS + 60),
        AppError::HeartbeatPeriodTooShort,
    );

    let later = GENESIS + SECONDS_PER_HOUR as i64;
    will.heartbeat(&ledger.config, &testator, later).unwrap();
    assert_eq!(will.last_heartbeat, later);
    assert_eq!(will.expires_at().unwrap(), later + NINETY_DAYS as i64);
}

#[test]
fn test_missed_heartbeat_pays_beneficiary_minus_fee() {
    let mut ledger = Ledger::new(250);
    let testator = Pubkey::new_unique();
    let beneficiary = Pubkey::new_unique();
    ledger.balances.insert(testator, 1_000_000);

    let mut will = Will::default();
    ledger
        .create_will(&mut will, testator, beneficiary, GENESIS)
        .unwrap();
    ledger
        .deposit(&mut will, testator, 600_000, GENESIS)
        .unwrap();
    ledger
        .deposit(&mut will, testator, 400_000, GENESIS + 10)
        .unwrap();
    assert_eq!(will.deposited_lamports, 1_000_000);
    assert_eq!(ledger.balance(&will.vault), 1_000_000);

    // the beneficiary cannot claim before the will is triggered
    assert_err(ledger.claim(&mut will, beneficiary), AppError::InvalidWillStatus);

    let deadline = will.expires_at().unwrap();
    assert_err(will.trigger(&ledger.config, deadline), AppError::WillNotExpired);

    // triggering takes no caller at all, only the clock
    will.trigger(&ledger.config, deadline + 1).unwrap();
    assert_eq!(will.status, WillStatus::Triggered);
    assert_eq!(will.trigger_at, Some(deadline + 1));

    // testator can no longer cancel
    assert_err(ledger.withdraw(&mut will, testator), AppError::InvalidWillStatus);
    assert_err(ledger.claim(&mut will, testator), AppError::Unauthorized);

    ledger.claim(&mut will, beneficiary).unwrap();
    assert_eq!(will.status, WillStatus::Claimed);
    assert_eq!(ledger.balance(&will.vault), 0);
    assert_eq!(ledger.balance(&ledger.fee_vault), 25_000);
    assert_eq!(ledger.balance(&beneficiary), 975_000);

    assert_err(ledger.claim(&mut will, beneficiary), AppError::InvalidWillStatus);
    assert_eq!(ledger.balance(&beneficiary), 975_000);
}

#[test]
fn test_withdraw_returns_everything_and_ends_the_will() {
    let mut ledger = Ledger::new(250);
    let testator = Pubkey::new_unique();
    let beneficiary = Pubkey::new_unique();
    ledger.balances.insert(testator, 3 * LAMPORTS_PER_SOL);

    let mut will = Will::default();
    ledger
        .create_will(&mut will, testator, beneficiary, GENESIS)
        .unwrap();
    ledger
        .deposit(&mut will, testator, 2 * LAMPORTS_PER_SOL, GENESIS)
        .unwrap();

    assert_err(ledger.withdraw(&mut will, beneficiary), AppError::Unauthorized);

    ledger.withdraw(&mut will, testator).unwrap();
    assert_eq!(will.status, WillStatus::Withdrawn);
    assert_eq!(ledger.balance(&will.vault), 0);
    assert_eq!(ledger.balance(&testator), 3 * LAMPORTS_PER_SOL);
    assert_eq!(ledger.balance(&ledger.fee_vault), 0);

    let much_later = GENESIS + 10 * NINETY_DAYS as i64;
    assert_err(will.trigger(&ledger.config, much_later), AppError::InvalidWillStatus);
    assert_err(ledger.claim(&mut will, beneficiary), AppError::InvalidWillStatus);
    assert_err(
        ledger.deposit(&mut will, testator, 1, much_later),
        AppError::InvalidWillStatus,
    );
}

#[test]
fn test_pause_blocks_everything_but_withdraw_and_config() {
    let mut ledger = Ledger::new(250);
    let testator = Pubkey::new_unique();
    let beneficiary = Pubkey::new_unique();
    ledger.balances.insert(testator, LAMPORTS_PER_SOL);

    let mut will = Will::default();
    ledger
        .create_will(&mut will, testator, beneficiary, GENESIS)
        .unwrap();
    ledger.deposit(&mut will, testator, 1_000, GENESIS).unwrap();

    let authority = ledger.authority;
    ledger
        .config
        .apply_update(
            &authority,
            &UpdateConfigArgs {
                paused: Some(true),
                ..Default::default()
            },
        )
        .unwrap();

    let expired = will.expires_at().unwrap() + 1;
    assert_err(
        will.heartbeat(&ledger.config, &testator, expired),
        AppError::Paused,
    );
    assert_err(will.trigger(&ledger.config, expired), AppError::Paused);
    assert_err(
        ledger.deposit(&mut will, testator, 1_000, expired),
        AppError::Paused,
    );

    let mut second = Will::default();
    assert_err(
        ledger.create_will(&mut second, testator, Pubkey::new_unique(), expired),
        AppError::Paused,
    );

    ledger.withdraw(&mut will, testator).unwrap();
    assert_eq!(will.status, WillStatus::Withdrawn);
    assert_eq!(ledger.balance(&testator), LAMPORTS_PER_SOL);
}

#[test]
fn test_wills_are_independent() {
    let mut ledger = Ledger::new(0);
    let testator = Pubkey::new_unique();
    let alice = Pubkey::new_unique();
    let bob = Pubkey::new_unique();
    ledger.balances.insert(testator, LAMPORTS_PER_SOL);

    let mut to_alice = Will::default();
    let mut to_bob = Will::default();
    ledger
        .create_will(&mut to_alice, testator, alice, GENESIS)
        .unwrap();
    ledger
        .create_will(&mut to_bob, testator, bob, GENESIS)
        .unwrap();
    assert_ne!(to_alice.vault, to_bob.vault);

    ledger.deposit(&mut to_alice, testator, 300, GENESIS).unwrap();
    ledger.deposit(&mut to_bob, testator, 700, GENESIS).unwrap();

    let expired = to_alice.expires_at().unwrap() + 1;
    to_alice.trigger(&ledger.config, expired).unwrap();
    ledger.withdraw(&mut to_bob, testator).unwrap();
    ledger.claim(&mut to_alice, alice).unwrap();

    assert_eq!(ledger.balance(&alice), 300);
    assert_eq!(ledger.balance(&bob), 0);
    assert_eq!(ledger.balance(&testator), LAMPORTS_PER_SOL - 300);
    assert_eq!(split_fee(300, ledger.config.token_fee_bps).unwrap(), (0, 300));
}
