use anchor_lang::prelude::*;

#[error_code]
pub enum AppError {
    // Authorization errors
    #[msg("Signer is not allowed to perform this operation")]
    Unauthorized,

    // Validation errors
    #[msg("Amount must be greater than zero")]
    InvalidAmount,
    #[msg("Beneficiary must differ from testator")]
    InvalidBeneficiary,
    #[msg("Fee must be between 0 and 10000 basis points")]
    InvalidFeeBps,
    #[msg("Deposit would leave the vault below the rent-exempt minimum")]
    DepositBelowRentExemption,

    // Will status errors
    #[msg("Invalid will status for this operation")]
    InvalidWillStatus,
    #[msg("Will has not expired yet")]
    WillNotExpired,

    // Heartbeat errors
    #[msg("Heartbeat period is too short")]
    HeartbeatPeriodTooShort,
    #[msg("Heartbeat period is too long")]
    HeartbeatPeriodTooLong,

    // Configuration errors
    #[msg("Minimum heartbeat period must be greater than zero")]
    InvalidMinimumHeartbeatPeriod,
    #[msg("Maximum heartbeat period must be greater than minimum heartbeat period")]
    InvalidMaximumHeartbeatPeriod,
    #[msg("Minimum heartbeat interval must be greater than zero")]
    InvalidMinimumHeartbeatInterval,

    // Account lifecycle errors
    #[msg("Config is already initialized")]
    AlreadyInitialized,
    #[msg("Will already exists for this testator and beneficiary")]
    AlreadyExists,

    // Protocol errors
    #[msg("Program is paused")]
    Paused,

    // Math errors
    #[msg("Arithmetic overflow")]
    Overflow,
    #[msg("Arithmetic underflow")]
    Underflow,
}

#[cfg(test)]
pub(crate) fn assert_app_error<T: std::fmt::Debug>(result: Result<T>, expected: AppError) {
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
