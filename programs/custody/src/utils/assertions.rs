//! Assertion Helper Functions
//!
//! Common validation checks used across all processors.
//!
//! # Usage Pattern
//!
//! ```ignore
//! pub fn process(...) -> ProgramResult {
//!     // Validate everything first
//!     assert_owned_by(account, program_id)?;
//!     assert_writable(account)?;
//!     assert_data_length(account, TokenAccount::LEN)?;
//!
//!     // Then do the actual work
//!     ...
//! }
//! ```

use crate::error::CustodyError;
use num_traits::{CheckedAdd, CheckedSub};
use solana_program::{
    account_info::AccountInfo, entrypoint::ProgramResult, program_error::ProgramError,
    pubkey::Pubkey,
};

// =============================================================================
// OWNERSHIP CHECKS
// =============================================================================

/// Assert that an account is owned by the expected program.
///
/// # Errors
///
/// Returns `InvalidAccountOwner` if the owner doesn't match.
pub fn assert_owned_by(account: &AccountInfo, owner: &Pubkey) -> ProgramResult {
    if account.owner != owner {
        Err(CustodyError::InvalidAccountOwner.into())
    } else {
        Ok(())
    }
}

// =============================================================================
// SIGNER CHECKS
// =============================================================================

/// Assert that an account is a signer of the transaction.
///
/// # Errors
///
/// Returns `MissingRequiredSignature` if not a signer.
pub fn assert_signer(account: &AccountInfo) -> ProgramResult {
    if !account.is_signer {
        Err(ProgramError::MissingRequiredSignature)
    } else {
        Ok(())
    }
}

// =============================================================================
// WRITABLE CHECKS
// =============================================================================

/// Assert that an account is writable.
///
/// The runtime would reject the write anyway; this fails earlier with a
/// clearer error.
pub fn assert_writable(account: &AccountInfo) -> ProgramResult {
    if !account.is_writable {
        Err(ProgramError::InvalidAccountData)
    } else {
        Ok(())
    }
}

// =============================================================================
// SIZE CHECKS
// =============================================================================

/// Assert that an account has the expected data length.
pub fn assert_data_length(account: &AccountInfo, expected: usize) -> ProgramResult {
    if account.data_len() != expected {
        Err(CustodyError::InvalidAccountDataLength.into())
    } else {
        Ok(())
    }
}

// =============================================================================
// PROGRAM ID CHECKS
// =============================================================================

/// Assert that an account is the expected program (system, metadata, ...).
pub fn assert_program_id(account: &AccountInfo, expected: &Pubkey) -> ProgramResult {
    if account.key != expected {
        Err(ProgramError::IncorrectProgramId)
    } else {
        Ok(())
    }
}

// =============================================================================
// CHECKED ARITHMETIC
// =============================================================================

/// Checked addition that returns `Overflow` instead of wrapping.
///
/// ```ignore
/// mint.supply = checked_add(mint.supply, amount)?;
/// ```
pub fn checked_add<T: CheckedAdd>(a: T, b: T) -> Result<T, CustodyError> {
    a.checked_add(&b).ok_or(CustodyError::Overflow)
}

/// Checked subtraction that returns `InsufficientFunds` instead of wrapping.
///
/// ```ignore
/// source.amount = checked_sub(source.amount, amount)?;
/// ```
pub fn checked_sub<T: CheckedSub>(a: T, b: T) -> Result<T, CustodyError> {
    a.checked_sub(&b).ok_or(CustodyError::InsufficientFunds)
}

// =============================================================================
// UNIT TESTS
// =============================================================================
