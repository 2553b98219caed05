//! Custom Error Types
//!
//! Every error the custody program can return, each with a stable numeric
//! code that clients can match against.
//!
//! # Error Code Ranges
//!
//! | Range | Category |
//! |-------|----------|
//! | 0-3 | Account validation errors |
//! | 4 | Authority errors |
//! | 5-8 | Operation errors |
//! | 9-12 | Derivation and custody errors |
//!
//! # Usage
//!
//! ```ignore
//! use crate::error::CustodyError;
//!
//! fn some_check() -> ProgramResult {
//!     if source.amount < amount {
//!         return Err(CustodyError::InsufficientFunds.into());
//!     }
//!     Ok(())
//! }
//! ```

use solana_program::program_error::ProgramError;
use thiserror::Error;

// =============================================================================
// ERROR ENUM
// =============================================================================

/// Errors that may be returned by the custody program.
///
/// The discriminant of each variant is its error code.
///
/// # Important
///
/// After deployment, NEVER reorder these variants!
/// Clients depend on stable error codes.
/// Always add new errors at the end.
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum CustodyError {
    // =========================================================================
    // ACCOUNT VALIDATION ERRORS (0-3)
    // =========================================================================

    /// Error 0: Account is not owned by the custody program.
    ///
    /// Mints, token accounts and the vault record are all owned by this
    /// program. Anything else is a forged account.
    #[error("Account not owned by custody program")]
    InvalidAccountOwner,

    /// Error 1: Account data has wrong length.
    #[error("Invalid account data length")]
    InvalidAccountDataLength,

    /// Error 2: Account is already initialized.
    ///
    /// Raised by the state transitions themselves. The InitToken processor
    /// checks for an existing mint first and treats it as a no-op, so
    /// callers of that instruction never see this for the mint.
    #[error("Account already initialized")]
    AlreadyInitialized,

    /// Error 3: Account is not initialized.
    #[error("Account not initialized")]
    UninitializedAccount,

    // =========================================================================
    // AUTHORITY ERRORS (4)
    // =========================================================================

    /// Error 4: The authority does not match the required owner.
    ///
    /// Covers both transfer flavours:
    /// - a wallet signed, but it does not own the source account
    /// - the account passed as the vault (or mint) is not the address the
    ///   program re-derives from its seed
    #[error("Authority mismatch")]
    AuthorityMismatch,

    // =========================================================================
    // OPERATION ERRORS (5-8)
    // =========================================================================

    /// Error 5: Insufficient funds.
    ///
    /// The source balance is smaller than the transfer amount.
    /// Nothing is modified.
    #[error("Insufficient funds")]
    InsufficientFunds,

    /// Error 6: Arithmetic overflow.
    ///
    /// Minting would push the supply or a balance above u64::MAX.
    #[error("Arithmetic overflow")]
    Overflow,

    /// Error 7: Mint mismatch.
    ///
    /// Both token accounts of a transfer (or the destination of a mint)
    /// must belong to the same mint.
    #[error("Mint mismatch")]
    MintMismatch,

    /// Error 8: Invalid instruction data.
    #[error("Invalid instruction")]
    InvalidInstruction,

    // =========================================================================
    // DERIVATION AND CUSTODY ERRORS (9-12)
    // =========================================================================

    /// Error 9: No bump in 255..=0 yields an off-curve address.
    ///
    /// A configuration error; it does not happen with the fixed seeds used
    /// by this program.
    #[error("Program address derivation exhausted")]
    DerivationExhausted,

    /// Error 10: An account is not at the address derived from its seeds.
    ///
    /// Raised for associated token accounts, the metadata record, and the
    /// mint handed to InitPda.
    #[error("Account does not match derived address")]
    InvalidSeeds,

    /// Error 11: Cannot transfer to self.
    #[error("Self transfer not allowed")]
    SelfTransfer,

    /// Error 12: The destination of a deposit is not the vault's token account.
    #[error("Destination is not the vault token account")]
    VaultMismatch,
}

// =============================================================================
// CONVERSION TO PROGRAMERROR
// =============================================================================

/// Convert CustodyError to ProgramError.
///
/// This is what lets processors use `?` on functions returning
/// `Result<_, CustodyError>`.
impl From<CustodyError> for ProgramError {
    fn from(e: CustodyError) -> Self {
        ProgramError::Custom(e as u32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(
            ProgramError::from(CustodyError::InvalidAccountOwner),
            ProgramError::Custom(0)
        );
        assert_eq!(
            ProgramError::from(CustodyError::AlreadyInitialized),
            ProgramError::Custom(2)
        );
        assert_eq!(
            ProgramError::from(CustodyError::InsufficientFunds),
            ProgramError::Custom(5)
        );
        assert_eq!(
            ProgramError::from(CustodyError::VaultMismatch),
            ProgramError::Custom(12)
        );
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            CustodyError::AuthorityMismatch.to_string(),
            "Authority mismatch"
        );
        assert_eq!(
            CustodyError::DerivationExhausted.to_string(),
            "Program address derivation exhausted"
        );
    }
}

/*
=============================================================================
DETAILED EXPLANATION
=============================================================================

HOW CLIENTS SEE ERRORS
======================

When a processor returns Err(CustodyError::InsufficientFunds.into()):

1. On-chain: Returns ProgramError::Custom(5)

2. In transaction logs:
   "Program failed with error: Custom(5)"

3. In tests (solana-program-test):
   TransactionError::InstructionError(0, InstructionError::Custom(5))

The whole transaction is rolled back, so a failed transfer never leaves a
half-applied balance change behind.

AUTHORITYMISMATCH VS VAULTMISMATCH
==================================

AuthorityMismatch: the tokens' owner did not authorize the move.
VaultMismatch: a deposit was authorized but aimed at a token account
other than the vault's.
*/
