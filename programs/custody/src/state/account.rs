//! Token Account State
//!
//! A token account holds the custody token for one owner. The owner is
//! either a wallet or the vault PDA.
//!
//! Token accounts are always associated accounts: their address is derived
//! from `[owner, program_id, mint]`, so each owner has exactly one, and
//! processors create them lazily on first use.
//!
//! # Size: 73 bytes

use crate::error::CustodyError;
use crate::state::Pack;
use arrayref::{array_mut_ref, array_ref, array_refs, mut_array_refs};
use solana_program::{program_error::ProgramError, pubkey::Pubkey};

// =============================================================================
// ACCOUNT STATE ENUM
// =============================================================================

/// The lifecycle state of a token account.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AccountState {
    /// Freshly allocated, all zeros.
    #[default]
    Uninitialized,

    /// Bound to a mint and an owner.
    Initialized,
}

impl AccountState {
    pub fn from_u8(value: u8) -> Result<Self, ProgramError> {
        match value {
            0 => Ok(AccountState::Uninitialized),
            1 => Ok(AccountState::Initialized),
            _ => Err(CustodyError::InvalidInstruction.into()),
        }
    }

    pub fn to_u8(self) -> u8 {
        match self {
            AccountState::Uninitialized => 0,
            AccountState::Initialized => 1,
        }
    }
}

// =============================================================================
// TOKEN ACCOUNT STRUCTURE
// =============================================================================

/// Token account data structure.
///
/// # Memory Layout (73 bytes total)
///
/// ```text
/// ┌────────┬──────┬────────┬──────────────┐
/// │ Offset │ Size │ Field  │ Type         │
/// ├────────┼──────┼────────┼──────────────┤
/// │ 0      │ 32   │ mint   │ Pubkey       │
/// │ 32     │ 32   │ owner  │ Pubkey       │
/// │ 64     │ 8    │ amount │ u64          │
/// │ 72     │ 1    │ state  │ AccountState │
/// └────────┴──────┴────────┴──────────────┘
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TokenAccount {
    /// The mint this account holds.
    pub mint: Pubkey,

    /// Who may move the balance out.
    ///
    /// For a wallet this is checked against a transaction signature; for
    /// the vault it is checked against the program's own re-derivation.
    pub owner: Pubkey,

    /// Balance in base units. Unsigned, so never negative.
    pub amount: u64,

    pub state: AccountState,
}

impl TokenAccount {
    pub fn is_initialized(&self) -> bool {
        self.state != AccountState::Uninitialized
    }
}

// =============================================================================
// PACK TRAIT IMPLEMENTATION
// =============================================================================

impl Pack for TokenAccount {
    const LEN: usize = 73;

    fn unpack(input: &[u8]) -> Result<Self, ProgramError> {
        let input = array_ref![input, 0, TokenAccount::LEN];
        #[allow(clippy::ptr_offset_with_cast)]
        let (mint, owner, amount, state) = array_refs![input, 32, 32, 8, 1];

        Ok(TokenAccount {
            mint: Pubkey::new_from_array(*mint),
            owner: Pubkey::new_from_array(*owner),
            amount: u64::from_le_bytes(*amount),
            state: AccountState::from_u8(state[0])?,
        })
    }

    fn pack(&self, output: &mut [u8]) -> Result<(), ProgramError> {
        let output = array_mut_ref![output, 0, TokenAccount::LEN];
        #[allow(clippy::ptr_offset_with_cast)]
        let (mint_dst, owner_dst, amount_dst, state_dst) =
            mut_array_refs![output, 32, 32, 8, 1];

        mint_dst.copy_from_slice(self.mint.as_ref());
        owner_dst.copy_from_slice(self.owner.as_ref());
        *amount_dst = self.amount.to_le_bytes();
        state_dst[0] = self.state.to_u8();

        Ok(())
    }
}

// =============================================================================
// UNIT TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_account_pack_unpack_roundtrip() {
        let account = TokenAccount {
            mint: Pubkey::new_unique(),
            owner: Pubkey::new_unique(),
            amount: 5_000_000_000,
            state: AccountState::Initialized,
        };

        let mut buf = [0u8; TokenAccount::LEN];
        account.pack_into_slice(&mut buf).unwrap();
        let unpacked = TokenAccount::unpack_from_slice(&buf).unwrap();

        assert_eq!(unpacked, account);
        assert!(unpacked.is_initialized());
    }

    #[test]
    fn test_account_uninitialized() {
        let account = TokenAccount::unpack_from_slice(&[0u8; TokenAccount::LEN]).unwrap();
        assert!(!account.is_initialized());
        assert_eq!(account.amount, 0);
    }

    #[test]
    fn test_account_invalid_state_byte() {
        let mut buf = [0u8; TokenAccount::LEN];
        buf[72] = 2;
        assert!(TokenAccount::unpack_from_slice(&buf).is_err());
    }

    #[test]
    fn test_account_state_conversion() {
        assert_eq!(AccountState::from_u8(0).unwrap(), AccountState::Uninitialized);
        assert_eq!(AccountState::from_u8(1).unwrap(), AccountState::Initialized);
        assert_eq!(AccountState::Initialized.to_u8(), 1);
    }
}
