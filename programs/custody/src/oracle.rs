//! Balance Oracle
//!
//! Read-side helpers for clients and tests. A token account that has never
//! been created has a balance of zero; that case is handled explicitly
//! here rather than by ignoring lookup errors.
//!
//! ```ignore
//! let data = banks_client.get_account(ata).await?.map(|a| a.data);
//! let amount = oracle::balance_of(data.as_deref())?;
//! let ui = TokenAmount::new(amount, mint.decimals).ui_amount();
//! ```

use crate::state::{Pack, TokenAccount};
use solana_program::program_error::ProgramError;

/// Balance of a token account given its data, or `None` if it doesn't exist.
///
/// # Errors
///
/// `InvalidAccountData` if the data is present but is not a token account.
pub fn balance_of(data: Option<&[u8]>) -> Result<u64, ProgramError> {
    match data {
        None => Ok(0),
        Some(data) if data.is_empty() => Ok(0),
        Some(data) => Ok(TokenAccount::unpack_from_slice(data)?.amount),
    }
}

/// A base-unit amount together with its mint's decimals.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TokenAmount {
    pub amount: u64,
    pub decimals: u8,
}

impl TokenAmount {
    pub fn new(amount: u64, decimals: u8) -> Self {
        Self { amount, decimals }
    }

    /// Human-readable amount: `amount / 10^decimals`.
    pub fn ui_amount(&self) -> f64 {
        self.amount as f64 / 10f64.powi(i32::from(self.decimals))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::AccountState;
    use solana_program::pubkey::Pubkey;

    #[test]
    fn test_absent_account_is_zero() {
        assert_eq!(balance_of(None).unwrap(), 0);
        assert_eq!(balance_of(Some(&[])).unwrap(), 0);
    }

    #[test]
    fn test_present_account_reads_amount() {
        let account = TokenAccount {
            mint: Pubkey::new_unique(),
            owner: Pubkey::new_unique(),
            amount: 5_000_000_000,
            state: AccountState::Initialized,
        };
        let mut buf = [0u8; TokenAccount::LEN];
        account.pack_into_slice(&mut buf).unwrap();

        assert_eq!(balance_of(Some(&buf)).unwrap(), 5_000_000_000);
    }

    #[test]
    fn test_corrupt_account_is_an_error() {
        assert!(balance_of(Some(&[1, 2, 3])).is_err());
    }

    #[test]
    fn test_ui_amount() {
        assert_eq!(TokenAmount::new(10_000_000_000, 9).ui_amount(), 10.0);
        assert_eq!(TokenAmount::new(5_000_000_000, 9).ui_amount(), 5.0);
        assert_eq!(TokenAmount::new(1, 0).ui_amount(), 1.0);
        assert_eq!(TokenAmount::new(0, 9).ui_amount(), 0.0);
    }
}
