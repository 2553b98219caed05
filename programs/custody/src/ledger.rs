//! Ledger Transitions
//!
//! The state changes behind every instruction, on unpacked values only.
//! Processors load accounts, call one of these, and pack the result back.
//!
//! Each function runs all of its checks before it writes anything, so an
//! `Err` always leaves the inputs exactly as they were.
//!
//! # Conservation
//!
//! ```text
//! transfer:  source.amount + dest.amount   is unchanged
//! mint_to:   mint.supply   - SUM(amounts)  is unchanged
//! ```

use crate::error::CustodyError;
use crate::state::{AccountState, COption, Mint, TokenAccount, Vault};
use crate::utils::{checked_add, checked_sub, ProgramAuthority, TransferAuthority};
use solana_program::pubkey::Pubkey;

// =============================================================================
// INITIALIZATION
// =============================================================================

/// Set up a fresh mint whose authority is the mint PDA itself.
pub fn initialize_mint(
    mint: &mut Mint,
    decimals: u8,
    authority: &ProgramAuthority,
) -> Result<(), CustodyError> {
    if mint.is_initialized {
        return Err(CustodyError::AlreadyInitialized);
    }

    mint.mint_authority = COption::some(*authority.key());
    mint.supply = 0;
    mint.decimals = decimals;
    mint.is_initialized = true;
    Ok(())
}

/// Bind a fresh token account to `mint` and `owner` with a zero balance.
pub fn initialize_account(
    account: &mut TokenAccount,
    mint: &Pubkey,
    owner: &Pubkey,
) -> Result<(), CustodyError> {
    if account.is_initialized() {
        return Err(CustodyError::AlreadyInitialized);
    }

    account.mint = *mint;
    account.owner = *owner;
    account.amount = 0;
    account.state = AccountState::Initialized;
    Ok(())
}

/// Mark the vault record as provisioned.
pub fn initialize_vault(vault: &mut Vault, authority: &ProgramAuthority) -> Result<(), CustodyError> {
    if vault.is_initialized {
        return Err(CustodyError::AlreadyInitialized);
    }

    vault.is_initialized = true;
    vault.bump = authority.bump();
    Ok(())
}

// =============================================================================
// MINTING
// =============================================================================

/// Create `amount` new base units in `dest`.
///
/// `mint_key` is the address `mint` was loaded from; `dest` must hold that
/// mint. `authority` must be the mint's recorded mint authority.
pub fn mint_to(
    mint_key: &Pubkey,
    mint: &mut Mint,
    dest: &mut TokenAccount,
    amount: u64,
    authority: &ProgramAuthority,
) -> Result<(), CustodyError> {
    if !mint.is_initialized || !dest.is_initialized() {
        return Err(CustodyError::UninitializedAccount);
    }
    if dest.mint != *mint_key {
        return Err(CustodyError::MintMismatch);
    }
    if mint.mint_authority.as_ref() != Some(authority.key()) {
        return Err(CustodyError::AuthorityMismatch);
    }

    let supply = checked_add(mint.supply, amount)?;
    let balance = checked_add(dest.amount, amount)?;

    mint.supply = supply;
    dest.amount = balance;
    Ok(())
}

// =============================================================================
// TRANSFERS
// =============================================================================

/// Move `amount` base units from `source` to `dest`.
///
/// `authority` must speak for `source.owner`: a [`WalletSigner`] for a
/// wallet-owned account, a [`ProgramAuthority`] for the vault.
///
/// [`WalletSigner`]: crate::utils::WalletSigner
pub fn transfer<A: TransferAuthority>(
    source: &mut TokenAccount,
    dest: &mut TokenAccount,
    amount: u64,
    authority: &A,
) -> Result<(), CustodyError> {
    if !source.is_initialized() || !dest.is_initialized() {
        return Err(CustodyError::UninitializedAccount);
    }
    if source.mint != dest.mint {
        return Err(CustodyError::MintMismatch);
    }
    if source.owner != *authority.authority_key() {
        return Err(CustodyError::AuthorityMismatch);
    }

    let source_balance = checked_sub(source.amount, amount)?;
    let dest_balance = checked_add(dest.amount, amount)?;

    source.amount = source_balance;
    dest.amount = dest_balance;
    Ok(())
}

// =============================================================================
// UNIT TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pda::{Deriver, MINT_SEED, VAULT_SEED};

    struct Wallet(Pubkey);

    impl TransferAuthority for Wallet {
        fn authority_key(&self) -> &Pubkey {
            &self.0
        }
    }

    fn mint_authority() -> ProgramAuthority {
        ProgramAuthority::derive(&Deriver::CUSTODY, MINT_SEED).unwrap()
    }

    fn vault_authority() -> ProgramAuthority {
        ProgramAuthority::derive(&Deriver::CUSTODY, VAULT_SEED).unwrap()
    }

    fn account(mint: Pubkey, owner: Pubkey, amount: u64) -> TokenAccount {
        TokenAccount {
            mint,
            owner,
            amount,
            state: AccountState::Initialized,
        }
    }

    fn initialized_mint() -> (Pubkey, Mint) {
        let authority = mint_authority();
        let mut mint = Mint::default();
        initialize_mint(&mut mint, 9, &authority).unwrap();
        (*authority.key(), mint)
    }

    #[test]
    fn test_initialize_mint_sets_self_authority() {
        let (mint_key, mint) = initialized_mint();
        assert!(mint.is_initialized);
        assert_eq!(mint.decimals, 9);
        assert_eq!(mint.supply, 0);
        assert_eq!(mint.mint_authority.as_ref(), Some(&mint_key));
    }

    #[test]
    fn test_initialize_twice_fails() {
        let (_, mut mint) = initialized_mint();
        assert_eq!(
            initialize_mint(&mut mint, 6, &mint_authority()),
            Err(CustodyError::AlreadyInitialized)
        );
        assert_eq!(mint.decimals, 9);

        let mut vault = Vault::default();
        initialize_vault(&mut vault, &vault_authority()).unwrap();
        assert_eq!(vault.bump, vault_authority().bump());
        assert_eq!(
            initialize_vault(&mut vault, &vault_authority()),
            Err(CustodyError::AlreadyInitialized)
        );

        let mut acc = TokenAccount::default();
        let owner = Pubkey::new_unique();
        initialize_account(&mut acc, &Pubkey::new_unique(), &owner).unwrap();
        assert_eq!(acc.owner, owner);
        assert_eq!(
            initialize_account(&mut acc, &Pubkey::new_unique(), &owner),
            Err(CustodyError::AlreadyInitialized)
        );
    }

    #[test]
    fn test_mint_to_increases_supply_and_balance() {
        let (mint_key, mut mint) = initialized_mint();
        let mut dest = account(mint_key, Pubkey::new_unique(), 0);

        mint_to(&mint_key, &mut mint, &mut dest, 10_000_000_000, &mint_authority()).unwrap();

        assert_eq!(mint.supply, 10_000_000_000);
        assert_eq!(dest.amount, 10_000_000_000);
    }

    #[test]
    fn test_mint_to_wrong_authority_fails() {
        let (mint_key, mut mint) = initialized_mint();
        let mut dest = account(mint_key, Pubkey::new_unique(), 0);

        assert_eq!(
            mint_to(&mint_key, &mut mint, &mut dest, 1, &vault_authority()),
            Err(CustodyError::AuthorityMismatch)
        );
        assert_eq!(mint.supply, 0);
        assert_eq!(dest.amount, 0);
    }

    #[test]
    fn test_mint_to_wrong_mint_fails() {
        let (mint_key, mut mint) = initialized_mint();
        let mut dest = account(Pubkey::new_unique(), Pubkey::new_unique(), 0);

        assert_eq!(
            mint_to(&mint_key, &mut mint, &mut dest, 1, &mint_authority()),
            Err(CustodyError::MintMismatch)
        );
    }

    #[test]
    fn test_mint_to_overflow_leaves_state_untouched() {
        let (mint_key, mut mint) = initialized_mint();
        mint.supply = 5;
        let mut dest = account(mint_key, Pubkey::new_unique(), u64::MAX - 10);

        // Supply fits, balance does not.
        assert_eq!(
            mint_to(&mint_key, &mut mint, &mut dest, 11, &mint_authority()),
            Err(CustodyError::Overflow)
        );
        assert_eq!(mint.supply, 5);
        assert_eq!(dest.amount, u64::MAX - 10);
    }

    #[test]
    fn test_transfer_conserves_total() {
        let mint = Pubkey::new_unique();
        let wallet = Wallet(Pubkey::new_unique());
        let mut source = account(mint, wallet.0, 10);
        let mut dest = account(mint, Pubkey::new_unique(), 0);

        transfer(&mut source, &mut dest, 5, &wallet).unwrap();
        assert_eq!((source.amount, dest.amount), (5, 5));

        transfer(&mut source, &mut dest, 5, &wallet).unwrap();
        assert_eq!((source.amount, dest.amount), (0, 10));
    }

    #[test]
    fn test_transfer_zero_is_allowed() {
        let mint = Pubkey::new_unique();
        let wallet = Wallet(Pubkey::new_unique());
        let mut source = account(mint, wallet.0, 0);
        let mut dest = account(mint, Pubkey::new_unique(), 0);

        transfer(&mut source, &mut dest, 0, &wallet).unwrap();
        assert_eq!((source.amount, dest.amount), (0, 0));
    }

    #[test]
    fn test_transfer_insufficient_funds_leaves_state_untouched() {
        let mint = Pubkey::new_unique();
        let wallet = Wallet(Pubkey::new_unique());
        let mut source = account(mint, wallet.0, 5);
        let mut dest = account(mint, Pubkey::new_unique(), 7);

        assert_eq!(
            transfer(&mut source, &mut dest, 6, &wallet),
            Err(CustodyError::InsufficientFunds)
        );
        assert_eq!((source.amount, dest.amount), (5, 7));
    }

    #[test]
    fn test_transfer_requires_owner_authority() {
        let mint = Pubkey::new_unique();
        let owner = Pubkey::new_unique();
        let mut source = account(mint, owner, 5);
        let mut dest = account(mint, Pubkey::new_unique(), 0);

        assert_eq!(
            transfer(&mut source, &mut dest, 1, &Wallet(Pubkey::new_unique())),
            Err(CustodyError::AuthorityMismatch)
        );
        assert_eq!(source.amount, 5);
    }

    #[test]
    fn test_transfer_from_vault_with_program_authority() {
        let mint = Pubkey::new_unique();
        let vault = vault_authority();
        let mut source = account(mint, *vault.key(), 10);
        let mut dest = account(mint, Pubkey::new_unique(), 0);

        transfer(&mut source, &mut dest, 10, &vault).unwrap();
        assert_eq!((source.amount, dest.amount), (0, 10));

        // The mint PDA does not speak for the vault.
        assert_eq!(
            transfer(&mut dest, &mut source, 1, &mint_authority()),
            Err(CustodyError::AuthorityMismatch)
        );
    }

    #[test]
    fn test_transfer_mint_mismatch_fails() {
        let wallet = Wallet(Pubkey::new_unique());
        let mut source = account(Pubkey::new_unique(), wallet.0, 5);
        let mut dest = account(Pubkey::new_unique(), Pubkey::new_unique(), 0);

        assert_eq!(
            transfer(&mut source, &mut dest, 1, &wallet),
            Err(CustodyError::MintMismatch)
        );
    }

    #[test]
    fn test_transfer_uninitialized_fails() {
        let wallet = Wallet(Pubkey::new_unique());
        let mut source = account(Pubkey::new_unique(), wallet.0, 5);
        let mut dest = TokenAccount::default();

        assert_eq!(
            transfer(&mut source, &mut dest, 1, &wallet),
            Err(CustodyError::UninitializedAccount)
        );
    }
}
