//! TransferToPda Instruction Processor
//!
//! Deposits tokens from a wallet's token account into the vault's. The
//! wallet authorizes the move by signing the transaction.

use crate::error::CustodyError;
use crate::ledger;
use crate::pda::Deriver;
use crate::state::{Pack, TokenAccount};
use crate::utils::*;
use solana_program::{
    account_info::{next_account_info, AccountInfo},
    entrypoint::ProgramResult,
    msg,
    pubkey::Pubkey,
};

/// Process TransferToPda instruction
///
/// Accounts expected:
/// 0. `[writable]` Source token account (owned by the wallet)
/// 1. `[writable]` Vault token account
/// 2. `[signer]` Wallet
pub fn process(program_id: &Pubkey, accounts: &[AccountInfo], amount: u64) -> ProgramResult {
    let account_info_iter = &mut accounts.iter();

    let source_info = next_account_info(account_info_iter)?;
    let dest_info = next_account_info(account_info_iter)?;
    let authority_info = next_account_info(account_info_iter)?;

    let wallet = WalletSigner::new(authority_info)?;

    if source_info.key == dest_info.key {
        return Err(CustodyError::SelfTransfer.into());
    }

    // Validate source
    assert_owned_by(source_info, program_id)?;
    assert_writable(source_info)?;
    assert_data_length(source_info, TokenAccount::LEN)?;

    // Validate destination
    assert_owned_by(dest_info, program_id)?;
    assert_writable(dest_info)?;
    assert_data_length(dest_info, TokenAccount::LEN)?;

    let mut source_account = TokenAccount::unpack_from_slice(&source_info.data.borrow())?;
    let mut dest_account = TokenAccount::unpack_from_slice(&dest_info.data.borrow())?;

    // Deposits may only land in the vault's own token account.
    let deriver = Deriver::new(*program_id);
    let (vault, _) = deriver.vault_address()?;
    let (vault_token_account, _) =
        deriver.associated_token_address(&vault, &source_account.mint)?;
    if *dest_info.key != vault_token_account || dest_account.owner != vault {
        return Err(CustodyError::VaultMismatch.into());
    }

    ledger::transfer(&mut source_account, &mut dest_account, amount, &wallet)?;

    source_account.pack_into_slice(&mut source_info.data.borrow_mut())?;
    dest_account.pack_into_slice(&mut dest_info.data.borrow_mut())?;

    msg!("Deposited {} into vault", amount);
    Ok(())
}
