//! TransferFromPda Instruction Processor
//!
//! Withdraws tokens from the vault's token account. No wallet signs: the
//! program proves it controls the vault by re-deriving `["pda"]` and
//! checking the result against the vault account it was given.

use crate::error::CustodyError;
use crate::ledger;
use crate::pda::{Deriver, VAULT_SEED};
use crate::state::{Pack, TokenAccount, Vault};
use crate::utils::*;
use solana_program::{
    account_info::{next_account_info, AccountInfo},
    entrypoint::ProgramResult,
    msg,
    pubkey::Pubkey,
};

/// Process TransferFromPda instruction
///
/// Accounts expected:
/// 0. `[writable]` Vault token account
/// 1. `[writable]` Destination token account
/// 2. `[]` Vault PDA
pub fn process(program_id: &Pubkey, accounts: &[AccountInfo], amount: u64) -> ProgramResult {
    let account_info_iter = &mut accounts.iter();

    let source_info = next_account_info(account_info_iter)?;
    let dest_info = next_account_info(account_info_iter)?;
    let vault_info = next_account_info(account_info_iter)?;

    let vault_authority =
        ProgramAuthority::verify(&Deriver::new(*program_id), VAULT_SEED, vault_info)?;

    assert_owned_by(vault_info, program_id)?;
    assert_data_length(vault_info, Vault::LEN)?;
    if !Vault::unpack_from_slice(&vault_info.data.borrow())?.is_initialized {
        return Err(CustodyError::UninitializedAccount.into());
    }

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

    ledger::transfer(
        &mut source_account,
        &mut dest_account,
        amount,
        &vault_authority,
    )?;

    source_account.pack_into_slice(&mut source_info.data.borrow_mut())?;
    dest_account.pack_into_slice(&mut dest_info.data.borrow_mut())?;

    msg!("Withdrew {} from vault to {}", amount, dest_account.owner);
    Ok(())
}
