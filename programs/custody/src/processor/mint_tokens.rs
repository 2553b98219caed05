//! MintTokens Instruction Processor
//!
//! Mints new tokens into an owner's associated token account, creating the
//! account on first use. The mint PDA is the mint authority, so no external
//! signature is needed beyond the payer's.

use crate::error::CustodyError;
use crate::ledger;
use crate::pda::{Deriver, MINT_SEED};
use crate::state::{Mint, Pack, TokenAccount};
use crate::utils::*;
use solana_program::{
    account_info::{next_account_info, AccountInfo},
    entrypoint::ProgramResult,
    msg,
    pubkey::Pubkey,
    rent::Rent,
    system_program,
    sysvar::Sysvar,
};

/// Process MintTokens instruction
///
/// Accounts expected:
/// 0. `[writable]` Mint PDA
/// 1. `[writable]` Destination associated token account
/// 2. `[]` Destination owner
/// 3. `[writable, signer]` Payer
/// 4. `[]` Rent sysvar
/// 5. `[]` System program
pub fn process(program_id: &Pubkey, accounts: &[AccountInfo], amount: u64) -> ProgramResult {
    let account_info_iter = &mut accounts.iter();

    let mint_info = next_account_info(account_info_iter)?;
    let dest_info = next_account_info(account_info_iter)?;
    let owner_info = next_account_info(account_info_iter)?;
    let payer_info = next_account_info(account_info_iter)?;
    let rent_info = next_account_info(account_info_iter)?;
    let system_program_info = next_account_info(account_info_iter)?;

    let deriver = Deriver::new(*program_id);
    let mint_authority = ProgramAuthority::verify(&deriver, MINT_SEED, mint_info)?;

    // Validate mint
    assert_owned_by(mint_info, program_id)?;
    assert_writable(mint_info)?;
    assert_data_length(mint_info, Mint::LEN)?;

    assert_writable(dest_info)?;
    assert_signer(payer_info)?;
    assert_program_id(system_program_info, &system_program::id())?;

    let mut mint = Mint::unpack_from_slice(&mint_info.data.borrow())?;
    if !mint.is_initialized {
        return Err(CustodyError::UninitializedAccount.into());
    }

    let rent = Rent::from_account_info(rent_info)?;
    ensure_associated_token_account(
        &deriver,
        payer_info,
        dest_info,
        owner_info.key,
        mint_info.key,
        system_program_info,
        &rent,
    )?;

    let mut dest_account = TokenAccount::unpack_from_slice(&dest_info.data.borrow())?;
    ledger::mint_to(
        mint_info.key,
        &mut mint,
        &mut dest_account,
        amount,
        &mint_authority,
    )?;

    mint.pack_into_slice(&mut mint_info.data.borrow_mut())?;
    dest_account.pack_into_slice(&mut dest_info.data.borrow_mut())?;

    msg!("Minted {} to {}", amount, owner_info.key);
    Ok(())
}
