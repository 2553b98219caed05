//! InitPda Instruction Processor
//!
//! Provisions the vault: the marker record at `["pda"]` and the vault's
//! associated token account. Either part that already exists is kept.

use crate::error::CustodyError;
use crate::ledger;
use crate::pda::{Deriver, VAULT_SEED};
use crate::state::{Mint, Pack, Vault};
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

/// Process InitPda instruction
///
/// Accounts expected:
/// 0. `[writable, signer]` Payer
/// 1. `[writable]` Vault PDA
/// 2. `[writable]` Vault associated token account
/// 3. `[]` Mint PDA
/// 4. `[]` Rent sysvar
/// 5. `[]` System program
pub fn process(program_id: &Pubkey, accounts: &[AccountInfo]) -> ProgramResult {
    let account_info_iter = &mut accounts.iter();

    let payer_info = next_account_info(account_info_iter)?;
    let vault_info = next_account_info(account_info_iter)?;
    let vault_token_info = next_account_info(account_info_iter)?;
    let mint_info = next_account_info(account_info_iter)?;
    let rent_info = next_account_info(account_info_iter)?;
    let system_program_info = next_account_info(account_info_iter)?;

    let deriver = Deriver::new(*program_id);
    let vault_authority = ProgramAuthority::verify(&deriver, VAULT_SEED, vault_info)?;

    assert_signer(payer_info)?;
    assert_program_id(system_program_info, &system_program::id())?;

    let (expected_mint, _) = deriver.mint_address()?;
    if expected_mint != *mint_info.key {
        return Err(CustodyError::InvalidSeeds.into());
    }
    assert_owned_by(mint_info, program_id)?;
    assert_data_length(mint_info, Mint::LEN)?;
    if !Mint::unpack_from_slice(&mint_info.data.borrow())?.is_initialized {
        return Err(CustodyError::UninitializedAccount.into());
    }

    let rent = Rent::from_account_info(rent_info)?;

    if account_exists(vault_info) {
        assert_owned_by(vault_info, program_id)?;
        assert_data_length(vault_info, Vault::LEN)?;
        msg!("Vault already exists");
    } else {
        create_pda_account(
            payer_info,
            vault_info,
            system_program_info,
            &rent,
            Vault::LEN,
            program_id,
            &vault_authority.signer_seeds(),
        )?;

        let mut vault = Vault::default();
        ledger::initialize_vault(&mut vault, &vault_authority)?;
        vault.pack_into_slice(&mut vault_info.data.borrow_mut())?;
        msg!("Vault created at {}", vault_info.key);
    }

    let provisioned = ensure_associated_token_account(
        &deriver,
        payer_info,
        vault_token_info,
        vault_info.key,
        mint_info.key,
        system_program_info,
        &rent,
    )?;
    if provisioned == Provisioned::AlreadyPresent {
        msg!("Vault token account already exists");
    }

    Ok(())
}
