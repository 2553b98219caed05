//! InitToken Instruction Processor
//!
//! Creates the mint PDA and, through the metadata program, its metadata
//! record. Running it again after the mint exists is a successful no-op.

use crate::error::CustodyError;
use crate::instruction::InitTokenParams;
use crate::ledger;
use crate::pda::{Deriver, MINT_SEED};
use crate::state::{Mint, Pack};
use crate::utils::*;
use solana_program::{
    account_info::{next_account_info, AccountInfo},
    entrypoint::ProgramResult,
    msg,
    program::invoke_signed,
    pubkey::Pubkey,
    rent::Rent,
    system_program,
    sysvar::Sysvar,
};

/// Process InitToken instruction
///
/// Accounts expected:
/// 0. `[writable]` Metadata PDA (under the metadata program)
/// 1. `[writable]` Mint PDA
/// 2. `[writable, signer]` Payer
/// 3. `[]` Rent sysvar
/// 4. `[]` System program
/// 5. `[]` Metadata program
pub fn process(
    program_id: &Pubkey,
    accounts: &[AccountInfo],
    params: InitTokenParams,
) -> ProgramResult {
    let account_info_iter = &mut accounts.iter();

    let metadata_info = next_account_info(account_info_iter)?;
    let mint_info = next_account_info(account_info_iter)?;
    let payer_info = next_account_info(account_info_iter)?;
    let rent_info = next_account_info(account_info_iter)?;
    let system_program_info = next_account_info(account_info_iter)?;
    let metadata_program_info = next_account_info(account_info_iter)?;

    let deriver = Deriver::new(*program_id);
    let mint_authority = ProgramAuthority::verify(&deriver, MINT_SEED, mint_info)?;

    if account_exists(mint_info) {
        msg!("Token mint already exists, skipping initialization");
        return Ok(());
    }

    assert_signer(payer_info)?;
    assert_writable(mint_info)?;
    assert_writable(metadata_info)?;
    assert_program_id(system_program_info, &system_program::id())?;
    assert_program_id(metadata_program_info, &token_metadata::ID)?;

    let (expected_metadata, _) =
        Deriver::new(*metadata_program_info.key).metadata_address(mint_info.key)?;
    if expected_metadata != *metadata_info.key {
        return Err(CustodyError::InvalidSeeds.into());
    }

    let rent = Rent::from_account_info(rent_info)?;
    let mint_seeds = mint_authority.signer_seeds();

    create_pda_account(
        payer_info,
        mint_info,
        system_program_info,
        &rent,
        Mint::LEN,
        program_id,
        &mint_seeds,
    )?;

    let mut mint = Mint::unpack_from_slice(&mint_info.data.borrow())?;
    ledger::initialize_mint(&mut mint, params.decimals, &mint_authority)?;
    mint.pack_into_slice(&mut mint_info.data.borrow_mut())?;

    // The mint PDA signs as its own mint authority and becomes the
    // metadata's update authority.
    let create_metadata_ix = token_metadata::instruction::create_metadata(
        metadata_program_info.key,
        metadata_info.key,
        mint_info.key,
        mint_info.key,
        payer_info.key,
        mint_info.key,
        params.name,
        params.symbol,
        params.uri,
    );
    invoke_signed(
        &create_metadata_ix,
        &[
            metadata_info.clone(),
            mint_info.clone(),
            payer_info.clone(),
            system_program_info.clone(),
            rent_info.clone(),
            metadata_program_info.clone(),
        ],
        &[&mint_seeds[..]],
    )?;

    msg!("Token mint created successfully.");
    Ok(())
}
