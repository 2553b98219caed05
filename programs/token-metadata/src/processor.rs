//! Instruction Processor

use crate::{
    error::MetadataError,
    instruction::MetadataInstruction,
    mint_program,
    state::{Metadata, MintAuthorityView},
    METADATA_SEED,
};
use solana_program::{
    account_info::{next_account_info, AccountInfo},
    entrypoint::ProgramResult,
    msg,
    program::{invoke, invoke_signed},
    program_error::ProgramError,
    program_pack::Pack,
    pubkey::Pubkey,
    rent::Rent,
    system_instruction, system_program,
    sysvar::Sysvar,
};

/// Routes metadata instructions to their handlers.
pub struct Processor;

impl Processor {
    pub fn process(
        program_id: &Pubkey,
        accounts: &[AccountInfo],
        instruction_data: &[u8],
    ) -> ProgramResult {
        match MetadataInstruction::unpack(instruction_data)? {
            MetadataInstruction::CreateMetadata { name, symbol, uri } => {
                msg!("Instruction: CreateMetadata");
                Self::process_create_metadata(program_id, accounts, name, symbol, uri)
            }
        }
    }

    fn process_create_metadata(
        program_id: &Pubkey,
        accounts: &[AccountInfo],
        name: String,
        symbol: String,
        uri: String,
    ) -> ProgramResult {
        let account_info_iter = &mut accounts.iter();
        let metadata_info = next_account_info(account_info_iter)?;
        let mint_info = next_account_info(account_info_iter)?;
        let mint_authority_info = next_account_info(account_info_iter)?;
        let payer_info = next_account_info(account_info_iter)?;
        let update_authority_info = next_account_info(account_info_iter)?;
        let system_program_info = next_account_info(account_info_iter)?;
        let rent_info = next_account_info(account_info_iter)?;

        Metadata::check_lengths(&name, &symbol, &uri)?;

        if !mint_authority_info.is_signer || !payer_info.is_signer {
            return Err(ProgramError::MissingRequiredSignature);
        }
        if system_program_info.key != &system_program::id() {
            return Err(ProgramError::IncorrectProgramId);
        }

        // The record lives at the address derived from the mint.
        let (expected, bump) = Pubkey::try_find_program_address(
            &[METADATA_SEED, program_id.as_ref(), mint_info.key.as_ref()],
            program_id,
        )
        .ok_or(MetadataError::InvalidMetadataAddress)?;
        if expected != *metadata_info.key {
            return Err(MetadataError::InvalidMetadataAddress.into());
        }
        if !metadata_info.data_is_empty() {
            return Err(MetadataError::AlreadyInitialized.into());
        }

        if mint_info.owner != &mint_program::id() {
            return Err(MetadataError::InvalidMintOwner.into());
        }
        let mint = MintAuthorityView::read(&mint_info.data.borrow())?;
        if !mint.is_initialized {
            return Err(MetadataError::UninitializedMint.into());
        }
        if mint.mint_authority != Some(*mint_authority_info.key) {
            return Err(MetadataError::InvalidMintAuthority.into());
        }

        let rent = Rent::from_account_info(rent_info)?;
        create_record_account(
            payer_info,
            metadata_info,
            system_program_info,
            &rent,
            program_id,
            &[
                METADATA_SEED,
                program_id.as_ref(),
                mint_info.key.as_ref(),
                &[bump],
            ],
        )?;

        let metadata = Metadata {
            is_initialized: true,
            update_authority: *update_authority_info.key,
            mint: *mint_info.key,
            name,
            symbol,
            uri,
        };
        Metadata::pack(metadata, &mut metadata_info.data.borrow_mut())?;

        msg!("Metadata created for mint {}", mint_info.key);
        Ok(())
    }
}

/// Create the metadata account at its PDA.
///
/// `create_account` refuses an address that already holds lamports, and
/// anyone can send lamports to a public address. In that case the balance
/// is topped up to rent exemption and the account is allocated and
/// assigned in place.
fn create_record_account<'a>(
    payer: &AccountInfo<'a>,
    record: &AccountInfo<'a>,
    system_program: &AccountInfo<'a>,
    rent: &Rent,
    program_id: &Pubkey,
    signer_seeds: &[&[u8]],
) -> ProgramResult {
    let required_lamports = rent.minimum_balance(Metadata::LEN);
    let current_lamports = record.lamports();

    if current_lamports == 0 {
        return invoke_signed(
            &system_instruction::create_account(
                payer.key,
                record.key,
                required_lamports,
                Metadata::LEN as u64,
                program_id,
            ),
            &[payer.clone(), record.clone(), system_program.clone()],
            &[signer_seeds],
        );
    }

    let shortfall = required_lamports.saturating_sub(current_lamports);
    if shortfall > 0 {
        invoke(
            &system_instruction::transfer(payer.key, record.key, shortfall),
            &[payer.clone(), record.clone(), system_program.clone()],
        )?;
    }
    invoke_signed(
        &system_instruction::allocate(record.key, Metadata::LEN as u64),
        &[record.clone(), system_program.clone()],
        &[signer_seeds],
    )?;
    invoke_signed(
        &system_instruction::assign(record.key, program_id),
        &[record.clone(), system_program.clone()],
        &[signer_seeds],
    )
}
