//! Account Provisioning
//!
//! Every account the program owns sits at a PDA, so the program creates it
//! itself through the system program, signing with the account's seeds.
//! Creation is idempotent: an account that already has data is left alone.

use crate::error::CustodyError;
use crate::ledger;
use crate::pda::Deriver;
use crate::state::{Pack, TokenAccount};
use crate::utils::{assert_data_length, assert_owned_by};
use solana_program::{
    account_info::AccountInfo,
    entrypoint::ProgramResult,
    msg,
    program::{invoke, invoke_signed},
    program_error::ProgramError,
    pubkey::Pubkey,
    rent::Rent,
    system_instruction,
};

/// Outcome of an idempotent provisioning step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Provisioned {
    Created,
    AlreadyPresent,
}

/// An account exists once it holds data.
///
/// Lamports alone do not count: anyone can send lamports to an address.
pub fn account_exists(account: &AccountInfo) -> bool {
    !account.data_is_empty()
}

/// Create a rent-exempt account of `space` bytes at a PDA, owned by `owner`.
///
/// `signer_seeds` must include the bump. If someone already sent lamports
/// to the address, `create_account` would refuse it, so the account is
/// topped up, allocated and assigned instead.
#[allow(clippy::too_many_arguments)]
pub fn create_pda_account<'a>(
    payer: &AccountInfo<'a>,
    new_account: &AccountInfo<'a>,
    system_program: &AccountInfo<'a>,
    rent: &Rent,
    space: usize,
    owner: &Pubkey,
    signer_seeds: &[&[u8]],
) -> ProgramResult {
    let required_lamports = rent.minimum_balance(space);
    let current_lamports = new_account.lamports();

    if current_lamports == 0 {
        return invoke_signed(
            &system_instruction::create_account(
                payer.key,
                new_account.key,
                required_lamports,
                space as u64,
                owner,
            ),
            &[payer.clone(), new_account.clone(), system_program.clone()],
            &[signer_seeds],
        );
    }

    let shortfall = required_lamports.saturating_sub(current_lamports);
    if shortfall > 0 {
        invoke(
            &system_instruction::transfer(payer.key, new_account.key, shortfall),
            &[payer.clone(), new_account.clone(), system_program.clone()],
        )?;
    }
    invoke_signed(
        &system_instruction::allocate(new_account.key, space as u64),
        &[new_account.clone(), system_program.clone()],
        &[signer_seeds],
    )?;
    invoke_signed(
        &system_instruction::assign(new_account.key, owner),
        &[new_account.clone(), system_program.clone()],
        &[signer_seeds],
    )
}

/// Make sure `owner` has its associated token account for `mint`.
///
/// Creates and initializes the account on first use. On later calls the
/// existing account is only checked for ownership and size.
///
/// # Errors
///
/// - `InvalidSeeds` if `token_account` is not the derived address
/// - `InvalidAccountOwner` / `InvalidAccountDataLength` for a foreign or
///   malformed existing account
pub fn ensure_associated_token_account<'a>(
    deriver: &Deriver,
    payer: &AccountInfo<'a>,
    token_account: &AccountInfo<'a>,
    owner: &Pubkey,
    mint: &Pubkey,
    system_program: &AccountInfo<'a>,
    rent: &Rent,
) -> Result<Provisioned, ProgramError> {
    let program_id = deriver.program_id();
    let (expected, bump) = deriver.associated_token_address(owner, mint)?;
    if expected != *token_account.key {
        return Err(CustodyError::InvalidSeeds.into());
    }

    if account_exists(token_account) {
        assert_owned_by(token_account, program_id)?;
        assert_data_length(token_account, TokenAccount::LEN)?;
        return Ok(Provisioned::AlreadyPresent);
    }

    create_pda_account(
        payer,
        token_account,
        system_program,
        rent,
        TokenAccount::LEN,
        program_id,
        &[owner.as_ref(), program_id.as_ref(), mint.as_ref(), &[bump]],
    )?;

    let mut account = TokenAccount::default();
    ledger::initialize_account(&mut account, mint, owner)?;
    account.pack_into_slice(&mut token_account.data.borrow_mut())?;

    msg!("Created token account {} for {}", token_account.key, owner);
    Ok(Provisioned::Created)
}
