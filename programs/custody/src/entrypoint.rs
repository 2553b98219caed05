//! Program Entrypoint
//!
//! Where the Solana runtime calls into the custody program. Everything is
//! handed straight to [`Processor::process`].

// Only compile this module if the "no-entrypoint" feature is NOT enabled
#![cfg(not(feature = "no-entrypoint"))]

use crate::processor::Processor;
use solana_program::{
    account_info::AccountInfo,
    entrypoint,
    entrypoint::ProgramResult,
    pubkey::Pubkey,
};

entrypoint!(process_instruction);

/// The main entrypoint for the custody program.
///
/// # Arguments
///
/// * `program_id` - The address this program is deployed at. Every PDA the
///   program checks is derived under this id.
/// * `accounts` - Slice of all accounts involved in this instruction
/// * `instruction_data` - The raw bytes of instruction-specific data
pub fn process_instruction(
    program_id: &Pubkey,
    accounts: &[AccountInfo],
    instruction_data: &[u8],
) -> ProgramResult {
    Processor::process(program_id, accounts, instruction_data)
}

/*
=============================================================================
DETAILED EXPLANATION
=============================================================================

ONE TRANSACTION, SEVERAL PROGRAMS
=================================

InitToken is the only instruction that leaves this program:

User Transaction
     │
     ▼
┌──────────────────────────┐
│ custody: InitToken       │
│   create mint  ──────────┼──► system program (signed with ["mint"])
│   CreateMetadata ────────┼──► metadata program (signed with ["mint"])
└──────────────────────────┘            │
                                        └──► system program (signed with
                                             ["metadata", id, mint])

The other four instructions only touch accounts this program owns, plus
system program calls to create missing token accounts and the vault.

If any step fails, the runtime rolls back every account change made by
the whole transaction, including the ones made inside nested calls.
*/
