//! Instruction Processors
//!
//! One file per instruction. Every processor follows the same shape:
//! parse accounts, validate, provision missing accounts, load state, run
//! the ledger transition, store state.

pub mod init_pda;
pub mod init_token;
pub mod mint_tokens;
pub mod transfer_from_pda;
pub mod transfer_to_pda;

use crate::instruction::CustodyInstruction;
use solana_program::{account_info::AccountInfo, entrypoint::ProgramResult, msg, pubkey::Pubkey};

/// Main processor that routes instructions to specific handlers
pub struct Processor;

impl Processor {
    /// Process a custody program instruction
    pub fn process(
        program_id: &Pubkey,
        accounts: &[AccountInfo],
        instruction_data: &[u8],
    ) -> ProgramResult {
        let instruction = CustodyInstruction::unpack(instruction_data)?;

        match instruction {
            CustodyInstruction::InitToken(params) => {
                msg!("Instruction: InitToken");
                init_token::process(program_id, accounts, params)
            }

            CustodyInstruction::MintTokens { amount } => {
                msg!("Instruction: MintTokens");
                mint_tokens::process(program_id, accounts, amount)
            }

            CustodyInstruction::InitPda => {
                msg!("Instruction: InitPda");
                init_pda::process(program_id, accounts)
            }

            CustodyInstruction::TransferToPda { amount } => {
                msg!("Instruction: TransferToPda");
                transfer_to_pda::process(program_id, accounts, amount)
            }

            CustodyInstruction::TransferFromPda { amount } => {
                msg!("Instruction: TransferFromPda");
                transfer_from_pda::process(program_id, accounts, amount)
            }
        }
    }
}
