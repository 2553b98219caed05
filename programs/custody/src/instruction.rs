//! Instruction Types
//!
//! This module defines all instructions supported by the custody program,
//! plus client-side builders that derive every PDA the instruction needs.
//!
//! # Instruction Format
//!
//! ```text
//! [discriminant: u8][data: varies]
//! ```
//!
//! | Value | Instruction |
//! |-------|-------------|
//! | 0 | InitToken |
//! | 1 | MintTokens |
//! | 2 | InitPda |
//! | 3 | TransferToPda |
//! | 4 | TransferFromPda |
//!
//! Integers are little-endian. Strings are a `u32` byte length followed by
//! the UTF-8 bytes.

use crate::error::CustodyError;
use crate::pda::Deriver;
use token_metadata::instruction::{pack_string, unpack_string};
use solana_program::{
    instruction::{AccountMeta, Instruction},
    program_error::ProgramError,
    pubkey::Pubkey,
    system_program, sysvar,
};

// =============================================================================
// INIT TOKEN PARAMETERS
// =============================================================================

/// Parameters of the one-time token setup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InitTokenParams {
    /// Token name, at most 32 bytes.
    pub name: String,

    /// Ticker symbol, at most 10 bytes.
    pub symbol: String,

    /// Off-chain metadata URI, at most 200 bytes.
    pub uri: String,

    /// Decimal places of the mint. Fixed once the mint exists.
    pub decimals: u8,
}

// =============================================================================
// CUSTODY INSTRUCTION ENUM
// =============================================================================

/// All instructions supported by the custody program.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CustodyInstruction {
    /// Create the mint PDA and its metadata record.
    ///
    /// Succeeds without changes if the mint already exists.
    ///
    /// # Account Requirements
    ///
    /// | # | Account | Writable | Signer | Description |
    /// |---|---------|----------|--------|-------------|
    /// | 0 | metadata | ✓ | | Metadata PDA (metadata program) |
    /// | 1 | mint | ✓ | | Mint PDA `["mint"]` |
    /// | 2 | payer | ✓ | ✓ | Funds both new accounts |
    /// | 3 | rent | | | Rent sysvar |
    /// | 4 | system_program | | | System program |
    /// | 5 | metadata_program | | | Metadata program |
    ///
    /// # Data Layout
    ///
    /// ```text
    /// [0]: discriminant (0)
    /// name, symbol, uri: u32 length + bytes each
    /// [..]: decimals (u8)
    /// ```
    InitToken(InitTokenParams),

    /// Mint new tokens into the destination owner's token account,
    /// creating that account if needed.
    ///
    /// # Account Requirements
    ///
    /// | # | Account | Writable | Signer | Description |
    /// |---|---------|----------|--------|-------------|
    /// | 0 | mint | ✓ | | Mint PDA |
    /// | 1 | destination | ✓ | | Associated token account of owner |
    /// | 2 | owner | | | Destination owner |
    /// | 3 | payer | ✓ | ✓ | Funds account creation |
    /// | 4 | rent | | | Rent sysvar |
    /// | 5 | system_program | | | System program |
    ///
    /// # Data Layout
    ///
    /// ```text
    /// [0]: discriminant (1)
    /// [1..9]: amount (u64)
    /// ```
    MintTokens { amount: u64 },

    /// Create the vault record and the vault's token account.
    ///
    /// Idempotent: whatever already exists is left as is.
    ///
    /// # Account Requirements
    ///
    /// | # | Account | Writable | Signer | Description |
    /// |---|---------|----------|--------|-------------|
    /// | 0 | payer | ✓ | ✓ | Funds account creation |
    /// | 1 | vault | ✓ | | Vault PDA `["pda"]` |
    /// | 2 | vault_token_account | ✓ | | Associated token account of vault |
    /// | 3 | mint | | | Mint PDA |
    /// | 4 | rent | | | Rent sysvar |
    /// | 5 | system_program | | | System program |
    InitPda,

    /// Deposit from a wallet's token account into the vault's.
    ///
    /// # Account Requirements
    ///
    /// | # | Account | Writable | Signer | Description |
    /// |---|---------|----------|--------|-------------|
    /// | 0 | source | ✓ | | Wallet's token account |
    /// | 1 | destination | ✓ | | Vault's token account |
    /// | 2 | authority | | ✓ | Wallet owning `source` |
    ///
    /// # Data Layout
    ///
    /// ```text
    /// [0]: discriminant (3)
    /// [1..9]: amount (u64)
    /// ```
    TransferToPda { amount: u64 },

    /// Withdraw from the vault's token account. The program signs for the
    /// vault; no wallet signature is involved.
    ///
    /// # Account Requirements
    ///
    /// | # | Account | Writable | Signer | Description |
    /// |---|---------|----------|--------|-------------|
    /// | 0 | source | ✓ | | Vault's token account |
    /// | 1 | destination | ✓ | | Recipient's token account |
    /// | 2 | vault | | | Vault PDA |
    ///
    /// # Data Layout
    ///
    /// ```text
    /// [0]: discriminant (4)
    /// [1..9]: amount (u64)
    /// ```
    TransferFromPda { amount: u64 },
}

// =============================================================================
// INSTRUCTION PARSING (UNPACK)
// =============================================================================

impl CustodyInstruction {
    /// Parse instruction data into a CustodyInstruction.
    pub fn unpack(input: &[u8]) -> Result<Self, ProgramError> {
        let (&discriminant, rest) = input
            .split_first()
            .ok_or(CustodyError::InvalidInstruction)?;

        Ok(match discriminant {
            0 => {
                let (name, rest) = unpack_string(rest).ok_or(CustodyError::InvalidInstruction)?;
                let (symbol, rest) = unpack_string(rest).ok_or(CustodyError::InvalidInstruction)?;
                let (uri, rest) = unpack_string(rest).ok_or(CustodyError::InvalidInstruction)?;
                let decimals = match rest {
                    [decimals] => *decimals,
                    _ => return Err(CustodyError::InvalidInstruction.into()),
                };
                CustodyInstruction::InitToken(InitTokenParams {
                    name,
                    symbol,
                    uri,
                    decimals,
                })
            }
            1 => CustodyInstruction::MintTokens {
                amount: unpack_amount(rest)?,
            },
            2 if rest.is_empty() => CustodyInstruction::InitPda,
            3 => CustodyInstruction::TransferToPda {
                amount: unpack_amount(rest)?,
            },
            4 => CustodyInstruction::TransferFromPda {
                amount: unpack_amount(rest)?,
            },
            _ => return Err(CustodyError::InvalidInstruction.into()),
        })
    }

    /// Pack instruction into bytes. Inverse of `unpack()`.
    pub fn pack(&self) -> Vec<u8> {
        let mut buf = Vec::new();

        match self {
            CustodyInstruction::InitToken(params) => {
                buf.push(0);
                pack_string(&params.name, &mut buf);
                pack_string(&params.symbol, &mut buf);
                pack_string(&params.uri, &mut buf);
                buf.push(params.decimals);
            }
            CustodyInstruction::MintTokens { amount } => {
                buf.push(1);
                buf.extend_from_slice(&amount.to_le_bytes());
            }
            CustodyInstruction::InitPda => buf.push(2),
            CustodyInstruction::TransferToPda { amount } => {
                buf.push(3);
                buf.extend_from_slice(&amount.to_le_bytes());
            }
            CustodyInstruction::TransferFromPda { amount } => {
                buf.push(4);
                buf.extend_from_slice(&amount.to_le_bytes());
            }
        }

        buf
    }
}

/// The payload of every amount instruction is exactly one `u64`.
fn unpack_amount(input: &[u8]) -> Result<u64, ProgramError> {
    let bytes: [u8; 8] = input
        .try_into()
        .map_err(|_| CustodyError::InvalidInstruction)?;
    Ok(u64::from_le_bytes(bytes))
}

// =============================================================================
// INSTRUCTION BUILDERS
// =============================================================================

/// Build an `InitToken` instruction.
pub fn init_token(
    program_id: &Pubkey,
    payer: &Pubkey,
    params: InitTokenParams,
) -> Result<Instruction, ProgramError> {
    let (mint, _) = Deriver::new(*program_id).mint_address()?;
    let (metadata, _) = Deriver::METADATA.metadata_address(&mint)?;

    Ok(Instruction {
        program_id: *program_id,
        accounts: vec![
            AccountMeta::new(metadata, false),
            AccountMeta::new(mint, false),
            AccountMeta::new(*payer, true),
            AccountMeta::new_readonly(sysvar::rent::id(), false),
            AccountMeta::new_readonly(system_program::id(), false),
            AccountMeta::new_readonly(*Deriver::METADATA.program_id(), false),
        ],
        data: CustodyInstruction::InitToken(params).pack(),
    })
}

/// Build a `MintTokens` instruction crediting `owner`.
pub fn mint_tokens(
    program_id: &Pubkey,
    payer: &Pubkey,
    owner: &Pubkey,
    amount: u64,
) -> Result<Instruction, ProgramError> {
    let deriver = Deriver::new(*program_id);
    let (mint, _) = deriver.mint_address()?;
    let (destination, _) = deriver.associated_token_address(owner, &mint)?;

    Ok(Instruction {
        program_id: *program_id,
        accounts: vec![
            AccountMeta::new(mint, false),
            AccountMeta::new(destination, false),
            AccountMeta::new_readonly(*owner, false),
            AccountMeta::new(*payer, true),
            AccountMeta::new_readonly(sysvar::rent::id(), false),
            AccountMeta::new_readonly(system_program::id(), false),
        ],
        data: CustodyInstruction::MintTokens { amount }.pack(),
    })
}

/// Build an `InitPda` instruction.
pub fn init_pda(program_id: &Pubkey, payer: &Pubkey) -> Result<Instruction, ProgramError> {
    let deriver = Deriver::new(*program_id);
    let (mint, _) = deriver.mint_address()?;
    let (vault, _) = deriver.vault_address()?;
    let (vault_token_account, _) = deriver.associated_token_address(&vault, &mint)?;

    Ok(Instruction {
        program_id: *program_id,
        accounts: vec![
            AccountMeta::new(*payer, true),
            AccountMeta::new(vault, false),
            AccountMeta::new(vault_token_account, false),
            AccountMeta::new_readonly(mint, false),
            AccountMeta::new_readonly(sysvar::rent::id(), false),
            AccountMeta::new_readonly(system_program::id(), false),
        ],
        data: CustodyInstruction::InitPda.pack(),
    })
}

/// Build a `TransferToPda` instruction moving `amount` from `wallet`'s
/// token account into the vault.
pub fn transfer_to_pda(
    program_id: &Pubkey,
    wallet: &Pubkey,
    amount: u64,
) -> Result<Instruction, ProgramError> {
    let deriver = Deriver::new(*program_id);
    let (mint, _) = deriver.mint_address()?;
    let (vault, _) = deriver.vault_address()?;
    let (source, _) = deriver.associated_token_address(wallet, &mint)?;
    let (destination, _) = deriver.associated_token_address(&vault, &mint)?;

    Ok(Instruction {
        program_id: *program_id,
        accounts: vec![
            AccountMeta::new(source, false),
            AccountMeta::new(destination, false),
            AccountMeta::new_readonly(*wallet, true),
        ],
        data: CustodyInstruction::TransferToPda { amount }.pack(),
    })
}

/// Build a `TransferFromPda` instruction moving `amount` from the vault to
/// `recipient`'s token account.
pub fn transfer_from_pda(
    program_id: &Pubkey,
    recipient: &Pubkey,
    amount: u64,
) -> Result<Instruction, ProgramError> {
    let deriver = Deriver::new(*program_id);
    let (mint, _) = deriver.mint_address()?;
    let (vault, _) = deriver.vault_address()?;
    let (source, _) = deriver.associated_token_address(&vault, &mint)?;
    let (destination, _) = deriver.associated_token_address(recipient, &mint)?;

    Ok(Instruction {
        program_id: *program_id,
        accounts: vec![
            AccountMeta::new(source, false),
            AccountMeta::new(destination, false),
            AccountMeta::new_readonly(vault, false),
        ],
        data: CustodyInstruction::TransferFromPda { amount }.pack(),
    })
}

// =============================================================================
// UNIT TESTS
// =============================================================================
