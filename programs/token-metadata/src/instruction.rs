//! Instruction Types
//!
//! ```text
//! [discriminant: u8][data: varies]
//! ```
//!
//! | Value | Instruction |
//! |-------|-------------|
//! | 0 | CreateMetadata |
//!
//! Strings are encoded as a little-endian `u32` byte length followed by
//! the UTF-8 bytes.

use crate::error::MetadataError;
use solana_program::{
    instruction::{AccountMeta, Instruction},
    program_error::ProgramError,
    pubkey::Pubkey,
    system_program, sysvar,
};

/// All instructions supported by the metadata program.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MetadataInstruction {
    /// Create the metadata record for a mint.
    ///
    /// # Account Requirements
    ///
    /// | # | Account | Writable | Signer | Description |
    /// |---|---------|----------|--------|-------------|
    /// | 0 | metadata | ✓ | | Derived metadata address |
    /// | 1 | mint | | | The mint being described |
    /// | 2 | mint_authority | | ✓ | Current mint authority of `mint` |
    /// | 3 | payer | ✓ | ✓ | Funds the new account |
    /// | 4 | update_authority | | | Recorded as update authority |
    /// | 5 | system_program | | | System program |
    /// | 6 | rent | | | Rent sysvar |
    CreateMetadata {
        name: String,
        symbol: String,
        uri: String,
    },
}

impl MetadataInstruction {
    pub fn unpack(input: &[u8]) -> Result<Self, ProgramError> {
        let (&discriminant, rest) = input
            .split_first()
            .ok_or(MetadataError::InvalidInstruction)?;

        Ok(match discriminant {
            0 => {
                let (name, rest) = unpack_string(rest).ok_or(MetadataError::InvalidInstruction)?;
                let (symbol, rest) = unpack_string(rest).ok_or(MetadataError::InvalidInstruction)?;
                let (uri, rest) = unpack_string(rest).ok_or(MetadataError::InvalidInstruction)?;
                if !rest.is_empty() {
                    return Err(MetadataError::InvalidInstruction.into());
                }
                MetadataInstruction::CreateMetadata { name, symbol, uri }
            }
            _ => return Err(MetadataError::InvalidInstruction.into()),
        })
    }

    pub fn pack(&self) -> Vec<u8> {
        let mut buf = Vec::new();
        match self {
            MetadataInstruction::CreateMetadata { name, symbol, uri } => {
                buf.push(0);
                pack_string(name, &mut buf);
                pack_string(symbol, &mut buf);
                pack_string(uri, &mut buf);
            }
        }
        buf
    }
}

/// Read one length-prefixed UTF-8 string off the front of `input`.
///
/// Returns the string and the bytes after it, or `None` if the prefix or
/// the body is truncated or the body is not UTF-8.
pub fn unpack_string(input: &[u8]) -> Option<(String, &[u8])> {
    let len = input.get(..4)?;
    let len = u32::from_le_bytes([len[0], len[1], len[2], len[3]]) as usize;
    let rest = &input[4..];
    let bytes = rest.get(..len)?;
    let value = String::from_utf8(bytes.to_vec()).ok()?;
    Some((value, &rest[len..]))
}

/// Append `value` as a `u32` little-endian length followed by its bytes.
pub fn pack_string(value: &str, buf: &mut Vec<u8>) {
    buf.extend_from_slice(&(value.len() as u32).to_le_bytes());
    buf.extend_from_slice(value.as_bytes());
}

/// Build a `CreateMetadata` instruction.
#[allow(clippy::too_many_arguments)]
pub fn create_metadata(
    program_id: &Pubkey,
    metadata: &Pubkey,
    mint: &Pubkey,
    mint_authority: &Pubkey,
    payer: &Pubkey,
    update_authority: &Pubkey,
    name: String,
    symbol: String,
    uri: String,
) -> Instruction {
    Instruction {
        program_id: *program_id,
        accounts: vec![
            AccountMeta::new(*metadata, false),
            AccountMeta::new_readonly(*mint, false),
            AccountMeta::new_readonly(*mint_authority, true),
            AccountMeta::new(*payer, true),
            AccountMeta::new_readonly(*update_authority, false),
            AccountMeta::new_readonly(system_program::id(), false),
            AccountMeta::new_readonly(sysvar::rent::id(), false),
        ],
        data: MetadataInstruction::CreateMetadata { name, symbol, uri }.pack(),
    }
}
