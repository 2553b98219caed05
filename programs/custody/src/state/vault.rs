//! Vault Account State
//!
//! The vault is the PDA derived from `["pda"]`. Nobody holds its private
//! key; it owns a token account, and the program signs for it by
//! re-deriving the seed. The record itself only marks the PDA as
//! provisioned and remembers the canonical bump.

use crate::state::Pack;
use solana_program::program_error::ProgramError;

/// ```text
/// [0] is_initialized  bool
/// [1] bump            u8
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Vault {
    pub is_initialized: bool,
    pub bump: u8,
}

impl Pack for Vault {
    const LEN: usize = 2;

    fn unpack(input: &[u8]) -> Result<Self, ProgramError> {
        let is_initialized = match input[0] {
            0 => false,
            1 => true,
            _ => return Err(ProgramError::InvalidAccountData),
        };
        Ok(Vault {
            is_initialized,
            bump: input[1],
        })
    }

    fn pack(&self, output: &mut [u8]) -> Result<(), ProgramError> {
        output[0] = self.is_initialized as u8;
        output[1] = self.bump;
        Ok(())
    }
}
