//! Metadata Program Errors
//!
//! Codes are the variant positions, so new variants go at the end.

use solana_program::program_error::ProgramError;
use thiserror::Error;

/// Errors that may be returned by the metadata program.
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum MetadataError {
    /// Error 0: Instruction data could not be parsed.
    #[error("Invalid instruction")]
    InvalidInstruction,

    /// Error 1: A metadata record already exists for this mint.
    #[error("Metadata already initialized")]
    AlreadyInitialized,

    /// Error 2: The metadata account is not the address derived from the mint.
    #[error("Metadata account does not match the derived address")]
    InvalidMetadataAddress,

    /// Error 3: The signer is not the mint authority stored in the mint.
    #[error("Invalid mint authority")]
    InvalidMintAuthority,

    /// Error 4: The mint has not been initialized yet.
    #[error("Mint is not initialized")]
    UninitializedMint,

    /// Error 5: `name` exceeds [`MAX_NAME_LENGTH`](crate::state::MAX_NAME_LENGTH).
    #[error("Name too long")]
    NameTooLong,

    /// Error 6: `symbol` exceeds [`MAX_SYMBOL_LENGTH`](crate::state::MAX_SYMBOL_LENGTH).
    #[error("Symbol too long")]
    SymbolTooLong,

    /// Error 7: `uri` exceeds [`MAX_URI_LENGTH`](crate::state::MAX_URI_LENGTH).
    #[error("URI too long")]
    UriTooLong,

    /// Error 8: The mint account is not owned by the mint program.
    #[error("Mint not owned by the mint program")]
    InvalidMintOwner,
}

impl From<MetadataError> for ProgramError {
    fn from(e: MetadataError) -> Self {
        ProgramError::Custom(e as u32)
    }
}
