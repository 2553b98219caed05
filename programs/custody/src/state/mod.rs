//! Account State Structures
//!
//! Data stored in accounts owned by the custody program.
//!
//! # Account Types
//!
//! | Type | Size | Address |
//! |------|------|---------|
//! | Mint | 46 bytes | PDA `["mint"]` |
//! | TokenAccount | 73 bytes | PDA `[owner, program_id, mint]` |
//! | Vault | 2 bytes | PDA `["pda"]` |
//!
//! # Serialization
//!
//! All structures use fixed-size, deterministic serialization:
//! - Little-endian for integers
//! - No padding between fields
//! - Same data always produces same bytes

// =============================================================================
// SUBMODULES
// =============================================================================

pub mod account;
pub mod mint;
pub mod vault;

// =============================================================================
// RE-EXPORTS
// =============================================================================

pub use account::{AccountState, TokenAccount};
pub use mint::Mint;
pub use vault::Vault;

use solana_program::program_error::ProgramError;

// =============================================================================
// PACK TRAIT
// =============================================================================

/// Trait for packing/unpacking account state to/from bytes.
///
/// # Example Implementation
///
/// ```ignore
/// impl Pack for MyState {
///     const LEN: usize = 40;
///
///     fn unpack(input: &[u8]) -> Result<Self, ProgramError> {
///         let input = array_ref![input, 0, Self::LEN];
///         // Parse fields...
///         Ok(MyState { ... })
///     }
///
///     fn pack(&self, output: &mut [u8]) -> Result<(), ProgramError> {
///         let output = array_mut_ref![output, 0, Self::LEN];
///         // Write fields...
///         Ok(())
///     }
/// }
/// ```
pub trait Pack: Sized {
    /// The fixed size in bytes when serialized.
    ///
    /// Also the space allocated when the account is created.
    const LEN: usize;

    /// Deserialize from a byte slice.
    ///
    /// # Panics
    /// May panic if input.len() < Self::LEN (use unpack_from_slice instead)
    fn unpack(input: &[u8]) -> Result<Self, ProgramError>;

    /// Serialize into a byte slice.
    fn pack(&self, output: &mut [u8]) -> Result<(), ProgramError>;

    /// Unpack with length validation.
    fn unpack_from_slice(src: &[u8]) -> Result<Self, ProgramError> {
        if src.len() != Self::LEN {
            return Err(ProgramError::InvalidAccountData);
        }
        Self::unpack(src)
    }

    /// Pack with length validation.
    fn pack_into_slice(&self, dst: &mut [u8]) -> Result<(), ProgramError> {
        if dst.len() != Self::LEN {
            return Err(ProgramError::InvalidAccountData);
        }
        self.pack(dst)
    }
}

// =============================================================================
// COPTION - COMPACT OPTIONAL TYPE
// =============================================================================

/// A compact optional type for on-chain storage.
///
/// # Layout
///
/// ```text
/// COption<Pubkey>: 36 bytes
/// [tag: 4 bytes, little-endian u32][value: 32 bytes]
///
/// Tag = 0: None (value bytes are zeros)
/// Tag = 1: Some (value bytes contain the Pubkey)
/// ```
///
/// Same layout as SPL Token, which is what lets the metadata program read
/// the mint authority of our mints.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct COption<T> {
    value: Option<T>,
}

impl<T> COption<T> {
    pub fn some(value: T) -> Self {
        Self { value: Some(value) }
    }

    pub fn none() -> Self {
        Self { value: None }
    }

    pub fn is_some(&self) -> bool {
        self.value.is_some()
    }

    pub fn is_none(&self) -> bool {
        self.value.is_none()
    }

    /// Get a reference to the inner value, if present.
    pub fn as_ref(&self) -> Option<&T> {
        self.value.as_ref()
    }
}
