//! Metadata Account State
//!
//! One [`Metadata`] record per mint, stored at the address derived from
//! `["metadata", metadata_program_id, mint]` under the metadata program.
//!
//! # Size: 319 bytes
//!
//! ```text
//! ┌────────┬──────┬──────────────────┬──────────────────────────────┐
//! │ Offset │ Size │ Field            │ Type                         │
//! ├────────┼──────┼──────────────────┼──────────────────────────────┤
//! │ 0      │ 1    │ is_initialized   │ bool                         │
//! │ 1      │ 32   │ update_authority │ Pubkey                       │
//! │ 33     │ 32   │ mint             │ Pubkey                       │
//! │ 65     │ 36   │ name             │ u32 len + 32 bytes           │
//! │ 101    │ 14   │ symbol           │ u32 len + 10 bytes           │
//! │ 115    │ 204  │ uri              │ u32 len + 200 bytes          │
//! └────────┴──────┴──────────────────┴──────────────────────────────┘
//! ```

use crate::error::MetadataError;
use arrayref::{array_mut_ref, array_ref, array_refs, mut_array_refs};
use solana_program::{
    program_error::ProgramError,
    program_pack::{IsInitialized, Pack, Sealed},
    pubkey::Pubkey,
};

/// Maximum length of the token name in bytes.
pub const MAX_NAME_LENGTH: usize = 32;

/// Maximum length of the token symbol in bytes.
pub const MAX_SYMBOL_LENGTH: usize = 10;

/// Maximum length of the metadata URI in bytes.
pub const MAX_URI_LENGTH: usize = 200;

/// Descriptive record attached to a mint.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Metadata {
    pub is_initialized: bool,
    /// Who may update the record. Nothing updates it today.
    pub update_authority: Pubkey,
    pub mint: Pubkey,
    pub name: String,
    pub symbol: String,
    pub uri: String,
}

impl Metadata {
    /// Validate string limits before anything is written.
    pub fn check_lengths(name: &str, symbol: &str, uri: &str) -> Result<(), MetadataError> {
        if name.len() > MAX_NAME_LENGTH {
            return Err(MetadataError::NameTooLong);
        }
        if symbol.len() > MAX_SYMBOL_LENGTH {
            return Err(MetadataError::SymbolTooLong);
        }
        if uri.len() > MAX_URI_LENGTH {
            return Err(MetadataError::UriTooLong);
        }
        Ok(())
    }
}

impl Sealed for Metadata {}

impl IsInitialized for Metadata {
    fn is_initialized(&self) -> bool {
        self.is_initialized
    }
}

impl Pack for Metadata {
    const LEN: usize = 319;

    fn unpack_from_slice(src: &[u8]) -> Result<Self, ProgramError> {
        let src = array_ref![src, 0, Metadata::LEN];
        #[allow(clippy::ptr_offset_with_cast)]
        let (is_initialized, update_authority, mint, name, symbol, uri) =
            array_refs![src, 1, 32, 32, 4 + MAX_NAME_LENGTH, 4 + MAX_SYMBOL_LENGTH, 4 + MAX_URI_LENGTH];

        let is_initialized = match is_initialized[0] {
            0 => false,
            1 => true,
            _ => return Err(ProgramError::InvalidAccountData),
        };

        Ok(Metadata {
            is_initialized,
            update_authority: Pubkey::new_from_array(*update_authority),
            mint: Pubkey::new_from_array(*mint),
            name: unpack_str(name)?,
            symbol: unpack_str(symbol)?,
            uri: unpack_str(uri)?,
        })
    }

    fn pack_into_slice(&self, dst: &mut [u8]) {
        let dst = array_mut_ref![dst, 0, Metadata::LEN];
        #[allow(clippy::ptr_offset_with_cast)]
        let (is_initialized_dst, update_authority_dst, mint_dst, name_dst, symbol_dst, uri_dst) =
            mut_array_refs![dst, 1, 32, 32, 4 + MAX_NAME_LENGTH, 4 + MAX_SYMBOL_LENGTH, 4 + MAX_URI_LENGTH];

        is_initialized_dst[0] = self.is_initialized as u8;
        update_authority_dst.copy_from_slice(self.update_authority.as_ref());
        mint_dst.copy_from_slice(self.mint.as_ref());
        pack_str(&self.name, name_dst);
        pack_str(&self.symbol, symbol_dst);
        pack_str(&self.uri, uri_dst);
    }
}

/// Read a `u32` length prefix followed by a zero-padded buffer.
fn unpack_str(src: &[u8]) -> Result<String, ProgramError> {
    let (len, body) = src.split_at(4);
    let len = u32::from_le_bytes([len[0], len[1], len[2], len[3]]) as usize;
    if len > body.len() {
        return Err(ProgramError::InvalidAccountData);
    }
    String::from_utf8(body[..len].to_vec()).map_err(|_| ProgramError::InvalidAccountData)
}

/// Write a `u32` length prefix and zero-pad the rest of the buffer.
///
/// Callers validate lengths first; anything longer is truncated.
fn pack_str(value: &str, dst: &mut [u8]) {
    let (len_dst, body) = dst.split_at_mut(4);
    let bytes = value.as_bytes();
    let len = bytes.len().min(body.len());
    len_dst.copy_from_slice(&(len as u32).to_le_bytes());
    body.fill(0);
    body[..len].copy_from_slice(&bytes[..len]);
}

// =============================================================================
// MINT AUTHORITY VIEW
// =============================================================================

/// The leading fields of a mint account, in the SPL Token mint layout.
///
/// ```text
/// [0..36]  mint_authority  COption<Pubkey> (u32 tag + 32 bytes)
/// [36..44] supply          u64
/// [44]     decimals        u8
/// [45]     is_initialized  bool
/// ```
///
/// Only what the metadata program needs is decoded, so any token program
/// sharing this prefix can be used as the mint.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MintAuthorityView {
    pub mint_authority: Option<Pubkey>,
    pub is_initialized: bool,
}

impl MintAuthorityView {
    /// Bytes of the mint layout that are decoded.
    pub const PREFIX_LEN: usize = 46;

    pub fn read(data: &[u8]) -> Result<Self, ProgramError> {
        if data.len() < Self::PREFIX_LEN {
            return Err(ProgramError::InvalidAccountData);
        }
        let data = array_ref![data, 0, MintAuthorityView::PREFIX_LEN];
        #[allow(clippy::ptr_offset_with_cast)]
        let (tag, authority, _supply, _decimals, is_initialized) =
            array_refs![data, 4, 32, 8, 1, 1];

        let mint_authority = match u32::from_le_bytes(*tag) {
            0 => None,
            1 => Some(Pubkey::new_from_array(*authority)),
            _ => return Err(ProgramError::InvalidAccountData),
        };

        Ok(Self {
            mint_authority,
            is_initialized: is_initialized[0] != 0,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Metadata {
        Metadata {
            is_initialized: true,
            update_authority: Pubkey::new_unique(),
            mint: Pubkey::new_unique(),
            name: "Insomnia Token".to_string(),
            symbol: "INSOMNIA".to_string(),
            uri: "https://example.com/insomnia.json".to_string(),
        }
    }

    #[test]
    fn test_metadata_pack_unpack() {
        let metadata = sample();
        let mut buf = vec![0u8; Metadata::LEN];
        Metadata::pack(metadata.clone(), &mut buf).unwrap();

        let unpacked = Metadata::unpack(&buf).unwrap();
        assert_eq!(unpacked, metadata);
    }

    #[test]
    fn test_metadata_uninitialized_rejected_by_unpack() {
        let buf = vec![0u8; Metadata::LEN];
        assert!(Metadata::unpack(&buf).is_err());
        assert!(!Metadata::unpack_unchecked(&buf).unwrap().is_initialized);
    }

    #[test]
    fn test_metadata_wrong_length() {
        let buf = vec![0u8; Metadata::LEN - 1];
        assert_eq!(
            Metadata::unpack(&buf),
            Err(ProgramError::InvalidAccountData)
        );
    }

    #[test]
    fn test_check_lengths() {
        assert!(Metadata::check_lengths("a", "b", "c").is_ok());
        assert_eq!(
            Metadata::check_lengths(&"n".repeat(MAX_NAME_LENGTH + 1), "", ""),
            Err(MetadataError::NameTooLong)
        );
        assert_eq!(
            Metadata::check_lengths("", &"s".repeat(MAX_SYMBOL_LENGTH + 1), ""),
            Err(MetadataError::SymbolTooLong)
        );
        assert_eq!(
            Metadata::check_lengths("", "", &"u".repeat(MAX_URI_LENGTH + 1)),
            Err(MetadataError::UriTooLong)
        );
    }

    #[test]
    fn test_mint_authority_view() {
        let authority = Pubkey::new_unique();
        let mut data = vec![0u8; 46];
        data[0..4].copy_from_slice(&1u32.to_le_bytes());
        data[4..36].copy_from_slice(authority.as_ref());
        data[44] = 9;
        data[45] = 1;

        let view = MintAuthorityView::read(&data).unwrap();
        assert_eq!(view.mint_authority, Some(authority));
        assert!(view.is_initialized);
    }

    #[test]
    fn test_mint_authority_view_rejects_short_and_bad_tag() {
        assert!(MintAuthorityView::read(&[0u8; 10]).is_err());

        let mut data = vec![0u8; 46];
        data[0] = 7;
        assert!(MintAuthorityView::read(&data).is_err());
    }
}
