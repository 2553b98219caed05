//! Mint Account State
//!
//! The mint defines the custody token. There is exactly one per program,
//! at the PDA derived from `["mint"]`, and the mint is its own mint
//! authority: only this program, re-deriving that seed, can mint.
//!
//! # Size: 46 bytes
//!
//! The layout is the leading 46 bytes of an SPL Token mint (the trailing
//! freeze authority is not carried). The metadata program relies on this to
//! read `mint_authority` and `is_initialized`.

use crate::error::CustodyError;
use crate::state::{COption, Pack};
use arrayref::{array_mut_ref, array_ref, array_refs, mut_array_refs};
use solana_program::{program_error::ProgramError, pubkey::Pubkey};

// =============================================================================
// MINT STRUCTURE
// =============================================================================

/// Mint account data structure.
///
/// # Memory Layout (46 bytes total)
///
/// ```text
/// ┌─────────────────────────────────────────────────────────────────┐
/// │ Offset │ Size │ Field            │ Type                        │
/// ├────────┼──────┼──────────────────┼─────────────────────────────┤
/// │ 0      │ 36   │ mint_authority   │ COption<Pubkey>             │
/// │ 36     │ 8    │ supply           │ u64                         │
/// │ 44     │ 1    │ decimals         │ u8                          │
/// │ 45     │ 1    │ is_initialized   │ bool (0 or 1)               │
/// └─────────────────────────────────────────────────────────────────┘
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Mint {
    /// The authority that can mint new tokens.
    ///
    /// Always the mint PDA itself once initialized.
    pub mint_authority: COption<Pubkey>,

    /// Total number of base units in existence.
    ///
    /// # Invariant
    ///
    /// ```text
    /// supply == SUM(all token accounts for this mint).amount
    /// ```
    ///
    /// Only MintTokens changes it; transfers move units without creating
    /// or destroying any.
    pub supply: u64,

    /// Number of decimal places for display purposes.
    ///
    /// Fixed at InitToken. With 9 decimals, 10 tokens are
    /// `10 * 10^9 = 10_000_000_000` base units.
    pub decimals: u8,

    /// Whether InitToken has run.
    ///
    /// A freshly allocated account is all zeros, which would otherwise
    /// parse as a valid mint with no authority.
    pub is_initialized: bool,
}

// =============================================================================
// PACK TRAIT IMPLEMENTATION
// =============================================================================

impl Pack for Mint {
    const LEN: usize = 46;

    fn unpack(input: &[u8]) -> Result<Self, ProgramError> {
        let input = array_ref![input, 0, Mint::LEN];

        // 36 + 8 + 1 + 1 = 46
        #[allow(clippy::ptr_offset_with_cast)]
        let (mint_authority_bytes, supply_bytes, decimals_bytes, is_initialized_bytes) =
            array_refs![input, 36, 8, 1, 1];

        let mint_authority = unpack_coption_pubkey(mint_authority_bytes)?;
        let supply = u64::from_le_bytes(*supply_bytes);
        let decimals = decimals_bytes[0];
        let is_initialized = match is_initialized_bytes[0] {
            0 => false,
            1 => true,
            _ => return Err(ProgramError::InvalidAccountData),
        };

        Ok(Mint {
            mint_authority,
            supply,
            decimals,
            is_initialized,
        })
    }

    fn pack(&self, output: &mut [u8]) -> Result<(), ProgramError> {
        let output = array_mut_ref![output, 0, Mint::LEN];

        #[allow(clippy::ptr_offset_with_cast)]
        let (mint_authority_dst, supply_dst, decimals_dst, is_initialized_dst) =
            mut_array_refs![output, 36, 8, 1, 1];

        pack_coption_pubkey(&self.mint_authority, mint_authority_dst);
        *supply_dst = self.supply.to_le_bytes();
        decimals_dst[0] = self.decimals;
        is_initialized_dst[0] = self.is_initialized as u8;

        Ok(())
    }
}

// =============================================================================
// HELPER FUNCTIONS FOR COPTION<PUBKEY>
// =============================================================================

/// Unpack a COption<Pubkey> from 36 bytes.
///
/// Tag 0 is None, tag 1 is Some, anything else is rejected.
fn unpack_coption_pubkey(src: &[u8; 36]) -> Result<COption<Pubkey>, ProgramError> {
    let (tag, body) = array_refs![src, 4, 32];
    match u32::from_le_bytes(*tag) {
        0 => Ok(COption::none()),
        1 => Ok(COption::some(Pubkey::new_from_array(*body))),
        _ => Err(CustodyError::InvalidInstruction.into()),
    }
}

/// Pack a COption<Pubkey> into 36 bytes (body zeroed for None).
fn pack_coption_pubkey(src: &COption<Pubkey>, dst: &mut [u8; 36]) {
    let (tag, body) = mut_array_refs![dst, 4, 32];
    match src.as_ref() {
        Some(pubkey) => {
            *tag = 1u32.to_le_bytes();
            body.copy_from_slice(pubkey.as_ref());
        }
        None => {
            *tag = [0u8; 4];
            *body = [0u8; 32];
        }
    }
}

// =============================================================================
// UNIT TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mint_pack_unpack_roundtrip() {
        let mint = Mint {
            mint_authority: COption::some(Pubkey::new_unique()),
            supply: 10_000_000_000,
            decimals: 9,
            is_initialized: true,
        };

        let mut buf = [0u8; Mint::LEN];
        mint.pack_into_slice(&mut buf).unwrap();
        assert_eq!(Mint::unpack_from_slice(&buf).unwrap(), mint);
    }

    #[test]
    fn test_mint_zeroed_is_uninitialized() {
        let mint = Mint::unpack_from_slice(&[0u8; Mint::LEN]).unwrap();
        assert!(!mint.is_initialized);
        assert!(mint.mint_authority.is_none());
        assert_eq!(mint.supply, 0);
    }

    #[test]
    fn test_mint_wrong_size() {
        assert!(Mint::unpack_from_slice(&[0u8; 82]).is_err());
        let mut small = [0u8; 10];
        assert!(Mint::default().pack_into_slice(&mut small).is_err());
    }

    #[test]
    fn test_mint_invalid_coption_tag() {
        let mut buf = [0u8; Mint::LEN];
        buf[0] = 2;
        assert!(Mint::unpack_from_slice(&buf).is_err());
    }

    #[test]
    fn test_mint_layout_matches_spl_prefix() {
        let authority = Pubkey::new_unique();
        let mint = Mint {
            mint_authority: COption::some(authority),
            supply: 42,
            decimals: 9,
            is_initialized: true,
        };
        let mut buf = [0u8; Mint::LEN];
        mint.pack_into_slice(&mut buf).unwrap();

        let view = token_metadata::state::MintAuthorityView::read(&buf).unwrap();
        assert_eq!(view.mint_authority, Some(authority));
        assert!(view.is_initialized);
    }
}
