//! # Token Metadata
//!
//! A minimal metadata program: it stores one name/symbol/uri record per
//! mint. Records are owned by this program, not by the token program that
//! owns the mint, and live at
//!
//! ```text
//! find_program_address(["metadata", metadata_program_id, mint], metadata_program_id)
//! ```
//!
//! Only the mint's current mint authority may create the record, and only
//! for mints owned by [`mint_program`].

pub mod entrypoint;
pub mod error;
pub mod instruction;
pub mod processor;
pub mod state;

pub use error::MetadataError;
pub use processor::Processor;
pub use state::Metadata;

use solana_program::pubkey::Pubkey;

solana_program::declare_id!("3cYb6MpdbYK7saKLHCTfGF5UZKmpTEfkHStweN4jnRRL");

/// The program that owns the mints this program describes.
///
/// A mint's data is only trusted when this program owns the account.
pub mod mint_program {
    solana_program::declare_id!("3AD55KAgU7rd7zJByNS4gHL3w9hmb6YcWXvC7VmWbtYC");
}

/// First seed of every metadata address.
pub const METADATA_SEED: &[u8] = b"metadata";

/// Metadata address for `mint` under this program.
pub fn find_metadata_address(mint: &Pubkey) -> (Pubkey, u8) {
    find_metadata_address_with_program(&id(), mint)
}

/// Metadata address for `mint` under an explicit metadata program id.
pub fn find_metadata_address_with_program(program_id: &Pubkey, mint: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[METADATA_SEED, program_id.as_ref(), mint.as_ref()],
        program_id,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metadata_address_is_deterministic_and_off_curve() {
        let mint = Pubkey::new_unique();
        let (a, bump_a) = find_metadata_address(&mint);
        let (b, bump_b) = find_metadata_address(&mint);
        assert_eq!((a, bump_a), (b, bump_b));
        assert!(!a.is_on_curve());
    }

    #[test]
    fn test_metadata_address_depends_on_program() {
        let mint = Pubkey::new_unique();
        let other = Pubkey::new_unique();
        assert_ne!(
            find_metadata_address(&mint).0,
            find_metadata_address_with_program(&other, &mint).0
        );
    }
}
