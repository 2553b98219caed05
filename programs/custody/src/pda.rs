//! Program Derived Addresses
//!
//! Every account this program touches, apart from the wallets, lives at a
//! program derived address:
//!
//! | Address | Seeds | Deriver |
//! |---------|-------|---------|
//! | mint | `"mint"` | custody |
//! | vault | `"pda"` | custody |
//! | token account | `owner, custody_program_id, mint` | custody |
//! | metadata | `"metadata", metadata_program_id, mint` | metadata |
//!
//! The metadata record belongs to the metadata program, so its address is
//! derived under that program's id. [`Deriver`] keeps the two
//! configurations apart so a custody seed is never hashed under the
//! metadata program id or the other way round.

use crate::error::CustodyError;
use solana_program::pubkey::Pubkey;

// =============================================================================
// SEEDS
// =============================================================================

/// Seed of the metadata record (under the metadata program).
pub const METADATA_SEED: &[u8] = token_metadata::METADATA_SEED;

/// Seed of the mint, which is also its own mint authority.
pub const MINT_SEED: &[u8] = b"mint";

/// Seed of the vault that owns the custody token account.
pub const VAULT_SEED: &[u8] = b"pda";

// =============================================================================
// DERIVER
// =============================================================================

/// Derives addresses under one program id.
///
/// Pure: the same seeds and program id always give the same
/// `(address, bump)`, and the address is never on the ed25519 curve.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Deriver {
    program_id: Pubkey,
}

impl Deriver {
    /// Deriver for accounts owned by the custody program as declared.
    pub const CUSTODY: Deriver = Deriver::new(crate::ID);

    /// Deriver for records owned by the metadata program.
    pub const METADATA: Deriver = Deriver::new(token_metadata::ID);

    /// A deriver for an arbitrary program id.
    ///
    /// Processors build theirs from the `program_id` the runtime hands
    /// them, so the program works under whatever address it is deployed at.
    pub const fn new(program_id: Pubkey) -> Self {
        Self { program_id }
    }

    pub fn program_id(&self) -> &Pubkey {
        &self.program_id
    }

    /// Find the canonical `(address, bump)` for `seeds`.
    ///
    /// Searches bumps from 255 down to 0 and returns the first off-curve
    /// address.
    ///
    /// # Errors
    ///
    /// `DerivationExhausted` if no bump works.
    pub fn derive(&self, seeds: &[&[u8]]) -> Result<(Pubkey, u8), CustodyError> {
        Pubkey::try_find_program_address(seeds, &self.program_id)
            .ok_or(CustodyError::DerivationExhausted)
    }

    /// `["mint"]`
    pub fn mint_address(&self) -> Result<(Pubkey, u8), CustodyError> {
        self.derive(&[MINT_SEED])
    }

    /// `["pda"]`
    pub fn vault_address(&self) -> Result<(Pubkey, u8), CustodyError> {
        self.derive(&[VAULT_SEED])
    }

    /// `[owner, program_id, mint]`
    ///
    /// Same seed order as the SPL associated token account program, with
    /// this program standing in for the token program.
    pub fn associated_token_address(
        &self,
        owner: &Pubkey,
        mint: &Pubkey,
    ) -> Result<(Pubkey, u8), CustodyError> {
        self.derive(&[owner.as_ref(), self.program_id.as_ref(), mint.as_ref()])
    }

    /// `["metadata", program_id, mint]`
    ///
    /// Meaningful on the metadata deriver only.
    pub fn metadata_address(&self, mint: &Pubkey) -> Result<(Pubkey, u8), CustodyError> {
        self.derive(&[METADATA_SEED, self.program_id.as_ref(), mint.as_ref()])
    }
}

// =============================================================================
// CLIENT HELPERS
// =============================================================================

/// Mint address of the custody program.
pub fn find_mint_address() -> Result<(Pubkey, u8), CustodyError> {
    Deriver::CUSTODY.mint_address()
}

/// Vault address of the custody program.
pub fn find_vault_address() -> Result<(Pubkey, u8), CustodyError> {
    Deriver::CUSTODY.vault_address()
}

/// Associated token account of `owner` for `mint`.
pub fn find_associated_token_address(
    owner: &Pubkey,
    mint: &Pubkey,
) -> Result<(Pubkey, u8), CustodyError> {
    Deriver::CUSTODY.associated_token_address(owner, mint)
}

/// Metadata record address of `mint` under the metadata program.
pub fn find_metadata_address(mint: &Pubkey) -> Result<(Pubkey, u8), CustodyError> {
    Deriver::METADATA.metadata_address(mint)
}

// =============================================================================
// UNIT TESTS
// =============================================================================


/*
=============================================================================
DETAILED EXPLANATION
=============================================================================

WHAT MAKES AN ADDRESS "PROGRAM DERIVED"?
========================================

    address = sha256(seeds || [bump] || program_id || "ProgramDerivedAddress")

The result is accepted only if it is NOT a valid ed25519 point. A point on
the curve could have a private key; an off-curve address cannot, so no
wallet can ever sign for it.

find_program_address tries bump = 255, 254, ... until the hash lands off
the curve. That first bump is the canonical bump. Roughly half of all
hashes are off-curve, so the search almost always stops at 255 or 254.

WHO CAN SIGN FOR A PDA?
=======================

Only the program whose id went into the hash, and only by passing the
seeds and bump to invoke_signed. The runtime recomputes the address and
marks it as a signer for that one cross-program call.

In this program the vault and the mint never sign through a keypair:

    transfer-from-pda  -> ProgramAuthority for ["pda"]
    mint-tokens        -> ProgramAuthority for ["mint"]
    metadata CPI       -> invoke_signed with the ["mint"] seeds

WHY TWO DERIVERS?
=================

The metadata record is owned by the metadata program. If the custody
program derived it under its own id, the address would be valid but the
metadata program would refuse it. Deriver::CUSTODY and Deriver::METADATA
make the program id part of the value instead of an argument that can be
swapped by accident.
*/
