//! Authority Types
//!
//! Moving tokens out of a token account needs proof that the caller speaks
//! for the account's owner. There are two kinds of owner and two kinds of
//! proof:
//!
//! 1. **Wallet**: an ed25519 key. Proof is the key's signature on the
//!    transaction, captured as a [`WalletSigner`].
//! 2. **PDA**: an address with no private key. Proof is that this program
//!    can re-derive the address from its seed, captured as a
//!    [`ProgramAuthority`].
//!
//! Both implement [`TransferAuthority`], which is all the ledger sees.
//!
//! # Example Usage
//!
//! ```ignore
//! // Deposit: the wallet signed
//! let wallet = WalletSigner::new(authority_info)?;
//! ledger::transfer(&mut source, &mut dest, amount, &wallet)?;
//!
//! // Withdrawal: the program proves the vault by re-derivation
//! let vault = ProgramAuthority::verify(&deriver, VAULT_SEED, vault_info)?;
//! ledger::transfer(&mut source, &mut dest, amount, &vault)?;
//! ```

use crate::error::CustodyError;
use crate::pda::Deriver;
use crate::utils::assert_signer;
use solana_program::{account_info::AccountInfo, program_error::ProgramError, pubkey::Pubkey};

// =============================================================================
// TRANSFER AUTHORITY TRAIT
// =============================================================================

/// Something that has proven it may act for an owner key.
pub trait TransferAuthority {
    /// The owner key this authority speaks for.
    fn authority_key(&self) -> &Pubkey;
}

// =============================================================================
// WALLET SIGNER
// =============================================================================

/// A wallet that signed the current transaction.
///
/// Can only be built from an `AccountInfo` whose `is_signer` flag is set.
#[derive(Debug)]
pub struct WalletSigner<'a> {
    key: &'a Pubkey,
}

impl<'a> WalletSigner<'a> {
    /// # Errors
    ///
    /// `MissingRequiredSignature` if the account did not sign.
    pub fn new(account: &AccountInfo<'a>) -> Result<Self, ProgramError> {
        assert_signer(account)?;
        Ok(Self { key: account.key })
    }
}

impl TransferAuthority for WalletSigner<'_> {
    fn authority_key(&self) -> &Pubkey {
        self.key
    }
}

// =============================================================================
// PROGRAM AUTHORITY
// =============================================================================

/// Capability to act for a PDA of this program.
///
/// Holding one means the program has re-derived `key` from `seed` under
/// its own id. It carries the signer seeds needed for `invoke_signed` and
/// is the only source of them.
///
/// Constructors are crate-private, the fields are private, and the type is
/// neither `Clone` nor serializable: code outside the program cannot forge
/// one or hold on to one.
#[derive(Debug)]
pub struct ProgramAuthority {
    key: Pubkey,
    seed: &'static [u8],
    bump: [u8; 1],
}

impl ProgramAuthority {
    /// Derive the PDA for `seed` and take authority over it.
    pub(crate) fn derive(deriver: &Deriver, seed: &'static [u8]) -> Result<Self, CustodyError> {
        let (key, bump) = deriver.derive(&[seed])?;
        Ok(Self {
            key,
            seed,
            bump: [bump],
        })
    }

    /// Derive the PDA for `seed` and check that `account` is that PDA.
    ///
    /// # Errors
    ///
    /// `AuthorityMismatch` if the account is anything else.
    pub(crate) fn verify(
        deriver: &Deriver,
        seed: &'static [u8],
        account: &AccountInfo,
    ) -> Result<Self, CustodyError> {
        let authority = Self::derive(deriver, seed)?;
        if authority.key != *account.key {
            return Err(CustodyError::AuthorityMismatch);
        }
        Ok(authority)
    }

    pub fn key(&self) -> &Pubkey {
        &self.key
    }

    pub fn bump(&self) -> u8 {
        self.bump[0]
    }

    /// `[seed, [bump]]`, ready for `invoke_signed`.
    pub(crate) fn signer_seeds(&self) -> [&[u8]; 2] {
        [self.seed, &self.bump]
    }
}

impl TransferAuthority for ProgramAuthority {
    fn authority_key(&self) -> &Pubkey {
        &self.key
    }
}

// =============================================================================
// UNIT TESTS
// =============================================================================


/*
=============================================================================
DETAILED EXPLANATION
=============================================================================

THE ASYMMETRY BETWEEN THE TWO TRANSFERS
=======================================

TransferToPda (wallet -> vault):

    source.owner == wallet
    wallet.is_signer == true          <- the runtime verified a signature

TransferFromPda (vault -> wallet):

    source.owner == vault
    vault == derive(["pda"], program_id)  <- the program verified itself

Nobody can produce a signature for the vault, so the second check is the
only possible proof. It is also sufficient: only code running inside this
program can call ProgramAuthority::verify, and that code decides when to
release tokens.

WHY A TYPE AND NOT A BOOL?
==========================

A function that takes `&ProgramAuthority` cannot be called unless the
derivation already happened. There is no way to pass "true" by mistake,
and no public constructor for a client to misuse. Same for WalletSigner:
if you hold one, the signature check has run.

SIGNER SEEDS
============

invoke_signed(&ix, &accounts, &[&[b"mint", &[bump]]])

The runtime hashes these seeds with the calling program's id. If the
result equals an account in `ix`, that account is treated as a signer for
the call. signer_seeds() returns exactly this array, so the seeds used to
sign are always the seeds that were verified.
*/
