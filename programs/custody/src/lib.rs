//! # PDA Token Custody
//!
//! A native Solana program that keeps tokens in custody under a program
//! derived address.
//!
//! ## Overview
//!
//! - One token mint at the PDA `["mint"]`, which is also its own mint
//!   authority, with a metadata record held by the separate
//!   `token_metadata` program
//! - Associated token accounts at `[owner, program_id, mint]`, created the
//!   first time tokens are sent to an owner
//! - A vault at the PDA `["pda"]` that owns a token account and is only
//!   ever controlled by this program's own logic
//!
//! Deposits into the vault are authorized by the depositing wallet's
//! signature. Withdrawals from the vault are authorized by the program
//! re-deriving the vault address; there is no key that could sign for it.
//!
//! ## Account Types
//!
//! | Account Type | Size | Description |
//! |--------------|------|-------------|
//! | Mint | 46 bytes | Defines the custody token |
//! | TokenAccount | 73 bytes | Holds tokens for an owner |
//! | Vault | 2 bytes | Marks the vault PDA as provisioned |
//!
//! ## Instructions
//!
//! | # | Instruction | Description |
//! |---|-------------|-------------|
//! | 0 | InitToken | Create the mint and its metadata |
//! | 1 | MintTokens | Mint to an owner's token account |
//! | 2 | InitPda | Create the vault and its token account |
//! | 3 | TransferToPda | Wallet deposits into the vault |
//! | 4 | TransferFromPda | Vault pays out to a token account |

// =============================================================================
// MODULE DECLARATIONS
// =============================================================================

/// Program entrypoint - where Solana calls into our program
pub mod entrypoint;

/// Custom error types with unique codes
pub mod error;

/// Instruction definitions, parsing and client-side builders
pub mod instruction;

/// State transitions on unpacked accounts
pub mod ledger;

/// Balance lookups for clients
pub mod oracle;

/// Program derived addresses and their seeds
pub mod pda;

/// Instruction processors (business logic)
pub mod processor;

/// Account state structures (Mint, TokenAccount, Vault)
pub mod state;

/// Validation, authority and account creation helpers
pub mod utils;

// =============================================================================
// RE-EXPORTS
// =============================================================================

pub use error::CustodyError;
pub use instruction::{CustodyInstruction, InitTokenParams};
pub use pda::Deriver;
pub use processor::Processor;
pub use state::{AccountState, Mint, Pack, TokenAccount, Vault};

// =============================================================================
// PROGRAM ID
// =============================================================================

solana_program::declare_id!("3AD55KAgU7rd7zJByNS4gHL3w9hmb6YcWXvC7VmWbtYC");
