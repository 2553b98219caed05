//! Utility Modules
//!
//! Helpers shared by all processors.
//!
//! - `accounts`: PDA account creation and associated token accounts
//! - `assertions`: Ownership, signer and size checks plus checked math
//! - `authority`: Wallet and program authorities for transfers

pub mod accounts;
pub mod assertions;
pub mod authority;

pub use accounts::*;
pub use assertions::*;
pub use authority::*;
