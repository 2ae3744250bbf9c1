//! Public types for the tokenreg unified API.
//!
//! This module re-exports types from internal crates with a clean public
//! interface.

// Identity and projection types
pub use tokenreg_core::{TokenAddress, TokenId, TokenView, ADDRESS_LEN};

// Error taxonomy
pub use tokenreg_core::{AddressParseError, RegistryError, RegistryResult};
