//! Concurrent in-memory token registry.
//!
//! `tokenreg` maps token identities (a fixed-width on-chain address plus
//! metadata) to stable internal identifiers. Records live in a dense
//! struct-of-arrays store with O(1) insert, delete, update, and point
//! lookups; a reader/writer-locked service makes one store safe under
//! arbitrary concurrent callers.
//!
//! # Example
//!
//! ```
//! use tokenreg::{TokenAddress, TokenService};
//!
//! let service = TokenService::new();
//! let id = service.insert(TokenAddress::new([0x11; 20]), "Wrapped Ether", "WETH", 18)?;
//!
//! let view = service.get_by_id(id)?;
//! assert_eq!(view.symbol, "WETH");
//!
//! service.update(id, 0.3, 65_000)?;
//! assert_eq!(service.get_by_address(view.address)?.gas_for_transfer, 65_000);
//! # Ok::<(), tokenreg::RegistryError>(())
//! ```
//!
//! Single-threaded embedders can use [`TokenRegistry`] directly and skip the
//! locking layer.

pub mod types;

pub use tokenreg_core::{
    AddressParseError, RegistryError, RegistryResult, TokenAddress, TokenId, TokenView,
    ADDRESS_LEN,
};
pub use tokenreg_service::TokenService;
pub use tokenreg_storage::TokenRegistry;
