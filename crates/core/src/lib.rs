//! Core types for the token registry.
//!
//! This crate holds the identity types ([`TokenId`], [`TokenAddress`]), the
//! external projection type ([`TokenView`]), and the error taxonomy shared by
//! the storage and service crates. It has no storage or locking logic of its
//! own.

pub mod error;
pub mod types;
pub mod view;

pub use error::{AddressParseError, RegistryError, RegistryResult};
pub use types::{TokenAddress, TokenId, ADDRESS_LEN};
pub use view::TokenView;
