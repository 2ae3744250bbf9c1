//! Error taxonomy for registry operations.
//!
//! Every variant is an expected, recoverable condition. Errors are returned
//! directly to the caller; there is no retry or internal recovery, and a
//! failed operation leaves the registry unchanged.

use thiserror::Error;

use crate::types::{TokenAddress, TokenId};

/// Errors returned by registry operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RegistryError {
    /// The identifier or address has no live record.
    #[error("token not found")]
    TokenNotFound,
    /// Insert targeted an address already held by a live record.
    #[error("token already exists")]
    AlreadyExists,
    /// Reconstruction input contained the same identifier twice.
    #[error("invalid view: duplicate token ID {0}")]
    DuplicateId(TokenId),
    /// Reconstruction input contained the same address twice.
    #[error("invalid view: duplicate token address {0}")]
    DuplicateAddress(TokenAddress),
}

/// Result alias used throughout the registry crates.
pub type RegistryResult<T> = Result<T, RegistryError>;

/// Error parsing a [`TokenAddress`] from text or raw bytes.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AddressParseError {
    /// Decoded byte length did not match the fixed address width.
    #[error("invalid address length: expected {expected} bytes, got {actual}")]
    InvalidLength { expected: usize, actual: usize },
    /// Input contained characters outside the hex alphabet.
    #[error("invalid hex in address: {0}")]
    InvalidHex(#[from] hex::FromHexError),
}
