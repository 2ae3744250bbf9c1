//! Identity types: permanent token ids and on-chain addresses.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::AddressParseError;

/// Number of bytes in a token address.
pub const ADDRESS_LEN: usize = 20;

/// Stable, permanent identifier for a registered token.
///
/// Ids are assigned from a strictly increasing counter starting at 1. Once an
/// id has been handed out it is never reassigned to a different token, even
/// after the original record is deleted. 0 is never a valid id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TokenId(u64);

impl TokenId {
    /// Wrap a raw id value.
    pub const fn new(raw: u64) -> Self {
        TokenId(raw)
    }

    /// The raw id value.
    pub const fn as_u64(self) -> u64 {
        self.0
    }
}

impl From<u64> for TokenId {
    fn from(raw: u64) -> Self {
        TokenId(raw)
    }
}

impl From<TokenId> for u64 {
    fn from(id: TokenId) -> Self {
        id.0
    }
}

impl fmt::Display for TokenId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Fixed-width on-chain token address.
///
/// Externally rendered as a 0x-prefixed lowercase hex string; parsing accepts
/// the prefix as optional. Equality and hashing are over the raw bytes.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct TokenAddress([u8; ADDRESS_LEN]);

impl TokenAddress {
    /// Wrap a raw address.
    pub const fn new(bytes: [u8; ADDRESS_LEN]) -> Self {
        TokenAddress(bytes)
    }

    /// Build an address from a byte slice, checking its length.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, AddressParseError> {
        let bytes: [u8; ADDRESS_LEN] =
            bytes
                .try_into()
                .map_err(|_| AddressParseError::InvalidLength {
                    expected: ADDRESS_LEN,
                    actual: bytes.len(),
                })?;
        Ok(TokenAddress(bytes))
    }

    /// The raw address bytes.
    pub const fn as_bytes(&self) -> &[u8; ADDRESS_LEN] {
        &self.0
    }
}

impl From<[u8; ADDRESS_LEN]> for TokenAddress {
    fn from(bytes: [u8; ADDRESS_LEN]) -> Self {
        TokenAddress(bytes)
    }
}

impl fmt::Display for TokenAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

impl fmt::Debug for TokenAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TokenAddress({self})")
    }
}

impl FromStr for TokenAddress {
    type Err = AddressParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")).unwrap_or(s);
        let bytes = hex::decode(digits)?;
        Self::from_slice(&bytes)
    }
}

impl Serialize for TokenAddress {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for TokenAddress {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
