//! External projection of a token record.

use serde::{Deserialize, Serialize};

use crate::types::{TokenAddress, TokenId};

/// Flattened, self-contained copy of one token record.
///
/// Views are what the registry hands out on lookups and snapshots, and what
/// it consumes when reconstructing from a snapshot. A view carries no mapping
/// state and never aliases registry internals.
///
/// The serialized field names are a stability contract with external
/// collaborators (persistence, ingestion, presentation) and must not change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenView {
    /// Permanent identifier.
    pub id: TokenId,
    /// On-chain address.
    pub address: TokenAddress,
    /// Human-readable token name.
    pub name: String,
    /// Ticker symbol.
    pub symbol: String,
    /// Number of decimal places in the token's smallest unit.
    pub decimals: u8,
    /// Fee taken on transfer, as a percentage. Mutable after creation.
    pub fee_on_transfer_percent: f64,
    /// Estimated gas needed to transfer this token. Mutable after creation.
    pub gas_for_transfer: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> TokenView {
        TokenView {
            id: TokenId::new(7),
            address: TokenAddress::new([0x42; 20]),
            name: "Wrapped Ether".to_string(),
            symbol: "WETH".to_string(),
            decimals: 18,
            fee_on_transfer_percent: 0.5,
            gas_for_transfer: 65_000,
        }
    }

    // The external field names are load-bearing: persistence and API layers
    // depend on them verbatim.
    #[test]
    fn serialized_field_names_are_stable() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": 7,
                "address": "0x4242424242424242424242424242424242424242",
                "name": "Wrapped Ether",
                "symbol": "WETH",
                "decimals": 18,
                "feeOnTransferPercent": 0.5,
                "gasForTransfer": 65_000,
            })
        );
    }

    #[test]
    fn json_roundtrip() {
        let view = sample();
        let json = serde_json::to_string(&view).unwrap();
        let back: TokenView = serde_json::from_str(&json).unwrap();
        assert_eq!(back, view);
    }
}
