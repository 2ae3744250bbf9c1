//! Reader/writer-locked wrapper around one [`TokenRegistry`].
//!
//! Every mutation takes the write lock for its full duration, so at most one
//! mutation is in flight and no reader ever observes a half-applied change.
//! Read-only operations take the read lock and run in parallel with each
//! other. The registry is owned exclusively by its service and is never
//! touched outside a held lock.

use std::fmt;

use parking_lot::RwLock;
use tokenreg_core::{RegistryResult, TokenAddress, TokenId, TokenView};
use tokenreg_storage::TokenRegistry;

/// Thread-safe handle to a token registry.
///
/// `TokenService` is `Send + Sync`; share it across threads via `Arc`. Lock
/// acquisition provides the only ordering guarantee: a reader that acquires
/// the lock after a write released it observes that write's full effect.
pub struct TokenService {
    registry: RwLock<TokenRegistry>,
}

impl TokenService {
    /// Create a service over an empty registry.
    pub fn new() -> Self {
        TokenService {
            registry: RwLock::new(TokenRegistry::new()),
        }
    }

    /// Create a service over an empty registry with pre-allocated capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        TokenService {
            registry: RwLock::new(TokenRegistry::with_capacity(capacity)),
        }
    }

    /// Reconstruct a service from a snapshot.
    ///
    /// Validation runs before the lock (or the service) exists, so no
    /// concurrent access is possible; on failure no handle is exposed.
    ///
    /// # Errors
    ///
    /// Propagates [`TokenRegistry::from_views`] errors unchanged.
    pub fn from_views(views: &[TokenView]) -> RegistryResult<Self> {
        let registry = TokenRegistry::from_views(views)?;
        Ok(TokenService {
            registry: RwLock::new(registry),
        })
    }

    /// Insert a new token. Takes the write lock.
    ///
    /// # Errors
    ///
    /// [`tokenreg_core::RegistryError::AlreadyExists`] if the address is live.
    pub fn insert(
        &self,
        address: TokenAddress,
        name: impl Into<String>,
        symbol: impl Into<String>,
        decimals: u8,
    ) -> RegistryResult<TokenId> {
        let id = self.registry.write().insert(address, name, symbol, decimals)?;
        tracing::debug!(target: "tokenreg::service", %id, %address, "token inserted");
        Ok(id)
    }

    /// Delete a token by id. Takes the write lock.
    ///
    /// # Errors
    ///
    /// [`tokenreg_core::RegistryError::TokenNotFound`] if the id is absent.
    pub fn delete(&self, id: TokenId) -> RegistryResult<()> {
        self.registry.write().delete(id)?;
        tracing::debug!(target: "tokenreg::service", %id, "token deleted");
        Ok(())
    }

    /// Overwrite a token's mutable fields. Takes the write lock.
    ///
    /// # Errors
    ///
    /// [`tokenreg_core::RegistryError::TokenNotFound`] if the id is absent.
    pub fn update(
        &self,
        id: TokenId,
        fee_on_transfer_percent: f64,
        gas_for_transfer: u64,
    ) -> RegistryResult<()> {
        self.registry
            .write()
            .update(id, fee_on_transfer_percent, gas_for_transfer)?;
        tracing::trace!(target: "tokenreg::service", %id, "token updated");
        Ok(())
    }

    /// Look up a token by id. Takes the read lock.
    ///
    /// # Errors
    ///
    /// [`tokenreg_core::RegistryError::TokenNotFound`] if the id is absent.
    pub fn get_by_id(&self, id: TokenId) -> RegistryResult<TokenView> {
        self.registry.read().get_by_id(id)
    }

    /// Look up a token by address. Takes the read lock.
    ///
    /// # Errors
    ///
    /// [`tokenreg_core::RegistryError::TokenNotFound`] if the address is absent.
    pub fn get_by_address(&self, address: TokenAddress) -> RegistryResult<TokenView> {
        self.registry.read().get_by_address(address)
    }

    /// Snapshot every live record. Takes the read lock.
    pub fn view_all(&self) -> Vec<TokenView> {
        self.registry.read().view_all()
    }

    /// Number of live records. Takes the read lock.
    pub fn len(&self) -> usize {
        self.registry.read().len()
    }

    /// Whether the registry holds no live records. Takes the read lock.
    pub fn is_empty(&self) -> bool {
        self.registry.read().is_empty()
    }
}

impl Default for TokenService {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for TokenService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenService")
            .field("len", &self.len())
            .finish()
    }
}
