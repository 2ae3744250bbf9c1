//! Struct-of-arrays token store with dual index maps.
//!
//! Record fields live in parallel columns, one `Vec` per field; index `i`
//! across every column describes one logical record. Two `FxHashMap` layers
//! separate logical identity from physical position: a permanent id maps to
//! its current slot, and an address maps to its id. Deletion swap-and-pops,
//! so the columns stay dense at the cost of relocating at most one surviving
//! record — slot order is not stable across deletions.
//!
//! # Thread Safety
//!
//! `TokenRegistry` has no internal synchronization. Callers must serialize
//! access externally; the service crate does this with a single `RwLock`.

use std::fmt;

use rustc_hash::FxHashMap;
use tokenreg_core::{RegistryError, RegistryResult, TokenAddress, TokenId, TokenView};

/// Default column capacity for an empty registry.
const DEFAULT_CAPACITY: usize = 128;

/// Dense token store with O(1) mutation and lookup.
///
/// Invariants maintained across every operation:
/// - all columns have identical length;
/// - every live id maps to exactly one slot, and that slot's `id` column
///   entry equals the key;
/// - every live address maps to exactly one id, and that id's record holds
///   exactly that address;
/// - ids come from a strictly increasing counter starting at 1 and are never
///   reassigned, even after deletion.
#[derive(PartialEq)]
pub struct TokenRegistry {
    // Physical data storage, one column per field.
    address: Vec<TokenAddress>,
    name: Vec<String>,
    symbol: Vec<String>,
    decimals: Vec<u8>,
    fee_on_transfer_percent: Vec<f64>,
    gas_for_transfer: Vec<u64>,
    id: Vec<TokenId>,

    // Mapping layers separating logical id from physical slot.
    next_id: u64,
    id_to_slot: FxHashMap<TokenId, usize>,
    address_to_id: FxHashMap<TokenAddress, TokenId>,
}

impl TokenRegistry {
    /// Create an empty registry with the default capacity.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Create an empty registry with pre-allocated column capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        TokenRegistry {
            address: Vec::with_capacity(capacity),
            name: Vec::with_capacity(capacity),
            symbol: Vec::with_capacity(capacity),
            decimals: Vec::with_capacity(capacity),
            fee_on_transfer_percent: Vec::with_capacity(capacity),
            gas_for_transfer: Vec::with_capacity(capacity),
            id: Vec::with_capacity(capacity),
            // Ids start at 1 so 0 never names a live record
            next_id: 1,
            id_to_slot: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
            address_to_id: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
        }
    }

    /// Reconstruct a registry from a snapshot.
    ///
    /// Views are validated incrementally in input order, so the first
    /// duplicate encountered determines the error. On success the id counter
    /// resumes one past the largest id seen (1 for an empty snapshot).
    ///
    /// # Errors
    ///
    /// - [`RegistryError::DuplicateId`] if two views share an id
    /// - [`RegistryError::DuplicateAddress`] if two views share an address
    pub fn from_views(views: &[TokenView]) -> RegistryResult<Self> {
        let mut registry = Self::with_capacity(views.len());
        let mut max_id = 0u64;

        for view in views {
            if registry.id_to_slot.contains_key(&view.id) {
                return Err(RegistryError::DuplicateId(view.id));
            }
            if registry.address_to_id.contains_key(&view.address) {
                return Err(RegistryError::DuplicateAddress(view.address));
            }

            let slot = registry.id.len();
            registry.address.push(view.address);
            registry.name.push(view.name.clone());
            registry.symbol.push(view.symbol.clone());
            registry.decimals.push(view.decimals);
            registry.fee_on_transfer_percent.push(view.fee_on_transfer_percent);
            registry.gas_for_transfer.push(view.gas_for_transfer);
            registry.id.push(view.id);
            registry.id_to_slot.insert(view.id, slot);
            registry.address_to_id.insert(view.address, view.id);

            max_id = max_id.max(view.id.as_u64());
        }

        registry.next_id = max_id + 1;
        Ok(registry)
    }

    /// Insert a new token and assign it a permanent id.
    ///
    /// Fee and gas start at zero; use [`update`](Self::update) to set them.
    /// The id counter advances on every successful insert regardless of prior
    /// deletions, so ids are never reused.
    ///
    /// # Errors
    ///
    /// [`RegistryError::AlreadyExists`] if the address is already live. The
    /// registry is left unchanged and the id counter does not advance.
    pub fn insert(
        &mut self,
        address: TokenAddress,
        name: impl Into<String>,
        symbol: impl Into<String>,
        decimals: u8,
    ) -> RegistryResult<TokenId> {
        if self.address_to_id.contains_key(&address) {
            return Err(RegistryError::AlreadyExists);
        }

        let id = TokenId::new(self.next_id);
        self.next_id += 1;

        let slot = self.id.len();
        self.address.push(address);
        self.name.push(name.into());
        self.symbol.push(symbol.into());
        self.decimals.push(decimals);
        self.fee_on_transfer_percent.push(0.0);
        self.gas_for_transfer.push(0);
        self.id.push(id);

        self.id_to_slot.insert(id, slot);
        self.address_to_id.insert(address, id);

        Ok(id)
    }

    /// Delete a token by id, keeping the columns dense.
    ///
    /// A non-last slot is backfilled with the current last record, whose slot
    /// mapping is updated in O(1); every column then shrinks by one. Callers
    /// must not assume slot order survives a deletion.
    ///
    /// # Errors
    ///
    /// [`RegistryError::TokenNotFound`] if the id has no live record.
    pub fn delete(&mut self, id: TokenId) -> RegistryResult<()> {
        let slot = self
            .id_to_slot
            .remove(&id)
            .ok_or(RegistryError::TokenNotFound)?;
        let address = self.address[slot];
        let last = self.id.len() - 1;

        self.address.swap_remove(slot);
        self.name.swap_remove(slot);
        self.symbol.swap_remove(slot);
        self.decimals.swap_remove(slot);
        self.fee_on_transfer_percent.swap_remove(slot);
        self.gas_for_transfer.swap_remove(slot);
        self.id.swap_remove(slot);

        // The former last record now occupies the vacated slot
        if slot != last {
            self.id_to_slot.insert(self.id[slot], slot);
        }
        self.address_to_id.remove(&address);

        Ok(())
    }

    /// Overwrite the mutable fields of a token in place.
    ///
    /// Id, address, name, symbol, and decimals are immutable after creation;
    /// only the fee and gas columns can change.
    ///
    /// # Errors
    ///
    /// [`RegistryError::TokenNotFound`] if the id has no live record.
    pub fn update(
        &mut self,
        id: TokenId,
        fee_on_transfer_percent: f64,
        gas_for_transfer: u64,
    ) -> RegistryResult<()> {
        let slot = *self
            .id_to_slot
            .get(&id)
            .ok_or(RegistryError::TokenNotFound)?;
        self.fee_on_transfer_percent[slot] = fee_on_transfer_percent;
        self.gas_for_transfer[slot] = gas_for_transfer;
        Ok(())
    }

    /// Look up a token by its permanent id.
    ///
    /// # Errors
    ///
    /// [`RegistryError::TokenNotFound`] if the id has no live record.
    pub fn get_by_id(&self, id: TokenId) -> RegistryResult<TokenView> {
        let slot = *self
            .id_to_slot
            .get(&id)
            .ok_or(RegistryError::TokenNotFound)?;
        Ok(self.view_at(slot))
    }

    /// Look up a token by address, resolving address → id → slot.
    ///
    /// # Errors
    ///
    /// [`RegistryError::TokenNotFound`] if either resolution step fails.
    pub fn get_by_address(&self, address: TokenAddress) -> RegistryResult<TokenView> {
        let id = self
            .address_to_id
            .get(&address)
            .ok_or(RegistryError::TokenNotFound)?;
        let slot = *self
            .id_to_slot
            .get(id)
            .ok_or(RegistryError::TokenNotFound)?;
        Ok(self.view_at(slot))
    }

    /// Snapshot every live record in current physical slot order.
    ///
    /// The order is incidental — deletions reorder slots — and must not be
    /// relied on between calls.
    pub fn view_all(&self) -> Vec<TokenView> {
        (0..self.id.len()).map(|slot| self.view_at(slot)).collect()
    }

    /// Number of live records.
    pub fn len(&self) -> usize {
        self.id.len()
    }

    /// Whether the registry holds no live records.
    pub fn is_empty(&self) -> bool {
        self.id.is_empty()
    }

    fn view_at(&self, slot: usize) -> TokenView {
        TokenView {
            id: self.id[slot],
            address: self.address[slot],
            name: self.name[slot].clone(),
            symbol: self.symbol[slot].clone(),
            decimals: self.decimals[slot],
            fee_on_transfer_percent: self.fee_on_transfer_percent[slot],
            gas_for_transfer: self.gas_for_transfer[slot],
        }
    }
}

impl Default for TokenRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for TokenRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenRegistry")
            .field("len", &self.len())
            .field("next_id", &self.next_id)
            .finish()
    }
}
