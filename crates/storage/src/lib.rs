//! Dense struct-of-arrays storage for the token registry.
//!
//! This crate holds the single-threaded store. It provides O(1) insert,
//! delete, update, and point lookups but no synchronization of its own;
//! the service crate wraps one store behind a reader/writer lock.

pub mod registry;

pub use registry::TokenRegistry;
