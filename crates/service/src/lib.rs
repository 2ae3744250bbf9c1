//! Concurrency-safe service layer over the token registry.

pub mod service;

pub use service::TokenService;
