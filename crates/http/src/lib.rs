//! Playforge HTTP module: wire types for the storefront API and a typed
//! client that speaks the `/auth/*` contract.
//!
//! The client is target-agnostic (rustls on native, the browser's fetch on
//! wasm), so the same typed surface backs both the web frontend and native
//! integration tests.

pub mod client;
pub mod types;

pub use client::{StoreClient, StoreClientBuilder, error::ClientError};
