//! # Postboard Infrastructure
//!
//! Concrete implementations of the ports defined in `postboard-core`.
//! The only backend is an in-memory store that simulates network latency.

pub mod store;

pub use store::{InMemoryPostStore, Latency, seed_posts};
