//! Post store implementations.

mod memory;
mod seed;

pub use memory::{InMemoryPostStore, Latency};
pub use seed::seed_posts;
