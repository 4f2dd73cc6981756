//! # Postboard Core
//!
//! The domain layer of Postboard.
//! This crate holds the post model, its errors and the store port, with no
//! infrastructure dependencies.

pub mod domain;
pub mod error;
pub mod ports;

pub use domain::{NewPost, Post, PostId};
pub use error::{DomainError, StoreError};
pub use ports::PostStore;
