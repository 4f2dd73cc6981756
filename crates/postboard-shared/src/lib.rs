//! # Postboard Shared
//!
//! Wire types shared by the JSON API and the HTML forms.

pub mod dto;
pub mod response;

pub use response::{ApiResponse, ErrorResponse};
