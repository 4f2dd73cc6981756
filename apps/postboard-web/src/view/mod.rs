//! Server-rendered page: region state, the controller that drives it and
//! the HTML renderer.

mod controller;
pub mod render;
mod surface;

pub use controller::ViewController;
pub use surface::{DetailRegion, Surface};
