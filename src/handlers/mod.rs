//! HTTP handlers for the bakery API.

pub mod baked_good;
pub mod bakery;
pub use baked_good::*;
pub use bakery::*;
