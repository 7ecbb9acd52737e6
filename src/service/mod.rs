//! Repository layer: read-only queries against the store.

pub mod baked_good;
pub mod bakery;

pub use baked_good::BakedGoodService;
pub use bakery::BakeryService;
