//! `stockkeep-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no IO, no logging).

pub mod error;
pub mod name;
pub mod quantity;
pub mod value_object;

pub use error::{InventoryError, InventoryResult};
pub use name::ItemName;
pub use quantity::{Quantity, Threshold};
pub use value_object::ValueObject;
