//! Products domain module.
//!
//! This crate contains the product record and the owning collection built
//! from parallel input arrays, implemented purely as in-memory domain logic
//! (no persistence, no threads).

pub mod collection;
pub mod product;

pub use collection::{ProductCollection, destroy_collection};
pub use product::{Product, destroy_product};
