//! Explore aggregate: the slot state store and its message contract.

pub mod messages;
pub mod store;

pub use messages::*;
pub use store::*;
