//! Domain modules organized as vertical slices.
//!
//! Each sub-module contains:
//! - `mod.rs`: Domain types handed to the use-case and presentation layers
//! - `wire.rs`: Raw serde structs matching venue requests and responses
//! - `convert.rs`: `From` conversions from wire types to domain types

pub mod balance;
pub mod board;
pub mod market;
pub mod order;
pub mod position;
