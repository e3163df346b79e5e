//! # tavern-core
//!
//! Core types shared by every Tavern crate:
//! - Entity structs for games and the five campaign entity kinds
//! - The closed [`enums::EntityType`] set with its singular/plural label table
//! - Link aggregation: flattening per-type cross references into one table
//! - Lenient timestamp parsing and rich-text plain-text projection
//! - Cross-cutting error types

pub mod entities;
pub mod enums;
pub mod errors;
pub mod ids;
pub mod links;
pub mod rich_text;
pub mod timestamp;
