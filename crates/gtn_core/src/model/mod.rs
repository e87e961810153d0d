//! Domain model for catalog items.
//!
//! # Responsibility
//! - Define the closed variant set for tasks, notes and goals.
//! - Keep rendering and classification next to the data they describe.
//!
//! # Invariants
//! - Every item is identified by a stable `ItemId`.
//! - Classification is a tag comparison or a `match`, never a downcast.

pub mod item;
