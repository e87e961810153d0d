//! Text search entry points.
//!
//! # Responsibility
//! - Provide exact substring matching (KMP) over folded item text.
//! - Provide exact tag membership search over notes.
//!
//! # Invariants
//! - A miss is an empty result, never an error.
//! - An empty pattern matches nothing.

pub mod kmp;
pub mod text;
