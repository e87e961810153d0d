//! Ordering engines over borrowed catalog subsets.
//!
//! # Responsibility
//! - Order tasks by priority or deadline with a stable merge sort.
//! - Rank goals by progress with an in-place heap sort.
//!
//! # Invariants
//! - Engines borrow entries and never take ownership of items.
//! - Output is always a permutation of the input.

pub mod heap;
pub mod merge;
