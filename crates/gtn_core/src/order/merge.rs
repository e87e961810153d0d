//! Stable two-key task ordering.
//!
//! # Invariants
//! - Ascending by the selected key.
//! - Entries with equal keys keep their input order.
//! - `deadline` is compared as raw text, so only zero-padded `YYYY-MM-DD`
//!   values order chronologically. Values such as `No Deadline` interleave
//!   with dates by plain string comparison.

use crate::model::item::TaskEntry;
use std::cmp::Ordering;

/// Key used to order tasks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskSortKey {
    /// Numeric priority, lowest first.
    Priority,
    /// Deadline text, lexicographically ascending.
    Deadline,
}

impl TaskSortKey {
    pub fn compare(self, left: &TaskEntry<'_>, right: &TaskEntry<'_>) -> Ordering {
        match self {
            Self::Priority => left.fields.priority.cmp(&right.fields.priority),
            Self::Deadline => left.fields.deadline.cmp(&right.fields.deadline),
        }
    }
}

/// Returns `tasks` ordered by `key`.
pub fn order_tasks<'a>(tasks: &[TaskEntry<'a>], key: TaskSortKey) -> Vec<TaskEntry<'a>> {
    merge_sort_by(tasks, |left, right| key.compare(left, right))
}

/// Top-down merge sort returning a new ordered vector.
///
/// O(n log n) comparisons, O(n) scratch per merge level.
pub fn merge_sort_by<T, F>(values: &[T], compare: F) -> Vec<T>
where
    T: Copy,
    F: Fn(&T, &T) -> Ordering,
{
    sort_slice(values, &compare)
}

fn sort_slice<T, F>(values: &[T], compare: &F) -> Vec<T>
where
    T: Copy,
    F: Fn(&T, &T) -> Ordering,
{
    if values.len() <= 1 {
        return values.to_vec();
    }

    let mid = values.len() / 2;
    let left = sort_slice(&values[..mid], compare);
    let right = sort_slice(&values[mid..], compare);
    merge(&left, &right, compare)
}

fn merge<T, F>(left: &[T], right: &[T], compare: &F) -> Vec<T>
where
    T: Copy,
    F: Fn(&T, &T) -> Ordering,
{
    let mut merged = Vec::with_capacity(left.len() + right.len());
    let (mut i, mut j) = (0, 0);

    while i < left.len() && j < right.len() {
        // Ties take the left run first.
        if compare(&left[i], &right[j]) != Ordering::Greater {
            merged.push(left[i]);
            i += 1;
        } else {
            merged.push(right[j]);
            j += 1;
        }
    }
    merged.extend_from_slice(&left[i..]);
    merged.extend_from_slice(&right[j..]);
    merged
}
