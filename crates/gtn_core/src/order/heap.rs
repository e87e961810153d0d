//! Progress ranking for goals.
//!
//! # Invariants
//! - Goals with measurable progress come first, strictly by descending
//!   progress.
//! - Non-quantifiable goals (no progress) always come after every goal with
//!   progress, including zero progress.
//! - The relative order of non-quantifiable goals is unspecified; the heap
//!   never distinguishes them.

use crate::model::item::GoalEntry;
use std::cmp::Ordering;

/// Orders `goals` in place by descending progress, non-quantifiable last.
pub fn rank_goals(goals: &mut [GoalEntry<'_>]) {
    // Heap sort yields ascending order under the comparator, so the comparator
    // is reversed to leave the highest progress at the front.
    heap_sort_by(goals, |left, right| {
        compare_progress(right.fields.progress(), left.fields.progress())
    });
}

/// Ranking order for optional progress: `None` is below every measurement.
pub fn compare_progress(left: Option<f64>, right: Option<f64>) -> Ordering {
    match (left, right) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (Some(left), Some(right)) => left.total_cmp(&right),
    }
}

/// In-place heap sort, ascending under `compare`.
///
/// O(n log n) time, O(1) extra space. Not stable.
pub fn heap_sort_by<T, F>(values: &mut [T], compare: F)
where
    F: Fn(&T, &T) -> Ordering,
{
    let len = values.len();
    if len <= 1 {
        return;
    }

    for root in (0..len / 2).rev() {
        sift_down(values, root, len, &compare);
    }

    for end in (1..len).rev() {
        values.swap(0, end);
        sift_down(values, 0, end, &compare);
    }
}

fn sift_down<T, F>(values: &mut [T], mut root: usize, len: usize, compare: &F)
where
    F: Fn(&T, &T) -> Ordering,
{
    loop {
        let left = 2 * root + 1;
        if left >= len {
            return;
        }
        let right = left + 1;

        let mut largest = root;
        if compare(&values[left], &values[largest]) == Ordering::Greater {
            largest = left;
        }
        if right < len && compare(&values[right], &values[largest]) == Ordering::Greater {
            largest = right;
        }
        if largest == root {
            return;
        }

        values.swap(root, largest);
        root = largest;
    }
}

#[cfg(test)]
mod tests {
    use super::{compare_progress, heap_sort_by};
    use std::cmp::Ordering;

    #[test]
    fn heap_sort_orders_ascending() {
        let mut values = [5, 1, 4, 1, 9, 2, 6];
        heap_sort_by(&mut values, |a, b| a.cmp(b));
        assert_eq!(values, [1, 1, 2, 4, 5, 6, 9]);
    }

    #[test]
    fn missing_progress_ranks_below_zero() {
        assert_eq!(compare_progress(None, Some(0.0)), Ordering::Less);
        assert_eq!(compare_progress(Some(0.0), None), Ordering::Greater);
        assert_eq!(compare_progress(None, None), Ordering::Equal);
        assert_eq!(compare_progress(Some(0.2), Some(0.9)), Ordering::Less);
    }
}
