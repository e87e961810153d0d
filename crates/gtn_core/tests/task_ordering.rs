use gtn_core::{order_tasks, Catalog, Item, TaskEntry, TaskKind, TaskSortKey};
use proptest::prelude::*;

fn catalog_with_tasks(tasks: &[(&str, &str, i64)]) -> Catalog {
    let mut catalog = Catalog::new();
    for (title, deadline, priority) in tasks {
        catalog
            .add(Item::task(*title, "", *deadline, *priority, TaskKind::Generic))
            .unwrap();
    }
    catalog
}

fn titles(entries: &[TaskEntry<'_>]) -> Vec<String> {
    entries.iter().map(|entry| entry.item.title.clone()).collect()
}

#[test]
fn orders_by_priority_ascending() {
    let catalog = catalog_with_tasks(&[
        ("five", "2024-05-01", 5),
        ("one", "2024-01-10", 1),
        ("three", "2024-03-15", 3),
    ]);
    let ordered = order_tasks(&catalog.tasks(), TaskSortKey::Priority);
    let priorities = ordered
        .iter()
        .map(|entry| entry.fields.priority)
        .collect::<Vec<_>>();
    assert_eq!(priorities, vec![1, 3, 5]);
}

#[test]
fn orders_by_deadline_text() {
    let catalog = catalog_with_tasks(&[
        ("a", "2024-05-01", 5),
        ("b", "2024-01-10", 1),
        ("c", "2024-03-15", 3),
    ]);
    let ordered = order_tasks(&catalog.tasks(), TaskSortKey::Deadline);
    let deadlines = ordered
        .iter()
        .map(|entry| entry.fields.deadline.as_str())
        .collect::<Vec<_>>();
    assert_eq!(deadlines, vec!["2024-01-10", "2024-03-15", "2024-05-01"]);
}

#[test]
fn deadline_ordering_is_lexicographic_not_chronological() {
    let catalog = catalog_with_tasks(&[
        ("padded", "2024-10-01", 0),
        ("unpadded", "2024-9-01", 0),
        ("none", "No Deadline", 0),
    ]);
    let ordered = order_tasks(&catalog.tasks(), TaskSortKey::Deadline);
    assert_eq!(titles(&ordered), vec!["padded", "unpadded", "none"]);
}

#[test]
fn equal_priorities_keep_insertion_order() {
    let catalog = catalog_with_tasks(&[
        ("first", "", 2),
        ("second", "", 1),
        ("third", "", 2),
        ("fourth", "", 1),
    ]);
    let ordered = order_tasks(&catalog.tasks(), TaskSortKey::Priority);
    assert_eq!(titles(&ordered), vec!["second", "fourth", "first", "third"]);
}

#[test]
fn empty_and_single_inputs_are_unchanged() {
    let empty = Catalog::new();
    assert!(order_tasks(&empty.tasks(), TaskSortKey::Priority).is_empty());

    let single = catalog_with_tasks(&[("only", "2024-01-01", 9)]);
    let ordered = order_tasks(&single.tasks(), TaskSortKey::Deadline);
    assert_eq!(titles(&ordered), vec!["only"]);
}

#[test]
fn recurring_and_one_time_tasks_are_ordered_together() {
    let mut catalog = Catalog::new();
    catalog
        .add(Item::task(
            "weekly",
            "",
            "2024-02-01",
            4,
            TaskKind::Recurring {
                interval: "weekly".to_string(),
            },
        ))
        .unwrap();
    catalog
        .add(Item::task("once", "", "2024-01-01", 2, TaskKind::OneTime))
        .unwrap();
    let ordered = order_tasks(&catalog.tasks(), TaskSortKey::Priority);
    assert_eq!(titles(&ordered), vec!["once", "weekly"]);
}

proptest! {
    #[test]
    fn prop_priority_order_is_sorted_stable_permutation(priorities in proptest::collection::vec(-5i64..5, 0..40)) {
        let mut catalog = Catalog::new();
        for (index, priority) in priorities.iter().enumerate() {
            catalog
                .add(Item::task(format!("t{index}"), "", "", *priority, TaskKind::Generic))
                .unwrap();
        }
        let input = catalog.tasks();
        let ordered = order_tasks(&input, TaskSortKey::Priority);

        prop_assert_eq!(ordered.len(), input.len());
        let mut input_ids = input.iter().map(|entry| entry.item.id).collect::<Vec<_>>();
        let mut output_ids = ordered.iter().map(|entry| entry.item.id).collect::<Vec<_>>();
        input_ids.sort();
        output_ids.sort();
        prop_assert_eq!(input_ids, output_ids);

        for pair in ordered.windows(2) {
            prop_assert!(pair[0].fields.priority <= pair[1].fields.priority);
            if pair[0].fields.priority == pair[1].fields.priority {
                let left = input.iter().position(|e| e.item.id == pair[0].item.id).unwrap();
                let right = input.iter().position(|e| e.item.id == pair[1].item.id).unwrap();
                prop_assert!(left < right);
            }
        }
    }

    #[test]
    fn prop_deadline_order_matches_std_stable_sort(deadlines in proptest::collection::vec("[0-9-]{0,6}", 0..30)) {
        let mut catalog = Catalog::new();
        for (index, deadline) in deadlines.iter().enumerate() {
            catalog
                .add(Item::task(format!("t{index}"), "", deadline.clone(), 0, TaskKind::Generic))
                .unwrap();
        }
        let input = catalog.tasks();
        let ordered = order_tasks(&input, TaskSortKey::Deadline);

        let mut expected = input.clone();
        expected.sort_by(|a, b| a.fields.deadline.cmp(&b.fields.deadline));
        let expected_ids = expected.iter().map(|entry| entry.item.id).collect::<Vec<_>>();
        let ordered_ids = ordered.iter().map(|entry| entry.item.id).collect::<Vec<_>>();
        prop_assert_eq!(ordered_ids, expected_ids);
    }
}
