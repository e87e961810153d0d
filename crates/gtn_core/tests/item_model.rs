use gtn_core::{
    Family, GoalKind, Item, ItemBody, ItemValidationError, NoteKind, Render, TaskKind,
    VariantTag, GENERIC_TAG, PROGRESS_SENTINEL,
};
use uuid::Uuid;

#[test]
fn task_variants_render_summary_and_detail() {
    let generic = Item::task("Taxes", "File return", "2024-04-15", 2, TaskKind::Generic);
    assert_eq!(
        generic.render_summary(),
        "Task: Taxes, Deadline: 2024-04-15, Priority: 2"
    );
    assert_eq!(
        generic.render_detail(),
        "Title: Taxes\nDescription: File return\nDeadline: 2024-04-15\nPriority: 2"
    );

    let recurring = Item::task(
        "Gym",
        "Leg day",
        "2024-06-01",
        3,
        TaskKind::Recurring {
            interval: "weekly".to_string(),
        },
    );
    assert_eq!(
        recurring.render_summary(),
        "Recurring Task: Gym, Deadline: 2024-06-01, Priority: 3, Interval: weekly"
    );
    assert!(recurring
        .render_detail()
        .ends_with("\nPriority: 3\nRecurrence Interval: weekly"));

    let one_time = Item::task("Visa", "Apply", "2024-07-01", 1, TaskKind::OneTime);
    assert!(one_time.render_summary().starts_with("One-Time Task: Visa"));
    assert_eq!(
        one_time.render_detail(),
        "Title: Visa\nDescription: Apply\nDeadline: 2024-07-01\nPriority: 1"
    );
}

#[test]
fn note_variants_render_tags_and_hide_protected_tags_in_summary() {
    let tags = vec!["work".to_string(), "urgent".to_string()];
    let public = Item::note("Standup", "Daily sync", tags.clone(), NoteKind::Public);
    assert_eq!(public.render_summary(), "Public Note: Standup [Tags: work urgent]");
    assert_eq!(
        public.render_detail(),
        "Title: Standup\nDescription: Daily sync\nTags: work, urgent"
    );

    let protected = Item::note(
        "Diary",
        "Private",
        tags,
        NoteKind::Protected {
            password: "password123".to_string(),
        },
    );
    assert_eq!(protected.render_summary(), "Protected Note: Diary [Protected]");
    assert!(protected.render_detail().ends_with("\nPassword Protected"));
}

#[test]
fn goal_variants_render_progress() {
    let quantifiable = Item::goal("Read", "Books", 0.756, GoalKind::Quantifiable);
    assert_eq!(
        quantifiable.render_summary(),
        "Quantifiable Goal: Read, Progress: 76%"
    );
    assert_eq!(
        quantifiable.render_detail(),
        "Title: Read\nDescription: Books\nProgress: 75%"
    );

    let generic = Item::goal("Save", "Money", 0.5, GoalKind::Generic);
    assert_eq!(generic.render_summary(), "Goal: Save, Progress: 50%");

    let non_quantifiable = Item::goal("Be kind", "", 0.0, GoalKind::NonQuantifiable);
    assert_eq!(
        non_quantifiable.render_summary(),
        "Non-Quantifiable Goal: Be kind - Progress not quantified."
    );
    assert!(non_quantifiable
        .render_detail()
        .ends_with("\nProgress: 0%\nNon-quantifiable progress"));
}

#[test]
fn non_quantifiable_goal_never_reports_progress() {
    let goal = Item::goal("Be calm", "", 0.8, GoalKind::NonQuantifiable);
    let entry = goal.as_goal().unwrap();
    assert_eq!(entry.fields.progress(), None);
    assert_eq!(entry.fields.progress_or_sentinel(), PROGRESS_SENTINEL);

    let measured = Item::goal("Run", "", 0.8, GoalKind::Quantifiable);
    assert_eq!(measured.as_goal().unwrap().fields.progress(), Some(0.8));
}

#[test]
fn classification_uses_variant_tags() {
    let item = Item::note("n", "", vec![], NoteKind::Public);
    assert_eq!(item.family(), Family::Note);
    assert_eq!(item.variant_tag(), VariantTag::PublicNote);
    assert_eq!(item.variant_tag().family(), Family::Note);
    assert!(item.as_task().is_none());
    assert!(item.as_goal().is_none());
}

#[test]
fn empty_tags_are_substituted_with_generic() {
    let note = Item::note(
        "n",
        "",
        vec![String::new(), "x".to_string()],
        NoteKind::Generic,
    );
    let ItemBody::Note(fields) = &note.body else {
        panic!("expected note body");
    };
    assert_eq!(fields.tags, vec![GENERIC_TAG.to_string(), "x".to_string()]);

    let untagged = Item::note("n", "", Vec::new(), NoteKind::Generic);
    assert_eq!(untagged.as_note().unwrap().fields.tags, vec![GENERIC_TAG]);
}

#[test]
fn validate_enforces_title_and_progress_range() {
    let blank = Item::task(" ", "", "", 0, TaskKind::Generic);
    assert_eq!(blank.validate().unwrap_err(), ItemValidationError::EmptyTitle);

    let over = Item::goal("g", "", 1.5, GoalKind::Quantifiable);
    assert_eq!(
        over.validate().unwrap_err(),
        ItemValidationError::ProgressOutOfRange(1.5)
    );

    let sentinel = Item::goal("g", "", PROGRESS_SENTINEL, GoalKind::Generic);
    assert_eq!(
        sentinel.validate().unwrap_err(),
        ItemValidationError::SentinelProgress
    );

    let nan = Item::goal("g", "", f64::NAN, GoalKind::Quantifiable);
    assert_eq!(
        nan.validate().unwrap_err(),
        ItemValidationError::NonFiniteProgress
    );

    let ignored = Item::goal("g", "", 7.0, GoalKind::NonQuantifiable);
    assert!(ignored.validate().is_ok());

    let nil = Item::with_id(Uuid::nil(), "t", "", blank.body.clone());
    assert_eq!(nil.validate().unwrap_err(), ItemValidationError::NilId);
}

#[test]
fn serialization_uses_family_and_variant_fields_without_password() {
    let note = Item::note(
        "Diary",
        "Private",
        vec!["personal".to_string()],
        NoteKind::Protected {
            password: "password123".to_string(),
        },
    );
    let json = serde_json::to_value(&note).unwrap();
    assert_eq!(json["id"], note.id.to_string());
    assert_eq!(json["body"]["family"], "note");
    assert_eq!(json["body"]["kind"]["variant"], "protected");
    assert!(json["body"]["kind"].get("password").is_none());

    let task = Item::task(
        "Gym",
        "",
        "2024-06-01",
        3,
        TaskKind::Recurring {
            interval: "weekly".to_string(),
        },
    );
    let json = serde_json::to_value(&task).unwrap();
    assert_eq!(json["body"]["family"], "task");
    assert_eq!(json["body"]["priority"], 3);
    assert_eq!(json["body"]["kind"]["interval"], "weekly");

    let decoded: Item = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, task);
}
