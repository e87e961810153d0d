//! Core domain logic for the GTN (goals, tasks, notes) catalog.
//! This crate owns the item model, the catalog, and the ordering and search
//! engines; shells only prompt and print.

pub mod catalog;
pub mod ingest;
pub mod logging;
pub mod model;
pub mod order;
pub mod search;
pub mod service;

pub use catalog::{Catalog, CatalogError, CatalogResult};
pub use ingest::{
    load_file, load_reader, parse_line, DefaultedField, IngestError, IngestReport, IngestResult,
    LineRejection, LoadError, ParsedRecord,
};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::item::{
    Entry, Family, GoalEntry, GoalFields, GoalKind, Item, ItemBody, ItemId, ItemValidationError,
    NoteEntry, NoteFields, NoteKind, Render, TaskEntry, TaskFields, TaskKind, VariantTag,
    GENERIC_TAG, PROGRESS_SENTINEL,
};
pub use order::heap::rank_goals;
pub use order::merge::{order_tasks, TaskSortKey};
pub use search::kmp::{kmp_contains, KmpPattern};
pub use search::text::{full_text_search, notes_with_tag};
pub use service::catalog_service::{
    AccessAttempt, AccessReport, AddGoalRequest, AddNoteRequest, AddTaskRequest, CatalogService,
};
pub use service::input::{parse_priority_input, parse_progress_input, InputError};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
