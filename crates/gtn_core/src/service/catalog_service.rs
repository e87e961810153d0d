//! Catalog use-case service.
//!
//! # Responsibility
//! - Provide add flows for tasks, goals and notes.
//! - Expose ordered, ranked and searched views for display.
//! - Gate protected note details behind password attempts.
//!
//! # Invariants
//! - Every operation is a plain function of the catalog and its arguments;
//!   nothing here prompts or prints.
//! - Protected note details are only returned through `unlock_protected`.

use crate::catalog::{Catalog, CatalogResult};
use crate::ingest::{load_file, IngestReport, LoadError};
use crate::model::item::{
    GoalEntry, GoalKind, Item, ItemBody, ItemId, NoteEntry, NoteKind, Render, TaskEntry, TaskKind,
    VariantTag,
};
use crate::order::heap::rank_goals;
use crate::order::merge::{order_tasks, TaskSortKey};
use crate::search::text::{full_text_search, notes_with_tag};
use crate::service::input::split_tag_input;
use log::info;
use std::path::Path;

/// Request model for adding a task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddTaskRequest {
    pub title: String,
    pub description: String,
    /// Taken verbatim, including values such as `No Deadline`.
    pub deadline: String,
    pub priority: i64,
    pub kind: TaskKind,
}

/// Request model for adding a goal.
#[derive(Debug, Clone, PartialEq)]
pub struct AddGoalRequest {
    pub title: String,
    pub description: String,
    /// Ignored for non-quantifiable goals.
    pub progress: f64,
    pub kind: GoalKind,
}

/// Request model for adding a note.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddNoteRequest {
    pub title: String,
    pub description: String,
    /// Comma-separated tags as typed by the user.
    pub tags_input: String,
    pub kind: NoteKind,
}

/// One password attempt against one protected note.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessAttempt {
    pub note_id: ItemId,
    pub granted: bool,
}

/// Result of walking protected notes with password attempts.
#[derive(Debug, Clone)]
pub struct AccessReport<'a> {
    /// Attempts in the order they were made.
    pub attempts: Vec<AccessAttempt>,
    /// First note whose password matched, if any.
    pub granted: Option<NoteEntry<'a>>,
}

impl AccessReport<'_> {
    pub fn is_granted(&self) -> bool {
        self.granted.is_some()
    }
}

/// Use-case facade owning the catalog.
#[derive(Debug, Default)]
pub struct CatalogService {
    catalog: Catalog,
}

impl CatalogService {
    pub fn new(catalog: Catalog) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Bulk-loads a data file into the owned catalog.
    pub fn load_file(&mut self, path: impl AsRef<Path>) -> Result<IngestReport, LoadError> {
        load_file(path, &mut self.catalog)
    }

    pub fn add_task(&mut self, request: AddTaskRequest) -> CatalogResult<ItemId> {
        let item = Item::task(
            request.title,
            request.description,
            request.deadline,
            request.priority,
            request.kind,
        );
        self.add(item)
    }

    /// Adds a goal; non-quantifiable goals store zero progress.
    pub fn add_goal(&mut self, request: AddGoalRequest) -> CatalogResult<ItemId> {
        let progress = match request.kind {
            GoalKind::NonQuantifiable => 0.0,
            GoalKind::Generic | GoalKind::Quantifiable => request.progress,
        };
        let item = Item::goal(request.title, request.description, progress, request.kind);
        self.add(item)
    }

    /// Adds a note; empty tag tokens become `generic`.
    pub fn add_note(&mut self, request: AddNoteRequest) -> CatalogResult<ItemId> {
        let tags = split_tag_input(&request.tags_input);
        let item = Item::note(request.title, request.description, tags, request.kind);
        self.add(item)
    }

    /// Summary lines for every item in insertion order.
    pub fn summaries(&self) -> Vec<String> {
        self.catalog.iter().map(|item| item.render_summary()).collect()
    }

    /// Detail text for every item of exactly one variant.
    ///
    /// Protected notes render their summary here; use
    /// [`CatalogService::unlock_protected`] to reveal their detail.
    pub fn variant_details(&self, tag: VariantTag) -> Vec<String> {
        self.catalog
            .by_variant(tag)
            .into_iter()
            .map(|item| match &item.body {
                ItemBody::Note(note) if matches!(note.kind, NoteKind::Protected { .. }) => {
                    item.render_summary()
                }
                _ => item.render_detail(),
            })
            .collect()
    }

    pub fn tasks_ordered(&self, key: TaskSortKey) -> Vec<TaskEntry<'_>> {
        order_tasks(&self.catalog.tasks(), key)
    }

    pub fn goals_ranked(&self) -> Vec<GoalEntry<'_>> {
        let mut goals = self.catalog.goals();
        rank_goals(&mut goals);
        goals
    }

    /// Case-insensitive substring search over notes.
    pub fn search_notes(&self, text: &str) -> Vec<&Item> {
        let notes = self.catalog.notes();
        full_text_search(text, notes.iter().map(|note| note.item))
    }

    pub fn notes_with_tag(&self, tag: &str) -> Vec<NoteEntry<'_>> {
        notes_with_tag(tag, &self.catalog.notes())
    }

    /// Tries one password per protected note, in catalog order.
    ///
    /// Stops at the first match or when attempts run out. Denials are recorded
    /// per attempt and are never errors. Passwords compare exactly, so an
    /// empty attempt opens a note stored with an empty password.
    pub fn unlock_protected<'p, I>(&self, passwords: I) -> AccessReport<'_>
    where
        I: IntoIterator<Item = &'p str>,
    {
        let mut passwords = passwords.into_iter();
        let mut report = AccessReport {
            attempts: Vec::new(),
            granted: None,
        };

        for note in self.catalog.notes() {
            let NoteKind::Protected { password } = &note.fields.kind else {
                continue;
            };
            let Some(attempt) = passwords.next() else {
                break;
            };

            let granted = attempt == password.as_str();
            report.attempts.push(AccessAttempt {
                note_id: note.item.id,
                granted,
            });
            if granted {
                report.granted = Some(note);
                break;
            }
        }

        info!(
            "event=protected_unlock module=service status={} attempts={}",
            if report.is_granted() { "granted" } else { "denied" },
            report.attempts.len()
        );
        report
    }

    fn add(&mut self, item: Item) -> CatalogResult<ItemId> {
        let variant = item.variant_tag();
        let id = self.catalog.add(item)?;
        info!("event=item_add module=service status=ok variant={variant}");
        Ok(id)
    }
}

#[cfg(test)]
mod tests {
    use super::{AddNoteRequest, CatalogService};
    use crate::model::item::{NoteKind, VariantTag};

    #[test]
    fn variant_details_never_reveal_protected_notes() {
        let mut service = CatalogService::default();
        service
            .add_note(AddNoteRequest {
                title: "Diary".to_string(),
                description: "secret body".to_string(),
                tags_input: "personal".to_string(),
                kind: NoteKind::Protected {
                    password: "pw".to_string(),
                },
            })
            .expect("note add");

        let details = service.variant_details(VariantTag::ProtectedNote);
        assert_eq!(details, vec!["Protected Note: Diary [Protected]".to_string()]);
    }
}
