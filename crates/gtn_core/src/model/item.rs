//! Item domain model.
//!
//! # Responsibility
//! - Define the closed set of catalog item variants (tasks, notes, goals).
//! - Render summary and detail text for every variant.
//! - Expose variant classification as plain tags, never runtime type probes.
//!
//! # Invariants
//! - `title` is non-empty after trimming.
//! - Goal progress lives in `[0, 1]` unless the goal is non-quantifiable.
//! - Non-quantifiable goals report no progress (`None`), and rank after every
//!   goal that has one.
//! - Note tags are never empty; empty tag tokens become [`GENERIC_TAG`].
//! - `deadline` is plain text and compares lexicographically.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier assigned to every catalog item.
pub type ItemId = Uuid;

/// Placeholder tag used when a note tag token is empty.
pub const GENERIC_TAG: &str = "generic";

/// Legacy progress value reported by non-quantifiable goals.
///
/// Only [`GoalFields::progress_or_sentinel`] produces it; it is never a valid
/// stored progress.
pub const PROGRESS_SENTINEL: f64 = -1.0;

static ISO_DEADLINE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("valid deadline regex"));

/// Top-level item family used for subset selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Family {
    Task,
    Goal,
    Note,
}

/// Concrete variant discriminator, one per line-format tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VariantTag {
    Task,
    RecurringTask,
    OneTimeTask,
    Note,
    ProtectedNote,
    PublicNote,
    Goal,
    QuantifiableGoal,
    NonQuantifiableGoal,
}

impl VariantTag {
    /// Every variant in line-format declaration order.
    pub const ALL: [VariantTag; 9] = [
        Self::Task,
        Self::RecurringTask,
        Self::OneTimeTask,
        Self::Note,
        Self::ProtectedNote,
        Self::PublicNote,
        Self::Goal,
        Self::QuantifiableGoal,
        Self::NonQuantifiableGoal,
    ];

    /// Stable tag string used by the ingestion line format.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Task => "Task",
            Self::RecurringTask => "RecurringTask",
            Self::OneTimeTask => "OneTimeTask",
            Self::Note => "Note",
            Self::ProtectedNote => "ProtectedNote",
            Self::PublicNote => "PublicNote",
            Self::Goal => "Goal",
            Self::QuantifiableGoal => "QuantifiableGoal",
            Self::NonQuantifiableGoal => "NonQuantifiableGoal",
        }
    }

    /// Parses an exact (case-sensitive) line-format tag.
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|tag| tag.as_str() == value)
    }

    pub fn family(self) -> Family {
        match self {
            Self::Task | Self::RecurringTask | Self::OneTimeTask => Family::Task,
            Self::Note | Self::ProtectedNote | Self::PublicNote => Family::Note,
            Self::Goal | Self::QuantifiableGoal | Self::NonQuantifiableGoal => Family::Goal,
        }
    }
}

impl Display for VariantTag {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Task sub-variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "variant", rename_all = "snake_case")]
pub enum TaskKind {
    Generic,
    Recurring { interval: String },
    OneTime,
}

/// Task-specific fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskFields {
    /// Raw deadline text, ideally `YYYY-MM-DD`. Compared as text.
    pub deadline: String,
    /// Lower values sort first.
    pub priority: i64,
    pub kind: TaskKind,
}

/// Note sub-variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "variant", rename_all = "snake_case")]
pub enum NoteKind {
    Generic,
    Protected {
        /// Never serialized.
        #[serde(skip_serializing, default)]
        password: String,
    },
    Public,
}

/// Note-specific fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteFields {
    /// Ordered tags. Uniqueness is not enforced.
    pub tags: Vec<String>,
    pub kind: NoteKind,
}

impl NoteFields {
    /// Exact, case-sensitive tag membership.
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|value| value == tag)
    }
}

/// Goal sub-variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GoalKind {
    Generic,
    Quantifiable,
    NonQuantifiable,
}

/// Goal-specific fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoalFields {
    /// Stored progress in `[0, 1]`. Ignored by non-quantifiable goals.
    pub progress: f64,
    pub kind: GoalKind,
}

impl GoalFields {
    /// Returns measurable progress, or `None` for non-quantifiable goals.
    pub fn progress(&self) -> Option<f64> {
        match self.kind {
            GoalKind::NonQuantifiable => None,
            GoalKind::Generic | GoalKind::Quantifiable => Some(self.progress),
        }
    }

    /// Returns progress with [`PROGRESS_SENTINEL`] standing in for `None`.
    pub fn progress_or_sentinel(&self) -> f64 {
        self.progress().unwrap_or(PROGRESS_SENTINEL)
    }
}

/// Variant payload of one item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "family", rename_all = "snake_case")]
pub enum ItemBody {
    Task(TaskFields),
    Note(NoteFields),
    Goal(GoalFields),
}

/// Catalog entity shared by every variant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    /// Stable id, unique within one catalog.
    pub id: ItemId,
    pub title: String,
    /// May be empty.
    pub description: String,
    pub body: ItemBody,
}

/// Validation errors for item invariants.
#[derive(Debug, Clone, PartialEq)]
pub enum ItemValidationError {
    NilId,
    EmptyTitle,
    NonFiniteProgress,
    /// The sentinel was supplied as a real measurement.
    SentinelProgress,
    ProgressOutOfRange(f64),
}

impl Display for ItemValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NilId => write!(f, "item id must not be nil"),
            Self::EmptyTitle => write!(f, "item title must not be empty"),
            Self::NonFiniteProgress => write!(f, "goal progress must be a finite number"),
            Self::SentinelProgress => write!(
                f,
                "goal progress {PROGRESS_SENTINEL} is reserved for non-quantifiable goals"
            ),
            Self::ProgressOutOfRange(value) => {
                write!(f, "goal progress ({value}) must be within 0.0..=1.0")
            }
        }
    }
}

impl Error for ItemValidationError {}

/// Summary/detail rendering shared by every item variant.
pub trait Render {
    /// Short single-line description.
    fn render_summary(&self) -> String;
    /// Multi-line full description.
    fn render_detail(&self) -> String;
}

impl Item {
    /// Creates a task with a generated id.
    pub fn task(
        title: impl Into<String>,
        description: impl Into<String>,
        deadline: impl Into<String>,
        priority: i64,
        kind: TaskKind,
    ) -> Self {
        Self::with_id(
            Uuid::new_v4(),
            title,
            description,
            ItemBody::Task(TaskFields {
                deadline: deadline.into(),
                priority,
                kind,
            }),
        )
    }

    /// Creates a note with a generated id.
    ///
    /// Empty tag tokens are replaced by [`GENERIC_TAG`]; an empty tag list
    /// becomes `[GENERIC_TAG]`.
    pub fn note(
        title: impl Into<String>,
        description: impl Into<String>,
        tags: Vec<String>,
        kind: NoteKind,
    ) -> Self {
        Self::with_id(
            Uuid::new_v4(),
            title,
            description,
            ItemBody::Note(NoteFields {
                tags: normalize_note_tags(tags),
                kind,
            }),
        )
    }

    /// Creates a goal with a generated id.
    pub fn goal(
        title: impl Into<String>,
        description: impl Into<String>,
        progress: f64,
        kind: GoalKind,
    ) -> Self {
        Self::with_id(
            Uuid::new_v4(),
            title,
            description,
            ItemBody::Goal(GoalFields { progress, kind }),
        )
    }

    /// Creates an item with a caller-provided id.
    ///
    /// Does not validate; see [`Item::validate`].
    pub fn with_id(
        id: ItemId,
        title: impl Into<String>,
        description: impl Into<String>,
        body: ItemBody,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            description: description.into(),
            body,
        }
    }

    /// Checks the data model invariants.
    pub fn validate(&self) -> Result<(), ItemValidationError> {
        if self.id.is_nil() {
            return Err(ItemValidationError::NilId);
        }
        if self.title.trim().is_empty() {
            return Err(ItemValidationError::EmptyTitle);
        }
        if let ItemBody::Goal(goal) = &self.body {
            if goal.kind != GoalKind::NonQuantifiable {
                validate_progress(goal.progress)?;
            }
        }
        Ok(())
    }

    pub fn family(&self) -> Family {
        match self.body {
            ItemBody::Task(_) => Family::Task,
            ItemBody::Note(_) => Family::Note,
            ItemBody::Goal(_) => Family::Goal,
        }
    }

    pub fn variant_tag(&self) -> VariantTag {
        match &self.body {
            ItemBody::Task(task) => match task.kind {
                TaskKind::Generic => VariantTag::Task,
                TaskKind::Recurring { .. } => VariantTag::RecurringTask,
                TaskKind::OneTime => VariantTag::OneTimeTask,
            },
            ItemBody::Note(note) => match note.kind {
                NoteKind::Generic => VariantTag::Note,
                NoteKind::Protected { .. } => VariantTag::ProtectedNote,
                NoteKind::Public => VariantTag::PublicNote,
            },
            ItemBody::Goal(goal) => match goal.kind {
                GoalKind::Generic => VariantTag::Goal,
                GoalKind::Quantifiable => VariantTag::QuantifiableGoal,
                GoalKind::NonQuantifiable => VariantTag::NonQuantifiableGoal,
            },
        }
    }

    pub fn as_task(&self) -> Option<TaskEntry<'_>> {
        match &self.body {
            ItemBody::Task(fields) => Some(Entry { item: self, fields }),
            _ => None,
        }
    }

    pub fn as_note(&self) -> Option<NoteEntry<'_>> {
        match &self.body {
            ItemBody::Note(fields) => Some(Entry { item: self, fields }),
            _ => None,
        }
    }

    pub fn as_goal(&self) -> Option<GoalEntry<'_>> {
        match &self.body {
            ItemBody::Goal(fields) => Some(Entry { item: self, fields }),
            _ => None,
        }
    }

    /// Title, description and (for notes) every tag, joined by single spaces
    /// with no trailing separator.
    pub fn search_text(&self) -> String {
        let mut text = format!("{} {}", self.title, self.description);
        if let ItemBody::Note(note) = &self.body {
            for tag in &note.tags {
                text.push(' ');
                text.push_str(tag);
            }
        }
        text
    }

    fn base_detail(&self) -> String {
        format!("Title: {}\nDescription: {}", self.title, self.description)
    }
}

impl Render for Item {
    fn render_summary(&self) -> String {
        match &self.body {
            ItemBody::Task(task) => {
                let label = match task.kind {
                    TaskKind::Generic => "Task",
                    TaskKind::Recurring { .. } => "Recurring Task",
                    TaskKind::OneTime => "One-Time Task",
                };
                let mut line = format!(
                    "{label}: {}, Deadline: {}, Priority: {}",
                    self.title, task.deadline, task.priority
                );
                if let TaskKind::Recurring { interval } = &task.kind {
                    line.push_str(&format!(", Interval: {interval}"));
                }
                line
            }
            ItemBody::Note(note) => match note.kind {
                NoteKind::Protected { .. } => format!("Protected Note: {} [Protected]", self.title),
                NoteKind::Generic => format!("Note: {} [Tags: {}]", self.title, note.tags.join(" ")),
                NoteKind::Public => {
                    format!("Public Note: {} [Tags: {}]", self.title, note.tags.join(" "))
                }
            },
            ItemBody::Goal(goal) => match goal.kind {
                GoalKind::NonQuantifiable => format!(
                    "Non-Quantifiable Goal: {} - Progress not quantified.",
                    self.title
                ),
                GoalKind::Generic => format!(
                    "Goal: {}, Progress: {:.0}%",
                    self.title,
                    goal.progress * 100.0
                ),
                GoalKind::Quantifiable => format!(
                    "Quantifiable Goal: {}, Progress: {:.0}%",
                    self.title,
                    goal.progress * 100.0
                ),
            },
        }
    }

    fn render_detail(&self) -> String {
        let mut detail = self.base_detail();
        match &self.body {
            ItemBody::Task(task) => {
                detail.push_str(&format!(
                    "\nDeadline: {}\nPriority: {}",
                    task.deadline, task.priority
                ));
                if let TaskKind::Recurring { interval } = &task.kind {
                    detail.push_str(&format!("\nRecurrence Interval: {interval}"));
                }
            }
            ItemBody::Note(note) => {
                detail.push_str(&format!("\nTags: {}", note.tags.join(", ")));
                if let NoteKind::Protected { .. } = note.kind {
                    detail.push_str("\nPassword Protected");
                }
            }
            ItemBody::Goal(goal) => {
                // Detail truncates; summary rounds.
                let percent = (goal.progress * 100.0) as i64;
                detail.push_str(&format!("\nProgress: {percent}%"));
                if goal.kind == GoalKind::NonQuantifiable {
                    detail.push_str("\nNon-quantifiable progress");
                }
            }
        }
        detail
    }
}

/// Borrowed view pairing an item with its family-specific fields.
///
/// Engines sort and filter entries; they never take ownership of items.
#[derive(Debug)]
pub struct Entry<'a, F> {
    pub item: &'a Item,
    pub fields: &'a F,
}

impl<F> Clone for Entry<'_, F> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<F> Copy for Entry<'_, F> {}

pub type TaskEntry<'a> = Entry<'a, TaskFields>;
pub type NoteEntry<'a> = Entry<'a, NoteFields>;
pub type GoalEntry<'a> = Entry<'a, GoalFields>;

impl<F> Render for Entry<'_, F> {
    fn render_summary(&self) -> String {
        self.item.render_summary()
    }

    fn render_detail(&self) -> String {
        self.item.render_detail()
    }
}

/// Returns whether `deadline` has the fixed-width `YYYY-MM-DD` shape that
/// lexicographic ordering relies on.
pub fn is_iso_deadline(deadline: &str) -> bool {
    ISO_DEADLINE_RE.is_match(deadline)
}

/// Replaces empty tag tokens with [`GENERIC_TAG`] and guarantees at least one
/// tag.
pub fn normalize_note_tags(tags: Vec<String>) -> Vec<String> {
    let mut normalized = tags
        .into_iter()
        .map(|tag| {
            if tag.is_empty() {
                GENERIC_TAG.to_string()
            } else {
                tag
            }
        })
        .collect::<Vec<_>>();
    if normalized.is_empty() {
        normalized.push(GENERIC_TAG.to_string());
    }
    normalized
}

fn validate_progress(progress: f64) -> Result<(), ItemValidationError> {
    if !progress.is_finite() {
        return Err(ItemValidationError::NonFiniteProgress);
    }
    if progress == PROGRESS_SENTINEL {
        return Err(ItemValidationError::SentinelProgress);
    }
    if !(0.0..=1.0).contains(&progress) {
        return Err(ItemValidationError::ProgressOutOfRange(progress));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{is_iso_deadline, normalize_note_tags, VariantTag, GENERIC_TAG};

    #[test]
    fn variant_tags_roundtrip_through_line_format_strings() {
        for tag in VariantTag::ALL {
            assert_eq!(VariantTag::parse(tag.as_str()), Some(tag));
        }
        assert_eq!(VariantTag::parse("task"), None);
        assert_eq!(VariantTag::parse("Event"), None);
    }

    #[test]
    fn normalize_note_tags_substitutes_empty_tokens() {
        let tags = normalize_note_tags(vec!["work".to_string(), String::new()]);
        assert_eq!(tags, vec!["work".to_string(), GENERIC_TAG.to_string()]);
        assert_eq!(normalize_note_tags(Vec::new()), vec![GENERIC_TAG.to_string()]);
    }

    #[test]
    fn iso_deadline_shape_check() {
        assert!(is_iso_deadline("2024-05-01"));
        assert!(!is_iso_deadline("2024-5-1"));
        assert!(!is_iso_deadline("No Deadline"));
    }
}
