//! Line-format record parser.
//!
//! Format: `Tag,title,description,<variant fields>`
//! - tasks: `deadline,priority[,interval]`
//! - notes: `tags[,password]`, tags separated by `;` inside one field
//! - goals: `progress`
//!
//! Numbers are read as the leading numeric prefix of the remaining text, the
//! way stream extraction reads them. Missing or malformed numeric fields fall
//! back to zero and are reported as defaulted rather than rejected.

use crate::ingest::{DefaultedField, IngestError, IngestResult};
use crate::model::item::{GoalKind, Item, NoteKind, TaskKind, VariantTag};
use once_cell::sync::Lazy;
use regex::Regex;

const TAG_SEPARATOR: char = ';';

static LEADING_INT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*([+-]?\d+)").expect("valid integer regex"));
static LEADING_REAL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s*([+-]?(?:\d+\.?\d*|\.\d+)(?:[eE][+-]?\d+)?)").expect("valid real regex")
});

/// One parsed line, possibly with defaulted fields.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedRecord {
    pub item: Item,
    /// Fields that were missing or malformed and got default values.
    pub defaulted: Vec<DefaultedField>,
}

impl ParsedRecord {
    /// Whether any field had to be defaulted.
    pub fn is_partial(&self) -> bool {
        !self.defaulted.is_empty()
    }
}

/// Parses one non-blank record line into an item.
///
/// # Errors
/// - `EmptyVariant` / `UnknownVariant` when the first field is not a tag.
/// - `MissingTitle` when the title field is absent or blank.
///
/// A `ProtectedNote` line without a password field is kept with an empty
/// password and `DefaultedField::Password`; an empty attempt unlocks it.
pub fn parse_line(line: &str) -> IngestResult<ParsedRecord> {
    let line = line.strip_suffix('\r').unwrap_or(line);
    let mut fields = FieldCursor::new(line);

    let raw_tag = fields.next_field().unwrap_or_default().trim();
    if raw_tag.is_empty() {
        return Err(IngestError::EmptyVariant);
    }
    let tag = VariantTag::parse(raw_tag)
        .ok_or_else(|| IngestError::UnknownVariant(raw_tag.to_string()))?;

    let title = match fields.next_field() {
        Some(value) if !value.trim().is_empty() => value,
        _ => return Err(IngestError::MissingTitle(tag)),
    };
    let description = fields.next_field().unwrap_or_default();
    let mut defaulted = Vec::new();

    let item = match tag {
        VariantTag::Task | VariantTag::RecurringTask | VariantTag::OneTimeTask => {
            let deadline = fields.next_field().unwrap_or_else(|| {
                defaulted.push(DefaultedField::Deadline);
                ""
            });
            let priority = fields.leading_int().unwrap_or_else(|| {
                defaulted.push(DefaultedField::Priority);
                0
            });
            let kind = match tag {
                VariantTag::RecurringTask => TaskKind::Recurring {
                    interval: fields
                        .rest()
                        .unwrap_or_else(|| {
                            defaulted.push(DefaultedField::Interval);
                            ""
                        })
                        .to_string(),
                },
                VariantTag::OneTimeTask => TaskKind::OneTime,
                _ => TaskKind::Generic,
            };
            Item::task(title, description, deadline, priority, kind)
        }
        VariantTag::Note | VariantTag::ProtectedNote | VariantTag::PublicNote => {
            let tags = fields
                .next_field()
                .map(split_tags)
                .unwrap_or_else(|| {
                    defaulted.push(DefaultedField::Tags);
                    Vec::new()
                });
            let kind = match tag {
                VariantTag::ProtectedNote => NoteKind::Protected {
                    password: fields
                        .rest()
                        .unwrap_or_else(|| {
                            defaulted.push(DefaultedField::Password);
                            ""
                        })
                        .to_string(),
                },
                VariantTag::PublicNote => NoteKind::Public,
                _ => NoteKind::Generic,
            };
            Item::note(title, description, tags, kind)
        }
        VariantTag::Goal | VariantTag::QuantifiableGoal | VariantTag::NonQuantifiableGoal => {
            let progress = fields.leading_real().unwrap_or_else(|| {
                defaulted.push(DefaultedField::Progress);
                0.0
            });
            let kind = match tag {
                VariantTag::QuantifiableGoal => GoalKind::Quantifiable,
                VariantTag::NonQuantifiableGoal => GoalKind::NonQuantifiable,
                _ => GoalKind::Generic,
            };
            Item::goal(title, description, progress, kind)
        }
    };

    Ok(ParsedRecord { item, defaulted })
}

/// Splits a tags field on `;`. Empty tokens become `generic` at item creation.
pub fn split_tags(field: &str) -> Vec<String> {
    if field.is_empty() {
        return Vec::new();
    }
    field.split(TAG_SEPARATOR).map(str::to_string).collect()
}

/// Sequential reader over comma-delimited fields of one line.
struct FieldCursor<'a> {
    rest: Option<&'a str>,
}

impl<'a> FieldCursor<'a> {
    fn new(line: &'a str) -> Self {
        Self { rest: Some(line) }
    }

    /// Text up to the next comma, or the remaining text when none is left.
    fn next_field(&mut self) -> Option<&'a str> {
        let rest = self.rest?;
        match rest.split_once(',') {
            Some((field, tail)) => {
                self.rest = Some(tail);
                Some(field)
            }
            None => {
                self.rest = None;
                Some(rest)
            }
        }
    }

    /// All remaining text, including commas.
    fn rest(&mut self) -> Option<&'a str> {
        self.rest.take()
    }

    /// Leading integer of the remaining text; consumes through the next comma.
    fn leading_int(&mut self) -> Option<i64> {
        let value = self
            .capture_prefix(&LEADING_INT_RE)
            .and_then(|digits| digits.parse::<i64>().ok());
        self.skip_field();
        value
    }

    /// Leading real number of the remaining text; consumes through the next comma.
    fn leading_real(&mut self) -> Option<f64> {
        let value = self
            .capture_prefix(&LEADING_REAL_RE)
            .and_then(|digits| digits.parse::<f64>().ok());
        self.skip_field();
        value
    }

    fn capture_prefix(&self, pattern: &Regex) -> Option<&'a str> {
        let rest = self.rest?;
        pattern
            .captures(rest)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str())
    }

    fn skip_field(&mut self) {
        let _ = self.next_field();
    }
}
