//! In-memory item catalog.
//!
//! # Responsibility
//! - Own every item for the process lifetime in insertion order.
//! - Hand out borrowed, typed subsets for the ordering and search engines.
//!
//! # Invariants
//! - Items are validated before they are appended.
//! - Item ids are unique within one catalog.
//! - There is no update or removal; items drop with the catalog.
//! - Subsets borrow the catalog, so it cannot be mutated while an engine
//!   holds them.

use crate::model::item::{
    is_iso_deadline, Family, GoalEntry, Item, ItemId, ItemValidationError, NoteEntry, TaskEntry,
    VariantTag,
};
use log::{debug, warn};
use std::collections::HashSet;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type CatalogResult<T> = Result<T, CatalogError>;

/// Errors raised when appending items.
#[derive(Debug, Clone, PartialEq)]
pub enum CatalogError {
    Validation(ItemValidationError),
    DuplicateId(ItemId),
}

impl Display for CatalogError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::DuplicateId(id) => write!(f, "item id already present in catalog: {id}"),
        }
    }
}

impl Error for CatalogError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::DuplicateId(_) => None,
        }
    }
}

impl From<ItemValidationError> for CatalogError {
    fn from(value: ItemValidationError) -> Self {
        Self::Validation(value)
    }
}

/// Exclusive, insertion-ordered owner of all items.
#[derive(Debug, Default)]
pub struct Catalog {
    items: Vec<Item>,
    ids: HashSet<ItemId>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates and appends one item, returning its id.
    pub fn add(&mut self, item: Item) -> CatalogResult<ItemId> {
        item.validate()?;
        if self.ids.contains(&item.id) {
            return Err(CatalogError::DuplicateId(item.id));
        }

        if let Some(task) = item.as_task() {
            if !is_iso_deadline(&task.fields.deadline) {
                warn!(
                    "event=deadline_not_iso module=catalog status=ok deadline_len={} \
                     ordering=lexicographic",
                    task.fields.deadline.len()
                );
            }
        }

        let id = item.id;
        let variant = item.variant_tag();
        self.ids.insert(id);
        self.items.push(item);
        debug!(
            "event=catalog_add module=catalog status=ok variant={} items={}",
            variant,
            self.items.len()
        );
        Ok(id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// All items in insertion order.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Item> {
        self.items.iter()
    }

    pub fn get(&self, id: ItemId) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Items of one top-level family, in insertion order.
    pub fn filter_by_family(&self, family: Family) -> Vec<&Item> {
        self.items
            .iter()
            .filter(|item| item.family() == family)
            .collect()
    }

    /// Items of exactly one variant, in insertion order.
    ///
    /// Base tags (`Task`, `Note`, `Goal`) select only the generic variant,
    /// not the whole family.
    pub fn by_variant(&self, tag: VariantTag) -> Vec<&Item> {
        self.items
            .iter()
            .filter(|item| item.variant_tag() == tag)
            .collect()
    }

    pub fn tasks(&self) -> Vec<TaskEntry<'_>> {
        self.items.iter().filter_map(Item::as_task).collect()
    }

    pub fn notes(&self) -> Vec<NoteEntry<'_>> {
        self.items.iter().filter_map(Item::as_note).collect()
    }

    pub fn goals(&self) -> Vec<GoalEntry<'_>> {
        self.items.iter().filter_map(Item::as_goal).collect()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Item;
    type IntoIter = std::slice::Iter<'a, Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
