//! Rendering and input surfaces the synchronizer draws into and reads from.
//!
//! # Design
//! The surfaces are collaborators handed to the synchronizer at construction.
//! Every rendered row owns a `RemoveControl` with its item id bound at render
//! time, so a click handler never reads a shared binding.
//!
//! `ListView` and `TextField` are in-memory implementations for tests and
//! headless hosts.

use std::fmt;

use crate::types::{Item, ItemId};

/// Caption shown on every row's remove control.
pub const REMOVE_CAPTION: &str = "Delete";

/// The per-row delete control. Activating it removes exactly `id`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoveControl {
    id: ItemId,
}

impl RemoveControl {
    pub fn new(id: ItemId) -> Self {
        Self { id }
    }

    pub fn id(&self) -> &ItemId {
        &self.id
    }

    pub fn caption(&self) -> &'static str {
        REMOVE_CAPTION
    }
}

/// One rendered row: the item's name and its remove control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemRow {
    pub label: String,
    pub remove: RemoveControl,
}

impl From<Item> for ItemRow {
    fn from(item: Item) -> Self {
        Self {
            label: item.name,
            remove: RemoveControl::new(item.id),
        }
    }
}

/// Ordered container of item rows.
pub trait RenderSurface: Send {
    fn clear(&mut self);
    fn append(&mut self, row: ItemRow);
}

/// Text field plus submit trigger.
pub trait InputSurface: Send {
    fn value(&self) -> String;
    fn clear(&mut self);
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListView {
    rows: Vec<ItemRow>,
}

impl ListView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rows(&self) -> &[ItemRow] {
        &self.rows
    }

    pub fn labels(&self) -> Vec<&str> {
        self.rows.iter().map(|row| row.label.as_str()).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl RenderSurface for ListView {
    fn clear(&mut self) {
        self.rows.clear();
    }

    fn append(&mut self, row: ItemRow) {
        self.rows.push(row);
    }
}

impl fmt::Display for ListView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.rows {
            writeln!(f, "{} [{}]", row.label, row.remove.caption())?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextField {
    value: String,
}

impl TextField {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }
}

impl InputSurface for TextField {
    fn value(&self) -> String {
        self.value.clone()
    }

    fn clear(&mut self) {
        self.value.clear();
    }
}
