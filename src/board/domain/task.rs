//! Task record and the value types used to create and edit it.

use super::{BoardDomainError, Column, TaskId};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Validated title and description for a task about to be created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskDraft {
    title: String,
    description: String,
}

impl TaskDraft {
    /// Creates a draft from raw user input.
    ///
    /// Both fields are trimmed.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::EmptyTitle`] when the title is blank.
    pub fn new(
        title: impl AsRef<str>,
        description: impl AsRef<str>,
    ) -> Result<Self, BoardDomainError> {
        let trimmed_title = title.as_ref().trim();
        if trimmed_title.is_empty() {
            return Err(BoardDomainError::EmptyTitle);
        }
        Ok(Self {
            title: trimmed_title.to_owned(),
            description: description.as_ref().trim().to_owned(),
        })
    }

    /// Returns the draft title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the draft description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }
}

/// Partial update applied to an existing task.
///
/// Only the fields that are set are merged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskPatch {
    title: Option<String>,
    description: Option<String>,
    is_new: Option<bool>,
}

impl TaskPatch {
    /// Creates an empty patch.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the replacement title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets the replacement description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the is-new flag.
    #[must_use]
    pub const fn with_is_new(mut self, is_new: bool) -> Self {
        self.is_new = Some(is_new);
        self
    }

    /// Returns the replacement title, if any.
    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Returns the replacement description, if any.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the replacement is-new flag, if any.
    #[must_use]
    pub const fn is_new(&self) -> Option<bool> {
        self.is_new
    }

    /// Returns `true` when no field is set.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.title.is_none() && self.description.is_none() && self.is_new.is_none()
    }
}

/// A card on the board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    title: String,
    description: String,
    created_at: DateTime<Utc>,
    column: Column,
    order: usize,
    is_new: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    storage_key: Option<String>,
}

/// Parameter object for reconstructing a persisted task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTaskData {
    /// Persisted task identifier.
    pub id: TaskId,
    /// Persisted title.
    pub title: String,
    /// Persisted description.
    pub description: String,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Persisted column.
    pub column: Column,
    /// Persisted column-local order.
    pub order: usize,
    /// Persisted is-new flag.
    pub is_new: bool,
    /// Key the task was stored under, when it differs from the canonical
    /// form of `id`.
    pub storage_key: Option<String>,
}

impl Task {
    /// Creates a new task in the `todo` column at the given order.
    #[must_use]
    pub fn new(draft: TaskDraft, order: usize, clock: &impl Clock) -> Self {
        Self {
            id: TaskId::new(),
            title: draft.title,
            description: draft.description,
            created_at: clock.utc(),
            column: Column::Todo,
            order,
            is_new: true,
            storage_key: None,
        }
    }

    /// Reconstructs a task from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedTaskData) -> Self {
        Self {
            id: data.id,
            title: data.title,
            description: data.description,
            created_at: data.created_at,
            column: data.column,
            order: data.order,
            is_new: data.is_new,
            storage_key: data.storage_key,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the task title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the task description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the column holding the task.
    #[must_use]
    pub const fn column(&self) -> Column {
        self.column
    }

    /// Returns the column-local order.
    #[must_use]
    pub const fn order(&self) -> usize {
        self.order
    }

    /// Returns whether the task is still highlighted as new.
    #[must_use]
    pub const fn is_new(&self) -> bool {
        self.is_new
    }

    /// Returns the key the task is stored under.
    ///
    /// Tasks adopted from a snapshot keep the key they were loaded with.
    #[must_use]
    pub fn storage_key(&self) -> String {
        self.storage_key
            .clone()
            .unwrap_or_else(|| self.id.to_string())
    }

    /// Returns `true` when title and description match after trimming and
    /// case folding.
    #[must_use]
    pub fn has_same_content(&self, title: &str, description: &str) -> bool {
        fold(&self.title) == fold(title) && fold(&self.description) == fold(description)
    }

    /// Merges the set fields of `patch`, returning whether anything changed.
    ///
    /// A title that is blank after trimming is ignored.
    pub(crate) fn apply_patch(&mut self, patch: &TaskPatch) -> bool {
        let mut changed = false;
        if let Some(title) = patch.title().map(str::trim)
            && !title.is_empty()
            && title != self.title
        {
            title.clone_into(&mut self.title);
            changed = true;
        }
        if let Some(description) = patch.description()
            && description != self.description
        {
            description.clone_into(&mut self.description);
            changed = true;
        }
        if let Some(is_new) = patch.is_new()
            && is_new != self.is_new
        {
            self.is_new = is_new;
            changed = true;
        }
        changed
    }

    /// Moves the task to `column`, leaving every other field untouched.
    pub(crate) const fn set_column(&mut self, column: Column) {
        self.column = column;
    }

    /// Assigns a column-local order.
    pub(crate) const fn set_order(&mut self, order: usize) {
        self.order = order;
    }
}

fn fold(value: &str) -> String {
    value.trim().to_lowercase()
}
