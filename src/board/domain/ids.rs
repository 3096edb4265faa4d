//! Identifier types for the board domain.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use uuid::Uuid;

/// Namespace for identifiers derived from storage keys that are not UUIDs.
const STORAGE_KEY_NAMESPACE: Uuid = Uuid::from_u128(0x3f1c_9a52_7be4_5d06_9c1e_84a7_d2f0_6b3e);

/// Error returned when a task identifier is parsed from a blank string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("task id must not be empty")]
pub struct ParseTaskIdError;

/// Unique identifier for a task on the board.
///
/// New identifiers are UUIDv7 values, time-ordered at millisecond precision.
/// Boards written by older clients key tasks with arbitrary strings such as
/// millisecond timestamps; those keys map onto stable name-based UUIDs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(Uuid);

impl TaskId {
    /// Creates a new time-ordered task identifier.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }

    /// Creates a task identifier from an existing UUID.
    #[must_use]
    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Derives the identifier for a storage key that is not a UUID.
    ///
    /// The same key always yields the same identifier.
    #[must_use]
    pub fn from_storage_key(key: &str) -> Self {
        Self(Uuid::new_v5(&STORAGE_KEY_NAMESPACE, key.as_bytes()))
    }

    /// Returns the wrapped UUID.
    #[must_use]
    pub const fn into_inner(self) -> Uuid {
        self.0
    }
}

impl Default for TaskId {
    fn default() -> Self {
        Self::new()
    }
}

impl AsRef<Uuid> for TaskId {
    fn as_ref(&self) -> &Uuid {
        &self.0
    }
}

/// Accepts any non-blank string: UUIDs parse as themselves, anything else
/// through [`TaskId::from_storage_key`].
impl FromStr for TaskId {
    type Err = ParseTaskIdError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let key = value.trim();
        if key.is_empty() {
            return Err(ParseTaskIdError);
        }
        Ok(Uuid::parse_str(key).map_or_else(|_| Self::from_storage_key(key), Self))
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Single-use token identifying a pending dialog continuation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FlowToken(Uuid);

impl FlowToken {
    /// Creates a new random flow token.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for FlowToken {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for FlowToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
