//! Speaker domain model.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A speaker document as stored in the raw `speakers` collection.
///
/// As with sessions, only the name is read by the mapping logic; bio, company
/// and any other attributes travel through `extra` untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Speaker {
    /// Speaker display name, copied into derived session references
    pub name: String,
    /// Descriptive attributes opaque to the mapper
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Speaker {
    /// Creates a speaker with a display name and no extra attributes.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            extra: Map::new(),
        }
    }
}

/// The speaker whose write event triggered the current aggregation run.
///
/// Deletions carry no after-state and therefore produce no `ChangedSpeaker`;
/// the fallback injection only applies when a record still exists.
#[derive(Debug, Clone, PartialEq)]
pub struct ChangedSpeaker {
    /// Collection key of the changed speaker
    pub id: String,
    /// The speaker document as written
    pub record: Speaker,
}

impl ChangedSpeaker {
    pub fn new(id: impl Into<String>, record: Speaker) -> Self {
        Self {
            id: id.into(),
            record,
        }
    }
}
