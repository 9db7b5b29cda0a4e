//! Session domain model.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A conference session document as stored in the raw `sessions` collection.
///
/// Only the fields the mapping logic reads are modeled explicitly. All other
/// descriptive attributes (description, tags, language, ...) are opaque to
/// the mapper and carried through `extra` unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    /// Human-readable session title, copied into derived speaker references
    pub title: String,
    /// Keys of the speakers presenting this session
    #[serde(default)]
    pub speakers: Vec<String>,
    /// Descriptive attributes opaque to the mapper
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Session {
    /// Creates a session with a title and speaker keys, without extra
    /// attributes. Mostly useful in tests and seeding.
    pub fn new(title: impl Into<String>, speakers: Vec<String>) -> Self {
        Self {
            title: title.into(),
            speakers,
            extra: Map::new(),
        }
    }
}
