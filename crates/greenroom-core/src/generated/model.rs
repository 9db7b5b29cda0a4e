//! Enriched record types for the generated views.
//!
//! Generated documents are the denormalized join results consumed by the
//! conference app UI: sessions carry resolved speaker summaries, speakers
//! carry back-references to their sessions, schedule days carry full session
//! payloads instead of bare keys.
//!
//! Derived lists are skipped during serialization when empty so a speaker
//! with no session assignments persists byte-identical to its raw record.

use crate::session::Session;
use crate::speaker::Speaker;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// Compact speaker payload embedded in enriched sessions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpeakerSummary {
    pub id: String,
    pub name: String,
}

impl SpeakerSummary {
    pub fn new(id: impl Into<String>, speaker: &Speaker) -> Self {
        Self {
            id: id.into(),
            name: speaker.name.clone(),
        }
    }
}

/// Compact session payload embedded in enriched speakers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionRef {
    pub id: String,
    pub title: String,
}

impl SessionRef {
    pub fn new(id: impl Into<String>, session: &Session) -> Self {
        Self {
            id: id.into(),
            title: session.title.clone(),
        }
    }
}

/// A session document augmented with resolved speaker payloads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnrichedSession {
    /// Collection key, embedded so schedule consumers can link back
    pub id: String,
    pub title: String,
    /// Resolved speakers, in the order the raw session references them
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub speakers: Vec<SpeakerSummary>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl EnrichedSession {
    /// Starts an enriched session from a raw one, with no speakers resolved
    /// yet.
    pub fn from_raw(id: impl Into<String>, session: &Session) -> Self {
        Self {
            id: id.into(),
            title: session.title.clone(),
            speakers: Vec::new(),
            extra: session.extra.clone(),
        }
    }
}

/// A speaker document augmented with back-references to its sessions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnrichedSpeaker {
    pub name: String,
    /// Sessions this speaker presents, in session iteration order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sessions: Vec<SessionRef>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl EnrichedSpeaker {
    /// Starts an enriched speaker from a raw one, with no sessions assigned
    /// yet. Serializes identically to the raw record until a session is
    /// appended.
    pub fn from_raw(speaker: &Speaker) -> Self {
        Self {
            name: speaker.name.clone(),
            sessions: Vec::new(),
            extra: speaker.extra.clone(),
        }
    }
}

/// A timeslot whose session keys are replaced by full enriched sessions.
///
/// Keys that do not resolve to a known session are dropped rather than kept
/// as dangling references.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrichedTimeslot {
    pub start_time: String,
    pub end_time: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sessions: Vec<EnrichedSession>,
}

/// A schedule day carrying resolved session (and transitively speaker)
/// payloads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnrichedScheduleEntry {
    pub date: NaiveDate,
    pub timeslots: Vec<EnrichedTimeslot>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// The output of one aggregation run.
///
/// Exactly one variant is selected per run, in priority order: no sessions at
/// all yields a raw speaker passthrough, a disabled or empty schedule yields
/// the session/speaker cross-link only, and a populated enabled schedule
/// yields all three views.
#[derive(Debug, Clone, PartialEq)]
pub enum GeneratedViews {
    /// No sessions exist; speakers pass through unenriched.
    SpeakersOnly {
        speakers: BTreeMap<String, EnrichedSpeaker>,
    },
    /// Sessions and speakers cross-linked; schedule not mapped.
    SessionsSpeakers {
        sessions: BTreeMap<String, EnrichedSession>,
        speakers: BTreeMap<String, EnrichedSpeaker>,
    },
    /// Full three-way mapping.
    SessionsSpeakersSchedule {
        sessions: BTreeMap<String, EnrichedSession>,
        speakers: BTreeMap<String, EnrichedSpeaker>,
        schedule: BTreeMap<String, EnrichedScheduleEntry>,
    },
}

impl GeneratedViews {
    /// The sessions view, when this variant produces one.
    pub fn sessions(&self) -> Option<&BTreeMap<String, EnrichedSession>> {
        match self {
            Self::SpeakersOnly { .. } => None,
            Self::SessionsSpeakers { sessions, .. }
            | Self::SessionsSpeakersSchedule { sessions, .. } => Some(sessions),
        }
    }

    /// The speakers view. Every variant produces one.
    pub fn speakers(&self) -> &BTreeMap<String, EnrichedSpeaker> {
        match self {
            Self::SpeakersOnly { speakers }
            | Self::SessionsSpeakers { speakers, .. }
            | Self::SessionsSpeakersSchedule { speakers, .. } => speakers,
        }
    }

    /// Mutable speakers view, used for the changed-speaker fallback
    /// injection.
    pub fn speakers_mut(&mut self) -> &mut BTreeMap<String, EnrichedSpeaker> {
        match self {
            Self::SpeakersOnly { speakers }
            | Self::SessionsSpeakers { speakers, .. }
            | Self::SessionsSpeakersSchedule { speakers, .. } => speakers,
        }
    }

    /// The schedule view, when this variant produces one.
    pub fn schedule(&self) -> Option<&BTreeMap<String, EnrichedScheduleEntry>> {
        match self {
            Self::SessionsSpeakersSchedule { schedule, .. } => Some(schedule),
            _ => None,
        }
    }
}

/// Builds the raw-speaker passthrough used when no sessions exist.
impl From<&BTreeMap<String, Speaker>> for GeneratedViews {
    fn from(raw: &BTreeMap<String, Speaker>) -> Self {
        let speakers = raw
            .iter()
            .map(|(id, speaker)| (id.clone(), EnrichedSpeaker::from_raw(speaker)))
            .collect();
        Self::SpeakersOnly { speakers }
    }
}
