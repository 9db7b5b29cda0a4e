//! Schedule-aware three-way mapping.

use super::sessions_speakers::map_sessions_speakers;
use crate::generated::{EnrichedScheduleEntry, EnrichedSession, EnrichedSpeaker, EnrichedTimeslot};
use crate::schedule::ScheduleEntry;
use crate::session::Session;
use crate::speaker::Speaker;
use std::collections::BTreeMap;

/// Output of [`map_sessions_speakers_schedule`]: all three enriched views.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionsSpeakersScheduleViews {
    pub sessions: BTreeMap<String, EnrichedSession>,
    pub speakers: BTreeMap<String, EnrichedSpeaker>,
    pub schedule: BTreeMap<String, EnrichedScheduleEntry>,
}

/// Joins sessions, speakers and schedule into three enriched views.
///
/// Performs the same session-speaker cross-linking as
/// [`map_sessions_speakers`], then resolves each timeslot's session keys
/// into full enriched session payloads. The schedule slice arrives ordered by
/// date descending from the repository and each day keeps its timeslots in
/// agenda order.
///
/// - A timeslot key absent from the sessions map resolves to nothing; the
///   slot simply carries fewer sessions. Never an error.
/// - Schedule enrichment is additive: sessions that appear in no timeslot
///   still receive their speaker enrichment.
pub fn map_sessions_speakers_schedule(
    sessions: &BTreeMap<String, Session>,
    speakers: &BTreeMap<String, Speaker>,
    schedule: &[(String, ScheduleEntry)],
) -> SessionsSpeakersScheduleViews {
    let base = map_sessions_speakers(sessions, speakers);

    let mut out_schedule = BTreeMap::new();
    for (day_id, day) in schedule {
        let timeslots = day
            .timeslots
            .iter()
            .map(|slot| EnrichedTimeslot {
                start_time: slot.start_time.clone(),
                end_time: slot.end_time.clone(),
                sessions: slot
                    .sessions
                    .iter()
                    .filter_map(|session_id| base.sessions.get(session_id).cloned())
                    .collect(),
            })
            .collect();

        out_schedule.insert(
            day_id.clone(),
            EnrichedScheduleEntry {
                date: day.date,
                timeslots,
                extra: day.extra.clone(),
            },
        );
    }

    SessionsSpeakersScheduleViews {
        sessions: base.sessions,
        speakers: base.speakers,
        schedule: out_schedule,
    }
}
