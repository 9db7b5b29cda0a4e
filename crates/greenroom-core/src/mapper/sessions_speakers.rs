//! Session-speaker cross-linking.

use crate::generated::{EnrichedSession, EnrichedSpeaker, SessionRef, SpeakerSummary};
use crate::session::Session;
use crate::speaker::Speaker;
use std::collections::BTreeMap;

/// Output of [`map_sessions_speakers`]: the two cross-linked views.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionsSpeakersViews {
    pub sessions: BTreeMap<String, EnrichedSession>,
    pub speakers: BTreeMap<String, EnrichedSpeaker>,
}

/// Joins sessions and speakers into two enriched views.
///
/// For each session, each referenced speaker key is resolved against the
/// speakers map: the speaker's summary is appended to the session's derived
/// speaker list and a back-reference to the session is appended to the
/// speaker's derived session list.
///
/// - A session referencing an unknown speaker key keeps going; no
///   placeholder speaker is fabricated for it.
/// - A speaker referenced by zero sessions does not appear in the output at
///   all. The orchestrator handles the changed-speaker fallback separately.
/// - Derived lists append in input iteration order.
pub fn map_sessions_speakers(
    sessions: &BTreeMap<String, Session>,
    speakers: &BTreeMap<String, Speaker>,
) -> SessionsSpeakersViews {
    let mut out_sessions = BTreeMap::new();
    let mut out_speakers: BTreeMap<String, EnrichedSpeaker> = BTreeMap::new();

    for (session_id, session) in sessions {
        let mut enriched = EnrichedSession::from_raw(session_id, session);

        for speaker_id in &session.speakers {
            let Some(speaker) = speakers.get(speaker_id) else {
                // Referential gap: tolerated, resolved entry simply omitted.
                continue;
            };

            enriched
                .speakers
                .push(SpeakerSummary::new(speaker_id, speaker));
            out_speakers
                .entry(speaker_id.clone())
                .or_insert_with(|| EnrichedSpeaker::from_raw(speaker))
                .sessions
                .push(SessionRef::new(session_id, session));
        }

        out_sessions.insert(session_id.clone(), enriched);
    }

    SessionsSpeakersViews {
        sessions: out_sessions,
        speakers: out_speakers,
    }
}
