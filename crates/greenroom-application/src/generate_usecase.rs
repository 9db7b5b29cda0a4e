//! View generation use case.
//!
//! `GenerateViewsUseCase` is the aggregation orchestrator: it reads the three
//! source collections, picks a mapping strategy from data availability and
//! the schedule flag, merges in a late-arriving changed speaker, and persists
//! the resulting views.

use anyhow::Result;
use greenroom_core::config::AppConfig;
use greenroom_core::generated::{EnrichedSpeaker, GeneratedViewRepository, GeneratedViews};
use greenroom_core::mapper::{map_sessions_speakers, map_sessions_speakers_schedule};
use greenroom_core::schedule::ScheduleRepository;
use greenroom_core::session::SessionRepository;
use greenroom_core::speaker::{ChangedSpeaker, SpeakerRepository};
use greenroom_core::GreenroomError;
use std::sync::Arc;

/// Use case that recomputes the generated views from scratch.
///
/// Each invocation is an isolated unit of work: the three source reads run
/// concurrently, the run waits for all of them, and every view is rebuilt in
/// full. Concurrent invocations race at document granularity with no mutual
/// exclusion; the last write per document wins.
pub struct GenerateViewsUseCase {
    /// Repository for the raw sessions collection
    session_repository: Arc<dyn SessionRepository>,
    /// Repository for the raw speakers collection
    speaker_repository: Arc<dyn SpeakerRepository>,
    /// Repository for the raw schedule collection
    schedule_repository: Arc<dyn ScheduleRepository>,
    /// Write side of the generated output collections
    generated_repository: Arc<dyn GeneratedViewRepository>,
    /// Configuration captured at construction, not read ambiently
    config: AppConfig,
}

impl GenerateViewsUseCase {
    /// Creates a new `GenerateViewsUseCase` instance.
    ///
    /// # Arguments
    ///
    /// * `session_repository` - Raw sessions collection
    /// * `speaker_repository` - Raw speakers collection
    /// * `schedule_repository` - Raw schedule collection
    /// * `generated_repository` - Generated output collections
    /// * `config` - Application configuration, including the schedule flag
    pub fn new(
        session_repository: Arc<dyn SessionRepository>,
        speaker_repository: Arc<dyn SpeakerRepository>,
        schedule_repository: Arc<dyn ScheduleRepository>,
        generated_repository: Arc<dyn GeneratedViewRepository>,
        config: AppConfig,
    ) -> Self {
        Self {
            session_repository,
            speaker_repository,
            schedule_repository,
            generated_repository,
            config,
        }
    }

    /// Returns the schedule flag, or the configuration-missing error when
    /// the operator never set it. An explicit "false" is a valid state; an
    /// absent flag is not.
    pub fn schedule_enabled(&self) -> Result<bool, GreenroomError> {
        self.config.schedule_enabled().ok_or_else(|| {
            GreenroomError::config(
                "Schedule config is NOT set! Add `enabled = \"true\"` under [schedule] \
                 in config.toml and try again.",
            )
        })
    }

    /// Recomputes and persists all generated views.
    ///
    /// `changed_speaker` carries the speaker whose write triggered this run,
    /// if any; when the mapping leaves that speaker out (no session
    /// references it yet), the raw record is injected so the speaker is
    /// visible in generated output immediately.
    ///
    /// Aborts without writing anything when the schedule flag is entirely
    /// unset.
    pub async fn regenerate(
        &self,
        changed_speaker: Option<ChangedSpeaker>,
    ) -> Result<GeneratedViews> {
        let schedule_enabled = match self.schedule_enabled() {
            Ok(enabled) => enabled,
            Err(e) => {
                tracing::error!("{e}");
                return Err(e.into());
            }
        };

        let (sessions, schedule, speakers) = tokio::try_join!(
            self.session_repository.list_all(),
            self.schedule_repository.list_by_date_desc(),
            self.speaker_repository.list_all(),
        )?;

        // First match wins: no sessions at all, no usable schedule, or the
        // full three-way mapping.
        let mut views = if sessions.is_empty() {
            GeneratedViews::from(&speakers)
        } else if !schedule_enabled || schedule.is_empty() {
            let mapped = map_sessions_speakers(&sessions, &speakers);
            GeneratedViews::SessionsSpeakers {
                sessions: mapped.sessions,
                speakers: mapped.speakers,
            }
        } else {
            let mapped = map_sessions_speakers_schedule(&sessions, &speakers, &schedule);
            GeneratedViews::SessionsSpeakersSchedule {
                sessions: mapped.sessions,
                speakers: mapped.speakers,
                schedule: mapped.schedule,
            }
        };

        // A just-created speaker has no session assignments yet; inject the
        // raw record so it still shows up. The mapping result wins when the
        // speaker is already present.
        if let Some(changed) = changed_speaker {
            if !views.speakers().contains_key(&changed.id) {
                tracing::debug!("Injecting unassigned changed speaker '{}'", changed.id);
                views
                    .speakers_mut()
                    .insert(changed.id, EnrichedSpeaker::from_raw(&changed.record));
            }
        }

        self.persist(&views).await?;
        Ok(views)
    }

    /// Writes each non-empty view as a batch; empty views are skipped so a
    /// legitimately empty result never clears a previously generated
    /// collection (no reconciliation pass exists).
    async fn persist(&self, views: &GeneratedViews) -> Result<()> {
        if let Some(sessions) = views.sessions() {
            if !sessions.is_empty() {
                self.generated_repository.save_sessions(sessions).await?;
            }
        }
        if !views.speakers().is_empty() {
            self.generated_repository
                .save_speakers(views.speakers())
                .await?;
        }
        if let Some(schedule) = views.schedule() {
            if !schedule.is_empty() {
                self.generated_repository.save_schedule(schedule).await?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use chrono::NaiveDate;
    use greenroom_core::config::ScheduleConfig;
    use greenroom_core::generated::{EnrichedScheduleEntry, EnrichedSession};
    use greenroom_core::schedule::{ScheduleEntry, Timeslot};
    use greenroom_core::session::Session;
    use greenroom_core::speaker::Speaker;
    use std::collections::BTreeMap;
    use std::sync::Mutex;

    struct InMemorySessions(BTreeMap<String, Session>);

    #[async_trait]
    impl SessionRepository for InMemorySessions {
        async fn list_all(&self) -> Result<BTreeMap<String, Session>> {
            Ok(self.0.clone())
        }
    }

    struct InMemorySpeakers(BTreeMap<String, Speaker>);

    #[async_trait]
    impl SpeakerRepository for InMemorySpeakers {
        async fn list_all(&self) -> Result<BTreeMap<String, Speaker>> {
            Ok(self.0.clone())
        }
    }

    struct InMemorySchedule(Vec<(String, ScheduleEntry)>);

    #[async_trait]
    impl ScheduleRepository for InMemorySchedule {
        async fn list_by_date_desc(&self) -> Result<Vec<(String, ScheduleEntry)>> {
            Ok(self.0.clone())
        }
    }

    /// Records every batch handed to it, for asserting what got persisted.
    #[derive(Default)]
    struct RecordingGeneratedRepo {
        sessions: Mutex<Vec<BTreeMap<String, EnrichedSession>>>,
        speakers: Mutex<Vec<BTreeMap<String, EnrichedSpeaker>>>,
        schedule: Mutex<Vec<BTreeMap<String, EnrichedScheduleEntry>>>,
    }

    #[async_trait]
    impl GeneratedViewRepository for RecordingGeneratedRepo {
        async fn save_sessions(
            &self,
            sessions: &BTreeMap<String, EnrichedSession>,
        ) -> Result<()> {
            self.sessions.lock().unwrap().push(sessions.clone());
            Ok(())
        }

        async fn save_speakers(
            &self,
            speakers: &BTreeMap<String, EnrichedSpeaker>,
        ) -> Result<()> {
            self.speakers.lock().unwrap().push(speakers.clone());
            Ok(())
        }

        async fn save_schedule(
            &self,
            schedule: &BTreeMap<String, EnrichedScheduleEntry>,
        ) -> Result<()> {
            self.schedule.lock().unwrap().push(schedule.clone());
            Ok(())
        }
    }

    fn config(enabled: Option<&str>) -> AppConfig {
        AppConfig {
            schedule: enabled.map(|value| ScheduleConfig {
                enabled: value.to_string(),
            }),
        }
    }

    fn usecase(
        sessions: Vec<(&str, Session)>,
        speakers: Vec<(&str, Speaker)>,
        schedule: Vec<(&str, ScheduleEntry)>,
        config: AppConfig,
    ) -> (GenerateViewsUseCase, Arc<RecordingGeneratedRepo>) {
        let generated = Arc::new(RecordingGeneratedRepo::default());
        let usecase = GenerateViewsUseCase::new(
            Arc::new(InMemorySessions(
                sessions
                    .into_iter()
                    .map(|(id, s)| (id.to_string(), s))
                    .collect(),
            )),
            Arc::new(InMemorySpeakers(
                speakers
                    .into_iter()
                    .map(|(id, s)| (id.to_string(), s))
                    .collect(),
            )),
            Arc::new(InMemorySchedule(
                schedule
                    .into_iter()
                    .map(|(id, s)| (id.to_string(), s))
                    .collect(),
            )),
            generated.clone(),
            config,
        );
        (usecase, generated)
    }

    fn agenda_day() -> ScheduleEntry {
        ScheduleEntry {
            date: NaiveDate::from_ymd_opt(2026, 9, 18).unwrap(),
            timeslots: vec![Timeslot::new("09:00", "10:00", vec!["s1".into()])],
            extra: serde_json::Map::new(),
        }
    }

    #[tokio::test]
    async fn test_missing_flag_aborts_without_writes() {
        let (usecase, generated) = usecase(
            vec![("s1", Session::new("Intro", vec![]))],
            vec![("p1", Speaker::new("Ada"))],
            vec![],
            config(None),
        );

        let err = usecase.regenerate(None).await.unwrap_err();
        let core_err = err.downcast_ref::<GreenroomError>().unwrap();
        assert!(core_err.is_config());

        assert!(generated.sessions.lock().unwrap().is_empty());
        assert!(generated.speakers.lock().unwrap().is_empty());
        assert!(generated.schedule.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_no_sessions_yields_speaker_passthrough() {
        // Schedule content is irrelevant when no sessions exist.
        let (usecase, generated) = usecase(
            vec![],
            vec![("p1", Speaker::new("Ada"))],
            vec![("day1", agenda_day())],
            config(Some("true")),
        );

        let views = usecase.regenerate(None).await.unwrap();

        assert!(matches!(views, GeneratedViews::SpeakersOnly { .. }));
        assert_eq!(views.speakers()["p1"].name, "Ada");
        assert!(generated.sessions.lock().unwrap().is_empty());
        assert!(generated.schedule.lock().unwrap().is_empty());
        assert_eq!(generated.speakers.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_schedule_disabled_yields_speaker_only_mapping() {
        let (usecase, generated) = usecase(
            vec![("s1", Session::new("Intro", vec!["p1".into()]))],
            vec![("p1", Speaker::new("Ada"))],
            vec![("day1", agenda_day())],
            config(Some("false")),
        );

        let views = usecase.regenerate(None).await.unwrap();

        assert!(matches!(views, GeneratedViews::SessionsSpeakers { .. }));
        assert_eq!(views.speakers()["p1"].sessions.len(), 1);
        assert!(generated.schedule.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_empty_schedule_falls_back_to_speaker_only_mapping() {
        let (usecase, _) = usecase(
            vec![("s1", Session::new("Intro", vec!["p1".into()]))],
            vec![("p1", Speaker::new("Ada"))],
            vec![],
            config(Some("true")),
        );

        let views = usecase.regenerate(None).await.unwrap();
        assert!(matches!(views, GeneratedViews::SessionsSpeakers { .. }));
    }

    #[tokio::test]
    async fn test_enabled_schedule_yields_three_way_mapping() {
        let (usecase, generated) = usecase(
            vec![("s1", Session::new("Intro", vec!["p1".into()]))],
            vec![("p1", Speaker::new("Ada"))],
            vec![("day1", agenda_day())],
            config(Some("true")),
        );

        let views = usecase.regenerate(None).await.unwrap();

        assert!(matches!(
            views,
            GeneratedViews::SessionsSpeakersSchedule { .. }
        ));
        let schedule = views.schedule().unwrap();
        assert_eq!(schedule["day1"].timeslots[0].sessions[0].id, "s1");
        assert_eq!(generated.schedule.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_unassigned_changed_speaker_is_injected() {
        let (usecase, _) = usecase(
            vec![("s1", Session::new("Intro", vec!["p1".into()]))],
            vec![("p1", Speaker::new("Ada")), ("p2", Speaker::new("Grace"))],
            vec![],
            config(Some("false")),
        );

        let changed = ChangedSpeaker::new("p2", Speaker::new("Grace"));
        let views = usecase.regenerate(Some(changed)).await.unwrap();

        // p2 presents nothing, yet the triggering write makes it visible.
        let p2 = &views.speakers()["p2"];
        assert_eq!(p2.name, "Grace");
        assert!(p2.sessions.is_empty());
    }

    #[tokio::test]
    async fn test_mapped_changed_speaker_keeps_mapping_result() {
        let (usecase, _) = usecase(
            vec![("s1", Session::new("Intro", vec!["p1".into()]))],
            vec![("p1", Speaker::new("Ada"))],
            vec![],
            config(Some("false")),
        );

        // A stale trigger payload must not overwrite the mapped record.
        let changed = ChangedSpeaker::new("p1", Speaker::new("Old Name"));
        let views = usecase.regenerate(Some(changed)).await.unwrap();

        let p1 = &views.speakers()["p1"];
        assert_eq!(p1.name, "Ada");
        assert_eq!(p1.sessions.len(), 1);
    }

    #[tokio::test]
    async fn test_empty_views_are_not_persisted() {
        // One session referencing an unknown speaker: the sessions view is
        // non-empty, the speakers view is empty and must be skipped.
        let (usecase, generated) = usecase(
            vec![("s1", Session::new("Intro", vec!["ghost".into()]))],
            vec![],
            vec![],
            config(Some("false")),
        );

        usecase.regenerate(None).await.unwrap();

        assert_eq!(generated.sessions.lock().unwrap().len(), 1);
        assert!(generated.speakers.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_regeneration_is_idempotent() {
        let (usecase, generated) = usecase(
            vec![("s1", Session::new("Intro", vec!["p1".into()]))],
            vec![("p1", Speaker::new("Ada"))],
            vec![("day1", agenda_day())],
            config(Some("true")),
        );

        usecase.regenerate(None).await.unwrap();
        usecase.regenerate(None).await.unwrap();

        let speakers = generated.speakers.lock().unwrap();
        assert_eq!(speakers.len(), 2);
        assert_eq!(
            serde_json::to_vec(&speakers[0]).unwrap(),
            serde_json::to_vec(&speakers[1]).unwrap()
        );
        let schedule = generated.schedule.lock().unwrap();
        assert_eq!(
            serde_json::to_vec(&schedule[0]).unwrap(),
            serde_json::to_vec(&schedule[1]).unwrap()
        );
    }
}
