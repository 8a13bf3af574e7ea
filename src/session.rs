use tracing::{debug, info, warn};

use crate::caption::store::{CaptionId, CaptionRecord, CaptionStore};
use crate::caption::time::TimeInput;
use crate::caption::validator::validate_caption;
use crate::error::{ValidationError, VideoUrlError};
use crate::playback::{PlaybackState, Player, PlayerEvent};

/// Whether the form is creating a new caption or changing an existing one
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditMode {
    #[default]
    Idle,
    Editing { id: CaptionId },
}

/// Caption text plus start/end time inputs
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CaptionForm {
    pub text: String,
    pub start: TimeInput,
    pub end: TimeInput,
}

impl CaptionForm {
    pub fn clear(&mut self) {
        self.text.clear();
        self.start.clear();
        self.end.clear();
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    Added(CaptionId),
    Updated(CaptionId),
    /// Nothing loaded yet, so there is nothing to caption
    NoVideo,
}

/// Everything one editing session owns: the video, its playback state,
/// the captions and the form used to edit them.
#[derive(Debug)]
pub struct EditorSession {
    video_url: Option<String>,
    playback: PlaybackState,
    captions: CaptionStore,
    form: CaptionForm,
    mode: EditMode,
    error: Option<ValidationError>,
    active: Option<CaptionId>,
    seek_step: f64,
}

impl EditorSession {
    pub fn new(seek_step: f64) -> Self {
        Self {
            video_url: None,
            playback: PlaybackState::default(),
            captions: CaptionStore::new(),
            form: CaptionForm::default(),
            mode: EditMode::Idle,
            error: None,
            active: None,
            seek_step,
        }
    }

    pub fn video_url(&self) -> Option<&str> {
        self.video_url.as_deref()
    }

    pub fn playback(&self) -> &PlaybackState {
        &self.playback
    }

    pub fn captions(&self) -> &[CaptionRecord] {
        self.captions.as_slice()
    }

    pub fn form(&self) -> &CaptionForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut CaptionForm {
        &mut self.form
    }

    pub fn mode(&self) -> EditMode {
        self.mode
    }

    pub fn error(&self) -> Option<&ValidationError> {
        self.error.as_ref()
    }

    pub fn active_id(&self) -> Option<CaptionId> {
        self.active
    }

    /// Text of the caption under the playhead, if any
    pub fn active_caption(&self) -> Option<&str> {
        self.active
            .and_then(|id| self.captions.get(id))
            .map(|c| c.text.as_str())
    }

    /// Switch to a new video. Playback starts over with an unknown
    /// duration; captions are kept.
    pub fn load_video<P: Player>(
        &mut self,
        url: &str,
        duration: Option<f64>,
        player: &mut P,
    ) -> Result<(), VideoUrlError> {
        let url = url.trim();
        if url.is_empty() {
            return Err(VideoUrlError::Empty);
        }

        info!(url, ?duration, "Loading video");
        player.load(url, duration);
        self.video_url = Some(url.to_string());
        self.playback = PlaybackState::default();
        self.refresh_active();
        Ok(())
    }

    pub fn on_loaded_metadata(&mut self, duration: f64) {
        if duration.is_finite() && duration >= 0.0 {
            debug!(duration, "Video metadata loaded");
            self.playback.duration = Some(duration);
        } else {
            warn!(duration, "Ignoring invalid video duration");
        }
    }

    pub fn on_time_update(&mut self, current_time: f64) {
        self.playback.current_time = current_time;
        self.refresh_active();
    }

    /// Apply everything the player reported since the last tick.
    pub fn apply_player_events(&mut self, events: Vec<PlayerEvent>) {
        for event in events {
            match event {
                PlayerEvent::LoadedMetadata(duration) => self.on_loaded_metadata(duration),
                PlayerEvent::TimeUpdate(time) => self.on_time_update(time),
                PlayerEvent::Ended => self.playback.is_playing = false,
            }
        }
    }

    /// Playback position as a percentage of the duration
    pub fn progress_percent(&self) -> f64 {
        match self.playback.duration {
            Some(duration) if duration > 0.0 => {
                (self.playback.current_time / duration * 100.0).clamp(0.0, 100.0)
            }
            _ => 0.0,
        }
    }

    pub fn toggle_playback<P: Player>(&mut self, player: &mut P) {
        if self.video_url.is_none() {
            return;
        }
        if self.playback.is_playing {
            player.pause();
        } else {
            player.play();
        }
        self.playback.is_playing = player.is_playing();
    }

    pub fn rewind<P: Player>(&mut self, player: &mut P) {
        let target = self.seek_target(-self.seek_step);
        debug!(target, "Rewind");
        player.seek(target);
    }

    pub fn forward<P: Player>(&mut self, player: &mut P) {
        let target = self.seek_target(self.seek_step);
        debug!(target, "Fast forward");
        player.seek(target);
    }

    fn seek_target(&self, delta: f64) -> f64 {
        let target = (self.playback.current_time + delta).max(0.0);
        match self.playback.duration {
            Some(duration) => target.min(duration),
            None => target,
        }
    }

    /// Validate the form and add or update a caption.
    ///
    /// On failure the error is kept for display and nothing changes.
    pub fn submit(&mut self) -> Result<SubmitOutcome, ValidationError> {
        if self.video_url.is_none() {
            return Ok(SubmitOutcome::NoVideo);
        }

        let caption = match validate_caption(
            &self.form.text,
            self.form.start.as_str(),
            self.form.end.as_str(),
            self.playback.duration,
        ) {
            Ok(caption) => caption,
            Err(err) => {
                info!(%err, "Caption rejected");
                self.error = Some(err);
                return Err(err);
            }
        };
        self.error = None;

        let outcome = match self.mode {
            EditMode::Idle => {
                let record = self.captions.add(caption.text, caption.start, caption.end);
                info!(id = %record.id, start = record.start, end = record.end, "Caption added");
                SubmitOutcome::Added(record.id)
            }
            EditMode::Editing { id } => {
                match self.captions.update(id, caption.text, caption.start, caption.end) {
                    Ok(record) => {
                        info!(id = %record.id, start = record.start, end = record.end, "Caption updated");
                    }
                    Err(err) => warn!(%err, "Edited caption no longer exists"),
                }
                SubmitOutcome::Updated(id)
            }
        };

        self.finish_edit();
        self.refresh_active();
        Ok(outcome)
    }

    /// Load a caption into the form for editing. Returns `false` if the
    /// id is unknown.
    pub fn begin_edit(&mut self, id: CaptionId) -> bool {
        let Some(caption) = self.captions.get(id) else {
            return false;
        };

        self.form.text = caption.text.clone();
        self.form.start = TimeInput::from_seconds(caption.start);
        self.form.end = TimeInput::from_seconds(caption.end);
        self.mode = EditMode::Editing { id };
        self.error = None;
        debug!(%id, "Editing caption");
        true
    }

    pub fn cancel_edit(&mut self) {
        self.finish_edit();
        self.error = None;
    }

    fn finish_edit(&mut self) {
        self.mode = EditMode::Idle;
        self.form.clear();
    }

    pub fn remove(&mut self, id: CaptionId) -> bool {
        let removed = self.captions.remove(id);
        if removed {
            info!(%id, "Caption removed");
            if self.mode == (EditMode::Editing { id }) {
                self.finish_edit();
            }
            self.refresh_active();
        }
        removed
    }

    fn refresh_active(&mut self) {
        self.active = self
            .captions
            .active_at(self.playback.current_time)
            .map(|c| c.id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::caption::time::TimeField;
    use crate::playback::SimulatedPlayer;
    use std::time::Duration;

    fn loaded(duration: f64) -> (EditorSession, SimulatedPlayer) {
        let mut session = EditorSession::new(10.0);
        let mut player = SimulatedPlayer::new();
        session
            .load_video("https://example.com/video.mp4", Some(duration), &mut player)
            .unwrap();
        let events = player.tick(Duration::ZERO);
        session.apply_player_events(events);
        (session, player)
    }

    fn fill(session: &mut EditorSession, text: &str, start: &str, end: &str) {
        let form = session.form_mut();
        form.text = text.to_string();
        for (input, value) in [(&mut form.start, start), (&mut form.end, end)] {
            let mut parts = value.split(':');
            for field in [TimeField::Hours, TimeField::Minutes, TimeField::Seconds] {
                input.set_component(field, parts.next().unwrap_or("0"));
            }
        }
    }

    fn add(session: &mut EditorSession, text: &str, start: &str, end: &str) -> CaptionId {
        fill(session, text, start, end);
        match session.submit().unwrap() {
            SubmitOutcome::Added(id) => id,
            other => panic!("unexpected outcome {:?}", other),
        }
    }

    #[test]
    fn test_load_video_requires_url() {
        let mut session = EditorSession::new(10.0);
        let mut player = SimulatedPlayer::new();
        assert_eq!(
            session.load_video("   ", None, &mut player),
            Err(VideoUrlError::Empty)
        );
        assert_eq!(VideoUrlError::Empty.to_string(), "Please enter video URL.");
        assert!(session.video_url().is_none());
    }

    #[test]
    fn test_submit_without_video_does_nothing() {
        let mut session = EditorSession::new(10.0);
        fill(&mut session, "hi", "00:00:01", "00:00:02");
        assert_eq!(session.submit(), Ok(SubmitOutcome::NoVideo));
        assert!(session.captions().is_empty());
        assert_eq!(session.form().text, "hi");
    }

    #[test]
    fn test_add_clears_form() {
        let (mut session, _) = loaded(60.0);
        add(&mut session, "hello", "00:00:05", "00:00:10");

        assert_eq!(session.captions().len(), 1);
        assert_eq!(session.captions()[0].start, 5);
        assert_eq!(session.captions()[0].end, 10);
        assert_eq!(session.form(), &CaptionForm::default());
        assert_eq!(session.mode(), EditMode::Idle);
    }

    #[test]
    fn test_rejected_caption_keeps_form_and_error() {
        let (mut session, _) = loaded(60.0);
        fill(&mut session, "late", "00:00:50", "00:01:10");

        assert_eq!(session.submit(), Err(ValidationError::EndExceedsDuration));
        assert_eq!(session.error(), Some(&ValidationError::EndExceedsDuration));
        assert!(session.captions().is_empty());
        assert_eq!(session.form().end.as_str(), "00:01:10");

        session.form_mut().end = TimeInput::from_seconds(55);
        assert!(session.submit().is_ok());
        assert_eq!(session.error(), None);
    }

    #[test]
    fn test_unknown_duration_allows_any_range() {
        let mut session = EditorSession::new(10.0);
        let mut player = SimulatedPlayer::new();
        session
            .load_video("https://example.com/live", None, &mut player)
            .unwrap();
        fill(&mut session, "far", "05:00:00", "05:00:03");
        assert!(session.submit().is_ok());
    }

    #[test]
    fn test_edit_round_trip() {
        let (mut session, _) = loaded(600.0);
        let first = add(&mut session, "one", "00:00:01", "00:00:02");
        let second = add(&mut session, "two", "00:01:05", "00:01:10");
        let third = add(&mut session, "three", "00:02:00", "00:02:05");

        fill(&mut session, "stale input", "00:00:09", "00:00:01");
        session.submit().unwrap_err();
        assert!(session.error().is_some());

        assert!(session.begin_edit(second));
        assert_eq!(session.error(), None);
        assert_eq!(session.mode(), EditMode::Editing { id: second });
        assert_eq!(session.form().text, "two");
        assert_eq!(session.form().start.as_str(), "00:01:05");
        assert_eq!(session.form().end.as_str(), "00:01:10");

        session.form_mut().text = "TWO".to_string();
        assert_eq!(session.submit(), Ok(SubmitOutcome::Updated(second)));
        assert_eq!(session.mode(), EditMode::Idle);
        assert_eq!(session.form(), &CaptionForm::default());

        let ids: Vec<CaptionId> = session.captions().iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![first, second, third]);
        assert_eq!(session.captions()[1].text, "TWO");
        assert_eq!(session.captions()[1].start, 65);
        assert_eq!(session.captions()[0].text, "one");
    }

    #[test]
    fn test_begin_edit_unknown_id() {
        let (mut session, _) = loaded(60.0);
        let id = add(&mut session, "gone", "00:00:01", "00:00:03");
        session.remove(id);
        assert!(!session.begin_edit(id));
        assert_eq!(session.mode(), EditMode::Idle);
    }

    #[test]
    fn test_cancel_edit_clears_form() {
        let (mut session, _) = loaded(60.0);
        let id = add(&mut session, "x", "00:00:01", "00:00:03");
        session.begin_edit(id);
        session.cancel_edit();
        assert_eq!(session.mode(), EditMode::Idle);
        assert_eq!(session.form(), &CaptionForm::default());
        assert_eq!(session.captions()[0].text, "x");
    }

    #[test]
    fn test_removing_edited_caption_ends_edit() {
        let (mut session, _) = loaded(60.0);
        let id = add(&mut session, "x", "00:00:01", "00:00:03");
        session.begin_edit(id);

        assert!(session.remove(id));
        assert_eq!(session.mode(), EditMode::Idle);
        assert!(!session.remove(id));
    }

    #[test]
    fn test_active_caption_follows_time_updates() {
        let (mut session, _) = loaded(60.0);
        add(&mut session, "A", "00:00:00", "00:00:10");
        add(&mut session, "B", "00:00:05", "00:00:15");

        session.on_time_update(7.0);
        assert_eq!(session.active_caption(), Some("A"));
        session.on_time_update(12.5);
        assert_eq!(session.active_caption(), Some("B"));
        session.on_time_update(15.5);
        assert_eq!(session.active_caption(), None);
    }

    #[test]
    fn test_active_caption_refreshes_after_mutation() {
        let (mut session, _) = loaded(60.0);
        session.on_time_update(6.0);
        let id = add(&mut session, "now", "00:00:05", "00:00:08");
        assert_eq!(session.active_caption(), Some("now"));

        session.remove(id);
        assert_eq!(session.active_caption(), None);
    }

    #[test]
    fn test_playback_through_player() {
        let (mut session, mut player) = loaded(30.0);
        add(&mut session, "intro", "00:00:01", "00:00:03");

        session.toggle_playback(&mut player);
        assert!(session.playback().is_playing);
        session.apply_player_events(player.tick(Duration::from_secs(2)));
        assert_eq!(session.playback().current_time, 2.0);
        assert_eq!(session.active_caption(), Some("intro"));
        assert!((session.progress_percent() - 100.0 * 2.0 / 30.0).abs() < 1e-9);

        session.toggle_playback(&mut player);
        assert!(!session.playback().is_playing);
        session.apply_player_events(player.tick(Duration::from_secs(2)));
        assert_eq!(session.playback().current_time, 2.0);
    }

    #[test]
    fn test_playback_ends() {
        let (mut session, mut player) = loaded(3.0);
        session.toggle_playback(&mut player);
        session.apply_player_events(player.tick(Duration::from_secs(5)));
        assert!(!session.playback().is_playing);
        assert_eq!(session.playback().current_time, 3.0);
        assert_eq!(session.progress_percent(), 100.0);
    }

    #[test]
    fn test_toggle_without_video_is_ignored() {
        let mut session = EditorSession::new(10.0);
        let mut player = SimulatedPlayer::new();
        session.toggle_playback(&mut player);
        assert!(!session.playback().is_playing);
        assert_eq!(session.progress_percent(), 0.0);
    }

    #[test]
    fn test_seek_clamps_to_video() {
        let (mut session, mut player) = loaded(25.0);

        session.rewind(&mut player);
        session.apply_player_events(player.tick(Duration::ZERO));
        assert_eq!(session.playback().current_time, 0.0);

        session.forward(&mut player);
        session.apply_player_events(player.tick(Duration::ZERO));
        assert_eq!(session.playback().current_time, 10.0);

        session.forward(&mut player);
        session.forward(&mut player);
        session.apply_player_events(player.tick(Duration::ZERO));
        assert_eq!(session.playback().current_time, 20.0);

        session.on_time_update(20.0);
        session.forward(&mut player);
        session.apply_player_events(player.tick(Duration::ZERO));
        assert_eq!(session.playback().current_time, 25.0);

        session.rewind(&mut player);
        session.apply_player_events(player.tick(Duration::ZERO));
        assert_eq!(session.playback().current_time, 15.0);
    }

    #[test]
    fn test_loading_new_video_resets_playback_keeps_captions() {
        let (mut session, mut player) = loaded(30.0);
        add(&mut session, "kept", "00:00:00", "00:00:02");
        session.on_time_update(1.0);
        assert_eq!(session.active_caption(), Some("kept"));

        session
            .load_video("https://example.com/other.mp4", None, &mut player)
            .unwrap();
        assert_eq!(session.playback(), &PlaybackState::default());
        assert_eq!(session.captions().len(), 1);
        assert_eq!(session.active_caption(), Some("kept"));
    }

    #[test]
    fn test_invalid_metadata_ignored() {
        let (mut session, _) = loaded(30.0);
        session.on_loaded_metadata(f64::NAN);
        assert_eq!(session.playback().duration, Some(30.0));
    }
}
