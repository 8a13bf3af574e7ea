use std::time::Duration;

/// What the editor knows about the media element. Only the player
/// moves `current_time`; the editor asks for changes through [`Player`].
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PlaybackState {
    pub current_time: f64,
    /// `None` until metadata has loaded
    pub duration: Option<f64>,
    pub is_playing: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub enum PlayerEvent {
    LoadedMetadata(f64),
    TimeUpdate(f64),
    Ended,
}

/// Media backend driving playback
pub trait Player {
    fn load(&mut self, url: &str, duration: Option<f64>);
    fn play(&mut self);
    fn pause(&mut self);
    fn seek(&mut self, to: f64);
    fn is_playing(&self) -> bool;
    /// Advance by `elapsed` wall-clock time and report what happened.
    fn tick(&mut self, elapsed: Duration) -> Vec<PlayerEvent>;
}

/// Clock-only player for the terminal: there is no picture, but time
/// advances while playing so captions can be previewed.
#[derive(Debug, Default)]
pub struct SimulatedPlayer {
    url: Option<String>,
    duration: Option<f64>,
    position: f64,
    playing: bool,
    metadata_sent: bool,
    seeked: bool,
}

impl SimulatedPlayer {
    pub fn new() -> Self {
        Self::default()
    }

    fn at_end(&self) -> bool {
        self.duration.is_some_and(|d| self.position >= d)
    }
}

impl Player for SimulatedPlayer {
    fn load(&mut self, url: &str, duration: Option<f64>) {
        self.url = Some(url.to_string());
        self.duration = duration.filter(|d| d.is_finite() && *d >= 0.0);
        self.position = 0.0;
        self.playing = false;
        self.metadata_sent = false;
        self.seeked = false;
    }

    fn play(&mut self) {
        if self.url.is_none() {
            return;
        }
        if self.at_end() {
            self.position = 0.0;
            self.seeked = true;
        }
        self.playing = true;
    }

    fn pause(&mut self) {
        self.playing = false;
    }

    fn seek(&mut self, to: f64) {
        let mut target = to.max(0.0);
        if let Some(duration) = self.duration {
            target = target.min(duration);
        }
        self.position = target;
        self.seeked = true;
    }

    fn is_playing(&self) -> bool {
        self.playing
    }

    fn tick(&mut self, elapsed: Duration) -> Vec<PlayerEvent> {
        let mut events = Vec::new();
        if self.url.is_none() {
            return events;
        }

        if !self.metadata_sent {
            if let Some(duration) = self.duration {
                events.push(PlayerEvent::LoadedMetadata(duration));
                self.metadata_sent = true;
            }
        }

        if self.playing {
            self.position += elapsed.as_secs_f64();
            if self.at_end() {
                self.position = self.duration.unwrap_or(self.position);
                self.playing = false;
                events.push(PlayerEvent::TimeUpdate(self.position));
                events.push(PlayerEvent::Ended);
            } else {
                events.push(PlayerEvent::TimeUpdate(self.position));
            }
        } else if self.seeked {
            events.push(PlayerEvent::TimeUpdate(self.position));
        }
        self.seeked = false;

        events
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metadata_sent_once() {
        let mut player = SimulatedPlayer::new();
        player.load("file.mp4", Some(30.0));

        assert_eq!(
            player.tick(Duration::ZERO),
            vec![PlayerEvent::LoadedMetadata(30.0)]
        );
        assert!(player.tick(Duration::ZERO).is_empty());
    }

    #[test]
    fn test_unknown_duration_sends_no_metadata() {
        let mut player = SimulatedPlayer::new();
        player.load("file.mp4", None);
        assert!(player.tick(Duration::from_secs(1)).is_empty());

        player.play();
        assert_eq!(
            player.tick(Duration::from_secs(500)),
            vec![PlayerEvent::TimeUpdate(500.0)]
        );
    }

    #[test]
    fn test_nothing_happens_without_a_video() {
        let mut player = SimulatedPlayer::new();
        player.play();
        assert!(!player.is_playing());
        assert!(player.tick(Duration::from_secs(1)).is_empty());
    }

    #[test]
    fn test_playing_advances_and_stops_at_end() {
        let mut player = SimulatedPlayer::new();
        player.load("file.mp4", Some(2.0));
        player.tick(Duration::ZERO);
        player.play();

        assert_eq!(
            player.tick(Duration::from_millis(1500)),
            vec![PlayerEvent::TimeUpdate(1.5)]
        );
        assert_eq!(
            player.tick(Duration::from_secs(1)),
            vec![PlayerEvent::TimeUpdate(2.0), PlayerEvent::Ended]
        );
        assert!(!player.is_playing());
        assert!(player.tick(Duration::from_secs(1)).is_empty());

        // Playing again from the end starts over.
        player.play();
        assert_eq!(
            player.tick(Duration::from_millis(500)),
            vec![PlayerEvent::TimeUpdate(0.5)]
        );
    }

    #[test]
    fn test_seek_clamps_and_reports_while_paused() {
        let mut player = SimulatedPlayer::new();
        player.load("file.mp4", Some(20.0));
        player.tick(Duration::ZERO);

        player.seek(-3.0);
        assert_eq!(
            player.tick(Duration::from_secs(1)),
            vec![PlayerEvent::TimeUpdate(0.0)]
        );
        player.seek(25.0);
        assert_eq!(
            player.tick(Duration::ZERO),
            vec![PlayerEvent::TimeUpdate(20.0)]
        );
    }

    #[test]
    fn test_pause_stops_clock() {
        let mut player = SimulatedPlayer::new();
        player.load("file.mp4", Some(20.0));
        player.play();
        player.tick(Duration::from_secs(2));
        player.pause();
        assert!(player.tick(Duration::from_secs(5)).is_empty());
        assert!(!player.is_playing());

        player.play();
        assert_eq!(
            player.tick(Duration::from_secs(1)),
            vec![PlayerEvent::TimeUpdate(3.0)]
        );
    }
}
