use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::prelude::*;
use std::time::{Duration, Instant};

use crate::caption::time::{format_time, parse_time, TimeField};
use crate::config::Config;
use crate::playback::{Player, SimulatedPlayer};
use crate::session::{EditMode, EditorSession, SubmitOutcome};
use crate::ui;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppState {
    Home,
    Editing,
}

/// Which input on the start screen receives typing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HomeFocus {
    Url,
    Duration,
}

/// Which part of the editor receives typing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormFocus {
    Text,
    Start(TimeField),
    End(TimeField),
    List,
}

impl FormFocus {
    const ORDER: [FormFocus; 8] = [
        FormFocus::Text,
        FormFocus::Start(TimeField::Hours),
        FormFocus::Start(TimeField::Minutes),
        FormFocus::Start(TimeField::Seconds),
        FormFocus::End(TimeField::Hours),
        FormFocus::End(TimeField::Minutes),
        FormFocus::End(TimeField::Seconds),
        FormFocus::List,
    ];

    fn position(self) -> usize {
        Self::ORDER.iter().position(|f| *f == self).unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Self::ORDER[(self.position() + 1) % Self::ORDER.len()]
    }

    pub fn prev(self) -> Self {
        Self::ORDER[(self.position() + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }
}

pub struct App {
    pub state: AppState,
    pub should_quit: bool,
    pub config: Config,
    pub session: EditorSession,
    player: SimulatedPlayer,
    // Start screen
    pub url_input: String,
    pub duration_input: String,
    pub home_focus: HomeFocus,
    pub home_error: Option<String>,
    pub selected_example: Option<usize>,
    // Editor
    pub focus: FormFocus,
    pub selected_index: usize,
    pub status_message: String,
}

impl App {
    pub fn new(config: Config) -> Self {
        let session = EditorSession::new(config.playback.seek_step_secs);
        Self {
            state: AppState::Home,
            should_quit: false,
            config,
            session,
            player: SimulatedPlayer::new(),
            url_input: String::new(),
            duration_input: String::new(),
            home_focus: HomeFocus::Url,
            home_error: None,
            selected_example: None,
            focus: FormFocus::Text,
            selected_index: 0,
            status_message: String::new(),
        }
    }

    /// Open the editor directly on a video, skipping the start screen.
    pub fn preload(&mut self, url: &str, duration: Option<&str>) -> Result<()> {
        self.url_input = url.to_string();
        self.duration_input = duration.unwrap_or_default().to_string();
        self.load_from_inputs();
        if let Some(err) = self.home_error.take() {
            anyhow::bail!(err);
        }
        Ok(())
    }

    pub async fn run(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    ) -> Result<()> {
        let tick_rate = self.config.tick_rate();
        let mut last_tick = Instant::now();

        loop {
            // Advance the playback clock
            let now = Instant::now();
            self.tick(now.duration_since(last_tick));
            last_tick = now;

            terminal.draw(|frame| self.draw(frame))?;

            if event::poll(tick_rate)? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key(key);
                    }
                }
            }

            if self.should_quit {
                break;
            }
        }
        Ok(())
    }

    fn tick(&mut self, elapsed: Duration) {
        let events = self.player.tick(elapsed);
        self.session.apply_player_events(events);
    }

    fn handle_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL)
            && matches!(key.code, KeyCode::Char('q') | KeyCode::Char('c'))
        {
            self.should_quit = true;
            return;
        }

        match self.state {
            AppState::Home => self.handle_home_keys(key),
            AppState::Editing => self.handle_editor_keys(key),
        }
    }

    fn handle_home_keys(&mut self, key: KeyEvent) {
        // Clear error on any key press
        if self.home_error.is_some() && key.code != KeyCode::Esc {
            self.home_error = None;
        }

        match key.code {
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Tab | KeyCode::BackTab => {
                self.home_focus = match self.home_focus {
                    HomeFocus::Url => HomeFocus::Duration,
                    HomeFocus::Duration => HomeFocus::Url,
                };
            }
            KeyCode::Up => self.select_example(-1),
            KeyCode::Down => self.select_example(1),
            KeyCode::Enter => self.load_from_inputs(),
            KeyCode::Backspace => {
                match self.home_focus {
                    HomeFocus::Url => self.url_input.pop(),
                    HomeFocus::Duration => self.duration_input.pop(),
                };
            }
            KeyCode::Char(c) => match self.home_focus {
                HomeFocus::Url => self.url_input.push(c),
                HomeFocus::Duration => {
                    if c.is_ascii_digit() || c == ':' {
                        self.duration_input.push(c);
                    }
                }
            },
            _ => {}
        }
    }

    fn select_example(&mut self, step: isize) {
        let count = self.config.examples.len();
        if count == 0 {
            return;
        }
        let next = match self.selected_example {
            Some(i) => (i as isize + step).rem_euclid(count as isize) as usize,
            None if step < 0 => count - 1,
            None => 0,
        };
        self.selected_example = Some(next);

        let example = &self.config.examples[next];
        self.url_input = example.url.clone();
        // Normalised to HH:MM:SS; an unusable duration is left unknown
        self.duration_input = example
            .duration_secs()
            .map(|secs| format_time(secs as u64))
            .unwrap_or_default();
    }

    fn load_from_inputs(&mut self) {
        let duration = match self.duration_input.trim() {
            "" => None,
            text => match parse_time(text) {
                Ok(secs) if secs > 0 => Some(secs as f64),
                _ => {
                    self.home_error = Some("Invalid video duration.".to_string());
                    return;
                }
            },
        };

        match self
            .session
            .load_video(&self.url_input, duration, &mut self.player)
        {
            Ok(()) => {
                self.state = AppState::Editing;
                self.focus = FormFocus::Text;
                self.status_message = format!("Loaded {}", self.url_input.trim());
            }
            Err(err) => self.home_error = Some(err.to_string()),
        }
    }

    fn handle_editor_keys(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            match key.code {
                KeyCode::Char('p') => self.session.toggle_playback(&mut self.player),
                KeyCode::Char('b') => self.session.rewind(&mut self.player),
                KeyCode::Char('f') => self.session.forward(&mut self.player),
                _ => {}
            }
            return;
        }

        match key.code {
            KeyCode::Tab => {
                self.focus = self.focus.next();
                return;
            }
            KeyCode::BackTab => {
                self.focus = self.focus.prev();
                return;
            }
            KeyCode::Esc => {
                if self.session.mode() == EditMode::Idle {
                    self.state = AppState::Home;
                } else {
                    self.session.cancel_edit();
                    self.status_message = "Edit cancelled".to_string();
                }
                return;
            }
            _ => {}
        }

        match self.focus {
            FormFocus::Text => match key.code {
                KeyCode::Enter => self.submit(),
                KeyCode::Backspace => {
                    self.session.form_mut().text.pop();
                }
                KeyCode::Char(c) => self.session.form_mut().text.push(c),
                _ => {}
            },
            FormFocus::Start(field) | FormFocus::End(field) => {
                if key.code == KeyCode::Enter {
                    self.submit();
                    return;
                }
                let is_start = matches!(self.focus, FormFocus::Start(_));
                let form = self.session.form_mut();
                let input = if is_start {
                    &mut form.start
                } else {
                    &mut form.end
                };
                match key.code {
                    KeyCode::Backspace => input.pop_digit(field),
                    KeyCode::Char(c) => input.push_digit(field, c),
                    _ => {}
                }
            }
            FormFocus::List => self.handle_list_keys(key.code),
        }
    }

    fn handle_list_keys(&mut self, key: KeyCode) {
        match key {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Up | KeyCode::Char('k') => {
                if self.selected_index > 0 {
                    self.selected_index -= 1;
                }
            }
            KeyCode::Down | KeyCode::Char('j') => {
                if self.selected_index < self.session.captions().len().saturating_sub(1) {
                    self.selected_index += 1;
                }
            }
            KeyCode::Enter | KeyCode::Char('e') => {
                if let Some(id) = self.selected_caption_id() {
                    if self.session.begin_edit(id) {
                        self.focus = FormFocus::Text;
                        self.status_message = format!("Editing caption {}", id);
                    }
                }
            }
            KeyCode::Char('d') => {
                if let Some(id) = self.selected_caption_id() {
                    self.session.remove(id);
                    let len = self.session.captions().len();
                    if self.selected_index >= len && self.selected_index > 0 {
                        self.selected_index -= 1;
                    }
                    self.status_message = format!("Deleted caption {}", id);
                }
            }
            KeyCode::Char(' ') => self.session.toggle_playback(&mut self.player),
            KeyCode::Left => self.session.rewind(&mut self.player),
            KeyCode::Right => self.session.forward(&mut self.player),
            _ => {}
        }
    }

    fn selected_caption_id(&self) -> Option<crate::caption::store::CaptionId> {
        self.session
            .captions()
            .get(self.selected_index)
            .map(|c| c.id)
    }

    fn submit(&mut self) {
        match self.session.submit() {
            Ok(SubmitOutcome::Added(id)) => {
                self.selected_index = self.session.captions().len().saturating_sub(1);
                self.focus = FormFocus::Text;
                self.status_message = format!("Added caption {}", id);
            }
            Ok(SubmitOutcome::Updated(id)) => {
                self.focus = FormFocus::Text;
                self.status_message = format!("Saved caption {}", id);
            }
            Ok(SubmitOutcome::NoVideo) => {
                self.status_message = "Load a video first".to_string();
            }
            // Shown from the session's error slot
            Err(_) => {}
        }
    }

    fn draw(&self, frame: &mut Frame) {
        match self.state {
            AppState::Home => ui::home::draw(frame, self),
            AppState::Editing => ui::editor::draw(frame, self),
        }
    }
}
