//! Application state and core logic for hedgehog-tui.
//!
//! This module contains the `App` struct which holds all state for the
//! interactive terminal UI: the pet engine, the loaded profile, the
//! in-flight animation playback, and navigation state.

use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use crossterm::event::KeyCode;
use tracing::{info, warn};

use crate::cli::CliConfig;
use crate::engine::{Activity, FrameAsset, FrameSeq, PetEngine};
use crate::models::PetProfile;

/// How often the busy-indicator pulse advances.
const PULSE_INTERVAL: Duration = Duration::from_millis(500);

/// An animation being played out on the dispatch loop's tick.
struct Playback {
    frames: FrameSeq,
    deadline: Instant,
}

/// Application state
pub struct App {
    pub engine: PetEngine,
    pub profile: PetProfile,
    pub profile_path: Option<PathBuf>,
    pub profile_needs_reload: Arc<Mutex<bool>>,
    /// Sprite currently shown in the pet panel.
    pub current_asset: FrameAsset,
    /// Activity whose animation is playing, if any.
    pub active_activity: Option<Activity>,
    playback: Option<Playback>,
    // Pulse state for the busy indicator
    pub animation_tick: u64,
    pub last_animation_update: Instant,
    // Currently selected button index (into Activity::ALL)
    pub selected: usize,
    pub should_quit: bool,
    // CLI frame interval override, kept across profile reloads
    frame_override: Option<u64>,
}

impl App {
    pub fn new(config: CliConfig) -> std::io::Result<Self> {
        let (profile, profile_path) = PetProfile::resolve(config.profile_path.as_deref())?;
        let frame_ms = config.frame_ms.unwrap_or(profile.frame_ms);

        let mut engine = PetEngine::new(Duration::from_millis(frame_ms));
        engine.set_greeting(&profile.greeting);

        Ok(Self {
            engine,
            profile,
            profile_path,
            profile_needs_reload: Arc::new(Mutex::new(false)),
            current_asset: FrameAsset::Idle,
            active_activity: None,
            playback: None,
            animation_tick: 0,
            last_animation_update: Instant::now(),
            selected: 0,
            should_quit: false,
            frame_override: config.frame_ms,
        })
    }

    /// Reload the profile from disk if the watcher flagged it.
    pub fn reload_profile_if_needed(&mut self) {
        let needs_reload = {
            let Ok(mut flag) = self.profile_needs_reload.lock() else {
                return;
            };
            if *flag {
                *flag = false;
                true
            } else {
                false
            }
        };
        if !needs_reload {
            return;
        }

        let Some(path) = &self.profile_path else {
            return;
        };
        match PetProfile::load(path) {
            Ok(profile) => {
                info!(name = %profile.name, "profile reloaded");
                let frame_ms = self.frame_override.unwrap_or(profile.frame_ms);
                self.engine.set_frame_interval(Duration::from_millis(frame_ms));
                self.engine.set_greeting(&profile.greeting);
                self.profile = profile;
            }
            Err(e) => warn!(path = %path.display(), error = %e, "profile reload failed"),
        }
    }

    /// Dispatch one key press.
    pub fn handle_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Up | KeyCode::Char('k') => self.select_prev(),
            KeyCode::Down | KeyCode::Char('j') => self.select_next(),
            KeyCode::Enter | KeyCode::Char(' ') => self.trigger_selected(),
            KeyCode::Char(c) => {
                if let Some(activity) = Activity::ALL.iter().copied().find(|a| a.hotkey() == c) {
                    self.trigger(activity);
                }
            }
            _ => {}
        }
    }

    pub fn select_next(&mut self) {
        self.selected = (self.selected + 1) % Activity::ALL.len();
    }

    pub fn select_prev(&mut self) {
        self.selected = (self.selected + Activity::ALL.len() - 1) % Activity::ALL.len();
    }

    pub fn trigger_selected(&mut self) {
        self.trigger(Activity::ALL[self.selected]);
    }

    /// Run an activity. A busy engine ignores the request, which is
    /// what keeps activities serialized while a playback is in flight.
    pub fn trigger(&mut self, activity: Activity) {
        if let Some(frames) = self.engine.invoke(activity) {
            self.active_activity = Some(activity);
            self.playback = Some(Playback {
                frames,
                deadline: Instant::now(),
            });
        }
    }

    /// Advance the in-flight animation if its frame deadline passed.
    /// When the sequence runs dry the pet resets to the idle sprite
    /// and the engine returns to Idle.
    pub fn advance_playback(&mut self) {
        let Some(playback) = self.playback.as_mut() else {
            return;
        };
        let now = Instant::now();
        if now < playback.deadline {
            return;
        }

        match playback.frames.next() {
            Some(frame) => {
                self.current_asset = frame.asset;
                playback.deadline = now + frame.hold;
            }
            None => {
                self.playback = None;
                self.active_activity = None;
                self.current_asset = FrameAsset::Idle;
                self.engine.finish_activity();
            }
        }
    }

    /// Advance the pulse tick used by the busy indicator.
    pub fn update_animation_tick(&mut self) {
        if self.last_animation_update.elapsed() >= PULSE_INTERVAL {
            self.animation_tick = self.animation_tick.wrapping_add(1);
            self.last_animation_update = Instant::now();
        }
    }
}
