//! Pet state engine.
//!
//! Owns the mood attributes and the Idle/Busy activation state, applies
//! activity rules, and hands the presentation layer everything it needs
//! to render: the stats line, the feedback phrase, and frame plans for
//! animated outcomes. The engine never touches the terminal.

mod animation;
mod rules;
mod state;

use std::time::Duration;

use thiserror::Error;
use tracing::debug;

pub use animation::{frames_for, Frame, FrameAsset, FrameSeq, DEFAULT_FRAME_INTERVAL};
pub use rules::{Activity, Outcome};
pub use state::{Attribute, PetState, MOOD_INITIAL, MOOD_MAXIMUM, MOOD_MINIMUM};

#[cfg(test)]
pub use rules::{PHRASE_HATE_BATHING, PHRASE_TOO_DIRTY};

/// Default greeting shown before any activity runs.
pub const DEFAULT_GREETING: &str = "Hello friend!";

#[derive(Debug, Error)]
pub enum EngineError {
    /// An activity name outside the fixed set of five. Only reachable
    /// through the string-keyed entry point, never from the bound
    /// controls.
    #[error("unknown activity: {0}")]
    UnknownActivity(String),
}

/// The pet state engine. One instance per running pet, owned by the
/// application and touched only from the dispatch loop.
pub struct PetEngine {
    state: PetState,
    busy: bool,
    feedback: String,
    has_spoken: bool,
    frame_interval: Duration,
}

impl PetEngine {
    pub fn new(frame_interval: Duration) -> Self {
        Self {
            state: PetState::new(),
            busy: false,
            feedback: DEFAULT_GREETING.to_string(),
            has_spoken: false,
            frame_interval,
        }
    }

    /// String-keyed activity invocation for control binding.
    pub fn invoke_activity(&mut self, name: &str) -> Result<Option<FrameSeq>, EngineError> {
        let activity = Activity::from_name(name)
            .ok_or_else(|| EngineError::UnknownActivity(name.to_string()))?;
        Ok(self.invoke(activity))
    }

    /// Run one activity: gate, rule, clamp, display refresh.
    ///
    /// Returns the frame plan for an animated outcome; the caller must
    /// report playback completion via `finish_activity`. A busy engine
    /// ignores the request entirely.
    pub fn invoke(&mut self, activity: Activity) -> Option<FrameSeq> {
        if self.busy {
            debug!(activity = activity.name(), "ignoring activity while busy");
            return None;
        }

        let outcome = rules::apply(&mut self.state, activity);
        self.feedback = outcome.phrase.to_string();
        self.has_spoken = true;
        debug!(
            activity = activity.name(),
            phrase = outcome.phrase,
            animated = outcome.animated,
            stats = %self.state.stats_line(),
            "activity applied"
        );

        if outcome.animated {
            self.busy = true;
            Some(animation::frames_for(activity, self.frame_interval))
        } else {
            None
        }
    }

    /// Called by the presentation layer once an animation has played
    /// out. Unconditional: the engine returns to Idle regardless of
    /// which branch started the animation.
    pub fn finish_activity(&mut self) {
        self.busy = false;
    }

    pub fn is_busy(&self) -> bool {
        self.busy
    }

    pub fn current_stats_string(&self) -> String {
        self.state.stats_line()
    }

    pub fn current_feedback_string(&self) -> &str {
        &self.feedback
    }

    pub fn state(&self) -> &PetState {
        &self.state
    }

    pub fn set_frame_interval(&mut self, interval: Duration) {
        self.frame_interval = interval;
    }

    /// Replace the greeting. Only takes effect while the greeting is
    /// still showing; once an activity has spoken, its phrase stays.
    pub fn set_greeting(&mut self, greeting: &str) {
        if !self.has_spoken {
            self.feedback = greeting.to_string();
        }
    }
}

impl Default for PetEngine {
    fn default() -> Self {
        Self::new(DEFAULT_FRAME_INTERVAL)
    }
}
