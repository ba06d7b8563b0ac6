//! Pet profile data structures.
//!
//! An optional JSON file that names the pet and tunes presentation
//! details. Every field has a default so a missing or partial file
//! never stops the program; a broken file falls back to the built-in
//! profile with a warning in the log.

use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::warn;

/// Default animation pace in milliseconds per frame.
fn default_frame_ms() -> u64 {
    250
}

fn default_name() -> String {
    "Hedgehog".to_string()
}

fn default_greeting() -> String {
    crate::engine::DEFAULT_GREETING.to_string()
}

/// Pet profile loaded from profile.json.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PetProfile {
    /// Display name shown in the pet panel title.
    #[serde(default = "default_name")]
    pub name: String,
    /// Phrase shown in the feedback bar until the first activity runs.
    #[serde(default = "default_greeting")]
    pub greeting: String,
    /// Hold interval per animation frame, in milliseconds.
    #[serde(default = "default_frame_ms")]
    pub frame_ms: u64,
}

impl Default for PetProfile {
    fn default() -> Self {
        Self {
            name: default_name(),
            greeting: default_greeting(),
            frame_ms: default_frame_ms(),
        }
    }
}

impl PetProfile {
    /// Load a profile from a JSON file.
    pub fn load(path: &Path) -> io::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }

    /// Resolve the profile in order of priority:
    /// 1. An explicit path from the CLI
    /// 2. ./hedgehog.json (local customization)
    /// 3. <config_dir>/hedgehog-tui/profile.json (global user config)
    /// 4. Built-in defaults
    ///
    /// Returns the profile and the path it came from, if any. An
    /// unreadable explicit path is an error; the fallback locations
    /// degrade silently to the next candidate.
    pub fn resolve(explicit: Option<&Path>) -> io::Result<(Self, Option<PathBuf>)> {
        if let Some(path) = explicit {
            let profile = Self::load(path)?;
            return Ok((profile, Some(path.to_path_buf())));
        }

        let local = PathBuf::from("hedgehog.json");
        if local.exists() {
            match Self::load(&local) {
                Ok(profile) => return Ok((profile, Some(local))),
                Err(e) => warn!(path = %local.display(), error = %e, "skipping unreadable profile"),
            }
        }

        if let Some(config_dir) = dirs::config_dir() {
            let global = config_dir.join("hedgehog-tui").join("profile.json");
            if global.exists() {
                match Self::load(&global) {
                    Ok(profile) => return Ok((profile, Some(global))),
                    Err(e) => {
                        warn!(path = %global.display(), error = %e, "skipping unreadable profile")
                    }
                }
            }
        }

        Ok((Self::default(), None))
    }
}
