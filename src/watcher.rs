//! Live reload of the pet profile file.

use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use notify::{Config, RecommendedWatcher, RecursiveMode, Watcher};
use tracing::debug;

/// Watch the profile file and raise the shared reload flag when it
/// changes on disk. The parent directory is watched rather than the
/// file itself because editors commonly replace files on save.
///
/// Returns `None` when the watcher cannot be set up; the app then
/// runs without live reload.
pub fn setup_profile_watcher(
    profile_path: PathBuf,
    needs_reload: Arc<Mutex<bool>>,
) -> Option<RecommendedWatcher> {
    let profile_path = profile_path.canonicalize().unwrap_or(profile_path);
    let file_name = profile_path.file_name()?.to_os_string();
    let parent = match profile_path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
        _ => PathBuf::from("."),
    };

    let config = Config::default().with_poll_interval(Duration::from_millis(500));
    let mut watcher = RecommendedWatcher::new(
        move |res: Result<notify::Event, notify::Error>| {
            let Ok(event) = res else { return };
            let matches = event
                .paths
                .iter()
                .any(|p| p.file_name() == Some(file_name.as_os_str()));
            if matches {
                debug!("profile changed on disk");
                if let Ok(mut flag) = needs_reload.lock() {
                    *flag = true;
                }
            }
        },
        config,
    )
    .ok()?;

    watcher.watch(&parent, RecursiveMode::NonRecursive).ok()?;
    Some(watcher)
}
