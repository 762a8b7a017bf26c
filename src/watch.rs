//! # Watch Mode
//!
//! Re-runs a full generation pass whenever a route-defining file or the
//! project configuration changes. There is no debouncing: every relevant
//! change event runs its own pass, one at a time on a dedicated thread.
//!
//! A failing pass is logged and the watcher keeps running, so fixing the
//! offending file triggers a fresh attempt.

use crate::config::Config;
use crate::pipeline::run_once;
use notify::{Config as NotifyConfig, Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::{mpsc, Arc, Mutex};
use std::thread;
use tracing::{debug, error, info, warn};

/// Whether an event can change the route tree.
pub fn is_route_change(kind: &EventKind) -> bool {
    matches!(
        kind,
        EventKind::Create(_) | EventKind::Modify(_) | EventKind::Remove(_)
    )
}

/// Watch `paths` and call `on_change` for every relevant event.
///
/// Directories are watched recursively. Paths that do not exist yet are skipped.
/// The returned watcher stops when dropped.
pub fn watch_routes<F>(paths: &[PathBuf], mut on_change: F) -> notify::Result<RecommendedWatcher>
where
    F: FnMut(&Event) + Send + 'static,
{
    let mut watcher = RecommendedWatcher::new(
        move |res: Result<Event, notify::Error>| match res {
            Ok(event) => {
                if is_route_change(&event.kind) {
                    debug!(paths = ?event.paths, kind = ?event.kind, "route change");
                    on_change(&event);
                }
            }
            Err(e) => warn!(error = %e, "watch error"),
        },
        NotifyConfig::default(),
    )?;

    for path in paths {
        let mode = if path.is_dir() {
            RecursiveMode::Recursive
        } else if path.is_file() {
            RecursiveMode::NonRecursive
        } else {
            debug!(path = %path.display(), "not watching missing path");
            continue;
        };
        watcher.watch(path, mode)?;
        info!(path = %path.display(), "watching");
    }
    Ok(watcher)
}

/// A running project watcher. Dropping it stops watching.
pub struct ProjectWatcher {
    _watcher: Arc<Mutex<RecommendedWatcher>>,
}

/// Watch the project at `root` and regenerate on every change.
///
/// The project root itself is always watched, so route directories, manifests
/// and `routegen.toml` created after startup are picked up. After every event
/// the configuration is reloaded and the watch set rebuilt from it before the
/// pass runs.
pub fn watch_project(root: &Path, config: &Config) -> notify::Result<ProjectWatcher> {
    let (tx, rx) = mpsc::channel();
    let watcher = RecommendedWatcher::new(
        move |res: Result<Event, notify::Error>| {
            let _ = tx.send(res);
        },
        NotifyConfig::default(),
    )?;
    let watcher = Arc::new(Mutex::new(watcher));

    let mut set = WatchSet::new(root);
    set.sync(&watcher, &config.watch_paths(root))?;

    let handle = Arc::downgrade(&watcher);
    let project_root = root.to_path_buf();
    let mut targets = config.watch_paths(root);
    thread::Builder::new()
        .name("routegen-watch".into())
        .spawn(move || {
            for res in rx {
                let event = match res {
                    Ok(event) => event,
                    Err(e) => {
                        warn!(error = %e, "watch error");
                        continue;
                    }
                };
                if !is_route_change(&event.kind) || !touches_any(&event.paths, &targets) {
                    continue;
                }
                debug!(paths = ?event.paths, kind = ?event.kind, "route change");

                let config = match Config::load(&project_root) {
                    Ok(config) => config,
                    Err(e) => {
                        error!("generation failed: {e:#}");
                        continue;
                    }
                };
                targets = config.watch_paths(&project_root);
                let Some(watcher) = handle.upgrade() else {
                    break;
                };
                if let Err(e) = set.sync(&watcher, &targets) {
                    warn!(error = %e, "failed to update watched paths");
                }
                drop(watcher);

                if let Err(e) = run_once(&project_root, &config) {
                    error!("generation failed: {e:#}");
                }
            }
            debug!("watcher stopped");
        })
        .map_err(notify::Error::io)?;

    Ok(ProjectWatcher { _watcher: watcher })
}

/// Whether any changed path is a target, lies inside one, or is an ancestor
/// of one (a route directory being created).
fn touches_any(changed: &[PathBuf], targets: &[PathBuf]) -> bool {
    changed
        .iter()
        .any(|p| targets.iter().any(|t| p.starts_with(t) || t.starts_with(p)))
}

/// Paths currently registered with the watcher and their recursion.
struct WatchSet {
    root: PathBuf,
    watched: BTreeMap<PathBuf, bool>,
}

impl WatchSet {
    fn new(root: &Path) -> Self {
        WatchSet {
            root: root.to_path_buf(),
            watched: BTreeMap::new(),
        }
    }

    /// Where to watch each target from: existing directories recursively,
    /// existing files directly, missing paths through their nearest existing
    /// ancestor under the root.
    fn desired(&self, targets: &[PathBuf]) -> BTreeMap<PathBuf, bool> {
        let mut desired = BTreeMap::new();
        desired.insert(self.root.clone(), false);
        for target in targets {
            if target.is_dir() {
                desired.insert(target.clone(), true);
                continue;
            }
            if target.is_file() {
                desired.entry(target.clone()).or_insert(false);
                continue;
            }
            let anchor = target
                .ancestors()
                .skip(1)
                .take_while(|a| a.starts_with(&self.root))
                .find(|a| a.is_dir());
            if let Some(anchor) = anchor {
                desired.entry(anchor.to_path_buf()).or_insert(false);
            }
        }
        desired
    }

    /// Bring the watcher in line with `targets`.
    fn sync(
        &mut self,
        watcher: &Mutex<RecommendedWatcher>,
        targets: &[PathBuf],
    ) -> notify::Result<()> {
        let desired = self.desired(targets);
        let mut watcher = watcher.lock().unwrap_or_else(|poisoned| poisoned.into_inner());

        let stale: Vec<PathBuf> = self
            .watched
            .iter()
            .filter(|(path, recursive)| desired.get(*path) != Some(*recursive))
            .map(|(path, _)| path.clone())
            .collect();
        for path in stale {
            // the OS drops watches on deleted paths by itself
            if let Err(e) = watcher.unwatch(&path) {
                debug!(path = %path.display(), error = %e, "unwatch failed");
            }
            self.watched.remove(&path);
        }

        for (path, recursive) in desired {
            if self.watched.contains_key(&path) {
                continue;
            }
            let mode = if recursive {
                RecursiveMode::Recursive
            } else {
                RecursiveMode::NonRecursive
            };
            if path == self.root {
                watcher.watch(&path, mode)?;
            } else if let Err(e) = watcher.watch(&path, mode) {
                // removed between the existence check and registration
                warn!(path = %path.display(), error = %e, "failed to watch");
                continue;
            }
            info!(path = %path.display(), recursive, "watching");
            self.watched.insert(path, recursive);
        }
        Ok(())
    }
}
