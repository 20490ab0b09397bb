//! Continuous upload of changed scripts
//!
//! `notify` delivers filesystem events on its own thread; they are forwarded
//! through an unbounded channel into the async loop, classified, and turned
//! into fire-and-forget uploads or deletes. Every script present when the
//! watcher starts is uploaded once as a creation.
//!
//! The loop only ends when the process is interrupted.

use std::path::{Path, PathBuf};

use anyhow::Context;
use notify::event::{ModifyKind, RenameMode};
use notify::{Event, EventKind, RecursiveMode, Watcher};
use tokio::sync::mpsc;

use crate::config::SyncConfig;
use crate::error::Result;
use crate::filename;
use crate::remote::{BitburnerClient, UploadAction};
use crate::scanner::{self, ScriptFilter};
use crate::sync::{delete_remote_file, upload_file};

/// File change event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileChange {
    /// A file appeared
    Added(PathBuf),
    /// A file's content changed
    Changed(PathBuf),
    /// A file went away
    Removed(PathBuf),
}

impl FileChange {
    fn path(&self) -> &Path {
        match self {
            Self::Added(path) | Self::Changed(path) | Self::Removed(path) => path,
        }
    }
}

/// Request issued in response to a change
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WatchAction {
    /// Read the file at `path` and upload it as `filename`
    Upload {
        /// Normalized remote filename
        filename: String,
        /// Absolute local path
        path: PathBuf,
        /// Creation or update
        action: UploadAction,
    },
    /// Delete `filename` from the game
    Delete {
        /// Normalized remote filename
        filename: String,
    },
}

/// Translate a notify event into file changes
///
/// Metadata-only modifications and access events produce nothing.
#[must_use]
pub fn changes_from_event(event: Event) -> Vec<FileChange> {
    let paths = event.paths;

    match event.kind {
        EventKind::Create(_) => paths.into_iter().map(FileChange::Added).collect(),
        EventKind::Remove(_) => paths.into_iter().map(FileChange::Removed).collect(),
        EventKind::Modify(ModifyKind::Name(RenameMode::From)) => {
            paths.into_iter().map(FileChange::Removed).collect()
        }
        EventKind::Modify(ModifyKind::Name(RenameMode::To)) => {
            paths.into_iter().map(FileChange::Added).collect()
        }
        EventKind::Modify(ModifyKind::Name(RenameMode::Both)) => {
            let mut paths = paths.into_iter();
            let mut changes = Vec::new();
            if let Some(from) = paths.next() {
                changes.push(FileChange::Removed(from));
            }
            changes.extend(paths.map(FileChange::Added));
            changes
        }
        // Backends that cannot tell the rename side apart
        EventKind::Modify(ModifyKind::Name(_)) => paths
            .into_iter()
            .map(|path| {
                if path.exists() {
                    FileChange::Added(path)
                } else {
                    FileChange::Removed(path)
                }
            })
            .collect(),
        EventKind::Modify(ModifyKind::Metadata(_)) => Vec::new(),
        EventKind::Modify(_) => paths.into_iter().map(FileChange::Changed).collect(),
        EventKind::Access(_) | EventKind::Any | EventKind::Other => Vec::new(),
    }
}

/// Decides what to do about changes below the script root
#[derive(Debug, Clone)]
pub struct ScriptWatcher {
    root: PathBuf,
    filter: ScriptFilter,
    allow_delete: bool,
}

impl ScriptWatcher {
    /// Create a watcher for the configured script root
    #[must_use]
    pub fn new(config: &SyncConfig) -> Self {
        Self {
            root: config.script_root.clone(),
            filter: config.filter.clone(),
            allow_delete: config.allow_delete,
        }
    }

    /// Action for a change, if it concerns a synced script
    ///
    /// Removals only produce a delete when deletions are allowed.
    #[must_use]
    pub fn action_for(&self, change: &FileChange) -> Option<WatchAction> {
        let path = change.path();
        let relative = path.strip_prefix(&self.root).ok()?;

        if !self.filter.accepts(relative) {
            return None;
        }

        let filename = filename::from_relative_path(relative);

        match change {
            FileChange::Added(path) => Some(WatchAction::Upload {
                filename,
                path: path.clone(),
                action: UploadAction::Create,
            }),
            FileChange::Changed(path) => Some(WatchAction::Upload {
                filename,
                path: path.clone(),
                action: UploadAction::Update,
            }),
            FileChange::Removed(_) if self.allow_delete => Some(WatchAction::Delete { filename }),
            FileChange::Removed(_) => None,
        }
    }
}

/// Watch the script root and push every change until interrupted
///
/// # Errors
///
/// Returns an error if the watcher cannot be started or the initial scan
/// fails. Failures of individual uploads are only logged.
pub async fn watch(config: &SyncConfig, client: &BitburnerClient) -> Result<()> {
    let decider = ScriptWatcher::new(config);
    let (tx, mut rx) = mpsc::unbounded_channel();

    let mut watcher = notify::recommended_watcher(move |res: notify::Result<Event>| match res {
        Ok(event) => {
            for change in changes_from_event(event) {
                let _ = tx.send(change);
            }
        }
        Err(e) => tracing::warn!("Watch error - {e}"),
    })
    .context("Failed to start file watcher")?;

    watcher
        .watch(&config.script_root, RecursiveMode::Recursive)
        .with_context(|| format!("Failed to watch {}", config.script_root.display()))?;

    // Registered before scanning so nothing slips between the two
    for (filename, code) in scanner::collect(&config.script_root, &config.filter)? {
        spawn_upload(client, filename, code, UploadAction::Create);
    }

    tracing::info!("Ctrl-C to end watcher");

    while let Some(change) = rx.recv().await {
        tracing::debug!(?change, "filesystem change");

        match decider.action_for(&change) {
            Some(WatchAction::Upload {
                filename,
                path,
                action,
            }) => {
                if path.is_dir() {
                    continue;
                }
                match tokio::fs::read(&path).await {
                    Ok(bytes) => {
                        let code = String::from_utf8_lossy(&bytes).into_owned();
                        spawn_upload(client, filename, code, action);
                    }
                    Err(e) => tracing::warn!(file = %filename, "Failed to read - {e}"),
                }
            }
            Some(WatchAction::Delete { filename }) => {
                let client = client.clone();
                tokio::spawn(async move {
                    let _ = delete_remote_file(&client, &filename).await;
                });
            }
            None => {}
        }
    }

    Ok(())
}

fn spawn_upload(client: &BitburnerClient, filename: String, code: String, action: UploadAction) {
    let client = client.clone();
    tokio::spawn(async move {
        let _ = upload_file(&client, &filename, &code, action).await;
    });
}
