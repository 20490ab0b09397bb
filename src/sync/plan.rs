//! Reconciliation of local and remote file sets
//!
//! Pure decision logic. Both directions join the two sides on the normalized
//! filename; nothing here touches the network or the disk, so a dry run and
//! a real run always agree on what to do.

use std::collections::BTreeSet;

use crate::filename;
use crate::remote::RemoteFile;
use crate::scanner::FileMapping;

/// Decisions for pushing local scripts to the game
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PushPlan {
    /// Local files to upload, every one of them
    pub uploads: Vec<String>,
    /// Remote files with no local counterpart
    pub deletions: Vec<String>,
}

/// Decisions for pulling the game's scripts to disk
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PullPlan<'a> {
    /// Remote files to write locally, every one of them
    pub writes: Vec<&'a RemoteFile>,
    /// Local files with no remote counterpart
    pub deletions: Vec<String>,
}

/// Plan a push
///
/// Deletions are only computed when `allow_delete` is set and a remote
/// listing is available.
#[must_use]
pub fn plan_push(
    local: &FileMapping,
    remote: Option<&[RemoteFile]>,
    allow_delete: bool,
) -> PushPlan {
    let uploads = local.keys().cloned().collect();

    let deletions = match remote {
        Some(remote) if allow_delete => remote_names(remote)
            .into_iter()
            .filter(|name| !local.contains_key(name))
            .collect(),
        _ => Vec::new(),
    };

    PushPlan { uploads, deletions }
}

/// Plan a pull
///
/// Deletions are only computed when `allow_delete` is set and the local
/// files were collected.
#[must_use]
pub fn plan_pull<'a>(
    remote: &'a [RemoteFile],
    local: Option<&FileMapping>,
    allow_delete: bool,
) -> PullPlan<'a> {
    let writes = remote.iter().collect();

    let deletions = match local {
        Some(local) if allow_delete => {
            let remote = remote_names(remote);
            local
                .keys()
                .filter(|name| !remote.contains(*name))
                .cloned()
                .collect()
        }
        _ => Vec::new(),
    };

    PullPlan { writes, deletions }
}

fn remote_names(remote: &[RemoteFile]) -> BTreeSet<String> {
    remote
        .iter()
        .map(|file| filename::normalize(&file.filename))
        .collect()
}
