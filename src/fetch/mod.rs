//! Staged fetching of remote kits
//!
//! This module handles:
//! - The invocation-unique staging directory a kit is cloned into
//! - Racing the clone against a wall-clock deadline
//! - Classified fetch failures (network, not found, timeout, other)
//!
//! The staging directory is scoped state: the caller removes it on every
//! exit path, and [`Staging`] carries a `Drop` backstop for paths that never
//! reach an explicit cleanup.

mod clone;

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use uuid::Uuid;

use crate::error::{AgentkitError, Result};
use crate::locator::KitLocator;

/// Default wall-clock bound for a fetch, in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Scoped staging directory for one fetch-and-merge run.
///
/// The name embeds a random UUID so concurrent invocations never collide on
/// temporary state, even across environments that recycle process ids.
pub struct Staging {
    path: PathBuf,
    cleaned: bool,
}

impl Staging {
    /// Pick a unique staging path for `locator` and clear any stale
    /// directory already occupying it, so the fetch starts clean.
    pub fn create(locator: &KitLocator) -> Result<Self> {
        Self::prepare(temp_dir_base().join(format!(
            "agentkit-{}-{}",
            locator.slug(),
            Uuid::new_v4().simple()
        )))
    }

    fn prepare(path: PathBuf) -> Result<Self> {
        if path.exists() {
            fs::remove_dir_all(&path).map_err(|e| AgentkitError::StagingFailed {
                reason: format!("could not remove stale {}: {}", path.display(), e),
            })?;
        }
        Ok(Self {
            path,
            cleaned: false,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Remove the staging tree. Absence is not an error; the caller decides
    /// whether a removal failure is worth more than a warning.
    pub fn cleanup(mut self) -> std::io::Result<()> {
        self.cleaned = true;
        remove_tree(&self.path)
    }
}

impl Drop for Staging {
    fn drop(&mut self) {
        if !self.cleaned {
            let _ = remove_tree(&self.path);
        }
    }
}

fn remove_tree(path: &Path) -> std::io::Result<()> {
    match fs::remove_dir_all(path) {
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
        other => other,
    }
}

/// Absolute base for staging directories. A relative `TMPDIR` (e.g.
/// `TMPDIR=tmp`) must never place staging under the current working
/// directory.
fn temp_dir_base() -> PathBuf {
    let t = std::env::temp_dir();
    if t.is_absolute() {
        t
    } else {
        #[cfg(windows)]
        {
            std::env::var("TEMP")
                .or_else(|_| std::env::var("TMP"))
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("C:\\Windows\\Temp"))
        }
        #[cfg(not(windows))]
        {
            PathBuf::from("/tmp")
        }
    }
}

/// Clone the kit named by `locator` into `staging` within `timeout`.
///
/// The clone runs on a worker thread and races the deadline. When the
/// deadline fires first, a cancellation flag stops the transfer at its next
/// progress callback and the worker's eventual result is discarded; the
/// caller removes the staging directory either way.
pub fn fetch(locator: &KitLocator, staging: &Path, timeout: Duration) -> Result<()> {
    let cancel = Arc::new(AtomicBool::new(false));
    let (tx, rx) = mpsc::channel();

    let url = locator.url();
    let dest = staging.to_path_buf();
    let flag = Arc::clone(&cancel);
    let worker = thread::Builder::new()
        .name("agentkit-fetch".to_string())
        .spawn(move || {
            let _ = tx.send(clone::clone_kit(&url, &dest, &flag));
        })
        .map_err(|e| AgentkitError::FetchFailed {
            locator: locator.to_string(),
            reason: format!("could not spawn fetch worker: {}", e),
        })?;

    match rx.recv_timeout(timeout) {
        Ok(Ok(())) => {
            let _ = worker.join();
            Ok(())
        }
        Ok(Err(failure)) => {
            let _ = worker.join();
            Err(failure.into_error(locator))
        }
        Err(mpsc::RecvTimeoutError::Timeout) => {
            cancel.store(true, Ordering::Relaxed);
            // Not joined: a transfer stalled inside the transport only
            // notices the flag at its next progress callback.
            Err(AgentkitError::FetchTimeout {
                locator: locator.to_string(),
                seconds: timeout.as_secs(),
            })
        }
        Err(mpsc::RecvTimeoutError::Disconnected) => Err(AgentkitError::FetchFailed {
            locator: locator.to_string(),
            reason: "fetch worker terminated unexpectedly".to_string(),
        }),
    }
}
