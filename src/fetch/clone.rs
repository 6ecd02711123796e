//! Kit transport: clone a remote repository into the staging directory
//!
//! The transport is a black box to the rest of the pipeline: given a URL and
//! a destination, it produces a populated tree or a classified failure. The
//! classification is what lets the operator tell "you have no internet" from
//! "that kit does not exist".

use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};

use git2::{ErrorClass, FetchOptions, RemoteCallbacks, build::RepoBuilder};

use crate::error::AgentkitError;
use crate::locator::KitLocator;

/// Classified clone failure, mapped onto the error taxonomy by the caller.
#[derive(Debug)]
pub enum FetchFailure {
    Network(String),
    NotFound,
    Other(String),
}

impl FetchFailure {
    pub fn into_error(self, locator: &KitLocator) -> AgentkitError {
        match self {
            FetchFailure::Network(reason) => AgentkitError::FetchNetwork {
                locator: locator.to_string(),
                reason,
            },
            FetchFailure::NotFound => AgentkitError::KitNotFound {
                locator: locator.to_string(),
            },
            FetchFailure::Other(reason) => AgentkitError::FetchFailed {
                locator: locator.to_string(),
                reason,
            },
        }
    }
}

/// Clone `url` into `dest`. The `cancel` flag is polled from the transfer
/// progress callback; once set, the transfer aborts and its outcome is
/// discarded by the caller.
pub fn clone_kit(url: &str, dest: &Path, cancel: &AtomicBool) -> Result<(), FetchFailure> {
    let mut callbacks = RemoteCallbacks::new();
    callbacks.transfer_progress(|_| !cancel.load(Ordering::Relaxed));

    let mut fetch_options = FetchOptions::new();
    fetch_options.remote_callbacks(callbacks);

    // Shallow clone: only the tip tree is merged. Not supported for local
    // file URLs, which the test fixtures use.
    let is_local = url.starts_with("file://") || Path::new(url).is_absolute();
    if !is_local {
        fetch_options.depth(1);
    }

    let mut builder = RepoBuilder::new();
    builder.fetch_options(fetch_options);

    match builder.clone(url, dest) {
        Ok(_) => Ok(()),
        Err(e) => Err(classify(&e)),
    }
}

type Check = fn(&str, ErrorClass) -> bool;

#[derive(Clone, Copy)]
enum FailureKind {
    NotFound,
    Network,
}

const CLASSIFICATIONS: &[(Check, FailureKind)] = &[
    (
        |msg, _| {
            msg.contains("not found")
                || msg.contains("404")
                || msg.contains("unexpected http status")
                || msg.contains("does not appear to be a git repository")
        },
        FailureKind::NotFound,
    ),
    (
        |msg, class| {
            class == ErrorClass::Net
                || msg.contains("could not resolve")
                || msg.contains("failed to resolve address")
                || msg.contains("connection")
                || msg.contains("network")
                || msg.contains("unreachable")
        },
        FailureKind::Network,
    ),
];

fn classify(err: &git2::Error) -> FetchFailure {
    let msg = err.message().to_lowercase();
    for (check, kind) in CLASSIFICATIONS {
        if check(&msg, err.class()) {
            return match kind {
                FailureKind::NotFound => FetchFailure::NotFound,
                FailureKind::Network => FetchFailure::Network(err.message().to_string()),
            };
        }
    }
    FetchFailure::Other(err.message().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_not_found() {
        let err = git2::Error::from_str("unexpected http status code: 404");
        assert!(matches!(classify(&err), FetchFailure::NotFound));
    }

    #[test]
    fn test_classify_name_resolution_failure() {
        let err = git2::Error::from_str("could not resolve host github.com");
        assert!(matches!(classify(&err), FetchFailure::Network(_)));
    }

    #[test]
    fn test_classify_connection_failure() {
        let err = git2::Error::from_str("connection refused");
        assert!(matches!(classify(&err), FetchFailure::Network(_)));
    }

    #[test]
    fn test_classify_falls_back_to_other() {
        let err = git2::Error::from_str("object database corrupt");
        assert!(matches!(classify(&err), FetchFailure::Other(_)));
    }

    #[test]
    fn test_into_error_keeps_locator() {
        let locator: KitLocator = "owner/kit".parse().expect("valid locator");
        let err = FetchFailure::NotFound.into_error(&locator);
        assert!(err.to_string().contains("owner/kit"));
    }
}
