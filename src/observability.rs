//! Observer hooks for per-feature transform events.
//!
//! Attach an observer with [`crate::features::FeaturesList::with_observer`] to log or record
//! what each feature produced.

use std::fmt;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use std::time::{SystemTime, UNIX_EPOCH};

use crate::config::PreprocessorKind;
use crate::error::PreprocessError;

/// Which feature an event refers to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeatureContext {
    /// Position of the feature in its list.
    pub index: usize,
    /// Feature name.
    pub name: String,
    /// Preprocessor attached to the feature.
    pub kind: PreprocessorKind,
}

/// Shape of the block a feature produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeatureStats {
    pub rows: usize,
    pub columns: usize,
}

/// Observer interface for feature transforms.
///
/// All methods default to no-ops so implementors only override what they need.
pub trait TransformObserver: Send + Sync {
    /// Called after a feature's forward transform succeeds.
    fn on_transformed(&self, _ctx: &FeatureContext, _stats: FeatureStats) {}

    /// Called after a feature's inverse transform succeeds.
    fn on_inverted(&self, _ctx: &FeatureContext, _stats: FeatureStats) {}

    /// Called when a feature fails, before the error is returned.
    fn on_failure(&self, _ctx: &FeatureContext, _error: &PreprocessError) {}
}

/// An observer that fans out callbacks to a list of observers.
#[derive(Default)]
pub struct CompositeObserver {
    observers: Vec<Arc<dyn TransformObserver>>,
}

impl CompositeObserver {
    /// Create a new composite observer from a list of observers.
    pub fn new(observers: Vec<Arc<dyn TransformObserver>>) -> Self {
        Self { observers }
    }
}

impl fmt::Debug for CompositeObserver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompositeObserver")
            .field("observers_len", &self.observers.len())
            .finish()
    }
}

impl TransformObserver for CompositeObserver {
    fn on_transformed(&self, ctx: &FeatureContext, stats: FeatureStats) {
        for o in &self.observers {
            o.on_transformed(ctx, stats);
        }
    }

    fn on_inverted(&self, ctx: &FeatureContext, stats: FeatureStats) {
        for o in &self.observers {
            o.on_inverted(ctx, stats);
        }
    }

    fn on_failure(&self, ctx: &FeatureContext, error: &PreprocessError) {
        for o in &self.observers {
            o.on_failure(ctx, error);
        }
    }
}

/// Logs feature events to stderr.
#[derive(Debug, Default)]
pub struct StdErrObserver;

impl TransformObserver for StdErrObserver {
    fn on_transformed(&self, ctx: &FeatureContext, stats: FeatureStats) {
        eprintln!(
            "[features][transform] #{} name={} kind={:?} rows={} columns={}",
            ctx.index, ctx.name, ctx.kind, stats.rows, stats.columns
        );
    }

    fn on_inverted(&self, ctx: &FeatureContext, stats: FeatureStats) {
        eprintln!(
            "[features][inverse] #{} name={} kind={:?} rows={} columns={}",
            ctx.index, ctx.name, ctx.kind, stats.rows, stats.columns
        );
    }

    fn on_failure(&self, ctx: &FeatureContext, error: &PreprocessError) {
        eprintln!(
            "[features][error] #{} name={} kind={:?} err={}",
            ctx.index, ctx.name, ctx.kind, error
        );
    }
}

/// Appends feature events to a local log file.
#[derive(Debug)]
pub struct FileObserver {
    path: PathBuf,
    lock: Mutex<()>,
}

impl FileObserver {
    /// Create a file observer that appends events to `path`.
    ///
    /// Writes are best-effort; failures to open/write the log file are ignored.
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            lock: Mutex::new(()),
        }
    }

    fn append_line(&self, line: &str) {
        let _guard = self.lock.lock().ok();
        if let Ok(mut f) = OpenOptions::new().create(true).append(true).open(&self.path) {
            let _ = writeln!(f, "{line}");
        }
    }
}

impl TransformObserver for FileObserver {
    fn on_transformed(&self, ctx: &FeatureContext, stats: FeatureStats) {
        self.append_line(&format!(
            "{} transform index={} name={} kind={:?} rows={} columns={}",
            unix_ts(),
            ctx.index,
            ctx.name,
            ctx.kind,
            stats.rows,
            stats.columns
        ));
    }

    fn on_inverted(&self, ctx: &FeatureContext, stats: FeatureStats) {
        self.append_line(&format!(
            "{} inverse index={} name={} kind={:?} rows={} columns={}",
            unix_ts(),
            ctx.index,
            ctx.name,
            ctx.kind,
            stats.rows,
            stats.columns
        ));
    }

    fn on_failure(&self, ctx: &FeatureContext, error: &PreprocessError) {
        self.append_line(&format!(
            "{} error index={} name={} kind={:?} err={}",
            unix_ts(),
            ctx.index,
            ctx.name,
            ctx.kind,
            error
        ));
    }
}

fn unix_ts() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs()
}
