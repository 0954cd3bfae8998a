//! Scan model
//!
//! Types shared across the pipeline: the scan configuration, the ordered
//! reference collection and the per-run counters.

use indexmap::IndexSet;
use std::path::PathBuf;

/// Default scan root
pub const DEFAULT_ROOT: &str = "wahlzeit";

/// Default file extension (without the leading dot)
pub const DEFAULT_EXTENSION: &str = "java";

/// Default excluded namespace (the project's own packages)
pub const DEFAULT_EXCLUDED_NAMESPACE: &str = "org.wahlzeit";

/// What to do with a matching line whose reference cannot be derived
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MalformedPolicy {
    /// Abort the whole run
    #[default]
    Abort,
    /// Log a warning and keep scanning
    Skip,
}

/// Configuration for a single scan run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanConfig {
    /// Directory to walk
    pub root: PathBuf,

    /// File extension to select, without the leading dot
    pub extension: String,

    /// Lines containing this substring never contribute references
    pub excluded_namespace: String,

    /// Handling of malformed import lines
    pub malformed: MalformedPolicy,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from(DEFAULT_ROOT),
            extension: DEFAULT_EXTENSION.to_string(),
            excluded_namespace: DEFAULT_EXCLUDED_NAMESPACE.to_string(),
            malformed: MalformedPolicy::Abort,
        }
    }
}

impl ScanConfig {
    /// Create a config for `root` with the default extension and namespace
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            ..Self::default()
        }
    }

    /// Set the extension; a leading dot is dropped
    pub fn with_extension(mut self, extension: impl AsRef<str>) -> Self {
        let ext = extension.as_ref();
        self.extension = ext.strip_prefix('.').unwrap_or(ext).to_string();
        self
    }

    pub fn with_excluded_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.excluded_namespace = namespace.into();
        self
    }

    pub fn with_malformed(mut self, policy: MalformedPolicy) -> Self {
        self.malformed = policy;
        self
    }

    /// File name suffix selected by discovery, e.g. `.java`
    pub fn suffix(&self) -> String {
        format!(".{}", self.extension)
    }
}

/// Ordered set of unique reference tokens, in first-seen order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReferenceSet {
    refs: IndexSet<String>,
}

impl ReferenceSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a token; returns false if it was already present
    pub fn insert(&mut self, token: impl Into<String>) -> bool {
        self.refs.insert(token.into())
    }

    pub fn len(&self) -> usize {
        self.refs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.refs.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.refs.iter().map(String::as_str)
    }
}

/// Counters collected during a run (diagnostics only)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanStats {
    pub files_scanned: usize,
    pub lines_matched: usize,
    pub references_kept: usize,
    pub duplicates_dropped: usize,
    pub excluded: usize,
    pub malformed_skipped: usize,
}

/// Result of a completed scan
#[derive(Debug, Clone, Default)]
pub struct ScanOutcome {
    pub references: ReferenceSet,
    pub stats: ScanStats,
}
