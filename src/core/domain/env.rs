//! Child environment type.
//!
//! An ordered list of variables handed to one subprocess. Duplicate names are
//! allowed; the last occurrence wins.

use std::ffi::{OsStr, OsString};
use std::fmt;

/// Environment for a single subprocess invocation.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct ChildEnv {
    entries: Vec<(OsString, OsString)>,
}

impl ChildEnv {
    /// Snapshot of the current process environment.
    pub fn inherited() -> Self {
        Self {
            entries: std::env::vars_os().collect(),
        }
    }

    /// Create from raw name/value pairs, preserving order.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<OsString>,
        V: Into<OsString>,
    {
        Self {
            entries: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Append a variable. Overrides any earlier entry with the same name.
    pub fn push(&mut self, key: impl Into<OsString>, value: impl Into<OsString>) {
        self.entries.push((key.into(), value.into()));
    }

    /// Effective value of a variable (last occurrence).
    pub fn get(&self, key: impl AsRef<OsStr>) -> Option<&OsStr> {
        let key = key.as_ref();
        self.entries
            .iter()
            .rev()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_os_str())
    }

    /// All entries in insertion order, duplicates included.
    pub fn entries(&self) -> &[(OsString, OsString)] {
        &self.entries
    }

    /// Number of entries, duplicates included.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Render as `KEY=VALUE` strings in insertion order.
    ///
    /// Non-UTF-8 content is replaced lossily.
    pub fn to_strings(&self) -> Vec<String> {
        self.entries
            .iter()
            .map(|(k, v)| format!("{}={}", k.to_string_lossy(), v.to_string_lossy()))
            .collect()
    }
}

impl fmt::Debug for ChildEnv {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChildEnv")
            .field("len", &self.entries.len())
            .finish_non_exhaustive()
    }
}
