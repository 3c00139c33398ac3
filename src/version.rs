use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// Returned by callers in place of a parsed value when parsing fails
pub const EMPTY_VERSION: Version = Version {
    major: 0,
    minor: 0,
    patch: 0,
    suffix: String::new(),
    original: String::new(),
};

/// A kernel release, `major.minor.patch` followed by an opaque suffix such as
/// `-200.fc39.x86_64`.
///
/// Ordering (`newer_than` and friends) only looks at the numeric triple, while
/// equality compares every field. Two releases that differ only in their suffix
/// are neither newer nor older than each other, yet not equal. For that reason
/// there is no `Ord` impl.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Version {
    major: u64,
    minor: u64,
    patch: u64,
    suffix: String,
    // Text the value was built from
    original: String,
}

impl Version {
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        Version {
            major,
            minor,
            patch,
            suffix: String::new(),
            original: format!("{}.{}.{}", major, minor, patch),
        }
    }

    pub fn with_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = suffix.into();
        self.original = self.to_string();
        self
    }

    // Used by the parser, which keeps the matched text as provenance
    pub(crate) fn from_parts(
        major: u64,
        minor: u64,
        patch: u64,
        suffix: &str,
        original: &str,
    ) -> Self {
        Version {
            major,
            minor,
            patch,
            suffix: suffix.to_string(),
            original: original.to_string(),
        }
    }

    pub fn major(&self) -> u64 {
        self.major
    }

    pub fn minor(&self) -> u64 {
        self.minor
    }

    pub fn patch(&self) -> u64 {
        self.patch
    }

    pub fn suffix(&self) -> &str {
        &self.suffix
    }

    pub fn original(&self) -> &str {
        &self.original
    }

    pub fn is_empty(&self) -> bool {
        *self == EMPTY_VERSION
    }

    /// Compares major, then minor, then patch. The suffix is ignored.
    pub fn release_cmp(&self, other: &Version) -> Ordering {
        self.major
            .cmp(&other.major)
            .then_with(|| self.minor.cmp(&other.minor))
            .then_with(|| self.patch.cmp(&other.patch))
    }

    pub fn newer_than(&self, other: &Version) -> bool {
        self.release_cmp(other) == Ordering::Greater
    }

    pub fn newer_than_or_equal(&self, other: &Version) -> bool {
        self.release_cmp(other) != Ordering::Less
    }

    pub fn older_than(&self, other: &Version) -> bool {
        self.release_cmp(other) == Ordering::Less
    }

    pub fn older_than_or_equal(&self, other: &Version) -> bool {
        self.release_cmp(other) != Ordering::Greater
    }

    pub fn equal(&self, other: &Version) -> bool {
        self == other
    }

    pub fn not_equal(&self, other: &Version) -> bool {
        self != other
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}{}", self.major, self.minor, self.patch, self.suffix)
    }
}
