use std::fmt;
use std::io;
use std::num::ParseIntError;
use std::path::PathBuf;

/// Which numeric segment of a release string failed to convert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Component {
    Major,
    Minor,
    Patch,
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Component::Major => write!(f, "major"),
            Component::Minor => write!(f, "minor"),
            Component::Patch => write!(f, "patch"),
        }
    }
}

#[derive(thiserror::Error, Debug)]
pub enum OsReleaseError {
    /// The release file could not be read, nothing was parsed
    #[error("error opening osrelease {}: {source}", .path.display())]
    ReadOsRelease {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The input doesn't have the `N.N.N<rest>` shape
    #[error("error parsing osrelease: match count mismatch: expected {expected}, got {found} with {input:?}")]
    MatchCountMismatch {
        expected: usize,
        found: usize,
        input: String,
    },

    #[error("error parsing version number: {component} version should be int, is '{text}'")]
    InvalidVersionNumber {
        component: Component,
        text: String,
        #[source]
        source: ParseIntError,
    },
}

impl OsReleaseError {
    pub fn is_read_error(&self) -> bool {
        matches!(self, OsReleaseError::ReadOsRelease { .. })
    }

    pub fn is_structural(&self) -> bool {
        matches!(self, OsReleaseError::MatchCountMismatch { .. })
    }

    pub fn is_numeric(&self) -> bool {
        matches!(self, OsReleaseError::InvalidVersionNumber { .. })
    }
}
