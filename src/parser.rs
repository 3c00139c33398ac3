use crate::error::{Component, OsReleaseError};
use crate::version::Version;
use lazy_static::lazy_static;
use regex::Regex;
use std::path::Path;
use std::str::FromStr;
use tracing::trace;

// Constants
pub const OSRELEASE_PATH: &str = "/proc/sys/kernel/osrelease";
// Whole match plus major, minor, patch and suffix
const EXPECTED_GROUPS: usize = 5;

lazy_static! {
    // Anchored at the start, the suffix swallows the rest verbatim (newlines included)
    static ref PATTERN: Regex =
        Regex::new(r"(?s)^(\d+)\.(\d+)\.(\d+)(.*)").expect("Invalid osrelease pattern");
}

/// Reads the running kernel's release from `/proc/sys/kernel/osrelease`.
pub fn parse() -> Result<Version, OsReleaseError> {
    parse_from_path(OSRELEASE_PATH)
}

/// Reads a single-line release file and parses it. The file's trailing line
/// terminator is not part of the release.
pub fn parse_from_path(path: impl AsRef<Path>) -> Result<Version, OsReleaseError> {
    let path = path.as_ref();
    trace!("Reading osrelease from {}", path.display());

    let raw = std::fs::read(path).map_err(|source| OsReleaseError::ReadOsRelease {
        path: path.to_path_buf(),
        source,
    })?;
    let raw = String::from_utf8_lossy(&raw);
    let raw: &str = &raw;
    let line = raw
        .strip_suffix("\r\n")
        .or_else(|| raw.strip_suffix('\n'))
        .unwrap_or(raw);

    parse_string(line)
}

pub fn parse_string(s: &str) -> Result<Version, OsReleaseError> {
    let caps = PATTERN.captures(s);
    let found = caps
        .as_ref()
        .map_or(0, |caps| caps.iter().flatten().count());
    let caps = match caps {
        Some(caps) if found == EXPECTED_GROUPS => caps,
        _ => {
            return Err(OsReleaseError::MatchCountMismatch {
                expected: EXPECTED_GROUPS,
                found,
                input: s.to_string(),
            })
        }
    };

    let major = parse_number(Component::Major, &caps[1])?;
    let minor = parse_number(Component::Minor, &caps[2])?;
    let patch = parse_number(Component::Patch, &caps[3])?;

    let version = Version::from_parts(major, minor, patch, &caps[4], &caps[0]);
    trace!("Parsed osrelease {:?}", version);
    Ok(version)
}

// \d also matches non-ASCII digits, which u64 parsing rejects
fn parse_number(component: Component, text: &str) -> Result<u64, OsReleaseError> {
    text.parse::<u64>()
        .map_err(|source| OsReleaseError::InvalidVersionNumber {
            component,
            text: text.to_string(),
            source,
        })
}

impl FromStr for Version {
    type Err = OsReleaseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_string(s)
    }
}
