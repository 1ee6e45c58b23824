use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use regex::Regex;

use crate::domain::prerelease::PreRelease;
use crate::error::{Result, SemverResourceError};

/// Semantic version `major.minor.patch[-prerelease][+build]`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Version {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
    pub pre: PreRelease,
    /// Build metadata, without the leading '+'. Ignored for precedence.
    pub build: String,
}

/// Grammar from semver.org, minus the capture names
fn version_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(
            r"^(0|[1-9]\d*)\.(0|[1-9]\d*)\.(0|[1-9]\d*)(?:-((?:0|[1-9]\d*|\d*[a-zA-Z-][0-9a-zA-Z-]*)(?:\.(?:0|[1-9]\d*|\d*[a-zA-Z-][0-9a-zA-Z-]*))*))?(?:\+([0-9a-zA-Z-]+(?:\.[0-9a-zA-Z-]+)*))?$",
        )
        .expect("semver pattern compiles")
    })
}

impl Version {
    /// Create a release version with no pre-release or build metadata
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        Version {
            major,
            minor,
            patch,
            pre: PreRelease::empty(),
            build: String::new(),
        }
    }

    /// Parse a version string such as "1.2.3", "1.2.4-rc.1" or "1.0.0+build.7".
    ///
    /// Unlike tag parsing, no 'v' prefix or surrounding whitespace is accepted.
    pub fn parse(text: &str) -> Result<Self> {
        let captures = version_pattern().captures(text).ok_or_else(|| {
            SemverResourceError::version(text, "expected major.minor.patch[-prerelease][+build]")
        })?;

        let component = |index: usize, name: &str| -> Result<u64> {
            captures[index].parse::<u64>().map_err(|_| {
                SemverResourceError::version(text, format!("{} version is too large", name))
            })
        };

        let major = component(1, "major")?;
        let minor = component(2, "minor")?;
        let patch = component(3, "patch")?;

        let pre = match captures.get(4) {
            Some(m) => PreRelease::parse(m.as_str())
                .map_err(|reason| SemverResourceError::version(text, reason))?,
            None => PreRelease::empty(),
        };

        let build = captures
            .get(5)
            .map(|m| m.as_str().to_string())
            .unwrap_or_default();

        Ok(Version {
            major,
            minor,
            patch,
            pre,
            build,
        })
    }

    pub fn is_prerelease(&self) -> bool {
        !self.pre.is_empty()
    }

    /// Same numeric components with pre-release and build metadata dropped
    pub fn release(&self) -> Self {
        Version::new(self.major, self.minor, self.patch)
    }

    /// Compare by semver precedence, ignoring build metadata.
    pub fn cmp_precedence(&self, other: &Self) -> Ordering {
        self.major
            .cmp(&other.major)
            .then(self.minor.cmp(&other.minor))
            .then(self.patch.cmp(&other.patch))
            .then_with(|| self.pre.cmp(&other.pre))
    }
}

/// Precedence first, then build metadata so that `Ord` agrees with `Eq`.
impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        self.cmp_precedence(other)
            .then_with(|| self.build.cmp(&other.build))
    }
}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl FromStr for Version {
    type Err = SemverResourceError;

    fn from_str(s: &str) -> Result<Self> {
        Version::parse(s)
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)?;
        if !self.pre.is_empty() {
            write!(f, "-{}", self.pre)?;
        }
        if !self.build.is_empty() {
            write!(f, "+{}", self.build)?;
        }
        Ok(())
    }
}
