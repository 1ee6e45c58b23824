//! Pre-release identifiers for semantic versioning
//!
//! A pre-release is a dot-separated run of identifiers such as `rc.1` or
//! `alpha.beta.3`. See https://semver.org/#spec-item-9 for the grammar and
//! https://semver.org/#spec-item-11 for precedence.

use std::cmp::Ordering;
use std::fmt;

/// A single pre-release identifier.
///
/// Variant order matters: the derived `Ord` ranks every numeric identifier
/// below every alphanumeric one, numeric ones compare by value and
/// alphanumeric ones compare bytewise in ASCII order.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Identifier {
    Numeric(u64),
    AlphaNumeric(String),
}

impl Identifier {
    /// Parse one identifier, returning a human-readable reason on failure
    pub fn parse(s: &str) -> Result<Self, String> {
        if s.is_empty() {
            return Err("empty pre-release identifier".to_string());
        }

        if let Some(c) = s.chars().find(|c| !(c.is_ascii_alphanumeric() || *c == '-')) {
            return Err(format!("invalid character '{}' in identifier '{}'", c, s));
        }

        if s.bytes().all(|b| b.is_ascii_digit()) {
            if s.len() > 1 && s.starts_with('0') {
                return Err(format!("numeric identifier '{}' has a leading zero", s));
            }
            return s
                .parse::<u64>()
                .map(Identifier::Numeric)
                .map_err(|_| format!("numeric identifier '{}' is too large", s));
        }

        Ok(Identifier::AlphaNumeric(s.to_string()))
    }

    pub fn is_numeric(&self) -> bool {
        matches!(self, Identifier::Numeric(_))
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Identifier::Numeric(n) => write!(f, "{}", n),
            Identifier::AlphaNumeric(s) => write!(f, "{}", s),
        }
    }
}

/// Ordered sequence of pre-release identifiers, possibly empty.
///
/// The empty sequence means "this is a release" and ranks above every
/// non-empty sequence.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct PreRelease {
    identifiers: Vec<Identifier>,
}

impl PreRelease {
    /// The empty pre-release (a release version)
    pub fn empty() -> Self {
        PreRelease::default()
    }

    /// Parse a dot-separated identifier run such as "rc.1".
    ///
    /// An empty string yields the empty pre-release.
    pub fn parse(s: &str) -> Result<Self, String> {
        if s.is_empty() {
            return Ok(PreRelease::empty());
        }

        let identifiers = s
            .split('.')
            .map(Identifier::parse)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(PreRelease { identifiers })
    }

    /// Start a new pre-release track: `label` followed by index 1.
    ///
    /// # Examples
    /// ```ignore
    /// let rc = PreRelease::starting(&PreRelease::parse("rc")?);
    /// assert_eq!(rc.to_string(), "rc.1");
    /// ```
    pub fn starting(label: &PreRelease) -> Self {
        let mut identifiers = label.identifiers.clone();
        identifiers.push(Identifier::Numeric(1));
        PreRelease { identifiers }
    }

    pub fn is_empty(&self) -> bool {
        self.identifiers.is_empty()
    }

    pub fn identifiers(&self) -> &[Identifier] {
        &self.identifiers
    }

    /// The track label: every identifier before the trailing numeric index.
    ///
    /// For "rc.3" this is `[rc]`; for "alpha.beta" (no index) it is the
    /// whole sequence.
    pub fn label(&self) -> &[Identifier] {
        match self.identifiers.last() {
            Some(last) if last.is_numeric() => &self.identifiers[..self.identifiers.len() - 1],
            _ => &self.identifiers,
        }
    }

    /// The trailing numeric index, if the sequence ends in one
    pub fn index(&self) -> Option<u64> {
        match self.identifiers.last() {
            Some(Identifier::Numeric(n)) => Some(*n),
            _ => None,
        }
    }

    /// Whether this pre-release is on the track named by `label`
    pub fn is_on_track(&self, label: &PreRelease) -> bool {
        self.label() == label.identifiers()
    }

    /// Advance the trailing index by one.
    ///
    /// A sequence without a trailing index is treated as index 0, so "rc"
    /// becomes "rc.1". Returns `None` if the index would overflow.
    pub fn next_index(&self) -> Option<Self> {
        let mut identifiers = self.label().to_vec();
        let next = match self.index() {
            Some(n) => n.checked_add(1)?,
            None => 1,
        };
        identifiers.push(Identifier::Numeric(next));
        Some(PreRelease { identifiers })
    }
}

impl Ord for PreRelease {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.is_empty(), other.is_empty()) {
            (true, true) => Ordering::Equal,
            (true, false) => Ordering::Greater,
            (false, true) => Ordering::Less,
            // Vec ordering is lexicographic and ranks a strict prefix lower
            (false, false) => self.identifiers.cmp(&other.identifiers),
        }
    }
}

impl PartialOrd for PreRelease {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for PreRelease {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, identifier) in self.identifiers.iter().enumerate() {
            if i > 0 {
                f.write_str(".")?;
            }
            write!(f, "{}", identifier)?;
        }
        Ok(())
    }
}
