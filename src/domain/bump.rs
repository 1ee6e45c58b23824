//! Bump requests and the bump engine
//!
//! A [`BumpRequest`] is what the pipeline asks for: a handful of optional
//! flags that are not validated for mutual exclusion. [`BumpRequest::resolve`]
//! collapses it to exactly one [`BumpOperation`] by fixed precedence, and
//! [`BumpOperation::apply`] produces the next [`Version`].

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::prerelease::PreRelease;
use crate::domain::version::Version;
use crate::error::{Result, SemverResourceError};
use crate::models::null_as_default;

/// Bump parameters as supplied in the request envelope.
///
/// All fields are optional; several may be set at once.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BumpRequest {
    #[serde(deserialize_with = "null_as_default")]
    pub major: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub minor: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub patch: bool,
    /// Pre-release label. `Some("")` keeps the current label.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pre: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub r#final: bool,
}

/// The single bump a request resolves to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BumpOperation {
    None,
    Major,
    Minor,
    Patch,
    Final,
    /// `None` keeps the current pre-release label.
    PreRelease(Option<String>),
}

impl BumpRequest {
    /// Collapse the request to one operation.
    ///
    /// First match wins: final, pre, major, minor, patch. Conflicting flags
    /// are resolved, never rejected.
    pub fn resolve(&self) -> BumpOperation {
        if self.r#final {
            BumpOperation::Final
        } else if let Some(pre) = &self.pre {
            if pre.is_empty() {
                BumpOperation::PreRelease(None)
            } else {
                BumpOperation::PreRelease(Some(pre.clone()))
            }
        } else if self.major {
            BumpOperation::Major
        } else if self.minor {
            BumpOperation::Minor
        } else if self.patch {
            BumpOperation::Patch
        } else {
            BumpOperation::None
        }
    }

    /// Names of the flags that are set, in precedence order
    pub fn requested_flags(&self) -> Vec<&'static str> {
        let mut flags = Vec::new();
        if self.r#final {
            flags.push("final");
        }
        if self.pre.is_some() {
            flags.push("pre");
        }
        if self.major {
            flags.push("major");
        }
        if self.minor {
            flags.push("minor");
        }
        if self.patch {
            flags.push("patch");
        }
        flags
    }
}

impl BumpOperation {
    /// Apply this operation, producing a new version.
    ///
    /// Build metadata is cleared by every operation except `None`.
    ///
    /// # Errors
    /// * `MissingPreReleaseLabel` - pre-release bump of a release with no label
    /// * `InvalidPreReleaseLabel` - label is not a valid identifier run
    /// * `Overflow` - a numeric component would exceed `u64::MAX`
    pub fn apply(&self, version: &Version) -> Result<Version> {
        let overflow = || SemverResourceError::Overflow(version.to_string());

        let bumped = match self {
            BumpOperation::None => version.clone(),
            BumpOperation::Major => {
                Version::new(version.major.checked_add(1).ok_or_else(overflow)?, 0, 0)
            }
            BumpOperation::Minor => Version::new(
                version.major,
                version.minor.checked_add(1).ok_or_else(overflow)?,
                0,
            ),
            BumpOperation::Patch => {
                if version.is_prerelease() {
                    // finalizes the patch the pre-release was leading up to
                    version.release()
                } else {
                    Version::new(
                        version.major,
                        version.minor,
                        version.patch.checked_add(1).ok_or_else(overflow)?,
                    )
                }
            }
            BumpOperation::Final => version.release(),
            BumpOperation::PreRelease(label) => {
                let requested = label
                    .as_deref()
                    .filter(|l| !l.is_empty())
                    .map(|l| {
                        PreRelease::parse(l)
                            .map_err(|_| SemverResourceError::InvalidPreReleaseLabel(l.to_string()))
                    })
                    .transpose()?;

                let pre = match (&requested, version.is_prerelease()) {
                    (None, false) => {
                        return Err(SemverResourceError::MissingPreReleaseLabel {
                            version: version.to_string(),
                        })
                    }
                    (Some(track), false) => {
                        let patch = version.patch.checked_add(1).ok_or_else(overflow)?;
                        return Ok(Version {
                            pre: PreRelease::starting(track),
                            ..Version::new(version.major, version.minor, patch)
                        });
                    }
                    (Some(track), true) if !version.pre.is_on_track(track) => {
                        PreRelease::starting(track)
                    }
                    _ => version.pre.next_index().ok_or_else(overflow)?,
                };

                Version {
                    pre,
                    ..version.release()
                }
            }
        };

        Ok(bumped)
    }
}

impl fmt::Display for BumpOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BumpOperation::None => write!(f, "none"),
            BumpOperation::Major => write!(f, "major"),
            BumpOperation::Minor => write!(f, "minor"),
            BumpOperation::Patch => write!(f, "patch"),
            BumpOperation::Final => write!(f, "final"),
            BumpOperation::PreRelease(Some(label)) => write!(f, "pre-release '{}'", label),
            BumpOperation::PreRelease(None) => write!(f, "pre-release (current label)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(s: &str) -> Version {
        Version::parse(s).unwrap()
    }

    fn bump(input: &str, op: BumpOperation) -> String {
        op.apply(&v(input)).unwrap().to_string()
    }

    fn label(s: &str) -> BumpOperation {
        BumpOperation::PreRelease(Some(s.to_string()))
    }

    #[test]
    fn test_resolve_empty_request_is_none() {
        assert_eq!(BumpRequest::default().resolve(), BumpOperation::None);
    }

    #[test]
    fn test_resolve_single_flags() {
        let major = BumpRequest {
            major: true,
            ..Default::default()
        };
        let minor = BumpRequest {
            minor: true,
            ..Default::default()
        };
        let patch = BumpRequest {
            patch: true,
            ..Default::default()
        };
        assert_eq!(major.resolve(), BumpOperation::Major);
        assert_eq!(minor.resolve(), BumpOperation::Minor);
        assert_eq!(patch.resolve(), BumpOperation::Patch);
    }

    #[test]
    fn test_resolve_major_wins_over_minor() {
        let request = BumpRequest {
            major: true,
            minor: true,
            ..Default::default()
        };
        assert_eq!(request.resolve(), BumpOperation::Major);
    }

    #[test]
    fn test_resolve_final_wins_over_everything() {
        let request = BumpRequest {
            major: true,
            minor: true,
            patch: true,
            pre: Some("rc".to_string()),
            r#final: true,
        };
        assert_eq!(request.resolve(), BumpOperation::Final);
    }

    #[test]
    fn test_resolve_pre_wins_over_numeric_flags() {
        let request = BumpRequest {
            major: true,
            patch: true,
            pre: Some("beta".to_string()),
            ..Default::default()
        };
        assert_eq!(request.resolve(), label("beta"));
    }

    #[test]
    fn test_resolve_empty_pre_keeps_label() {
        let request = BumpRequest {
            pre: Some(String::new()),
            minor: true,
            ..Default::default()
        };
        assert_eq!(request.resolve(), BumpOperation::PreRelease(None));
    }

    #[test]
    fn test_requested_flags_in_precedence_order() {
        let request = BumpRequest {
            patch: true,
            major: true,
            r#final: true,
            ..Default::default()
        };
        assert_eq!(request.requested_flags(), vec!["final", "major", "patch"]);
        assert!(BumpRequest::default().requested_flags().is_empty());
    }

    #[test]
    fn test_request_deserialize_partial() {
        let request: BumpRequest = serde_json::from_str(r#"{"pre": "", "final": true}"#).unwrap();
        assert_eq!(request.pre, Some(String::new()));
        assert!(request.r#final);
        assert!(!request.major);

        let empty: BumpRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(empty, BumpRequest::default());
    }

    #[test]
    fn test_request_deserialize_null_flags() {
        let request: BumpRequest =
            serde_json::from_str(r#"{"patch": null, "major": true, "final": null, "pre": null}"#)
                .unwrap();
        assert!(request.major);
        assert!(!request.patch);
        assert!(!request.r#final);
        assert_eq!(request.pre, None);
        assert_eq!(request.resolve(), BumpOperation::Major);
    }

    #[test]
    fn test_apply_none_is_identity() {
        let input = v("1.2.3-rc.1+build");
        assert_eq!(BumpOperation::None.apply(&input).unwrap(), input);
    }

    #[test]
    fn test_apply_major() {
        assert_eq!(bump("1.2.3", BumpOperation::Major), "2.0.0");
        assert_eq!(bump("1.2.3-rc.1+b", BumpOperation::Major), "2.0.0");
    }

    #[test]
    fn test_apply_minor() {
        assert_eq!(bump("1.2.3", BumpOperation::Minor), "1.3.0");
        assert_eq!(bump("1.2.3+b", BumpOperation::Minor), "1.3.0");
    }

    #[test]
    fn test_apply_patch() {
        assert_eq!(bump("1.2.3", BumpOperation::Patch), "1.2.4");
        assert_eq!(bump("1.2.3+b", BumpOperation::Patch), "1.2.4");
    }

    #[test]
    fn test_apply_patch_finalizes_prerelease() {
        assert_eq!(bump("1.2.3-rc.1", BumpOperation::Patch), "1.2.3");
        assert_eq!(bump("1.2.3-rc.1+b", BumpOperation::Patch), "1.2.3");
    }

    #[test]
    fn test_apply_final() {
        assert_eq!(bump("1.2.3-rc.4+b", BumpOperation::Final), "1.2.3");
        assert_eq!(bump("1.2.3", BumpOperation::Final), "1.2.3");
    }

    #[test]
    fn test_apply_prerelease_from_release() {
        assert_eq!(bump("1.2.3", label("rc")), "1.2.4-rc.1");
        assert_eq!(bump("1.2.3+b", label("alpha.beta")), "1.2.4-alpha.beta.1");
    }

    #[test]
    fn test_apply_prerelease_same_label_increments() {
        assert_eq!(bump("1.2.4-rc.1", label("rc")), "1.2.4-rc.2");
        assert_eq!(bump("1.2.4-rc.9+b", label("rc")), "1.2.4-rc.10");
    }

    #[test]
    fn test_apply_prerelease_keep_label() {
        assert_eq!(bump("1.2.4-rc.2", BumpOperation::PreRelease(None)), "1.2.4-rc.3");
        assert_eq!(bump("1.2.4-rc", BumpOperation::PreRelease(None)), "1.2.4-rc.1");
    }

    #[test]
    fn test_apply_prerelease_switch_label_resets_counter() {
        assert_eq!(bump("1.2.4-rc.2", label("beta")), "1.2.4-beta.1");
        assert_eq!(bump("1.2.4-alpha.7", label("rc")), "1.2.4-rc.1");
    }

    #[test]
    fn test_apply_prerelease_without_label_on_release_fails() {
        let err = BumpOperation::PreRelease(None).apply(&v("1.2.3")).unwrap_err();
        assert!(matches!(
            err,
            SemverResourceError::MissingPreReleaseLabel { ref version } if version == "1.2.3"
        ));
    }

    #[test]
    fn test_apply_prerelease_invalid_label_fails() {
        let err = label("r!c").apply(&v("1.2.3")).unwrap_err();
        assert!(matches!(err, SemverResourceError::InvalidPreReleaseLabel(_)));
    }

    #[test]
    fn test_apply_overflow() {
        let maxed = Version::new(u64::MAX, 0, 0);
        assert!(matches!(
            BumpOperation::Major.apply(&maxed),
            Err(SemverResourceError::Overflow(_))
        ));
        // finalizing a pre-release never increments, so it cannot overflow
        let pre = Version {
            pre: PreRelease::parse("rc.1").unwrap(),
            ..Version::new(0, 0, u64::MAX)
        };
        assert!(BumpOperation::Patch.apply(&pre).is_ok());
    }

    #[test]
    fn test_operation_display() {
        assert_eq!(BumpOperation::Major.to_string(), "major");
        assert_eq!(label("rc").to_string(), "pre-release 'rc'");
    }
}
