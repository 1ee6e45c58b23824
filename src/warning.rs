use std::fmt;

use crate::domain::BumpOperation;

/// Warnings raised while handling a request.
/// These are non-fatal issues that should be reported to the user.
#[derive(Debug, Clone, PartialEq)]
pub enum StepWarning {
    /// More than one bump flag was set; precedence picked one
    AmbiguousBumpRequest {
        flags: Vec<&'static str>,
        resolved: BumpOperation,
    },
    /// An explicit endpoint replaced the named region
    EndpointOverridesRegion { region: String, endpoint: String },
}

impl StepWarning {
    /// The ambiguity warning for `flags`, if more than one is set
    pub fn ambiguous(flags: Vec<&'static str>, resolved: &BumpOperation) -> Option<Self> {
        if flags.len() > 1 {
            Some(StepWarning::AmbiguousBumpRequest {
                flags,
                resolved: resolved.clone(),
            })
        } else {
            None
        }
    }
}

impl fmt::Display for StepWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StepWarning::AmbiguousBumpRequest { flags, resolved } => {
                write!(
                    f,
                    "Multiple bump params set ({}); applying {}",
                    flags.join(", "),
                    resolved
                )
            }
            StepWarning::EndpointOverridesRegion { region, endpoint } => {
                write!(f, "Endpoint '{}' overrides region '{}'", endpoint, region)
            }
        }
    }
}
