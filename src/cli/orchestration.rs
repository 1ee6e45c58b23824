//! Fetch-step workflow
//!
//! Kept apart from `main.rs` so the whole step can be driven with
//! in-memory readers and writers. The order of the stages is part of the
//! contract: nothing reaches the output writer unless every earlier stage
//! succeeded, and the `number` artifact is only written once the bump is
//! known to be valid.

use std::fs;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::domain::{BumpOperation, Version};
use crate::error::{Result, SemverResourceError};
use crate::models::{InRequest, InResponse};
use crate::storage::BucketClient;
use crate::ui;
use crate::warning::StepWarning;

/// Name of the artifact staged in the destination directory
pub const ARTIFACT_FILE_NAME: &str = "number";

/// Arguments for the fetch workflow
///
/// Mirrors the CLI Args but without depending on clap.
#[derive(Debug, Clone, PartialEq)]
pub struct InStepArgs {
    /// Directory the `number` artifact is written to; created if absent
    pub destination: PathBuf,
}

/// Result of a successful fetch
#[derive(Debug, Clone, PartialEq)]
pub struct StepOutcome {
    /// Version as supplied by the caller
    pub input: Version,

    /// Version written to the artifact
    pub bumped: Version,

    /// The operation the request resolved to
    pub operation: BumpOperation,

    /// Path of the staged artifact
    pub artifact: PathBuf,

    /// The envelope written to the output
    pub response: InResponse,

    /// Non-fatal issues noticed along the way, already shown on stderr
    pub warnings: Vec<StepWarning>,
}

impl StepOutcome {
    pub fn was_bumped(&self) -> bool {
        self.bumped != self.input
    }
}

/// Run one fetch step.
///
/// 1. Create the destination directory
/// 2. Decode the request from `input`
/// 3. Construct the bucket client (region resolution)
/// 4. Parse and bump the version
/// 5. Stage the bumped version to `<destination>/number`
/// 6. Write the response, echoing the *unbumped* version, to `output`
pub fn run_in_step<R: Read, W: Write>(
    args: &InStepArgs,
    config: &Config,
    input: R,
    output: W,
) -> Result<StepOutcome> {
    fs::create_dir_all(&args.destination)
        .map_err(|e| SemverResourceError::destination(&args.destination, e))?;

    let request: InRequest = serde_json::from_reader(input)?;
    let mut warnings = Vec::new();

    let client = BucketClient::new(&request.source, &config.storage)?;
    tracing::debug!(
        bucket = %client.name(),
        endpoint = %client.region().endpoint(),
        "constructed bucket client"
    );
    if !request.source.endpoint.is_empty() && !request.source.region_name.is_empty() {
        raise(
            &mut warnings,
            StepWarning::EndpointOverridesRegion {
                region: request.source.region_name.clone(),
                endpoint: request.source.endpoint.clone(),
            },
        );
    }

    let input_version = Version::parse(&request.version.number)?;

    let operation = request.params.resolve();
    if let Some(warning) = StepWarning::ambiguous(request.params.requested_flags(), &operation) {
        raise(&mut warnings, warning);
    }

    let bumped = operation.apply(&input_version)?;
    if bumped != input_version {
        tracing::info!(from = %input_version, to = %bumped, %operation, "bumped locally");
    }

    let artifact = args.destination.join(ARTIFACT_FILE_NAME);
    stage_number(&artifact, &bumped)?;

    let response = InResponse::echo(&request.version);
    write_response(output, &response)?;

    Ok(StepOutcome {
        input: input_version,
        bumped,
        operation,
        artifact,
        response,
        warnings,
    })
}

/// Show a warning right away, so it is seen even if a later stage fails.
fn raise(warnings: &mut Vec<StepWarning>, warning: StepWarning) {
    tracing::debug!(%warning, "step warning");
    ui::display_warning(&warning);
    warnings.push(warning);
}

/// Write the canonical rendering of `version` to `path`, with no newline.
pub fn stage_number(path: &Path, version: &Version) -> Result<()> {
    fs::write(path, version.to_string()).map_err(|e| SemverResourceError::destination(path, e))
}

/// Encode `response` as a single JSON line and flush it.
pub fn write_response<W: Write>(mut output: W, response: &InResponse) -> Result<()> {
    serde_json::to_writer(&mut output, response)
        .map_err(|e| SemverResourceError::ResponseIo(e.into()))?;
    output
        .write_all(b"\n")
        .and_then(|_| output.flush())
        .map_err(SemverResourceError::ResponseIo)
}
