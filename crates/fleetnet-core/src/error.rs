//! Network command error types

use crate::invocation::Operation;
use crate::region::RegionRef;
use crate::runner::RunnerError;
use thiserror::Error;

/// Failure of a single network operation for one region
#[derive(Error, Debug)]
#[error("network {operation} failed for region {region}: {kind}")]
pub struct CommandError {
    pub operation: Operation,
    pub region: RegionRef,
    #[source]
    pub kind: CommandErrorKind,
}

/// What went wrong
#[derive(Error, Debug)]
pub enum CommandErrorKind {
    #[error("Invalid region: {0}")]
    InvalidRegion(String),

    /// Caller-supplied parameter failed validation. Blank host VPC ids are
    /// treated as absent, never as invalid.
    #[error("Invalid parameter {name}: {reason}")]
    InvalidParameter { name: &'static str, reason: String },

    #[error("External process failure: {0}")]
    ExternalProcessFailure(#[source] RunnerError),

    #[error("Malformed output: {0}")]
    MalformedOutput(#[source] MalformedOutput),
}

/// Why exit-0 output could not be used as structured data
#[derive(Error, Debug)]
pub enum MalformedOutput {
    #[error("no structured data on stdout")]
    Empty,

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CommandError {
    pub fn new(operation: Operation, region: RegionRef, kind: CommandErrorKind) -> Self {
        Self {
            operation,
            region,
            kind,
        }
    }

    pub fn is_invalid_region(&self) -> bool {
        matches!(self.kind, CommandErrorKind::InvalidRegion(_))
    }

    pub fn is_process_failure(&self) -> bool {
        matches!(self.kind, CommandErrorKind::ExternalProcessFailure(_))
    }

    pub fn is_malformed_output(&self) -> bool {
        matches!(self.kind, CommandErrorKind::MalformedOutput(_))
    }
}

impl From<RunnerError> for CommandErrorKind {
    fn from(err: RunnerError) -> Self {
        match err {
            RunnerError::RegionNotFound(region) => CommandErrorKind::InvalidRegion(region),
            other => CommandErrorKind::ExternalProcessFailure(other),
        }
    }
}

pub type Result<T> = std::result::Result<T, CommandError>;
