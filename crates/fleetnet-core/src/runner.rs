//! Process runner contract

use crate::invocation::CommandInvocation;
use async_trait::async_trait;
use std::time::Duration;
use thiserror::Error;

/// Executes a network command for a region.
///
/// Implementations own executable resolution, environment, credentials and
/// deadlines. The dispatcher only sees the invocation going in and the raw
/// output coming back.
#[async_trait]
pub trait ProcessRunner: Send + Sync {
    /// Run the invocation once and return what the process produced
    async fn run(&self, invocation: &CommandInvocation) -> Result<RawOutput, RunnerError>;
}

/// Raw output of a successful (exit 0) invocation.
///
/// `stdout` is the structured-data channel; `stderr` is diagnostics only.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawOutput {
    pub stdout: Vec<u8>,
    pub stderr: String,
}

impl RawOutput {
    pub fn new(stdout: impl Into<Vec<u8>>, stderr: impl Into<String>) -> Self {
        Self {
            stdout: stdout.into(),
            stderr: stderr.into(),
        }
    }

    /// Output carrying only structured data
    pub fn stdout(stdout: impl Into<Vec<u8>>) -> Self {
        Self::new(stdout, String::new())
    }
}

/// Process-level failures reported by a runner
#[derive(Error, Debug)]
pub enum RunnerError {
    #[error("Region not found: {0}")]
    RegionNotFound(String),

    #[error("Failed to spawn {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Process exited with {}: {stderr}", exit_label(.code))]
    NonZeroExit { code: Option<i32>, stderr: String },

    #[error("Process timed out after {0:?}")]
    Timeout(Duration),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

fn exit_label(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("status {}", code),
        None => "signal".to_string(),
    }
}
