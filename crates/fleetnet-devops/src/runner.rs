//! Devops script process runner
//!
//! Spawns the cloud automation script for one region and collects its
//! output. stdout is returned untouched; stderr is kept for diagnostics.

use crate::catalog::RegionCatalog;
use async_trait::async_trait;
use fleetnet_config::{FleetNetConfig, RegionEntry};
use fleetnet_core::{CommandInvocation, ProcessRunner, RawOutput, RunnerError};
use std::path::PathBuf;
use std::process::Stdio;
use std::time::Duration;
use tokio::process::Command;

/// Runs network commands through the devops script
pub struct DevopsRunner {
    script: PathBuf,
    working_dir: PathBuf,
    timeout: Duration,
    catalog: RegionCatalog,
}

impl DevopsRunner {
    pub fn new(script: impl Into<PathBuf>, working_dir: impl Into<PathBuf>) -> Self {
        Self {
            script: script.into(),
            working_dir: working_dir.into(),
            timeout: Duration::from_secs(fleetnet_config::DEFAULT_TIMEOUT_SECS),
            catalog: RegionCatalog::new(),
        }
    }

    pub fn from_config(config: &FleetNetConfig) -> Self {
        Self::new(config.script_path(), &config.devops_home)
            .with_timeout(config.timeout())
            .with_regions(config.regions.iter().cloned())
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_regions(mut self, regions: impl IntoIterator<Item = RegionEntry>) -> Self {
        for entry in regions {
            self.catalog.add(entry);
        }
        self
    }

    fn resolve(&self, invocation: &CommandInvocation) -> Result<&RegionEntry, RunnerError> {
        let region = invocation.region();
        self.catalog
            .get(&region)
            .ok_or_else(|| RunnerError::RegionNotFound(region.to_string()))
    }

    /// Rendered argv (script first) that `run` would execute
    pub fn command_line(&self, invocation: &CommandInvocation) -> Result<Vec<String>, RunnerError> {
        let entry = self.resolve(invocation)?;
        let mut argv = vec![self.script.display().to_string()];
        argv.extend(build_args(entry, invocation));
        Ok(argv)
    }
}

fn build_args(entry: &RegionEntry, invocation: &CommandInvocation) -> Vec<String> {
    let mut args = vec![
        entry.provider.clone(),
        "--region".to_string(),
        entry.code.clone(),
        invocation.category().to_string(),
        invocation.operation().as_str().to_string(),
    ];
    args.extend(invocation.args().iter().cloned());
    args
}

#[async_trait]
impl ProcessRunner for DevopsRunner {
    async fn run(&self, invocation: &CommandInvocation) -> Result<RawOutput, RunnerError> {
        let entry = self.resolve(invocation)?;
        let args = build_args(entry, invocation);

        let mut cmd = Command::new(&self.script);
        cmd.args(&args);
        cmd.current_dir(&self.working_dir);
        cmd.envs(&entry.env);
        cmd.stdin(Stdio::null());
        cmd.stdout(Stdio::piped());
        cmd.stderr(Stdio::piped());
        cmd.kill_on_drop(true);

        tracing::debug!("Running: {} {}", self.script.display(), args.join(" "));

        let child = cmd.spawn().map_err(|source| RunnerError::Spawn {
            program: self.script.display().to_string(),
            source,
        })?;

        // Dropping the wait future on timeout kills the child
        let output = tokio::time::timeout(self.timeout, child.wait_with_output())
            .await
            .map_err(|_| RunnerError::Timeout(self.timeout))??;

        let stderr = String::from_utf8_lossy(&output.stderr).to_string();

        if !output.status.success() {
            tracing::warn!(
                region = %invocation.region(),
                operation = %invocation.operation(),
                code = ?output.status.code(),
                "devops script exited with failure"
            );
            return Err(RunnerError::NonZeroExit {
                code: output.status.code(),
                stderr,
            });
        }

        Ok(RawOutput::new(output.stdout, stderr))
    }
}
