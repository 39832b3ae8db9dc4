//! Network lifecycle dispatcher

use crate::error::{CommandError, CommandErrorKind, MalformedOutput, Result};
use crate::invocation::{BootstrapParams, CommandInvocation};
use crate::region::RegionRef;
use crate::result::CommandResult;
use crate::runner::{ProcessRunner, RawOutput};
use std::sync::Arc;

/// Dispatches network lifecycle operations to a [`ProcessRunner`].
///
/// Holds no mutable state. Clones share the same runner, and calls for
/// distinct regions never coordinate with each other.
#[derive(Clone)]
pub struct NetworkManager {
    runner: Arc<dyn ProcessRunner>,
}

impl NetworkManager {
    pub fn new(runner: Arc<dyn ProcessRunner>) -> Self {
        Self { runner }
    }

    /// Provision or attach networking for a region.
    ///
    /// A blank `host_vpc_id` lets the automation tool allocate a new VPC.
    pub async fn bootstrap(
        &self,
        region: RegionRef,
        host_vpc_id: Option<&str>,
    ) -> Result<CommandResult> {
        let params = BootstrapParams::new(host_vpc_id);

        self.execute(CommandInvocation::bootstrap(region, &params))
            .await
    }

    /// Inspect the current network state of a region
    pub async fn query(&self, region: RegionRef) -> Result<CommandResult> {
        self.execute(CommandInvocation::query(region)).await
    }

    /// Tear down networking for a region
    pub async fn cleanup(&self, region: RegionRef) -> Result<CommandResult> {
        self.execute(CommandInvocation::cleanup(region)).await
    }

    /// Run an assembled invocation once and interpret its output.
    ///
    /// Invocations can only be built through the lifecycle constructors, so
    /// every call targets the `network` category.
    pub async fn execute(&self, invocation: CommandInvocation) -> Result<CommandResult> {
        let operation = invocation.operation();
        let region = invocation.region();

        tracing::info!(%region, %operation, args = ?invocation.args(), "Running network command");

        let output = match self.runner.run(&invocation).await {
            Ok(output) => output,
            Err(e) => {
                tracing::warn!(%region, %operation, error = %e, "Network command failed");
                return Err(CommandError::new(operation, region, e.into()));
            }
        };

        if !output.stderr.is_empty() {
            tracing::debug!(%region, %operation, stderr = %output.stderr.trim_end());
        }

        match parse_output(&output) {
            Ok(value) => {
                tracing::info!(%region, %operation, "Network command completed");
                Ok(CommandResult::new(value))
            }
            Err(e) => {
                tracing::warn!(%region, %operation, error = %e, "Network command returned malformed output");
                Err(CommandError::new(
                    operation,
                    region,
                    CommandErrorKind::MalformedOutput(e),
                ))
            }
        }
    }
}

/// Parse the structured-data channel. Anything other than a single JSON
/// document on stdout is malformed.
fn parse_output(output: &RawOutput) -> std::result::Result<serde_json::Value, MalformedOutput> {
    if output.stdout.iter().all(u8::is_ascii_whitespace) {
        return Err(MalformedOutput::Empty);
    }
    Ok(serde_json::from_slice(&output.stdout)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::invocation::{NETWORK_COMMAND, Operation};
    use crate::runner::RunnerError;
    use async_trait::async_trait;
    use serde_json::json;
    use std::collections::HashMap;
    use std::sync::Mutex;
    use std::time::Duration;
    use tokio_test::{assert_err, assert_ok};
    use uuid::Uuid;

    /// Canned runner response
    enum Reply {
        Stdout(&'static str),
        ExitCode(i32),
        Timeout,
        RegionNotFound,
    }

    /// Records every invocation and answers per region
    struct RecordingRunner {
        calls: Mutex<Vec<CommandInvocation>>,
        replies: HashMap<RegionRef, Reply>,
        default_reply: &'static str,
        delay: Option<Duration>,
    }

    impl RecordingRunner {
        fn new(default_reply: &'static str) -> Self {
            Self {
                calls: Mutex::new(Vec::new()),
                replies: HashMap::new(),
                default_reply,
                delay: None,
            }
        }

        fn reply(mut self, region: RegionRef, reply: Reply) -> Self {
            self.replies.insert(region, reply);
            self
        }

        fn calls(&self) -> Vec<CommandInvocation> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl ProcessRunner for RecordingRunner {
        async fn run(
            &self,
            invocation: &CommandInvocation,
        ) -> std::result::Result<RawOutput, RunnerError> {
            self.calls.lock().unwrap().push(invocation.clone());

            if let Some(delay) = self.delay {
                tokio::time::sleep(delay).await;
            }

            match self.replies.get(&invocation.region()) {
                Some(Reply::Stdout(s)) => Ok(RawOutput::new(*s, "progress: done\n")),
                Some(Reply::ExitCode(code)) => Err(RunnerError::NonZeroExit {
                    code: Some(*code),
                    stderr: "provider error".to_string(),
                }),
                Some(Reply::Timeout) => Err(RunnerError::Timeout(Duration::from_secs(5))),
                Some(Reply::RegionNotFound) => {
                    Err(RunnerError::RegionNotFound(invocation.region().to_string()))
                }
                None => Ok(RawOutput::stdout(self.default_reply)),
            }
        }
    }

    fn region() -> RegionRef {
        RegionRef::new(Uuid::new_v4())
    }

    fn manager(runner: &Arc<RecordingRunner>) -> NetworkManager {
        NetworkManager::new(runner.clone())
    }

    #[tokio::test]
    async fn test_bootstrap_with_host_vpc() {
        let runner = Arc::new(RecordingRunner::new(r#"{"vpc_id": "vpc-123"}"#));
        let region_a = region();

        let result = assert_ok!(manager(&runner).bootstrap(region_a, Some("vpc-123")).await);
        assert_eq!(result.value(), &json!({"vpc_id": "vpc-123"}));

        let calls = runner.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].category(), "network");
        assert_eq!(calls[0].region(), region_a);
        assert_eq!(calls[0].operation(), Operation::Bootstrap);
        assert_eq!(calls[0].args(), ["--host_vpc_id", "vpc-123"]);
    }

    #[tokio::test]
    async fn test_bootstrap_blank_host_vpc_is_absent() {
        let runner = Arc::new(RecordingRunner::new("{}"));
        let manager = manager(&runner);
        let r = region();

        for raw in [None, Some(""), Some("   ")] {
            assert_ok!(manager.bootstrap(r, raw).await);
        }

        let calls = runner.calls();
        assert_eq!(calls.len(), 3);
        assert!(calls.iter().all(|c| c.args().is_empty()));
        assert!(calls.iter().all(|c| c.operation() == Operation::Bootstrap));
    }

    #[tokio::test]
    async fn test_bootstrap_passes_unusual_vpc_ids_through() {
        let runner = Arc::new(RecordingRunner::new("{}"));
        let manager = manager(&runner);
        let r = region();

        assert_ok!(manager.bootstrap(r, Some("vpc 123")).await);
        assert_ok!(manager.bootstrap(r, Some(" -vpc-1 ")).await);

        let calls = runner.calls();
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[0].args(), ["--host_vpc_id", "vpc 123"]);
        assert_eq!(calls[1].args(), ["--host_vpc_id", "-vpc-1"]);
    }

    #[tokio::test]
    async fn test_execute_always_uses_network_category() {
        let runner = Arc::new(RecordingRunner::new("{}"));
        let manager = manager(&runner);
        let r = region();

        assert_ok!(manager.execute(CommandInvocation::query(r)).await);
        assert_ok!(manager.cleanup(r).await);
        assert_ok!(manager.bootstrap(r, None).await);

        let calls = runner.calls();
        assert_eq!(calls.len(), 3);
        assert!(calls.iter().all(|c| c.category() == NETWORK_COMMAND));
    }

    #[tokio::test]
    async fn test_cleanup_invocation() {
        let runner = Arc::new(RecordingRunner::new(r#"{"success": true}"#));
        let region_a = region();

        assert_ok!(manager(&runner).cleanup(region_a).await);

        assert_eq!(runner.calls(), vec![CommandInvocation::cleanup(region_a)]);
        let call = &runner.calls()[0];
        assert_eq!(call.category(), "network");
        assert_eq!(call.operation(), Operation::Cleanup);
        assert!(call.args().is_empty());
    }

    #[tokio::test]
    async fn test_query_passes_output_through() {
        let raw = r#"{"us-west-2": {"vpc": "vpc-1", "subnets": {"a": "subnet-1"}}, "n": [1, 2.5, null]}"#;
        let runner = Arc::new(RecordingRunner::new(raw));

        let result = assert_ok!(manager(&runner).query(region()).await);
        let expected: serde_json::Value = serde_json::from_str(raw).unwrap();
        assert_eq!(result.into_value(), expected);
        assert!(runner.calls()[0].args().is_empty());
    }

    #[tokio::test]
    async fn test_non_zero_exit_is_process_failure() {
        let r = region();
        let runner = Arc::new(RecordingRunner::new("{}").reply(r, Reply::ExitCode(1)));
        let manager = manager(&runner);

        for err in [
            assert_err!(manager.bootstrap(r, Some("vpc-1")).await),
            assert_err!(manager.query(r).await),
            assert_err!(manager.cleanup(r).await),
        ] {
            assert!(err.is_process_failure());
            assert_eq!(err.region, r);
            assert!(err.to_string().contains("provider error"));
        }
    }

    #[tokio::test]
    async fn test_timeout_is_process_failure() {
        let r = region();
        let runner = Arc::new(RecordingRunner::new("{}").reply(r, Reply::Timeout));

        let err = assert_err!(manager(&runner).query(r).await);
        assert!(err.is_process_failure());
        assert!(matches!(
            err.kind,
            CommandErrorKind::ExternalProcessFailure(RunnerError::Timeout(_))
        ));
    }

    #[tokio::test]
    async fn test_unresolvable_region() {
        let r = region();
        let runner = Arc::new(RecordingRunner::new("{}").reply(r, Reply::RegionNotFound));

        let err = assert_err!(manager(&runner).query(r).await);
        assert!(err.is_invalid_region());
        assert_eq!(err.operation, Operation::Query);
    }

    #[tokio::test]
    async fn test_malformed_output_is_distinct() {
        let garbled = region();
        let empty = region();
        let mixed = region();
        let runner = Arc::new(
            RecordingRunner::new("{}")
                .reply(garbled, Reply::Stdout("Creating VPC... done"))
                .reply(empty, Reply::Stdout("  \n"))
                .reply(mixed, Reply::Stdout("INFO starting\n{\"vpc\": \"vpc-1\"}")),
        );
        let manager = manager(&runner);

        for r in [garbled, empty, mixed] {
            let err = assert_err!(manager.query(r).await);
            assert!(err.is_malformed_output());
            assert!(!err.is_process_failure());
        }

        let err = assert_err!(manager.cleanup(empty).await);
        assert!(matches!(
            err.kind,
            CommandErrorKind::MalformedOutput(MalformedOutput::Empty)
        ));
    }

    #[tokio::test]
    async fn test_failure_does_not_poison_manager() {
        let bad = region();
        let good = region();
        let runner = Arc::new(RecordingRunner::new(r#"{"ok": 1}"#).reply(bad, Reply::ExitCode(3)));
        let manager = manager(&runner);

        assert_err!(manager.cleanup(bad).await);
        let result = assert_ok!(manager.query(good).await);
        assert_eq!(result.get("ok"), Some(&json!(1)));
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn test_concurrent_queries_are_independent() {
        let region_a = region();
        let region_b = region();
        let mut runner = RecordingRunner::new("{}")
            .reply(region_a, Reply::Stdout(r#"{"region": "a"}"#))
            .reply(region_b, Reply::Stdout(r#"{"region": "b"}"#));
        runner.delay = Some(Duration::from_millis(200));
        let runner = Arc::new(runner);
        let manager = manager(&runner);

        let started = std::time::Instant::now();
        let (a, b) = tokio::join!(manager.query(region_a), manager.query(region_b));
        let elapsed = started.elapsed();

        assert_eq!(assert_ok!(a).value(), &json!({"region": "a"}));
        assert_eq!(assert_ok!(b).value(), &json!({"region": "b"}));
        assert!(elapsed < Duration::from_millis(390), "queries ran serially: {:?}", elapsed);
    }
}
