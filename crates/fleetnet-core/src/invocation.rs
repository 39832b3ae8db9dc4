//! Command invocation assembly

use crate::region::RegionRef;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Command category passed to the automation tool for every network operation
pub const NETWORK_COMMAND: &str = "network";

/// Flag token preceding the host VPC id in bootstrap arguments
pub const HOST_VPC_ID_FLAG: &str = "--host_vpc_id";

/// Network lifecycle operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    /// Provision or attach networking resources
    Bootstrap,
    /// Inspect current networking state (read-only)
    Query,
    /// Tear down networking resources
    Cleanup,
}

impl Operation {
    /// Name understood by the automation tool
    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::Bootstrap => "bootstrap",
            Operation::Query => "query",
            Operation::Cleanup => "cleanup",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Caller-supplied parameters for bootstrap
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BootstrapParams {
    host_vpc_id: Option<String>,
}

impl BootstrapParams {
    /// Build params from a raw host VPC id.
    ///
    /// The value is trimmed; empty and whitespace-only values are treated as
    /// absent, which lets the tool allocate a new VPC.
    pub fn new(host_vpc_id: Option<&str>) -> Self {
        let host_vpc_id = host_vpc_id
            .map(str::trim)
            .filter(|id| !id.is_empty())
            .map(str::to_string);

        Self { host_vpc_id }
    }

    pub fn host_vpc_id(&self) -> Option<&str> {
        self.host_vpc_id.as_deref()
    }

    /// Positional arguments for the bootstrap command
    pub fn to_args(&self) -> Vec<String> {
        let mut args = Vec::new();
        if let Some(ref id) = self.host_vpc_id {
            args.push(HOST_VPC_ID_FLAG.to_string());
            args.push(id.clone());
        }
        args
    }
}

/// A single unit of work for the process runner.
///
/// Only the three lifecycle constructors exist, so the category is always
/// [`NETWORK_COMMAND`] and the arguments always have the operation's shape.
/// Argument order is part of the contract with the automation tool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandInvocation {
    region: RegionRef,
    operation: Operation,
    args: Vec<String>,
}

impl CommandInvocation {
    pub fn bootstrap(region: RegionRef, params: &BootstrapParams) -> Self {
        Self {
            region,
            operation: Operation::Bootstrap,
            args: params.to_args(),
        }
    }

    pub fn query(region: RegionRef) -> Self {
        Self {
            region,
            operation: Operation::Query,
            args: Vec::new(),
        }
    }

    pub fn cleanup(region: RegionRef) -> Self {
        Self {
            region,
            operation: Operation::Cleanup,
            args: Vec::new(),
        }
    }

    pub fn category(&self) -> &'static str {
        NETWORK_COMMAND
    }

    pub fn region(&self) -> RegionRef {
        self.region
    }

    pub fn operation(&self) -> Operation {
        self.operation
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }
}

impl fmt::Display for CommandInvocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} [{}]", self.category(), self.operation, self.region)?;
        if !self.args.is_empty() {
            write!(f, " {}", self.args.join(" "))?;
        }
        Ok(())
    }
}
