//! FleetNet Core
//!
//! Lifecycle dispatcher for region-scoped cloud networking resources
//! (VPCs, subnets, peering). Each lifecycle operation is translated into a
//! single invocation of an external automation process, and its output is
//! handed back as structured data.
//!
//! # Operations
//!
//! - **bootstrap**: provision or attach networking for a region
//! - **query**: inspect the current network state of a region
//! - **cleanup**: tear down previously bootstrapped networking
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────┐
//! │          fleetnet CLI / orchestration            │
//! └─────────────────┬───────────────────────────────┘
//!                   │ bootstrap / query / cleanup
//! ┌─────────────────▼───────────────────────────────┐
//! │                fleetnet-core                     │
//! │  ┌──────────────────────────────────────────┐   │
//! │  │   NetworkManager (argument assembly,     │   │
//! │  │   result / error interpretation)         │   │
//! │  └──────────────────┬───────────────────────┘   │
//! │  ┌──────────────────▼───────────────────────┐   │
//! │  │   trait ProcessRunner { run(...) }       │   │
//! │  └──────────────────────────────────────────┘   │
//! └─────────────────────┬───────────────────────────┘
//!                       │
//!               ┌───────▼────────┐
//!               │ fleetnet-devops │
//!               │ (spawns script) │
//!               └────────────────┘
//! ```
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use fleetnet_core::{NetworkManager, RegionRef};
//!
//! let manager = NetworkManager::new(Arc::new(runner));
//! let region: RegionRef = "8d5c6a0e-6f63-4b43-9a4e-0f4b7e1d2c3a".parse()?;
//!
//! let state = manager.query(region).await?;
//! println!("{}", state.value());
//! ```

pub mod error;
pub mod invocation;
pub mod manager;
pub mod region;
pub mod result;
pub mod runner;

// Re-exports
pub use error::{CommandError, CommandErrorKind, MalformedOutput, Result};
pub use invocation::{BootstrapParams, CommandInvocation, NETWORK_COMMAND, Operation};
pub use manager::NetworkManager;
pub use region::RegionRef;
pub use result::CommandResult;
pub use runner::{ProcessRunner, RawOutput, RunnerError};
