//! Devops script runner for FleetNet
//!
//! This crate implements the [`ProcessRunner`](fleetnet_core::ProcessRunner)
//! trait by shelling out to the platform's cloud automation script:
//!
//! ```text
//! <devops_home>/<script> <provider> --region <code> network <operation> <args...>
//! ```
//!
//! # Requirements
//!
//! - The automation script must be installed under `devops_home`
//! - Cloud credentials are the script's own concern
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use fleetnet_core::NetworkManager;
//! use fleetnet_devops::DevopsRunner;
//!
//! let config = fleetnet_config::load_config(None)?;
//! let manager = NetworkManager::new(Arc::new(DevopsRunner::from_config(&config)));
//! ```

pub mod catalog;
pub mod runner;

pub use catalog::RegionCatalog;
pub use runner::DevopsRunner;
