//! Structured command results

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// Parsed output of a successful network command.
///
/// The schema belongs to the automation tool. The value is handed back
/// exactly as parsed; typed views are up to the caller via [`parse`](Self::parse).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CommandResult(serde_json::Value);

impl CommandResult {
    pub fn new(value: serde_json::Value) -> Self {
        Self(value)
    }

    pub fn value(&self) -> &serde_json::Value {
        &self.0
    }

    pub fn into_value(self) -> serde_json::Value {
        self.0
    }

    /// Top-level field lookup
    pub fn get(&self, key: &str) -> Option<&serde_json::Value> {
        self.0.get(key)
    }

    /// Deserialize the output into a caller-owned type
    pub fn parse<T: DeserializeOwned>(&self) -> serde_json::Result<T> {
        T::deserialize(&self.0)
    }
}

impl From<serde_json::Value> for CommandResult {
    fn from(value: serde_json::Value) -> Self {
        Self(value)
    }
}

impl From<CommandResult> for serde_json::Value {
    fn from(result: CommandResult) -> Self {
        result.0
    }
}
