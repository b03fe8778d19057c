//! Configuration types for the emitter

use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};

/// Emission settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmitConfig {
    /// Receiver identifier used in every generated method
    pub receiver: String,

    /// Prefix for the synthesized type name when none is given
    pub struct_prefix: String,

    /// Drop imports not referenced by the interface's own types
    pub prune_imports: bool,
}

impl EmitConfig {
    pub fn validate(&self) -> Result<()> {
        if !is_identifier(&self.receiver) {
            return Err(anyhow!(
                "Receiver must be a Go identifier, got {:?}",
                self.receiver
            ));
        }
        if !is_identifier(&self.struct_prefix) {
            return Err(anyhow!(
                "Struct prefix must be a Go identifier, got {:?}",
                self.struct_prefix
            ));
        }
        Ok(())
    }
}

impl Default for EmitConfig {
    fn default() -> Self {
        Self {
            receiver: "i".to_string(),
            struct_prefix: "Impl".to_string(),
            prune_imports: false,
        }
    }
}

/// Whether `name` is a valid Go identifier
pub fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first == '_' || first.is_alphabetic() => {
            chars.all(|c| c == '_' || c.is_alphanumeric())
        }
        _ => false,
    }
}
