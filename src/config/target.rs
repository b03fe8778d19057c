//! Target selection: which interface, what to call the stub, which package

use serde::{Deserialize, Serialize};

use crate::{ImplyError, ImplyResult};
use imply_generator::config::is_identifier;

/// Selectors for the generated stub; every field falls back to a default
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TargetConfig {
    /// Interface to implement (first interface in the file when unset)
    pub interface: Option<String>,

    /// Generated type name (`Impl` + interface name when unset)
    pub struct_name: Option<String>,

    /// Output package (the file's own package when unset)
    pub package: Option<String>,
}

impl TargetConfig {
    pub fn validate(&self) -> ImplyResult<()> {
        let fields = [
            ("interface", &self.interface),
            ("struct_name", &self.struct_name),
            ("package", &self.package),
        ];

        for (field, value) in fields {
            if let Some(value) = value {
                if !is_identifier(value) {
                    return Err(ImplyError::Config(format!(
                        "{field} must be a Go identifier, got {value:?}"
                    )));
                }
            }
        }

        Ok(())
    }
}
