//! Go stub emission

use std::collections::BTreeSet;

use tracing::{debug, warn};

use crate::config::EmitConfig;
use crate::render::{render_params, render_results};
use crate::types::{ImportSet, InterfaceDecl, MethodSig};
use crate::zero::zero_value;

/// Everything needed to emit one stub file
#[derive(Debug, Clone)]
pub struct StubUnit {
    /// Package written in the header
    pub package: String,

    /// Requested name for the generated type
    pub struct_name: Option<String>,

    /// Interface to implement
    pub interface: InterfaceDecl,

    /// Imports collected from the declaring file
    pub imports: ImportSet,
}

pub struct StubEmitter {
    config: EmitConfig,
}

impl Default for StubEmitter {
    fn default() -> Self {
        Self::new(EmitConfig::default())
    }
}

impl StubEmitter {
    pub fn new(config: EmitConfig) -> Self {
        Self { config }
    }

    /// Name of the generated type, synthesized from the interface when absent
    pub fn struct_name(&self, unit: &StubUnit) -> String {
        match unit.struct_name.as_deref() {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => format!("{}{}", self.config.struct_prefix, unit.interface.name),
        }
    }

    /// Generate the complete stub source
    pub fn emit(&self, unit: &StubUnit) -> String {
        let struct_name = self.struct_name(unit);
        debug!(
            "Emitting {} for interface {} ({} methods)",
            struct_name,
            unit.interface.name,
            unit.interface.methods.len()
        );

        let receiver = self.receiver(&unit.interface);
        let mut content = String::new();

        content.push_str(&format!("package {}\n\n", unit.package));
        content.push_str(&self.emit_imports(unit));
        content.push_str(&format!("type {struct_name} struct{{}}\n\n"));

        for method in &unit.interface.methods {
            content.push_str(&self.emit_method(&receiver, &struct_name, method));
            content.push('\n');
        }

        content
    }

    /// Receiver name for the unit's methods
    ///
    /// The configured name gets a numeric suffix when a parameter would
    /// shadow it.
    pub fn receiver(&self, interface: &InterfaceDecl) -> String {
        let base = &self.config.receiver;
        let taken: BTreeSet<&str> = interface
            .methods
            .iter()
            .flat_map(|method| method.params.iter())
            .filter_map(|param| param.name.as_deref())
            .collect();

        if !taken.contains(base.as_str()) {
            return base.clone();
        }

        let receiver = (1..)
            .map(|n| format!("{base}{n}"))
            .find(|candidate| !taken.contains(candidate.as_str()))
            .unwrap_or_else(|| base.clone());
        warn!(
            "Receiver `{}` collides with a parameter of {}, using `{}`",
            base, interface.name, receiver
        );
        receiver
    }

    fn emit_imports(&self, unit: &StubUnit) -> String {
        let mut imports = unit.imports.clone();
        if self.config.prune_imports {
            let used = unit.interface.referenced_packages();
            imports.retain(|entry| used.contains(entry.alias.as_str()));
        }

        if imports.is_empty() {
            return String::new();
        }

        let mut content = String::from("import (\n");
        for entry in imports.iter() {
            if entry.is_implicit() {
                content.push_str(&format!("\t\"{}\"\n", entry.path));
            } else {
                content.push_str(&format!("\t{} \"{}\"\n", entry.alias, entry.path));
            }
        }
        content.push_str(")\n\n");
        content
    }

    fn emit_method(&self, receiver: &str, struct_name: &str, method: &MethodSig) -> String {
        debug!("Emitting method {}", method.name);

        let params = render_params(&method.params);
        let results = render_results(&method.results);

        let mut content = format!(
            "func ({} *{}) {}({})",
            receiver, struct_name, method.name, params
        );
        if !results.is_empty() {
            content.push(' ');
            content.push_str(&results);
        }
        content.push_str(" {\n");

        if !method.results.is_empty() {
            let zeros: Vec<String> = method.results.iter().map(zero_value).collect();
            content.push_str(&format!("\treturn {}\n", zeros.join(", ")));
        }

        content.push_str("}\n");
        content
    }
}
