//! imply library
//!
//! Reads a Go source file, picks an interface declaration out of it and generates
//! a concrete type whose methods return zero values. The pipeline is
//! parse ([`ast`]), resolve ([`resolver`]), then emit ([`imply_generator`]).

pub mod ast;
pub mod cli;
pub mod config;
pub mod resolver;

pub use ast::{Declaration, GoParser, ParsedFile};
pub use config::{Config, EmitConfig, TargetConfig};
pub use imply_generator::{
    ImportEntry, ImportSet, InterfaceDecl, MethodSig, Param, StubEmitter, StubUnit, TypeExpr,
};
pub use resolver::{resolve, Resolution};

use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Main application context that runs the generation pipeline
pub struct Imply {
    config: Config,
    emitter: StubEmitter,
}

impl Imply {
    /// Create a new instance, validating the configuration first
    pub fn new(config: Config) -> ImplyResult<Self> {
        config.validate()?;
        let emitter = StubEmitter::new(config.emit.clone());
        Ok(Self { config, emitter })
    }

    /// Read `path` and generate the stub source for it
    pub fn generate_file(&self, path: &Path) -> ImplyResult<String> {
        debug!("Reading {:?}", path);
        let source = std::fs::read_to_string(path).map_err(|source| ImplyError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        self.generate_source(&source, path)
    }

    /// Generate the stub source for already loaded Go source text
    pub fn generate_source(&self, source: &str, path: &Path) -> ImplyResult<String> {
        let file = GoParser::new()?.parse(source, path)?;
        let target = &self.config.target;

        let Resolution { interface, imports } = resolve(&file, target.interface.as_deref())?;
        info!(
            "Resolved interface {} with {} methods and {} imports",
            interface.name,
            interface.methods.len(),
            imports.len()
        );

        let unit = StubUnit {
            package: target
                .package
                .clone()
                .unwrap_or_else(|| file.package_name().to_string()),
            struct_name: target.struct_name.clone(),
            interface,
            imports,
        };

        Ok(self.emitter.emit(&unit))
    }
}

/// Application error types
#[derive(thiserror::Error, Debug)]
pub enum ImplyError {
    #[error("Usage error: {0}")]
    Usage(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Error parsing file {}:{line}:{column}: {message}", .path.display())]
    Parse {
        path: PathBuf,
        line: usize,
        column: usize,
        message: String,
    },

    #[error("Interface not found{}", describe_selector(.selector))]
    InterfaceNotFound { selector: Option<String> },

    #[error("IO error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_yaml::Error),

    #[error("Failed to load Go grammar: {0}")]
    Language(#[from] tree_sitter::LanguageError),
}

fn describe_selector(selector: &Option<String>) -> String {
    match selector {
        Some(name) => format!(": {name}"),
        None => String::new(),
    }
}

/// Result type for the main application
pub type ImplyResult<T> = Result<T, ImplyError>;
