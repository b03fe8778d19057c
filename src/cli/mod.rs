//! CLI command implementation

use anyhow::{Context, Result};
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::Imply;

/// Main CLI application
pub struct CliApp;

impl CliApp {
    /// Create the CLI application
    pub fn app() -> Command {
        Command::new("imply")
            .version(env!("CARGO_PKG_VERSION"))
            .about("Generate a stub implementation of a Go interface")
            .arg(
                Arg::new("source")
                    .help("Go source file declaring the interface")
                    .value_name("SOURCE_FILE")
                    .value_parser(value_parser!(PathBuf))
                    .required(true),
            )
            .arg(
                Arg::new("interface")
                    .help("Interface to implement (default: first interface in the file)")
                    .value_name("INTERFACE_NAME"),
            )
            .arg(
                Arg::new("struct")
                    .help("Name of the generated type (default: Impl + interface name)")
                    .value_name("TYPE_NAME"),
            )
            .arg(
                Arg::new("package")
                    .help("Package of the generated file (default: the source file's package)")
                    .value_name("PACKAGE_NAME"),
            )
            .arg(
                Arg::new("config")
                    .short('c')
                    .long("config")
                    .help("Configuration file path")
                    .value_name("FILE")
                    .value_parser(value_parser!(PathBuf)),
            )
            .arg(
                Arg::new("output")
                    .short('o')
                    .long("output")
                    .help("Write the generated code to a file instead of stdout")
                    .value_name("FILE")
                    .value_parser(value_parser!(PathBuf)),
            )
            .arg(
                Arg::new("receiver")
                    .short('r')
                    .long("receiver")
                    .help("Receiver name used in generated methods")
                    .value_name("NAME"),
            )
            .arg(
                Arg::new("prune-imports")
                    .long("prune-imports")
                    .help("Only keep imports referenced by the interface's types")
                    .action(ArgAction::SetTrue),
            )
    }

    /// Run the CLI application
    pub fn run(matches: &ArgMatches) -> Result<()> {
        let config = utils::load_config(matches)?;
        let source = matches
            .get_one::<PathBuf>("source")
            .context("Missing source file argument")?;

        let app = Imply::new(config)?;
        let generated = app.generate_file(source)?;

        write_output(matches.get_one::<PathBuf>("output"), &generated)
    }
}

/// Write the generated code in one piece, to a file or stdout
fn write_output(path: Option<&PathBuf>, generated: &str) -> Result<()> {
    match path {
        Some(path) => write_file(path, generated),
        None => {
            let stdout = std::io::stdout();
            let mut out = std::io::BufWriter::new(stdout.lock());
            out.write_all(generated.as_bytes())
                .context("Failed to write to stdout")?;
            out.flush().context("Failed to flush stdout")?;
            Ok(())
        }
    }
}

fn write_file(path: &Path, generated: &str) -> Result<()> {
    std::fs::write(path, generated)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    info!("Wrote {:?}", path);
    Ok(())
}

/// Common CLI utilities
pub mod utils {
    use anyhow::Result;
    use clap::ArgMatches;
    use std::path::PathBuf;

    use crate::{Config, ImplyError};

    /// Load configuration from the optional file, then apply command-line overrides
    pub fn load_config(matches: &ArgMatches) -> Result<Config> {
        let mut config = match matches.get_one::<PathBuf>("config") {
            Some(path) => Config::from_file(path)?,
            None => Config::default(),
        };

        if let Some(interface) = name_arg(matches, "interface")? {
            config.target.interface = Some(interface);
        }
        if let Some(struct_name) = name_arg(matches, "struct")? {
            config.target.struct_name = Some(struct_name);
        }
        if let Some(package) = name_arg(matches, "package")? {
            config.target.package = Some(package);
        }
        if let Some(receiver) = name_arg(matches, "receiver")? {
            config.emit.receiver = receiver;
        }
        if matches.get_flag("prune-imports") {
            config.emit.prune_imports = true;
        }

        Ok(config)
    }

    /// Read an optional identifier argument; empty strings count as absent
    fn name_arg(matches: &ArgMatches, id: &str) -> Result<Option<String>, ImplyError> {
        match matches.get_one::<String>(id) {
            Some(value) if value.is_empty() => Ok(None),
            Some(value) if imply_generator::config::is_identifier(value) => {
                Ok(Some(value.clone()))
            }
            Some(value) => Err(ImplyError::Usage(format!(
                "{} must be a Go identifier, got {:?}",
                id, value
            ))),
            None => Ok(None),
        }
    }
}
