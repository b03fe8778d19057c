//! imply CLI binary

use anyhow::Result;

use imply::cli::CliApp;

fn main() -> Result<()> {
    // Logs go to stderr; stdout carries only generated code
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "imply=warn".into()),
        )
        .init();

    let matches = CliApp::app().get_matches();

    CliApp::run(&matches)
}
