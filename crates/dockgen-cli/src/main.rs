mod prompt;
mod style;
mod wizard;

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use dockgen_core::DockgenConfig;

use crate::prompt::Prompter;
use crate::style::Style;
use crate::wizard::{Outcome, Wizard};

#[derive(Parser)]
#[command(name = "dockgen", about = "Answer a few questions, get a Dockerfile")]
#[command(version)]
struct Cli {
    /// Where to write the Dockerfile (default: ./Dockerfile or [output].path in dockgen.toml)
    #[arg(long, short = 'o')]
    output: Option<PathBuf>,
    /// Overwrite an existing Dockerfile without asking
    #[arg(long, short = 'y')]
    yes: bool,
    /// Disable colored output
    #[arg(long)]
    no_color: bool,
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_ansi(!cli.no_color)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let config = DockgenConfig::load(Path::new("."))?;

    let style = Style::new(config.ui.color && !cli.no_color);
    let output_path = cli.output.unwrap_or(config.output.path);
    tracing::debug!(path = %output_path.display(), "output path resolved");

    let prompter = Prompter::new(std::io::stdin().lock(), std::io::stdout().lock(), style);
    let mut wizard = Wizard::new(prompter, output_path, config.template).assume_yes(cli.yes);

    match wizard.run() {
        Ok(Outcome::Written(path)) => tracing::info!(path = %path.display(), "done"),
        Ok(Outcome::Kept) => tracing::info!("existing Dockerfile kept"),
        Err(e) => {
            tracing::debug!(error = ?e, "wizard failed");
            eprintln!();
            eprintln!("{}", style.error(&format!("Error generating Dockerfile: {e:#}")));
            return Ok(ExitCode::FAILURE);
        }
    }

    Ok(ExitCode::SUCCESS)
}
