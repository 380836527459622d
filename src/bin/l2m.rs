//! latex2md CLI - convert an AMS-LaTeX document to Markdown/MathJax

use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use latex2md::{Configuration, ConversionError, Converter};
use tracing::{debug, error};

#[derive(Parser)]
#[command(name = "l2m")]
#[command(version)]
#[command(about = "Convert a subset of AMS-LaTeX to Markdown with MathJax math", long_about = None)]
struct Cli {
    /// Input LaTeX file
    #[arg(default_value = "latex_sample.tex")]
    input_file: PathBuf,

    /// Output Markdown file
    #[arg(default_value = "converted_latex_sample.md")]
    output_file: PathBuf,

    /// Construct configuration (.json, .yaml/.yml or .toml); built-in table if omitted
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Quiet mode: suppress warning output to stderr
    #[arg(short, long)]
    quiet: bool,

    /// Log each conversion stage
    #[arg(short, long, conflicts_with = "quiet")]
    verbose: bool,
}

fn init_tracing(cli: &Cli) {
    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else if cli.quiet {
        tracing::Level::ERROR
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: &Cli) -> Result<(), ConversionError> {
    let config = match &cli.config {
        Some(path) => {
            debug!(path = %path.display(), "loading configuration");
            Configuration::from_path(path)?
        }
        None => Configuration::builtin().clone(),
    };

    let input = fs::read_to_string(&cli.input_file)
        .map_err(|e| ConversionError::read(&cli.input_file, e))?;
    let output = Converter::with_config(&input, &config).convert_with_warnings()?;
    fs::write(&cli.output_file, &output.content)
        .map_err(|e| ConversionError::write(&cli.output_file, e))?;

    debug!(
        output = %cli.output_file.display(),
        warnings = output.warnings.len(),
        "conversion finished"
    );
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(&cli);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
