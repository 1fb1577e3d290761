use anyhow::Result;
use clap::Parser;
use clap::error::ErrorKind;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::debug;
use tracing_subscriber::EnvFilter;
use zigpkg::Error;
use zigpkg::config::{Config, Format, Operation};
use zigpkg::driver;

#[derive(Parser)]
#[command(
    name = "zigpkg",
    version,
    about = "Run a number through libzigpkg and print the build options"
)]
struct Cli {
    /// Number to transform (exactly one)
    #[arg(value_name = "NUM")]
    args: Vec<String>,

    /// Operation to run; overrides the config file
    #[arg(long, value_enum)]
    op: Option<Operation>,

    /// Output format; overrides the config file
    #[arg(long, value_enum)]
    format: Option<Format>,

    /// Path to config file (defaults to ./zigpkg.toml when present)
    #[arg(short, long)]
    config: Option<PathBuf>,
}

fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("zigpkg=warn")),
        )
        .init();

    let prog = std::env::args_os()
        .next()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "zigpkg".into());

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            let _ = e.print();
            return ExitCode::SUCCESS;
        }
        Err(e) => {
            debug!(error = %e, "argument parsing failed");
            eprintln!("Usage: {prog} <num>");
            return ExitCode::FAILURE;
        }
    };

    match execute(cli) {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            report_error(&prog, &err);
            ExitCode::FAILURE
        }
    }
}

fn execute(cli: Cli) -> Result<String> {
    // A bad config file must not hide a usage error.
    driver::single_arg(&cli.args)?;
    let config = Config::discover(cli.config.as_deref())?;
    let operation = cli.op.unwrap_or(config.driver.operation);
    let format = cli.format.unwrap_or(config.driver.format);

    let report = driver::run(operation, &cli.args)?;
    Ok(report.render(format)?)
}

fn report_error(prog: &str, err: &anyhow::Error) {
    match err.downcast_ref::<Error>() {
        Some(Error::Usage(_)) => eprintln!("Usage: {prog} <num>"),
        Some(
            Error::InvalidArgument { label, value } | Error::OutOfDomain { label, value, .. },
        ) => {
            eprintln!("Invalid {label}: {value}");
            eprintln!("Usage: {prog} <{label}>");
        }
        Some(Error::Overflow) => eprintln!("Result overflowed"),
        _ => eprintln!("Error: {err:#}"),
    }
}
