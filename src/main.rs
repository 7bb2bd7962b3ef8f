use std::path::PathBuf;

use clap::{ArgAction, Parser};
use tracing::{debug, error, info};

use target_ispolitical::config::ConfigLoader;
use target_ispolitical::error::EngineResult;
use target_ispolitical::export::Exporter;
use target_ispolitical::upload::{DryRunTransport, HttpTransport};

#[derive(Parser)]
#[command(name = "target-ispolitical")]
#[command(version)]
#[command(about = "Export Numero records to the ISPolitical PublicForms API", long_about = None)]
struct Cli {
    /// Config file
    #[arg(short, long)]
    config: PathBuf,
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
    /// Transform and log forms without sending them
    #[arg(long)]
    dry_run: bool,
}

fn main() {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(log_level)
        .with_target(cli.verbose >= 2)
        .init();

    debug!(config = %cli.config.display(), dry_run = cli.dry_run, "target-ispolitical started");

    if let Err(e) = run(&cli) {
        error!(error = %e, "Export failed");
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> EngineResult<()> {
    let config = ConfigLoader::load(&cli.config)?.into_config();

    let report = if cli.dry_run {
        info!("Dry run: forms will be logged, not sent");
        Exporter::new(&config, DryRunTransport).run()?
    } else {
        let transport = HttpTransport::new(&config)?;
        info!(endpoint = transport.endpoint(), "Posting forms");
        Exporter::new(&config, transport).run()?
    };

    info!(run_id = %report.run_id, sent = report.total_sent(), "Export finished");
    Ok(())
}
