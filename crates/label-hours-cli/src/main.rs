use anyhow::{Context, Result};
use chrono::Utc;
use clap::Parser;
use label_hours::{render_json, render_table, work_time_for_label, WorkCalendar};
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

mod config;
mod gitlab;

use config::Config;
use gitlab::GitLabClient;

/// The workflow label whose time is measured.
const LABEL: &str = "Doing";

#[derive(Parser)]
#[command(
    name = "label-hours",
    version,
    about = "Calculates how long a 'Doing' label was on a GitLab issue during business hours"
)]
struct Cli {
    /// The project id or path (e.g., 38062628 or group/project)
    #[arg(short = 'p', long)]
    project_id: String,

    /// The issue number within the project
    #[arg(short = 'i', long)]
    issue_number: u64,

    /// Print the report as JSON instead of a table
    #[arg(long)]
    json: bool,

    /// Log requests and interval details to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::from_default_env().add_directive(tracing::Level::DEBUG.into())
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();

    // `.env` may set RUST_LOG, so it is read before the subscriber exists.
    let dotenv = dotenvy::dotenv();
    init_tracing(cli.verbose);
    match dotenv {
        Ok(path) => debug!(path = %path.display(), "loaded .env"),
        Err(e) if e.not_found() => {}
        Err(e) => warn!("could not load .env file: {e}"),
    }

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(missing) => {
            eprintln!("error: {missing}");
            std::process::exit(1);
        }
    };

    if let Err(e) = run(&cli, &config) {
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}

fn run(cli: &Cli, config: &Config) -> Result<()> {
    debug!(group_id = %config.group_id, base_url = %config.base_url, "configuration loaded");

    let client = GitLabClient::new(&config.base_url, config.token.as_str())?;
    let events = client
        .label_events(&cli.project_id, cli.issue_number)
        .with_context(|| {
            format!(
                "fetching label events for issue #{} in project {}",
                cli.issue_number, cli.project_id
            )
        })?;

    let totals = work_time_for_label(&events, LABEL, &WorkCalendar::default(), Utc::now())?;

    if cli.json {
        println!("{}", render_json(&totals)?);
    } else {
        print!("{}", render_table(&totals));
    }
    Ok(())
}
