use std::path::{Path, PathBuf};

use anyhow::{bail, Context};
use chrono::Local;
use clap::{Args, Parser, Subcommand};

mod config;
mod error;
mod fetcher;
mod logging;
mod models;
mod processor;
mod report;
mod roster;

use config::Settings;
use fetcher::{LeetCodeClient, StatsSource};

#[derive(Parser)]
#[command(name = "leetcode-roster-stats")]
#[command(about = "Fetch LeetCode solve counts for a CSV roster and export them to Excel", long_about = None)]
struct Cli {
    #[command(flatten)]
    upstream: UpstreamArgs,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct UpstreamArgs {
    /// GraphQL endpoint to query
    #[arg(long, global = true, env = "LEETCODE_GRAPHQL_URL", default_value = config::DEFAULT_ENDPOINT)]
    endpoint: String,
    /// User-Agent header sent with every request
    #[arg(long, global = true, env = "LEETCODE_USER_AGENT", default_value = config::DEFAULT_USER_AGENT)]
    user_agent: String,
}

impl UpstreamArgs {
    fn settings(&self) -> anyhow::Result<Settings> {
        Settings::new(&self.endpoint, &self.user_agent)
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve every roster row and write the spreadsheet
    Report {
        /// CSV with 'NAME' and 'USER NAME' columns
        #[arg(long)]
        csv: PathBuf,
        #[arg(long, default_value = ".")]
        out_dir: PathBuf,
    },
    /// Validate a roster file without contacting LeetCode
    Check {
        #[arg(long)]
        csv: PathBuf,
    },
    /// Print the solve counts for a single username
    Lookup { username: String },
}

fn main() -> anyhow::Result<()> {
    logging::init();
    run(Cli::parse())
}

fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Commands::Report { csv, out_dir } => {
            let settings = cli.upstream.settings()?;
            run_report(&settings, &csv, &out_dir)?
        }
        Commands::Check { csv } => {
            let rows = load_roster(&csv)?;
            println!("{} is valid: {} rows.", csv.display(), rows.len());
        }
        Commands::Lookup { username } => {
            let username = username.trim();
            if username.is_empty() {
                bail!("username must not be empty");
            }
            let client = LeetCodeClient::new(&cli.upstream.settings()?)?;
            match client.fetch(username) {
                Ok(counts) => {
                    println!(
                        "{username}: total {} (easy {}, medium {}, hard {})",
                        report::group_thousands(counts.total),
                        report::group_thousands(counts.easy),
                        report::group_thousands(counts.medium),
                        report::group_thousands(counts.hard)
                    );
                }
                Err(failure) => bail!("could not resolve '{username}': {failure}"),
            }
        }
    }

    Ok(())
}

fn load_roster(csv: &Path) -> anyhow::Result<Vec<models::InputRow>> {
    roster::read_roster(csv).with_context(|| format!("failed to load roster from {}", csv.display()))
}

fn run_report(settings: &Settings, csv: &Path, out_dir: &Path) -> anyhow::Result<()> {
    let rows = load_roster(csv)?;
    println!("Loaded {} rows from {}.", rows.len(), csv.display());

    let client = LeetCodeClient::new(settings).context("failed to build HTTP client")?;
    let outcome = processor::process(&rows, &client);

    if !outcome.resolved.is_empty() {
        println!();
        println!("LeetCode Stats");
        print!("{}", report::render_resolved(&outcome.resolved));

        let artifact = report::build_artifact(&outcome.resolved, Local::now().date_naive())
            .context("failed to build the Excel report")?;
        if let Some(artifact) = artifact {
            let path = artifact
                .write_to(out_dir)
                .with_context(|| format!("failed to write {}", artifact.file_name))?;
            println!("Excel file ({}) written to {}.", artifact.mime, path.display());
        }
    }

    if !outcome.unresolved.is_empty() {
        println!();
        println!("Invalid or Private Profiles");
        println!("These users were not found or have private profiles:");
        print!("{}", report::render_unresolved(&outcome.unresolved));
    }

    if outcome.is_empty() {
        println!("No rows to process.");
    }

    Ok(())
}
