use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::{debug, error};
use tracing_subscriber::EnvFilter;

use _connections_core::config::ResolverConfig;
use _connections_core::query::connections::find_all_connections_many;
use _connections_core::{ConnectionReport, ConnectionsError, ConnectionsResult, PersonId, Snapshot};

/// Find the people connected to a person through work or phone books
#[derive(Parser)]
#[command(name = "find_connections")]
#[command(about = "List colleagues and phone pals of one or more people", long_about = None)]
struct Cli {
    /// JSON file with people and their work experience
    #[arg(long)]
    people: PathBuf,

    /// JSON file with contact lists (colleagues only when omitted)
    #[arg(long)]
    contacts: Option<PathBuf>,

    /// Person id to resolve; repeat for several people
    #[arg(short = 'p', long = "person-id", required = true, num_args = 1..)]
    person_ids: Vec<PersonId>,

    /// Minimum shared days to count as colleagues (default: 90)
    #[arg(long)]
    min_days: Option<i64>,

    /// Worker threads used when resolving several people
    #[arg(long)]
    workers: Option<usize>,

    /// Print each report as JSON
    #[arg(long)]
    json: bool,

    /// Enable verbose output (-v for info, -vv for debug, -vvv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(cli.verbose >= 2)
        .init();

    if let Err(e) = run(cli, &mut io::stdout().lock()) {
        error!("Fatal error: {:#}", e);
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

fn run(cli: Cli, out: &mut impl Write) -> anyhow::Result<()> {
    let config = ResolverConfig::from_env()
        .and_then(|cfg| cfg.with_overrides(cli.min_days, cli.workers))
        .context("invalid resolver configuration")?;
    debug!("Resolver config: {:?}", config);

    let snapshot = Snapshot::load(&cli.people, cli.contacts.as_deref()).with_context(|| {
        format!(
            "failed to load {} / {}",
            cli.people.display(),
            cli.contacts
                .as_deref()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "<no contacts>".to_string())
        )
    })?;

    let reports = find_all_connections_many(
        snapshot.people(),
        snapshot.contacts(),
        &cli.person_ids,
        config.min_overlap_days,
        config.workers,
    )?;

    write_reports(out, &snapshot, &cli.person_ids, reports, cli.json)?;
    out.flush()?;
    Ok(())
}

/// Print one block (or one JSON line) per requested id. Unknown ids get a
/// notice instead of failing the whole batch.
fn write_reports(
    out: &mut impl Write,
    snapshot: &Snapshot,
    person_ids: &[PersonId],
    reports: Vec<ConnectionsResult<ConnectionReport>>,
    json: bool,
) -> anyhow::Result<()> {
    for (person_id, report) in person_ids.iter().zip(reports) {
        match report {
            Ok(report) if json => writeln!(out, "{}", serde_json::to_string(&report)?)?,
            Ok(report) => {
                if let Some(person) = snapshot.person(*person_id) {
                    writeln!(out, "Connections of {} ({}):", person, person_id)?;
                }
                let lines = report.display_lines(snapshot.people());
                if lines.is_empty() {
                    writeln!(out, "  (none)")?;
                }
                for line in lines {
                    writeln!(out, "  {line}")?;
                }
            }
            Err(ConnectionsError::PersonNotFound(id)) => {
                writeln!(out, "Person with ID {id} not found.")?;
            }
            Err(e) => return Err(e.into()),
        }
    }
    Ok(())
}
