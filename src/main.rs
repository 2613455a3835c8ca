use birdpoll::application::engine::BallotEngine;
use birdpoll::application::seed::{default_roster, read_roster, seed};
use birdpoll::domain::ports::{CandidateStoreBox, MemberStoreBox};
use birdpoll::domain::view::Viewer;
use birdpoll::infrastructure::in_memory::{InMemoryCandidateStore, InMemoryMemberStore};
use birdpoll::interfaces::csv::candidate_writer::CandidateWriter;
use birdpoll::interfaces::csv::command_reader::CommandReader;
use clap::Parser;
use miette::{IntoDiagnostic, Result};
use std::fs::File;
use std::io::{self, Read};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Poll command script (CSV). Reads stdin when omitted.
    input: Option<PathBuf>,

    /// JSON file with the candidate roster, replacing the default birds.
    #[arg(long)]
    seed: Option<PathBuf>,

    /// Print the listing as an authenticated administrator, tallies included.
    #[arg(long)]
    admin: bool,

    /// Start with the poll open.
    #[arg(long)]
    open: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| "birdpoll=info".into()),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let candidates: CandidateStoreBox = Box::new(InMemoryCandidateStore::new());
    let members: MemberStoreBox = Box::new(InMemoryMemberStore::new());
    let engine = BallotEngine::new(candidates, members);

    let roster = match cli.seed {
        Some(path) => read_roster(File::open(path).into_diagnostic()?).into_diagnostic()?,
        None => default_roster(),
    };
    seed(&engine, roster).await.into_diagnostic()?;
    engine.set_poll_open(cli.open);

    let source: Box<dyn Read> = match cli.input {
        Some(path) => Box::new(File::open(path).into_diagnostic()?),
        None => Box::new(io::stdin()),
    };

    // Replay the script; a failing command is reported and skipped.
    let reader = CommandReader::new(source);
    for (line, command) in reader.commands().enumerate() {
        match command {
            Ok(command) => match command.execute(&engine).await {
                Ok(outcome) => tracing::info!(line = line + 1, "{outcome}"),
                Err(e) => tracing::warn!(line = line + 1, "Error processing command: {e}"),
            },
            Err(e) => tracing::warn!(line = line + 1, "Error reading command: {e}"),
        }
    }

    let viewer = Viewer::from_authenticated(cli.admin);
    let listing = engine.list_candidates(viewer).await.into_diagnostic()?;

    let stdout = io::stdout();
    let mut writer = CandidateWriter::new(stdout.lock(), viewer);
    writer.write_candidates(listing).into_diagnostic()?;

    Ok(())
}
