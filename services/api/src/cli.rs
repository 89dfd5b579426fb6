use crate::check::{run_check, run_companies, CheckArgs, CompaniesArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use placement_eligibility::error::AppError;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "Placement Eligibility Checker",
    about = "Match student profiles against company hiring requirements",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service with the eligibility form (default command)
    Serve(ServeArgs),
    /// Check a single student profile from the command line
    Check(CheckArgs),
    /// List the company requirements loaded from the data source
    Companies(CompaniesArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
    /// Override the company requirements CSV (defaults to APP_COMPANIES_CSV or com.csv)
    #[arg(long)]
    pub(crate) companies: Option<PathBuf>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Check(args) => run_check(args),
        Command::Companies(args) => run_companies(args),
    }
}
