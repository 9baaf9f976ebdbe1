use crate::commands::{run_convert, run_rank, run_score, ConvertArgs, RankArgs, ScoreArgs};
use crate::demo::run_demo;
use crate::server;
use clap::{Args, Parser, Subcommand};
use crs::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "crs-api",
    about = "Score Express Entry candidates with the Comprehensive Ranking System",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Score a candidate profile stored as JSON
    Score(ScoreArgs),
    /// Convert one raw language test result to its CLB/NCLC level
    Convert(ConvertArgs),
    /// Rank every candidate in a CSV export by CRS total
    Rank(RankArgs),
    /// Score a set of sample candidates and print their breakdowns
    Demo,
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Score(args) => run_score(args),
        Command::Convert(args) => run_convert(args),
        Command::Rank(args) => run_rank(args),
        Command::Demo => run_demo(),
    }
}
