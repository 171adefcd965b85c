mod commands;
mod config;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use config::Config;

#[derive(Parser)]
#[command(name = "plandoc", version, about = "Generate, refine and export project plans")]
struct Cli {
    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Config file (default: ./plandoc.toml if present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Export a markdown plan to project-plan.pdf
    Export(commands::ExportArgs),

    /// Generate a plan from a brief
    Generate(commands::GenerateArgs),

    /// Refine a plan file with feedback
    Refine(commands::RefineArgs),

    /// Suggest tickets for a plan, then push a reviewed ticket file
    Tickets(commands::TicketsArgs),

    /// Browse development categories, tasks and code snippets
    Tasks(commands::TasksArgs),
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(!cli.no_color)
        .with_target(false)
        .init();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = Config::load(cli.config.as_deref())?;
    tracing::debug!(api_url = %config.api_url, "configuration resolved");

    match cli.command {
        Command::Export(args) => commands::export(args, &config, cli.no_color),
        Command::Generate(args) => commands::generate(args, &config).await,
        Command::Refine(args) => commands::refine(args, &config).await,
        Command::Tickets(args) => commands::tickets(args, &config).await,
        Command::Tasks(args) => commands::tasks(args, &config).await,
    }
}
