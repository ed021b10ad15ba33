mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "guide")]
#[command(about = "OMEGAMON z/OS deployment guide: search, step tracking, troubleshooting", long_about = None)]
#[command(version)]
struct Cli {
    #[arg(long, global = true, default_value = ".", help = "Guide root directory")]
    root: PathBuf,

    #[arg(short, long, global = true, help = "Verbose logging")]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List indexed sections
    Sections {
        #[arg(long, help = "JSON output")]
        json: bool,
    },
    /// Search section titles and text
    Search {
        query: String,
        #[arg(long, help = "JSON output")]
        json: bool,
    },
    /// Mark deployment steps and show progress
    Steps {
        #[arg(long, short, value_delimiter = ',', help = "Steps to mark complete")]
        complete: Vec<u32>,
        #[arg(long, short, value_delimiter = ',', help = "Steps to toggle (applied after --complete)")]
        toggle: Vec<u32>,
        #[arg(long, help = "JSON output")]
        json: bool,
    },
    /// Show a troubleshooting path
    Troubleshoot {
        #[arg(help = "deployment | performance | connectivity")]
        issue: Option<String>,
        #[arg(long, help = "JSON output")]
        json: bool,
    },
    /// Save the deployment checklist or configuration template
    Download {
        #[arg(help = "checklist | config-template")]
        kind: String,
        #[arg(long, short, default_value = ".", help = "Output directory")]
        out: PathBuf,
        #[arg(long, help = "Print to stdout instead of writing a file")]
        stdout: bool,
    },
    /// Interactive search and step tracking
    Shell,
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let root = cli.root;
    let context = || commands::Context::load(&root);

    match cli.command {
        Commands::Sections { json } => commands::sections::run(&context()?, json),
        Commands::Search { query, json } => commands::search::run(&context()?, &query, json),
        Commands::Steps {
            complete,
            toggle,
            json,
        } => commands::steps::run(&context()?, &complete, &toggle, json),
        Commands::Troubleshoot { issue, json } => commands::troubleshoot::run(issue.as_deref(), json),
        Commands::Download { kind, out, stdout } => commands::download::run(&kind, &out, stdout),
        Commands::Shell => commands::shell::run(&context()?),
    }
}
