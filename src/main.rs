use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use git_prep::config;
use git_prep::steps;
use git_prep::ui;

#[derive(Parser)]
#[command(
    name = "git-prep",
    about = "Prepare the local git repository for a build: verify or initialise it, apply config, and install hooks"
)]
struct Args {
    #[arg(short, long, help = "Custom configuration file path", global = true)]
    config: Option<String>,

    #[arg(
        short,
        long,
        help = "Project base directory",
        default_value = ".",
        global = true
    )]
    dir: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Verify that a local git repository exists
    Check {
        #[arg(long, help = "Initialise a repository if none exists")]
        initialise: bool,
    },
    /// Initialise a git repository if one does not already exist
    Init,
    /// Apply configured git config values to the repository
    Configure {
        #[arg(long, help = "Directory to configure as the git hooks path")]
        hooks_path: Option<String>,
    },
    /// Install configured scripts into the git hooks directory
    Install,
    /// Run the full preparation pipeline
    Run,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let config = match config::load_config(args.config.as_deref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            ui::display_error(&format!("Error loading config: {}", e));
            std::process::exit(1);
        }
    };

    let outcome = match args.command {
        Command::Check { initialise } => steps::check(&args.dir, initialise || config.initialise),
        Command::Init => steps::init(&args.dir, &config),
        Command::Configure { hooks_path } => {
            steps::configure(&args.dir, &config, hooks_path.as_deref())
        }
        Command::Install => steps::install(&args.dir, &config),
        Command::Run => steps::run(&args.dir, &config),
    };

    if let Err(e) = outcome {
        ui::display_error(&e.to_string());
        std::process::exit(1);
    }

    Ok(())
}
