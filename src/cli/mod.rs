pub mod graph;
pub mod history;
pub mod log;
pub mod password;
pub mod quotes;
pub mod status;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use history::HistoryCommand;
use tracing::level_filters::LevelFilter;

use crate::{
    auth::credential::Credential,
    tracker::store::StateStoreImpl,
    utils::{clock::DefaultClock, dir::create_application_default_path, logging::enable_logging},
};

#[derive(Parser, Debug)]
#[command(name = "Urgeshield", version, long_about = None)]
#[command(about = "Personal habit tracker with streaks and cooldowns", long_about = None)]
struct Args {
    #[command(subcommand)]
    commands: Commands,
    #[arg(long, help = "Enable logging")]
    log: bool,
    #[arg(
        long,
        help = "Application directory. By default tries to save into $XDG_STATE_HOME or $HOME/.local/state"
    )]
    dir: Option<PathBuf>,
    #[arg(
        long,
        help = "Password for non-interactive use. Prompted on stdin when omitted"
    )]
    password: Option<String>,
}

#[derive(Subcommand, Debug)]
#[command(version, about, long_about = None)]
enum Commands {
    #[command(about = "Set up the password on first run")]
    Setup {},
    #[command(about = "Show current streak, max streak, cooldown state and a bit of motivation")]
    Status {},
    #[command(about = "Log an urge you overcame")]
    Urge {},
    #[command(about = "Log a relapse. Asks for confirmation and starts the cooldown")]
    Relapse {
        #[arg(long, help = "Skip the confirmation prompt")]
        yes: bool,
    },
    #[command(about = "List logged events in a date range")]
    History {
        #[command(flatten)]
        command: HistoryCommand,
    },
    #[command(about = "Display the streak trend as a bar graph")]
    Graph {},
}

pub async fn run_cli() -> Result<()> {
    let args = Args::parse();

    let dir = match args.dir {
        Some(v) => v,
        None => create_application_default_path()?,
    };

    let logging_level = if args.log {
        Some(LevelFilter::TRACE)
    } else {
        None
    };
    enable_logging(&dir, logging_level, args.log)?;

    let credential = Credential::new(&dir);

    if let Commands::Setup {} = args.commands {
        return password::run_setup(&credential).await;
    }

    password::login(&credential, args.password.as_deref()).await?;

    let store = StateStoreImpl::new(dir)?;
    let clock = DefaultClock;

    match args.commands {
        Commands::Setup {} => unreachable!("handled before login"),
        Commands::Status {} => status::show_status(&store, &clock).await,
        Commands::Urge {} => log::log_urge(&store, &clock).await,
        Commands::Relapse { yes } => log::log_relapse(&store, &clock, yes).await,
        Commands::History { command } => history::process_history_command(&store, command).await,
        Commands::Graph {} => graph::show_graph(&store, &clock).await,
    }
}
