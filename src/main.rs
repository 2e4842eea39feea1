//! Hauspokal Wordle - CLI
//!
//! Weekly five-letter word game for the house cup, with TUI and CLI modes.

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use hauspokal_wordle::{
    commands::{
        require_player, run_logout, run_profile, run_register, run_report, run_share, run_simple,
        run_status,
    },
    config::AppConfig,
    game::House,
    logging::{self, LOG_FILE},
    report::{ReportSink, WebhookSink},
    session::Session,
    storage::FileStore,
};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "hauspokal_wordle",
    about = "Weekly Wordle for the house cup: one word per ISO week, six guesses",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Config file (default: <config dir>/hauspokal-wordle/config.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Play as if today were this date (YYYY-MM-DD)
    #[arg(short, long, global = true)]
    date: Option<NaiveDate>,

    /// Write debug logs to the log file
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (one guess per line, no TUI)
    Simple,

    /// Register the player on this machine
    Register {
        /// Display name
        #[arg(short, long)]
        name: String,

        /// House the result counts for
        #[arg(short = 'H', long, value_enum)]
        house: House,
    },

    /// Show the registered player
    Profile,

    /// Forget the registered player
    Logout,

    /// Show this week's board and status
    Status,

    /// Print the share text of this week's game
    Share,

    /// Retry reporting a finished game
    Report,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = AppConfig::load(cli.config.as_deref())?;
    let data_dir = config.data_dir()?;
    logging::init(Some(&data_dir.join(LOG_FILE)), cli.verbose)?;

    let store = FileStore::new(&data_dir);
    let command = cli.command.unwrap_or(Commands::Play);

    match &command {
        Commands::Register { name, house } => run_register(&store, name, *house).map(|_| ()),
        Commands::Profile => {
            run_profile(&store);
            Ok(())
        }
        Commands::Logout => run_logout(&store),
        Commands::Play | Commands::Simple | Commands::Status | Commands::Share | Commands::Report => {
            let date = cli.date.unwrap_or_else(|| Local::now().date_naive());
            run_game_command(&command, &config, store, date)
        }
    }
}

fn run_game_command(
    command: &Commands,
    config: &AppConfig,
    store: FileStore,
    date: NaiveDate,
) -> Result<()> {
    let player = require_player(&store)?;
    let resolver = config.build_resolver()?;
    let lexicon = config.build_lexicon(&resolver)?;

    let webhook = config
        .report
        .webhook_url
        .as_deref()
        .map(|url| WebhookSink::new(url, config.report_timeout()))
        .transpose()
        .context("failed to set up the result webhook")?;
    let sink = webhook.as_ref().map(|s| s as &dyn ReportSink);

    tracing::debug!(%date, player = %player, strict = config.guesses.strict, "starting session");
    let mut session = Session::start(player, &resolver, &lexicon, store, date);

    match command {
        Commands::Simple => run_simple(&mut session, sink),
        Commands::Status => {
            run_status(&session);
            Ok(())
        }
        Commands::Share => {
            run_share(&session);
            Ok(())
        }
        Commands::Report => run_report(&mut session, sink),
        _ => run_play_command(session, sink),
    }
}

fn run_play_command(session: Session, sink: Option<&dyn ReportSink>) -> Result<()> {
    use hauspokal_wordle::interactive::{App, run_tui};

    let app = App::new(session, sink);
    run_tui(app)
}
