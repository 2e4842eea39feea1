//! Display functions for command results

use super::formatters::{format_keyboard, format_pending, format_row};
use crate::game::{GameStatus, MAX_ROUNDS, Player};
use crate::report::ReportStatus;
use crate::session::Session;
use colored::Colorize;

/// Print the six-row board with the keyboard underneath
pub fn print_board(session: &Session) {
    let game = session.game();

    println!("\n{}", "─".repeat(40).cyan());
    println!(
        " {} {}  {}",
        "Hauspokal Wordle".bright_cyan().bold(),
        session.period().label().bright_yellow().bold(),
        session.player().to_string().bright_white()
    );
    println!("{}", "─".repeat(40).cyan());

    let rows = game.rows();
    for i in 0..MAX_ROUNDS {
        let line = match rows.get(i) {
            Some((guess, feedback)) => format_row(guess, feedback),
            None if i == rows.len() && !game.is_over() => format_pending(game.pending_input()),
            None => format_pending(""),
        };
        println!("  {}. {line}", (i + 1).to_string().bright_black());
    }

    println!();
    for line in format_keyboard(&game.keyboard()) {
        println!("  {line}");
    }
    println!();
}

/// Print a one-line game status
pub fn print_status(session: &Session) {
    let game = session.game();
    let attempts = game.attempts();

    let status = match game.status() {
        GameStatus::Playing => format!("In progress: {attempts}/{MAX_ROUNDS} guesses used")
            .bright_yellow()
            .bold(),
        GameStatus::Won => format!(
            "Solved in {attempts} {}!",
            if attempts == 1 { "guess" } else { "guesses" }
        )
        .green()
        .bold(),
        GameStatus::Lost => format!("Not solved. The word was {}", game.target())
            .red()
            .bold(),
    };
    println!("{status}");

    if game.is_over() {
        let reported = if game.has_reported() {
            "reported".green()
        } else {
            "not reported yet".yellow()
        };
        println!("Result: {reported}");
    }
}

/// Print the share text, or a hint while the game is running
pub fn print_share(session: &Session) {
    match session.share_text() {
        Some(text) => println!("{text}"),
        None => println!(
            "{}",
            "The share text is available once this week's game is over.".bright_black()
        ),
    }
}

/// Print the registered player
pub fn print_profile(player: &Player) {
    println!("{}", "Registered player".bright_cyan().bold());
    println!("   Name:   {}", player.name().bright_white().bold());
    println!("   House:  {}", player.house().to_string().bright_yellow());
}

/// Print the outcome of a reporting attempt
pub fn print_report_status(status: ReportStatus) {
    let text = match status {
        ReportStatus::NotFinished => "Nothing to report until the game is over.".bright_black(),
        ReportStatus::AlreadyReported => "Result already reported.".bright_black(),
        ReportStatus::Sent => "Result reported to the house cup.".green().bold(),
    };
    println!("{text}");
}
