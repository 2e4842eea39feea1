//! Simple interactive CLI mode
//!
//! Line-based play without the TUI: one guess per line.

use super::result::{Delivery, deliver};
use crate::core::WORD_LENGTH;
use crate::output::{print_board, print_share, print_status};
use crate::report::{ReportSink, ReportStatus};
use crate::session::Session;
use anyhow::{Context, Result};
use colored::Colorize;
use std::io::{self, Write};

/// One line of user input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SimpleCommand {
    Quit,
    Share,
    Report,
    Help,
    Guess(String),
    Invalid(String),
    Empty,
}

impl SimpleCommand {
    /// Interpret a trimmed input line
    #[must_use]
    pub fn parse(line: &str) -> Self {
        let line = line.trim();
        match line.to_lowercase().as_str() {
            "" => Self::Empty,
            ":q" | ":quit" | "quit" | "exit" => Self::Quit,
            ":s" | ":share" => Self::Share,
            ":r" | ":report" => Self::Report,
            ":h" | ":help" | "?" => Self::Help,
            _ if !line.chars().all(|c| c.is_ascii_alphabetic()) => {
                Self::Invalid("Only letters A-Z are allowed".to_string())
            }
            _ if line.len() > WORD_LENGTH => {
                Self::Invalid(format!("Too many letters ({}/{WORD_LENGTH})", line.len()))
            }
            _ => Self::Guess(line.to_string()),
        }
    }
}

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input.
pub fn run_simple(session: &mut Session, sink: Option<&dyn ReportSink>) -> Result<()> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                 Hauspokal Wordle - Simple Mode               ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");
    print_help();

    print_board(session);
    if session.game().is_over() {
        finish(session, sink);
        return Ok(());
    }

    loop {
        let Some(line) = get_user_input(&format!("Guess {}", session.game().attempts() + 1))?
        else {
            println!();
            return Ok(());
        };

        match SimpleCommand::parse(&line) {
            SimpleCommand::Empty => {}
            SimpleCommand::Quit => {
                println!("\n👋 Progress saved. See you later!\n");
                return Ok(());
            }
            SimpleCommand::Help => print_help(),
            SimpleCommand::Share => print_share(session),
            SimpleCommand::Report => report(session, sink),
            SimpleCommand::Invalid(reason) => println!("{}", format!("❌ {reason}").red()),
            SimpleCommand::Guess(word) => {
                session.set_input(&word);
                match session.submit() {
                    Ok(outcome) => {
                        print_board(session);
                        if outcome.status.is_terminal() {
                            finish(session, sink);
                            return Ok(());
                        }
                    }
                    Err(e) => {
                        let row = e.row().map_or(String::new(), |r| format!("Row {}: ", r + 1));
                        println!("{}", format!("❌ {row}{e}").red());
                    }
                }
            }
        }
    }
}

fn print_help() {
    println!("Guess the house cup word of the week in six tries.");
    println!("  🟩 right letter, right spot   🟧 letter is in the word   ⬛️ not in the word\n");
    println!("Commands: ':share' share text, ':report' retry reporting, ':quit' to exit\n");
}

fn finish(session: &mut Session, sink: Option<&dyn ReportSink>) {
    print_status(session);
    report(session, sink);
    println!();
    print_share(session);
    println!();
}

fn report(session: &mut Session, sink: Option<&dyn ReportSink>) {
    match deliver(session, sink) {
        Delivery::NoSink => {
            tracing::debug!("no webhook configured, result stays local");
        }
        Delivery::Done(ReportStatus::Sent) => {
            println!("{}", "✅ Result reported to the house cup.".green());
        }
        Delivery::Done(ReportStatus::NotFinished) => {
            println!("{}", "Nothing to report until the game is over.".bright_black());
        }
        Delivery::Done(ReportStatus::AlreadyReported) => {}
        Delivery::Failed(e) => {
            println!(
                "{}",
                format!("⚠️  Could not report the result: {e}. Type ':report' to retry.").yellow()
            );
        }
    }
}

/// Get user input with a prompt; `None` at end of input
fn get_user_input(prompt: &str) -> Result<Option<String>> {
    print!("{prompt}: ");
    io::stdout().flush().context("failed to flush stdout")?;

    let mut input = String::new();
    let read = io::stdin()
        .read_line(&mut input)
        .context("failed to read input")?;

    Ok((read > 0).then(|| input.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_commands() {
        assert_eq!(SimpleCommand::parse("  "), SimpleCommand::Empty);
        assert_eq!(SimpleCommand::parse(":q"), SimpleCommand::Quit);
        assert_eq!(SimpleCommand::parse("QUIT"), SimpleCommand::Quit);
        assert_eq!(SimpleCommand::parse(":share"), SimpleCommand::Share);
        assert_eq!(SimpleCommand::parse(":r"), SimpleCommand::Report);
        assert_eq!(SimpleCommand::parse("?"), SimpleCommand::Help);
    }

    #[test]
    fn parses_guesses() {
        assert_eq!(
            SimpleCommand::parse(" harpy "),
            SimpleCommand::Guess("harpy".to_string())
        );
        // Short words are passed on so the round reports the row
        assert_eq!(SimpleCommand::parse("owl"), SimpleCommand::Guess("owl".to_string()));
    }

    #[test]
    fn rejects_non_letters_and_long_words() {
        assert!(matches!(SimpleCommand::parse("ha rp"), SimpleCommand::Invalid(_)));
        assert!(matches!(SimpleCommand::parse("h4rpy"), SimpleCommand::Invalid(_)));
        assert_eq!(
            SimpleCommand::parse("hallows"),
            SimpleCommand::Invalid("Too many letters (7/5)".to_string())
        );
    }
}
