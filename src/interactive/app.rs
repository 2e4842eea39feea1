//! TUI application state and logic

use crate::commands::{Delivery, deliver};
use crate::report::{ReportSink, ReportStatus};
use crate::session::Session;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

const MAX_MESSAGES: usize = 5;

/// Application state
pub struct App<'a> {
    pub session: Session<'a>,
    pub sink: Option<&'a dyn ReportSink>,
    pub messages: Vec<Message>,
    /// Row to highlight after a rejected guess
    pub shake_row: Option<usize>,
    pub show_share: bool,
    pub should_quit: bool,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl<'a> App<'a> {
    #[must_use]
    pub fn new(session: Session<'a>, sink: Option<&'a dyn ReportSink>) -> Self {
        let mut app = Self {
            session,
            sink,
            messages: Vec::new(),
            shake_row: None,
            show_share: false,
            should_quit: false,
        };

        let greeting = format!(
            "Welcome, {}! Guess the word of {}.",
            app.session.player(),
            app.session.period().label()
        );
        app.add_message(&greeting, MessageStyle::Info);

        if app.session.game().is_over() {
            app.add_message("This week's game is already finished.", MessageStyle::Info);
            app.show_share = true;
            if !app.session.game().has_reported() {
                app.report();
            }
        } else if app.session.game().attempts() > 0 {
            app.add_message("Game restored. Keep going!", MessageStyle::Info);
        }
        app
    }

    /// Apply one key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        if self.session.game().is_over() {
            match key.code {
                KeyCode::Char('q' | 'Q') | KeyCode::Esc => self.should_quit = true,
                KeyCode::Char('s' | 'S') => self.show_share = !self.show_share,
                KeyCode::Char('r' | 'R') => self.report(),
                _ => {}
            }
            return;
        }

        match key.code {
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Char(c) => {
                if self.session.type_char(c) {
                    self.shake_row = None;
                }
            }
            KeyCode::Backspace => {
                if self.session.delete_char() {
                    self.shake_row = None;
                }
            }
            KeyCode::Enter => self.submit(),
            _ => {}
        }
    }

    fn submit(&mut self) {
        match self.session.submit() {
            Ok(outcome) => {
                self.shake_row = None;
                if outcome.status.is_terminal() {
                    self.finish();
                }
            }
            Err(e) => {
                self.shake_row = e.row();
                self.add_message(&e.to_string(), MessageStyle::Error);
            }
        }
    }

    fn finish(&mut self) {
        let game = self.session.game();
        let (text, style) = if game.is_winner() {
            let celebration = match game.attempts() {
                1 => "🎯 Unbelievable! First try!",
                2 => "🔥 Magnificent! Two guesses!",
                3 => "✨ Splendid! Three guesses!",
                4 => "👏 Well done! Four guesses!",
                5 => "🎉 Nice work! Five guesses!",
                _ => "😅 Phew! Got it in six!",
            };
            (celebration.to_string(), MessageStyle::Success)
        } else {
            (
                format!("The word was {}. Better luck next week!", game.target()),
                MessageStyle::Error,
            )
        };
        self.add_message(&text, style);
        self.show_share = true;
        self.report();
    }

    /// Report the finished game, surfacing failures as messages
    pub fn report(&mut self) {
        match deliver(&mut self.session, self.sink) {
            Delivery::NoSink => {
                tracing::debug!("no webhook configured, result stays local");
            }
            Delivery::Done(ReportStatus::Sent) => {
                self.add_message("Result reported to the house cup.", MessageStyle::Success);
            }
            Delivery::Done(ReportStatus::AlreadyReported) => {
                self.add_message("Result already reported.", MessageStyle::Info);
            }
            Delivery::Done(ReportStatus::NotFinished) => {}
            Delivery::Failed(e) => {
                self.add_message(
                    &format!("Reporting failed: {e}. Press 'r' to retry."),
                    MessageStyle::Error,
                );
            }
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        if self.messages.len() > MAX_MESSAGES {
            self.messages.remove(0);
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    if let Some(text) = app.session.share_text() {
        tracing::debug!(share = %text, "session ended");
    }
    Ok(())
}
