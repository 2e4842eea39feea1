//! TUI rendering with ratatui
//!
//! Board, keyboard, messages and share panel for the game.

use super::app::{App, MessageStyle};
use crate::core::{KEYBOARD_ROWS, KeyboardState, LetterStatus, WORD_LENGTH};
use crate::game::{GameStatus, MAX_ROUNDS};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph, Wrap},
};

const PRESENT_COLOR: Color = Color::Rgb(217, 119, 6);

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(12),   // Main content
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(55), // Board and keyboard
            Constraint::Percentage(45), // Messages and share text
        ])
        .split(chunks[1]);

    render_game_panel(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    render_status(f, app, chunks[2]);
}

fn render_header(f: &mut Frame, app: &App, area: Rect) {
    let title = format!(
        "🏆 Hauspokal Wordle {}  |  {}",
        app.session.period().label(),
        app.session.player()
    );
    let header = Paragraph::new(title)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_game_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(8), // Board: six rows plus borders
            Constraint::Min(5),    // Keyboard
        ])
        .split(area);

    render_board(f, app, chunks[0]);
    render_keyboard(f, &app.session.game().keyboard(), chunks[1]);
}

/// Colors of a tile in the given status
fn tile_style(status: LetterStatus) -> Style {
    match status {
        LetterStatus::Correct => Style::default()
            .fg(Color::Black)
            .bg(Color::Green)
            .add_modifier(Modifier::BOLD),
        LetterStatus::Present => Style::default()
            .fg(Color::Black)
            .bg(PRESENT_COLOR)
            .add_modifier(Modifier::BOLD),
        LetterStatus::Absent => Style::default().fg(Color::Gray).bg(Color::DarkGray),
        LetterStatus::Initial => Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
    }
}

fn board_lines(app: &App) -> Vec<Line<'static>> {
    let game = app.session.game();
    let rows = game.rows();

    (0..MAX_ROUNDS)
        .map(|i| {
            let mut spans = Vec::with_capacity(WORD_LENGTH * 2);
            if let Some((guess, feedback)) = rows.get(i) {
                for (letter, &status) in guess.text().chars().zip(feedback.statuses()) {
                    spans.push(Span::styled(format!(" {letter} "), tile_style(status)));
                    spans.push(Span::raw(" "));
                }
            } else {
                let pending: Vec<char> = if i == rows.len() && !game.is_over() {
                    game.pending_input().chars().collect()
                } else {
                    Vec::new()
                };
                let style = if app.shake_row == Some(i) {
                    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
                } else {
                    tile_style(LetterStatus::Initial)
                };
                for cell in 0..WORD_LENGTH {
                    let text = pending
                        .get(cell)
                        .map_or_else(|| " · ".to_string(), |c| format!(" {c} "));
                    spans.push(Span::styled(text, style));
                    spans.push(Span::raw(" "));
                }
            }
            Line::from(spans)
        })
        .collect()
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let board = Paragraph::new(board_lines(app))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(" Board ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
    f.render_widget(board, area);
}

fn render_keyboard(f: &mut Frame, keyboard: &KeyboardState, area: Rect) {
    let lines: Vec<Line> = KEYBOARD_ROWS
        .iter()
        .map(|row| {
            let keys: Vec<Span> = row
                .chars()
                .map(|letter| {
                    Span::styled(format!(" {letter} "), tile_style(keyboard.status(letter)))
                })
                .collect();
            Line::from(keys)
        })
        .collect();

    let widget = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().title(" Keyboard ").borders(Borders::ALL));
    f.render_widget(widget, area);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    if app.show_share
        && let Some(text) = app.session.share_text()
    {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Percentage(50), // Messages
                Constraint::Percentage(50), // Share text
            ])
            .split(area);

        render_messages(f, app, chunks[0]);

        let share = Paragraph::new(text)
            .wrap(Wrap { trim: false })
            .block(
                Block::default()
                    .title(" Share ")
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .style(Style::default().fg(Color::Green)),
            );
        f.render_widget(share, chunks[1]);
    } else {
        render_messages(f, app, area);
    }
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(30),
            Constraint::Percentage(25),
            Constraint::Percentage(45),
        ])
        .split(area);

    let game = app.session.game();
    let (status_text, color) = match game.status() {
        GameStatus::Playing => ("Playing".to_string(), Color::Yellow),
        GameStatus::Won => (format!("Won {}/{MAX_ROUNDS}", game.attempts()), Color::Green),
        GameStatus::Lost => (format!("Lost X/{MAX_ROUNDS}"), Color::Red),
    };
    let status = Paragraph::new(status_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD));
    f.render_widget(status, chunks[0]);

    let reported = if !game.is_over() {
        format!("Guesses: {}/{MAX_ROUNDS}", game.attempts())
    } else if game.has_reported() {
        "Reported ✓".to_string()
    } else {
        "Not reported".to_string()
    };
    f.render_widget(Paragraph::new(reported).alignment(Alignment::Center), chunks[1]);

    let help_text = if game.is_over() {
        "q: Quit | s: Share | r: Retry report"
    } else {
        "Enter: Submit | Backspace: Delete | Esc: Quit"
    };
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}
