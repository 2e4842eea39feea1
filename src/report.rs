//! Result reporting and share text
//!
//! A finished game is reported at most once. The sink decides the transport;
//! a failed report leaves the game untouched so the caller can try again.

use crate::core::PlayPeriod;
use crate::game::{Game, House, MAX_ROUNDS, Player};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

/// Title line prefix of the share text
pub const SHARE_TITLE: &str = "Hauspokal Wordle";

/// Structured result of a finished game
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultSummary {
    pub player: String,
    pub house: House,
    /// Period identifier, e.g. "2026-W05"
    pub period: String,
    pub target_word: String,
    pub attempts: usize,
    pub won: bool,
    /// One glyph row per accepted guess
    pub grid: Vec<String>,
    pub timestamp: DateTime<Utc>,
}

impl ResultSummary {
    /// Summarize a finished game; `None` while it is still being played
    #[must_use]
    pub fn from_game(
        player: &Player,
        period: PlayPeriod,
        game: &Game,
        now: DateTime<Utc>,
    ) -> Option<Self> {
        if !game.is_over() {
            return None;
        }

        Some(Self {
            player: player.name().to_string(),
            house: player.house(),
            period: period.to_string(),
            target_word: game.target().text().to_string(),
            attempts: game.attempts(),
            won: game.is_winner(),
            grid: glyph_rows(game),
            timestamp: now,
        })
    }
}

fn glyph_rows(game: &Game) -> Vec<String> {
    game.rows()
        .iter()
        .map(|(_, feedback)| feedback.glyphs())
        .collect()
}

/// Human-readable result, available once the game is over
///
/// ```text
/// Hauspokal Wordle KW 5
/// Attempts: 3/6
///
/// ⬛️🟧⬛️⬛️⬛️
/// 🟩🟩🟩⬛️🟩
/// 🟩🟩🟩🟩🟩
/// ```
#[must_use]
pub fn share_text(period: PlayPeriod, game: &Game) -> Option<String> {
    if !game.is_over() {
        return None;
    }

    let attempts = if game.is_winner() {
        game.attempts().to_string()
    } else {
        "X".to_string()
    };

    Some(format!(
        "{SHARE_TITLE} {}\nAttempts: {attempts}/{MAX_ROUNDS}\n\n{}",
        period.label(),
        glyph_rows(game).join("\n")
    ))
}

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("could not reach the result webhook: {0}")]
    Transport(String),
    #[error("result webhook answered with status {status}")]
    Rejected { status: u16 },
}

impl From<reqwest::Error> for ReportError {
    fn from(e: reqwest::Error) -> Self {
        match e.status() {
            Some(status) => Self::Rejected {
                status: status.as_u16(),
            },
            None => Self::Transport(e.to_string()),
        }
    }
}

/// Destination for finished-game results
pub trait ReportSink {
    /// Deliver one summary
    ///
    /// # Errors
    ///
    /// Returns `ReportError` if the result could not be delivered.
    fn submit(&self, summary: &ResultSummary) -> Result<(), ReportError>;
}

/// Webhook request body: the summary plus a chat-friendly text
#[derive(Serialize)]
struct WebhookPayload<'a> {
    content: String,
    #[serde(flatten)]
    summary: &'a ResultSummary,
}

/// Posts results as JSON to a webhook URL
#[derive(Debug, Clone)]
pub struct WebhookSink {
    client: reqwest::blocking::Client,
    url: String,
}

impl WebhookSink {
    /// Create a sink with a request timeout
    ///
    /// # Errors
    ///
    /// Returns `ReportError::Transport` if the HTTP client cannot be built.
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self, ReportError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()?;
        Ok(Self {
            client,
            url: url.into(),
        })
    }
}

impl ReportSink for WebhookSink {
    fn submit(&self, summary: &ResultSummary) -> Result<(), ReportError> {
        let attempts = if summary.won {
            summary.attempts.to_string()
        } else {
            "X".to_string()
        };
        let payload = WebhookPayload {
            content: format!(
                "{} ({}) {}: {attempts}/{MAX_ROUNDS}\n{}",
                summary.player,
                summary.house,
                summary.period,
                summary.grid.join("\n")
            ),
            summary,
        };

        self.client
            .post(&self.url)
            .json(&payload)
            .send()?
            .error_for_status()?;

        tracing::info!(url = %self.url, period = %summary.period, "result reported");
        Ok(())
    }
}

/// Outcome of a reporting attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportStatus {
    /// Game still running, nothing sent
    NotFinished,
    /// Already reported earlier, nothing sent
    AlreadyReported,
    /// Delivered now
    Sent,
}

/// Report a finished game exactly once
///
/// On success the game's reported flag is set; on failure it stays unset and
/// the error is returned for the caller to surface. No retries happen here.
///
/// # Errors
///
/// Returns the sink's `ReportError` when delivery fails.
pub fn report_once<S: ReportSink + ?Sized>(
    game: &mut Game,
    player: &Player,
    period: PlayPeriod,
    sink: &S,
    now: DateTime<Utc>,
) -> Result<ReportStatus, ReportError> {
    if game.has_reported() {
        return Ok(ReportStatus::AlreadyReported);
    }
    let Some(summary) = ResultSummary::from_game(player, period, game, now) else {
        return Ok(ReportStatus::NotFinished);
    };

    sink.submit(&summary)?;
    game.mark_reported();
    Ok(ReportStatus::Sent)
}
