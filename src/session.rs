//! A player's session for the current play period
//!
//! Wires the pure game core to storage and reporting. Every mutation is
//! saved immediately; a failed save is logged and play continues.

use crate::core::PlayPeriod;
use crate::game::{Game, GuessError, Player, RestoreOutcome, SubmitOutcome};
use crate::report::{self, ReportError, ReportSink, ReportStatus};
use crate::storage::FileStore;
use crate::target::TargetResolver;
use crate::wordlists::Lexicon;
use chrono::{NaiveDate, Utc};

pub struct Session<'a> {
    player: Player,
    period: PlayPeriod,
    game: Game,
    lexicon: &'a Lexicon,
    store: FileStore,
    key: String,
    restore: RestoreOutcome,
}

impl<'a> Session<'a> {
    /// Start or resume the game of `player` for the period containing `date`
    #[must_use]
    pub fn start(
        player: Player,
        resolver: &TargetResolver,
        lexicon: &'a Lexicon,
        store: FileStore,
        date: NaiveDate,
    ) -> Self {
        let target = resolver.resolve(date);
        let period = PlayPeriod::of(date);
        let key = player.storage_key();

        let (game, restore) = Game::restore(target, store.load_snapshot(&key));
        match &restore {
            RestoreOutcome::Fresh => tracing::info!(%period, player = %player, "new game"),
            RestoreOutcome::Restored => {
                tracing::info!(%period, player = %player, attempts = game.attempts(), "game resumed");
            }
            RestoreOutcome::Discarded(reason) => {
                tracing::warn!(%period, player = %player, %reason, "snapshot discarded");
            }
        }

        let session = Self {
            player,
            period,
            game,
            lexicon,
            store,
            key,
            restore,
        };
        session.persist();
        session
    }

    #[must_use]
    pub const fn player(&self) -> &Player {
        &self.player
    }

    #[must_use]
    pub const fn period(&self) -> PlayPeriod {
        self.period
    }

    #[must_use]
    pub const fn game(&self) -> &Game {
        &self.game
    }

    /// How the game was obtained at start
    #[must_use]
    pub const fn restore_outcome(&self) -> &RestoreOutcome {
        &self.restore
    }

    /// Add a letter to the pending input
    pub fn type_char(&mut self, c: char) -> bool {
        let changed = self.game.append_char(c);
        if changed {
            self.persist();
        }
        changed
    }

    /// Remove the last pending letter
    pub fn delete_char(&mut self) -> bool {
        let changed = self.game.delete_char();
        if changed {
            self.persist();
        }
        changed
    }

    /// Replace the pending input with `text`, letter by letter
    ///
    /// Used by the line-based mode, where a whole word is entered at once.
    pub fn set_input(&mut self, text: &str) {
        while self.game.delete_char() {}
        for c in text.chars() {
            self.game.append_char(c);
        }
        self.persist();
    }

    /// Submit the pending input
    ///
    /// # Errors
    ///
    /// Returns the `GuessError` of a rejected submission; nothing changes.
    pub fn submit(&mut self) -> Result<SubmitOutcome, GuessError> {
        let outcome = self.game.submit(self.lexicon)?;
        self.persist();
        Ok(outcome)
    }

    /// Report the result if the game is over and not yet reported
    ///
    /// # Errors
    ///
    /// Returns the sink's error; the game stays finished and unreported.
    pub fn report<S: ReportSink + ?Sized>(&mut self, sink: &S) -> Result<ReportStatus, ReportError> {
        let status = report::report_once(&mut self.game, &self.player, self.period, sink, Utc::now());
        match &status {
            Ok(ReportStatus::Sent) => self.persist(),
            Err(e) => tracing::warn!(error = %e, "reporting failed"),
            Ok(_) => {}
        }
        status
    }

    /// Share text, once the game is over
    #[must_use]
    pub fn share_text(&self) -> Option<String> {
        report::share_text(self.period, &self.game)
    }

    fn persist(&self) {
        let snapshot = self.game.snapshot(Utc::now());
        if let Err(e) = self.store.save_snapshot(&self.key, &snapshot) {
            tracing::warn!(key = %self.key, error = %e, "failed to save snapshot");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{GameStatus, House, SnapshotError};
    use crate::report::ResultSummary;
    use crate::target::{TargetPolicy, WeeklyRotation};
    use crate::wordlists::loader::words_from_slice;
    use std::cell::Cell;

    struct CountingSink {
        calls: Cell<usize>,
        fail: bool,
    }

    impl ReportSink for CountingSink {
        fn submit(&self, _summary: &ResultSummary) -> Result<(), ReportError> {
            self.calls.set(self.calls.get() + 1);
            if self.fail {
                Err(ReportError::Rejected { status: 503 })
            } else {
                Ok(())
            }
        }
    }

    fn sink(fail: bool) -> CountingSink {
        CountingSink {
            calls: Cell::new(0),
            fail,
        }
    }

    fn resolver() -> TargetResolver {
        // Week 5 -> HARRY, week 6 -> WANDS
        let words = words_from_slice(&["WITCH", "BROOM", "STAGS", "SNAKE", "HARRY", "WANDS"]);
        TargetResolver::new(TargetPolicy::Weekly(WeeklyRotation::new(words).unwrap()))
    }

    fn lexicon() -> Lexicon {
        Lexicon::strict(words_from_slice(&["CRANE", "HARPY", "SLATE", "GHOST", "TROLL", "MAGIC"]))
            .with_words(resolver().candidates())
    }

    fn player() -> Player {
        Player::new("Harry Potter", House::Gryffindor).unwrap()
    }

    fn week5() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 1, 29).unwrap()
    }

    fn week6() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 2, 3).unwrap()
    }

    fn enter(session: &mut Session, word: &str) -> Result<SubmitOutcome, GuessError> {
        for c in word.chars() {
            session.type_char(c);
        }
        session.submit()
    }

    #[test]
    fn fresh_session() {
        let dir = tempfile::tempdir().unwrap();
        let lexicon = lexicon();
        let session = Session::start(player(), &resolver(), &lexicon, FileStore::new(dir.path()), week5());

        assert_eq!(session.restore_outcome(), &RestoreOutcome::Fresh);
        assert_eq!(session.game().target().text(), "HARRY");
        assert_eq!(session.period().to_string(), "2026-W05");
        assert_eq!(session.player().name(), "Harry Potter");
    }

    #[test]
    fn progress_survives_restart() {
        let dir = tempfile::tempdir().unwrap();
        let lexicon = lexicon();

        let mut session = Session::start(player(), &resolver(), &lexicon, FileStore::new(dir.path()), week5());
        enter(&mut session, "CRANE").unwrap();
        session.type_char('h');
        session.type_char('a');
        drop(session);

        let session = Session::start(player(), &resolver(), &lexicon, FileStore::new(dir.path()), week5());
        assert_eq!(session.restore_outcome(), &RestoreOutcome::Restored);
        assert_eq!(session.game().attempts(), 1);
        assert_eq!(session.game().pending_input(), "HA");
    }

    #[test]
    fn new_week_discards_old_snapshot() {
        let dir = tempfile::tempdir().unwrap();
        let lexicon = lexicon();

        let mut session = Session::start(player(), &resolver(), &lexicon, FileStore::new(dir.path()), week5());
        enter(&mut session, "CRANE").unwrap();
        drop(session);

        let session = Session::start(player(), &resolver(), &lexicon, FileStore::new(dir.path()), week6());
        assert_eq!(
            session.restore_outcome(),
            &RestoreOutcome::Discarded(SnapshotError::Stale {
                found: "HARRY".to_string(),
                expected: "WANDS".to_string(),
            })
        );
        assert_eq!(session.game().status(), GameStatus::Playing);
        assert!(session.game().history().is_empty());
    }

    #[test]
    fn players_do_not_share_snapshots() {
        let dir = tempfile::tempdir().unwrap();
        let lexicon = lexicon();

        let mut session = Session::start(player(), &resolver(), &lexicon, FileStore::new(dir.path()), week5());
        enter(&mut session, "CRANE").unwrap();

        let other = Player::new("Draco", House::Slytherin).unwrap();
        let session = Session::start(other, &resolver(), &lexicon, FileStore::new(dir.path()), week5());
        assert_eq!(session.restore_outcome(), &RestoreOutcome::Fresh);
    }

    #[test]
    fn rejected_guess_keeps_state() {
        let dir = tempfile::tempdir().unwrap();
        let lexicon = lexicon();
        let mut session = Session::start(player(), &resolver(), &lexicon, FileStore::new(dir.path()), week5());

        let err = enter(&mut session, "QQQQQ").unwrap_err();
        assert!(matches!(err, GuessError::UnknownWord { row: 0, .. }));
        assert_eq!(session.game().attempts(), 0);
        assert_eq!(session.game().pending_input(), "QQQQQ");
    }

    #[test]
    fn set_input_replaces_pending_letters() {
        let dir = tempfile::tempdir().unwrap();
        let lexicon = lexicon();
        let mut session = Session::start(player(), &resolver(), &lexicon, FileStore::new(dir.path()), week5());

        session.set_input("slx");
        session.set_input("harpy");
        assert_eq!(session.game().pending_input(), "HARPY");
        assert!(session.delete_char());
        assert_eq!(session.game().pending_input(), "HARP");
    }

    #[test]
    fn report_once_and_persist_flag() {
        let dir = tempfile::tempdir().unwrap();
        let lexicon = lexicon();
        let sink = sink(false);

        let mut session = Session::start(player(), &resolver(), &lexicon, FileStore::new(dir.path()), week5());
        assert_eq!(session.report(&sink).unwrap(), ReportStatus::NotFinished);

        enter(&mut session, "HARRY").unwrap();
        assert_eq!(session.report(&sink).unwrap(), ReportStatus::Sent);
        assert_eq!(session.report(&sink).unwrap(), ReportStatus::AlreadyReported);
        drop(session);

        let mut session = Session::start(player(), &resolver(), &lexicon, FileStore::new(dir.path()), week5());
        assert!(session.game().has_reported());
        assert_eq!(session.report(&sink).unwrap(), ReportStatus::AlreadyReported);
        assert_eq!(sink.calls.get(), 1);
    }

    #[test]
    fn failed_report_is_retryable() {
        let dir = tempfile::tempdir().unwrap();
        let lexicon = lexicon();
        let mut session = Session::start(player(), &resolver(), &lexicon, FileStore::new(dir.path()), week5());
        enter(&mut session, "HARRY").unwrap();

        assert!(session.report(&sink(true)).is_err());
        assert!(session.game().is_winner());
        assert!(!session.game().has_reported());

        assert_eq!(session.report(&sink(false)).unwrap(), ReportStatus::Sent);
    }

    #[test]
    fn share_text_after_loss() {
        let dir = tempfile::tempdir().unwrap();
        let lexicon = lexicon();
        let mut session = Session::start(player(), &resolver(), &lexicon, FileStore::new(dir.path()), week5());
        assert!(session.share_text().is_none());

        for word in ["CRANE", "SLATE", "GHOST", "TROLL", "MAGIC", "HARPY"] {
            enter(&mut session, word).unwrap();
        }

        assert_eq!(session.game().status(), GameStatus::Lost);
        let text = session.share_text().unwrap();
        assert!(text.contains("KW 5"));
        assert!(text.contains("X/6"));
    }
}
