//! Status, share and report commands for the current play period

use crate::output::{print_board, print_report_status, print_share, print_status};
use crate::report::{ReportError, ReportSink, ReportStatus};
use crate::session::Session;
use anyhow::{Result, bail};

/// Outcome of trying to deliver the result of a session
#[derive(Debug)]
pub enum Delivery {
    /// No webhook is configured
    NoSink,
    Done(ReportStatus),
    Failed(ReportError),
}

/// Report the session's result through `sink`, if there is one
///
/// Never fails: a delivery error is handed back so the caller can show it and
/// offer a retry.
pub fn deliver(session: &mut Session, sink: Option<&dyn ReportSink>) -> Delivery {
    let Some(sink) = sink else {
        return Delivery::NoSink;
    };
    match session.report(sink) {
        Ok(status) => Delivery::Done(status),
        Err(e) => Delivery::Failed(e),
    }
}

/// Print the board and status of this period's game
pub fn run_status(session: &Session) {
    print_board(session);
    print_status(session);
}

/// Print the share text of this period's game
pub fn run_share(session: &Session) {
    print_share(session);
}

/// Report a finished, unreported game
///
/// # Errors
///
/// Returns an error if no webhook is configured or delivery fails.
pub fn run_report(session: &mut Session, sink: Option<&dyn ReportSink>) -> Result<()> {
    match deliver(session, sink) {
        Delivery::NoSink => bail!("no webhook configured; set report.webhook_url in the config"),
        Delivery::Done(status) => {
            print_report_status(status);
            Ok(())
        }
        Delivery::Failed(e) => Err(e.into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;
    use crate::game::{House, Player};
    use crate::report::ResultSummary;
    use crate::storage::FileStore;
    use crate::target::{TargetPolicy, TargetResolver};
    use crate::wordlists::Lexicon;
    use chrono::NaiveDate;

    struct AcceptingSink;

    impl ReportSink for AcceptingSink {
        fn submit(&self, _summary: &ResultSummary) -> Result<(), ReportError> {
            Ok(())
        }
    }

    fn finished_session<'a>(dir: &std::path::Path, lexicon: &'a Lexicon) -> Session<'a> {
        let resolver = TargetResolver::new(TargetPolicy::Fixed(Word::new("SNAPE").unwrap()));
        let player = Player::new("Neville", House::Gryffindor).unwrap();
        let date = NaiveDate::from_ymd_opt(2026, 3, 2).unwrap();
        let mut session = Session::start(player, &resolver, lexicon, FileStore::new(dir), date);
        session.set_input("snape");
        session.submit().unwrap();
        session
    }

    #[test]
    fn deliver_without_sink_leaves_game_unreported() {
        let dir = tempfile::tempdir().unwrap();
        let lexicon = Lexicon::Permissive;
        let mut session = finished_session(dir.path(), &lexicon);

        assert!(matches!(deliver(&mut session, None), Delivery::NoSink));
        assert!(!session.game().has_reported());
        assert!(run_report(&mut session, None).is_err());
    }

    #[test]
    fn deliver_with_sink_reports_once() {
        let dir = tempfile::tempdir().unwrap();
        let lexicon = Lexicon::Permissive;
        let mut session = finished_session(dir.path(), &lexicon);

        assert!(matches!(
            deliver(&mut session, Some(&AcceptingSink)),
            Delivery::Done(ReportStatus::Sent)
        ));
        assert!(matches!(
            deliver(&mut session, Some(&AcceptingSink)),
            Delivery::Done(ReportStatus::AlreadyReported)
        ));
        assert!(run_report(&mut session, Some(&AcceptingSink)).is_ok());
    }
}
