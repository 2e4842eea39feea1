//! Game state: rounds, snapshots and players

mod profile;
mod round;
mod snapshot;

pub use profile::{House, Player, ProfileError};
pub use round::{Game, GameStatus, GuessError, MAX_ROUNDS, RoundState, SubmitOutcome};
pub use snapshot::{RestoreOutcome, Snapshot, SnapshotError};
