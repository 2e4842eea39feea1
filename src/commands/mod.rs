//! Command implementations

pub mod profile;
pub mod result;
pub mod simple;

pub use profile::{require_player, run_logout, run_profile, run_register};
pub use result::{Delivery, deliver, run_report, run_share, run_status};
pub use simple::{SimpleCommand, run_simple};
