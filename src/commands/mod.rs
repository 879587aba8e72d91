//! Command implementations

pub mod audit;
pub mod check;
pub mod play;
pub mod split;

pub use audit::{AuditResult, run_audit};
pub use check::{CheckResult, check_guess};
pub use play::run_play;
pub use split::{SplitResult, split_word};
