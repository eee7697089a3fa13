pub mod failure_log;
pub mod logging;

pub use failure_log::FailureLog;
