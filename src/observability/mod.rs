//! Observability for brewdex: structured request logging.

pub mod logger;

pub use logger::{Logger, Severity};
