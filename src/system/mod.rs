//! System-level modules

pub mod logging;

pub use logging::{ConsoleTarget, init_logging};
