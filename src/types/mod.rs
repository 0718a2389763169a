//! Configuration and result types shared by the queue and its persisted form.
mod config;
mod flags;

pub use self::config::*;
pub use self::flags::*;
