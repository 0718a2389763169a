//! A priority queue that yields entries by descending priority and, among equal priorities, in
//! insertion order.

mod error;
pub mod persist;
mod prelude;
mod queue;
pub mod types;

pub use self::error::Error;
pub use self::queue::*;
pub use self::types::*;
pub use fastqueue_core::Priority;

/// Environment variable holding the log filter, in `env_logger` syntax (e.g. `fastqueue=trace`).
pub const LOG_VAR: &str = "FASTQUEUE_LOG";

/// Install a logger for the `log` records emitted by the queue. Returns false if a logger was
/// already installed, in which case that one is kept.
pub fn initialize_logger() -> bool {
    use std::time::Instant;

    lazy_static::lazy_static! {
        static ref START_TIMING: Instant = Instant::now();
    }

    let _ = *START_TIMING;

    env_logger::Builder::from_env(env_logger::Env::new().filter(LOG_VAR))
        .format(|formatter, record| {
            use std::io::Write;

            writeln!(
                formatter,
                "[{:.06} {}] {}: {}",
                START_TIMING.elapsed().as_secs_f64(),
                record.module_path().unwrap_or("?"),
                record.level(),
                record.args(),
            )
        })
        .try_init()
        .is_ok()
}
