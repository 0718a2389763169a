pub use crate::error::Error;
pub use fastqueue_core::prelude::*;

pub type Result<T = (), E = Error> = std::result::Result<T, E>;
