//! Collection of utility functions.

pub use self::counter::*;

mod counter;
