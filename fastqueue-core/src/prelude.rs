pub use itertools::{all, any, enumerate, Itertools as _};
pub use log::{debug, error, info, trace, warn};
pub use std::cmp::{max, min, Ordering};
pub use std::convert::{TryFrom, TryInto};
pub use std::error::Error as StdError;
pub use std::iter::FromIterator;
pub use std::mem::{replace, swap, take};
pub use thiserror::Error;

pub type HashSet<K> = std::collections::HashSet<K, fxhash::FxBuildHasher>;
pub type HashMap<K, V> = std::collections::HashMap<K, V, fxhash::FxBuildHasher>;

#[inline(always)]
pub fn default<T: Default>() -> T {
    T::default()
}
