pub mod heap;
pub mod prelude;
mod priority;
pub mod util;

pub use heap::KeyedHeap;
pub use priority::*;
