// Cache module for the gist menu.
// Keeps the last built menu in memory for the lifetime of the process.

pub mod clock;
pub mod store;

pub use clock::{Clock, SystemClock};
pub use store::{CacheEntry, MenuCache, STALENESS_WINDOW};
