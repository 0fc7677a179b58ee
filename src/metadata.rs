//! Track metadata: extraction, defaults and the search projection.
//!
//! `get_metadata` is the entry point used by library scans. It reads the tag
//! container with `lofty`, falls back to a decoder probe when the container
//! reports no duration, and always returns a usable record.

mod extract;
mod model;
mod normalize;
mod probe;

pub use extract::*;
pub use model::*;
pub use normalize::*;
pub use probe::probe_duration;

#[cfg(test)]
mod tests;
