//! Library scanning and the views built on top of scanned tracks.
//!
//! `scan` walks deduplicated roots and extracts metadata per audio file;
//! `display` and `search` work from the resulting records.

mod display;
pub(crate) mod scan;
mod search;

pub use display::display_from_fields;
pub use scan::scan;
pub use search::{fuzzy_match_positions, search, years};
