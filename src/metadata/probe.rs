//! Duration fallback for files whose container does not report one.
//!
//! The decoder is opened for a single call and dropped before returning, on
//! the error path as well.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use rodio::{Decoder, Source};

use crate::error::{MetadataError, Result};

/// Open `path` with an audio decoder and read the stream's total duration.
pub fn probe_duration(path: &Path) -> Result<f64> {
    let file = File::open(path)?;
    let decoder = Decoder::new(BufReader::new(file))?;

    match decoder.total_duration() {
        Some(d) if !d.is_zero() => Ok(d.as_secs_f64()),
        _ => Err(MetadataError::UnknownDuration(path.display().to_string())),
    }
}
