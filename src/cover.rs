//! Cover art lookup for a single track.
//!
//! Embedded pictures win. Without one, the track's own directory is checked
//! for a conventional cover file (`cover.jpg`, `folder.png`, ...).

use std::path::{Path, PathBuf};

use lofty::config::ParseOptions;
use lofty::file::TaggedFileExt;
use lofty::picture::{MimeType, Picture};
use lofty::probe::Probe;
use tracing::debug;
use walkdir::WalkDir;

use crate::config::CoverSettings;
use crate::error::Result;
use crate::library::scan::is_hidden;
use crate::metadata::parse_base64;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cover {
    /// First embedded picture, as a `data:image/...;base64,` URI.
    Embedded(String),
    /// Image file next to the track.
    File(PathBuf),
}

/// Find cover art for `track_path` using the default file name rules.
pub fn fetch_cover(track_path: &Path) -> Result<Option<Cover>> {
    fetch_cover_with(track_path, &CoverSettings::default())
}

/// Find cover art for `track_path`.
///
/// `Ok(None)` means nothing was found; `Err` means the track could not be
/// parsed or its directory could not be listed.
pub fn fetch_cover_with(track_path: &Path, settings: &CoverSettings) -> Result<Option<Cover>> {
    if track_path.as_os_str().is_empty() {
        return Ok(None);
    }

    if let Some(uri) = embedded_cover(track_path)? {
        debug!(path = %track_path.display(), "using embedded cover");
        return Ok(Some(Cover::Embedded(uri)));
    }

    let folder = match track_path.parent() {
        Some(p) if p.as_os_str().is_empty() => Path::new("."),
        Some(p) => p,
        None => return Ok(None),
    };
    Ok(sibling_cover(folder, settings)?.map(Cover::File))
}

fn embedded_cover(track_path: &Path) -> Result<Option<String>> {
    let tagged = Probe::open(track_path)?
        .options(ParseOptions::new().read_cover_art(true))
        .guess_file_type()?
        .read()?;

    let picture = tagged
        .primary_tag()
        .and_then(|tag| tag.pictures().first())
        .or_else(|| tagged.tags().iter().find_map(|tag| tag.pictures().first()));

    Ok(picture.map(picture_data_uri))
}

fn picture_data_uri(picture: &Picture) -> String {
    let format = picture
        .mime_type()
        .map(image_format)
        .unwrap_or_else(|| "jpeg".to_string());
    parse_base64(&format, picture.data())
}

/// Subtype used in the data URI, e.g. `png` for `image/png`.
fn image_format(mime: &MimeType) -> String {
    match mime {
        MimeType::Png => "png".to_string(),
        MimeType::Jpeg => "jpeg".to_string(),
        MimeType::Tiff => "tiff".to_string(),
        MimeType::Bmp => "bmp".to_string(),
        MimeType::Gif => "gif".to_string(),
        other => {
            let s = other.as_str();
            s.strip_prefix("image/").unwrap_or(s).to_string()
        }
    }
}

fn matches_any(value: &str, accepted: &[String]) -> bool {
    accepted
        .iter()
        .any(|a| a.trim().trim_start_matches('.').eq_ignore_ascii_case(value))
}

fn is_cover_file(path: &Path, settings: &CoverSettings) -> bool {
    let stem = path.file_stem().and_then(|s| s.to_str());
    let ext = path.extension().and_then(|s| s.to_str());
    match (stem, ext) {
        (Some(stem), Some(ext)) => {
            matches_any(stem, &settings.file_names) && matches_any(ext, &settings.extensions)
        }
        _ => false,
    }
}

/// First cover-looking file directly inside `folder`, in listing order.
fn sibling_cover(folder: &Path, settings: &CoverSettings) -> Result<Option<PathBuf>> {
    let walker = WalkDir::new(folder)
        .min_depth(1)
        .max_depth(1)
        .follow_links(false);

    for entry in walker {
        let entry = entry?;
        let path = entry.path();
        if path.is_file() && !is_hidden(path) && is_cover_file(path, settings) {
            return Ok(Some(path.to_path_buf()));
        }
    }
    Ok(None)
}
