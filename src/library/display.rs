use crate::config::TrackDisplayField;
use crate::metadata::TrackMetadata;

/// Build a display string for a track according to the provided `fields` and separator.
///
/// This composes metadata fields in the configured order, skipping empty
/// ones, and falls back to the title when no parts were produced.
pub fn display_from_fields(track: &TrackMetadata, fields: &[TrackDisplayField], sep: &str) -> String {
    let mut parts: Vec<String> = Vec::new();

    for f in fields {
        let part = match f {
            TrackDisplayField::Title => track.title().trim().to_string(),
            TrackDisplayField::Artist => join_non_blank(track.artist()),
            TrackDisplayField::Album => track.album().trim().to_string(),
            TrackDisplayField::Genre => join_non_blank(track.genre()),
            TrackDisplayField::Year => track.year.map(|y| y.to_string()).unwrap_or_default(),
            TrackDisplayField::Filename => track
                .path()
                .file_stem()
                .and_then(|s| s.to_str())
                .map(|s| s.trim().to_string())
                .unwrap_or_default(),
            TrackDisplayField::Path => track.path().display().to_string(),
        };
        if !part.is_empty() {
            parts.push(part);
        }
    }

    if parts.is_empty() {
        track.title().to_string()
    } else {
        parts.join(sep)
    }
}

fn join_non_blank(values: &[String]) -> String {
    values
        .iter()
        .map(|v| v.trim())
        .filter(|v| !v.is_empty())
        .collect::<Vec<_>>()
        .join(", ")
}
