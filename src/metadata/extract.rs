use std::fs;
use std::path::Path;

use lofty::config::ParseOptions;
use lofty::file::{AudioFile, TaggedFile, TaggedFileExt};
use lofty::probe::Probe;
use lofty::tag::{Accessor, ItemKey, Tag};
use tracing::{debug, warn};

use crate::config::MetadataSettings;
use crate::error::{MetadataError, Result};

use super::model::{NumberPair, ParsedMetadata, TrackMetadata};
use super::probe::probe_duration;

/// Tag fields as the container reports them, before any fallback.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CommonTags {
    pub title: Option<String>,
    /// Every artist value when the tag carries more than one.
    pub artists: Vec<String>,
    pub artist: Option<String>,
    pub album_artist: Option<String>,
    pub album: Option<String>,
    pub genre: Vec<String>,
    pub year: Option<u32>,
    pub track: (Option<u32>, Option<u32>),
    pub disk: (Option<u32>, Option<u32>),
}

/// Container-level facts.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormatInfo {
    /// Seconds, `None` when the container does not know.
    pub duration: Option<f64>,
    /// Bytes on disk at read time. Only reported in the debug log.
    pub file_size: u64,
}

/// Result of one tag-container parse.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawMetadata {
    pub common: CommonTags,
    pub format: FormatInfo,
}

impl RawMetadata {
    fn from_tagged(tagged: &TaggedFile, file_size: u64) -> Self {
        let duration = tagged.properties().duration().as_secs_f64();
        let common = tagged
            .primary_tag()
            .or_else(|| tagged.first_tag())
            .map(common_tags)
            .unwrap_or_default();

        Self {
            common,
            format: FormatInfo {
                duration: (duration > 0.0).then_some(duration),
                file_size,
            },
        }
    }
}

fn non_blank(s: &str) -> Option<String> {
    let s = s.trim();
    (!s.is_empty()).then(|| s.to_string())
}

fn non_blank_all<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    values.filter_map(non_blank).collect()
}

/// Leading four digits of a year or full date value (`1999`, `1999-04-01`).
fn parse_year(value: &str) -> Option<u32> {
    let digits: String = value.trim().chars().take(4).collect();
    if digits.len() == 4 && digits.chars().all(|c| c.is_ascii_digit()) {
        digits.parse().ok()
    } else {
        None
    }
}

fn common_tags(tag: &Tag) -> CommonTags {
    let artists = non_blank_all(tag.get_strings(&ItemKey::TrackArtist));

    CommonTags {
        title: tag.title().and_then(|v| non_blank(&v)),
        artists: if artists.len() > 1 { artists } else { Vec::new() },
        artist: tag.artist().and_then(|v| non_blank(&v)),
        album_artist: tag.get_string(&ItemKey::AlbumArtist).and_then(non_blank),
        album: tag.album().and_then(|v| non_blank(&v)),
        genre: non_blank_all(tag.get_strings(&ItemKey::Genre)),
        year: tag
            .get_string(&ItemKey::Year)
            .or_else(|| tag.get_string(&ItemKey::RecordingDate))
            .and_then(parse_year),
        track: (tag.track(), tag.track_total()),
        disk: (tag.disk(), tag.disk_total()),
    }
}

/// Parse the tag container at `path`, leaving embedded pictures undecoded.
pub fn read_raw_metadata(path: &Path, file_size: u64) -> Result<RawMetadata> {
    let options = ParseOptions::new()
        .read_properties(true)
        .read_cover_art(false);

    let tagged = Probe::open(path)?
        .options(options)
        .guess_file_type()?
        .read()?;

    Ok(RawMetadata::from_tagged(&tagged, file_size))
}

/// File name including its extension, as shown for untagged tracks.
pub fn file_base_name(path: &Path) -> String {
    path.file_name()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default()
}

fn number_pair(pair: (Option<u32>, Option<u32>)) -> Option<NumberPair> {
    match pair {
        (None, None) => None,
        (no, of) => Some(NumberPair {
            no: no.unwrap_or(0),
            of: of.unwrap_or(0),
        }),
    }
}

/// Map a parse result onto canonical fields.
///
/// With no parse result every field is absent. Artists fall back from the
/// multi-value list to the single artist, then to the album artist. The
/// title falls back to the file base name.
pub fn parse_music_metadata(raw: Option<&RawMetadata>, track_path: &Path) -> ParsedMetadata {
    let Some(RawMetadata { common, format }) = raw else {
        return ParsedMetadata::default();
    };

    let artist = if !common.artists.is_empty() {
        Some(common.artists.clone())
    } else {
        common
            .artist
            .clone()
            .or_else(|| common.album_artist.clone())
            .map(|a| vec![a])
    };

    ParsedMetadata {
        title: Some(
            common
                .title
                .clone()
                .unwrap_or_else(|| file_base_name(track_path)),
        ),
        artist,
        album: common.album.clone(),
        genre: (!common.genre.is_empty()).then(|| common.genre.clone()),
        year: common.year,
        track: number_pair(common.track),
        disk: number_pair(common.disk),
        duration: format.duration,
    }
}

/// Read metadata for `track_path` with default settings.
pub fn get_metadata(track_path: &Path) -> TrackMetadata {
    get_metadata_with(track_path, &MetadataSettings::default())
}

/// Read metadata for `track_path`.
///
/// Never fails: unreadable files come back as defaults with a
/// filename-derived title, and every failure is logged as a warning.
pub fn get_metadata_with(track_path: &Path, settings: &MetadataSettings) -> TrackMetadata {
    let raw = fs::metadata(track_path)
        .map_err(MetadataError::from)
        .and_then(|stat| read_raw_metadata(track_path, stat.len()));

    let raw = match raw {
        Ok(raw) => {
            debug!(path = %track_path.display(), size = raw.format.file_size, "read tags");
            Some(raw)
        }
        Err(err) => {
            warn!(path = %track_path.display(), error = %err, "failed to read tags");
            None
        }
    };

    let parsed = parse_music_metadata(raw.as_ref(), track_path);
    let mut metadata = TrackMetadata::merge(track_path, parsed);

    if metadata.title().is_empty() {
        metadata.retag(Some(file_base_name(track_path)), None, None, None);
    }

    if settings.probe_duration {
        fill_missing_duration(&mut metadata, track_path);
    }

    metadata
}

/// Decode `track_path` for a duration when the container gave none.
pub(super) fn fill_missing_duration(metadata: &mut TrackMetadata, track_path: &Path) {
    if metadata.duration > 0.0 {
        return;
    }
    match probe_duration(track_path) {
        Ok(duration) => metadata.duration = duration,
        Err(err) => {
            warn!(path = %track_path.display(), error = %err, "failed to probe duration");
        }
    }
}
