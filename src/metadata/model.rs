use std::path::{Path, PathBuf};

use serde::Serialize;

use super::normalize::lower_for_search;

pub const DEFAULT_ARTIST: &str = "Unknown artist";
pub const DEFAULT_ALBUM: &str = "Unknown";

/// A `{no, of}` position such as "track 3 of 12".
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Serialize)]
pub struct NumberPair {
    pub no: u32,
    pub of: u32,
}

/// Lowercased, accent-stripped copy of the searchable fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LoweredMetas {
    pub artist: Vec<String>,
    pub album: String,
    pub title: String,
    pub genre: Vec<String>,
}

/// Build the search projection for the given tag values.
pub fn get_lowered_meta(
    artist: &[String],
    album: &str,
    title: &str,
    genre: &[String],
) -> LoweredMetas {
    LoweredMetas {
        artist: artist.iter().map(|a| lower_for_search(a)).collect(),
        album: lower_for_search(album),
        title: lower_for_search(title),
        genre: genre.iter().map(|g| lower_for_search(g)).collect(),
    }
}

/// Tag values read from a file. `None` means the file did not provide it,
/// and the default is used instead.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParsedMetadata {
    pub title: Option<String>,
    pub artist: Option<Vec<String>>,
    pub album: Option<String>,
    pub genre: Option<Vec<String>>,
    pub year: Option<u32>,
    pub track: Option<NumberPair>,
    pub disk: Option<NumberPair>,
    pub duration: Option<f64>,
}

#[cfg(test)]
impl ParsedMetadata {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Canonical record for one audio file.
///
/// The searchable fields are only writable through [`TrackMetadata::merge`]
/// and [`TrackMetadata::retag`], which keep `lowered_metas` in step with them.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackMetadata {
    path: PathBuf,
    title: String,
    artist: Vec<String>,
    album: String,
    genre: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<u32>,
    pub duration: f64,
    pub play_count: u64,
    pub track: NumberPair,
    pub disk: NumberPair,
    lowered_metas: LoweredMetas,
}

impl Default for TrackMetadata {
    fn default() -> Self {
        let artist = vec![DEFAULT_ARTIST.to_string()];
        let album = DEFAULT_ALBUM.to_string();
        let lowered_metas = get_lowered_meta(&artist, &album, "", &[]);
        Self {
            path: PathBuf::new(),
            title: String::new(),
            artist,
            album,
            genre: Vec::new(),
            year: None,
            duration: 0.0,
            play_count: 0,
            track: NumberPair::default(),
            disk: NumberPair::default(),
            lowered_metas,
        }
    }
}

impl TrackMetadata {
    /// Layer `parsed` over the defaults, then pin `path`.
    pub fn merge(path: &Path, parsed: ParsedMetadata) -> Self {
        let defaults = Self::default();
        let mut metadata = Self {
            path: path.to_path_buf(),
            year: parsed.year.or(defaults.year),
            duration: parsed.duration.unwrap_or(defaults.duration),
            play_count: defaults.play_count,
            track: parsed.track.unwrap_or(defaults.track),
            disk: parsed.disk.unwrap_or(defaults.disk),
            ..defaults
        };
        metadata.retag(parsed.title, parsed.artist, parsed.album, parsed.genre);
        metadata
    }

    /// Replace any of the searchable fields and refresh the search projection.
    pub fn retag(
        &mut self,
        title: Option<String>,
        artist: Option<Vec<String>>,
        album: Option<String>,
        genre: Option<Vec<String>>,
    ) {
        if let Some(title) = title {
            self.title = title;
        }
        if let Some(artist) = artist {
            self.artist = artist;
        }
        if let Some(album) = album {
            self.album = album;
        }
        if let Some(genre) = genre {
            self.genre = genre;
        }
        self.lowered_metas = get_lowered_meta(&self.artist, &self.album, &self.title, &self.genre);
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn artist(&self) -> &[String] {
        &self.artist
    }

    pub fn album(&self) -> &str {
        &self.album
    }

    pub fn genre(&self) -> &[String] {
        &self.genre
    }

    pub fn lowered_metas(&self) -> &LoweredMetas {
        &self.lowered_metas
    }
}
