use serde::Deserialize;

/// Top-level settings loaded from `config.toml`.
///
/// File format: TOML
/// Default path (Linux/XDG): `$XDG_CONFIG_HOME/tagshelf/config.toml` or `~/.config/tagshelf/config.toml`
///
/// Precedence (highest wins):
/// 1) Environment variables (prefix `TAGSHELF__`, `__` as nested separator)
/// 2) Config file (if present)
/// 3) Struct defaults
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub library: LibrarySettings,
    pub metadata: MetadataSettings,
    pub cover: CoverSettings,
    pub log: LogSettings,
}

#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FolderMatch {
    /// A folder is covered when another folder's path string is a substring of it.
    /// `/music2` counts as covered by `/music`.
    #[default]
    Substring,
    /// A folder is covered only by a true ancestor, compared component by component.
    #[serde(alias = "path_prefix", alias = "prefix")]
    PathPrefix,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TrackDisplayField {
    Title,
    Artist,
    Album,
    Genre,
    Year,
    Filename,
    Path,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LibrarySettings {
    /// Library roots scanned when no folder is given on the command line.
    pub folders: Vec<String>,
    /// File extensions to treat as audio (case-insensitive, without dot).
    pub extensions: Vec<String>,
    /// Whether to follow symlinks during scanning.
    pub follow_links: bool,
    /// Whether to include hidden files/directories (dotfiles).
    pub include_hidden: bool,
    /// Whether to recurse into subdirectories.
    pub recursive: bool,
    /// Optional cap on directory recursion depth.
    pub max_depth: Option<usize>,
    /// How nested roots are detected before scanning.
    pub folder_match: FolderMatch,

    /// Which fields build the display line of a track.
    ///
    /// Example: ["artist", "title"] -> "Artist - Title"
    pub display_fields: Vec<TrackDisplayField>,
    /// Separator used to join `display_fields`.
    pub display_separator: String,
}

impl Default for LibrarySettings {
    fn default() -> Self {
        Self {
            folders: Vec::new(),
            extensions: ["mp3", "flac", "wav", "ogg", "m4a", "aac", "opus"]
                .into_iter()
                .map(String::from)
                .collect(),
            follow_links: true,
            include_hidden: false,
            recursive: true,
            max_depth: None,
            folder_match: FolderMatch::Substring,
            display_fields: vec![TrackDisplayField::Artist, TrackDisplayField::Title],
            display_separator: " - ".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct MetadataSettings {
    /// Decode the file to find its duration when the container reports none.
    pub probe_duration: bool,
}

impl Default for MetadataSettings {
    fn default() -> Self {
        Self {
            probe_duration: true,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CoverSettings {
    /// Base names (case-insensitive, no extension) accepted as cover images.
    pub file_names: Vec<String>,
    /// Image extensions (case-insensitive, without dot).
    pub extensions: Vec<String>,
}

impl Default for CoverSettings {
    fn default() -> Self {
        Self {
            file_names: ["album", "albumart", "folder", "cover"]
                .into_iter()
                .map(String::from)
                .collect(),
            extensions: ["png", "jpg", "bmp", "gif"]
                .into_iter()
                .map(String::from)
                .collect(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LogSettings {
    /// `tracing` filter directive, overridden by `RUST_LOG`.
    pub filter: String,
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            filter: "warn".to_string(),
        }
    }
}
