use std::cmp::Ordering;
use std::path::Path;

use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::config::{LibrarySettings, MetadataSettings, Settings};
use crate::folders::remove_useless_folders_with;
use crate::metadata::{TrackMetadata, get_metadata_with};

fn is_audio_file(path: &Path, settings: &LibrarySettings) -> bool {
    let exts: Vec<String> = settings
        .extensions
        .iter()
        .map(|e| e.trim().trim_start_matches('.').to_ascii_lowercase())
        .filter(|e| !e.is_empty())
        .collect();

    path.extension()
        .and_then(|s| s.to_str())
        .map(|ext| {
            let ext = ext.to_ascii_lowercase();
            exts.iter().any(|e| e == &ext)
        })
        .unwrap_or(false)
}

/// Dotfile check shared with the cover lookup.
pub(crate) fn is_hidden(path: &Path) -> bool {
    path.file_name()
        .and_then(|s| s.to_str())
        .map(|name| name.starts_with('.'))
        .unwrap_or(false)
}

/// Scan every library root and return one record per audio file.
///
/// Roots are deduplicated first so nested folders are not walked twice.
/// Unreadable files still produce a record; unreadable directories are
/// logged and skipped.
pub fn scan<S: AsRef<str>>(folders: &[S], settings: &Settings) -> Vec<TrackMetadata> {
    let roots = remove_useless_folders_with(folders, settings.library.folder_match);
    debug!(roots = ?roots, "scanning library");

    let mut tracks: Vec<TrackMetadata> = Vec::new();
    for root in &roots {
        scan_root(Path::new(root), &settings.library, &settings.metadata, &mut tracks);
    }

    tracks.sort_by(compare_tracks);
    tracks
}

fn scan_root(
    dir: &Path,
    settings: &LibrarySettings,
    metadata: &MetadataSettings,
    tracks: &mut Vec<TrackMetadata>,
) {
    let mut walker = WalkDir::new(dir).follow_links(settings.follow_links);

    // Non-recursive = only the root directory.
    let depth_cap = if settings.recursive {
        settings.max_depth
    } else {
        Some(1)
    };
    if let Some(d) = depth_cap {
        walker = walker.max_depth(d);
    }

    let entries = walker
        .into_iter()
        .filter_entry(|e| settings.include_hidden || e.depth() == 0 || !is_hidden(e.path()));

    for entry in entries {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                warn!(root = %dir.display(), error = %err, "skipping unreadable entry");
                continue;
            }
        };

        let path = entry.path();
        if path.is_file() && is_audio_file(path, settings) {
            tracks.push(get_metadata_with(path, metadata));
        }
    }
}

/// Library order: artist, album, disk, track, then title, all on the search form.
fn compare_tracks(a: &TrackMetadata, b: &TrackMetadata) -> Ordering {
    let (la, lb) = (a.lowered_metas(), b.lowered_metas());
    la.artist
        .cmp(&lb.artist)
        .then_with(|| la.album.cmp(&lb.album))
        .then_with(|| a.disk.no.cmp(&b.disk.no))
        .then_with(|| a.track.no.cmp(&b.track.no))
        .then_with(|| la.title.cmp(&lb.title))
        .then_with(|| a.path().cmp(b.path()))
}
