use crate::metadata::{LoweredMetas, SortOrder, TrackMetadata, lower_for_search, simple_sort};

/// Text searched for a track: artists, album, title and genres in search form.
fn haystack(lowered: &LoweredMetas) -> String {
    let mut parts: Vec<&str> = lowered.artist.iter().map(String::as_str).collect();
    parts.push(&lowered.album);
    parts.push(&lowered.title);
    parts.extend(lowered.genre.iter().map(String::as_str));
    parts.join(" ")
}

/// Fuzzy/subsequence match: return the character positions in `haystack`
/// that match `query`, or `None` if not matched. Both sides must already be
/// in search form.
pub fn fuzzy_match_positions(haystack: &str, query: &str) -> Option<Vec<usize>> {
    if query.is_empty() {
        return Some(Vec::new());
    }

    let mut positions: Vec<usize> = Vec::new();
    let mut hay_iter = haystack.chars().enumerate();

    for qc in query.chars() {
        loop {
            match hay_iter.next() {
                Some((hi, hc)) if hc == qc => {
                    positions.push(hi);
                    break;
                }
                Some(_) => continue,
                None => return None,
            }
        }
    }

    Some(positions)
}

/// Indices of `tracks` whose search text fuzzy-matches `query`, in input order.
///
/// The query is folded the same way as the tags, so `beyonce` finds `Beyoncé`
/// and `BEYONCÉ` finds it too.
pub fn search(tracks: &[TrackMetadata], query: &str) -> Vec<usize> {
    let query = lower_for_search(query.trim());
    tracks
        .iter()
        .enumerate()
        .filter(|(_, t)| fuzzy_match_positions(&haystack(t.lowered_metas()), &query).is_some())
        .map(|(i, _)| i)
        .collect()
}

/// Distinct known years, newest first.
pub fn years(tracks: &[TrackMetadata]) -> Vec<u32> {
    let known: Vec<u32> = tracks.iter().filter_map(|t| t.year).collect();
    simple_sort(&known, SortOrder::Desc)
}
