//! `file://` URIs for track paths.
//!
//! Players and notification daemons want URIs, the rest of the crate wants
//! paths. Segments are percent-encoded one by one so separators survive.

use std::path::{Component, Path, PathBuf};

const SCHEME: &str = "file://";

/// Marks that `urlencoding` escapes but browser-style URI components keep.
const KEPT_MARKS: [(&str, &str); 5] = [
    ("%21", "!"),
    ("%27", "'"),
    ("%28", "("),
    ("%29", ")"),
    ("%2A", "*"),
];

fn encode_segment(segment: &str) -> String {
    KEPT_MARKS
        .iter()
        .fold(urlencoding::encode(segment).into_owned(), |acc, (escaped, mark)| {
            acc.replace(escaped, mark)
        })
}

/// Encode `path` as a `file://` URI, percent-encoding every segment after the root.
pub fn parse_uri(path: &Path) -> String {
    let mut root = String::new();
    let mut segments: Vec<String> = Vec::new();

    for component in path.components() {
        match component {
            Component::Prefix(prefix) => {
                root.push_str(&prefix.as_os_str().to_string_lossy());
            }
            Component::RootDir => root.push('/'),
            Component::CurDir => segments.push(".".to_string()),
            Component::ParentDir => segments.push("..".to_string()),
            Component::Normal(part) => {
                segments.push(encode_segment(&part.to_string_lossy()));
            }
        }
    }

    // Windows drive roots come out as `C:/`; the URI form is `file:///C:/...`.
    if root.len() > 1 && !root.starts_with('/') {
        root.insert(0, '/');
    }

    format!("{SCHEME}{root}{}", segments.join("/"))
}

/// Turn a `file://` URI back into a path. Strings without the scheme are
/// treated as already-decoded paths.
pub fn track_path_from_uri(uri: &str) -> PathBuf {
    let Some(rest) = uri.strip_prefix(SCHEME) else {
        return PathBuf::from(uri);
    };

    let decoded = urlencoding::decode(rest)
        .map(|s| s.into_owned())
        .unwrap_or_else(|_| rest.to_string());

    // `/C:/Music/...` -> `C:/Music/...`
    let bytes = decoded.as_bytes();
    if bytes.len() > 2 && bytes[0] == b'/' && bytes[2] == b':' && bytes[1].is_ascii_alphabetic() {
        return PathBuf::from(&decoded[1..]);
    }
    PathBuf::from(decoded)
}
