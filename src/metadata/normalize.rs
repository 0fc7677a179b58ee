//! String and number helpers shared by extraction, covers and the library view.

use base64::{Engine as _, engine::general_purpose::STANDARD};

/// Fold the fixed Latin diacritic table to base letters, then lowercase.
///
/// Characters outside the table (including non-Latin scripts) pass through.
pub fn strip_accents(s: &str) -> String {
    s.chars().map(fold_accent).collect::<String>().to_lowercase()
}

fn fold_accent(c: char) -> char {
    match c {
        'À' | 'Á' | 'Â' | 'Ã' | 'Ä' | 'Å' => 'A',
        'à' | 'á' | 'â' | 'ã' | 'ä' | 'å' => 'a',
        'Ò' | 'Ó' | 'Ô' | 'Õ' | 'Ö' | 'Ø' => 'O',
        'ò' | 'ó' | 'ô' | 'õ' | 'ö' | 'ø' => 'o',
        'È' | 'É' | 'Ê' | 'Ë' => 'E',
        // `ð` folds to `e`, not `d`.
        'è' | 'é' | 'ê' | 'ë' | 'ð' => 'e',
        'Ç' => 'C',
        'ç' => 'c',
        'Ð' => 'D',
        'Ì' | 'Í' | 'Î' | 'Ï' => 'I',
        'ì' | 'í' | 'î' | 'ï' => 'i',
        'Ù' | 'Ú' | 'Û' | 'Ü' => 'U',
        'ù' | 'ú' | 'û' | 'ü' => 'u',
        'Ñ' => 'N',
        'ñ' => 'n',
        'Š' => 'S',
        'š' => 's',
        'Ÿ' => 'Y',
        'ÿ' | 'ý' => 'y',
        'Ž' => 'Z',
        'ž' => 'z',
        other => other,
    }
}

/// Lowercase first, then strip accents: the search form of a tag value.
pub fn lower_for_search(s: &str) -> String {
    strip_accents(&s.to_lowercase())
}

/// Format seconds as `MM:SS`, or `HH:MM:SS` once there is at least one hour.
///
/// Components are truncated, never rounded. `None` renders as `00:00`.
pub fn parse_duration(seconds: Option<f64>) -> String {
    let Some(seconds) = seconds else {
        return "00:00".to_string();
    };

    // NaN and negatives saturate to zero.
    let total = seconds.trunc() as u64;
    let hours = total / 3600;
    let minutes = (total / 60) % 60;
    let secs = total % 60;

    if hours > 0 {
        format!("{hours:02}:{minutes:02}:{secs:02}")
    } else {
        format!("{minutes:02}:{secs:02}")
    }
}

/// Build a `data:image/<format>;base64,...` URI for an image payload.
pub fn parse_base64(format: &str, data: &[u8]) -> String {
    format!("data:image/{format};base64,{}", STANDARD.encode(data))
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    Desc,
    /// Keep input order, only drop duplicates.
    None,
}

/// Sort `values` in the requested order, then drop repeats keeping the first.
pub fn simple_sort<T: Ord + Clone>(values: &[T], order: SortOrder) -> Vec<T> {
    let mut sorted = values.to_vec();
    match order {
        SortOrder::Asc => sorted.sort(),
        SortOrder::Desc => sorted.sort_by(|a, b| b.cmp(a)),
        SortOrder::None => {}
    }

    let mut result: Vec<T> = Vec::with_capacity(sorted.len());
    for item in sorted {
        if !result.contains(&item) {
            result.push(item);
        }
    }
    result
}
