//! Splitting object keys into tree segments
//!
//! A key is consumed left to right. Each segment is the shortest run up to
//! and including the next `/`; once no `/` remains, the rest of the key is a
//! segment only if it looks like `name.ext`. Directory segments are matched
//! first, so `v1.2/data.csv` splits as `["v1.2/", "data.csv"]`.

use once_cell::sync::Lazy;
use regex::Regex;

static SEGMENT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s).*?/|.*?\..+").expect("segment pattern compiles"));

/// Split a key into its ordered segments
///
/// Returns an empty vector for keys with no derivable segment, such as `""`
/// or an extension-less `README`.
pub fn split_key(key: &str) -> Vec<&str> {
    SEGMENT.find_iter(key).map(|m| m.as_str()).collect()
}

/// True if the segments of `key` cover the whole key
///
/// Keys like `dir/README` lose their trailing remainder when split.
pub fn is_fully_segmented(key: &str) -> bool {
    let covered: usize = split_key(key).iter().map(|s| s.len()).sum();
    covered == key.len()
}
