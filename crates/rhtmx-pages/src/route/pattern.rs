//! Segment classification for page file paths
//!
//! A segment is dynamic when the whole segment is bracketed (`[id]`), and a
//! catch-all when it additionally opens with `[...` (`[...slug]`).

use once_cell::sync::Lazy;
use regex::Regex;

static DYNAMIC_SEGMENT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\[.+\]$").expect("dynamic segment pattern is valid"));

/// Kind of a single path segment
///
/// # Examples
///
/// ```
/// use rhtmx_pages::route::pattern::{classify_segment, SegmentKind};
///
/// assert_eq!(classify_segment("about"), SegmentKind::Static);
/// assert_eq!(classify_segment("[id]"), SegmentKind::Dynamic);
/// assert_eq!(classify_segment("[...slug]"), SegmentKind::CatchAll);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentKind {
    /// Plain text segment
    Static,
    /// Route parameter: `[id]`
    Dynamic,
    /// Rest parameter: `[...slug]`
    CatchAll,
}

impl SegmentKind {
    pub fn is_dynamic(self) -> bool {
        !matches!(self, SegmentKind::Static)
    }
}

/// Checks whether the entire segment is bracketed
///
/// `[]` is static: the brackets must enclose at least one character.
pub fn is_dynamic_segment(segment: &str) -> bool {
    DYNAMIC_SEGMENT.is_match(segment)
}

/// Classifies a raw segment
pub fn classify_segment(segment: &str) -> SegmentKind {
    if !is_dynamic_segment(segment) {
        SegmentKind::Static
    } else if segment.starts_with("[...") {
        SegmentKind::CatchAll
    } else {
        SegmentKind::Dynamic
    }
}

/// Normalizes a segment into its route-name part
///
/// Dynamic segments lose one leading `[` (plus `...` right after it) and one
/// trailing `]`; the result is lowercased either way.
///
/// ```
/// use rhtmx_pages::route::pattern::{normalize_segment, SegmentKind};
///
/// assert_eq!(normalize_segment("[...Slug]", SegmentKind::CatchAll), "slug");
/// assert_eq!(normalize_segment("About", SegmentKind::Static), "about");
/// ```
pub fn normalize_segment(segment: &str, kind: SegmentKind) -> String {
    if !kind.is_dynamic() {
        return segment.to_lowercase();
    }

    let inner = segment.strip_prefix('[').unwrap_or(segment);
    let inner = inner.strip_prefix("...").unwrap_or(inner);
    let inner = inner.strip_suffix(']').unwrap_or(inner);
    inner.to_lowercase()
}
