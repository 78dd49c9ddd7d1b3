use serde::Deserialize;

/// How the tail of each non-leading segment is cased.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SegmentCase {
    /// Keep the remainder of each segment exactly as written.
    #[default]
    Preserve,
    /// Lowercase the remainder of each segment (`get_USER` → `getUser`).
    ///
    /// The leading character is still uppercased, not titlecased, so
    /// `ß` becomes `SS` and `ǆ` becomes `Ǆ`.
    Lowercase,
}

/// Convert a snake_case identifier to camelCase.
///
/// The first segment is kept verbatim. Every following segment gets its first
/// character uppercased and the rest left alone. Empty segments produced by
/// leading, trailing or doubled underscores contribute nothing, so `a__b`
/// becomes `ab`.
pub fn to_camel_case(name: &str) -> String {
    to_camel_case_with(name, SegmentCase::Preserve)
}

/// Like [`to_camel_case`], with explicit control over segment tails.
pub fn to_camel_case_with(name: &str, mode: SegmentCase) -> String {
    let mut segments = name.split('_');
    let mut out = String::with_capacity(name.len());

    if let Some(first) = segments.next() {
        out.push_str(first);
    }
    for segment in segments {
        push_capitalized(&mut out, segment, mode);
    }

    out
}

fn push_capitalized(out: &mut String, segment: &str, mode: SegmentCase) {
    let mut chars = segment.chars();
    let Some(head) = chars.next() else {
        return;
    };

    out.extend(head.to_uppercase());
    match mode {
        SegmentCase::Preserve => out.push_str(chars.as_str()),
        SegmentCase::Lowercase => out.extend(chars.flat_map(char::to_lowercase)),
    }
}
