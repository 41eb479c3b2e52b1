//! Identifier segmentation
//!
//! Turns concatenated-word identifiers (camel or Pascal cased) into
//! lowercase, period-joined permission segments.

/// Split an identifier into lowercase, period-joined segments.
///
/// A boundary is inserted before every uppercase letter that is not the
/// first character of its chunk: `"SampleProperty"` becomes
/// `"sample.property"`. Periods already present in the input act as segment
/// separators and are preserved; each dot-delimited chunk is segmented
/// independently, so `"DataUsers.duckies.public"` becomes
/// `"data.users.duckies.public"`.
///
/// Idempotent: segmenting an already-segmented (all-lowercase, period-joined)
/// string is a no-op. Output is non-empty for non-empty input.
pub fn segment(identifier: &str) -> String {
    identifier
        .split('.')
        .map(segment_chunk)
        .collect::<Vec<_>>()
        .join(".")
}

fn segment_chunk(chunk: &str) -> String {
    let mut out = String::with_capacity(chunk.len() + 4);
    for (position, ch) in chunk.chars().enumerate() {
        if ch.is_uppercase() && position > 0 {
            out.push('.');
        }
        for lowered in ch.to_lowercase() {
            out.push(lowered);
        }
    }
    out
}
