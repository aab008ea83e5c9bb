//! Parser for the LLM's semi-structured meeting analysis reply
//!
//! The model is prompted to answer with four labeled sections (SUMMARY,
//! ACTION ITEMS, PARTICIPANTS, KEY DECISIONS) but nothing enforces that
//! format upstream, so parsing is strictly best-effort: any section that
//! cannot be located resolves to its empty default and parsing itself can
//! never fail a request.

use crate::domain::models::AnalysisResult;

/// Section markers in canonical order. Each section's content runs from its
/// marker to the earliest occurrence of any later marker, or end of text.
const MARKERS: [&str; 4] = ["SUMMARY:", "ACTION ITEMS:", "PARTICIPANTS:", "KEY DECISIONS:"];

/// Sentinel the prompt instructs the model to emit for an empty category.
const EMPTY_SENTINEL: &str = "none identified";

/// Parse a raw LLM reply into a structured [`AnalysisResult`].
///
/// Total over any input string: unrecognizable text yields the all-default
/// result. Markers are matched case-insensitively and searched in canonical
/// order, so a reply with shuffled section headers may attribute content to
/// the wrong section; that mirrors the prompt contract and is a known
/// limitation, not corrected here.
pub fn parse_reply(text: &str) -> AnalysisResult {
    AnalysisResult {
        summary: section_span(text, 0)
            .map(|span| span.trim().to_string())
            .unwrap_or_default(),
        action_items: section_span(text, 1).map(split_items).unwrap_or_default(),
        participants: section_span(text, 2).map(split_items).unwrap_or_default(),
        key_decisions: section_span(text, 3).map(split_items).unwrap_or_default(),
    }
}

/// Locate the raw span of the section whose marker is `MARKERS[index]`.
///
/// Returns `None` when the marker does not occur at all. The span is not
/// trimmed; callers decide how to post-process it.
fn section_span(text: &str, index: usize) -> Option<&str> {
    let marker_pos = find_ignore_ascii_case(text, MARKERS[index])?;
    let start = marker_pos + MARKERS[index].len();
    let rest = &text[start..];

    // End at the first later canonical marker found after this one.
    let end = MARKERS[index + 1..]
        .iter()
        .filter_map(|marker| find_ignore_ascii_case(rest, marker))
        .min()
        .unwrap_or(rest.len());

    Some(&rest[..end])
}

/// Split a list section into its bullet items.
///
/// The "None identified" sentinel anywhere in the span empties the whole
/// section, even if bullets are also present. Otherwise items are the
/// non-empty lines with bullet dashes and surrounding whitespace stripped,
/// in their original order.
fn split_items(span: &str) -> Vec<String> {
    if contains_ignore_ascii_case(span, EMPTY_SENTINEL) {
        return Vec::new();
    }

    span.lines()
        .map(|line| line.trim_matches(|c: char| c == '-' || c.is_whitespace()))
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

/// Byte-wise ASCII case-insensitive substring search.
///
/// The needle is always one of the ASCII marker constants, so a match can
/// only start on a UTF-8 character boundary and the returned index is safe
/// to slice at.
fn find_ignore_ascii_case(haystack: &str, needle: &str) -> Option<usize> {
    debug_assert!(!needle.is_empty());
    haystack
        .as_bytes()
        .windows(needle.len())
        .position(|window| window.eq_ignore_ascii_case(needle.as_bytes()))
}

fn contains_ignore_ascii_case(haystack: &str, needle: &str) -> bool {
    find_ignore_ascii_case(haystack, needle).is_some()
}
