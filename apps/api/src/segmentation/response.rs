//! Parsing of the generated text returned by the remote model.

use serde_json::Value;

use crate::segmentation::models::JobSegments;
use crate::segmentation::SegmentError;

/// Balanced `{ ... }` spans of `text`, in order of their opening brace.
///
/// Braces inside JSON string literals are skipped, so `{"a": "}"}` is one span.
/// Spans that never close are not yielded.
pub fn json_object_candidates(text: &str) -> impl Iterator<Item = &str> {
    text.match_indices('{')
        .filter_map(move |(start, _)| balanced_span_from(text, start))
}

fn balanced_span_from(text: &str, start: usize) -> Option<&str> {
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (offset, ch) in text[start..].char_indices() {
        if in_string {
            match ch {
                _ if escaped => escaped = false,
                '\\' => escaped = true,
                '"' => in_string = false,
                _ => {}
            }
            continue;
        }

        match ch {
            '"' => in_string = true,
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    let end = start + offset + ch.len_utf8();
                    return Some(&text[start..end]);
                }
            }
            _ => {}
        }
    }

    None
}

/// Reads the first well-formed JSON object out of the model's output.
///
/// Each candidate span is tried in order; the first that parses wins. Fails with
/// `MissingJson` when no span exists and `Parse` when every span is malformed.
pub fn parse_generated_text(text: &str) -> Result<JobSegments, SegmentError> {
    let mut last_error = None;

    for candidate in json_object_candidates(text) {
        match serde_json::from_str::<Value>(candidate) {
            Ok(value) => {
                return JobSegments::from_json_value(&value).ok_or(SegmentError::MissingJson);
            }
            Err(e) => last_error = Some(e),
        }
    }

    Err(last_error
        .map(SegmentError::Parse)
        .unwrap_or(SegmentError::MissingJson))
}
