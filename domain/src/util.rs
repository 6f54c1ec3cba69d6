//! Shared utility functions.

/// Collapse runs of whitespace into single spaces and cut the result to at
/// most `max_chars` characters, appending `...` when anything was removed.
///
/// Used for one-line previews of goals and raw responses in logs and lists.
pub fn preview(s: &str, max_chars: usize) -> String {
    let collapsed = s.split_whitespace().collect::<Vec<_>>().join(" ");
    if collapsed.chars().count() <= max_chars {
        return collapsed;
    }
    let mut out: String = collapsed.chars().take(max_chars).collect();
    out.push_str("...");
    out
}
