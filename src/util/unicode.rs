use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// Display width of a string in terminal cells.
pub fn display_width(s: &str) -> usize {
    UnicodeWidthStr::width(s)
}

/// Truncate a string to fit within `max_cells` terminal cells, appending
/// `…` if anything was cut.
pub fn truncate_to_width(s: &str, max_cells: usize) -> String {
    if max_cells == 0 {
        return String::new();
    }
    if display_width(s) <= max_cells {
        return s.to_string();
    }
    if max_cells == 1 {
        return "\u{2026}".to_string();
    }
    let budget = max_cells - 1;
    let mut width = 0;
    let mut out = String::new();
    for grapheme in s.graphemes(true) {
        let gw = UnicodeWidthStr::width(grapheme);
        if width + gw > budget {
            break;
        }
        width += gw;
        out.push_str(grapheme);
    }
    out.push('\u{2026}');
    out
}

/// Next grapheme boundary after `byte_offset`, or None at the end.
pub fn next_grapheme_boundary(s: &str, byte_offset: usize) -> Option<usize> {
    if byte_offset >= s.len() {
        return None;
    }
    match s[byte_offset..].grapheme_indices(true).nth(1) {
        Some((i, _)) => Some(byte_offset + i),
        None => Some(s.len()),
    }
}

/// Previous grapheme boundary before `byte_offset`, or None at the start.
pub fn prev_grapheme_boundary(s: &str, byte_offset: usize) -> Option<usize> {
    if byte_offset == 0 {
        return None;
    }
    s[..byte_offset]
        .grapheme_indices(true)
        .last()
        .map(|(i, _)| i)
}

/// Convert a byte offset into a display column.
pub fn byte_offset_to_display_col(s: &str, byte_offset: usize) -> usize {
    display_width(&s[..byte_offset.min(s.len())])
}

/// Word boundary to the left of `byte_offset` (whitespace-delimited).
pub fn word_boundary_left(s: &str, byte_offset: usize) -> usize {
    let graphemes: Vec<(usize, &str)> = s[..byte_offset].grapheme_indices(true).collect();
    if graphemes.is_empty() {
        return 0;
    }
    let is_space = |g: &str| g.chars().all(char::is_whitespace);
    let mut idx = graphemes.len() - 1;
    while idx > 0 && is_space(graphemes[idx].1) {
        idx -= 1;
    }
    while idx > 0 && !is_space(graphemes[idx - 1].1) {
        idx -= 1;
    }
    graphemes[idx].0
}

/// Word boundary to the right of `byte_offset` (whitespace-delimited).
pub fn word_boundary_right(s: &str, byte_offset: usize) -> usize {
    if byte_offset >= s.len() {
        return s.len();
    }
    let graphemes: Vec<(usize, &str)> = s[byte_offset..].grapheme_indices(true).collect();
    let is_space = |g: &str| g.chars().all(char::is_whitespace);
    let mut idx = 0;
    while idx < graphemes.len() && !is_space(graphemes[idx].1) {
        idx += 1;
    }
    while idx < graphemes.len() && is_space(graphemes[idx].1) {
        idx += 1;
    }
    match graphemes.get(idx) {
        Some((i, _)) => byte_offset + i,
        None => s.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn width_of_ascii_and_wide_text() {
        assert_eq!(display_width("tasks"), 5);
        assert_eq!(display_width("牛乳を買う"), 10);
        assert_eq!(display_width(""), 0);
    }

    #[test]
    fn truncate_leaves_short_strings_alone() {
        assert_eq!(truncate_to_width("milk", 10), "milk");
        assert_eq!(truncate_to_width("milk", 4), "milk");
    }

    #[test]
    fn truncate_reserves_a_cell_for_the_ellipsis() {
        assert_eq!(truncate_to_width("buy some milk", 8), "buy som\u{2026}");
        assert_eq!(truncate_to_width("buy", 1), "\u{2026}");
        assert_eq!(truncate_to_width("buy", 0), "");
    }

    #[test]
    fn truncate_never_splits_a_wide_grapheme() {
        // "牛乳" is 4 cells; a 4-cell budget leaves 3 for content, so only 牛 fits
        let out = truncate_to_width("牛乳を買う", 4);
        assert_eq!(out, "牛\u{2026}");
        assert!(display_width(&out) <= 4);
    }

    #[test]
    fn grapheme_boundaries_walk_ascii() {
        assert_eq!(next_grapheme_boundary("milk", 0), Some(1));
        assert_eq!(next_grapheme_boundary("milk", 3), Some(4));
        assert_eq!(next_grapheme_boundary("milk", 4), None);
        assert_eq!(prev_grapheme_boundary("milk", 4), Some(3));
        assert_eq!(prev_grapheme_boundary("milk", 1), Some(0));
        assert_eq!(prev_grapheme_boundary("milk", 0), None);
    }

    #[test]
    fn grapheme_boundaries_keep_clusters_whole() {
        let s = "cafe\u{0301}s"; // é is e + combining accent
        assert_eq!(next_grapheme_boundary(s, 3), Some(6));
        assert_eq!(prev_grapheme_boundary(s, 6), Some(3));
    }

    #[test]
    fn display_col_tracks_wide_chars() {
        assert_eq!(byte_offset_to_display_col("milk", 2), 2);
        // 牛 is 3 bytes, 2 cells
        assert_eq!(byte_offset_to_display_col("牛乳", 3), 2);
        assert_eq!(byte_offset_to_display_col("牛乳", 99), 4);
    }

    #[test]
    fn word_boundaries() {
        let s = "buy some milk";
        assert_eq!(word_boundary_left(s, s.len()), 9);
        assert_eq!(word_boundary_left(s, 9), 4);
        assert_eq!(word_boundary_left(s, 0), 0);
        assert_eq!(word_boundary_right(s, 0), 4);
        assert_eq!(word_boundary_right(s, 4), 9);
        assert_eq!(word_boundary_right(s, 9), s.len());
        assert_eq!(word_boundary_right(s, s.len()), s.len());
    }
}
