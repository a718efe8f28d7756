use xi_rope::Rope;

use super::span::Span;

/// Extracts the text for a span from the rope as an owned String.
///
/// This allocates; prefer working with spans where possible.
pub fn slice_to_string(rope: &Rope, sp: Span) -> String {
    if sp.is_empty() {
        return String::new();
    }
    rope.slice_to_cow(sp.start..sp.end).into_owned()
}

/// Extracts text for a span, truncating to `max` bytes with "..." suffix if needed.
///
/// Newlines are escaped so every preview fits on one outline row.
pub fn preview(rope: &Rope, sp: Span, max: usize) -> String {
    let mut s = slice_to_string(rope, sp);
    if s.len() > max {
        let mut cut = max;
        while !s.is_char_boundary(cut) {
            cut -= 1;
        }
        s.truncate(cut);
        s.push_str("...");
    }
    s.replace('\r', "\\r").replace('\n', "\\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preview_short_text_unchanged() {
        let rope = Rope::from("hello");
        assert_eq!(preview(&rope, Span::new(0, 5), 10), "hello");
    }

    #[test]
    fn preview_truncates_long_text() {
        let rope = Rope::from("hello world");
        assert_eq!(preview(&rope, Span::new(0, 11), 5), "hello...");
    }

    #[test]
    fn preview_escapes_line_breaks() {
        let rope = Rope::from("---\r\na: 1\n---");
        assert_eq!(preview(&rope, Span::new(0, 13), 80), "---\\r\\na: 1\\n---");
    }

    #[test]
    fn preview_respects_char_boundaries() {
        let rope = Rope::from("héllo");
        assert_eq!(preview(&rope, Span::new(0, 6), 2), "h...");
    }

    #[test]
    fn slice_to_string_partial_span() {
        let rope = Rope::from("hello world");
        assert_eq!(slice_to_string(&rope, Span::new(6, 11)), "world");
    }

    #[test]
    fn slice_to_string_inverted_span_is_empty() {
        let rope = Rope::from("hello world");
        assert_eq!(slice_to_string(&rope, Span::new(4, 3)), "");
    }
}
