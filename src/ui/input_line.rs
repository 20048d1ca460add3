use ratatui::style::Style;
use ratatui::text::{Line, Span};

/// Renders a single-line input with a software caret, scrolled so the caret
/// stays visible within `width` cells.
pub(crate) fn build_input_line(
    input: &str,
    cursor: usize,
    width: usize,
    focused: bool,
    style: Style,
) -> Line<'static> {
    let prefix_spans = vec![
        Span::raw(" ".to_string()),
        Span::styled("> ".to_string(), style),
    ];
    let prefix_width = 3;
    let max_text_width = width.saturating_sub(prefix_width);

    let chars: Vec<char> = input.chars().collect();
    let char_count = chars.len();
    let cursor = cursor.min(char_count);

    let mut start = 0usize;
    if max_text_width > 0 {
        if cursor >= max_text_width {
            start = cursor.saturating_sub(max_text_width.saturating_sub(1));
        }
        if start > char_count {
            start = char_count;
        }
    } else {
        start = char_count;
    }

    let text_width = max_text_width.max(1);
    let end = (start + text_width).min(char_count);
    let mut visible: Vec<char> = chars[start..end].to_vec();
    if visible.len() < text_width {
        visible.extend(std::iter::repeat_n(' ', text_width - visible.len()));
    }

    let caret_idx = cursor
        .saturating_sub(start)
        .min(text_width.saturating_sub(1));

    let mut spans = prefix_spans;
    for (idx, ch) in visible.into_iter().enumerate() {
        if focused && idx == caret_idx {
            spans.push(Span::styled(ch.to_string(), style.reversed()));
        } else {
            spans.push(Span::styled(ch.to_string(), style));
        }
    }
    Line::from(spans)
}

#[cfg(test)]
mod tests {
    use ratatui::style::{Modifier, Style};

    use super::build_input_line;

    #[test]
    fn caret_highlights_character_under_cursor() {
        let line = build_input_line("abc", 1, 12, true, Style::default());
        assert_eq!(line.spans[3].content.as_ref(), "b");
        assert!(
            line.spans[3]
                .style
                .add_modifier
                .contains(Modifier::REVERSED)
        );
    }

    #[test]
    fn caret_sits_on_trailing_space_at_end() {
        let line = build_input_line("abc", 3, 12, true, Style::default());
        assert_eq!(line.spans[5].content.as_ref(), " ");
        assert!(
            line.spans[5]
                .style
                .add_modifier
                .contains(Modifier::REVERSED)
        );
    }

    #[test]
    fn unfocused_input_has_no_caret() {
        let line = build_input_line("abc", 1, 12, false, Style::default());
        assert!(
            line.spans
                .iter()
                .all(|span| !span.style.add_modifier.contains(Modifier::REVERSED))
        );
    }

    #[test]
    fn long_input_scrolls_to_keep_caret_visible() {
        let line = build_input_line("abcdefghij", 10, 8, true, Style::default());
        let text: String = line.spans[2..]
            .iter()
            .map(|span| span.content.as_ref())
            .collect();
        assert_eq!(text, "ghij ");
    }
}
