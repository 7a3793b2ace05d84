// ABOUTME: Scroll bounds for wrapped content panes
// Counts rows the way a word-wrapped Paragraph lays them out

use ratatui::{layout::Rect, text::Line, text::Span};

/// Largest scroll offset that still keeps the last row on screen
pub fn scroll_limit(lines: &[Line], inner: Rect) -> u16 {
    let rows = wrapped_height(lines, inner.width);
    let limit = rows.saturating_sub(usize::from(inner.height));
    u16::try_from(limit).unwrap_or(u16::MAX)
}

/// Rows needed to show `lines` word-wrapped at `width`
pub fn wrapped_height(lines: &[Line], width: u16) -> usize {
    let width = usize::from(width);
    if width == 0 {
        return 0;
    }
    lines
        .iter()
        .map(|line| {
            let text: String = line.spans.iter().map(|span| span.content.as_ref()).collect();
            line_rows(&text, width)
        })
        .sum()
}

fn line_rows(text: &str, width: usize) -> usize {
    let mut rows = 1;
    let mut col = 0;

    for word in text.split(' ') {
        let word_width = Span::raw(word).width();
        let needed = if col == 0 { word_width } else { word_width + 1 };
        if col + needed <= width {
            col += needed;
            continue;
        }

        if col > 0 {
            rows += 1;
        }
        if word_width <= width {
            col = word_width;
        } else {
            // Words longer than the pane are broken across rows
            rows += (word_width - 1) / width;
            col = (word_width - 1) % width + 1;
        }
    }

    rows
}
