//! Word wrapping by display width that keeps the text's own spacing

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Wrap `text` into lines no wider than `width` columns.
///
/// Whitespace inside a line is kept exactly as given; only the run where a
/// line breaks is dropped. `\n` forces a break. Words wider than a line are
/// split by character. Always returns at least one line.
pub fn wrap_text(text: &str, width: u16) -> Vec<String> {
    let width = usize::from(width.max(1));
    let mut lines = Vec::new();
    for paragraph in text.split('\n') {
        wrap_paragraph(paragraph.trim_end_matches('\r'), width, &mut lines);
    }
    lines
}

fn wrap_paragraph(text: &str, width: usize, lines: &mut Vec<String>) {
    let first_line = lines.len();
    let mut current = String::new();
    let mut current_width = 0usize;
    // Whitespace since the last word; written out only if the next word fits
    let mut gap = "";

    for token in tokens(text) {
        if token.starts_with(char::is_whitespace) {
            gap = token;
            continue;
        }

        let gap_width = gap.width();
        let word_width = token.width();

        if current_width + gap_width + word_width <= width {
            current.push_str(gap);
            current.push_str(token);
            current_width += gap_width + word_width;
            gap = "";
            continue;
        }
        gap = "";

        if current_width > 0 {
            lines.push(std::mem::take(&mut current));
            current_width = 0;
        }

        if word_width <= width {
            current.push_str(token);
            current_width = word_width;
            continue;
        }

        for c in token.chars() {
            let w = c.width().unwrap_or(0);
            if current_width + w > width && current_width > 0 {
                lines.push(std::mem::take(&mut current));
                current_width = 0;
            }
            current.push(c);
            current_width += w;
        }
    }

    if current_width + gap.width() <= width {
        current.push_str(gap);
    }
    if !current.is_empty() || lines.len() == first_line {
        lines.push(current);
    }
}

/// Alternating runs of whitespace and non-whitespace, covering all of `text`
fn tokens(text: &str) -> impl Iterator<Item = &str> {
    let mut rest = text;
    std::iter::from_fn(move || {
        let first = rest.chars().next()?;
        let in_space = first.is_whitespace();
        let end = rest
            .find(|c: char| c.is_whitespace() != in_space)
            .unwrap_or(rest.len());
        let (token, tail) = rest.split_at(end);
        rest = tail;
        Some(token)
    })
}
