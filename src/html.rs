//! HTML rendering of a screen snapshot.
//!
//! [`render_html`] is a pure fold over the cell grid: a [`StyleState`]
//! accumulator picks up each cell's overrides, every text run becomes one
//! styled `<span>`, and the cell under the cursor is split out into its own
//! span with foreground and background swapped. Rows become `<p>` blocks
//! inside a container `<div>` carrying the screen's default colors, and a
//! trailing 1px-high block of `columns` spaces forces the container to the
//! configured width regardless of content.
//!
//! The renderer never fails. It assumes a well-formed snapshot (the
//! emulator guarantees the grid shape); out-of-range cursor or column
//! values produce unspecified markup rather than an error.

use std::borrow::Cow;

use crate::screen::{Rendition, Screen, StyleState};

/// Escape text for embedding in markup: `&` becomes `&amp;`, then `<`
/// becomes `&lt;`. Nothing else is rewritten: `>` and quotes pass through
/// untouched. This exact, non-exhaustive escaping is a compatibility
/// contract with the upstream consumer, not a security guarantee.
pub fn escape(text: &str) -> Cow<'_, str> {
    if text.contains('&') || text.contains('<') {
        Cow::Owned(text.replace('&', "&amp;").replace('<', "&lt;"))
    } else {
        Cow::Borrowed(text)
    }
}

/// CSS declarations for a style state: foreground and background color
/// always, then bold/italic/underline for the matching rendition bits.
/// Blink has no CSS mapping and is ignored here.
pub fn style_declarations(style: &StyleState) -> String {
    let mut css = format!(
        "color:#{};background-color:#{};",
        style.foreground, style.background
    );
    if style.rendition.contains(Rendition::BOLD) {
        css.push_str("font-weight:bold;");
    }
    if style.rendition.contains(Rendition::ITALIC) {
        css.push_str("font-style:italic;");
    }
    if style.rendition.contains(Rendition::UNDERLINE) {
        css.push_str("text-decoration:underline;");
    }
    css
}

fn push_span(out: &mut String, style: &StyleState, text: &str) {
    out.push_str("<span style=\"");
    out.push_str(&style_declarations(style));
    out.push_str("\">");
    out.push_str(&escape(text));
    out.push_str("</span>");
}

/// Split `text` around the character at `offset` (counted in characters).
/// Past-the-end offsets yield empty cursor and tail parts.
fn split_at_cursor(text: &str, offset: usize) -> (&str, &str, &str) {
    let mut start = text.len();
    let mut end = text.len();
    for (i, (byte, ch)) in text.char_indices().enumerate() {
        if i == offset {
            start = byte;
            end = byte + ch.len_utf8();
            break;
        }
    }
    (&text[..start], &text[start..end], &text[end..])
}

/// Render a screen snapshot to an HTML fragment.
///
/// The fragment is a title `<p>` (the title is emitted verbatim, never
/// escaped), followed by a `<div>` styled with the screen's *default*
/// foreground/background (not whatever style the last cell left active),
/// holding one `<p>` per row and a final width-forcing padding block.
///
/// Style handling is run-length: the accumulator seeded from
/// [`Screen::style`] is carried across cells, lines and rows for the whole
/// pass. On the cursor row, the run containing the cursor column is split
/// into up to three spans, the middle one rendered with inverted colors;
/// when the cursor sits at or past the end of the row's text, the gap is
/// padded with unstyled spaces and a single inverted-space span marks the
/// cursor.
pub fn render_html(screen: &Screen) -> String {
    let mut style = StyleState::new(&screen.style);
    let padding = " ".repeat(screen.columns);

    #[cfg(feature = "tracing")]
    tracing::trace!(x = screen.x, y = screen.y, "rendering screen snapshot");

    let mut rows = Vec::with_capacity(screen.data.len());
    for (row_index, row) in screen.data.iter().enumerate() {
        let on_cursor_row = row_index as i64 == screen.y;
        let mut block = String::new();
        let mut consumed: i64 = 0;

        for line in row {
            for cell in line {
                style.apply(cell);
                let text = cell.text.as_deref().unwrap_or("");
                let width = text.chars().count() as i64;

                if on_cursor_row && consumed <= screen.x && screen.x < consumed + width {
                    let offset = (screen.x - consumed) as usize;
                    let (before, cursor, after) = split_at_cursor(text, offset);
                    push_span(&mut block, &style, before);
                    push_span(&mut block, &style.inverted(), cursor);
                    push_span(&mut block, &style, after);
                } else {
                    push_span(&mut block, &style, text);
                }
                consumed += width;
            }
        }

        // Cursor resting at or past the end of the row's text: pad the gap
        // with bare spaces, then one inverted-space span for the cursor.
        if on_cursor_row && consumed <= screen.x {
            let gap = ((screen.x - consumed) as usize).min(padding.len());
            block.push_str(&padding[..gap]);
            push_span(&mut block, &style.inverted(), " ");
        }

        rows.push(block);
    }

    let mut out = String::new();
    out.push_str("<p id=\"ttysnap-title\">");
    out.push_str(screen.title.as_deref().unwrap_or(""));
    out.push_str("</p><div id=\"ttysnap-terminal\" style=\"color:#");
    out.push_str(&screen.style.foreground.to_string());
    out.push_str(";background-color:#");
    out.push_str(&screen.style.background.to_string());
    out.push_str("\"><p>");
    out.push_str(&rows.join("\n</p><p>"));
    out.push_str("\n</p><p style=\"height:1px\">");
    out.push_str(&padding);
    out.push_str("</p></div>");
    out
}
