//! ANSI text rendering of a screen snapshot.
//!
//! The sibling output format to [`crate::html`]: the same run-length style
//! fold, emitted as SGR escape sequences instead of markup. The title goes
//! first as an `ESC ]`…`BEL` prefix, then each row on its own line. A style
//! run boundary emits one CSI sequence: a reset, the active rendition
//! attributes, then truecolor foreground and background. Sequences are only
//! emitted when the effective style actually changed, so an override that
//! re-states the current value produces no output.
//!
//! The cursor is not rendered in this format.

use std::fmt::Write as _;

use crate::screen::{Rendition, Screen, StyleState};

fn push_sgr(out: &mut String, style: &StyleState) {
    out.push_str("\x1b[0");
    if style.rendition.contains(Rendition::BOLD) {
        out.push_str(";1");
    }
    if style.rendition.contains(Rendition::ITALIC) {
        out.push_str(";3");
    }
    if style.rendition.contains(Rendition::UNDERLINE) {
        out.push_str(";4");
    }
    if style.rendition.contains(Rendition::BLINK) {
        out.push_str(";5");
    }
    let fg = style.foreground;
    let bg = style.background;
    // The reset cleared any previous colors, so both are always restated.
    let _ = write!(out, ";38;2;{};{};{}", fg.r, fg.g, fg.b);
    let _ = write!(out, ";48;2;{};{};{}", bg.r, bg.g, bg.b);
    out.push('m');
}

/// Render a screen snapshot to ANSI-escaped text, one line per row.
///
/// Pure and infallible, like [`crate::render_html`]. Text runs pass through
/// unescaped; styles are restated only at run boundaries.
pub fn render_ansi(screen: &Screen) -> String {
    let mut out = String::new();
    out.push_str("\x1b]");
    out.push_str(screen.title.as_deref().unwrap_or(""));
    out.push('\x07');

    let mut style = StyleState::new(&screen.style);
    let mut emitted: Option<StyleState> = None;

    for row in &screen.data {
        for line in row {
            for cell in line {
                style.apply(cell);
                let text = cell.text.as_deref().unwrap_or("");
                if text.is_empty() {
                    continue;
                }
                if emitted != Some(style) {
                    push_sgr(&mut out, &style);
                    emitted = Some(style);
                }
                out.push_str(text);
            }
        }
        out.push('\n');
    }

    out
}
