//! Render terminal screen snapshots to styled HTML or ANSI text.
//!
//! A [`Screen`] is a value-object dump of a terminal emulator's visible
//! grid: rows of styled text runs, a cursor position, and an ambient
//! default style. The grid uses a run-length style encoding: a cell only
//! carries the style attributes that *change*, and the active style is
//! carried forward across cells and rows. This crate turns such a snapshot
//! into either:
//!
//! - an HTML fragment ([`render_html`]): one `<span>` per style run, the
//!   cursor cell split out with inverted colors, padded to the configured
//!   column width, or
//! - ANSI-escaped text ([`render_ansi`]): the same style fold emitted as
//!   SGR sequences.
//!
//! Both renderers are pure, synchronous and infallible: everything is
//! recomputed from the snapshot on each call, and independent calls share
//! no state. The only fallible operation is decoding a snapshot from the
//! emulator's JSON dump format.
//!
//! # Example
//!
//! ```
//! use ttysnap::Screen;
//!
//! let dump = r#"{"x":1,"y":0,"columns":4,"title":"demo",
//!                "style":{"r":0,"f":16777215,"b":0},
//!                "data":[[[{"s":"hi"}]]]}"#;
//! let screen = Screen::from_json(dump)?;
//!
//! let html = ttysnap::render_html(&screen);
//! assert!(html.contains("id=\"ttysnap-terminal\""));
//!
//! let text = ttysnap::render_ansi(&screen);
//! assert!(text.contains("hi"));
//! # Ok::<(), ttysnap::ScreenError>(())
//! ```

pub mod ansi;
pub mod error;
pub mod html;
pub mod screen;

pub use ansi::render_ansi;
pub use error::ScreenError;
pub use html::{escape, render_html, style_declarations};
pub use screen::{Cell, Rendition, Rgb, Row, Screen, ScreenStyle, StyleState};
