//! Screen snapshot data model.
//!
//! A [`Screen`] is a value-object dump of a terminal emulator's visible
//! state: a grid of styled text runs, the cursor position, and the ambient
//! default style. The grid uses a run-length style encoding: a [`Cell`]
//! carries a style field only when that attribute *changes*, and the active
//! style persists across cells, lines and rows until the next override.
//!
//! Renderers consume the grid left-to-right, top-to-bottom through a
//! [`StyleState`] accumulator seeded from [`Screen::style`]. The accumulator
//! is allocated per render call, so independent renders never share state.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::ScreenError;

/// A 24-bit RGB color, packed the way the emulator dump carries it.
#[derive(Clone, Copy, Default, PartialEq, Eq)]
pub struct Rgb {
    /// Red component (0-255).
    pub r: u8,
    /// Green component (0-255).
    pub g: u8,
    /// Blue component (0-255).
    pub b: u8,
}

impl Rgb {
    /// Black color (0, 0, 0).
    pub const BLACK: Self = Self { r: 0, g: 0, b: 0 };
    /// White color (255, 255, 255).
    pub const WHITE: Self = Self {
        r: 255,
        g: 255,
        b: 255,
    };
    /// Red color (255, 0, 0).
    pub const RED: Self = Self { r: 255, g: 0, b: 0 };
    /// Green color (0, 255, 0).
    pub const GREEN: Self = Self { r: 0, g: 255, b: 0 };
    /// Blue color (0, 0, 255).
    pub const BLUE: Self = Self { r: 0, g: 0, b: 255 };

    /// Create a new color from RGB components.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Unpack a color integer (`0xRRGGBB`).
    ///
    /// Bits above the low 24 are discarded, matching how the upstream
    /// consumer keeps only the last six hex digits of a wider value.
    #[inline]
    pub const fn from_u32(packed: u32) -> Self {
        Self {
            r: ((packed >> 16) & 0xFF) as u8,
            g: ((packed >> 8) & 0xFF) as u8,
            b: (packed & 0xFF) as u8,
        }
    }

    /// Pack into a color integer (`0xRRGGBB`).
    #[inline]
    pub const fn to_u32(self) -> u32 {
        ((self.r as u32) << 16) | ((self.g as u32) << 8) | (self.b as u32)
    }
}

/// Formats as six lowercase hex digits, zero-padded (`255` → `0000ff`).
impl std::fmt::Display for Rgb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl std::fmt::Debug for Rgb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{self}")
    }
}

impl From<u32> for Rgb {
    fn from(packed: u32) -> Self {
        Self::from_u32(packed)
    }
}

impl Serialize for Rgb {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u32(self.to_u32())
    }
}

impl<'de> Deserialize<'de> for Rgb {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        u32::deserialize(deserializer).map(Self::from_u32)
    }
}

bitflags::bitflags! {
    /// Rendition attribute flags carried in a cell's `r` bitmask.
    ///
    /// The emulator emits blink alongside the other three; the HTML style
    /// mapping has no declaration for it, the ANSI renderer maps it to SGR 5.
    #[repr(transparent)]
    #[derive(Clone, Copy, Default, PartialEq, Eq)]
    pub struct Rendition: u8 {
        /// Bold text.
        const BOLD      = 0b0001;
        /// Italic text.
        const ITALIC    = 0b0010;
        /// Underlined text.
        const UNDERLINE = 0b0100;
        /// Blinking text.
        const BLINK     = 0b1000;
    }
}

impl std::fmt::Debug for Rendition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        bitflags::parser::to_writer(self, f)
    }
}

impl Serialize for Rendition {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.bits())
    }
}

impl<'de> Deserialize<'de> for Rendition {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        u8::deserialize(deserializer).map(Self::from_bits_truncate)
    }
}

/// A styled text run within one terminal row.
///
/// Style fields are *overrides*: when present they update the running
/// [`StyleState`]; when absent the previously active value persists. A cell
/// with no text at all is a zero-width style marker.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    /// Text content of this run. Absent or empty means a zero-width marker.
    #[serde(rename = "s", default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Rendition override.
    #[serde(rename = "r", default, skip_serializing_if = "Option::is_none")]
    pub rendition: Option<Rendition>,
    /// Foreground color override.
    #[serde(rename = "f", default, skip_serializing_if = "Option::is_none")]
    pub foreground: Option<Rgb>,
    /// Background color override.
    #[serde(rename = "b", default, skip_serializing_if = "Option::is_none")]
    pub background: Option<Rgb>,
}

impl Cell {
    /// Create a cell carrying text under the inherited style.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            ..Self::default()
        }
    }

    /// Create a zero-width style marker.
    pub fn marker() -> Self {
        Self::default()
    }

    /// Set the foreground override (builder pattern).
    pub fn with_fg(mut self, color: Rgb) -> Self {
        self.foreground = Some(color);
        self
    }

    /// Set the background override (builder pattern).
    pub fn with_bg(mut self, color: Rgb) -> Self {
        self.background = Some(color);
        self
    }

    /// Set the rendition override (builder pattern).
    pub fn with_rendition(mut self, rendition: Rendition) -> Self {
        self.rendition = Some(rendition);
        self
    }
}

/// The ambient default style of a screen: every attribute is concrete here,
/// unlike [`Cell`] whose fields are incremental overrides.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScreenStyle {
    /// Default rendition mask.
    #[serde(rename = "r", default)]
    pub rendition: Rendition,
    /// Default foreground color.
    #[serde(rename = "f", default)]
    pub foreground: Rgb,
    /// Default background color.
    #[serde(rename = "b", default)]
    pub background: Rgb,
}

/// One visual row: a list of lines, each a list of cells.
///
/// The double nesting is the shape the emulator's dump uses (a row may stack
/// several sub-segments); renderers concatenate the lines of a row into one
/// block. The producer observed in the wild emits exactly one line per row.
pub type Row = Vec<Vec<Cell>>;

fn hidden_cursor_row() -> i64 {
    -1
}

/// A terminal screen snapshot: the render input.
///
/// Deserializes from the emulator's JSON dump, e.g.
///
/// ```json
/// {"x":3,"y":0,"lines":3,"columns":10,"title":"Lib test",
///  "style":{"r":0,"f":16777215,"b":0},
///  "data":[[[{"s":"ABC"}]],[[{}]],[[{}]]]}
/// ```
///
/// A hidden cursor is dumped as `"y":-1` with no `x`; any `y` that matches
/// no row index renders no cursor. `x` may sit at or past the end of the
/// row's text (the cursor rests after the last character). Unknown dump
/// fields (`lines`, `extra`) are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Screen {
    /// Cursor column, zero-based.
    #[serde(default)]
    pub x: i64,
    /// Cursor row, zero-based; `-1` for a hidden cursor.
    #[serde(default = "hidden_cursor_row")]
    pub y: i64,
    /// Target display width; rendered output pads to at least this.
    pub columns: usize,
    /// Display title, rendered verbatim.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Ambient default style; also seeds the style accumulator.
    #[serde(default)]
    pub style: ScreenStyle,
    /// The cell grid, top row first.
    #[serde(default)]
    pub data: Vec<Row>,
}

impl Screen {
    /// Create an empty screen with a hidden cursor.
    pub fn new(columns: usize) -> Self {
        Self {
            x: 0,
            y: hidden_cursor_row(),
            columns,
            title: None,
            style: ScreenStyle::default(),
            data: Vec::new(),
        }
    }

    /// Parse a screen from an emulator JSON dump.
    ///
    /// # Errors
    ///
    /// Returns [`ScreenError::MalformedDump`] when the input is not valid
    /// JSON or does not match the dump shape.
    pub fn from_json(dump: &str) -> Result<Self, ScreenError> {
        Ok(serde_json::from_str(dump)?)
    }

    /// Set the title (builder pattern).
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Place the cursor (builder pattern).
    pub fn cursor(mut self, x: i64, y: i64) -> Self {
        self.x = x;
        self.y = y;
        self
    }

    /// Set the default style (builder pattern).
    pub fn style(mut self, style: ScreenStyle) -> Self {
        self.style = style;
        self
    }

    /// Append a row holding a single line of cells (builder pattern).
    pub fn row(mut self, cells: impl IntoIterator<Item = Cell>) -> Self {
        self.data.push(vec![cells.into_iter().collect()]);
        self
    }

    /// Extract the screen text without any styling, one `\n`-terminated
    /// line per row.
    pub fn plain_text(&self) -> String {
        let mut out = String::new();
        for row in &self.data {
            for line in row {
                for cell in line {
                    if let Some(s) = &cell.text {
                        out.push_str(s);
                    }
                }
            }
            out.push('\n');
        }
        out
    }
}

/// The running style accumulator threaded through a render pass.
///
/// Seeded from [`Screen::style`], destructively updated by each cell's
/// overrides, and never reset mid-render: a row with no style-bearing cells
/// inherits whatever a prior row left active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StyleState {
    /// Active rendition mask.
    pub rendition: Rendition,
    /// Active foreground color.
    pub foreground: Rgb,
    /// Active background color.
    pub background: Rgb,
}

impl StyleState {
    /// Seed the accumulator from a screen's default style.
    pub fn new(style: &ScreenStyle) -> Self {
        Self {
            rendition: style.rendition,
            foreground: style.foreground,
            background: style.background,
        }
    }

    /// Fold a cell's overrides into the accumulator. Absent fields leave
    /// the prior value in place.
    pub fn apply(&mut self, cell: &Cell) {
        if let Some(r) = cell.rendition {
            self.rendition = r;
        }
        if let Some(f) = cell.foreground {
            self.foreground = f;
        }
        if let Some(b) = cell.background {
            self.background = b;
        }
    }

    /// The cursor-cell style: foreground and background swapped.
    pub fn inverted(&self) -> Self {
        Self {
            rendition: self.rendition,
            foreground: self.background,
            background: self.foreground,
        }
    }
}
