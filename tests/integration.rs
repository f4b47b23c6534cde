#![allow(clippy::unwrap_used)]
//! Integration tests for the ttysnap rendering library.
//!
//! These tests exercise the full pipeline from an emulator JSON dump
//! through deserialization and rendering to the output string.

use ttysnap::{render_ansi, render_html, Cell, Rendition, Rgb, Screen, ScreenStyle};

/// A dump captured from the emulator after feeding `ABC` to a 3x10 terminal
/// titled "Lib test".
const LIB_TEST_DUMP: &str = r#"{"x":3,"y":0,"lines":3,"columns":10,"title":"Lib test","style":{"r":0,"f":16777215,"b":0},"data":[[[{"s":"ABC"}]],[[{}]],[[{}]]]}"#;

#[test]
fn dump_to_html_pipeline() {
    let screen = Screen::from_json(LIB_TEST_DUMP).unwrap();
    let html = render_html(&screen);

    assert!(html.starts_with("<p id=\"ttysnap-title\">Lib test</p>"));
    assert!(html.contains(
        "<div id=\"ttysnap-terminal\" style=\"color:#ffffff;background-color:#000000\">"
    ));

    // Cursor rests just past "ABC": run, no gap, inverted-space cursor.
    assert!(html.contains(
        "<span style=\"color:#ffffff;background-color:#000000;\">ABC</span>\
         <span style=\"color:#000000;background-color:#ffffff;\"> </span>"
    ));

    // Three rows, then the width-forcing block of exactly 10 spaces.
    assert_eq!(html.matches("<p>").count(), 3);
    assert!(html.ends_with("<p style=\"height:1px\">          </p></div>"));
}

#[test]
fn dump_with_hidden_cursor_renders_no_cursor() {
    let dump = r#"{"y":-1,"lines":2,"columns":2,"title":"Lib test","style":{"r":0,"f":16777215,"b":0},"data":[[[{"s":"AB"}]],[[{}]]]}"#;
    let screen = Screen::from_json(dump).unwrap();
    let html = render_html(&screen);

    // No span ever uses the inverted default style.
    assert!(!html.contains("color:#000000;background-color:#ffffff;"));
}

#[test]
fn dump_round_trips_through_serde() {
    let screen = Screen::from_json(LIB_TEST_DUMP).unwrap();
    let json = serde_json::to_string(&screen).unwrap();
    let reparsed = Screen::from_json(&json).unwrap();
    assert_eq!(screen, reparsed);
}

#[test]
fn cursor_inversion_produces_three_spans() {
    let screen = Screen::new(8)
        .cursor(2, 0)
        .row([Cell::text("abcd")
            .with_fg(Rgb::from_u32(0x00ff_0000))
            .with_bg(Rgb::from_u32(0))]);
    let html = render_html(&screen);

    let normal = "color:#ff0000;background-color:#000000;";
    let inverted = "color:#000000;background-color:#ff0000;";
    assert!(html.contains(&format!("<span style=\"{normal}\">ab</span>")));
    assert!(html.contains(&format!("<span style=\"{inverted}\">c</span>")));
    assert!(html.contains(&format!("<span style=\"{normal}\">d</span>")));
}

#[test]
fn cursor_past_end_pads_then_inverts() {
    let screen = Screen::new(16)
        .cursor(10, 0)
        .style(ScreenStyle {
            rendition: Rendition::empty(),
            foreground: Rgb::WHITE,
            background: Rgb::BLACK,
        })
        .row([Cell::text("abcd")]);
    let html = render_html(&screen);

    // 4 characters consumed, cursor at column 10: 6 bare padding spaces.
    assert!(html.contains(
        ">abcd</span>      <span style=\"color:#000000;background-color:#ffffff;\"> </span>"
    ));
}

#[test]
fn style_runs_span_rows_until_overridden() {
    let screen = Screen::new(8)
        .row([Cell::text("one").with_fg(Rgb::from_u32(0x0011_2233))])
        .row([Cell::text("two")])
        .row([Cell::text("three").with_fg(Rgb::WHITE)]);
    let html = render_html(&screen);

    assert!(html.contains("color:#112233;background-color:#000000;\">one</span>"));
    assert!(html.contains("color:#112233;background-color:#000000;\">two</span>"));
    assert!(html.contains("color:#ffffff;background-color:#000000;\">three</span>"));
}

#[test]
fn html_and_ansi_agree_on_text_content() {
    let screen = Screen::from_json(LIB_TEST_DUMP).unwrap();
    let ansi = render_ansi(&screen);

    assert!(ansi.starts_with("\x1b]Lib test\x07"));
    assert!(ansi.contains("ABC\n"));
    assert_eq!(screen.plain_text(), "ABC\n\n\n");
}

#[test]
fn bold_row_renders_in_both_formats() {
    let screen = Screen::new(6)
        .style(ScreenStyle {
            rendition: Rendition::empty(),
            foreground: Rgb::WHITE,
            background: Rgb::BLACK,
        })
        .row([Cell::text("warn").with_rendition(Rendition::BOLD | Rendition::ITALIC)]);

    let html = render_html(&screen);
    assert!(html.contains(
        "color:#ffffff;background-color:#000000;font-weight:bold;font-style:italic;\">warn</span>"
    ));

    let ansi = render_ansi(&screen);
    assert!(ansi.contains("\x1b[0;1;3;38;2;255;255;255;48;2;0;0;0mwarn"));
}
