//! Vertical-rhythm helpers for a 16px base font with a 1.45 line height and a
//! modular scale ratio of 2.

use crate::style::StyleFragment;

const BASE_LINE_HEIGHT: f32 = 1.45;
const SCALE_RATIO: f32 = 2.0;

/// Header font stack, highest priority first.
pub const HEADER_FONT_FAMILY: [&str; 13] = [
    "Futura PT",
    "-apple-system",
    "BlinkMacSystemFont",
    "Segoe UI",
    "Roboto",
    "Oxygen",
    "Ubuntu",
    "Cantarell",
    "Fira Sans",
    "Droid Sans",
    "Helvetica Neue",
    "Arial",
    "sans-serif",
];

/// Length of `unit` baseline grid lines, in `rem`.
#[must_use]
pub fn rhythm(unit: f32) -> String {
    format_rem(unit * BASE_LINE_HEIGHT)
}

/// Font size and line height for step `value` on the modular scale.
#[must_use]
pub fn scale(value: f32) -> StyleFragment {
    let font_size = SCALE_RATIO.powf(value);
    // Snap the line height to whole half-lines of rhythm.
    let lines = ((font_size / BASE_LINE_HEIGHT) * 2.0).ceil().max(1.0) / 2.0;
    StyleFragment::new()
        .prop("font-size", format_rem(font_size))
        .prop("line-height", format!("{:.4}", lines * BASE_LINE_HEIGHT / font_size))
}

/// Comma-joined header font family, quoting names that contain spaces.
#[must_use]
pub fn header_font_family() -> String {
    HEADER_FONT_FAMILY
        .iter()
        .map(|name| {
            if name.contains(' ') {
                format!("\"{name}\"")
            } else {
                (*name).to_owned()
            }
        })
        .collect::<Vec<_>>()
        .join(",")
}

fn format_rem(value: f32) -> String {
    let rounded = (value * 10_000.0).round() / 10_000.0;
    format!("{rounded}rem")
}
