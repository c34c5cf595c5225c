//! Inline SVG glyphs for the navigation bar, drawn from `icondata`.

use icondata::Icon;
use leptos::{prelude::*, svg::svg};

pub use icondata::{BsDiscord as DISCORD, BsGithub as GITHUB, BsSearch as SEARCH, BsTwitter as TWITTER};

/// Renders `icon` at the current font size, inheriting the text color.
pub fn glyph(icon: Icon) -> impl IntoView {
    svg()
        .attr("viewBox", icon.view_box)
        .attr("innerHTML", icon.data)
        .attr("width", "1em")
        .attr("height", "1em")
        .attr("fill", "currentColor")
        .attr("aria-hidden", "true")
        .attr("style", "vertical-align: text-top")
}
