//! This module defines the `search_form` component, the docs search box shown
//! at the right-hand side of the navigation bar.
//!
//! The form submits a plain GET request to the search page. Its icon takes the
//! same style fragment as the social icons so the two stay in step across
//! breakpoints.

use leptos::{
    html::{form, input, label, style},
    prelude::*,
};

use crate::{components::icons, pages::SEARCH_PATH, style::StyleFragment};

/// Renders the search form.
///
/// # Arguments
///
/// * `icon_style` - Style fragment applied to the search icon.
/// * `is_homepage` - Switches the form to its light-on-dark homepage variant.
pub fn component(icon_style: StyleFragment, is_homepage: bool) -> impl IntoView {
    let css = icon_style.to_css(".navigation-search-icon");
    let class = if is_homepage {
        "navigation-search navigation-search-homepage"
    } else {
        "navigation-search"
    };

    form()
        .class(class)
        .attr("role", "search")
        .action(SEARCH_PATH)
        .method("get")
        .child((
            style().child(css),
            label()
                .class("navigation-search-icon")
                .child((
                    icons::glyph(icons::SEARCH),
                    input()
                        .r#type("search")
                        .name("q")
                        .placeholder("Search docs")
                        .aria_label("Search docs"),
                )),
        ))
}
