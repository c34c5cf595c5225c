//! Placeholder page bodies for the routes the navigation bar links to.

use leptos::{
    html::{h1, main, p},
    prelude::*,
};
use leptos_meta::{Title, TitleProps};
use leptos_router::hooks::use_query_map;

use crate::nav::NavItem;

const SITE_NAME: &str = "GatsbyJS";

/// Where the navigation search form submits its `q` query.
pub const SEARCH_PATH: &str = "/search/";

/// Renders the landing page.
pub fn home() -> impl IntoView {
    page(
        SITE_NAME.to_owned(),
        "Blazing-fast static site generator for React",
    )
}

/// Renders the landing page of the section `item` links to.
pub fn section(item: NavItem) -> impl IntoView {
    page(
        format!("{} | {SITE_NAME}", item.label),
        item.label,
    )
}

/// Renders the search results page for the `q` query parameter.
pub fn search() -> impl IntoView {
    let query = use_query_map();
    let summary = move || {
        query.with(|params| match params.get("q").filter(|q| !q.trim().is_empty()) {
            Some(q) => format!("No documentation matches {} yet.", q.trim()),
            None => "Enter a term to search the documentation.".to_owned(),
        })
    };

    main().class("page page-search").child((
        Title(TitleProps::builder().text(format!("Search | {SITE_NAME}")).build()),
        h1().class("page-heading").child("Search"),
        p().class("page-lede").child(summary),
    ))
}

fn page(title: String, heading: &'static str) -> impl IntoView {
    main().class("page").child((
        Title(TitleProps::builder().text(title).build()),
        h1().class("page-heading").child(heading),
        p().class("page-lede").child("This page is part of the documentation site."),
    ))
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use crate::nav::NAV_ITEMS;
    use leptos_meta::provide_meta_context;

    #[test]
    fn section_page_uses_item_label_as_heading() {
        let html = Owner::new().with(|| {
            provide_meta_context();
            section(NAV_ITEMS[1]).to_html()
        });
        assert!(html.contains(r#"<h1 class="page-heading">Tutorial</h1>"#));
        assert!(!html.contains("Docs"));
    }

    #[test]
    fn home_page_has_tagline() {
        let html = Owner::new().with(|| {
            provide_meta_context();
            home().to_html()
        });
        assert!(html.contains("Blazing-fast static site generator for React"));
    }
}
