//! This module defines the `navigation` component, the top bar shown on every
//! page: logo, section links, search box and social links.
//!
//! All presentation comes from [`nav::resolve`], recomputed whenever the
//! router location changes and emitted as a scoped `<style>` block.

use leptos::prelude::*;
use leptos_router::{components::A, hooks::use_location};

use crate::{
    components::{icons, search_form},
    nav::{self, DISCORD_URL, DOTCOM_URL, GITHUB_URL, NAV_ITEMS, NavItem, TWITTER_URL},
};

/// Renders the navigation bar for the current route.
///
/// Must be rendered inside a `Router`.
pub fn component() -> impl IntoView {
    let pathname = use_location().pathname;
    let styles = Memo::new(move |_| pathname.with(|path| nav::resolve(path)));

    view! {
        <style id="navigation-styles">{move || styles.with(nav::NavBarStyles::to_css)}</style>
        <div role="navigation" class="navigation">
            <div class="navigation-inner">
                <A href="/" exact=true attr:class="navigation-logo-link">
                    <img src="/logo.svg" class="navigation-logo" alt=""/>
                </A>
                <ul class="navigation-list">
                    {NAV_ITEMS.into_iter().map(|item| nav_item(item, pathname)).collect_view()}
                </ul>
                <div class="navigation-actions">
                    {move || styles.with(|styles| {
                        search_form::component(styles.social_icon.clone(), styles.route.is_homepage())
                    })}
                    <a href=GITHUB_URL title="GitHub" class="navigation-social-link">
                        {icons::glyph(icons::GITHUB)}
                    </a>
                    <div class="navigation-social-group">
                        <a href=DISCORD_URL title="Discord" class="navigation-social-link">
                            {icons::glyph(icons::DISCORD)}
                        </a>
                        <a href=TWITTER_URL title="@gatsbyjs" class="navigation-social-link">
                            {icons::glyph(icons::TWITTER)}
                        </a>
                    </div>
                    <a href=DOTCOM_URL title="gatsbyjs.com" class="navigation-dotcom-link">
                        ".com"
                    </a>
                </div>
            </div>
        </div>
    }
}

fn nav_item(item: NavItem, pathname: Memo<String>) -> impl IntoView {
    let active = move || pathname.with(|path| item.is_active(path));

    view! {
        <li class="navigation-list-item">
            <A
                href=item.target_path
                attr:class=move || { if active() { "nav-item nav-item-active" } else { "nav-item" } }
            >
                {item.label}
            </A>
        </li>
    }
}
