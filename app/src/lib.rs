// Site shell, routes and the navigation bar that sits above them
use crate::components::{error_template, navigation};
use leptos::prelude::*;
use leptos_meta::{MetaTags, Title, TitleProps, provide_meta_context};
use leptos_router::{
    SsrMode, StaticSegment,
    components::{FlatRoutes, Route, Router},
};

mod components;
pub mod nav;
mod pages;
pub mod presets;
pub mod style;
pub mod typography;

pub use components::error_template::AppError;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <HydrationScripts options/>
                <MetaTags/>
                {Title(TitleProps::builder().text("GatsbyJS").build())}
            </head>
            <body>
                {self::component}
            </body>
        </html>
    }
}

#[must_use]
pub fn component() -> impl IntoView {
    view! {
        <Router>
            {navigation::component}
            <FlatRoutes fallback=|| {
                let mut outside_errors = Errors::default();
                outside_errors.insert_with_default_key(AppError::NotFound);
                error_template::component(Some(outside_errors), None)
            }>
                <Route path=StaticSegment("") view=pages::home ssr=SsrMode::InOrder/>
                <Route path=StaticSegment("docs") view=|| pages::section(nav::NAV_ITEMS[0])/>
                <Route path=StaticSegment("tutorial") view=|| pages::section(nav::NAV_ITEMS[1])/>
                <Route path=StaticSegment("plugins") view=|| pages::section(nav::NAV_ITEMS[2])/>
                <Route path=StaticSegment("features") view=|| pages::section(nav::NAV_ITEMS[3])/>
                <Route path=StaticSegment("blog") view=|| pages::section(nav::NAV_ITEMS[4])/>
                <Route path=StaticSegment("showcase") view=|| pages::section(nav::NAV_ITEMS[5])/>
                <Route path=StaticSegment("search") view=pages::search/>
            </FlatRoutes>
        </Router>
    }
}
