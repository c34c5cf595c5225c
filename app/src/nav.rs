//! Route-aware style resolution for the top navigation bar.
//!
//! [`resolve`] maps the current pathname to a [`NavBarStyles`] value. The
//! result depends only on the pathname and the constant presets, so it can be
//! computed on the server during rendering and again in the browser after
//! every navigation.

use crate::{
    presets::{BANNER_HEIGHT, Breakpoint, HEADER_HEIGHT, colors, gutters},
    style::StyleFragment,
    typography::{header_font_family, rhythm, scale},
};

pub const GITHUB_URL: &str = "https://github.com/gatsbyjs/gatsby";
pub const DISCORD_URL: &str = "https://discord.gg/0ZcbPKXt5bVoxkfV";
pub const TWITTER_URL: &str = "https://twitter.com/gatsbyjs";
pub const DOTCOM_URL: &str = "https://www.gatsbyjs.com";

/// Which family of page the current route belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RouteKind {
    Home,
    Blog,
    /// Every other route, including paths that match no page.
    Other,
}

impl RouteKind {
    #[must_use]
    pub fn classify(pathname: &str) -> Self {
        match pathname {
            "/" => Self::Home,
            "/blog/" => Self::Blog,
            _ => Self::Other,
        }
    }

    #[must_use]
    pub const fn is_homepage(self) -> bool {
        matches!(self, Self::Home)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub target_path: &'static str,
}

pub const NAV_ITEMS: [NavItem; 6] = [
    NavItem {
        label: "Docs",
        target_path: "/docs/",
    },
    NavItem {
        label: "Tutorial",
        target_path: "/tutorial/",
    },
    NavItem {
        label: "Plugins",
        target_path: "/plugins/",
    },
    NavItem {
        label: "Features",
        target_path: "/features/",
    },
    NavItem {
        label: "Blog",
        target_path: "/blog/",
    },
    NavItem {
        label: "Showcase",
        target_path: "/showcase/",
    },
];

impl NavItem {
    #[must_use]
    pub fn is_active(&self, current_path: &str) -> bool {
        is_partially_current(current_path, self.target_path)
    }
}

/// An item is current when the current path sits at or below its target.
#[must_use]
pub fn is_partially_current(current_path: &str, target_path: &str) -> bool {
    current_path.starts_with(target_path)
}

/// Every fragment the navigation bar needs for one route.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavBarStyles {
    pub route: RouteKind,
    pub container: StyleFragment,
    pub inner: StyleFragment,
    pub item: StyleFragment,
    pub active_item: StyleFragment,
    pub social_icon: StyleFragment,
    pub gutter: StyleFragment,
    pub list: StyleFragment,
    pub list_item: StyleFragment,
    pub logo_link: StyleFragment,
    pub logo: StyleFragment,
    pub actions: StyleFragment,
    pub social_group: StyleFragment,
    pub social_link: StyleFragment,
    pub dotcom_link: StyleFragment,
}

/// Resolves the navigation bar styles for `pathname`. Total over all inputs.
#[must_use]
pub fn resolve(pathname: &str) -> NavBarStyles {
    let route = RouteKind::classify(pathname);
    tracing::trace!(pathname, ?route, "resolving navigation styles");
    NavBarStyles::for_route(route)
}

impl NavBarStyles {
    #[must_use]
    pub fn for_route(route: RouteKind) -> Self {
        let item = item_style();
        let social_icon = social_icon_style(route);
        let gutter = gutter_style(route);
        let social_link = StyleFragment::merge([&item, &social_icon]);
        let dotcom_link = social_link.layered(&StyleFragment::new().prop("padding-right", "0"));

        Self {
            route,
            container: container_base(route).layered(&container_override(route)),
            inner: StyleFragment::merge([&inner_base(), &gutter, &inner_layout()]),
            active_item: StyleFragment::new().prop("border-bottom-color", colors::GATSBY),
            list: list_style(),
            list_item: StyleFragment::new()
                .prop("display", "inline-block")
                .prop("margin", "0")
                .prop("padding", item_padding()),
            logo_link: StyleFragment::new()
                .prop("align-items", "center")
                .prop("color", "inherit")
                .prop("display", "flex")
                .prop("text-decoration", "none")
                .prop("margin-right", rhythm(0.5)),
            logo: StyleFragment::new().prop("width", "106px").prop("margin", "0"),
            actions: StyleFragment::new()
                .prop("display", "flex")
                .prop("margin-left", "auto"),
            social_group: social_group_style(route),
            item,
            social_icon,
            gutter,
            social_link,
            dotcom_link,
        }
    }

    /// All rules for the bar, scoped to the class names the markup uses.
    #[must_use]
    pub fn to_css(&self) -> String {
        [
            (&self.container, ".navigation"),
            (&self.inner, ".navigation-inner"),
            (&self.logo_link, ".navigation-logo-link"),
            (&self.logo, ".navigation-logo"),
            (&self.list, ".navigation-list"),
            (&self.list_item, ".navigation-list-item"),
            (&self.item, ".nav-item"),
            (&self.active_item, ".nav-item.nav-item-active"),
            (&self.actions, ".navigation-actions"),
            (&self.social_group, ".navigation-social-group"),
            (&self.social_link, ".navigation-social-link"),
            (&self.dotcom_link, ".navigation-dotcom-link"),
        ]
        .into_iter()
        .map(|(fragment, selector)| fragment.to_css(selector))
        .collect()
    }
}

fn item_padding() -> String {
    format!("6px {} 0 {}", rhythm(0.25), rhythm(0.5))
}

fn item_style() -> StyleFragment {
    scale(-1.0 / 3.0).layered(
        &StyleFragment::new()
            .prop("box-sizing", "border-box")
            .prop("color", "inherit")
            .prop("text-decoration", "none")
            .prop("text-transform", "uppercase")
            .prop("letter-spacing", "0.03em")
            .prop("line-height", format!("calc({HEADER_HEIGHT} - 6px)"))
            .prop("position", "relative")
            .prop("top", "0")
            .prop("transition", "color .15s ease-out")
            .hover(StyleFragment::new().prop("opacity", "0.8"))
            .prop("display", "flex")
            .prop("align-items", "center")
            .prop("justify-content", "center")
            .prop("border-bottom", "2px solid transparent"),
    )
}

fn container_base(route: RouteKind) -> StyleFragment {
    let position = if route.is_homepage() { "absolute" } else { "relative" };
    let tablet_position = match route {
        RouteKind::Home | RouteKind::Blog => "absolute",
        RouteKind::Other => "fixed",
    };
    StyleFragment::new()
        .prop("border-bottom", format!("1px solid {}", colors::UI_LIGHT))
        .prop("background-color", "rgba(255,255,255,0.975)")
        .prop("position", position)
        .prop("z-index", "2")
        .prop("left", "0")
        .prop("right", "0")
        .prop("top", format!("calc({BANNER_HEIGHT} - 1px)"))
        .at(
            Breakpoint::Tablet,
            StyleFragment::new().prop("position", tablet_position),
        )
}

fn container_override(route: RouteKind) -> StyleFragment {
    match route {
        RouteKind::Home => StyleFragment::new()
            .prop("background-color", "rgba(255,255,255,0)")
            .prop("border-bottom-color", "transparent")
            .at(
                Breakpoint::Tablet,
                StyleFragment::new().prop("position", "absolute"),
            ),
        RouteKind::Blog => StyleFragment::new()
            .prop("background-color", colors::WHITE)
            .at(
                Breakpoint::Tablet,
                StyleFragment::new()
                    .prop("border-bottom-color", "transparent")
                    .prop("position", "absolute")
                    .prop("background-color", colors::UI_WHISPER),
            ),
        RouteKind::Other => StyleFragment::new(),
    }
}

fn inner_base() -> StyleFragment {
    StyleFragment::new()
        .prop("margin", "0 auto")
        .prop("padding-left", rhythm(0.75))
        .prop("padding-right", rhythm(0.75))
}

fn inner_layout() -> StyleFragment {
    StyleFragment::new()
        .prop("font-family", header_font_family())
        .prop("display", "flex")
        .prop("align-items", "center")
        .prop("width", "100%")
        .prop("height", "100%")
}

fn horizontal_padding(units: f32) -> StyleFragment {
    let padding = rhythm(units);
    StyleFragment::new()
        .prop("padding-left", padding.clone())
        .prop("padding-right", padding)
}

fn gutter_style(route: RouteKind) -> StyleFragment {
    if !route.is_homepage() {
        return StyleFragment::new();
    }
    horizontal_padding(gutters::DEFAULT)
        .prop("padding-top", rhythm(1.5))
        .at(Breakpoint::Hd, horizontal_padding(gutters::HD))
        .at(Breakpoint::VHd, horizontal_padding(gutters::VHD))
        .at(Breakpoint::VVHd, horizontal_padding(gutters::VVHD))
}

fn social_icon_style(route: RouteKind) -> StyleFragment {
    let phablet_color = route.is_homepage().then_some(colors::UI_LIGHT);
    StyleFragment::new()
        .prop("color", colors::LILAC)
        .prop("padding", item_padding())
        .at(
            Breakpoint::Phablet,
            StyleFragment::new().prop_or_unset("color", phablet_color),
        )
}

fn social_group_style(route: RouteKind) -> StyleFragment {
    let desktop_display = (!route.is_homepage()).then_some("flex");
    StyleFragment::new()
        .prop("display", "none")
        .at(
            Breakpoint::Desktop,
            StyleFragment::new().prop_or_unset("display", desktop_display),
        )
        .at(Breakpoint::Hd, StyleFragment::new().prop("display", "flex"))
}

fn list_style() -> StyleFragment {
    StyleFragment::new().prop("display", "none").at(
        Breakpoint::Tablet,
        StyleFragment::new()
            .prop("display", "flex")
            .prop("align-items", "center")
            .prop("margin", "0")
            .prop("list-style", "none")
            .prop("flex-grow", "1")
            .prop("overflow-x", "auto")
            .prop(
                "mask-image",
                format!(
                    "linear-gradient(to right, transparent, white {}, white 98%, transparent)",
                    rhythm(0.125)
                ),
            ),
    )
}
