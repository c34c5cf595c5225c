use app::{
    nav::{NAV_ITEMS, NavBarStyles, RouteKind, is_partially_current, resolve},
    presets::{BREAKPOINTS, Breakpoint, colors},
    style::StyleFragment,
};
use assert_matches::assert_matches;

const PHABLET: u16 = 550;
const TABLET: u16 = 750;
const DESKTOP: u16 = 1000;
const HD: u16 = 1200;

#[test]
fn resolution_is_pure() {
    for path in ["/", "/blog/", "/docs/", "/docs/getting-started/", "", "not a path"] {
        assert_eq!(resolve(path), resolve(path), "path {path:?}");
    }
}

#[test]
fn homepage_branch() {
    let styles = resolve("/");
    assert_matches!(styles.route, RouteKind::Home);

    let container = &styles.container;
    assert_eq!(container.get_value("background-color"), Some("rgba(255,255,255,0)"));
    assert_eq!(container.get_value("border-bottom-color"), Some("transparent"));
    assert_eq!(
        container.nested(Breakpoint::Tablet).and_then(|f| f.get_value("position")),
        Some("absolute")
    );

    let gutter = &styles.gutter;
    assert_eq!(gutter.get_value("padding-left"), Some("2.175rem"));
    assert_eq!(gutter.get_value("padding-top"), Some("2.175rem"));
    for bp in [Breakpoint::Hd, Breakpoint::VHd, Breakpoint::VVHd] {
        let nested = gutter.nested(bp).expect("gutter breakpoint");
        assert!(nested.get_value("padding-left").is_some());
        assert_eq!(nested.get_value("padding-left"), nested.get_value("padding-right"));
    }
    assert_eq!(styles.inner.cascaded("padding-left", 1650), Some("6.525rem"));
}

#[test]
fn blog_branch() {
    let styles = resolve("/blog/");
    assert_matches!(styles.route, RouteKind::Blog);

    let container = &styles.container;
    assert_eq!(container.get_value("background-color"), Some(colors::WHITE));
    let tablet = container.nested(Breakpoint::Tablet).unwrap();
    assert_eq!(tablet.get_value("background-color"), Some(colors::UI_WHISPER));
    assert_eq!(tablet.get_value("position"), Some("absolute"));
    assert_eq!(tablet.get_value("border-bottom-color"), Some("transparent"));

    assert!(styles.gutter.is_empty());
    assert_eq!(container.cascaded("background-color", TABLET - 1), Some(colors::WHITE));
    assert_eq!(container.cascaded("background-color", TABLET), Some(colors::UI_WHISPER));
}

#[test]
fn interior_page_branch() {
    let styles = resolve("/docs/");
    assert_matches!(styles.route, RouteKind::Other);

    let container = &styles.container;
    assert_eq!(container.get_value("border-bottom"), Some("1px solid #f5f3f7"));
    assert_eq!(container.get_value("border-bottom-color"), None);
    assert_eq!(container.get_value("position"), Some("relative"));
    assert_eq!(container.cascaded("position", TABLET), Some("fixed"));

    assert!(styles.gutter.is_empty());
    assert_eq!(styles.inner.get_value("padding-left"), Some("1.0875rem"));

    assert_ne!(
        styles.social_icon.cascaded("color", PHABLET),
        Some(colors::UI_LIGHT)
    );
    assert_eq!(styles.social_icon.cascaded("color", PHABLET), Some(colors::LILAC));
}

#[test]
fn unmatched_paths_take_interior_branch() {
    for path in ["", "/blog", "/blog/post/", "//", "/DOCS/"] {
        assert_eq!(resolve(path), NavBarStyles::for_route(RouteKind::Other), "path {path:?}");
    }
}

#[test]
fn social_icons_lighten_only_on_homepage() {
    let home = resolve("/").social_icon;
    assert_eq!(home.cascaded("color", PHABLET - 1), Some(colors::LILAC));
    assert_eq!(home.cascaded("color", PHABLET), Some(colors::UI_LIGHT));

    let blog = resolve("/blog/").social_icon;
    assert_eq!(blog.cascaded("color", PHABLET), Some(colors::LILAC));
    let phablet = blog.nested(Breakpoint::Phablet).unwrap();
    assert_eq!(phablet.get_value("color"), None);
    assert!(!blog.to_css(".icon").contains("550px"));
}

#[test]
fn social_group_stays_hidden_on_homepage_until_hd() {
    let home = resolve("/").social_group;
    assert_eq!(home.cascaded("display", DESKTOP), Some("none"));
    assert_eq!(home.cascaded("display", HD), Some("flex"));

    let docs = resolve("/docs/").social_group;
    assert_eq!(docs.cascaded("display", DESKTOP), Some("flex"));
}

#[test]
fn nav_list_shows_from_tablet() {
    let list = resolve("/tutorial/").list;
    assert_eq!(list.cascaded("display", TABLET - 1), Some("none"));
    assert_eq!(list.cascaded("display", TABLET), Some("flex"));
}

#[test]
fn active_item_detection() {
    assert!(is_partially_current("/docs/getting-started/", "/docs/"));
    assert!(!is_partially_current("/docs/getting-started/", "/blog/"));

    let active: Vec<_> = NAV_ITEMS
        .iter()
        .filter(|item| item.is_active("/plugins/gatsby-source-filesystem/"))
        .map(|item| item.label)
        .collect();
    assert_eq!(active, vec!["Plugins"]);
}

#[test]
fn community_item_is_never_listed() {
    let labels: Vec<_> = NAV_ITEMS.iter().map(|item| item.label).collect();
    assert_eq!(
        labels,
        vec!["Docs", "Tutorial", "Plugins", "Features", "Blog", "Showcase"]
    );
    assert!(NAV_ITEMS.iter().all(|item| item.target_path != "/community/"));
}

#[test]
fn css_media_blocks_follow_breakpoint_table() {
    let css = resolve("/").to_css();
    for bp in [Breakpoint::Tablet, Breakpoint::Hd, Breakpoint::VHd, Breakpoint::VVHd] {
        assert!(css.contains(&bp.media_query()), "missing {bp}");
    }
    assert_eq!(BREAKPOINTS.len(), 7);
}

#[test]
fn layers_merge_base_then_branch_then_breakpoint() {
    let base = StyleFragment::new()
        .prop("position", "relative")
        .at(Breakpoint::Tablet, StyleFragment::new().prop("position", "fixed"));
    let branch = StyleFragment::new().prop("background-color", "#fff");
    let breakpoint = StyleFragment::new()
        .at(Breakpoint::Tablet, StyleFragment::new().prop("position", "absolute"));

    let merged = StyleFragment::merge([&base, &branch, &breakpoint]);
    assert_eq!(merged.get_value("position"), Some("relative"));
    assert_eq!(merged.cascaded("position", TABLET), Some("absolute"));
    assert_eq!(merged.len(), 3);
}

#[test]
fn resolves_concurrently() {
    let paths = ["/", "/blog/", "/docs/", "/showcase/"];
    let expected: Vec<_> = paths.iter().map(|path| resolve(path)).collect();

    std::thread::scope(|scope| {
        let handles: Vec<_> = paths
            .iter()
            .map(|path| scope.spawn(move || resolve(path)))
            .collect();
        for (handle, want) in handles.into_iter().zip(&expected) {
            assert_eq!(&handle.join().unwrap(), want);
        }
    });
}
