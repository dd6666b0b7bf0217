use askama::Template;

use crate::theme::Theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub href: &'static str,
}

/// Navigation links, in display order.
pub const LINKS: [NavLink; 3] = [
    NavLink { label: "Home", href: "/" },
    NavLink { label: "Posts", href: "/posts" },
    NavLink { label: "Create Post", href: "/create" },
];

/// The header bar shown above every view. Links carry `data-link` so a host
/// can intercept clicks and navigate in-process.
#[derive(Template)]
#[template(path = "nav.html")]
struct Nav<'a> {
    theme: &'a Theme,
    links: &'a [NavLink],
}

pub fn render(theme: &Theme) -> askama::Result<String> {
    Nav {
        theme,
        links: &LINKS,
    }
    .render()
}
