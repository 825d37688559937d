//! Sticky site header and footer around the sections.

use leptos::prelude::*;

use super::{BRAND, BRAND_TAGLINE};
use crate::styles;

#[component]
pub fn SiteHeader() -> impl IntoView {
    view! {
        <header class=styles::SITE_HEADER>
            <div class=styles::SITE_HEADER_INNER>
                <a href="#top" class=styles::BRAND_LINK>
                    <span class=styles::BRAND_MARK>{&BRAND[..1]}</span>
                    <span class=styles::BRAND_NAME>{BRAND}</span>
                    <span class=styles::BRAND_TAGLINE>{BRAND_TAGLINE}</span>
                </a>
                <nav aria-label="Primary" class=styles::NAV>
                    <a href="#features" class=styles::NAV_LINK>"Features"</a>
                    <a href="#get-started" class=styles::NAV_BUTTON>"Get started"</a>
                </nav>
            </div>
        </header>
    }
}

/// The single copyright line shown in the footer.
pub fn copyright_line(year: i32) -> String {
    format!("© {year} {BRAND} Starter. All rights reserved.")
}

#[component]
pub fn SiteFooter(year: i32) -> impl IntoView {
    view! {
        <footer class=styles::FOOTER>
            <div class=styles::FOOTER_INNER>
                <p>{copyright_line(year)}</p>
                <p class=styles::FOOTER_NOTE>
                    "Built with Rust, Leptos, and Tailwind CSS. Customize this footer for your own product."
                </p>
            </div>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::tachys::view::RenderHtml;

    #[test]
    fn copyright_line_carries_year() {
        assert_eq!(
            copyright_line(2031),
            "© 2031 Aurora Starter. All rights reserved."
        );
    }

    #[test]
    fn footer_has_exactly_one_copyright_line() {
        let html = view! { <SiteFooter year=2030 /> }.to_html();
        assert_eq!(html.matches("All rights reserved.").count(), 1);
        assert!(html.contains("© 2030 Aurora Starter."));
    }

    #[test]
    fn header_links_to_page_anchors() {
        let html = view! { <SiteHeader /> }.to_html();
        assert!(html.contains("href=\"#top\""));
        assert!(html.contains("href=\"#features\""));
        assert!(html.contains("href=\"#get-started\""));
        assert!(html.contains("aria-label=\"Primary\""));
    }
}
