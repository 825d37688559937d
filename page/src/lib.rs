//! # aurora-page
//!
//! Leptos SSR renderer for the Aurora marketing homepage.
//!
//! The page (hero, feature grid, testimonials, FAQ, call to action, header
//! and footer) is a tree of stateless [Leptos](https://leptos.dev/) components
//! fed by a fixed content registry, rendered once to a static HTML string.
//!
//! ## Quick Start
//!
//! ```rust
//! use aurora_page::{render_page, content::ContentRegistry, PageOptions};
//!
//! let html = render_page(&ContentRegistry::STANDARD, &PageOptions::for_year(2026));
//! assert!(html.starts_with("<!DOCTYPE html>"));
//! assert!(html.contains("© 2026 Aurora Starter."));
//! ```
//!
//! ## Architecture
//!
//! - [`content`] - Content records and the shipped registry
//! - [`components`] - Leptos UI components and the icon set
//! - [`styles`] - Utility-class bundles
//!
//! Styling is delegated to a utility-class stylesheet linked through
//! [`PageOptions::stylesheet_href`]; the components only pick class names.
//!
//! No reactive runtime or hydration is needed - pure static HTML generation.

pub mod components;
pub mod content;
pub mod styles;

use chrono::Datelike;
use components::PageDocument;
use content::ContentRegistry;
use leptos::prelude::*;
use leptos::tachys::view::RenderHtml;

/// Render the complete homepage document.
///
/// Output depends only on `content` and `options`: the same inputs always
/// produce the same bytes.
///
/// # Example
///
/// ```rust
/// use aurora_page::{render_page, content::ContentRegistry, PageOptions};
///
/// let options = PageOptions::for_year(2026);
/// let first = render_page(&ContentRegistry::STANDARD, &options);
/// let second = render_page(&ContentRegistry::STANDARD, &options);
/// assert_eq!(first, second);
/// ```
pub fn render_page(content: &ContentRegistry, options: &PageOptions) -> String {
    let doc = view! {
        <PageDocument content=*content options=options.clone() />
    };

    let html = doc.to_html();

    // Leptos doesn't include DOCTYPE, so we add it
    format!("<!DOCTYPE html>\n{}", html)
}

/// Document-level metadata (`<title>`, description, language).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SiteMeta {
    pub title: String,
    pub description: String,
    pub lang: String,
}

impl Default for SiteMeta {
    fn default() -> Self {
        Self {
            title: "Aurora – Modern Web App Starter".into(),
            description: "A beautiful Rust starter homepage built with Leptos and Tailwind CSS."
                .into(),
            lang: "en".into(),
        }
    }
}

/// Everything outside the content registry that shapes the document.
///
/// `Default` stamps the footer with the current local year; use
/// [`PageOptions::for_year`] for reproducible output.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageOptions {
    pub meta: SiteMeta,
    /// Href of the compiled utility-class stylesheet, if any
    pub stylesheet_href: Option<String>,
    /// Year printed in the footer copyright line
    pub year: i32,
}

impl PageOptions {
    /// Default metadata with a fixed copyright year.
    pub fn for_year(year: i32) -> Self {
        Self {
            meta: SiteMeta::default(),
            stylesheet_href: None,
            year,
        }
    }
}

impl Default for PageOptions {
    fn default() -> Self {
        Self::for_year(current_year())
    }
}

/// The current year in local time.
pub fn current_year() -> i32 {
    chrono::Local::now().year()
}

#[cfg(test)]
mod tests {
    use super::*;
    use content::{FaqItem, Feature, Testimonial, FAQS, FEATURES, TESTIMONIALS};
    use pretty_assertions::assert_eq;

    fn standard_html() -> String {
        render_page(&ContentRegistry::STANDARD, &PageOptions::for_year(2026))
    }

    #[test]
    fn renders_complete_document() {
        let html = standard_html();

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("lang=\"en\""));
        assert!(html.contains("class=\"h-full scroll-smooth\""));
        assert!(html.contains("<title>Aurora – Modern Web App Starter</title>"));
        assert!(html.contains("id=\"top\""));
        assert!(html.contains("<footer"));
    }

    #[test]
    fn sample_content_fragment_counts() {
        let html = standard_html();

        assert_eq!(html.matches("<article").count(), 4);
        assert_eq!(html.matches("<figure").count(), 2);
        assert_eq!(html.matches("<dt").count(), 3);
        assert_eq!(html.matches("All rights reserved.").count(), 1);
        assert!(html.contains("© 2026 Aurora Starter."));
    }

    #[test]
    fn one_keyed_fragment_per_entry() {
        let html = standard_html();
        let keyed = html.matches("data-key=").count();
        assert_eq!(keyed, FEATURES.len() + TESTIMONIALS.len() + FAQS.len());
    }

    #[test]
    fn sections_appear_in_fixed_order() {
        let html = standard_html();
        let order = [
            "aria-label=\"Hero\"",
            "aria-label=\"Key features\"",
            "aria-label=\"Testimonials\"",
            "aria-label=\"Frequently asked questions\"",
            "aria-label=\"Get started\"",
        ];
        let positions: Vec<usize> = order.iter().map(|label| html.find(label).unwrap()).collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]), "{positions:?}");
        assert!(html.find("<header").unwrap() < positions[0]);
        assert!(html.find("<footer").unwrap() > positions[4]);
    }

    #[test]
    fn repeated_renders_are_byte_identical() {
        assert_eq!(standard_html(), standard_html());
    }

    #[test]
    fn stylesheet_link_is_optional() {
        assert!(!standard_html().contains("rel=\"stylesheet\""));

        let options = PageOptions {
            stylesheet_href: Some("assets/tailwind.css".into()),
            ..PageOptions::for_year(2026)
        };
        let html = render_page(&ContentRegistry::STANDARD, &options);
        assert!(html.contains("href=\"assets/tailwind.css\""));
    }

    #[test]
    fn custom_metadata_is_rendered() {
        let options = PageOptions {
            meta: SiteMeta {
                title: "Northwind".into(),
                description: "Ship it".into(),
                lang: "pl".into(),
            },
            ..PageOptions::for_year(2026)
        };
        let html = render_page(&ContentRegistry::STANDARD, &options);
        assert!(html.contains("<title>Northwind</title>"));
        assert!(html.contains("content=\"Ship it\""));
        assert!(html.contains("lang=\"pl\""));
    }

    #[test]
    fn custom_registry_drives_counts() {
        static ONE_FEATURE: [Feature; 1] = [FEATURES[2]];
        static NO_TESTIMONIALS: [Testimonial; 0] = [];
        static TWO_FAQS: [FaqItem; 2] = [FAQS[1], FAQS[0]];

        let content = ContentRegistry {
            features: &ONE_FEATURE,
            testimonials: &NO_TESTIMONIALS,
            faqs: &TWO_FAQS,
        };
        let html = render_page(&content, &PageOptions::for_year(2026));

        assert_eq!(html.matches("<article").count(), 1);
        assert_eq!(html.matches("<figure").count(), 0);
        assert_eq!(html.matches("<dt").count(), 2);
        assert!(html.find(FAQS[1].question).unwrap() < html.find(FAQS[0].question).unwrap());
    }

    #[test]
    fn default_options_use_current_year() {
        assert_eq!(PageOptions::default().year, current_year());
    }
}
