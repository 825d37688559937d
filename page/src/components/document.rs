//! Root document component - the complete HTML page
//!
//! The `<html>` shell carries site metadata and the stylesheet link; `HomePage`
//! composes the site header, the five sections in fixed order and the footer.

use super::{
    FaqSection, FeaturesSection, FinalCtaSection, HeroSection, SiteFooter, SiteHeader,
    TestimonialsSection,
};
use crate::content::ContentRegistry;
use crate::styles;
use crate::PageOptions;
use leptos::prelude::*;

/// The complete HTML document for the homepage
#[component]
pub fn PageDocument(content: ContentRegistry, options: PageOptions) -> impl IntoView {
    let PageOptions {
        meta,
        stylesheet_href,
        year,
    } = options;

    view! {
        <html lang=meta.lang class=styles::HTML>
            <head>
                <meta charset="UTF-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <title>{meta.title}</title>
                <meta name="description" content=meta.description />
                {stylesheet_href.map(|href| view! { <link rel="stylesheet" href=href /> })}
            </head>
            <body class=styles::BODY>
                <HomePage content=content year=year />
            </body>
        </html>
    }
}

/// Page body: header, sections, footer.
#[component]
pub fn HomePage(content: ContentRegistry, year: i32) -> impl IntoView {
    view! {
        <main id="top" class=styles::MAIN>
            <div class=styles::GLOW_TOP></div>
            <div class=styles::GLOW_BOTTOM></div>

            <SiteHeader />

            <div class=styles::SECTIONS>
                <HeroSection />
                <FeaturesSection features=content.features />
                <TestimonialsSection testimonials=content.testimonials />
                <FaqSection faqs=content.faqs />
                <FinalCtaSection />
            </div>

            <SiteFooter year=year />
        </main>
    }
}
