//! Leptos UI components for rendering the homepage.
//!
//! Each component is a Leptos `#[component]` function with no reactive
//! state; rendering is a single SSR pass to a string.
//!
//! # Component Hierarchy
//!
//! ```text
//! PageDocument
//! └── HomePage
//!     ├── SiteHeader
//!     ├── HeroSection          (SectionShell)
//!     ├── FeaturesSection      (SectionShell + SectionHeader, one card per Feature)
//!     ├── TestimonialsSection  (SectionShell + SectionHeader, one figure per Testimonial)
//!     ├── FaqSection           (SectionShell + SectionHeader, one entry per FaqItem)
//!     ├── FinalCtaSection      (SectionShell)
//!     └── SiteFooter
//! ```
//!
//! # Usage
//!
//! Components are typically used via [`crate::render_page`], but can be
//! rendered on their own:
//!
//! ```rust
//! use aurora_page::components::{Align, SectionHeader};
//! use leptos::prelude::*;
//! use leptos::tachys::view::RenderHtml;
//!
//! let html = view! { <SectionHeader title="Pricing" align=Align::Left /> }.to_html();
//! assert!(html.contains("Pricing"));
//! ```

mod chrome;
mod cta;
mod document;
mod faq;
mod features;
mod hero;
mod icons;
mod shell;
mod testimonials;

pub use chrome::{copyright_line, SiteFooter, SiteHeader};
pub use cta::FinalCtaSection;
pub use document::{HomePage, PageDocument};
pub use faq::FaqSection;
pub use features::FeaturesSection;
pub use hero::HeroSection;
pub use icons::*;
pub use shell::{shell_class, Align, SectionHeader, SectionShell};
pub use testimonials::TestimonialsSection;

/// Product name shown in the header and footer.
pub const BRAND: &str = "Aurora";

/// Short descriptor next to the brand in the header.
pub const BRAND_TAGLINE: &str = "Leptos Starter";
