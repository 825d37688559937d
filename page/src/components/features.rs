use leptos::prelude::*;

use super::{Icon, SectionHeader, SectionShell};
use crate::content::Feature;
use crate::styles;

/// Feature grid, one card per feature in array order.
#[component]
pub fn FeaturesSection(features: &'static [Feature]) -> impl IntoView {
    view! {
        <SectionShell id="features" aria_label="Key features" class=styles::SECTION_SPACING>
            <div class="space-y-12">
                <SectionHeader
                    eyebrow="Why Aurora"
                    title="A starter that feels like a finished product."
                    subtitle="Beautiful defaults, smart architecture, and everything you need to ship a polished experience from day one."
                />

                <div class=styles::FEATURE_GRID>
                    {features.iter().map(|feature| view! {
                        <FeatureCard feature=*feature />
                    }).collect::<Vec<_>>()}
                </div>
            </div>
        </SectionShell>
    }
}

#[component]
fn FeatureCard(feature: Feature) -> impl IntoView {
    view! {
        <article class=styles::FEATURE_CARD data-key=feature.id.to_string()>
            <div class=styles::FEATURE_ICON_WELL>
                <Icon glyph=feature.icon class=styles::FEATURE_ICON />
            </div>
            <h3 class=styles::FEATURE_NAME>{feature.name}</h3>
            <p class=styles::FEATURE_DESCRIPTION>{feature.description}</p>
        </article>
    }
}
