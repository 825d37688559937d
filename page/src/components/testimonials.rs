use leptos::prelude::*;

use super::{Align, Glyph, Icon, SectionHeader, SectionShell};
use crate::content::Testimonial;
use crate::styles;

const HIGHLIGHTS: [&str; 3] = [
    "Zero-config setup",
    "Production best practices",
    "Fully responsive",
];

/// Testimonials: left-aligned pitch next to a stack of quote cards.
#[component]
pub fn TestimonialsSection(testimonials: &'static [Testimonial]) -> impl IntoView {
    view! {
        <SectionShell aria_label="Testimonials" class=styles::SECTION_SPACING>
            <div class=styles::TESTIMONIAL_GRID>
                <div class="space-y-6">
                    <SectionHeader
                        eyebrow="Teams that move fast"
                        title="Loved by founders & engineers who ship."
                        subtitle="Use this layout as your foundation and focus on what matters most: your product."
                        align=Align::Left
                    />
                    <ul class=styles::HIGHLIGHT_LIST>
                        {HIGHLIGHTS.iter().map(|highlight| view! {
                            <li class=styles::HIGHLIGHT_ITEM>
                                <Icon glyph=Glyph::CheckCircle class=styles::CHECK_ICON_SMALL />
                                <span>{*highlight}</span>
                            </li>
                        }).collect::<Vec<_>>()}
                    </ul>
                </div>

                <div class="space-y-4">
                    {testimonials.iter().map(|item| view! {
                        <TestimonialCard item=*item />
                    }).collect::<Vec<_>>()}
                </div>
            </div>
        </SectionShell>
    }
}

#[component]
fn TestimonialCard(item: Testimonial) -> impl IntoView {
    view! {
        <figure class=styles::TESTIMONIAL_CARD data-key=item.id.to_string()>
            <Icon glyph=Glyph::Quotes class=styles::TESTIMONIAL_QUOTE_ICON />
            <blockquote class=styles::TESTIMONIAL_QUOTE>
                {format!("“{}”", item.quote)}
            </blockquote>
            <figcaption class=styles::TESTIMONIAL_CAPTION>
                <div>
                    <p class="font-semibold text-slate-100">{item.name}</p>
                    <p>{format!("{} • {}", item.role, item.company)}</p>
                </div>
                <span class=styles::TESTIMONIAL_BADGE>"Verified launch"</span>
            </figcaption>
        </figure>
    }
}
