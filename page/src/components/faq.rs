use leptos::prelude::*;

use super::{SectionHeader, SectionShell};
use crate::content::FaqItem;
use crate::styles;

#[component]
pub fn FaqSection(faqs: &'static [FaqItem]) -> impl IntoView {
    view! {
        <SectionShell aria_label="Frequently asked questions" class=styles::SECTION_SPACING>
            <div class="space-y-10">
                <SectionHeader
                    eyebrow="FAQ"
                    title="Answers to common questions."
                    subtitle="Everything you need to know to start customizing this homepage for your own product."
                />
                <dl class="space-y-4">
                    {faqs.iter().map(|faq| view! {
                        <div class=styles::FAQ_ITEM data-key=faq.id.to_string()>
                            <dt class=styles::FAQ_QUESTION>{faq.question}</dt>
                            <dd class=styles::FAQ_ANSWER>{faq.answer}</dd>
                        </div>
                    }).collect::<Vec<_>>()}
                </dl>
            </div>
        </SectionShell>
    }
}
