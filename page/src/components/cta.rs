use leptos::prelude::*;

use super::{Glyph, Icon, SectionShell};
use crate::styles;

/// Closing call to action; the `#get-started` anchor target.
#[component]
pub fn FinalCtaSection() -> impl IntoView {
    view! {
        <SectionShell id="get-started" aria_label="Get started" class=styles::SECTION_SPACING_LAST>
            <div class=styles::CTA_FRAME>
                <div class=styles::CTA_PANEL>
                    <div class="max-w-xl space-y-3">
                        <p class=styles::CTA_KICKER>"You're one command away"</p>
                        <h2 class=styles::CTA_TITLE>
                            "Drop this homepage into your project and start shipping today."
                        </h2>
                        <p class=styles::CTA_BODY>
                            "Copy the code, tailor the copy, and wire it up to your product in minutes. "
                            "No design skills required."
                        </p>
                    </div>
                    <div class=styles::CTA_ROW>
                        <a href="#top" class=styles::CTA_PRIMARY>
                            "Use this as your homepage"
                            <Icon glyph=Glyph::ArrowRight class=styles::CTA_ARROW />
                        </a>
                        <a href="#features" class=styles::CTA_SECONDARY>
                            "View all sections"
                        </a>
                    </div>
                </div>
            </div>
        </SectionShell>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::tachys::view::RenderHtml;

    #[test]
    fn is_the_get_started_anchor() {
        let html = view! { <FinalCtaSection /> }.to_html();
        assert!(html.contains("id=\"get-started\""));
        assert!(html.contains("href=\"#top\""));
        assert!(html.contains("href=\"#features\""));
        assert!(html.contains(styles::SECTION_SPACING_LAST));
    }
}
