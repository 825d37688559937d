use leptos::prelude::*;

use super::{Glyph, Icon, SectionShell};
use crate::styles;

const TRUST_POINTS: [&str; 3] = [
    "No config • No lock‑in",
    "Accessible by design",
    "Mobile-first layout",
];

#[component]
pub fn HeroSection() -> impl IntoView {
    let trust = TRUST_POINTS
        .iter()
        .enumerate()
        .map(|(idx, point)| {
            view! {
                {(idx > 0).then(|| view! { <span class=styles::HERO_TRUST_SEPARATOR></span> })}
                <div class=styles::HERO_TRUST_ITEM>
                    <Icon glyph=Glyph::CheckCircle class=styles::CHECK_ICON />
                    <span>{*point}</span>
                </div>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <SectionShell aria_label="Hero" class=styles::SECTION_SPACING>
            <div class=styles::HERO_GRID>
                <div class="space-y-8">
                    <div class=styles::HERO_BADGE>
                        <Icon glyph=Glyph::Sparkle class="h-3.5 w-3.5 text-emerald-300" />
                        <span>"Leptos 0.8 • SSR • Rust 2024"</span>
                    </div>

                    <div class="space-y-4">
                        <h1 class=styles::HERO_TITLE>
                            "Build beautiful products"
                            <span class=styles::HERO_TITLE_ACCENT>
                                "without starting from scratch."
                            </span>
                        </h1>
                        <p class=styles::HERO_LEAD>
                            "Aurora is a production-ready starter that gives you a polished homepage, "
                            "modern tooling, and a scalable architecture in minutes instead of days."
                        </p>
                    </div>

                    <div class=styles::CTA_ROW>
                        <a href="#get-started" class=styles::CTA_PRIMARY>
                            "Get started in minutes"
                            <Icon glyph=Glyph::ArrowRight class=styles::CTA_ARROW />
                        </a>
                        <a href="#features" class=styles::CTA_SECONDARY>
                            "Explore the features"
                        </a>
                    </div>

                    <div class=styles::HERO_TRUST_ROW>{trust}</div>
                </div>

                <PreviewCard />
            </div>
        </SectionShell>
    }
}

/// Decorative "deploy-ready" card on the right of the hero.
#[component]
fn PreviewCard() -> impl IntoView {
    view! {
        <div class=styles::PREVIEW_CARD aria-hidden="true">
            <div class=styles::PREVIEW_HALO></div>
            <div class=styles::PREVIEW_BODY>
                <div class="flex items-center justify-between gap-4">
                    <div>
                        <p class="text-xs font-medium text-slate-400">"Deploy-ready"</p>
                        <p class="text-sm font-semibold text-slate-50">"Static HTML output"</p>
                    </div>
                    <span class=styles::PREVIEW_PILL>
                        <span class="mr-1.5 h-1.5 w-1.5 rounded-full bg-emerald-300"></span>
                        "Ship faster"
                    </span>
                </div>

                <div class=format!("space-y-3 {}", styles::PREVIEW_PANEL)>
                    <div class="flex items-center justify-between gap-3 text-xs text-slate-300">
                        <span>"Performance"</span>
                        <span class="text-sky-300">"99"</span>
                    </div>
                    <div class=styles::PREVIEW_METER>
                        <div class=styles::PREVIEW_METER_FILL></div>
                    </div>
                    <div class="flex items-center justify-between gap-3 text-xs text-slate-400">
                        <span>"Accessible components"</span>
                        <span class="text-emerald-300">"WCAG AA"</span>
                    </div>
                </div>

                <div class="grid grid-cols-3 gap-3 text-xs">
                    <StackTile label="Stack" value="Leptos" note="SSR • No hydration" />
                    <StackTile label="Styling" value="Tailwind" note="Tokens • Utility" />
                    <StackTile label="Safety" value="Rust" note="Strict by default" />
                </div>
            </div>
        </div>
    }
}

#[component]
fn StackTile(label: &'static str, value: &'static str, note: &'static str) -> impl IntoView {
    view! {
        <div class=styles::PREVIEW_PANEL>
            <p class="mb-1 text-[11px] text-slate-400">{label}</p>
            <p class="font-medium text-slate-50">{value}</p>
            <p class="text-[11px] text-slate-400">{note}</p>
        </div>
    }
}
