//! Layout primitives shared by every section: the padded shell and the
//! section header block.

use leptos::prelude::*;

use crate::styles;

/// Horizontal alignment of a [`SectionHeader`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Align {
    Left,
    #[default]
    Center,
}

impl Align {
    /// The fixed class bundle for this alignment.
    pub const fn classes(self) -> &'static str {
        match self {
            Align::Left => styles::ALIGN_LEFT,
            Align::Center => styles::ALIGN_CENTER,
        }
    }
}

/// Class list of a section shell: base padding plus the caller's modifier.
pub fn shell_class(extra: Option<&str>) -> String {
    match extra.map(str::trim).filter(|extra| !extra.is_empty()) {
        Some(extra) => format!("{} {}", styles::SHELL, extra),
        None => styles::SHELL.to_string(),
    }
}

/// Width-constrained, horizontally padded `<section>`.
///
/// `id` and `aria_label` are left off the element entirely when not given.
#[component]
pub fn SectionShell(
    /// Anchor id (e.g. `features`)
    #[prop(optional)]
    id: Option<&'static str>,
    /// Accessible name of the region
    #[prop(optional)]
    aria_label: Option<&'static str>,
    /// Extra classes appended to the shell (usually spacing)
    #[prop(optional)]
    class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <section id=id aria-label=aria_label class=shell_class(class)>
            <div class=styles::SHELL_INNER>{children()}</div>
        </section>
    }
}

/// Eyebrow, title and subtitle block opening a section.
#[component]
pub fn SectionHeader(
    /// Small pill label above the title
    #[prop(optional)]
    eyebrow: Option<&'static str>,
    title: &'static str,
    #[prop(optional)]
    subtitle: Option<&'static str>,
    #[prop(optional)]
    align: Align,
) -> impl IntoView {
    let class = format!("{} {}", styles::HEADER, align.classes());

    view! {
        <header class=class>
            {eyebrow.map(|eyebrow| view! {
                <p class=styles::HEADER_EYEBROW>
                    <span class=styles::HEADER_EYEBROW_DOT></span>
                    {eyebrow}
                </p>
            })}
            <h2 class=styles::HEADER_TITLE>{title}</h2>
            {subtitle.map(|subtitle| view! {
                <p class=styles::HEADER_SUBTITLE>{subtitle}</p>
            })}
        </header>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::tachys::view::RenderHtml;

    #[test]
    fn shell_class_appends_modifier() {
        assert_eq!(shell_class(None), "w-full px-4 sm:px-6 lg:px-8");
        assert_eq!(shell_class(Some("  ")), "w-full px-4 sm:px-6 lg:px-8");
        assert_eq!(shell_class(Some("pt-20")), "w-full px-4 sm:px-6 lg:px-8 pt-20");
    }

    #[test]
    fn shell_omits_missing_attributes() {
        let html = view! { <SectionShell>"body"</SectionShell> }.to_html();
        assert!(html.starts_with("<section"));
        assert!(!html.contains(" id="));
        assert!(!html.contains("aria-label"));
        assert!(html.contains(styles::SHELL_INNER));
        assert!(html.contains("body"));
    }

    #[test]
    fn shell_renders_anchor_and_label() {
        let html = view! {
            <SectionShell id="features" aria_label="Key features" class="pt-20">
                "cards"
            </SectionShell>
        }
        .to_html();
        assert!(html.contains("id=\"features\""));
        assert!(html.contains("aria-label=\"Key features\""));
        assert!(html.contains("class=\"w-full px-4 sm:px-6 lg:px-8 pt-20\""));
    }

    #[test]
    fn header_alignment_changes_classes() {
        let center = view! { <SectionHeader title="Title" /> }.to_html();
        let left = view! { <SectionHeader title="Title" align=Align::Left /> }.to_html();

        assert_ne!(center, left);
        assert!(center.contains(styles::ALIGN_CENTER));
        assert!(!center.contains(styles::ALIGN_LEFT));
        assert!(left.contains(styles::ALIGN_LEFT));
        assert!(!left.contains(styles::ALIGN_CENTER));
    }

    #[test]
    fn header_without_subtitle_emits_no_placeholder() {
        let html = view! { <SectionHeader title="Only a title" /> }.to_html();
        assert!(html.contains("Only a title"));
        assert!(!html.contains(styles::HEADER_SUBTITLE));
        assert!(!html.contains(styles::HEADER_EYEBROW));
    }

    #[test]
    fn header_renders_optional_parts_when_given() {
        let html = view! {
            <SectionHeader eyebrow="FAQ" title="Answers" subtitle="Everything you need." />
        }
        .to_html();
        assert!(html.contains(styles::HEADER_EYEBROW));
        assert!(html.contains("FAQ"));
        assert!(html.contains(styles::HEADER_SUBTITLE));
        assert!(html.contains("Everything you need."));
    }
}
