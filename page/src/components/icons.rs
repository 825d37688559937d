//! SVG icon components using Phosphor Icons.
//!
//! Glyphs are looked up by name and rendered inline. Callers only choose the
//! sizing/color classes and whether the icon is decorative; the path data is
//! owned here. All paths are from the [Phosphor Icons](https://phosphoricons.com/)
//! library (Regular weight, 256x256 viewBox).

use std::fmt;
use std::str::FromStr;

use leptos::prelude::*;
use serde::Serialize;

/// A named glyph from the bundled icon set.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Glyph {
    ArrowRight,
    CheckCircle,
    Sparkle,
    ShieldCheck,
    Lightning,
    ChartLine,
    Quotes,
}

impl Glyph {
    /// Every glyph the icon set provides.
    pub const ALL: [Glyph; 7] = [
        Glyph::ArrowRight,
        Glyph::CheckCircle,
        Glyph::Sparkle,
        Glyph::ShieldCheck,
        Glyph::Lightning,
        Glyph::ChartLine,
        Glyph::Quotes,
    ];

    /// Kebab-case name used for lookup and serialization.
    pub const fn name(self) -> &'static str {
        match self {
            Glyph::ArrowRight => "arrow-right",
            Glyph::CheckCircle => "check-circle",
            Glyph::Sparkle => "sparkle",
            Glyph::ShieldCheck => "shield-check",
            Glyph::Lightning => "lightning",
            Glyph::ChartLine => "chart-line",
            Glyph::Quotes => "quotes",
        }
    }

    /// Look a glyph up by its kebab-case name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|glyph| glyph.name() == name)
    }

    /// SVG path data (the `d` attribute).
    pub const fn path(self) -> &'static str {
        match self {
            Glyph::ArrowRight => ICON_ARROW_RIGHT,
            Glyph::CheckCircle => ICON_CHECK_CIRCLE,
            Glyph::Sparkle => ICON_SPARKLE,
            Glyph::ShieldCheck => ICON_SHIELD_CHECK,
            Glyph::Lightning => ICON_LIGHTNING,
            Glyph::ChartLine => ICON_CHART_LINE,
            Glyph::Quotes => ICON_QUOTES,
        }
    }
}

impl fmt::Display for Glyph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a glyph name is not part of the icon set.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown glyph `{0}`")]
pub struct UnknownGlyph(pub String);

impl FromStr for Glyph {
    type Err = UnknownGlyph;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| UnknownGlyph(s.to_string()))
    }
}

/// Renders an inline SVG icon for a glyph.
///
/// # Props
///
/// * `glyph` - Which icon to draw
/// * `class` - Sizing/color classes (default: "")
/// * `decorative` - Hide from assistive technology (default: true)
///
/// # Example
///
/// ```rust,ignore
/// view! { <Icon glyph=Glyph::ArrowRight class="ml-2 h-4 w-4" /> }
/// ```
#[component]
pub fn Icon(
    /// Glyph to render
    glyph: Glyph,
    /// Additional CSS class names
    #[prop(default = "")]
    class: &'static str,
    /// Mark the icon `aria-hidden`
    #[prop(default = true)]
    decorative: bool,
) -> impl IntoView {
    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            fill="currentColor"
            viewBox="0 0 256 256"
            class=class
            data-glyph=glyph.name()
            aria-hidden=decorative.then_some("true")
        >
            <path d=glyph.path()></path>
        </svg>
    }
}

// =============================================================================
// Phosphor Icons (Regular weight) - https://phosphoricons.com/
// =============================================================================

const ICON_ARROW_RIGHT: &str = "M221.66,133.66l-72,72a8,8,0,0,1-11.32-11.32L196.69,136H40a8,8,0,0,1,0-16H196.69L138.34,61.66a8,8,0,0,1,11.32-11.32l72,72A8,8,0,0,1,221.66,133.66Z";

const ICON_CHECK_CIRCLE: &str = "M173.66,98.34a8,8,0,0,1,0,11.32l-56,56a8,8,0,0,1-11.32,0l-24-24a8,8,0,0,1,11.32-11.32L112,148.69l50.34-50.35A8,8,0,0,1,173.66,98.34ZM232,128A104,104,0,1,1,128,24,104.11,104.11,0,0,1,232,128Zm-16,0a88,88,0,1,0-88,88A88.1,88.1,0,0,0,216,128Z";

const ICON_SPARKLE: &str = "M197.58,129.06,146,110l-19-51.62a15.92,15.92,0,0,0-29.88,0L78,110l-51.62,19a15.92,15.92,0,0,0,0,29.88L78,178l19,51.62a15.92,15.92,0,0,0,29.88,0L146,178l51.62-19a15.92,15.92,0,0,0,0-29.88ZM137,164.22a8,8,0,0,0-4.74,4.74L112,223.85,91.78,169A8,8,0,0,0,87,164.22L32.15,144,87,123.78A8,8,0,0,0,91.78,119L112,64.15,132.22,119a8,8,0,0,0,4.74,4.74L191.85,144ZM144,40a8,8,0,0,1,8-8h16V16a8,8,0,0,1,16,0V32h16a8,8,0,0,1,0,16H184V64a8,8,0,0,1-16,0V48H152A8,8,0,0,1,144,40ZM248,88a8,8,0,0,1-8,8h-8v8a8,8,0,0,1-16,0V96h-8a8,8,0,0,1,0-16h8V72a8,8,0,0,1,16,0v8h8A8,8,0,0,1,248,88Z";

const ICON_SHIELD_CHECK: &str = "M208,40H48A16,16,0,0,0,32,56v58.78c0,89.61,75.82,119.34,91,124.39a15.53,15.53,0,0,0,10,0c15.2-5.05,91-34.78,91-124.39V56A16,16,0,0,0,208,40Zm0,74.79c0,78.42-66.35,104.62-80,109.18-13.53-4.51-80-30.69-80-109.18V56H208ZM82.34,141.66a8,8,0,0,1,11.32-11.32L112,148.69l50.34-50.35a8,8,0,0,1,11.32,11.32l-56,56a8,8,0,0,1-11.32,0Z";

const ICON_LIGHTNING: &str = "M215.79,118.17a8,8,0,0,0-5-5.66L153.18,90.9l14.66-73.33a8,8,0,0,0-13.69-7L37.71,143.17A8,8,0,0,0,44.22,156l57.6,11.52L87.16,240.83A8,8,0,0,0,95,248a7.72,7.72,0,0,0,1.57-.16l116.67-46.67a8,8,0,0,0,2.55-14.5ZM96.82,224,116,128a8,8,0,0,0-6.51-9.54L52.22,107,159.18,32,140,128a8,8,0,0,0,6.51,9.54l57.27,11.45Z";

const ICON_CHART_LINE: &str = "M232,208a8,8,0,0,1-8,8H32a8,8,0,0,1-8-8V48a8,8,0,0,1,16,0v94.37L90.73,98a8,8,0,0,1,10.07-.38l58.81,44.11L218.73,90a8,8,0,1,1,10.54,12l-64,56a8,8,0,0,1-10.07.38L96.39,114.29,40,163.63V200H224A8,8,0,0,1,232,208Z";

const ICON_QUOTES: &str = "M100,56H40A16,16,0,0,0,24,72v64a16,16,0,0,0,16,16h60v8a32,32,0,0,1-32,32,8,8,0,0,0,0,16,48.05,48.05,0,0,0,48-48V72A16,16,0,0,0,100,56Zm0,80H40V72h60ZM216,56H156a16,16,0,0,0-16,16v64a16,16,0,0,0,16,16h60v8a32,32,0,0,1-32,32,8,8,0,0,0,0,16,48.05,48.05,0,0,0,48-48V72A16,16,0,0,0,216,56Zm0,80H156V72h60Z";

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::tachys::view::RenderHtml;

    #[test]
    fn glyph_names_round_trip_through_lookup() {
        for glyph in Glyph::ALL {
            assert_eq!(Glyph::from_name(glyph.name()), Some(glyph));
            assert_eq!(glyph.to_string().parse::<Glyph>(), Ok(glyph));
        }
    }

    #[test]
    fn unknown_glyph_name_is_rejected() {
        assert_eq!(Glyph::from_name("rocket"), None);
        let err = "rocket".parse::<Glyph>().unwrap_err();
        assert_eq!(err.to_string(), "unknown glyph `rocket`");
    }

    #[test]
    fn icon_is_decorative_by_default() {
        let html = view! { <Icon glyph=Glyph::Quotes class="h-4 w-4" /> }.to_html();
        assert!(html.contains("aria-hidden=\"true\""));
        assert!(html.contains("class=\"h-4 w-4\""));
        assert!(html.contains("data-glyph=\"quotes\""));
    }

    #[test]
    fn non_decorative_icon_is_exposed() {
        let html = view! { <Icon glyph=Glyph::Lightning decorative=false /> }.to_html();
        assert!(!html.contains("aria-hidden"));
    }
}
