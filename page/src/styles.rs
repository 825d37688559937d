//! Utility-class bundles for the homepage.
//!
//! The page is styled by an external utility-class stylesheet (Tailwind
//! classes compiled elsewhere). This module only names the class strings each
//! component selects, so a different design system can be swapped in here
//! without touching component structure.
//!
//! # Customization
//!
//! ```rust
//! use aurora_page::styles::CTA_PRIMARY;
//!
//! assert!(CTA_PRIMARY.contains("rounded-full"));
//! ```

// =============================================================================
// Document
// =============================================================================

/// Classes on the root `<html>` element.
pub const HTML: &str = "h-full scroll-smooth";

/// Classes on `<body>`.
pub const BODY: &str = "h-full bg-slate-950 text-slate-50 antialiased";

/// The `<main id="top">` wrapper with the layered background gradients.
pub const MAIN: &str = "relative flex min-h-screen flex-col bg-[radial-gradient(circle_at_top,_rgba(56,189,248,0.18),transparent_55%),radial-gradient(circle_at_bottom,_rgba(14,165,233,0.12),transparent_55%),linear-gradient(to_bottom,_#020617,_#020617)]";

/// Fixed glow at the top of the viewport.
pub const GLOW_TOP: &str = "pointer-events-none fixed inset-x-0 top-0 z-0 h-32 bg-gradient-to-b from-sky-500/20 via-transparent to-transparent";

/// Fixed fade at the bottom of the viewport.
pub const GLOW_BOTTOM: &str = "pointer-events-none fixed inset-x-0 bottom-0 z-0 h-40 bg-gradient-to-t from-slate-950 via-slate-950/80 to-transparent";

/// Wrapper that stacks the sections above the glows.
pub const SECTIONS: &str = "relative z-10 flex-1";

// =============================================================================
// Calls to action
// =============================================================================

/// Primary call-to-action button.
pub const CTA_PRIMARY: &str = "inline-flex items-center justify-center rounded-full bg-sky-500 px-6 py-3 text-sm md:text-base font-semibold text-slate-950 shadow-lg shadow-sky-500/30 transition-all duration-200 hover:bg-sky-400 hover:shadow-sky-400/40 focus-visible:outline-none focus-visible:ring-2 focus-visible:ring-sky-400 focus-visible:ring-offset-2 focus-visible:ring-offset-slate-950";

/// Secondary (outlined) call-to-action button.
pub const CTA_SECONDARY: &str = "inline-flex items-center justify-center rounded-full border border-slate-700/80 bg-slate-900/40 px-6 py-3 text-sm md:text-base font-medium text-slate-100 shadow-sm transition-all duration-200 hover:bg-slate-800 hover:border-slate-500 focus-visible:outline-none focus-visible:ring-2 focus-visible:ring-slate-500 focus-visible:ring-offset-2 focus-visible:ring-offset-slate-950";

/// Row holding a primary and a secondary CTA.
pub const CTA_ROW: &str =
    "flex flex-col items-stretch gap-3 sm:flex-row sm:items-center sm:gap-4";

/// Trailing arrow inside a CTA.
pub const CTA_ARROW: &str = "ml-2 h-4 w-4";

// =============================================================================
// Layout primitives
// =============================================================================

/// Base classes of every section shell; callers append their own spacing.
pub const SHELL: &str = "w-full px-4 sm:px-6 lg:px-8";

/// Width-constrained inner container of a section shell.
pub const SHELL_INNER: &str = "mx-auto max-w-6xl";

/// Top padding shared by all sections.
pub const SECTION_SPACING: &str = "pt-20 sm:pt-24 lg:pt-28";

/// Top and bottom padding of the last section.
pub const SECTION_SPACING_LAST: &str = "pt-20 sm:pt-24 lg:pt-28 pb-16 sm:pb-20 lg:pb-28";

/// Section header wrapper (alignment classes are appended).
pub const HEADER: &str = "flex flex-col gap-3";

/// Alignment bundle for centered headers.
pub const ALIGN_CENTER: &str = "items-center text-center";

/// Alignment bundle for left-aligned headers.
pub const ALIGN_LEFT: &str = "items-start text-left";

pub const HEADER_EYEBROW: &str = "inline-flex items-center gap-2 rounded-full border border-sky-500/40 bg-sky-500/10 px-3 py-1 text-xs font-medium uppercase tracking-wide text-sky-300";
pub const HEADER_EYEBROW_DOT: &str = "h-1.5 w-1.5 rounded-full bg-sky-400";
pub const HEADER_TITLE: &str =
    "text-2xl sm:text-3xl md:text-4xl font-semibold tracking-tight text-slate-50";
pub const HEADER_SUBTITLE: &str = "max-w-2xl text-sm sm:text-base text-slate-300";

// =============================================================================
// Hero
// =============================================================================

pub const HERO_GRID: &str =
    "grid gap-10 lg:grid-cols-[minmax(0,1.3fr),minmax(0,1fr)] lg:items-center";
pub const HERO_BADGE: &str = "inline-flex items-center gap-2 rounded-full border border-emerald-400/40 bg-emerald-400/10 px-3 py-1 text-xs font-medium leading-none text-emerald-200";
pub const HERO_TITLE: &str = "text-balance text-3xl sm:text-4xl md:text-5xl lg:text-6xl font-semibold tracking-tight text-slate-50";
pub const HERO_TITLE_ACCENT: &str = "block text-transparent bg-gradient-to-r from-sky-400 via-cyan-300 to-emerald-300 bg-clip-text";
pub const HERO_LEAD: &str = "max-w-xl text-sm sm:text-base md:text-lg text-slate-300";
pub const HERO_TRUST_ROW: &str = "flex flex-wrap items-center gap-4 text-xs text-slate-400";
pub const HERO_TRUST_ITEM: &str = "flex items-center gap-1.5";
pub const HERO_TRUST_SEPARATOR: &str = "hidden h-1 w-1 rounded-full bg-slate-600 sm:inline-block";
pub const CHECK_ICON: &str = "h-4 w-4 text-emerald-400";
pub const CHECK_ICON_SMALL: &str = "h-3.5 w-3.5 text-emerald-400";

pub const PREVIEW_CARD: &str = "relative mx-auto w-full max-w-md rounded-3xl border border-slate-700/60 bg-gradient-to-br from-slate-900/80 via-slate-900/40 to-slate-900/80 p-5 shadow-[0_18px_45px_rgba(15,23,42,0.85)]";
pub const PREVIEW_HALO: &str = "pointer-events-none absolute -inset-0.5 rounded-3xl bg-gradient-to-tr from-sky-500/20 via-cyan-400/10 to-emerald-400/20 blur-2xl";
pub const PREVIEW_BODY: &str =
    "relative space-y-4 rounded-2xl bg-slate-950/80 p-4 ring-1 ring-slate-800/80";
pub const PREVIEW_PILL: &str = "inline-flex items-center rounded-full bg-emerald-500/10 px-2.5 py-1 text-[11px] font-semibold text-emerald-200 ring-1 ring-emerald-500/40";
pub const PREVIEW_PANEL: &str = "rounded-xl bg-slate-900/80 p-3 ring-1 ring-slate-800/80";
pub const PREVIEW_METER: &str = "h-1.5 w-full overflow-hidden rounded-full bg-slate-800";
pub const PREVIEW_METER_FILL: &str =
    "h-full w-[92%] bg-gradient-to-r from-sky-400 via-cyan-300 to-emerald-300";

// =============================================================================
// Cards and lists
// =============================================================================

pub const FEATURE_GRID: &str = "grid gap-6 sm:grid-cols-2 lg:grid-cols-4";
pub const FEATURE_CARD: &str = "group relative flex flex-col gap-3 rounded-2xl border border-slate-800/80 bg-slate-950/40 p-4 shadow-sm transition-all duration-200 hover:border-sky-500/60 hover:bg-slate-900/60 hover:shadow-lg hover:shadow-sky-900/40 focus-within:border-sky-500/70 focus-within:shadow-lg focus-within:shadow-sky-900/40";
pub const FEATURE_ICON_WELL: &str = "inline-flex h-9 w-9 items-center justify-center rounded-xl bg-sky-500/10 text-sky-300 ring-1 ring-sky-500/40";
pub const FEATURE_ICON: &str = "h-4 w-4";
pub const FEATURE_NAME: &str = "text-sm font-semibold text-slate-50";
pub const FEATURE_DESCRIPTION: &str = "text-xs sm:text-sm text-slate-300";

pub const TESTIMONIAL_GRID: &str =
    "grid gap-10 lg:grid-cols-[minmax(0,1.1fr),minmax(0,1fr)] lg:items-center";
pub const HIGHLIGHT_LIST: &str = "flex flex-wrap gap-3 text-xs text-slate-400";
pub const HIGHLIGHT_ITEM: &str =
    "inline-flex items-center gap-1.5 rounded-full bg-slate-900/60 px-3 py-1";
pub const TESTIMONIAL_CARD: &str = "relative overflow-hidden rounded-2xl border border-slate-800/80 bg-slate-950/40 p-5 shadow-md shadow-slate-950/60";
pub const TESTIMONIAL_QUOTE_ICON: &str = "absolute -top-4 -left-2 h-10 w-10 text-sky-500/15";
pub const TESTIMONIAL_QUOTE: &str = "relative text-sm sm:text-base text-slate-200";
pub const TESTIMONIAL_CAPTION: &str = "mt-4 flex flex-col text-xs text-slate-400 sm:flex-row sm:items-center sm:justify-between";
pub const TESTIMONIAL_BADGE: &str = "mt-2 inline-flex items-center rounded-full bg-slate-900/80 px-3 py-1 text-[11px] font-medium text-slate-300 ring-1 ring-slate-700/80 sm:mt-0";

pub const FAQ_ITEM: &str = "rounded-2xl border border-slate-800/80 bg-slate-950/40 p-4";
pub const FAQ_QUESTION: &str = "text-sm font-medium text-slate-100";
pub const FAQ_ANSWER: &str = "mt-2 text-xs sm:text-sm text-slate-300";

// =============================================================================
// Final CTA
// =============================================================================

pub const CTA_FRAME: &str = "relative overflow-hidden rounded-3xl border border-sky-500/40 bg-gradient-to-r from-sky-600/30 via-cyan-500/20 to-emerald-500/25 p-1 shadow-[0_18px_45px_rgba(8,47,73,0.75)]";
pub const CTA_PANEL: &str = "relative flex flex-col gap-6 rounded-2xl bg-slate-950/95 px-6 py-8 sm:px-10 sm:py-10 lg:flex-row lg:items-center lg:justify-between";
pub const CTA_KICKER: &str = "text-xs font-semibold uppercase tracking-[0.18em] text-sky-300";
pub const CTA_TITLE: &str =
    "text-xl sm:text-2xl md:text-3xl font-semibold tracking-tight text-slate-50";
pub const CTA_BODY: &str = "text-xs sm:text-sm text-slate-200";

// =============================================================================
// Site header and footer
// =============================================================================

pub const SITE_HEADER: &str =
    "sticky top-0 z-20 border-b border-slate-900/80 bg-slate-950/85 backdrop-blur";
pub const SITE_HEADER_INNER: &str =
    "mx-auto flex max-w-6xl items-center justify-between px-4 py-3 sm:px-6 lg:px-8";
pub const BRAND_LINK: &str = concat!(
    "inline-flex items-center gap-2 text-sm font-semibold text-slate-50 ",
    "focus-visible:outline-none focus-visible:ring-2 focus-visible:ring-sky-400 focus-visible:ring-offset-2 focus-visible:ring-offset-slate-950",
    " rounded-full px-2 py-1"
);
pub const BRAND_MARK: &str = "flex h-7 w-7 items-center justify-center rounded-full bg-gradient-to-br from-sky-400 to-emerald-400 text-slate-950 text-xs font-black";
pub const BRAND_NAME: &str = "hidden sm:inline";
pub const BRAND_TAGLINE: &str = "hidden text-xs font-normal text-slate-400 sm:inline";
pub const NAV: &str = "flex items-center gap-4 text-xs sm:text-sm";
pub const NAV_LINK: &str = concat!(
    "text-slate-300 transition-colors hover:text-sky-300 ",
    "focus-visible:outline-none focus-visible:ring-2 focus-visible:ring-sky-400 focus-visible:ring-offset-2 focus-visible:ring-offset-slate-950",
    " rounded-full px-2 py-1"
);
pub const NAV_BUTTON: &str = concat!(
    "hidden rounded-full border border-slate-700/80 bg-slate-900/50 px-3 py-1.5 text-xs font-medium text-slate-100 shadow-sm transition-all hover:bg-slate-800 hover:border-slate-500 ",
    "focus-visible:outline-none focus-visible:ring-2 focus-visible:ring-sky-400 focus-visible:ring-offset-2 focus-visible:ring-offset-slate-950",
    " sm:inline-flex"
);

pub const FOOTER: &str = "border-t border-slate-900/80 bg-slate-950/90";
pub const FOOTER_INNER: &str = "mx-auto flex max-w-6xl flex-col gap-3 px-4 py-5 text-xs text-slate-500 sm:flex-row sm:items-center sm:justify-between sm:px-6 lg:px-8";
pub const FOOTER_NOTE: &str = "text-[11px]";
