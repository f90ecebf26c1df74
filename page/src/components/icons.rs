//! Inline SVG icons (Lucide, stroke style).
//!
//! Each [`FeatureIcon`] maps to the path data of one
//! [Lucide](https://lucide.dev/) glyph drawn on a 24×24 grid.

use leptos::prelude::*;

use crate::catalog::FeatureIcon;

/// Renders a stroke icon from a list of path data strings.
///
/// # Example
///
/// ```rust,ignore
/// view! { <Icon paths=ICON_SPROUT class="benefit-bullet" /> }
/// ```
#[component]
pub fn Icon(
    /// SVG path data, one entry per `<path>`
    paths: &'static [&'static str],
    /// Icon size in pixels
    #[prop(default = "24")]
    size: &'static str,
    /// Additional CSS class names
    #[prop(default = "")]
    class: &'static str,
) -> impl IntoView {
    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            width=size
            height=size
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
            class=class
        >
            {paths.iter().map(|&d| view! { <path d=d></path> }).collect_view()}
        </svg>
    }
}

impl FeatureIcon {
    /// Path data of the glyph.
    pub fn paths(self) -> &'static [&'static str] {
        match self {
            FeatureIcon::Drone => ICON_DRONE,
            FeatureIcon::Droplet => ICON_DROPLET,
            FeatureIcon::Leaf => ICON_LEAF,
            FeatureIcon::BarChart => ICON_BAR_CHART,
            FeatureIcon::Zap => ICON_ZAP,
            FeatureIcon::Sprout => ICON_SPROUT,
        }
    }
}

// =============================================================================
// Lucide icons - https://lucide.dev/
// =============================================================================

/// Drill glyph, stands in for a drone
pub const ICON_DRONE: &[&str] = &[
    "M10 18a1 1 0 0 1 1 1v2a1 1 0 0 1-1 1H5a3 3 0 0 1-3-3 1 1 0 0 1 1-1z",
    "M13 10H4a2 2 0 0 1-2-2V4a2 2 0 0 1 2-2h9a1 1 0 0 1 1 1v6a1 1 0 0 1-1 1z",
    "M5 10v8",
    "M14 4h4a2 2 0 0 1 2 2v0a2 2 0 0 1-2 2h-4",
    "M20 6h2",
];

/// Water droplet
pub const ICON_DROPLET: &[&str] =
    &["M12 22a7 7 0 0 0 7-7c0-2-1-3.9-3-5.5s-3.5-4-4-6.5c-.5 2.5-2 4.9-4 6.5C6 11.1 5 13 5 15a7 7 0 0 0 7 7z"];

/// Leaf
pub const ICON_LEAF: &[&str] = &[
    "M11 20A7 7 0 0 1 9.8 6.1C15.5 5 17 4.48 19 2c1 2 2 4.18 2 8 0 5.5-4.78 10-10 10Z",
    "M2 21c0-3 1.85-5.36 5.08-6C9.5 14.52 12 13 13 12",
];

/// Bar chart
pub const ICON_BAR_CHART: &[&str] = &["M12 20V10", "M18 20V4", "M6 20v-4"];

/// Lightning bolt
pub const ICON_ZAP: &[&str] = &["M13 2 3 14h9l-1 8 10-12h-9l1-8z"];

/// Sprout
pub const ICON_SPROUT: &[&str] = &[
    "M7 20h10",
    "M10 20c5.5-2.5.8-6.4 3-10",
    "M9.5 9.4c1.1.8 1.8 2.2 2.3 3.7-2 .4-3.5.4-4.8-.3-1.2-.6-2.3-1.9-3-4.2 2.8-.5 4.4 0 5.5.8z",
    "M14.1 6a7 7 0 0 0-1.1 4c1.9-.1 3.3-.6 4.3-1.4 1-1 1.6-2.3 1.7-4.6-2.7.1-4 1-4.9 2z",
];

/// Close (X)
pub const ICON_X: &[&str] = &["M18 6 6 18", "m6 6 12 12"];
