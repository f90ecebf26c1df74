//! # agro-page
//!
//! Leptos components for the precision-agriculture landing page, plus a
//! static renderer for exporting it as a single HTML file.
//!
//! The page is presentational: a hero header, six feature cards (each with
//! a detail dialog of activities and deliverables), a benefits list, a
//! "how it works" sequence and a call to action. All content is static and
//! lives in [`catalog`]. The only state is which card is hovered and which
//! dialogs are open ([`state::PageState`]).
//!
//! ## Quick Start
//!
//! ```rust
//! use agro_page::render_page;
//!
//! let html = render_page();
//! assert!(html.starts_with("<!DOCTYPE html>"));
//! assert!(html.contains("Monitoreo con Drones"));
//! ```
//!
//! ## Features
//!
//! - `ssr` (default) - static HTML rendering and [`export`]
//! - `csr` - client-side rendering for the WASM landing, plus [`browser`]
//!   console logging
//!
//! ## Leptos 0.8 SSR
//!
//! Rendering goes through Leptos 0.8's `RenderHtml` trait inside a fresh
//! reactive [`Owner`], so signals created for the render are disposed with it.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

#[cfg(feature = "csr")]
pub mod browser;
pub mod catalog;
pub mod components;
#[cfg(feature = "ssr")]
pub mod export;
pub mod motion;
pub mod state;
pub mod styles;

#[cfg(feature = "ssr")]
use components::PageDocument;
#[cfg(feature = "ssr")]
use leptos::prelude::*;
#[cfg(feature = "ssr")]
use leptos::tachys::view::RenderHtml;
#[cfg(feature = "ssr")]
use state::PageState;

/// Render the complete page with no interaction applied.
///
/// Returns a full HTML document, including `<!DOCTYPE html>` and the inline
/// stylesheet. Two calls return identical output.
#[cfg(feature = "ssr")]
pub fn render_page() -> String {
    render_page_with(|_| {})
}

/// Render the complete page after `prepare` has adjusted the UI state.
///
/// # Example
///
/// ```rust
/// use agro_page::render_page_with;
///
/// // Page as it looks with the third card's dialog open
/// let html = render_page_with(|state| state.open_dialog(2));
/// assert!(html.contains("Análisis de suelos"));
/// ```
#[cfg(feature = "ssr")]
pub fn render_page_with(prepare: impl FnOnce(&PageState)) -> String {
    let owner = Owner::new();
    let html = owner.with(|| {
        let state = PageState::new();
        prepare(&state);
        view! { <PageDocument state=state /> }.to_html()
    });

    // Leptos doesn't include DOCTYPE, so we add it
    format!("<!DOCTYPE html>\n{}", html)
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use crate::catalog::{BENEFITS, COPY, FEATURE_COUNT, FEATURES, PROCESS_STEPS};
    use pretty_assertions::assert_eq;

    /// Byte offsets of `needles` in `html`, asserting each is present.
    fn positions(html: &str, needles: &[&str]) -> Vec<usize> {
        needles
            .iter()
            .map(|n| html.find(n).unwrap_or_else(|| panic!("missing {n:?}")))
            .collect()
    }

    fn assert_in_order(html: &str, needles: &[&str]) {
        let found = positions(html, needles);
        assert!(
            found.windows(2).all(|w| w[0] < w[1]),
            "out of order: {needles:?} at {found:?}"
        );
    }

    /// Opening tags of the elements still open at byte offset `pos`,
    /// outermost first. `pos` must be the start of a tag.
    fn open_ancestors(html: &str, pos: usize) -> Vec<&str> {
        const VOID: &[&str] = &["meta", "link", "br", "hr", "img", "input"];

        let mut stack = Vec::new();
        let mut cursor = 0;
        while let Some(offset) = html[cursor..pos].find('<') {
            let start = cursor + offset;
            let end = start + html[start..].find('>').expect("unterminated tag") + 1;
            let tag = &html[start..end];
            cursor = end;

            if tag.starts_with("<!") {
                continue;
            }
            if tag.starts_with("</") {
                stack.pop();
                continue;
            }
            let name = tag[1..]
                .split(|c: char| c.is_whitespace() || c == '>' || c == '/')
                .next()
                .unwrap_or_default();
            if !VOID.contains(&name) && !tag.ends_with("/>") {
                stack.push(tag);
            }
        }
        stack
    }

    /// Markup of card `index`, from its wrapper to the next card.
    fn card_markup(html: &str, index: usize) -> &str {
        let start = html
            .find(&format!("id=\"feature-{index}\""))
            .expect("card present");
        let end = html[start..]
            .find(&format!("id=\"feature-{}\"", index + 1))
            .map_or(html.len(), |offset| start + offset);
        &html[start..end]
    }

    #[test]
    fn renders_document_shell() {
        let html = render_page();

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<html lang=\"es\""));
        assert!(html.contains(COPY.document_title));
        assert!(html.contains("@keyframes fade-in"));
    }

    #[test]
    fn renders_header_and_sections_in_order() {
        let html = render_page();

        assert_in_order(
            &html,
            &[
                COPY.hero_title,
                COPY.hero_subtitle,
                COPY.features_heading,
                COPY.benefits_heading,
                COPY.process_heading,
                COPY.cta_heading,
                COPY.cta_label,
            ],
        );
    }

    #[test]
    fn renders_six_feature_cards() {
        let html = render_page();

        assert_eq!(html.matches("class=\"feature-card\"").count(), FEATURE_COUNT);
        for (index, feature) in FEATURES.iter().enumerate() {
            let card = card_markup(&html, index);
            assert!(card.contains(feature.title), "{}", feature.title);
            assert!(card.contains(feature.description), "{}", feature.title);
        }
    }

    #[test]
    fn dialogs_are_closed_initially() {
        let html = render_page();

        assert!(!html.contains("role=\"dialog\""));
        assert!(!html.contains(COPY.activities_heading));
        for feature in &FEATURES {
            for item in feature.activities.iter().chain(feature.deliverables) {
                assert!(!html.contains(item), "{item} leaked");
            }
        }
    }

    #[test]
    fn activating_a_card_lists_only_its_details() {
        for (index, feature) in FEATURES.iter().enumerate() {
            let html = render_page_with(|state| state.open_dialog(index));

            assert_eq!(html.matches("role=\"dialog\"").count(), 1);
            assert!(html.contains(&format!("id=\"feature-{index}-dialog-title\"")));

            let mut expected = vec![COPY.activities_heading];
            expected.extend(feature.activities);
            expected.push(COPY.deliverables_heading);
            expected.extend(feature.deliverables);
            assert_in_order(&html, &expected);
            for item in feature.activities.iter().chain(feature.deliverables) {
                assert_eq!(html.matches(item).count(), 1, "{item}");
            }

            for other in FEATURES.iter().filter(|f| f.title != feature.title) {
                for item in other.activities.iter().chain(other.deliverables) {
                    assert!(!html.contains(item), "{item} shown for {}", feature.title);
                }
            }
        }
    }

    #[test]
    fn open_dialog_is_not_nested_in_animated_elements() {
        let html = render_page_with(|state| state.open_dialog(0));

        let marker = html.find("class=\"dialog-backdrop\"").expect("dialog rendered");
        let tag_start = html[..marker].rfind('<').expect("backdrop tag");
        let ancestors = open_ancestors(&html, tag_start);

        assert!(ancestors.iter().any(|tag| tag.starts_with("<body")));
        assert!(ancestors.iter().any(|tag| tag.contains("class=\"page\"")));
        for tag in ancestors {
            assert!(!tag.contains("animation:"), "dialog nested in animated {tag}");
        }
    }

    #[test]
    fn open_dialog_follows_page_content() {
        let html = render_page_with(|state| state.open_dialog(5));

        assert_in_order(&html, &[COPY.cta_label, "role=\"dialog\""]);
    }

    #[test]
    fn closing_a_dialog_hides_it_again() {
        let html = render_page_with(|state| {
            state.open_dialog(3);
            state.close_dialog(3);
        });

        assert!(!html.contains("role=\"dialog\""));
    }

    #[test]
    fn hover_activates_only_that_cards_icon() {
        let html = render_page_with(|state| state.hover_enter(2));

        assert_eq!(html.matches("data-state=\"active\"").count(), 1);
        assert_eq!(html.matches("data-state=\"idle\"").count(), FEATURE_COUNT - 1);
        let card = card_markup(&html, 2);
        assert!(card.contains("data-state=\"active\""));
        assert!(card.contains("rotate(360deg)"));
        assert!(!card_markup(&html, 1).contains("rotate(360deg)"));
    }

    #[test]
    fn hover_leave_resets_every_icon() {
        let html = render_page_with(|state| {
            state.hover_enter(4);
            state.hover_leave();
        });

        assert_eq!(html.matches("data-state=\"active\"").count(), 0);
        assert!(!html.contains("rotate(360deg)"));
    }

    #[test]
    fn renders_six_benefits_in_order() {
        let html = render_page();

        assert_eq!(html.matches("class=\"benefit\"").count(), 6);
        assert_in_order(&html, &BENEFITS);
    }

    #[test]
    fn renders_five_process_steps_in_order() {
        let html = render_page();

        assert_eq!(html.matches("class=\"process-step\"").count(), 5);
        let needles: Vec<&str> = PROCESS_STEPS
            .iter()
            .flat_map(|step| [step.title, step.description])
            .collect();
        assert_in_order(&html, &needles);
    }

    #[test]
    fn benefit_and_step_entrances_are_staggered() {
        let html = render_page();

        assert!(html.contains("--enter-x: -50px; --enter-y: 0px; animation: enter 0.5s ease-out 0.5s both;"));
        assert!(html.contains("--enter-x: 0px; --enter-y: 20px; animation: enter 0.5s ease-out 0.8s both;"));
    }

    #[test]
    fn rerender_is_idempotent() {
        assert_eq!(render_page(), render_page());
    }
}
