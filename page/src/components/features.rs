//! Feature grid: one card per catalog entry, each owning a detail dialog.
//!
//! Dialogs are rendered by [`FeatureDialogs`], outside the grid. The cards
//! and sections fade in with `animation-fill-mode: both`, which leaves each
//! of them a stacking context, so a `position: fixed` overlay nested inside
//! would be painted below the following siblings.

use leptos::ev::{KeyboardEvent, MouseEvent};
use leptos::html::Article;
use leptos::prelude::*;

use super::{ICON_X, Icon};
use crate::catalog::{CATALOG, COPY, FeatureEntry};
use crate::motion::{CARD_STAGGER, FADE_IN, ICON_SPIN};
use crate::state::PageState;

/// Section heading plus one card per feature.
#[component]
pub fn FeatureGrid(state: PageState) -> impl IntoView {
    view! {
        <section id="features" class="section" style=FADE_IN.style(0.0)>
            <h2 class="section-title">{COPY.features_heading}</h2>
            <div class="features-grid">
                {CATALOG
                    .features
                    .iter()
                    .zip(state.card_refs())
                    .enumerate()
                    .map(|(index, (feature, card_ref))| {
                        view! {
                            <FeatureCard index=index feature=feature card_ref=card_ref state=state />
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}

/// A summary card. Hover spins its icon; activation opens its dialog.
#[component]
pub fn FeatureCard(
    /// Position in the grid, used as the card's identity
    index: usize,
    feature: &'static FeatureEntry,
    /// Focus target when the card's dialog closes
    card_ref: NodeRef<Article>,
    state: PageState,
) -> impl IntoView {
    let activate_key = move |ev: KeyboardEvent| {
        if matches!(ev.key().as_str(), "Enter" | " ") {
            ev.prevent_default();
            state.open_dialog(index);
        }
    };
    let icon_state = move || if state.is_hovered(index) { "active" } else { "idle" };

    view! {
        <div class="feature-item" style=FADE_IN.style(index as f32 * CARD_STAGGER)>
            <article
                node_ref=card_ref
                id=format!("feature-{index}")
                class="feature-card"
                role="button"
                tabindex="0"
                aria-haspopup="dialog"
                on:mouseenter=move |_| state.hover_enter(index)
                on:mouseleave=move |_| state.hover_leave()
                on:click=move |_| state.open_dialog(index)
                on:keydown=activate_key
            >
                <h3 class="feature-title">
                    <span
                        class="feature-icon"
                        data-state=icon_state
                        style=move || ICON_SPIN.style(state.is_hovered(index))
                    >
                        <Icon paths=feature.icon.paths() />
                    </span>
                    {feature.title}
                </h3>
                <p class="feature-description">{feature.description}</p>
            </article>
        </div>
    }
}

/// One dialog slot per feature, each shown while its flag is open.
///
/// Place it outside every animated wrapper (see the module docs).
#[component]
pub fn FeatureDialogs(state: PageState) -> impl IntoView {
    CATALOG
        .features
        .iter()
        .enumerate()
        .map(|(index, feature)| {
            view! {
                <Show when=move || state.is_dialog_open(index)>
                    <FeatureDialog index=index feature=feature state=state />
                </Show>
            }
        })
        .collect_view()
}

/// Modal listing a feature's activities and deliverables.
///
/// Closes on the close button, a click on the backdrop, or Escape. Closing
/// returns focus to the card that opened it.
#[component]
fn FeatureDialog(index: usize, feature: &'static FeatureEntry, state: PageState) -> impl IntoView {
    let title_id = format!("feature-{index}-dialog-title");
    let dialog_ref = NodeRef::<leptos::html::Div>::new();
    let close = move |_: MouseEvent| state.close_dialog(index);
    let close_on_escape = move |ev: KeyboardEvent| {
        if ev.key() == "Escape" {
            state.close_dialog(index);
        }
    };

    // Focus the dialog so Escape reaches it
    Effect::new(move |_| {
        if let Some(dialog) = dialog_ref.get() {
            if let Err(err) = dialog.focus() {
                tracing::warn!(index, ?err, "cannot focus feature dialog");
            }
        }
    });

    let labelled_by = title_id.clone();
    view! {
        <div class="dialog-backdrop" on:click=close on:keydown=close_on_escape>
            <div
                node_ref=dialog_ref
                class="dialog"
                role="dialog"
                aria-modal="true"
                aria-labelledby=labelled_by
                tabindex="-1"
                on:click=|ev: MouseEvent| ev.stop_propagation()
            >
                <button type="button" class="dialog-close" aria-label=COPY.close_label on:click=close>
                    <Icon paths=ICON_X size="16" />
                </button>
                <h2 id=title_id class="dialog-title">{feature.title}</h2>
                <div class="dialog-body">
                    <DetailList heading=COPY.activities_heading items=feature.activities />
                    <DetailList heading=COPY.deliverables_heading items=feature.deliverables />
                </div>
            </div>
        </div>
    }
}

#[component]
fn DetailList(heading: &'static str, items: &'static [&'static str]) -> impl IntoView {
    view! {
        <div>
            <h3 class="dialog-list-title">{heading}</h3>
            <ul class="dialog-list">
                {items.iter().map(|&item| view! { <li>{item}</li> }).collect_view()}
            </ul>
        </div>
    }
}
