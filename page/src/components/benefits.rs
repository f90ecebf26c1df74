use leptos::prelude::*;

use super::{ICON_SPROUT, Icon};
use crate::catalog::{BENEFITS, COPY};
use crate::motion::{BENEFIT_ENTRANCE, FADE_IN};

/// Benefit lines, each sliding in from the left a tenth of a second after the previous.
#[component]
pub fn BenefitsSection() -> impl IntoView {
    view! {
        <section id="benefits" class="section section-panel" style=FADE_IN.style(0.0)>
            <h2 class="section-title">{COPY.benefits_heading}</h2>
            <ul class="benefits-list">
                {BENEFITS
                    .iter()
                    .enumerate()
                    .map(|(index, &benefit)| {
                        view! {
                            <li class="benefit" style=BENEFIT_ENTRANCE.style(index)>
                                <Icon paths=ICON_SPROUT size="20" class="benefit-bullet" />
                                {benefit}
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </section>
    }
}
