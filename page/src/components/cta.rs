use leptos::prelude::*;

use crate::catalog::COPY;
use crate::motion::{CTA_PRESS, FADE_IN};

/// Closing call to action. The button is a placeholder with no handler.
#[component]
pub fn CallToAction() -> impl IntoView {
    view! {
        <section id="contact" class="section-panel cta" style=FADE_IN.style(0.0)>
            <h2 class="section-title">{COPY.cta_heading}</h2>
            <div class="cta-motion" style=CTA_PRESS.style()>
                <button type="button" class="btn-primary">
                    {COPY.cta_label}
                </button>
            </div>
        </section>
    }
}
