use leptos::prelude::*;

use crate::catalog::{COPY, PROCESS_STEPS, ProcessStep};
use crate::motion::{FADE_IN, STEP_ENTRANCE};

/// "How it works" steps as an ordered list.
#[component]
pub fn ProcessSection() -> impl IntoView {
    view! {
        <section id="how-it-works" class="section" style=FADE_IN.style(0.0)>
            <h2 class="section-title">{COPY.process_heading}</h2>
            <ol class="process-list">
                {PROCESS_STEPS
                    .iter()
                    .enumerate()
                    .map(|(index, step)| view! { <StepItem index=index step=*step /> })
                    .collect_view()}
            </ol>
        </section>
    }
}

#[component]
fn StepItem(index: usize, step: ProcessStep) -> impl IntoView {
    view! {
        <li class="process-step" style=STEP_ENTRANCE.style(index)>
            <h3 class="process-title">{step.title}</h3>
            <p class="process-description">{step.description}</p>
        </li>
    }
}
