use leptos::prelude::*;

use crate::catalog::COPY;
use crate::motion::FADE_IN;

/// Hero title and subtitle.
#[component]
pub fn PageHeader() -> impl IntoView {
    view! {
        <header class="hero" style=FADE_IN.style(0.0)>
            <h1 class="hero-title">{COPY.hero_title}</h1>
            <p class="hero-subtitle">{COPY.hero_subtitle}</p>
        </header>
    }
}
