use leptos::prelude::*;

use super::{BenefitsSection, CallToAction, FeatureDialogs, FeatureGrid, PageHeader, ProcessSection};
use crate::state::PageState;

/// The whole page body, top to bottom.
#[component]
pub fn LandingPage(state: PageState) -> impl IntoView {
    view! {
        <div class="page">
            <div class="container">
                <PageHeader />
                <FeatureGrid state=state />
                <BenefitsSection />
                <ProcessSection />
                <CallToAction />
            </div>
            <FeatureDialogs state=state />
        </div>
    }
}
