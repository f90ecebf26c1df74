// Precision-agriculture landing page - Leptos 0.8 client-side entry

use agro_page::components::LandingPage;
use agro_page::state::PageState;
use agro_page::styles::PAGE_CSS;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    agro_page::browser::init_logging();
    leptos::mount::mount_to_body(|| view! { <App /> });
}

#[component]
fn App() -> impl IntoView {
    let state = PageState::new();
    view! {
        <style>{PAGE_CSS}</style>
        <LandingPage state=state />
    }
}
