//! Root document component - the complete static HTML page

use leptos::prelude::*;

use super::LandingPage;
use crate::catalog::COPY;
use crate::state::PageState;
use crate::styles::{CSP, PAGE_CSS};

/// The complete HTML document for the exported page
#[component]
pub fn PageDocument(state: PageState) -> impl IntoView {
    view! {
        <html lang="es">
            <head>
                <meta charset="UTF-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <meta http-equiv="Content-Security-Policy" content=CSP />
                <title>{COPY.document_title}</title>
                <style>{PAGE_CSS}</style>
            </head>
            <body>
                <LandingPage state=state />
            </body>
        </html>
    }
}
