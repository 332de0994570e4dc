// =============================================================================
// Toorrii Web - Main App Component
// =============================================================================
// Table of Contents:
// 1. Imports
// 2. App Component
// 3. Document Attributes
// =============================================================================

use leptos::prelude::*;
use leptos_meta::{provide_meta_context, Title};
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;
use web_sys::window;

use crate::components::ToastHost;
use crate::i18n::Language;
use crate::pages::{AboutPage, ContactPage, HomePage, NotFoundPage, PartnerDetailPage};
use crate::services::Toaster;
use crate::state::AppState;

// -----------------------------------------------------------------------------
// 2. App Component
// -----------------------------------------------------------------------------

/// Root application component with routing.
#[component]
pub fn App() -> impl IntoView {
    let app_state = AppState::new();
    let language = app_state.language;

    provide_context(app_state);
    provide_context(Toaster::new());
    provide_meta_context();

    // Keep <html lang dir> in step with the active language
    Effect::new(move |_| apply_document_language(language.get()));

    view! {
        <Title formatter=|text: String| {
            if text.is_empty() { "Toorrii".to_string() } else { format!("{} | Toorrii", text) }
        } />

        <Router>
            <Routes fallback=NotFoundPage>
                <Route path=path!("/") view=HomePage />
                <Route path=path!("/about") view=AboutPage />
                <Route path=path!("/contact") view=ContactPage />
                <Route path=path!("/partners/:partner_id") view=PartnerDetailPage />
            </Routes>
        </Router>

        <ToastHost />
    }
}

// -----------------------------------------------------------------------------
// 3. Document Attributes
// -----------------------------------------------------------------------------

fn apply_document_language(language: Language) {
    let Some(root) = window()
        .and_then(|win| win.document())
        .and_then(|doc| doc.document_element())
    else {
        log::warn!("No document element; skipping lang/dir update");
        return;
    };

    if let Err(err) = root.set_attribute("lang", language.code()) {
        log::warn!("Failed to set lang attribute: {:?}", err);
    }
    if let Err(err) = root.set_attribute("dir", language.direction().as_attr()) {
        log::warn!("Failed to set dir attribute: {:?}", err);
    }
}
