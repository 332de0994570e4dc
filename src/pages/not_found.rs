// =============================================================================
// Toorrii Web - 404 Not Found Page
// =============================================================================

use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::{ButtonVariant, LinkButton, SiteHeader};
use crate::state::use_app_state;

/// Fallback for unknown routes.
#[component]
pub fn NotFoundPage() -> impl IntoView {
    let app_state = use_app_state();

    view! {
        <div class="page page-not-found">
            <SiteHeader />
            {move || {
                let tr = app_state.translator();
                view! {
                    <Title text=tr.t("notFound.title") />
                    <div class="not-found-content">
                        <span class="not-found-code">"404"</span>
                        <h1>{tr.t("notFound.title")}</h1>
                        <p>{tr.t("notFound.desc")}</p>
                        <LinkButton href="/" variant=ButtonVariant::Primary>
                            {tr.t("notFound.home")}
                        </LinkButton>
                    </div>
                }
            }}
        </div>
    }
}
