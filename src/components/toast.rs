// =============================================================================
// Toorrii Web - Toast Host
// =============================================================================

use leptos::prelude::*;

use crate::services::toast::use_toaster;
use crate::state::use_app_state;

/// Renders the page-wide toast queue.
#[component]
pub fn ToastHost() -> impl IntoView {
    let toaster = use_toaster();
    let queue = toaster.queue();
    let language = use_app_state().language;

    view! {
        <div class="toast-host" role="status" aria-live="polite">
            <For
                each=move || queue.with(|q| q.toasts().to_vec())
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    view! {
                        <div class=toast.kind.class()>
                            <span class="toast-message">{toast.message}</span>
                            <button
                                class="toast-dismiss"
                                aria-label=move || crate::i18n::Translator::new(language.get()).t("toast.dismiss")
                                on:click=move |_| toaster.dismiss(id)
                            >
                                "✕"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
