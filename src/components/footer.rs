// =============================================================================
// Toorrii Web - Footer Component
// =============================================================================
// Global footer shown on all pages
// =============================================================================

use leptos::prelude::*;

use crate::state::use_app_state;

/// Site footer.
#[component]
pub fn Footer() -> impl IntoView {
    let app_state = use_app_state();
    let config = app_state.config.clone();
    let year = chrono::Utc::now().format("%Y").to_string();

    view! {
        <footer class="site-footer">
            {move || {
                let tr = app_state.translator();
                view! {
                    <div class="footer-main">
                        // Brand Column
                        <div class="footer-brand-col">
                            <a href="/" class="footer-logo-link">
                                <img src="/assets/logo.svg" alt="Toorrii" class="footer-logo-img" />
                            </a>
                            <p class="footer-tagline">{tr.t("brand.tagline")}</p>
                        </div>

                        <div class="footer-links-grid">
                            <div class="footer-link-col">
                                <h5 class="footer-col-title">{tr.t("footer.explore")}</h5>
                                <a href="/" class="footer-link">{tr.t("nav.home")}</a>
                                <a href="/about" class="footer-link">{tr.t("nav.about")}</a>
                                <a href="/#partnerships" class="footer-link">{tr.t("nav.partnerships")}</a>
                                <a href="/contact" class="footer-link">{tr.t("nav.contact")}</a>
                            </div>
                            <div class="footer-link-col">
                                <h5 class="footer-col-title">{tr.t("footer.reachUs")}</h5>
                                <a href=format!("mailto:{}", config.contact_email) class="footer-link">
                                    {config.contact_email}
                                </a>
                                <span class="footer-link" dir="ltr">{config.contact_phone}</span>
                                <span class="footer-link">{config.contact_location}</span>
                            </div>
                        </div>
                    </div>

                    <div class="footer-divider"></div>

                    <div class="footer-bottom-bar">
                        <p class="footer-copyright">
                            {format!("© {} {}. {}", year, tr.t("brand.name"), tr.t("footer.rights"))}
                        </p>
                    </div>
                }
            }}
        </footer>
    }
}
