// =============================================================================
// Toorrii Web - Site Header
// =============================================================================
// Navigation bar shared by all pages, with language switcher.
// Mobile-responsive with hamburger menu and slide-out drawer.
// =============================================================================

use leptos::prelude::*;

use crate::i18n::{Language, Translator};
use crate::state::use_app_state;

/// Navigation entries: (section id, href, translation key).
const NAV_LINKS: [(&str, &str, &str); 4] = [
    ("home", "/", "nav.home"),
    ("about", "/about", "nav.about"),
    ("partnerships", "/#partnerships", "nav.partnerships"),
    ("contact", "/contact", "nav.contact"),
];

fn link_class(base: &'static str, page: &str, active: &str) -> String {
    if page == active {
        format!("{} active", base)
    } else {
        base.to_string()
    }
}

/// Site header.
///
/// # Arguments
/// * `active` - The currently active section (e.g., "home", "about", "contact")
#[component]
pub fn SiteHeader(#[prop(optional, into)] active: String) -> impl IntoView {
    let app_state = use_app_state();
    let language = app_state.language;

    // Mobile menu state
    let menu_open = RwSignal::new(false);
    let close_menu = move || menu_open.set(false);

    let active_desktop = active.clone();
    let active_mobile = active;

    view! {
        <nav class="site-nav">
            <a href="/" class="nav-logo">
                <img src="/assets/logo.svg" alt="Toorrii" class="nav-logo-svg" />
            </a>

            // Desktop links
            <div class="nav-links desktop-only">
                {move || {
                    let tr = Translator::new(language.get());
                    NAV_LINKS
                        .iter()
                        .map(|&(page, href, key)| {
                            view! {
                                <a href=href class=link_class("nav-link", page, &active_desktop)>
                                    {tr.t(key)}
                                </a>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
            </div>

            <div class="nav-right desktop-only">
                <LanguageSwitcher />
            </div>

            // Hamburger button (mobile only)
            <button
                class="hamburger-btn mobile-only"
                aria-label=move || translate(language.get(), "nav.menu")
                aria-expanded=move || menu_open.get().to_string()
                on:click=move |_| menu_open.update(|v| *v = !*v)
            >
                <span class=move || if menu_open.get() { "hamburger-line open line-1" } else { "hamburger-line line-1" }></span>
                <span class=move || if menu_open.get() { "hamburger-line open line-2" } else { "hamburger-line line-2" }></span>
                <span class=move || if menu_open.get() { "hamburger-line open line-3" } else { "hamburger-line line-3" }></span>
            </button>

            // Mobile backdrop (closes menu on tap)
            <div
                class=move || if menu_open.get() { "mobile-backdrop visible" } else { "mobile-backdrop" }
                on:click=move |_| menu_open.set(false)
            ></div>

            // Mobile drawer
            <div class=move || if menu_open.get() { "mobile-drawer open" } else { "mobile-drawer" }>
                <div class="drawer-header">
                    <a href="/" class="drawer-logo" on:click=move |_| close_menu()>
                        <img src="/assets/logo.svg" alt="Toorrii" />
                    </a>
                    <button
                        class="drawer-close"
                        aria-label=move || translate(language.get(), "nav.closeMenu")
                        on:click=move |_| menu_open.set(false)
                    >
                        <svg viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
                            <path d="M18 6L6 18"></path>
                            <path d="M6 6l12 12"></path>
                        </svg>
                    </button>
                </div>

                <nav class="drawer-nav">
                    {move || {
                        let tr = Translator::new(language.get());
                        NAV_LINKS
                            .iter()
                            .map(|&(page, href, key)| {
                                view! {
                                    <a
                                        href=href
                                        class=link_class("mobile-nav-link", page, &active_mobile)
                                        on:click=move |_| close_menu()
                                    >
                                        {tr.t(key)}
                                    </a>
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                </nav>

                <div class="drawer-divider"></div>

                <div class="drawer-footer">
                    <LanguageSwitcher />
                </div>
            </div>
        </nav>
    }
}

fn translate(language: Language, key: &str) -> String {
    Translator::new(language).t(key)
}

/// Buttons for switching the display language.
#[component]
pub fn LanguageSwitcher() -> impl IntoView {
    let app_state = use_app_state();
    let language = app_state.language;

    view! {
        <div
            class="language-switcher"
            role="group"
            aria-label=move || translate(language.get(), "nav.language")
        >
            {Language::ALL
                .into_iter()
                .map(|option| {
                    let app_state = app_state.clone();
                    view! {
                        <button
                            class=move || if language.get() == option { "lang-btn active" } else { "lang-btn" }
                            lang=option.code()
                            aria-pressed=move || (language.get() == option).to_string()
                            on:click=move |_| app_state.set_language(option)
                        >
                            {option.label()}
                        </button>
                    }
                })
                .collect::<Vec<_>>()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_active_link_class() {
        assert_eq!(link_class("nav-link", "about", "about"), "nav-link active");
        assert_eq!(link_class("nav-link", "home", "about"), "nav-link");
    }

    #[test]
    fn test_partnerships_link_targets_listing_anchor() {
        let (_, href, _) = NAV_LINKS.iter().find(|(page, _, _)| *page == "partnerships").unwrap();
        assert_eq!(*href, crate::pages::partner_detail::LISTING_HREF);
    }
}
