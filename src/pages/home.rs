// =============================================================================
// Toorrii Web - Home Page
// =============================================================================

use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::{Card, Footer, Hero, Icon, IconName, Reveal, SiteHeader};
use crate::data::{directory, PartnerRecord};
use crate::state::use_app_state;

/// Public landing page.
#[component]
pub fn HomePage() -> impl IntoView {
    let app_state = use_app_state();

    view! {
        <div class="page page-home">
            <Title text=move || app_state.translator().t("hero.title") />
            <SiteHeader active="home" />
            <Hero />
            <Partnerships />
            <Footer />
        </div>
    }
}

/// Partner listing; target of every "back to partnerships" link.
#[component]
fn Partnerships() -> impl IntoView {
    let app_state = use_app_state();
    let partners = directory().all();

    view! {
        <section id="partnerships" class="partnerships">
            {move || {
                let tr = app_state.translator();
                let view_label = tr.t("partnerships.viewDetails");

                view! {
                    <Reveal class="section-header">
                        <h2>{tr.t("partnerships.title")}</h2>
                        <p class="text-muted">{tr.t("partnerships.subtitle")}</p>
                    </Reveal>

                    {if partners.is_empty() {
                        view! { <p class="partnerships-empty">{tr.t("partnerships.empty")}</p> }.into_any()
                    } else {
                        view! {
                            <div class="partner-grid">
                                {partners
                                    .iter()
                                    .enumerate()
                                    .map(|(index, partner)| view! {
                                        <PartnerCard partner=partner view_label=view_label.clone() delay_ms=index as u32 * 100 />
                                    })
                                    .collect::<Vec<_>>()}
                            </div>
                        }
                        .into_any()
                    }}
                }
            }}
        </section>
    }
}

#[component]
fn PartnerCard(partner: &'static PartnerRecord, view_label: String, delay_ms: u32) -> impl IntoView {
    view! {
        <Reveal delay_ms=delay_ms>
            <a href=partner.href() class="partner-card-link">
                <Card class="partner-card">
                    <img src=partner.logo.as_str() alt=partner.name.as_str() class="partner-card-logo" />
                    <span class="badge">{partner.industry.as_str()}</span>
                    <h3>{partner.name.as_str()}</h3>
                    <p class="text-muted">{partner.description.as_str()}</p>
                    <span class="partner-card-more">
                        {view_label}
                        <Icon name=IconName::ArrowRight />
                    </span>
                </Card>
            </a>
        </Reveal>
    }
}
