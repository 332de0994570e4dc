// =============================================================================
// Toorrii Web - About Page
// =============================================================================
// Company overview: mission, vision, values, audience and contact details.
// =============================================================================

use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::{BackLink, Footer, Icon, IconName, Reveal, SiteHeader};
use crate::i18n::Translator;
use crate::state::use_app_state;

/// Keys of the four value blocks: (title, text).
const VALUES: [(&str, &str); 4] = [
    ("aboutPage.innovationTitle", "aboutPage.innovationText"),
    ("aboutPage.accessibilityTitle", "aboutPage.accessibilityText"),
    ("aboutPage.reliabilityTitle", "aboutPage.reliabilityText"),
    ("aboutPage.localExpertiseTitle", "aboutPage.localExpertiseText"),
];

const SERVICES: [&str; 6] = [
    "aboutPage.service1",
    "aboutPage.service2",
    "aboutPage.service3",
    "aboutPage.service4",
    "aboutPage.service5",
    "aboutPage.service6",
];

/// Keys of the "why choose us" paragraphs: (bold label, text).
const REASONS: [(&str, &str); 4] = [
    ("aboutPage.provenTrackLabel", "aboutPage.provenTrackText"),
    ("aboutPage.localSupportLabel", "aboutPage.localSupportText"),
    ("aboutPage.complianceLabel", "aboutPage.complianceText"),
    ("aboutPage.scalabilityLabel", "aboutPage.scalabilityText"),
];

/// About page.
#[component]
pub fn AboutPage() -> impl IntoView {
    let app_state = use_app_state();

    view! {
        <div class="page page-about">
            <SiteHeader active="about" />

            {move || {
                let tr = app_state.translator();
                view! {
                    <Title text=tr.t("aboutPage.title") />
                    <main class="about-main">
                        <BackLink href="/" label=tr.t("aboutPage.backToHome") />

                        <Reveal>
                            <h1 class="about-title">{tr.t("aboutPage.title")}</h1>

                            <div class="about-sections">
                                <section>
                                    <p class="about-intro">{tr.t("aboutPage.intro")}</p>
                                </section>

                                <IconSection icon=IconName::Target title=tr.t("aboutPage.missionTitle")>
                                    <p>{tr.t("aboutPage.missionText")}</p>
                                </IconSection>

                                <IconSection icon=IconName::Eye title=tr.t("aboutPage.visionTitle")>
                                    <p>{tr.t("aboutPage.visionText")}</p>
                                </IconSection>

                                <IconSection icon=IconName::Award title=tr.t("aboutPage.valuesTitle")>
                                    <div class="about-values">
                                        {VALUES
                                            .iter()
                                            .map(|&(title, text)| view! {
                                                <div>
                                                    <h3>{tr.t(title)}</h3>
                                                    <p>{tr.t(text)}</p>
                                                </div>
                                            })
                                            .collect::<Vec<_>>()}
                                    </div>
                                </IconSection>

                                <IconSection icon=IconName::Users title=tr.t("aboutPage.whoWeServeTitle")>
                                    <p>{tr.t("aboutPage.whoWeServeText")}</p>
                                    <ul class="about-services">
                                        {SERVICES.iter().map(|&key| view! { <li>{tr.t(key)}</li> }).collect::<Vec<_>>()}
                                    </ul>
                                </IconSection>

                                <section class="about-divided">
                                    <h2>{tr.t("aboutPage.whyChooseTitle")}</h2>
                                    {REASONS
                                        .iter()
                                        .map(|&(label, text)| view! {
                                            <p>
                                                <strong>{tr.t(label)}</strong>
                                                " "
                                                {tr.t(text)}
                                            </p>
                                        })
                                        .collect::<Vec<_>>()}
                                </section>

                                <GetInTouch tr=tr />
                            </div>
                        </Reveal>
                    </main>
                }
            }}

            <Footer />
        </div>
    }
}

/// Section with a leading icon tile.
#[component]
fn IconSection(icon: IconName, title: String, children: Children) -> impl IntoView {
    view! {
        <section class="icon-section">
            <div class="icon-tile"><Icon name=icon /></div>
            <div>
                <h2>{title}</h2>
                {children()}
            </div>
        </section>
    }
}

#[component]
fn GetInTouch(tr: Translator) -> impl IntoView {
    view! {
        <section class="about-divided">
            <h2>{tr.t("aboutPage.getInTouchTitle")}</h2>
            <p>{tr.t("aboutPage.getInTouchText")}</p>
            <div class="about-contact">
                <p>{tr.t("aboutPage.email")}</p>
                <p>{tr.t("aboutPage.phone")}</p>
                <p>{tr.t("aboutPage.address")}</p>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::Language;

    #[test]
    fn test_about_keys_resolve() {
        let keys = VALUES
            .iter()
            .chain(REASONS.iter())
            .flat_map(|&(a, b)| [a, b])
            .chain(SERVICES);
        for language in Language::ALL {
            let tr = Translator::new(language);
            for key in keys.clone() {
                assert_ne!(tr.t(key), key, "unresolved key {} ({})", key, language.code());
            }
        }
    }
}
