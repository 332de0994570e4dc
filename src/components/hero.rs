// =============================================================================
// Toorrii Web - Hero Section
// =============================================================================
// Landing hero: headline, subtitle, call to action and key figures.
// =============================================================================

use leptos::prelude::*;

use crate::components::common::{ButtonVariant, Icon, IconName, LinkButton, Motion, Reveal};
use crate::i18n::Translator;
use crate::state::use_app_state;

/// Labels longer than this put the CTA arrow on its own side of the text.
const LONG_CTA_LABEL: usize = 20;

/// One figure in the stats row.
#[derive(Clone, Debug, PartialEq)]
pub struct HeroStat {
    pub icon: IconName,
    pub value: &'static str,
    pub label: String,
    pub accent: &'static str,
}

/// Key figures shown under the call to action.
pub fn hero_stats(tr: &Translator) -> [HeroStat; 3] {
    [
        HeroStat {
            icon: IconName::Users,
            value: "25K+",
            label: tr.t("hero.stat1"),
            accent: "text-primary",
        },
        HeroStat {
            icon: IconName::Calendar,
            value: "500+",
            label: tr.t("hero.stat2"),
            accent: "text-secondary",
        },
        HeroStat {
            icon: IconName::Clock,
            value: "45min",
            label: tr.t("hero.stat3"),
            accent: "text-primary",
        },
    ]
}

/// Class for the animated arrow next to the CTA label.
pub fn cta_arrow_class(label: &str) -> &'static str {
    if label.chars().count() > LONG_CTA_LABEL {
        "cta-arrow cta-arrow-leading"
    } else {
        "cta-arrow cta-arrow-trailing"
    }
}

/// Main hero section of the home page.
#[component]
pub fn Hero() -> impl IntoView {
    let app_state = use_app_state();

    view! {
        <section class="hero">
            <div class="hero-bg">
                <img src="/assets/queue-management.png" alt="" class="hero-bg-img" />
                <div class="hero-bg-gradient"></div>
            </div>

            {move || {
                let tr = app_state.translator();
                let cta = tr.t("hero.cta");
                let arrow_class = cta_arrow_class(&cta);

                view! {
                    <div class="hero-content">
                        <Reveal motion=Motion::FadeDown>
                            <Reveal delay_ms=300>
                                <h1 class="hero-title">{tr.t("hero.title")}</h1>
                            </Reveal>

                            <Reveal delay_ms=500>
                                <p class="hero-subtitle">{tr.t("hero.subtitle")}</p>
                            </Reveal>

                            <Reveal delay_ms=700 class="hero-cta-row">
                                <LinkButton href="/contact" variant=ButtonVariant::Hero class="hero-cta">
                                    {cta}
                                    <span class=arrow_class>
                                        <Icon name=IconName::ArrowRight />
                                    </span>
                                </LinkButton>
                            </Reveal>

                            <Reveal delay_ms=900 class="hero-stats">
                                {hero_stats(&tr)
                                    .into_iter()
                                    .map(|stat| {
                                        view! {
                                            <div class="hero-stat">
                                                <div class="hero-stat-value">
                                                    <Icon name=stat.icon class=stat.accent />
                                                    <span>{stat.value}</span>
                                                </div>
                                                <span class="hero-stat-label">{stat.label}</span>
                                            </div>
                                        }
                                    })
                                    .collect::<Vec<_>>()}
                            </Reveal>
                        </Reveal>
                    </div>
                }
            }}
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::Language;

    #[test]
    fn test_stats_are_translated() {
        let stats = hero_stats(&Translator::new(Language::Fr));
        let values: Vec<&str> = stats.iter().map(|s| s.value).collect();
        assert_eq!(values, ["25K+", "500+", "45min"]);
        assert_eq!(stats[1].label, "Rendez-vous par jour");
    }

    #[test]
    fn test_cta_arrow_side() {
        assert_eq!(cta_arrow_class("Get started"), "cta-arrow cta-arrow-trailing");
        assert_eq!(
            cta_arrow_class("Start your free trial today"),
            "cta-arrow cta-arrow-leading"
        );
    }
}
