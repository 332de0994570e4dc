// =============================================================================
// Toorrii Web - Partner Detail Page
// =============================================================================
// Table of Contents:
// 1. View Model
// 2. Main Component
// 3. Not Found Branch
// 4. Partner Sections
// =============================================================================

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::hooks::use_params_map;

use crate::components::{
    BackLink, ButtonVariant, Footer, Icon, IconName, LinkButton, Motion, Reveal, SiteHeader,
};
use crate::data::{directory, gallery_slots, PartnerDirectory, PartnerRecord, GALLERY_SLOTS};
use crate::i18n::Translator;
use crate::state::use_app_state;

/// Where "back to partnerships" links point.
pub const LISTING_HREF: &str = "/#partnerships";

// -----------------------------------------------------------------------------
// 1. View Model
// -----------------------------------------------------------------------------

/// Layout of the five bento gallery tiles, in slot order.
const SLOT_LAYOUT: [(&str, &str); GALLERY_SLOTS] = [
    ("gallery-tile tile-feature", "overlay-rise"),
    ("gallery-tile tile-stacked", "overlay-diagonal"),
    ("gallery-tile tile-stacked", "overlay-diagonal"),
    ("gallery-tile tile-wide", "overlay-sweep"),
    ("gallery-tile tile-accent", "overlay-corner"),
];

/// One resolved gallery tile.
#[derive(Clone, Debug, PartialEq)]
pub struct GalleryTile {
    pub src: String,
    pub alt: String,
    pub class: &'static str,
    pub overlay: &'static str,
    pub delay_ms: u32,
}

/// Lookup miss: shown instead of a partially populated page.
#[derive(Clone, Debug, PartialEq)]
pub struct NotFoundView {
    pub title: String,
    pub description: String,
    pub back_label: String,
    pub back_href: &'static str,
}

#[derive(Clone, Debug, PartialEq)]
pub struct PartnerView {
    pub partner: PartnerRecord,
    pub about_quote: String,
    /// `None` when the partner has no gallery images.
    pub gallery: Option<Vec<GalleryTile>>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum PartnerPage {
    NotFound(NotFoundView),
    Found(Box<PartnerView>),
}

/// Build gallery tiles, or `None` to omit the gallery section.
pub fn gallery_tiles(partner: &PartnerRecord) -> Option<Vec<GalleryTile>> {
    let slots = gallery_slots(&partner.gallery)?;
    Some(
        slots
            .iter()
            .zip(SLOT_LAYOUT)
            .enumerate()
            .map(|(index, (src, (class, overlay)))| GalleryTile {
                src: src.to_string(),
                alt: format!("{} showcase {}", partner.name, index + 1),
                class,
                overlay,
                delay_ms: 100 * (index as u32 + 1),
            })
            .collect(),
    )
}

/// Resolve what the partner page shows for a route parameter.
pub fn partner_page(tr: &Translator, partners: &PartnerDirectory, id: Option<&str>) -> PartnerPage {
    let Some(partner) = partners.lookup(id) else {
        return PartnerPage::NotFound(NotFoundView {
            title: tr.t("partner.notFound"),
            description: tr.t("partner.notFoundDesc"),
            back_label: tr.t("partner.backToPartnerships"),
            back_href: LISTING_HREF,
        });
    };

    let industry = partner.industry.to_lowercase();
    let about_quote = tr.format(
        "partner.aboutQuote",
        &[("name", partner.name.as_str()), ("industry", industry.as_str())],
    );

    PartnerPage::Found(Box::new(PartnerView {
        partner: partner.clone(),
        about_quote,
        gallery: gallery_tiles(partner),
    }))
}

// -----------------------------------------------------------------------------
// 2. Main Component
// -----------------------------------------------------------------------------

/// Partner page - accessed via /partners/:partner_id
#[component]
pub fn PartnerDetailPage() -> impl IntoView {
    let params = use_params_map();
    let partner_id = move || params.read().get("partner_id");
    let app_state = use_app_state();

    view! {
        <div class="page page-partner">
            <SiteHeader active="partnerships" />

            {move || {
                let tr = app_state.translator();
                let id = partner_id();
                match partner_page(&tr, directory(), id.as_deref()) {
                    PartnerPage::NotFound(view) => {
                        log::debug!("Partner '{}' not found", id.unwrap_or_default());
                        view! { <PartnerNotFound view=view /> }.into_any()
                    }
                    PartnerPage::Found(view) => view! { <PartnerDetail tr=tr view=*view /> }.into_any(),
                }
            }}

            <Footer />
        </div>
    }
}

// -----------------------------------------------------------------------------
// 3. Not Found Branch
// -----------------------------------------------------------------------------

#[component]
fn PartnerNotFound(view: NotFoundView) -> impl IntoView {
    view! {
        <Title text=view.title.clone() />
        <div class="partner-not-found">
            <h1>{view.title}</h1>
            <p class="text-muted">{view.description}</p>
            <BackLink href=view.back_href label=view.back_label />
        </div>
    }
}

// -----------------------------------------------------------------------------
// 4. Partner Sections
// -----------------------------------------------------------------------------

#[component]
fn PartnerDetail(tr: Translator, view: PartnerView) -> impl IntoView {
    let PartnerView {
        partner,
        about_quote,
        gallery,
    } = view;

    view! {
        <Title text=partner.name.clone() />
        <main class="partner-main">
            <div class="partner-back">
                <BackLink href=LISTING_HREF label=tr.t("nav.partnerships") />
            </div>

            <PartnerHero tr=tr partner=partner.clone() />

            // About
            <section class="partner-about">
                <Reveal class="partner-about-inner">
                    <div class="quote-mark" aria-hidden="true">"\u{201C}"</div>
                    <h3 class="partner-about-title">
                        {format!("{} {}", tr.t("partner.aboutTitle"), partner.name)}
                    </h3>
                    <p class="partner-about-text">{partner.about.clone()}</p>
                    <blockquote class="partner-quote">{about_quote}</blockquote>

                    <div class="partner-pillars">
                        <Pillar icon=IconName::Users title=tr.t("partner.collaboration") text=tr.t("partner.collaborationDesc") />
                        <Pillar icon=IconName::TrendingUp title=tr.t("partner.innovation") text=tr.t("partner.innovationDesc") />
                        <Pillar icon=IconName::CheckCircle title=tr.t("partner.results") text=tr.t("partner.resultsDesc") />
                    </div>
                </Reveal>
            </section>

            {gallery.map(|tiles| view! { <PartnerGallery tr=tr tiles=tiles /> })}

            // Call to action
            <section class="partner-cta">
                <Reveal class="partner-cta-grid">
                    <div class="cta-dark">
                        <h2>{tr.t("partner.readyToPartner")}</h2>
                        <p>{tr.t("partner.readyToPartnerDesc")}</p>
                        <LinkButton href="/contact" variant=ButtonVariant::Secondary>
                            {tr.t("partner.startConversation")}
                        </LinkButton>
                    </div>
                    <div class="cta-light">
                        <p>{tr.t("partner.exploreMore")}</p>
                        <LinkButton href=LISTING_HREF variant=ButtonVariant::Outline>
                            {tr.t("partner.viewAllPartners")}
                        </LinkButton>
                    </div>
                </Reveal>
            </section>
        </main>
    }
}

#[component]
fn PartnerHero(tr: Translator, partner: PartnerRecord) -> impl IntoView {
    view! {
        <section class="partner-hero">
            <Reveal motion=Motion::FadeUp class="partner-hero-card">
                <div class="partner-hero-text">
                    <span class="badge">{partner.industry.clone()}</span>
                    <h1 class="partner-name">{partner.name.clone()}</h1>
                    <p class="partner-description">{partner.description.clone()}</p>

                    <div class="partner-facts">
                        <Fact icon=IconName::Calendar label=tr.t("partner.founded") value=partner.founded.clone() />
                        <Fact icon=IconName::MapPin label=tr.t("partner.headquarters") value=partner.headquarters.clone() />
                        <Fact
                            icon=IconName::TrendingUp
                            label=tr.t("partner.partnershipSince")
                            value=partner.collaboration.start_date.clone()
                        />
                    </div>

                    {partner.website.clone().map(|website| view! {
                        <div class="partner-website">
                            <LinkButton href=website variant=ButtonVariant::Outline external=true>
                                {tr.t("partner.visitWebsite")}
                                <Icon name=IconName::ExternalLink />
                            </LinkButton>
                        </div>
                    })}
                </div>

                <div class="partner-logo">
                    <img src=partner.logo.clone() alt=partner.name.clone() />
                </div>
            </Reveal>
        </section>
    }
}

#[component]
fn Fact(icon: IconName, label: String, value: String) -> impl IntoView {
    view! {
        <div class="partner-fact">
            <div class="fact-icon"><Icon name=icon /></div>
            <div>
                <p class="fact-label">{label}</p>
                <p class="fact-value">{value}</p>
            </div>
        </div>
    }
}

#[component]
fn Pillar(icon: IconName, title: String, text: String) -> impl IntoView {
    view! {
        <div class="partner-pillar">
            <div class="pillar-title">
                <Icon name=icon />
                <span>{title}</span>
            </div>
            <p>{text}</p>
        </div>
    }
}

#[component]
fn PartnerGallery(tr: Translator, tiles: Vec<GalleryTile>) -> impl IntoView {
    view! {
        <section class="partner-gallery">
            <Reveal>
                <div class="gallery-header">
                    <h3>{tr.t("partner.galleryTitle")}</h3>
                    <p class="text-muted">{tr.t("partner.gallerySubtitle")}</p>
                </div>

                <div class="bento-grid">
                    {tiles
                        .into_iter()
                        .enumerate()
                        .map(|(index, tile)| {
                            view! {
                                <Reveal motion=Motion::Zoom delay_ms=tile.delay_ms class=tile.class>
                                    <div class=format!("tile-overlay {}", tile.overlay)></div>
                                    <img src=tile.src alt=tile.alt />
                                    {(index == 0).then(|| view! {
                                        <p class="tile-caption">{tr.t("partner.featureHighlight")}</p>
                                    })}
                                </Reveal>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </Reveal>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Collaboration;
    use crate::i18n::Language;

    fn acme(gallery: Vec<String>) -> PartnerRecord {
        PartnerRecord {
            id: "acme".to_string(),
            name: "Acme".to_string(),
            industry: "Retail".to_string(),
            description: "Shops".to_string(),
            about: "About Acme".to_string(),
            founded: "1990".to_string(),
            headquarters: "Oran".to_string(),
            website: None,
            logo: "/logo.svg".to_string(),
            gallery,
            collaboration: Collaboration {
                start_date: "2021".to_string(),
            },
        }
    }

    fn found(page: PartnerPage) -> PartnerView {
        match page {
            PartnerPage::Found(view) => *view,
            PartnerPage::NotFound(_) => panic!("expected a partner"),
        }
    }

    #[test]
    fn test_known_partner_renders_record() {
        let tr = Translator::new(Language::En);
        let partners = PartnerDirectory::new(vec![acme(vec!["a.jpg".to_string()])]);
        let view = found(partner_page(&tr, &partners, Some("acme")));
        assert_eq!(view.partner.id, "acme");
        assert_eq!(
            view.about_quote,
            "Together with Acme, we are reshaping how the retail sector welcomes its customers."
        );
    }

    #[test]
    fn test_unknown_partner_renders_not_found_with_listing_link() {
        let tr = Translator::new(Language::En);
        let partners = PartnerDirectory::new(vec![acme(Vec::new())]);
        for id in [Some("ghost"), Some(""), None] {
            match partner_page(&tr, &partners, id) {
                PartnerPage::NotFound(view) => {
                    assert_eq!(view.back_href, "/#partnerships");
                    assert_eq!(view.title, "Partner not found");
                    assert_eq!(view.back_label, "Back to partnerships");
                }
                PartnerPage::Found(_) => panic!("{:?} should not resolve", id),
            }
        }
    }

    #[test]
    fn test_gallery_omitted_when_empty() {
        let tr = Translator::new(Language::En);
        let partners = PartnerDirectory::new(vec![acme(Vec::new())]);
        let view = found(partner_page(&tr, &partners, Some("acme")));
        assert!(view.gallery.is_none());
    }

    #[test]
    fn test_gallery_tiles_follow_slot_resolution() {
        let record = acme(vec!["a.jpg".to_string(), "b.jpg".to_string()]);
        let tiles = gallery_tiles(&record).unwrap();
        let sources: Vec<&str> = tiles.iter().map(|t| t.src.as_str()).collect();
        assert_eq!(sources, ["a.jpg", "b.jpg", "a.jpg", "a.jpg", "a.jpg"]);
        assert_eq!(tiles[0].alt, "Acme showcase 1");
        assert_eq!(tiles[4].alt, "Acme showcase 5");
        assert_eq!(tiles[0].class, "gallery-tile tile-feature");
        assert_eq!(tiles[4].delay_ms, 500);
    }

    #[test]
    fn test_not_found_is_translated() {
        let tr = Translator::new(Language::Fr);
        match partner_page(&tr, &PartnerDirectory::default(), Some("acme")) {
            PartnerPage::NotFound(view) => assert_eq!(view.title, "Partenaire introuvable"),
            PartnerPage::Found(_) => panic!("empty directory"),
        }
    }
}
