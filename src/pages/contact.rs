// =============================================================================
// Toorrii Web - Contact Page
// =============================================================================
// Table of Contents:
// 1. Contact Channels
// 2. Main Component
// 3. Contact Form
// =============================================================================

use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_meta::Title;

use crate::api::{submit_contact, ApiClient};
use crate::components::{
    BackLink, Card, Footer, Icon, IconName, Motion, Reveal, SiteHeader, TextArea, TextInput,
};
use crate::i18n::{Language, Translator};
use crate::services::{use_toaster, ContactField, ContactForm, SubmitOutcome, Toaster};
use crate::state::{use_app_state, SiteConfig};

// -----------------------------------------------------------------------------
// 1. Contact Channels
// -----------------------------------------------------------------------------

/// One contact info card.
#[derive(Clone, Debug, PartialEq)]
pub struct ContactChannel {
    pub icon: IconName,
    pub title: String,
    pub value: String,
    pub href: Option<String>,
    pub accent: &'static str,
}

/// Contact info cards: email, phone, location, opening hours.
pub fn contact_channels(tr: &Translator, config: &SiteConfig) -> Vec<ContactChannel> {
    let dialable: String = config
        .contact_phone
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '+')
        .collect();

    vec![
        ContactChannel {
            icon: IconName::Mail,
            title: tr.t("contact.email"),
            value: config.contact_email.to_string(),
            href: Some(format!("mailto:{}", config.contact_email)),
            accent: "text-primary",
        },
        ContactChannel {
            icon: IconName::Phone,
            title: tr.t("contact.phone"),
            value: config.contact_phone.to_string(),
            href: Some(format!("tel:{}", dialable)),
            accent: "text-secondary",
        },
        ContactChannel {
            icon: IconName::MapPin,
            title: tr.t("contact.location"),
            value: config.contact_location.to_string(),
            href: None,
            accent: "text-primary",
        },
        ContactChannel {
            icon: IconName::Clock,
            title: tr.t("contact.hours"),
            value: tr.t("contact.hoursValue"),
            href: None,
            accent: "text-secondary",
        },
    ]
}

// -----------------------------------------------------------------------------
// 2. Main Component
// -----------------------------------------------------------------------------

#[component]
pub fn ContactPage() -> impl IntoView {
    let app_state = use_app_state();
    let language = app_state.language;
    let config = app_state.config.clone();
    let client = app_state.api_client();

    view! {
        <div
            class="page page-contact"
            dir=move || language.get().direction().as_attr()
        >
            <Title text=move || Translator::new(language.get()).t("contact.title") />
            <SiteHeader active="contact" />

            <main class="contact-main">
                {move || {
                    let tr = Translator::new(language.get());
                    view! {
                        <Reveal motion=Motion::SlideIn class="contact-back">
                            <BackLink href="/" label=tr.t("aboutPage.backToHome") />
                        </Reveal>

                        <Reveal class="contact-header">
                            <h1>{tr.t("contact.title")}</h1>
                            <p class="text-muted">{tr.t("contact.subtitle")}</p>
                        </Reveal>

                        <div class="contact-cards">
                            {contact_channels(&tr, &config)
                                .into_iter()
                                .enumerate()
                                .map(|(index, channel)| view! {
                                    <Reveal delay_ms=index as u32 * 100>
                                        <ChannelCard channel=channel />
                                    </Reveal>
                                })
                                .collect::<Vec<_>>()}
                        </div>
                    }
                }}

                <Reveal delay_ms=400 class="contact-form-wrap">
                    <ContactFormCard client=client language=language />
                </Reveal>
            </main>

            <Footer />
        </div>
    }
}

#[component]
fn ChannelCard(channel: ContactChannel) -> impl IntoView {
    let value = match channel.href {
        Some(href) => view! { <a href=href class="channel-value" dir="ltr">{channel.value}</a> }.into_any(),
        None => view! { <p class="channel-value">{channel.value}</p> }.into_any(),
    };

    view! {
        <Card class="channel-card">
            <div class="channel-icon">
                <Icon name=channel.icon class=channel.accent />
            </div>
            <h3>{channel.title}</h3>
            {value}
        </Card>
    }
}

// -----------------------------------------------------------------------------
// 3. Contact Form
// -----------------------------------------------------------------------------

/// Send the snapshot and settle the form. Late results on a disposed form
/// are dropped.
async fn send_submission(
    client: ApiClient,
    form: RwSignal<ContactForm>,
    toaster: Toaster,
    language: RwSignal<Language>,
) {
    let Some(Ok(submission)) = form.try_update(|form| form.begin_submit()) else {
        return;
    };

    let outcome = SubmitOutcome::from(submit_contact(&client, &submission).await);
    match &outcome {
        SubmitOutcome::Success => log::info!("Contact message sent"),
        SubmitOutcome::Failure(reason) => log::warn!("Contact submission failed: {}", reason),
    }

    let Some(ack) = form.try_update(|form| form.finish(&outcome)) else {
        return;
    };
    let Some(language) = language.try_get_untracked() else {
        return;
    };
    toaster.acknowledge(&ack, &Translator::new(language));
}

#[component]
fn ContactFormCard(client: ApiClient, language: RwSignal<Language>) -> impl IntoView {
    let toaster = use_toaster();
    let form = RwSignal::new(ContactForm::new());
    let submitting = Signal::derive(move || form.with(|form| form.is_submitting()));

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if form.with_untracked(|form| form.is_submitting()) {
            return;
        }
        spawn_local(send_submission(client.clone(), form, toaster, language));
    };

    let value_of = move |field: ContactField| {
        Signal::derive(move || form.with(|form| form.fields().get(field).to_string()))
    };
    let edit = move |field: ContactField| {
        Callback::new(move |value: String| form.update(|form| form.edit(field, value)))
    };

    view! {
        <Card class="contact-form-card">
            <form class="contact-form" on:submit=on_submit>
                {move || {
                    let tr = Translator::new(language.get());
                    view! {
                        <div class="form-row">
                            <TextInput
                                label=tr.t("contactPage.name")
                                name=ContactField::Name.name()
                                value=value_of(ContactField::Name)
                                on_input=edit(ContactField::Name)
                                placeholder=tr.t("contactPage.namePlaceholder")
                                disabled=submitting
                                required=true
                            />
                            <TextInput
                                label=tr.t("contactPage.email")
                                name=ContactField::Email.name()
                                input_type="email"
                                value=value_of(ContactField::Email)
                                on_input=edit(ContactField::Email)
                                placeholder=tr.t("contactPage.emailPlaceholder")
                                disabled=submitting
                                required=true
                            />
                        </div>

                        <TextInput
                            label=tr.t("contactPage.subject")
                            name=ContactField::Subject.name()
                            value=value_of(ContactField::Subject)
                            on_input=edit(ContactField::Subject)
                            placeholder=tr.t("contactPage.subjectPlaceholder")
                            disabled=submitting
                            required=true
                        />

                        <TextArea
                            label=tr.t("contactPage.message")
                            name=ContactField::Message.name()
                            value=value_of(ContactField::Message)
                            on_input=edit(ContactField::Message)
                            placeholder=tr.t("contactPage.messagePlaceholder")
                            rows=6
                            disabled=submitting
                            required=true
                        />

                        <button type="submit" class="btn btn-primary btn-block" disabled=move || submitting.get()>
                            <Icon name=IconName::Send />
                            {move || {
                                if submitting.get() {
                                    tr.t("contactPage.sending")
                                } else {
                                    tr.t("contactPage.submit")
                                }
                            }}
                        </button>
                    }
                }}
            </form>
        </Card>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> SiteConfig {
        SiteConfig {
            api_url: "http://localhost:8000".to_string(),
            contact_email: "contact@toorrii.com",
            contact_phone: "+213 (0) 123 456 789",
            contact_location: "Algiers, Algeria",
        }
    }

    #[test]
    fn test_channels_link_email_and_phone() {
        let channels = contact_channels(&Translator::new(Language::En), &config());
        assert_eq!(channels.len(), 4);
        assert_eq!(channels[0].href.as_deref(), Some("mailto:contact@toorrii.com"));
        assert_eq!(channels[1].href.as_deref(), Some("tel:+2130123456789"));
        assert!(channels[2].href.is_none());
        assert_eq!(channels[3].value, "Sunday - Thursday, 8:00 - 17:00");
    }

    #[test]
    fn test_channel_titles_follow_language() {
        let channels = contact_channels(&Translator::new(Language::Fr), &config());
        assert_eq!(channels[1].title, "Téléphone");
        assert_eq!(channels[2].value, "Algiers, Algeria");
    }
}
