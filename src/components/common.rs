// =============================================================================
// Toorrii Web - Common UI Components
// =============================================================================
// Table of Contents:
// 1. Link Button
// 2. Back Link
// 3. Card
// 4. Reveal (entrance animation)
// 5. Icon
// =============================================================================

use leptos::prelude::*;

// -----------------------------------------------------------------------------
// 1. Link Button
// -----------------------------------------------------------------------------

/// Button variant styles.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Outline,
    Ghost,
    Hero,
}

impl ButtonVariant {
    pub fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "btn btn-primary",
            ButtonVariant::Secondary => "btn btn-secondary",
            ButtonVariant::Outline => "btn btn-outline",
            ButtonVariant::Ghost => "btn btn-ghost",
            ButtonVariant::Hero => "btn btn-hero",
        }
    }
}

/// Anchor styled as a button.
#[component]
pub fn LinkButton(
    #[prop(into)] href: String,
    #[prop(optional)] variant: ButtonVariant,
    #[prop(optional)] external: bool,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    let class = format!("{} {}", variant.class(), class);

    if external {
        view! {
            <a href=href class=class target="_blank" rel="noopener noreferrer">
                {children()}
            </a>
        }
        .into_any()
    } else {
        view! {
            <a href=href class=class>
                {children()}
            </a>
        }
        .into_any()
    }
}

// -----------------------------------------------------------------------------
// 2. Back Link
// -----------------------------------------------------------------------------

/// Ghost button with a leading arrow, flipped in RTL by CSS.
#[component]
pub fn BackLink(#[prop(into)] href: String, #[prop(into)] label: String) -> impl IntoView {
    view! {
        <LinkButton href=href variant=ButtonVariant::Ghost class="back-link">
            <Icon name=IconName::ArrowLeft />
            <span>{label}</span>
        </LinkButton>
    }
}

// -----------------------------------------------------------------------------
// 3. Card
// -----------------------------------------------------------------------------

/// Card container component.
#[component]
pub fn Card(#[prop(optional, into)] class: String, children: Children) -> impl IntoView {
    view! {
        <div class=format!("card {}", class)>
            <div class="card-body">
                {children()}
            </div>
        </div>
    }
}

// -----------------------------------------------------------------------------
// 4. Reveal
// -----------------------------------------------------------------------------

/// Entrance animation flavours (see `styles/motion.css`).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Motion {
    #[default]
    FadeUp,
    FadeDown,
    SlideIn,
    Zoom,
}

impl Motion {
    pub fn class(self) -> &'static str {
        match self {
            Motion::FadeUp => "reveal reveal-fade-up",
            Motion::FadeDown => "reveal reveal-fade-down",
            Motion::SlideIn => "reveal reveal-slide-in",
            Motion::Zoom => "reveal reveal-zoom",
        }
    }
}

/// Wraps children in a CSS entrance animation, optionally delayed.
#[component]
pub fn Reveal(
    #[prop(optional)] motion: Motion,
    #[prop(optional)] delay_ms: u32,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=format!("{} {}", motion.class(), class)
            style=format!("animation-delay: {}ms", delay_ms)
        >
            {children()}
        </div>
    }
}

// -----------------------------------------------------------------------------
// 5. Icon
// -----------------------------------------------------------------------------

/// Icons shipped under `/assets/icons`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IconName {
    ArrowLeft,
    ArrowRight,
    Calendar,
    CheckCircle,
    Clock,
    Award,
    Eye,
    ExternalLink,
    Mail,
    MapPin,
    Phone,
    Send,
    Target,
    TrendingUp,
    Users,
}

impl IconName {
    pub fn src(self) -> &'static str {
        match self {
            IconName::ArrowLeft => "/assets/icons/arrow-left.svg",
            IconName::ArrowRight => "/assets/icons/arrow-right.svg",
            IconName::Calendar => "/assets/icons/calendar.svg",
            IconName::CheckCircle => "/assets/icons/check-circle.svg",
            IconName::Clock => "/assets/icons/clock.svg",
            IconName::Award => "/assets/icons/award.svg",
            IconName::Eye => "/assets/icons/eye.svg",
            IconName::ExternalLink => "/assets/icons/external-link.svg",
            IconName::Mail => "/assets/icons/mail.svg",
            IconName::MapPin => "/assets/icons/map-pin.svg",
            IconName::Phone => "/assets/icons/phone.svg",
            IconName::Send => "/assets/icons/send.svg",
            IconName::Target => "/assets/icons/target.svg",
            IconName::TrendingUp => "/assets/icons/trending-up.svg",
            IconName::Users => "/assets/icons/users.svg",
        }
    }
}

/// Decorative icon.
#[component]
pub fn Icon(name: IconName, #[prop(optional, into)] class: String) -> impl IntoView {
    view! { <img src=name.src() alt="" aria-hidden="true" class=format!("icon {}", class) /> }
}
