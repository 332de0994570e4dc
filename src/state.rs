// =============================================================================
// Toorrii Web - Global Application State
// =============================================================================
// Table of Contents:
// 1. Site Config
// 2. App State
// 3. Language Actions
// =============================================================================

use leptos::prelude::*;

use crate::api::ApiClient;
use crate::i18n::{self, Language, Translator};

// -----------------------------------------------------------------------------
// 1. Site Config
// -----------------------------------------------------------------------------

const DEVELOPMENT_API_URL: &str = "http://localhost:8000";
const PRODUCTION_API_URL: &str = "https://api.toorrii.com";

/// Build-time site configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SiteConfig {
    pub api_url: String,
    pub contact_email: &'static str,
    pub contact_phone: &'static str,
    pub contact_location: &'static str,
}

impl SiteConfig {
    /// Resolve configuration from `ENVIRONMENT` and `TOORRII_API_URL`
    /// captured at compile time.
    pub fn from_env() -> Self {
        Self::resolve(option_env!("ENVIRONMENT"), option_env!("TOORRII_API_URL"))
    }

    fn resolve(environment: Option<&str>, api_override: Option<&str>) -> Self {
        let api_url = match api_override.filter(|url| !url.trim().is_empty()) {
            Some(url) => url.trim().to_string(),
            None if environment == Some("development") => DEVELOPMENT_API_URL.to_string(),
            // Production or staging use the production API
            None => PRODUCTION_API_URL.to_string(),
        };

        Self {
            api_url,
            contact_email: "contact@toorrii.com",
            contact_phone: "+213 (0) 123 456 789",
            contact_location: "Algiers, Algeria",
        }
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self::from_env()
    }
}

// -----------------------------------------------------------------------------
// 2. App State
// -----------------------------------------------------------------------------

/// Global application state provided via Leptos context.
#[derive(Clone)]
pub struct AppState {
    pub config: SiteConfig,

    /// Active display language.
    pub language: RwSignal<Language>,
}

impl AppState {
    /// Create a new app state instance, restoring the saved language.
    pub fn new() -> Self {
        let config = SiteConfig::from_env();
        log::debug!("API base URL: {}", config.api_url);

        Self {
            config,
            language: RwSignal::new(i18n::load_language()),
        }
    }

    /// Client for the configured API.
    pub fn api_client(&self) -> ApiClient {
        ApiClient::new(self.config.api_url.clone())
    }

    /// Translator for the current language (tracks the signal).
    pub fn translator(&self) -> Translator {
        Translator::new(self.language.get())
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

// -----------------------------------------------------------------------------
// 3. Language Actions
// -----------------------------------------------------------------------------

impl AppState {
    /// Switch language and persist the choice.
    pub fn set_language(&self, language: Language) {
        if self.language.get_untracked() == language {
            return;
        }
        log::info!("Language changed to {}", language.code());
        self.language.set(language);
        i18n::save_language(language);
    }
}

/// Fetch the app state from context.
pub fn use_app_state() -> AppState {
    expect_context::<AppState>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_production_is_default() {
        assert_eq!(SiteConfig::resolve(None, None).api_url, PRODUCTION_API_URL);
        assert_eq!(SiteConfig::resolve(Some("staging"), None).api_url, PRODUCTION_API_URL);
    }

    #[test]
    fn test_development_uses_localhost() {
        assert_eq!(SiteConfig::resolve(Some("development"), None).api_url, DEVELOPMENT_API_URL);
    }

    #[test]
    fn test_override_wins_unless_blank() {
        let config = SiteConfig::resolve(Some("development"), Some(" https://staging.toorrii.com "));
        assert_eq!(config.api_url, "https://staging.toorrii.com");
        assert_eq!(SiteConfig::resolve(None, Some("  ")).api_url, PRODUCTION_API_URL);
    }
}
