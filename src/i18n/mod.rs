// =============================================================================
// Toorrii Web - Translations
// =============================================================================
// Table of Contents:
// 1. Language
// 2. Text Direction
// 3. Translator
// 4. Persistence
// =============================================================================

mod ar;
mod en;
mod fr;

use gloo_storage::Storage;

const LANGUAGE_STORAGE_KEY: &str = "language";

// -----------------------------------------------------------------------------
// 1. Language
// -----------------------------------------------------------------------------

/// Languages the site is translated into.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Language {
    #[default]
    En,
    Fr,
    Ar,
}

impl Language {
    pub const ALL: [Language; 3] = [Language::En, Language::Fr, Language::Ar];

    /// ISO 639-1 code, also used for the `lang` attribute.
    pub fn code(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Fr => "fr",
            Language::Ar => "ar",
        }
    }

    /// Name of the language in that language.
    pub fn label(self) -> &'static str {
        match self {
            Language::En => "English",
            Language::Fr => "Français",
            Language::Ar => "العربية",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_ascii_lowercase().as_str() {
            "en" | "en-us" | "en-gb" => Some(Language::En),
            "fr" | "fr-fr" | "fr-dz" => Some(Language::Fr),
            "ar" | "ar-dz" => Some(Language::Ar),
            _ => None,
        }
    }

    pub fn direction(self) -> TextDirection {
        match self {
            Language::Ar => TextDirection::Rtl,
            Language::En | Language::Fr => TextDirection::Ltr,
        }
    }

    fn lookup(self, key: &str) -> Option<&'static str> {
        match self {
            Language::En => en::lookup(key),
            Language::Fr => fr::lookup(key),
            Language::Ar => ar::lookup(key),
        }
    }
}

// -----------------------------------------------------------------------------
// 2. Text Direction
// -----------------------------------------------------------------------------

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextDirection {
    Ltr,
    Rtl,
}

impl TextDirection {
    /// Value for the HTML `dir` attribute.
    pub fn as_attr(self) -> &'static str {
        match self {
            TextDirection::Ltr => "ltr",
            TextDirection::Rtl => "rtl",
        }
    }
}

// -----------------------------------------------------------------------------
// 3. Translator
// -----------------------------------------------------------------------------

/// Resolves translation keys for one language.
///
/// Views derive a translator from the language signal and hand it to the
/// view-model functions, so everything below the component layer is a plain
/// function of its arguments.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Translator {
    language: Language,
}

impl Translator {
    pub fn new(language: Language) -> Self {
        Self { language }
    }

    pub fn direction(&self) -> TextDirection {
        self.language.direction()
    }

    /// Translate `key`, falling back to English and then to the key itself.
    pub fn t(&self, key: &str) -> String {
        if let Some(text) = self.language.lookup(key) {
            return text.to_string();
        }
        if let Some(text) = Language::En.lookup(key) {
            return text.to_string();
        }
        log::warn!("Missing translation key '{}' ({})", key, self.language.code());
        key.to_string()
    }

    /// Translate `key` and substitute every `{name}` placeholder.
    pub fn format(&self, key: &str, args: &[(&str, &str)]) -> String {
        interpolate(&self.t(key), args)
    }
}

/// Replace each `{name}` in `template` with its value from `args`.
///
/// The template is scanned once: substituted values are never rescanned, and
/// placeholders without a matching argument are kept as written.
pub fn interpolate(template: &str, args: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let replacement = after.find('}').and_then(|close| {
            let name = &after[..close];
            args.iter()
                .find(|(key, _)| *key == name)
                .map(|(_, value)| (close, *value))
        });

        match replacement {
            Some((close, value)) => {
                out.push_str(value);
                rest = &after[close + 1..];
            }
            None => {
                out.push('{');
                rest = after;
            }
        }
    }

    out.push_str(rest);
    out
}

// -----------------------------------------------------------------------------
// 4. Persistence
// -----------------------------------------------------------------------------

/// Load the saved language from localStorage, defaulting to English.
pub fn load_language() -> Language {
    gloo_storage::LocalStorage::get::<String>(LANGUAGE_STORAGE_KEY)
        .ok()
        .and_then(|code| Language::from_code(&code))
        .unwrap_or_default()
}

/// Persist the language choice.
pub fn save_language(language: Language) {
    if let Err(e) = gloo_storage::LocalStorage::set(LANGUAGE_STORAGE_KEY, language.code()) {
        log::warn!("Failed to persist language: {}", e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_translates_in_active_language() {
        let fr = Translator::new(Language::Fr);
        assert_eq!(fr.t("nav.contact"), "Contact");
        assert_eq!(fr.t("contactPage.submit"), "Envoyer le message");

        let en = Translator::new(Language::En);
        assert_eq!(en.t("contactPage.submit"), "Send Message");
    }

    #[test]
    fn test_falls_back_to_english_then_key() {
        let ar = Translator::new(Language::Ar);
        // Brand name is only defined in the English table.
        assert_eq!(ar.t("brand.name"), "Toorrii");
        assert_eq!(ar.t("no.such.key"), "no.such.key");
    }

    #[test]
    fn test_every_language_covers_page_titles() {
        for language in Language::ALL {
            for key in ["hero.title", "aboutPage.title", "contact.title", "partner.notFound"] {
                assert!(language.lookup(key).is_some(), "{} missing {}", language.code(), key);
            }
        }
    }

    #[test]
    fn test_direction() {
        assert_eq!(Translator::new(Language::Ar).direction(), TextDirection::Rtl);
        assert_eq!(Translator::new(Language::Fr).direction().as_attr(), "ltr");
        assert_eq!(TextDirection::Rtl.as_attr(), "rtl");
    }

    #[test]
    fn test_interpolate_replaces_every_occurrence() {
        let text = interpolate("{name} and {name} in {industry}", &[("name", "Acme"), ("industry", "retail")]);
        assert_eq!(text, "Acme and Acme in retail");
        assert_eq!(interpolate("no placeholders", &[("name", "x")]), "no placeholders");
    }

    #[test]
    fn test_interpolate_does_not_rescan_values() {
        let text = interpolate(
            "{name} in {industry}",
            &[("name", "{industry} Corp"), ("industry", "retail")],
        );
        assert_eq!(text, "{industry} Corp in retail");
    }

    #[test]
    fn test_interpolate_keeps_unknown_placeholders() {
        assert_eq!(interpolate("{who} met {name}", &[("name", "Acme")]), "{who} met Acme");
        assert_eq!(interpolate("{{name}}", &[("name", "Acme")]), "{Acme}");
        assert_eq!(interpolate("open {name", &[("name", "Acme")]), "open {name");
    }

    #[test]
    fn test_language_codes() {
        assert_eq!(Language::from_code("FR-dz"), Some(Language::Fr));
        assert_eq!(Language::from_code(" ar "), Some(Language::Ar));
        assert_eq!(Language::from_code("de"), None);
        for language in Language::ALL {
            assert_eq!(Language::from_code(language.code()), Some(language));
        }
    }
}
