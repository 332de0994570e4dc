// =============================================================================
// Toorrii Web - Partner Directory
// =============================================================================
// Table of Contents:
// 1. Types
// 2. Directory
// 3. Partner Data
// 4. Gallery Slots
// =============================================================================

use std::collections::HashMap;
use std::sync::LazyLock;

// -----------------------------------------------------------------------------
// 1. Types
// -----------------------------------------------------------------------------

/// Partnership details shown on the partner page.
#[derive(Clone, Debug, PartialEq)]
pub struct Collaboration {
    pub start_date: String,
}

/// One partner organization.
#[derive(Clone, Debug, PartialEq)]
pub struct PartnerRecord {
    pub id: String,
    pub name: String,
    pub industry: String,
    pub description: String,
    pub about: String,
    pub founded: String,
    pub headquarters: String,
    pub website: Option<String>,
    pub logo: String,
    pub gallery: Vec<String>,
    pub collaboration: Collaboration,
}

impl PartnerRecord {
    /// Route to this partner's detail page.
    pub fn href(&self) -> String {
        format!("/partners/{}", urlencoding::encode(&self.id))
    }
}

// -----------------------------------------------------------------------------
// 2. Directory
// -----------------------------------------------------------------------------

/// Immutable, id-indexed collection of partner records.
#[derive(Debug, Default)]
pub struct PartnerDirectory {
    partners: Vec<PartnerRecord>,
    index: HashMap<String, usize>,
}

impl PartnerDirectory {
    /// Build a directory. When two records share an id the first one wins.
    pub fn new(partners: Vec<PartnerRecord>) -> Self {
        let mut index = HashMap::with_capacity(partners.len());
        for (position, partner) in partners.iter().enumerate() {
            if index.contains_key(&partner.id) {
                log::warn!("Duplicate partner id '{}' ignored (entry {})", partner.id, position);
                continue;
            }
            index.insert(partner.id.clone(), position);
        }
        Self { partners, index }
    }

    /// Exact-match lookup by id.
    pub fn get(&self, id: &str) -> Option<&PartnerRecord> {
        self.index.get(id).map(|&position| &self.partners[position])
    }

    /// Lookup from a route parameter. A missing or empty id is a miss.
    pub fn lookup(&self, id: Option<&str>) -> Option<&PartnerRecord> {
        id.and_then(|id| self.get(id))
    }

    /// Records in listing order (duplicates included as stored).
    pub fn all(&self) -> &[PartnerRecord] {
        &self.partners
    }

    pub fn len(&self) -> usize {
        self.partners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.partners.is_empty()
    }
}

static DIRECTORY: LazyLock<PartnerDirectory> = LazyLock::new(|| PartnerDirectory::new(partner_records()));

/// The site's partner directory.
pub fn directory() -> &'static PartnerDirectory {
    &DIRECTORY
}

/// Look up a partner from a (possibly missing) route parameter.
pub fn get_partner_by_id(id: Option<&str>) -> Option<&'static PartnerRecord> {
    directory().lookup(id)
}

// -----------------------------------------------------------------------------
// 3. Partner Data
// -----------------------------------------------------------------------------

fn gallery(id: &str, count: usize) -> Vec<String> {
    (1..=count)
        .map(|n| format!("/assets/partners/{}/{}.jpg", id, n))
        .collect()
}

fn partner_records() -> Vec<PartnerRecord> {
    vec![
        PartnerRecord {
            id: "clinique-el-amel".to_string(),
            name: "Clinique El Amel".to_string(),
            industry: "Healthcare".to_string(),
            description: "A multi-specialty clinic that replaced its crowded waiting room with booked time slots.".to_string(),
            about: "Clinique El Amel welcomes more than 600 patients a day across twelve specialties. With Toorrii, patients book from home, receive a reminder when their turn approaches and walk straight into consultation.".to_string(),
            founded: "1998".to_string(),
            headquarters: "Blida, Algeria".to_string(),
            website: Some("https://clinique-elamel.example".to_string()),
            logo: "/assets/partners/clinique-el-amel/logo.svg".to_string(),
            gallery: gallery("clinique-el-amel", 5),
            collaboration: Collaboration {
                start_date: "2022".to_string(),
            },
        },
        PartnerRecord {
            id: "banque-atlas".to_string(),
            name: "Banque Atlas".to_string(),
            industry: "Banking".to_string(),
            description: "A retail bank serving customers in forty agencies with a single digital queue.".to_string(),
            about: "Banque Atlas uses Toorrii in every agency to route customers to the right counter, balance load between branches and publish live waiting times on its mobile app.".to_string(),
            founded: "2005".to_string(),
            headquarters: "Algiers, Algeria".to_string(),
            website: Some("https://banque-atlas.example".to_string()),
            logo: "/assets/partners/banque-atlas/logo.svg".to_string(),
            gallery: gallery("banque-atlas", 3),
            collaboration: Collaboration {
                start_date: "2023".to_string(),
            },
        },
        PartnerRecord {
            id: "sahel-telecom".to_string(),
            name: "Sahel Telecom".to_string(),
            industry: "Telecommunications".to_string(),
            description: "A mobile operator whose customer centers handle subscriptions, repairs and SIM swaps.".to_string(),
            about: "Sahel Telecom customer centers issue Toorrii tickets by SMS, so visitors can run errands nearby instead of waiting inside.".to_string(),
            founded: "2011".to_string(),
            headquarters: "Oran, Algeria".to_string(),
            website: None,
            logo: "/assets/partners/sahel-telecom/logo.svg".to_string(),
            gallery: gallery("sahel-telecom", 1),
            collaboration: Collaboration {
                start_date: "2024".to_string(),
            },
        },
        PartnerRecord {
            id: "universite-numidia".to_string(),
            name: "Université Numidia".to_string(),
            industry: "Education".to_string(),
            description: "A university that organizes enrolment and registrar appointments through Toorrii.".to_string(),
            about: "During enrolment season Université Numidia receives thousands of students. Appointments booked in advance spread the load over the whole week.".to_string(),
            founded: "1987".to_string(),
            headquarters: "Constantine, Algeria".to_string(),
            website: Some("https://univ-numidia.example".to_string()),
            logo: "/assets/partners/universite-numidia/logo.svg".to_string(),
            gallery: Vec::new(),
            collaboration: Collaboration {
                start_date: "2024".to_string(),
            },
        },
    ]
}

// -----------------------------------------------------------------------------
// 4. Gallery Slots
// -----------------------------------------------------------------------------

/// Number of fixed gallery presentation slots.
pub const GALLERY_SLOTS: usize = 5;

/// Resolve the five gallery slots: slot `i` shows `gallery[i]`, or
/// `gallery[0]` when the gallery is shorter. `None` for an empty gallery.
pub fn gallery_slots(gallery: &[String]) -> Option<[&str; GALLERY_SLOTS]> {
    let first = gallery.first()?;
    Some(std::array::from_fn(|slot| {
        gallery.get(slot).unwrap_or(first).as_str()
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: &str, name: &str) -> PartnerRecord {
        PartnerRecord {
            id: id.to_string(),
            name: name.to_string(),
            industry: "Retail".to_string(),
            description: String::new(),
            about: String::new(),
            founded: "2000".to_string(),
            headquarters: "Algiers".to_string(),
            website: None,
            logo: String::new(),
            gallery: Vec::new(),
            collaboration: Collaboration {
                start_date: "2021".to_string(),
            },
        }
    }

    fn images(count: usize) -> Vec<String> {
        (0..count).map(|n| format!("img-{}", n)).collect()
    }

    #[test]
    fn test_every_listed_partner_is_found_by_id() {
        let dir = directory();
        assert!(!dir.is_empty());
        for partner in dir.all() {
            let found = get_partner_by_id(Some(&partner.id)).unwrap();
            assert_eq!(found.id, partner.id);
        }
    }

    #[test]
    fn test_unknown_ids_are_not_found() {
        assert!(get_partner_by_id(None).is_none());
        assert!(get_partner_by_id(Some("")).is_none());
        assert!(get_partner_by_id(Some("ghost")).is_none());
        // Match is exact, not case-insensitive or prefix-based.
        assert!(get_partner_by_id(Some("Banque-Atlas")).is_none());
        assert!(get_partner_by_id(Some("banque")).is_none());
    }

    #[test]
    fn test_lookup_in_custom_directory() {
        let dir = PartnerDirectory::new(vec![record("acme", "Acme"), record("globex", "Globex")]);
        assert_eq!(dir.get("acme").unwrap().name, "Acme");
        assert!(dir.get("ghost").is_none());
        assert_eq!(dir.len(), 2);
    }

    #[test]
    fn test_lookup_from_route_parameter() {
        let dir = PartnerDirectory::new(vec![record("acme", "Acme")]);
        assert_eq!(dir.lookup(Some("acme")).map(|p| p.name.as_str()), Some("Acme"));
        assert!(dir.lookup(Some("ghost")).is_none());
        assert!(dir.lookup(Some("")).is_none());
        assert!(dir.lookup(None).is_none());
    }

    #[test]
    fn test_duplicate_ids_first_wins() {
        let dir = PartnerDirectory::new(vec![record("acme", "First"), record("acme", "Second")]);
        assert_eq!(dir.get("acme").unwrap().name, "First");
        assert_eq!(dir.all().len(), 2);
    }

    #[test]
    fn test_directory_ids_are_unique() {
        let dir = directory();
        let mut ids: Vec<&str> = dir.all().iter().map(|p| p.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), dir.len());
    }

    #[test]
    fn test_gallery_slots_fill_with_first_image() {
        for k in 1..=GALLERY_SLOTS {
            let gallery = images(k);
            let slots = gallery_slots(&gallery).unwrap();
            for (i, slot) in slots.iter().enumerate() {
                let expected = if i < k { &gallery[i] } else { &gallery[0] };
                assert_eq!(*slot, expected.as_str(), "k={} slot={}", k, i);
            }
        }
    }

    #[test]
    fn test_gallery_slots_ignore_extra_images() {
        let gallery = images(8);
        assert_eq!(gallery_slots(&gallery).unwrap(), ["img-0", "img-1", "img-2", "img-3", "img-4"]);
    }

    #[test]
    fn test_empty_gallery_has_no_slots() {
        assert!(gallery_slots(&[]).is_none());
    }

    #[test]
    fn test_href_encodes_id() {
        assert_eq!(record("acme", "Acme").href(), "/partners/acme");
        assert_eq!(record("a b", "AB").href(), "/partners/a%20b");
    }
}
