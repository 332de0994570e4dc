// =============================================================================
// Toorrii Web - Static Site Data
// =============================================================================

pub mod partners;

pub use partners::{
    directory, gallery_slots, get_partner_by_id, Collaboration, PartnerDirectory, PartnerRecord,
    GALLERY_SLOTS,
};
