// =============================================================================
// Toorrii Web - Pages
// =============================================================================

pub mod about;
pub mod contact;
pub mod home;
pub mod not_found;
pub mod partner_detail;

pub use about::AboutPage;
pub use contact::ContactPage;
pub use home::HomePage;
pub use not_found::NotFoundPage;
pub use partner_detail::PartnerDetailPage;
