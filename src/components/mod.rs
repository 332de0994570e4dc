// =============================================================================
// Toorrii Web - UI Components
// =============================================================================
// Table of Contents:
// 1. Layout Components
// 2. Common Components
// 3. Form Components
// =============================================================================

pub mod common;
pub mod footer;
pub mod forms;
pub mod hero;
pub mod nav;
pub mod toast;

pub use common::{BackLink, ButtonVariant, Card, Icon, IconName, LinkButton, Motion, Reveal};
pub use footer::Footer;
pub use forms::{TextArea, TextInput};
pub use hero::Hero;
pub use nav::{LanguageSwitcher, SiteHeader};
pub use toast::ToastHost;
