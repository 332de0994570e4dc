// =============================================================================
// Toorrii Web - Services
// =============================================================================

pub mod contact_form;
pub mod toast;

pub use contact_form::{
    Acknowledgment, ContactField, ContactForm, ContactFormState, FormError, SubmissionPhase,
    SubmitOutcome,
};
pub use toast::{use_toaster, Toast, ToastKind, ToastQueue, Toaster};
