// =============================================================================
// Toorrii Web - Contact Form State
// =============================================================================
// Table of Contents:
// 1. Fields
// 2. Submission Types
// 3. Form State Machine
// =============================================================================

use thiserror::Error;

use crate::api::{ApiError, ContactSubmission};
use crate::services::toast::ToastKind;

// -----------------------------------------------------------------------------
// 1. Fields
// -----------------------------------------------------------------------------

/// Editable contact form fields.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Subject,
    Message,
}

impl ContactField {
    pub const ALL: [ContactField; 4] = [
        ContactField::Name,
        ContactField::Email,
        ContactField::Subject,
        ContactField::Message,
    ];

    /// Input `name`/`id` attribute.
    pub fn name(self) -> &'static str {
        match self {
            ContactField::Name => "name",
            ContactField::Email => "email",
            ContactField::Subject => "subject",
            ContactField::Message => "message",
        }
    }
}

/// Current values of the contact form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactFormState {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactFormState {
    pub fn get(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Subject => &self.subject,
            ContactField::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: ContactField, value: String) {
        let slot = match field {
            ContactField::Name => &mut self.name,
            ContactField::Email => &mut self.email,
            ContactField::Subject => &mut self.subject,
            ContactField::Message => &mut self.message,
        };
        *slot = value;
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    fn to_submission(&self) -> ContactSubmission {
        ContactSubmission {
            name: self.name.clone(),
            email: self.email.clone(),
            subject: self.subject.clone(),
            message: self.message.clone(),
        }
    }
}

// -----------------------------------------------------------------------------
// 2. Submission Types
// -----------------------------------------------------------------------------

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmissionPhase {
    #[default]
    Editing,
    Submitting,
}

/// Result of sending a submission.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    Success,
    Failure(String),
}

impl<T> From<Result<T, ApiError>> for SubmitOutcome {
    fn from(result: Result<T, ApiError>) -> Self {
        match result {
            Ok(_) => SubmitOutcome::Success,
            Err(e) => SubmitOutcome::Failure(e.to_string()),
        }
    }
}

/// What to tell the user once a submission settles.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Acknowledgment {
    pub kind: ToastKind,
    /// Translation key of the toast message.
    pub message_key: &'static str,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    #[error("A submission is already in progress")]
    AlreadySubmitting,
}

// -----------------------------------------------------------------------------
// 3. Form State Machine
// -----------------------------------------------------------------------------

/// Contact form: `Editing -> Submitting -> Editing`.
///
/// A successful submission clears every field; a failed one keeps them so
/// the visitor can retry.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ContactForm {
    fields: ContactFormState,
    phase: SubmissionPhase,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fields(&self) -> &ContactFormState {
        &self.fields
    }

    pub fn phase(&self) -> SubmissionPhase {
        self.phase
    }

    pub fn is_submitting(&self) -> bool {
        self.phase == SubmissionPhase::Submitting
    }

    /// Update exactly one field.
    pub fn edit(&mut self, field: ContactField, value: impl Into<String>) {
        self.fields.set(field, value.into());
    }

    /// Enter `Submitting` and return the snapshot to send.
    pub fn begin_submit(&mut self) -> Result<ContactSubmission, FormError> {
        if self.is_submitting() {
            return Err(FormError::AlreadySubmitting);
        }
        self.phase = SubmissionPhase::Submitting;
        Ok(self.fields.to_submission())
    }

    /// Settle the in-flight submission and return to `Editing`.
    pub fn finish(&mut self, outcome: &SubmitOutcome) -> Acknowledgment {
        self.phase = SubmissionPhase::Editing;
        match outcome {
            SubmitOutcome::Success => {
                self.fields.clear();
                Acknowledgment {
                    kind: ToastKind::Success,
                    message_key: "contactPage.successMessage",
                }
            }
            SubmitOutcome::Failure(_) => Acknowledgment {
                kind: ToastKind::Error,
                message_key: "contactPage.errorMessage",
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::{Language, Translator};
    use crate::services::toast::ToastQueue;

    fn filled_form() -> ContactForm {
        let mut form = ContactForm::new();
        form.edit(ContactField::Name, "Amine");
        form.edit(ContactField::Email, "a@x.com");
        form.edit(ContactField::Subject, "Hi");
        form.edit(ContactField::Message, "Test");
        form
    }

    #[test]
    fn test_edit_updates_only_that_field() {
        let mut form = ContactForm::new();
        form.edit(ContactField::Subject, "Hello");
        assert_eq!(form.fields().subject, "Hello");
        assert!(form.fields().name.is_empty());
        assert!(form.fields().email.is_empty());
        assert!(form.fields().message.is_empty());
    }

    #[test]
    fn test_successful_submit_acknowledges_and_clears() {
        let mut form = filled_form();
        let submission = form.begin_submit().unwrap();
        assert_eq!(submission.name, "Amine");
        assert_eq!(submission.email, "a@x.com");
        assert_eq!(submission.subject, "Hi");
        assert_eq!(submission.message, "Test");
        assert!(form.is_submitting());

        let ack = form.finish(&SubmitOutcome::Success);
        assert_eq!(ack.kind, ToastKind::Success);
        assert_eq!(ack.message_key, "contactPage.successMessage");
        for field in ContactField::ALL {
            assert_eq!(form.fields().get(field), "");
        }
        assert_eq!(form.phase(), SubmissionPhase::Editing);
    }

    #[test]
    fn test_failed_submit_keeps_fields() {
        let mut form = filled_form();
        form.begin_submit().unwrap();
        let outcome = SubmitOutcome::from(Err::<(), _>(ApiError::Network("offline".to_string())));
        assert_eq!(outcome, SubmitOutcome::Failure("Network error: offline".to_string()));

        let ack = form.finish(&outcome);
        assert_eq!(ack.kind, ToastKind::Error);
        assert_eq!(ack.message_key, "contactPage.errorMessage");
        assert_eq!(form.fields(), filled_form().fields());
        assert!(!form.is_submitting());
    }

    #[test]
    fn test_second_submit_rejected_while_in_flight() {
        let mut form = filled_form();
        form.begin_submit().unwrap();
        assert_eq!(form.begin_submit(), Err(FormError::AlreadySubmitting));
        form.finish(&SubmitOutcome::Success);
        assert!(form.begin_submit().is_ok());
    }

    #[test]
    fn test_successful_submit_queues_success_toast() {
        let mut form = filled_form();
        form.begin_submit().unwrap();
        let ack = form.finish(&SubmitOutcome::from(Ok::<_, ApiError>(())));

        let mut queue = ToastQueue::default();
        queue.acknowledge(&ack, &Translator::new(Language::En));

        assert_eq!(queue.toasts().len(), 1);
        assert_eq!(queue.toasts()[0].kind, ToastKind::Success);
        assert_eq!(queue.toasts()[0].message, "Thank you! Your message has been sent.");
        for field in ContactField::ALL {
            assert_eq!(form.fields().get(field), "");
        }
    }

    #[test]
    fn test_failed_submit_queues_error_toast() {
        let mut form = filled_form();
        form.begin_submit().unwrap();
        let outcome = SubmitOutcome::from(Err::<(), _>(ApiError::from_status(500, String::new())));
        let ack = form.finish(&outcome);

        let mut queue = ToastQueue::default();
        queue.acknowledge(&ack, &Translator::new(Language::En));

        assert_eq!(queue.toasts()[0].kind, ToastKind::Error);
        assert_eq!(
            queue.toasts()[0].message,
            "Your message could not be sent. Please try again."
        );
        assert_eq!(form.fields().name, "Amine");
    }
}
