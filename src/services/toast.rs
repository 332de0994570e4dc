// =============================================================================
// Toorrii Web - Toast Notifications
// =============================================================================
// Transient, non-blocking acknowledgments shown in the corner of the page.
// =============================================================================

use gloo_timers::callback::Timeout;
use leptos::prelude::*;

use crate::i18n::Translator;
use crate::services::contact_form::Acknowledgment;

/// How long a toast stays on screen.
pub const TOAST_DURATION_MS: u32 = 4_000;

/// Maximum toasts on screen at once; older ones are dropped first.
pub const MAX_VISIBLE_TOASTS: usize = 3;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

impl ToastKind {
    pub fn class(self) -> &'static str {
        match self {
            ToastKind::Success => "toast toast-success",
            ToastKind::Error => "toast toast-error",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
}

/// Ordered list of visible toasts.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ToastQueue {
    next_id: u64,
    toasts: Vec<Toast>,
}

impl ToastQueue {
    /// Add a toast and return its id.
    pub fn push(&mut self, kind: ToastKind, message: impl Into<String>) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.toasts.push(Toast {
            id,
            kind,
            message: message.into(),
        });
        if self.toasts.len() > MAX_VISIBLE_TOASTS {
            let overflow = self.toasts.len() - MAX_VISIBLE_TOASTS;
            self.toasts.drain(..overflow);
        }
        id
    }

    /// Queue the toast for a settled submission, translated with `tr`.
    pub fn acknowledge(&mut self, ack: &Acknowledgment, tr: &Translator) -> u64 {
        self.push(ack.kind, tr.t(ack.message_key))
    }

    /// Remove a toast. Unknown ids are ignored.
    pub fn dismiss(&mut self, id: u64) {
        self.toasts.retain(|toast| toast.id != id);
    }

    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}

/// Handle to the page-wide toast queue, provided via context.
#[derive(Clone, Copy)]
pub struct Toaster {
    queue: RwSignal<ToastQueue>,
}

impl Toaster {
    pub fn new() -> Self {
        Self {
            queue: RwSignal::new(ToastQueue::default()),
        }
    }

    pub fn queue(&self) -> RwSignal<ToastQueue> {
        self.queue
    }

    /// Show the toast for a settled submission and schedule its removal.
    pub fn acknowledge(&self, ack: &Acknowledgment, tr: &Translator) {
        let Some(id) = self.queue.try_update(|queue| queue.acknowledge(ack, tr)) else {
            return;
        };

        let queue = self.queue;
        Timeout::new(TOAST_DURATION_MS, move || {
            // The host may be gone by the time the timer fires.
            queue.try_update(|queue| queue.dismiss(id));
        })
        .forget();
    }

    pub fn dismiss(&self, id: u64) {
        self.queue.update(|queue| queue.dismiss(id));
    }
}

impl Default for Toaster {
    fn default() -> Self {
        Self::new()
    }
}

/// Fetch the toaster from context.
pub fn use_toaster() -> Toaster {
    expect_context::<Toaster>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_assigns_increasing_ids() {
        let mut queue = ToastQueue::default();
        let a = queue.push(ToastKind::Success, "sent");
        let b = queue.push(ToastKind::Error, "failed");
        assert!(b > a);
        assert_eq!(queue.toasts().len(), 2);
        assert_eq!(queue.toasts()[1].kind, ToastKind::Error);
    }

    #[test]
    fn test_dismiss_removes_only_that_toast() {
        let mut queue = ToastQueue::default();
        let a = queue.push(ToastKind::Success, "one");
        let b = queue.push(ToastKind::Success, "two");
        queue.dismiss(a);
        queue.dismiss(999);
        assert_eq!(queue.toasts().len(), 1);
        assert_eq!(queue.toasts()[0].id, b);
        queue.dismiss(b);
        assert!(queue.is_empty());
    }

    #[test]
    fn test_oldest_toasts_dropped_when_full() {
        let mut queue = ToastQueue::default();
        for n in 0..MAX_VISIBLE_TOASTS + 2 {
            queue.push(ToastKind::Success, format!("toast {}", n));
        }
        assert_eq!(queue.toasts().len(), MAX_VISIBLE_TOASTS);
        assert_eq!(queue.toasts()[0].message, "toast 2");
    }
}
