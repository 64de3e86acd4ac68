//! Feedback Channel
//!
//! Transient toast notifications. The channel is a single-slot mailbox:
//! the latest toast replaces the previous one, and a superseded toast's
//! auto-dismiss timer must never clear a newer toast.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Auto-dismiss delay for success/info toasts.
pub const AUTO_DISMISS_MS: u32 = 1800;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Info,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub kind: ToastKind,
    pub message: String,
    seq: u64,
}

/// Slot state, kept separate from the signal wrapper so the replacement
/// and expiry rules are plain testable logic.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ToastSlot {
    current: Option<Toast>,
    seq: u64,
}

impl ToastSlot {
    /// Replace whatever is showing; returns the new toast's sequence
    /// number for the expiry timer.
    pub fn push(&mut self, kind: ToastKind, message: String) -> u64 {
        self.seq += 1;
        self.current = Some(Toast {
            kind,
            message,
            seq: self.seq,
        });
        self.seq
    }

    /// Timer callback: clears the slot only if the toast with `seq` is
    /// still the one showing.
    pub fn expire(&mut self, seq: u64) {
        if self.current.as_ref().map(|t| t.seq) == Some(seq) {
            self.current = None;
        }
    }

    pub fn dismiss(&mut self) {
        self.current = None;
    }

    pub fn current(&self) -> Option<&Toast> {
        self.current.as_ref()
    }
}

/// Reactive handle shared through context.
#[derive(Clone, Copy)]
pub struct FeedbackChannel {
    slot: RwSignal<ToastSlot>,
}

impl FeedbackChannel {
    pub fn new() -> Self {
        Self {
            slot: RwSignal::new(ToastSlot::default()),
        }
    }

    pub fn slot(&self) -> RwSignal<ToastSlot> {
        self.slot
    }

    pub fn notify(&self, kind: ToastKind, message: impl Into<String>) {
        let seq = self
            .slot
            .try_update(|slot| slot.push(kind, message.into()))
            .unwrap_or_default();
        // errors stay until the user dismisses them
        if kind != ToastKind::Error {
            let slot = self.slot;
            spawn_local(async move {
                TimeoutFuture::new(AUTO_DISMISS_MS).await;
                slot.update(|s| s.expire(seq));
            });
        }
    }

    pub fn success(&self, message: impl Into<String>) {
        self.notify(ToastKind::Success, message);
    }

    pub fn error(&self, message: impl Into<String>) {
        self.notify(ToastKind::Error, message);
    }

    pub fn info(&self, message: impl Into<String>) {
        self.notify(ToastKind::Info, message);
    }

    pub fn dismiss(&self) {
        self.slot.update(|s| s.dismiss());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn newer_toast_replaces_older() {
        let mut slot = ToastSlot::default();
        slot.push(ToastKind::Success, "saved".to_string());
        slot.push(ToastKind::Error, "delete failed".to_string());
        assert_eq!(slot.current().unwrap().message, "delete failed");
    }

    #[test]
    fn stale_timer_does_not_clear_newer_toast() {
        let mut slot = ToastSlot::default();
        let first = slot.push(ToastKind::Success, "saved".to_string());
        slot.push(ToastKind::Info, "refreshed".to_string());

        slot.expire(first);
        assert_eq!(slot.current().unwrap().message, "refreshed");
    }

    #[test]
    fn current_timer_clears_its_own_toast() {
        let mut slot = ToastSlot::default();
        let seq = slot.push(ToastKind::Success, "saved".to_string());
        slot.expire(seq);
        assert!(slot.current().is_none());
    }
}
