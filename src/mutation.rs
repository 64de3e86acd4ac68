//! Mutation Flow
//!
//! The per-mutation state machine every form and delete button follows:
//! `Idle -> Submitting -> Succeeded | Failed`, with destructive mutations
//! passing through an explicit `PendingConfirm` step first. The triggering
//! control is disabled while `Submitting`, which is what serializes
//! mutations per record.

use leptos::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SavePhase {
    #[default]
    Idle,
    /// Destructive mutation waiting for the user's confirm dialog.
    PendingConfirm,
    Submitting,
    Succeeded,
    Failed,
}

impl SavePhase {
    /// Ask for confirmation before a destructive mutation. Only valid from
    /// a settled state.
    pub fn request_confirm(&mut self) -> bool {
        match self {
            SavePhase::Idle | SavePhase::Succeeded | SavePhase::Failed => {
                *self = SavePhase::PendingConfirm;
                true
            }
            _ => false,
        }
    }

    /// Cancel the confirm dialog. No HTTP call has happened yet.
    pub fn cancel_confirm(&mut self) -> bool {
        if *self == SavePhase::PendingConfirm {
            *self = SavePhase::Idle;
            true
        } else {
            false
        }
    }

    /// Start submitting. Rejected while already submitting, so a
    /// double-click cannot issue a duplicate request.
    pub fn begin_submit(&mut self) -> bool {
        match self {
            SavePhase::Submitting => false,
            _ => {
                *self = SavePhase::Submitting;
                true
            }
        }
    }

    pub fn finish(&mut self, ok: bool) {
        *self = if ok {
            SavePhase::Succeeded
        } else {
            SavePhase::Failed
        };
    }

    pub fn is_submitting(&self) -> bool {
        *self == SavePhase::Submitting
    }

    pub fn is_pending_confirm(&self) -> bool {
        *self == SavePhase::PendingConfirm
    }
}

/// App-wide count of in-flight operations, exposed to the shell as one
/// derived busy flag instead of ad hoc spinner counters.
#[derive(Clone, Copy)]
pub struct PendingOps {
    count: RwSignal<u32>,
}

impl PendingOps {
    pub fn new() -> Self {
        Self {
            count: RwSignal::new(0),
        }
    }

    pub fn begin(&self) {
        self.count.update(|c| *c += 1);
    }

    pub fn end(&self) {
        self.count.update(|c| *c = c.saturating_sub(1));
    }

    pub fn is_busy(&self) -> bool {
        self.count.get() > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delete_requires_confirm_then_submit() {
        let mut phase = SavePhase::Idle;
        assert!(phase.request_confirm());
        assert!(phase.is_pending_confirm());
        assert!(phase.begin_submit());
        assert!(phase.is_submitting());
        phase.finish(true);
        assert_eq!(phase, SavePhase::Succeeded);
    }

    #[test]
    fn cancelled_confirm_returns_to_idle() {
        let mut phase = SavePhase::Idle;
        phase.request_confirm();
        assert!(phase.cancel_confirm());
        assert_eq!(phase, SavePhase::Idle);
    }

    #[test]
    fn duplicate_submit_is_rejected() {
        let mut phase = SavePhase::Idle;
        assert!(phase.begin_submit());
        assert!(!phase.begin_submit());
    }

    #[test]
    fn failed_flow_can_retry() {
        let mut phase = SavePhase::Idle;
        phase.begin_submit();
        phase.finish(false);
        assert_eq!(phase, SavePhase::Failed);
        // the modal stays open; the user may retry
        assert!(phase.begin_submit());
    }
}
