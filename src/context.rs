//! Application Context
//!
//! Shared handles provided via Leptos Context API: the single-slot
//! feedback channel and the app-wide pending-operation counter.

use leptos::prelude::*;

use crate::feedback::FeedbackChannel;
use crate::mutation::PendingOps;

#[derive(Clone, Copy)]
pub struct AppContext {
    pub feedback: FeedbackChannel,
    pub pending: PendingOps,
}

impl AppContext {
    pub fn provide() -> Self {
        let ctx = Self {
            feedback: FeedbackChannel::new(),
            pending: PendingOps::new(),
        };
        provide_context(ctx);
        ctx
    }

    pub fn use_context() -> Self {
        expect_context::<AppContext>()
    }
}
