//! Window lifecycle flags shared between the run-loop and the host callback.

use std::sync::atomic::{AtomicBool, Ordering};

use mold_api::Notification;

/// Four independent flags updated by host notifications.
///
/// The host may deliver notifications nested inside any call the loop makes, so the
/// flags are atomics and the struct is shared through an `Arc`.
#[derive(Debug, Default)]
pub struct LifecycleState {
    will_close: AtomicBool,
    in_resize: AtomicBool,
    in_move: AtomicBool,
    is_miniaturized: AtomicBool,
}

impl LifecycleState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one notification. Never clears `will_close`.
    pub fn apply(&self, notification: Notification) {
        match notification {
            Notification::WillClose => self.will_close.store(true, Ordering::Release),
            Notification::DidResize => self.in_resize.store(true, Ordering::Release),
            Notification::DidMove => self.in_move.store(true, Ordering::Release),
            Notification::DidMiniaturize => self.is_miniaturized.store(true, Ordering::Release),
            Notification::DidDeminiaturize => {
                self.is_miniaturized.store(false, Ordering::Release)
            }
        }
    }

    pub fn will_close(&self) -> bool {
        self.will_close.load(Ordering::Acquire)
    }

    pub fn is_miniaturized(&self) -> bool {
        self.is_miniaturized.load(Ordering::Acquire)
    }

    /// Consume a pending resize edge. Returns `true` at most once per notification.
    pub fn take_resize(&self) -> bool {
        self.in_resize.swap(false, Ordering::AcqRel)
    }

    /// Consume a pending move edge. Returns `true` at most once per notification.
    pub fn take_move(&self) -> bool {
        self.in_move.swap(false, Ordering::AcqRel)
    }
}
