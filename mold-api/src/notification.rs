//! Window lifecycle notifications.

use serde::{Deserialize, Serialize};

/// The host notifications the lifecycle tracker reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Notification {
    WillClose,
    DidResize,
    DidMove,
    DidMiniaturize,
    DidDeminiaturize,
}

impl Notification {
    pub const ALL: [Notification; 5] = [
        Notification::WillClose,
        Notification::DidResize,
        Notification::DidMove,
        Notification::DidMiniaturize,
        Notification::DidDeminiaturize,
    ];

    /// The host's constant name for this notification.
    pub const fn host_name(self) -> &'static str {
        match self {
            Notification::WillClose => "NSWindowWillCloseNotification",
            Notification::DidResize => "NSWindowDidResizeNotification",
            Notification::DidMove => "NSWindowDidMoveNotification",
            Notification::DidMiniaturize => "NSWindowDidMiniaturizeNotification",
            Notification::DidDeminiaturize => "NSWindowDidDeminiaturizeNotification",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|n| n.host_name() == name)
    }
}
