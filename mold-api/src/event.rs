//! Event taxonomy.
//!
//! `EventKind` mirrors the host's native event-type codes one to one. `Event` is the
//! tagged form the run-loop works with after ingress classification; nothing past
//! the classifier ever looks at a raw host event.

use serde::{Deserialize, Serialize};

use crate::Point;

/// Host event-type codes this runtime knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u64)]
pub enum EventKind {
    MouseLeftDown = 1,
    MouseLeftUp = 2,
    MouseRightDown = 3,
    MouseRightUp = 4,
    MouseMoved = 5,
    MouseLeftDrag = 6,
    MouseRightDrag = 7,
    MouseEntered = 8,
    MouseExited = 9,
    KeyDown = 10,
    KeyUp = 11,
}

impl EventKind {
    pub fn from_code(code: u64) -> Option<Self> {
        Some(match code {
            1 => Self::MouseLeftDown,
            2 => Self::MouseLeftUp,
            3 => Self::MouseRightDown,
            4 => Self::MouseRightUp,
            5 => Self::MouseMoved,
            6 => Self::MouseLeftDrag,
            7 => Self::MouseRightDrag,
            8 => Self::MouseEntered,
            9 => Self::MouseExited,
            10 => Self::KeyDown,
            11 => Self::KeyUp,
            _ => return None,
        })
    }

    pub const fn code(self) -> u64 {
        self as u64
    }
}

/// Host virtual key code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KeyCode(pub u16);

impl KeyCode {
    /// "Q" on the host's ANSI layout.
    pub const Q: KeyCode = KeyCode(0x0C);
}

/// Host modifier-flag mask, kept as the raw bits the host reports.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ModifierFlags(pub u64);

impl ModifierFlags {
    pub const NONE: ModifierFlags = ModifierFlags(0);
    pub const SHIFT: ModifierFlags = ModifierFlags(1 << 17);
    pub const CONTROL: ModifierFlags = ModifierFlags(1 << 18);
    pub const OPTION: ModifierFlags = ModifierFlags(1 << 19);
    pub const COMMAND: ModifierFlags = ModifierFlags(1 << 20);

    pub const fn contains(self, other: ModifierFlags) -> bool {
        self.0 & other.0 == other.0
    }
}

/// A key plus required modifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyChord {
    pub key: KeyCode,
    pub modifiers: ModifierFlags,
}

impl KeyChord {
    /// Exact key match; every required modifier bit must be set, extra bits are allowed.
    pub fn matches(&self, key: KeyCode, modifiers: ModifierFlags) -> bool {
        key == self.key && modifiers.contains(self.modifiers)
    }
}

impl Default for KeyChord {
    fn default() -> Self {
        Self {
            key: KeyCode::Q,
            modifiers: ModifierFlags::COMMAND,
        }
    }
}

/// A host event after ingress classification.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Event {
    /// Pointer moved; `location` is relative to the window.
    MouseMoved { location: Point },
    KeyDown {
        key_code: KeyCode,
        modifiers: ModifierFlags,
    },
    KeyUp { key_code: KeyCode },
    /// Everything the loop does not interpret itself. `kind` is `None` for codes
    /// outside the taxonomy.
    Other { kind: Option<EventKind>, code: u64 },
}

impl Event {
    pub fn kind(&self) -> Option<EventKind> {
        match self {
            Event::MouseMoved { .. } => Some(EventKind::MouseMoved),
            Event::KeyDown { .. } => Some(EventKind::KeyDown),
            Event::KeyUp { .. } => Some(EventKind::KeyUp),
            Event::Other { kind, .. } => *kind,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_code_is_direct_mapping() {
        for code in 1..=11u64 {
            let kind = EventKind::from_code(code).expect("code in taxonomy");
            assert_eq!(kind.code(), code);
        }
    }

    #[test]
    fn test_from_code_unknown() {
        assert_eq!(EventKind::from_code(0), None);
        assert_eq!(EventKind::from_code(12), None);
        // NSEventTypeScrollWheel
        assert_eq!(EventKind::from_code(22), None);
    }

    #[test]
    fn test_quit_chord_requires_command() {
        let chord = KeyChord::default();
        assert!(chord.matches(KeyCode(0x0C), ModifierFlags::COMMAND));
        assert!(chord.matches(
            KeyCode(0x0C),
            ModifierFlags(ModifierFlags::COMMAND.0 | ModifierFlags::SHIFT.0)
        ));
        assert!(!chord.matches(KeyCode(0x0C), ModifierFlags::NONE));
        assert!(!chord.matches(KeyCode(0x0C), ModifierFlags::CONTROL));
        assert!(!chord.matches(KeyCode(0x0D), ModifierFlags::COMMAND));
    }

    #[test]
    fn test_event_kind() {
        let moved = Event::MouseMoved {
            location: Point::new(1.0, 2.0),
        };
        assert_eq!(moved.kind(), Some(EventKind::MouseMoved));

        let unknown = Event::Other { kind: None, code: 22 };
        assert_eq!(unknown.kind(), None);
    }
}
