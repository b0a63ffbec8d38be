//! Window decoration bit-set.

use std::ops::{BitOr, BitOrAssign};

use serde::{Deserialize, Serialize};

/// Decoration flags passed straight through as the host's style mask.
///
/// `BORDERLESS` is the zero value. Combining it with other flags is meaningless but
/// not rejected here; the host decides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "Vec<StyleFlag>", into = "Vec<StyleFlag>")]
pub struct WindowStyle(u64);

impl WindowStyle {
    pub const BORDERLESS: WindowStyle = WindowStyle(0);
    pub const TITLED: WindowStyle = WindowStyle(1 << 0);
    pub const CLOSABLE: WindowStyle = WindowStyle(1 << 1);
    pub const MINIATURIZABLE: WindowStyle = WindowStyle(1 << 2);
    pub const RESIZABLE: WindowStyle = WindowStyle(1 << 3);

    pub const fn from_bits(bits: u64) -> Self {
        Self(bits)
    }

    pub const fn bits(self) -> u64 {
        self.0
    }

    pub const fn is_borderless(self) -> bool {
        self.0 == 0
    }

    pub const fn contains(self, other: WindowStyle) -> bool {
        self.0 & other.0 == other.0
    }
}

impl Default for WindowStyle {
    fn default() -> Self {
        Self::TITLED | Self::CLOSABLE | Self::MINIATURIZABLE | Self::RESIZABLE
    }
}

impl BitOr for WindowStyle {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for WindowStyle {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

/// Named form of a single decoration, used for configuration files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StyleFlag {
    Titled,
    Closable,
    Miniaturizable,
    Resizable,
}

impl StyleFlag {
    const ALL: [StyleFlag; 4] = [
        StyleFlag::Titled,
        StyleFlag::Closable,
        StyleFlag::Miniaturizable,
        StyleFlag::Resizable,
    ];

    fn style(self) -> WindowStyle {
        match self {
            StyleFlag::Titled => WindowStyle::TITLED,
            StyleFlag::Closable => WindowStyle::CLOSABLE,
            StyleFlag::Miniaturizable => WindowStyle::MINIATURIZABLE,
            StyleFlag::Resizable => WindowStyle::RESIZABLE,
        }
    }
}

impl From<Vec<StyleFlag>> for WindowStyle {
    fn from(flags: Vec<StyleFlag>) -> Self {
        flags
            .into_iter()
            .fold(WindowStyle::BORDERLESS, |style, flag| style | flag.style())
    }
}

impl From<WindowStyle> for Vec<StyleFlag> {
    fn from(style: WindowStyle) -> Self {
        StyleFlag::ALL
            .into_iter()
            .filter(|flag| style.contains(flag.style()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bits_match_host_mask() {
        assert_eq!(WindowStyle::BORDERLESS.bits(), 0);
        assert_eq!(WindowStyle::default().bits(), 0b1111);
        assert_eq!((WindowStyle::TITLED | WindowStyle::RESIZABLE).bits(), 0b1001);
    }

    #[test]
    fn test_contains() {
        let style = WindowStyle::TITLED | WindowStyle::CLOSABLE;
        assert!(style.contains(WindowStyle::CLOSABLE));
        assert!(!style.contains(WindowStyle::RESIZABLE));
        assert!(style.contains(WindowStyle::BORDERLESS));
        assert!(WindowStyle::BORDERLESS.is_borderless());
    }

    #[test]
    fn test_deserialize_from_names() {
        let style: WindowStyle = serde_json::from_str(r#"["titled", "resizable"]"#).unwrap();
        assert_eq!(style, WindowStyle::TITLED | WindowStyle::RESIZABLE);

        let borderless: WindowStyle = serde_json::from_str("[]").unwrap();
        assert!(borderless.is_borderless());
    }

    #[test]
    fn test_serialize_to_names() {
        let json = serde_json::to_string(&(WindowStyle::CLOSABLE | WindowStyle::TITLED)).unwrap();
        assert_eq!(json, r#"["titled","closable"]"#);
    }
}
