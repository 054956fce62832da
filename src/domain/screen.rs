//! Screen identifiers and transition direction.

use std::fmt;
use std::str::FromStr;

/// One full-viewport logical view of the shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ScreenId {
    /// Credential entry.
    #[default]
    Login,
    /// Dashboard shown after sign-in.
    Home,
    /// Package list.
    Packages,
    /// Turn-by-turn view of the current stop.
    Navigate,
    /// Profile and preferences.
    Settings,
}

/// Fixed screen order. Only used to derive slide direction.
pub const SCREEN_ORDER: [ScreenId; 5] = [
    ScreenId::Login,
    ScreenId::Home,
    ScreenId::Packages,
    ScreenId::Navigate,
    ScreenId::Settings,
];

/// Prefix shared by every screen element id.
pub const SCREEN_ELEMENT_PREFIX: &str = "screen-";

impl ScreenId {
    /// Returns the screen name used in element ids.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Login => "login",
            Self::Home => "home",
            Self::Packages => "packages",
            Self::Navigate => "navigate",
            Self::Settings => "settings",
        }
    }

    /// Returns the human-readable title.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Login => "Sign In",
            Self::Home => "Home",
            Self::Packages => "Packages",
            Self::Navigate => "Navigate",
            Self::Settings => "Settings",
        }
    }

    /// Position in [`SCREEN_ORDER`].
    #[must_use]
    pub fn order(self) -> usize {
        SCREEN_ORDER
            .iter()
            .position(|screen| *screen == self)
            .unwrap_or_default()
    }

    /// Returns the element id of the screen container.
    #[must_use]
    pub fn element_id(self) -> String {
        format!("{SCREEN_ELEMENT_PREFIX}{}", self.name())
    }

    /// Looks up a screen by name, `None` when the name is not a screen.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        SCREEN_ORDER.into_iter().find(|screen| screen.name() == name)
    }
}

impl fmt::Display for ScreenId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing an unknown screen name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown screen: {0}")]
pub struct UnknownScreen(pub String);

impl FromStr for ScreenId {
    type Err = UnknownScreen;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| UnknownScreen(s.to_string()))
    }
}

/// Slide direction of a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Target is at the same or a later position.
    Forward,
    /// Target is at an earlier position.
    Backward,
}

impl Direction {
    /// Computes direction from `from` to `to`. Ties slide forward.
    #[must_use]
    pub fn between(from: ScreenId, to: ScreenId) -> Self {
        if to.order() >= from.order() {
            Self::Forward
        } else {
            Self::Backward
        }
    }
}

/// A completed screen change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    /// Screen that was visible before.
    pub from: ScreenId,
    /// Screen that is visible now.
    pub to: ScreenId,
    /// Slide direction.
    pub direction: Direction,
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test]
    fn test_order_matches_declaration() {
        for (index, screen) in SCREEN_ORDER.iter().enumerate() {
            assert_eq!(screen.order(), index);
        }
    }

    #[test]
    fn test_from_name() {
        assert_eq!(ScreenId::from_name("packages"), Some(ScreenId::Packages));
        assert_eq!(ScreenId::from_name("profile"), None);
        assert!("Home".parse::<ScreenId>().is_err());
        assert_eq!("home".parse::<ScreenId>(), Ok(ScreenId::Home));
    }

    #[test]
    fn test_element_id() {
        assert_eq!(ScreenId::Navigate.element_id(), "screen-navigate");
    }

    #[test]
    fn test_direction_matrix() {
        for from in SCREEN_ORDER {
            for to in SCREEN_ORDER {
                let expected = if to.order() >= from.order() {
                    Direction::Forward
                } else {
                    Direction::Backward
                };
                assert_eq!(Direction::between(from, to), expected, "{from} -> {to}");
            }
        }
    }

    #[test_case(ScreenId::Login, ScreenId::Home, Direction::Forward ; "login_to_home")]
    #[test_case(ScreenId::Settings, ScreenId::Login, Direction::Backward ; "settings_to_login")]
    #[test_case(ScreenId::Packages, ScreenId::Packages, Direction::Forward ; "tie_is_forward")]
    #[test_case(ScreenId::Navigate, ScreenId::Home, Direction::Backward ; "navigate_to_home")]
    fn test_direction_cases(from: ScreenId, to: ScreenId, expected: Direction) {
        assert_eq!(Direction::between(from, to), expected);
    }
}
