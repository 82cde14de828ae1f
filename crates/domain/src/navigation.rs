//! Navigation timing — how the visitor reached the current page.

/// Navigation type as reported by the Navigation Timing API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationKind {
    Navigate,
    Reload,
    BackForward,
    Reserved,
}

impl NavigationKind {
    /// Map the legacy `performance.navigation.type` code.
    #[must_use]
    pub fn from_code(code: u16) -> Self {
        match code {
            0 => Self::Navigate,
            1 => Self::Reload,
            2 => Self::BackForward,
            _ => Self::Reserved,
        }
    }

    #[must_use]
    pub fn is_reload(self) -> bool {
        matches!(self, Self::Reload)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_detect_reload() {
        assert!(NavigationKind::from_code(1).is_reload());
        assert!(!NavigationKind::from_code(0).is_reload());
    }

    #[test]
    fn should_map_unknown_codes_to_reserved() {
        assert_eq!(NavigationKind::from_code(255), NavigationKind::Reserved);
    }
}
