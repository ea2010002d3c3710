//! Hero background chosen by the visitor's hour of day.

use serde::Serialize;

/// Hero background variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum HeroTheme {
    Day,
    Sunset,
    Night,
}

impl HeroTheme {
    /// 18:00-05:59 is night, 16:00-17:59 sunset, the rest day.
    #[must_use]
    pub const fn for_hour(hour: u32) -> Self {
        match hour {
            18.. | 0..6 => Self::Night,
            16..18 => Self::Sunset,
            _ => Self::Day,
        }
    }

    /// CSS modifier class for the hero section.
    #[must_use]
    pub const fn css_class(self) -> &'static str {
        match self {
            Self::Day => "hero--day",
            Self::Sunset => "hero--sunset",
            Self::Night => "hero--night",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boundaries() {
        assert_eq!(HeroTheme::for_hour(5), HeroTheme::Night);
        assert_eq!(HeroTheme::for_hour(6), HeroTheme::Day);
        assert_eq!(HeroTheme::for_hour(15), HeroTheme::Day);
        assert_eq!(HeroTheme::for_hour(16), HeroTheme::Sunset);
        assert_eq!(HeroTheme::for_hour(17), HeroTheme::Sunset);
        assert_eq!(HeroTheme::for_hour(18), HeroTheme::Night);
        assert_eq!(HeroTheme::for_hour(23), HeroTheme::Night);
    }

    #[test]
    fn test_css_class() {
        assert_eq!(HeroTheme::Sunset.css_class(), "hero--sunset");
    }
}
