//! Fixed design tokens shared by the site chrome: breakpoints, palette and a
//! handful of layout constants.

use core::fmt;

/// Named viewport-width thresholds. Each token maps to a `min-width` media query.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Breakpoint {
    Mobile,
    Phablet,
    Tablet,
    Desktop,
    Hd,
    VHd,
    VVHd,
}

/// Ordered smallest to largest.
pub const BREAKPOINTS: [Breakpoint; 7] = [
    Breakpoint::Mobile,
    Breakpoint::Phablet,
    Breakpoint::Tablet,
    Breakpoint::Desktop,
    Breakpoint::Hd,
    Breakpoint::VHd,
    Breakpoint::VVHd,
];

impl Breakpoint {
    /// Inclusive lower bound of the breakpoint in CSS pixels.
    #[must_use]
    pub const fn min_width(self) -> u16 {
        match self {
            Self::Mobile => 400,
            Self::Phablet => 550,
            Self::Tablet => 750,
            Self::Desktop => 1000,
            Self::Hd => 1200,
            Self::VHd => 1450,
            Self::VVHd => 1650,
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Mobile => "Mobile",
            Self::Phablet => "Phablet",
            Self::Tablet => "Tablet",
            Self::Desktop => "Desktop",
            Self::Hd => "Hd",
            Self::VHd => "VHd",
            Self::VVHd => "VVHd",
        }
    }

    /// The media query this token stands for, e.g. `@media (min-width: 750px)`.
    #[must_use]
    pub fn media_query(self) -> String {
        format!("@media (min-width: {}px)", self.min_width())
    }

    /// Whether a viewport of `width` pixels matches this breakpoint.
    #[must_use]
    pub const fn matches(self, width: u16) -> bool {
        width >= self.min_width()
    }
}

impl fmt::Display for Breakpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Site palette.
pub mod colors {
    pub const GATSBY: &str = "#663399";
    pub const LILAC: &str = "#8c65b3";
    pub const WHITE: &str = "#fff";
    pub const UI_LIGHT: &str = "#f5f3f7";
    pub const UI_WHISPER: &str = "#fbfafc";
}

pub const HEADER_HEIGHT: &str = "3.5rem";
pub const BANNER_HEIGHT: &str = "2.5rem";

/// Horizontal page padding in rhythm units, per viewport class.
pub mod gutters {
    pub const DEFAULT: f32 = 1.5;
    pub const HD: f32 = 2.5;
    pub const VHD: f32 = 3.0;
    pub const VVHD: f32 = 4.5;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn breakpoints_ascend() {
        let widths: Vec<u16> = BREAKPOINTS.iter().map(|bp| bp.min_width()).collect();
        let mut sorted = widths.clone();
        sorted.sort_unstable();
        assert_eq!(widths, sorted);
    }

    #[test]
    fn media_query_format() {
        assert_eq!(Breakpoint::Tablet.media_query(), "@media (min-width: 750px)");
        assert_eq!(Breakpoint::Phablet.media_query(), "@media (min-width: 550px)");
    }

    #[test]
    fn matches_is_inclusive() {
        assert!(Breakpoint::Tablet.matches(750));
        assert!(!Breakpoint::Tablet.matches(749));
        assert!(Breakpoint::Mobile.matches(u16::MAX));
    }
}
