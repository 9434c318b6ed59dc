//! Color palettes for the light and dark themes.
//!
//! The whole frame is painted from a single [`Palette`], chosen from the
//! theme flag on every draw.

use ratatui::style::Color;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Frame background
    pub background: Color,
    /// Primary text
    pub text: Color,
    /// Secondary text (dates, hints)
    pub muted: Color,
    /// Card and panel borders
    pub border: Color,
    /// Branding, focused borders, links
    pub accent: Color,
    /// Background of the selected row
    pub highlight: Color,
    /// Background of input fields
    pub input_bg: Color,
    /// Flagged comments and their badges
    pub flagged: Color,
    /// "Potential Spam" statistic
    pub warning: Color,
    pub success: Color,
    pub error: Color,
}

// ============================================================================
// Dark
// ============================================================================

pub const DARK: Palette = Palette {
    background: Color::Rgb(17, 24, 39),
    text: Color::Rgb(243, 244, 246),
    muted: Color::Rgb(156, 163, 175),
    border: Color::Rgb(55, 65, 81),
    accent: Color::Rgb(96, 165, 250),
    highlight: Color::Rgb(31, 41, 55),
    input_bg: Color::Rgb(31, 41, 55),
    flagged: Color::Rgb(248, 113, 113),
    warning: Color::Rgb(251, 191, 36),
    success: Color::Rgb(74, 222, 128),
    error: Color::Rgb(248, 113, 113),
};

// ============================================================================
// Light
// ============================================================================

pub const LIGHT: Palette = Palette {
    background: Color::Rgb(249, 250, 251),
    text: Color::Rgb(17, 24, 39),
    muted: Color::Rgb(107, 114, 128),
    border: Color::Rgb(209, 213, 219),
    accent: Color::Rgb(37, 99, 235),
    highlight: Color::Rgb(229, 231, 235),
    input_bg: Color::Rgb(255, 255, 255),
    flagged: Color::Rgb(220, 38, 38),
    warning: Color::Rgb(217, 119, 6),
    success: Color::Rgb(22, 163, 74),
    error: Color::Rgb(220, 38, 38),
};

impl Palette {
    pub fn for_mode(dark: bool) -> Self {
        if dark {
            DARK
        } else {
            LIGHT
        }
    }
}
