//! YIQ-based light/dark classification.
//!
//! This is a single-color perceptual-brightness test, not a WCAG contrast
//! ratio: the luma term of the YIQ encoding, thresholded at 128, decides
//! whether a background needs dark or light foreground text.

use std::fmt;

use crate::parse::parse_color;

/// Whether a background color reads as light or dark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Brightness {
    Light,
    Dark,
}

impl Brightness {
    /// Classify a color string as light or dark.
    ///
    /// Accepts every format [`parse_color`] does. Unrecognized input parses
    /// as black and therefore classifies as [`Brightness::Dark`].
    ///
    /// # Examples
    ///
    /// ```
    /// use colorcontrast::contrast::Brightness;
    ///
    /// assert_eq!(Brightness::classify("#ffffff"), Brightness::Light);
    /// assert_eq!(Brightness::classify("#000000"), Brightness::Dark);
    /// assert_eq!(Brightness::classify("rgb(255,255,0)"), Brightness::Light);
    /// ```
    #[must_use]
    pub fn classify(color: &str) -> Self {
        let parsed = parse_color(color);
        if yiq(parsed.red, parsed.green, parsed.blue) >= 128.0 {
            Self::Light
        } else {
            Self::Dark
        }
    }

    /// Name of this classification: `"light"` or `"dark"`.
    ///
    /// These are the CSS class names toggled on styled elements.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// A readable foreground color for text over a background with this
    /// brightness: dark gray text on light backgrounds, light gray on dark.
    #[must_use]
    pub const fn foreground(&self) -> &'static str {
        match self {
            Self::Light => "#555",
            Self::Dark => "#eee",
        }
    }
}

impl fmt::Display for Brightness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// YIQ luma of an RGB color, in 0.0-255.0.
///
/// `yiq = (r*299 + g*587 + b*114) / 1000`, weighting green heaviest to match
/// perceived brightness.
#[must_use]
pub fn yiq(red: u8, green: u8, blue: u8) -> f64 {
    (f64::from(red) * 299.0 + f64::from(green) * 587.0 + f64::from(blue) * 114.0) / 1000.0
}
