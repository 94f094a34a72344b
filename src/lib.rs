//! # colorcontrast
//!
//! Color-contrast utilities for picking readable foreground colors.
//!
//! This library answers two questions about a background color:
//!
//! - Is it visually light or dark, so that text drawn over it stays readable?
//! - What does a slightly darker variant look like, for borders and accents?
//!
//! Both are built on a small set of pure conversions between RGB, HSL, and
//! HSV, plus a permissive parser for CSS-style color strings.
//!
//! ## Quick Start
//!
//! ```
//! use colorcontrast::prelude::*;
//!
//! assert_eq!(Brightness::classify("#ffffff"), Brightness::Light);
//! assert_eq!(Brightness::classify("rgb(20, 20, 20)"), Brightness::Dark);
//!
//! // A border color 10% darker than the base.
//! let border = border_color("#808080");
//! assert_eq!(border, "rgb(116,116,116)");
//! ```
//!
//! ## Core Concepts
//!
//! - **Rgb / Hsl / Hsv**: immutable color value types with conversions
//! - **Brightness**: YIQ-based light/dark classification of a color string
//! - **parse_color**: permissive parsing that never fails (unrecognized
//!   input degrades to black); [`parse::parse_color_strict`] rejects instead
//! - **border_color**: hex in, `rgb(r,g,b)` out, 10% less lightness
//!
//! The classification is a single-color brightness heuristic (the luma term
//! of the YIQ encoding), not a WCAG contrast ratio.

#![forbid(unsafe_code)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod border;
pub mod color;
pub mod contrast;
pub mod parse;

/// Re-exports for convenient usage
pub mod prelude {
    pub use crate::border::border_color;
    pub use crate::color::{Hsl, Hsv, Rgb};
    pub use crate::contrast::{Brightness, yiq};
    pub use crate::parse::{
        ParseColorError, ParsedColor, parse_color, parse_color_strict, parse_hex,
    };
}

// Re-export key types at crate root
pub use border::border_color;
pub use color::{Hsl, Hsv, Rgb};
pub use contrast::{Brightness, yiq};
pub use parse::{ParseColorError, ParsedColor, parse_color, parse_color_strict, parse_hex};
