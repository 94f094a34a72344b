//! Color string parsing.
//!
//! Accepts `rgba(r,g,b,a)`, `rgb(r,g,b)`, and hex colors (`#RGB`, `#RRGGBB`,
//! with or without the leading `#`), case-insensitive and
//! whitespace-tolerant.
//!
//! The primary entry point, [`parse_color`], never fails: unrecognized input
//! degrades to zero channels (black) so callers can stay check-free. That is
//! the baseline contract the classifier and border deriver rely on. Callers
//! that want malformed input rejected instead use [`parse_color_strict`].
//!
//! # Examples
//!
//! ```
//! use colorcontrast::parse::parse_color;
//!
//! let c = parse_color("#f80");
//! assert_eq!((c.red, c.green, c.blue), (255, 136, 0));
//!
//! let c = parse_color("rgba(10, 20, 30, 0.5)");
//! assert_eq!((c.red, c.alpha), (10, 0.5));
//!
//! // Permissive fallback: not a color, but not an error either.
//! let c = parse_color("transparent");
//! assert_eq!((c.red, c.green, c.blue), (0, 0, 0));
//! ```

use std::fmt;
use std::num::NonZeroUsize;
use std::sync::{LazyLock, Mutex};

use lru::LruCache;
use regex::Regex;

use crate::color::Rgb;

/// Channels extracted from a color string.
///
/// Alpha comes only from `rgba(...)` input and is ignored by every
/// conversion downstream; it is carried so callers can inspect it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParsedColor {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
    pub alpha: f64,
}

impl ParsedColor {
    /// Create a fully opaque parsed color.
    #[must_use]
    pub const fn opaque(red: u8, green: u8, blue: u8) -> Self {
        Self {
            red,
            green,
            blue,
            alpha: 1.0,
        }
    }

    /// The RGB part, dropping alpha.
    #[must_use]
    pub const fn rgb(&self) -> Rgb {
        Rgb::new(self.red, self.green, self.blue)
    }
}

impl Default for ParsedColor {
    /// Opaque black, the value unrecognized input degrades to.
    fn default() -> Self {
        Self::opaque(0, 0, 0)
    }
}

static RGBA_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^rgba\(\s*(\d{1,3})\s*,\s*(\d{1,3})\s*,\s*(\d{1,3})\s*,\s*(\d*\.?\d+)\s*\)$")
        .expect("valid regex")
});

static RGB_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^rgb\(\s*(\d{1,3})\s*,\s*(\d{1,3})\s*,\s*(\d{1,3})\s*\)$").expect("valid regex")
});

static HEX_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^#?([0-9a-f]{6}|[0-9a-f]{3})$").expect("valid regex")
});

/// Parse a color string, degrading to black on unrecognized input (cached).
///
/// Supported formats:
/// - Hex: `#RRGGBB`, `#RGB` (shorthand expands each digit by duplication),
///   leading `#` optional
/// - RGB: `rgb(255, 0, 0)`
/// - RGBA: `rgba(255, 0, 0, 0.5)` (alpha carried through, unused by
///   conversions)
///
/// Anything else yields zero channels and alpha 1.0. A warning is logged so
/// silently-black malformed input remains diagnosable.
#[must_use]
pub fn parse_color(color: &str) -> ParsedColor {
    static CACHE: LazyLock<Mutex<LruCache<String, ParsedColor>>> =
        LazyLock::new(|| Mutex::new(LruCache::new(NonZeroUsize::new(1024).expect("non-zero"))));

    let normalized = color.trim().to_lowercase();

    if let Ok(mut cache) = CACHE.lock()
        && let Some(&cached) = cache.get(&normalized)
    {
        return cached;
    }

    let result = parse_channels(&normalized).unwrap_or_else(|| {
        log::warn!("unrecognized color {color:?}, defaulting channels to zero");
        ParsedColor::default()
    });

    if let Ok(mut cache) = CACHE.lock() {
        cache.put(normalized, result);
    }

    result
}

/// Parse a color string, rejecting anything [`parse_color`] would zero-fill.
///
/// # Errors
///
/// Returns `ParseColorError::Empty` for blank input and
/// `ParseColorError::InvalidFormat` when the string matches none of the
/// accepted formats.
pub fn parse_color_strict(color: &str) -> Result<ParsedColor, ParseColorError> {
    let normalized = color.trim().to_lowercase();
    if normalized.is_empty() {
        return Err(ParseColorError::Empty);
    }
    parse_channels(&normalized).ok_or_else(|| ParseColorError::InvalidFormat(color.to_string()))
}

/// Parse hex input only (`#RRGGBB` or `#RGB`, leading `#` optional).
///
/// This is the format contract of [`crate::border::border_color`]; other
/// color formats are not accepted here.
#[must_use]
pub fn parse_hex(hex: &str) -> Option<Rgb> {
    let normalized = hex.trim().to_lowercase();
    HEX_RE
        .captures(&normalized)
        .map(|caps| hex_channels(&caps[1]).rgb())
}

/// Dispatch over the recognized formats. Expects trimmed, lowercased input.
fn parse_channels(color: &str) -> Option<ParsedColor> {
    if let Some(caps) = RGBA_RE.captures(color) {
        let alpha = caps[4].parse::<f64>().unwrap_or(1.0).clamp(0.0, 1.0);
        return Some(ParsedColor {
            red: channel(&caps[1]),
            green: channel(&caps[2]),
            blue: channel(&caps[3]),
            alpha,
        });
    }

    if let Some(caps) = RGB_RE.captures(color) {
        return Some(ParsedColor::opaque(
            channel(&caps[1]),
            channel(&caps[2]),
            channel(&caps[3]),
        ));
    }

    HEX_RE.captures(color).map(|caps| hex_channels(&caps[1]))
}

/// Decimal channel from 1-3 digits, saturating at 255.
fn channel(digits: &str) -> u8 {
    let value: u16 = digits.parse().unwrap_or(u16::MAX);
    u8::try_from(value).unwrap_or(u8::MAX)
}

/// Channels from 3 or 6 hex digits (already validated by `HEX_RE`).
fn hex_channels(hex: &str) -> ParsedColor {
    let expanded;
    let hex = if hex.len() == 3 {
        expanded = hex.chars().flat_map(|c| [c, c]).collect::<String>();
        expanded.as_str()
    } else {
        hex
    };

    ParsedColor::opaque(
        u8::from_str_radix(&hex[0..2], 16).unwrap_or(0),
        u8::from_str_radix(&hex[2..4], 16).unwrap_or(0),
        u8::from_str_radix(&hex[4..6], 16).unwrap_or(0),
    )
}

/// Error type for strict color parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseColorError {
    Empty,
    InvalidFormat(String),
}

impl fmt::Display for ParseColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Empty color string"),
            Self::InvalidFormat(s) => write!(f, "Unrecognized color format: {s}"),
        }
    }
}

impl std::error::Error for ParseColorError {}
