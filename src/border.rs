//! Border color derivation.
//!
//! Produces a border/accent color a shade darker than a base color by
//! reducing HSL lightness by 10% of its current value.

use crate::color::Rgb;
use crate::parse::parse_hex;

/// Derive a border color from a base hex color.
///
/// The base color is converted to HSL, its lightness reduced
/// multiplicatively (`l' = l - l*0.1`), and the result converted back to RGB
/// with each channel rounded up, formatted as `rgb(r,g,b)`.
///
/// The input must be hex (`#RRGGBB` or `#RGB`, leading `#` optional). That
/// is a precondition rather than a checked error: any other input parses as
/// black, so the derived output degrades to `rgb(0,0,0)`. A warning is
/// logged when that happens.
///
/// # Examples
///
/// ```
/// use colorcontrast::border::border_color;
///
/// // lightness 128/255 drops to 0.9 of itself; 0.9 * 128 = 115.2, ceiling 116
/// assert_eq!(border_color("#808080"), "rgb(116,116,116)");
/// ```
#[must_use]
pub fn border_color(hex: &str) -> String {
    let rgb = parse_hex(hex).unwrap_or_else(|| {
        log::warn!("border_color expects hex input, got {hex:?}; deriving from black");
        Rgb::default()
    });

    let (r, g, b) = rgb.to_hsl().darken(0.1).to_rgb();

    #[expect(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        reason = "HSL conversion output stays within 0-255"
    )]
    let (r, g, b) = (r.ceil() as u32, g.ceil() as u32, b.ceil() as u32);

    let border = format!("rgb({r},{g},{b})");
    log::debug!("derived border color {border} from {hex:?}");
    border
}
