//! RGBA colors and hex color text decoding.
//!
//! Rows carry style overrides as raw hex text. Renderers resolve that text
//! with [`decode_hex`], falling back to a type-level default when the text
//! is absent or malformed.
//!
//! Accepted forms: `#RGB`, `#RRGGBB` and `#RRGGBBAA`, case-insensitive.
//! A five-character `#RGBx` value is read as `#RGB` with the trailing
//! character ignored.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// RGBA color with 8-bit channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Rgba(pub [u8; 4]);

impl Rgba {
    /// Opaque black.
    pub const BLACK: Self = Self::new(0, 0, 0, 255);
    /// Opaque white.
    pub const WHITE: Self = Self::new(255, 255, 255, 255);
    /// Fully transparent black.
    pub const TRANSPARENT: Self = Self::new(0, 0, 0, 0);

    /// Create a color from explicit channels.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self([r, g, b, a])
    }

    /// Red channel.
    #[must_use]
    pub const fn r(self) -> u8 {
        self.0[0]
    }

    /// Green channel.
    #[must_use]
    pub const fn g(self) -> u8 {
        self.0[1]
    }

    /// Blue channel.
    #[must_use]
    pub const fn b(self) -> u8 {
        self.0[2]
    }

    /// Alpha channel.
    #[must_use]
    pub const fn a(self) -> u8 {
        self.0[3]
    }

    /// Render the color as lowercase `#rrggbbaa` text.
    ///
    /// # Examples
    /// ```
    /// use tabgeo_core::Rgba;
    ///
    /// assert_eq!(Rgba::new(0xaa, 0xbb, 0xcc, 0xff).to_hex(), "#aabbccff");
    /// ```
    #[must_use]
    pub fn to_hex(self) -> String {
        let [r, g, b, a] = self.0;
        format!("#{r:02x}{g:02x}{b:02x}{a:02x}")
    }
}

/// Decode hex color text, returning `default` when it cannot be used.
///
/// # Examples
/// ```
/// use tabgeo_core::{Rgba, decode_hex};
///
/// let fallback = Rgba::new(0, 0, 0, 100);
/// assert_eq!(decode_hex(Some("#abc"), fallback), Rgba::new(0xaa, 0xbb, 0xcc, 0xff));
/// assert_eq!(decode_hex(Some("#ff000080"), fallback), Rgba::new(255, 0, 0, 128));
/// assert_eq!(decode_hex(Some("red"), fallback), fallback);
/// assert_eq!(decode_hex(None, fallback), fallback);
/// ```
#[must_use]
pub fn decode_hex(hex: Option<&str>, default: Rgba) -> Rgba {
    let Some(digits) = hex.and_then(|text| text.strip_prefix('#')) else {
        return default;
    };
    let expanded = match *digits.as_bytes() {
        [r, g, b] | [r, g, b, _] => [r, r, g, g, b, b, b'F', b'F'],
        [r1, r2, g1, g2, b1, b2] => [r1, r2, g1, g2, b1, b2, b'F', b'F'],
        [r1, r2, g1, g2, b1, b2, a1, a2] => [r1, r2, g1, g2, b1, b2, a1, a2],
        _ => return default,
    };
    parse_channels(expanded).unwrap_or(default)
}

/// Replace the alpha channel of `color` with `opacity`.
///
/// # Examples
/// ```
/// use tabgeo_core::{Rgba, with_opacity};
///
/// assert_eq!(with_opacity(Rgba::BLACK, 100), Rgba::new(0, 0, 0, 100));
/// ```
#[must_use]
pub const fn with_opacity(color: Rgba, opacity: u8) -> Rgba {
    let [r, g, b, _] = color.0;
    Rgba::new(r, g, b, opacity)
}

fn parse_channels(digits: [u8; 8]) -> Option<Rgba> {
    let [r1, r2, g1, g2, b1, b2, a1, a2] = digits;
    Some(Rgba::new(
        hex_pair(r1, r2)?,
        hex_pair(g1, g2)?,
        hex_pair(b1, b2)?,
        hex_pair(a1, a2)?,
    ))
}

fn hex_pair(high: u8, low: u8) -> Option<u8> {
    let high_nibble = char::from(high).to_digit(16)?;
    let low_nibble = char::from(low).to_digit(16)?;
    u8::try_from((high_nibble << 4) | low_nibble).ok()
}
