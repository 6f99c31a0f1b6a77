//! Conversions between the four color representations blocks deal with:
//! packed decimal numbers, `#rrggbb` hex strings, [`Rgb`] and [`Hsv`].

use crate::cast::to_number;
use crate::core::{Value, to_int32};
use crate::error::CastError;
use std::borrow::Cow;

/// An RGB color with channels in `[0, 255]`.
///
/// Channels are stored as `f64` because [`mix_rgb`] deliberately hands back
/// unrounded blends; every other constructor yields whole numbers.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    /// Alpha byte, only present on colors decoded from a decimal.
    pub a: Option<u8>,
}

fn clamp_channel(c: f64) -> f64 {
    if c.is_nan() { 0.0 } else { c.round().clamp(0.0, 255.0) }
}

fn clamp_unit(x: f64) -> f64 {
    if x.is_nan() { 0.0 } else { x.clamp(0.0, 1.0) }
}

impl Rgb {
    pub const BLACK: Rgb = Rgb {
        r: 0.0,
        g: 0.0,
        b: 0.0,
        a: None,
    };

    pub const WHITE: Rgb = Rgb {
        r: 255.0,
        g: 255.0,
        b: 255.0,
        a: None,
    };

    /// Build a color, rounding and clamping each channel into `[0, 255]`.
    pub fn new(r: f64, g: f64, b: f64) -> Self {
        Rgb {
            r: clamp_channel(r),
            g: clamp_channel(g),
            b: clamp_channel(b),
            a: None,
        }
    }

    #[must_use]
    pub fn with_alpha(self, a: u8) -> Self {
        Rgb { a: Some(a), ..self }
    }

    /// Re-apply the integer channel invariant, e.g. after [`mix_rgb`].
    #[must_use]
    pub fn rounded(&self) -> Self {
        Rgb {
            a: self.a,
            ..Rgb::new(self.r, self.g, self.b)
        }
    }

    pub fn to_list(self) -> [u8; 3] {
        let c = self.rounded();
        [c.r as u8, c.g as u8, c.b as u8]
    }
}

/// An HSV color: hue in degrees `[0, 360)`, saturation and value in `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hsv {
    pub h: f64,
    pub s: f64,
    pub v: f64,
}

impl Hsv {
    pub fn new(h: f64, s: f64, v: f64) -> Self {
        Hsv { h, s, v }
    }
}

/// Convert a decimal color to `#rrggbb`.
///
/// The number is truncated to a 32-bit integer first, as for
/// [`decimal_to_rgb`]. Negative decimals are 24-bit two's complement. Bits
/// above the low 24 are dropped so the result is always seven characters.
pub fn decimal_to_hex(decimal: f64) -> String {
    let mut decimal = to_int32(decimal) as i64;
    if decimal < 0 {
        decimal += 0xFFFFFF + 1;
    }
    format!("#{:06x}", decimal.rem_euclid(0x1000000))
}

/// Convert a decimal color to RGB. An alpha byte of 0 means opaque, since most
/// decimals are plain 24-bit colors.
pub fn decimal_to_rgb(decimal: f64) -> Rgb {
    let decimal = to_int32(decimal);
    let a = (decimal >> 24) & 0xff;
    let r = (decimal >> 16) & 0xff;
    let g = (decimal >> 8) & 0xff;
    let b = decimal & 0xff;
    Rgb {
        r: r as f64,
        g: g as f64,
        b: b as f64,
        a: Some(if a > 0 { a as u8 } else { 255 }),
    }
}

/// Parse a hex color: `F00`, `#03F` or `#0033FF`.
pub fn hex_to_rgb(hex: &str) -> Result<Rgb, CastError> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    let invalid = || CastError::InvalidHex { hex: hex.to_string() };
    let nibble = |c: u8| -> Result<u8, CastError> {
        match c {
            b'0'..=b'9' => Ok(c - b'0'),
            b'a'..=b'f' => Ok(c - b'a' + 10),
            b'A'..=b'F' => Ok(c - b'A' + 10),
            _ => Err(invalid()),
        }
    };

    let len = digits.chars().count();
    if len != 3 && len != 6 {
        return Err(CastError::InvalidHexLength { len });
    }
    if !digits.is_ascii() {
        return Err(invalid());
    }
    let bytes = digits.as_bytes();
    let (r, g, b) = if len == 3 {
        let r = nibble(bytes[0])?;
        let g = nibble(bytes[1])?;
        let b = nibble(bytes[2])?;
        (r << 4 | r, g << 4 | g, b << 4 | b)
    } else {
        let byte = |hi: u8, lo: u8| -> Result<u8, CastError> { Ok(nibble(hi)? << 4 | nibble(lo)?) };
        (byte(bytes[0], bytes[1])?, byte(bytes[2], bytes[3])?, byte(bytes[4], bytes[5])?)
    };
    Ok(Rgb {
        r: r as f64,
        g: g as f64,
        b: b as f64,
        a: None,
    })
}

pub fn rgb_to_decimal(rgb: &Rgb) -> i64 {
    // 32-bit shifts, as the runtime's `<<` operator
    let r = to_int32(rgb.r).wrapping_shl(16) as i64;
    let g = to_int32(rgb.g).wrapping_shl(8) as i64;
    let b = to_int32(rgb.b) as i64;
    r + g + b
}

pub fn rgb_to_hex(rgb: &Rgb) -> String {
    decimal_to_hex(rgb_to_decimal(rgb) as f64)
}

pub fn hex_to_decimal(hex: &str) -> Result<i64, CastError> {
    hex_to_rgb(hex).map(|rgb| rgb_to_decimal(&rgb))
}

/// Convert HSV to RGB. Channels are floored, not rounded.
pub fn hsv_to_rgb(hsv: &Hsv) -> Rgb {
    let mut h = if hsv.h.is_finite() { hsv.h % 360.0 } else { 0.0 };
    if h < 0.0 {
        h += 360.0;
    }
    let s = clamp_unit(hsv.s);
    let v = clamp_unit(hsv.v);

    let i = (h / 60.0).floor();
    let f = h / 60.0 - i;
    let p = v * (1.0 - s);
    let q = v * (1.0 - s * f);
    let t = v * (1.0 - s * (1.0 - f));

    // A hue that rounds up to exactly 360 lands in sector 6 and wraps to red
    let (r, g, b) = match i as i64 {
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        5 => (v, p, q),
        _ => (v, t, p),
    };

    Rgb {
        r: (r * 255.0).floor(),
        g: (g * 255.0).floor(),
        b: (b * 255.0).floor(),
        a: None,
    }
}

/// Convert RGB to HSV. Grays report hue and saturation 0.
pub fn rgb_to_hsv(rgb: &Rgb) -> Hsv {
    let r = rgb.r / 255.0;
    let g = rgb.g / 255.0;
    let b = rgb.b / 255.0;
    let x = r.min(g).min(b);
    let v = r.max(g).max(b);

    let mut h = 0.0;
    let mut s = 0.0;
    if x != v {
        let (f, i) = if r == x {
            (g - b, 3.0)
        } else if g == x {
            (b - r, 5.0)
        } else {
            (r - g, 1.0)
        };
        h = ((i - f / (v - x)) * 60.0) % 360.0;
        s = (v - x) / v;
    }

    Hsv { h, s, v }
}

/// Linear interpolation between two colors.
///
/// `fraction1 <= 0` hands back `rgb0` itself and `fraction1 >= 1` hands back
/// `rgb1`; in between the blend keeps fractional channels. Round with
/// [`Rgb::rounded`] when integers are needed.
pub fn mix_rgb<'a>(rgb0: &'a Rgb, rgb1: &'a Rgb, fraction1: f64) -> Cow<'a, Rgb> {
    if fraction1 <= 0.0 {
        return Cow::Borrowed(rgb0);
    }
    if fraction1 >= 1.0 {
        return Cow::Borrowed(rgb1);
    }
    let fraction0 = 1.0 - fraction1;
    Cow::Owned(Rgb {
        r: fraction0 * rgb0.r + fraction1 * rgb1.r,
        g: fraction0 * rgb0.g + fraction1 * rgb1.g,
        b: fraction0 * rgb0.b + fraction1 * rgb1.b,
        a: None,
    })
}

/// Cast any block argument to a color for the renderer.
///
/// Strings starting with `#` are parsed as hex, falling back to opaque black
/// when they are not valid hex. Everything else is cast to a number and
/// decoded as a decimal color.
pub fn to_rgb_color_object(value: &Value) -> Rgb {
    if let Value::String(s) = value
        && s.starts_with('#')
    {
        return hex_to_rgb(s).unwrap_or_else(|err| {
            log::debug!("to_rgb_color_object: {err}, using black");
            Rgb::BLACK.with_alpha(255)
        });
    }
    decimal_to_rgb(to_number(value))
}

/// Cast any block argument to an `[r, g, b]` triple for the renderer.
pub fn to_rgb_color_list(value: &Value) -> [u8; 3] {
    to_rgb_color_object(value).to_list()
}
