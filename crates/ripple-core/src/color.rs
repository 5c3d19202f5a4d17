use std::fmt;
use std::str::FromStr;

use crate::error::ConfigError;

/// 8-bit sRGB color as written to a marker's `background-color`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#rrggbb` or the `#rgb` shorthand. The leading `#` is optional.
    pub fn from_hex(s: &str) -> Result<Self, ConfigError> {
        let invalid = || ConfigError::InvalidColor(s.to_string());
        let hex = s.trim().trim_start_matches('#');
        if !hex.is_ascii() {
            return Err(invalid());
        }
        let channel = |h: &str| u8::from_str_radix(h, 16).map_err(|_| invalid());
        match hex.len() {
            6 => Ok(Self::new(
                channel(&hex[0..2])?,
                channel(&hex[2..4])?,
                channel(&hex[4..6])?,
            )),
            3 => {
                let r = channel(&hex[0..1])?;
                let g = channel(&hex[1..2])?;
                let b = channel(&hex[2..3])?;
                Ok(Self::new(r * 17, g * 17, b * 17))
            }
            _ => Err(invalid()),
        }
    }

    /// Channel-wise interpolation, rounded to the nearest integer.
    pub fn lerp(a: Self, b: Self, t: f32) -> Self {
        fn lerp_u8(a: u8, b: u8, t: f32) -> u8 {
            let a = f32::from(a);
            let b = f32::from(b);
            (a + (b - a) * t).round().clamp(0.0, 255.0) as u8
        }

        Self {
            r: lerp_u8(a.r, b.r, t),
            g: lerp_u8(a.g, b.g, t),
            b: lerp_u8(a.b, b.b, t),
        }
    }

    /// CSS functional notation, e.g. `rgb(79, 225, 66)`.
    pub fn to_css(self) -> String {
        format!("rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for Rgb {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_long_and_short_hex() {
        assert_eq!(Rgb::from_hex("#4fe142").unwrap(), Rgb::new(0x4f, 0xe1, 0x42));
        assert_eq!(Rgb::from_hex("3182CE").unwrap(), Rgb::new(0x31, 0x82, 0xce));
        assert_eq!(Rgb::from_hex("#fa0").unwrap(), Rgb::new(0xff, 0xaa, 0x00));
    }

    #[test]
    fn rejects_malformed_hex() {
        for bad in ["", "#", "#12345", "#gg0000", "#1234567", "#ééé"] {
            assert!(
                matches!(Rgb::from_hex(bad), Err(ConfigError::InvalidColor(_))),
                "accepted {bad:?}"
            );
        }
    }

    #[test]
    fn lerp_hits_endpoints_and_midpoint() {
        let black = Rgb::new(0, 0, 0);
        let white = Rgb::new(255, 255, 255);
        assert_eq!(Rgb::lerp(black, white, 0.0), black);
        assert_eq!(Rgb::lerp(black, white, 1.0), white);
        assert_eq!(Rgb::lerp(black, white, 0.5), Rgb::new(128, 128, 128));
    }

    #[test]
    fn display_and_css_forms() {
        let c = Rgb::new(0x1a, 0x20, 0x2c);
        assert_eq!(c.to_string(), "#1a202c");
        assert_eq!(c.to_css(), "rgb(26, 32, 44)");
        assert_eq!(c.to_string().parse::<Rgb>().unwrap(), c);
    }
}
