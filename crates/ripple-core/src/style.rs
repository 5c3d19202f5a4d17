use crate::color::Rgb;
use crate::constants::BASE_GREEN;

/// Mutable presentation state of one marker.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MarkerStyle {
    pub opacity: f32,
    pub scale: f32,
    pub color: Rgb,
}

impl MarkerStyle {
    /// Invisible, collapsed, in the given base color.
    pub const fn hidden(color: Rgb) -> Self {
        Self {
            opacity: 0.0,
            scale: 0.0,
            color,
        }
    }
}

impl Default for MarkerStyle {
    fn default() -> Self {
        Self::hidden(BASE_GREEN)
    }
}

/// Target values for a tween; `None` leaves the property untouched.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct StyleChange {
    pub opacity: Option<f32>,
    pub scale: Option<f32>,
    pub color: Option<Rgb>,
}

impl StyleChange {
    pub fn opacity(mut self, v: f32) -> Self {
        self.opacity = Some(v);
        self
    }

    pub fn scale(mut self, v: f32) -> Self {
        self.scale = Some(v);
        self
    }

    pub fn color(mut self, c: Rgb) -> Self {
        self.color = Some(c);
        self
    }

    /// Interpolate the targeted properties from `from` toward this change at
    /// eased progress `t`, writing them into `style`. Untargeted properties are
    /// left as they are.
    pub fn blend_into(&self, from: &MarkerStyle, t: f32, style: &mut MarkerStyle) {
        let lerp = |a: f32, b: f32| if t >= 1.0 { b } else { a + (b - a) * t };
        if let Some(v) = self.opacity {
            style.opacity = lerp(from.opacity, v);
        }
        if let Some(v) = self.scale {
            style.scale = lerp(from.scale, v);
        }
        if let Some(c) = self.color {
            style.color = Rgb::lerp(from.color, c, t);
        }
    }
}
