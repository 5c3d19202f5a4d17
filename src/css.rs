use ripple_core::MarkerStyle;

use crate::constants::STYLE_DECIMALS;

/// Inline style values that changed since the last write.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CssUpdate {
    pub opacity: Option<String>,
    pub transform: Option<String>,
    pub background: Option<String>,
}

impl CssUpdate {
    pub fn is_empty(&self) -> bool {
        self.opacity.is_none() && self.transform.is_none() && self.background.is_none()
    }
}

#[inline]
pub fn px(v: f32) -> String {
    format!("{:.2}px", v)
}

#[inline]
pub fn opacity_value(style: &MarkerStyle) -> String {
    format!("{:.*}", STYLE_DECIMALS, style.opacity.clamp(0.0, 1.0))
}

#[inline]
pub fn transform_value(style: &MarkerStyle) -> String {
    format!("scale({:.*})", STYLE_DECIMALS, style.scale.max(0.0))
}

/// Diff two styles by their rendered CSS; sub-precision changes produce no write.
pub fn css_update(prev: Option<&MarkerStyle>, next: &MarkerStyle) -> CssUpdate {
    let changed = |render: fn(&MarkerStyle) -> String| {
        let value = render(next);
        match prev {
            Some(p) if render(p) == value => None,
            _ => Some(value),
        }
    };
    CssUpdate {
        opacity: changed(opacity_value),
        transform: changed(transform_value),
        background: changed(|s| s.color.to_css()),
    }
}
