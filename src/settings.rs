use anyhow::{anyhow, Context};
use ripple_core::{AnimatorConfig, LayoutConfig, Rgb};

/// Dataset keys read from the container, in the order they are applied.
///
/// `gridSize` resets the marker target to the grid area, so `dotCount` comes
/// after it; `containerSize` rescales the radius, so `radiusFraction` follows.
pub const SETTING_KEYS: &[&str] = &[
    "gridSize",
    "dotCount",
    "containerSize",
    "dotSize",
    "radiusFraction",
    "delayPerPx",
    "dotDuration",
    "cyclesPerBlink",
    "colorBase",
    "colorCool",
    "colorWarning",
    "colorHighlight",
    "colorBackground",
];

/// Layout and animation configuration for one grid.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RippleSettings {
    pub layout: LayoutConfig,
    pub animator: AnimatorConfig,
}

/// `gridSize` -> `data-grid-size`
pub fn attribute_name(key: &str) -> String {
    let mut out = String::from("data-");
    for c in key.chars() {
        if c.is_ascii_uppercase() {
            out.push('-');
            out.push(c.to_ascii_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}

/// `data-grid-size` -> `gridSize`; `None` for attributes outside `data-*`.
pub fn dataset_key(attribute: &str) -> Option<String> {
    let rest = attribute.strip_prefix("data-")?;
    let mut out = String::with_capacity(rest.len());
    let mut upper = false;
    for c in rest.chars() {
        if c == '-' {
            upper = true;
        } else if upper {
            out.push(c.to_ascii_uppercase());
            upper = false;
        } else {
            out.push(c);
        }
    }
    Some(out)
}

fn parse<T>(key: &str, raw: &str) -> anyhow::Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    raw.trim()
        .parse::<T>()
        .with_context(|| format!("{}={:?}", attribute_name(key), raw))
}

impl RippleSettings {
    /// Apply `(key, value)` overrides on top of the defaults, then validate.
    pub fn from_pairs<'a>(
        pairs: impl IntoIterator<Item = (&'a str, &'a str)>,
    ) -> anyhow::Result<Self> {
        let mut pairs: Vec<(&str, &str)> = pairs.into_iter().collect();
        for (key, _) in &pairs {
            if !SETTING_KEYS.contains(key) {
                return Err(anyhow!("unknown setting {}", attribute_name(key)));
            }
        }
        pairs.sort_by_key(|(key, _)| SETTING_KEYS.iter().position(|k| k == key));

        let mut settings = Self::default();
        for (key, raw) in pairs {
            settings.apply(key, raw)?;
        }
        settings.validate()?;
        Ok(settings)
    }

    /// Like [`Self::from_pairs`], but from raw element attributes.
    ///
    /// Non-`data-*` attributes are ignored; every `data-*` attribute must be
    /// a known setting.
    pub fn from_attributes<'a>(
        attributes: impl IntoIterator<Item = (&'a str, &'a str)>,
    ) -> anyhow::Result<Self> {
        let pairs: Vec<(String, &str)> = attributes
            .into_iter()
            .filter_map(|(name, value)| dataset_key(name).map(|key| (key, value)))
            .collect();
        Self::from_pairs(pairs.iter().map(|(key, value)| (key.as_str(), *value)))
    }

    pub fn apply(&mut self, key: &str, raw: &str) -> anyhow::Result<()> {
        let layout = &mut self.layout;
        let anim = &mut self.animator;
        match key {
            "gridSize" => {
                let n: u32 = parse(key, raw)?;
                layout.grid_size = n;
                layout.marker_target = (n as usize).saturating_mul(n as usize);
            }
            "dotCount" => layout.marker_target = parse(key, raw)?,
            "containerSize" => {
                let size: f32 = parse(key, raw)?;
                let fraction = layout.max_radius / (layout.container_size / 2.0);
                layout.container_size = size;
                layout.set_radius_fraction(fraction);
            }
            "dotSize" => layout.marker_size = parse(key, raw)?,
            "radiusFraction" => layout.set_radius_fraction(parse(key, raw)?),
            "delayPerPx" => anim.delay_per_px = parse(key, raw)?,
            "dotDuration" => anim.marker_duration = parse(key, raw)?,
            "cyclesPerBlink" => anim.cycles_per_blink = parse(key, raw)?,
            "colorBase" => anim.palette.base = parse::<Rgb>(key, raw)?,
            "colorCool" => anim.palette.cool = parse::<Rgb>(key, raw)?,
            "colorWarning" => anim.palette.warning = parse::<Rgb>(key, raw)?,
            "colorHighlight" => anim.palette.highlight = parse::<Rgb>(key, raw)?,
            "colorBackground" => anim.palette.background = parse::<Rgb>(key, raw)?,
            _ => return Err(anyhow!("unknown setting {}", attribute_name(key))),
        }
        Ok(())
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        self.layout.validate().context("invalid grid layout")?;
        self.animator.validate().context("invalid ripple timing")?;
        Ok(())
    }
}
