use anyhow::anyhow;
use ripple_core::{LayoutConfig, Marker, MarkerStyle};
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

use crate::constants::{CONTAINER_ID, MARKER_CLASS};
use crate::css::{css_update, px};
use crate::settings::RippleSettings;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

#[inline]
fn js_err(e: JsValue) -> anyhow::Error {
    anyhow!("{:?}", e)
}

pub fn grid_container(document: &web::Document) -> anyhow::Result<web::HtmlElement> {
    document
        .get_element_by_id(CONTAINER_ID)
        .ok_or_else(|| anyhow!("missing #{}", CONTAINER_ID))?
        .dyn_into::<web::HtmlElement>()
        .map_err(|e| anyhow!("#{} is not an HtmlElement: {:?}", CONTAINER_ID, e))
}

/// Collect the container's `data-*` overrides. Unknown `data-*` names are
/// rejected rather than skipped.
pub fn read_settings(container: &web::HtmlElement) -> anyhow::Result<RippleSettings> {
    let attrs = container.attributes();
    let found: Vec<(String, String)> = (0..attrs.length())
        .filter_map(|i| attrs.item(i))
        .filter(|attr| attr.name().starts_with("data-"))
        .map(|attr| (attr.name(), attr.value()))
        .collect();
    if !found.is_empty() {
        log::info!("[settings] {} override(s) from #{}", found.len(), CONTAINER_ID);
    }
    RippleSettings::from_attributes(found.iter().map(|(k, v)| (k.as_str(), v.as_str())))
}

/// Size the container and append one positioned element per marker.
pub fn mount_markers(
    document: &web::Document,
    container: &web::HtmlElement,
    markers: &[Marker],
    layout: &LayoutConfig,
) -> anyhow::Result<Vec<web::HtmlElement>> {
    let side = px(layout.container_size);
    let cs = container.style();
    cs.set_property("width", &side).map_err(js_err)?;
    cs.set_property("height", &side).map_err(js_err)?;

    let size = px(layout.marker_size);
    let mut elements = Vec::with_capacity(markers.len());
    for marker in markers {
        let el = document
            .create_element("div")
            .map_err(js_err)?
            .dyn_into::<web::HtmlElement>()
            .map_err(|e| anyhow!("created element is not an HtmlElement: {:?}", e))?;
        el.class_list().add_1(MARKER_CLASS).map_err(js_err)?;
        let top_left = marker.top_left(layout.marker_size);
        let style = el.style();
        style.set_property("left", &px(top_left.x)).map_err(js_err)?;
        style.set_property("top", &px(top_left.y)).map_err(js_err)?;
        style.set_property("width", &size).map_err(js_err)?;
        style.set_property("height", &size).map_err(js_err)?;
        container.append_child(&el).map_err(js_err)?;
        elements.push(el);
    }
    Ok(elements)
}

/// Writes marker styles to their elements, skipping unchanged properties.
pub struct StyleWriter {
    elements: Vec<web::HtmlElement>,
    written: Vec<Option<MarkerStyle>>,
}

impl StyleWriter {
    pub fn new(elements: Vec<web::HtmlElement>) -> Self {
        let written = vec![None; elements.len()];
        Self { elements, written }
    }

    /// Returns the number of elements touched.
    pub fn apply(&mut self, styles: &[MarkerStyle]) -> usize {
        let mut touched = 0;
        for ((el, last), style) in self
            .elements
            .iter()
            .zip(self.written.iter_mut())
            .zip(styles)
        {
            let update = css_update(last.as_ref(), style);
            if update.is_empty() {
                continue;
            }
            let css = el.style();
            if let Some(v) = &update.opacity {
                _ = css.set_property("opacity", v);
            }
            if let Some(v) = &update.transform {
                _ = css.set_property("transform", v);
            }
            if let Some(v) = &update.background {
                _ = css.set_property("background-color", v);
            }
            *last = Some(*style);
            touched += 1;
        }
        touched
    }
}
