// Host-side tests for the CSS diffing used when writing marker styles.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod css {
    include!("../src/css.rs");
}

use css::*;
use ripple_core::{MarkerStyle, Rgb, BASE_GREEN, WARNING_RED};

#[test]
fn first_write_sets_every_property() {
    let style = MarkerStyle::hidden(BASE_GREEN);
    let update = css_update(None, &style);
    assert_eq!(update.opacity.as_deref(), Some("0.000"));
    assert_eq!(update.transform.as_deref(), Some("scale(0.000)"));
    assert_eq!(update.background.as_deref(), Some("rgb(79, 225, 66)"));
}

#[test]
fn unchanged_style_produces_no_update() {
    let style = MarkerStyle {
        opacity: 1.0,
        scale: 1.1,
        color: WARNING_RED,
    };
    assert!(css_update(Some(&style), &style).is_empty());
}

#[test]
fn sub_precision_changes_are_skipped() {
    let a = MarkerStyle {
        opacity: 0.5,
        scale: 1.0,
        color: BASE_GREEN,
    };
    let b = MarkerStyle {
        opacity: 0.50001,
        scale: 1.00002,
        color: BASE_GREEN,
    };
    assert!(css_update(Some(&a), &b).is_empty());
}

#[test]
fn only_changed_properties_are_written() {
    let a = MarkerStyle {
        opacity: 1.0,
        scale: 1.0,
        color: BASE_GREEN,
    };
    let b = MarkerStyle {
        color: Rgb::new(0, 0, 0),
        ..a
    };
    let update = css_update(Some(&a), &b);
    assert_eq!(update.opacity, None);
    assert_eq!(update.transform, None);
    assert_eq!(update.background.as_deref(), Some("rgb(0, 0, 0)"));
}

#[test]
fn values_are_clamped_for_css() {
    let style = MarkerStyle {
        opacity: 1.2,
        scale: -0.1,
        color: BASE_GREEN,
    };
    assert_eq!(opacity_value(&style), "1.000");
    assert_eq!(transform_value(&style), "scale(0.000)");
    assert_eq!(px(193.999), "194.00px");
}
