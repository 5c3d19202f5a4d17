use crate::color::Rgb;

// Shared layout/timing constants used by both web and native frontends.

// Layout
pub const DEFAULT_GRID_SIZE: u32 = 17;
pub const DEFAULT_CONTAINER_SIZE: f32 = 400.0; // px, square canvas
pub const DEFAULT_MARKER_SIZE: f32 = 12.0; // px, square marker
pub const DEFAULT_RADIUS_FRACTION: f32 = 0.9; // of half the container
pub const RING_PACKING_FACTOR: f32 = 1.5; // spacing per marker, in marker diameters
pub const MIN_MARKERS_PER_RING: usize = 8;
pub const MAX_MARKERS_PER_RING: usize = 100_000; // denser rings are rejected as misconfigured

// Ripple timing (seconds)
pub const DELAY_PER_PX: f32 = 0.005; // start offset per px of distance from center
pub const MARKER_TWEEN_DURATION: f32 = 0.2;
pub const SETTLE_DELAY: f32 = 0.5; // idle gap after the red ripple
pub const CYCLES_PER_BLINK: u32 = 3;

// Outward ripple alternates marker scale by rank
pub const OUTWARD_SCALES: [f32; 2] = [1.1, 0.75];

// Blink sequence
pub const BLINK_REPEATS: usize = 3;
pub const BLINK_ON_DURATION: f32 = 0.4;
pub const BLINK_OFF_DURATION: f32 = 0.3;
pub const BLINK_RECOVER_DURATION: f32 = 0.4;

// Palette
pub const BASE_GREEN: Rgb = Rgb::new(0x4f, 0xe1, 0x42);
pub const COOL_BLUE: Rgb = Rgb::new(0x31, 0x82, 0xce);
pub const WARNING_RED: Rgb = Rgb::new(0xe5, 0x3e, 0x3e);
pub const HIGHLIGHT_YELLOW: Rgb = Rgb::new(0xf6, 0xe0, 0x5e);
pub const BACKGROUND_DARK: Rgb = Rgb::new(0x1a, 0x20, 0x2c); // matches the page background

// Float tolerance used when comparing ring distances
pub const DISTANCE_EPSILON: f32 = 1e-3;
