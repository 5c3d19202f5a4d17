//! Concentric ring layout for the marker grid.
//!
//! Markers are emitted center first, then ring by ring with increasing radius,
//! each ring walked by increasing angle from the +x axis.

use std::f32::consts::TAU;

use glam::Vec2;

use crate::constants::{
    DEFAULT_CONTAINER_SIZE, DEFAULT_GRID_SIZE, DEFAULT_MARKER_SIZE, DEFAULT_RADIUS_FRACTION,
    MAX_MARKERS_PER_RING, MIN_MARKERS_PER_RING, RING_PACKING_FACTOR,
};
use crate::error::{require_positive, ConfigError, ConfigResult};

#[derive(Clone, Debug, PartialEq)]
pub struct LayoutConfig {
    /// Nominal grid dimension; ring count is derived from it.
    pub grid_size: u32,
    /// Upper bound on the number of markers emitted.
    pub marker_target: usize,
    /// Side length of the square canvas, in px.
    pub container_size: f32,
    /// Side length of one square marker, in px.
    pub marker_size: f32,
    /// Radius of the outermost ring, in px.
    pub max_radius: f32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self::with_grid_size(DEFAULT_GRID_SIZE)
    }
}

impl LayoutConfig {
    /// Default canvas and marker sizes with a target of `grid_size²` markers.
    pub fn with_grid_size(grid_size: u32) -> Self {
        let marker_target = (grid_size as usize).saturating_mul(grid_size as usize);
        Self {
            grid_size,
            marker_target,
            container_size: DEFAULT_CONTAINER_SIZE,
            marker_size: DEFAULT_MARKER_SIZE,
            max_radius: DEFAULT_CONTAINER_SIZE / 2.0 * DEFAULT_RADIUS_FRACTION,
        }
    }

    /// Set the outer radius as a fraction of half the container size.
    pub fn set_radius_fraction(&mut self, fraction: f32) {
        self.max_radius = self.container_size / 2.0 * fraction;
    }

    pub fn validate(&self) -> ConfigResult<()> {
        if self.grid_size == 0 {
            return Err(ConfigError::ZeroGridSize);
        }
        if self.marker_target == 0 {
            return Err(ConfigError::ZeroMarkerTarget);
        }
        require_positive("container size", self.container_size)?;
        require_positive("marker size", self.marker_size)?;
        require_positive("max radius", self.max_radius)?;
        let half = self.container_size / 2.0;
        if self.max_radius > half {
            return Err(ConfigError::RadiusOutsideContainer {
                max_radius: self.max_radius,
                half,
            });
        }
        let outer = self.ring_count() - 1;
        if outer > 0 {
            let fit = ring_fit(self.ring_radius(outer), self.marker_size);
            // also catches an infinite fit from a subnormal marker size
            if !(fit <= MAX_MARKERS_PER_RING as f32) {
                return Err(ConfigError::TooDense {
                    marker_size: self.marker_size,
                    max_radius: self.max_radius,
                });
            }
        }
        Ok(())
    }

    /// Number of rings including the center (which counts as ring 0).
    #[inline]
    pub fn ring_count(&self) -> usize {
        (self.grid_size / 2) as usize + 1
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::splat(self.container_size / 2.0)
    }

    /// Radius of `ring`; ring 0 is the center point.
    pub fn ring_radius(&self, ring: usize) -> f32 {
        let outer = self.ring_count() - 1;
        if ring == 0 || outer == 0 {
            return 0.0;
        }
        (ring as f32 / outer as f32) * self.max_radius
    }

    /// Natural capacity of `ring` before the marker target is applied.
    pub fn ring_capacity(&self, ring: usize) -> usize {
        if ring == 0 {
            1
        } else {
            markers_on_ring(self.ring_radius(ring), self.marker_size)
        }
    }

    /// Total markers the rings can hold.
    pub fn capacity(&self) -> usize {
        (0..self.ring_count())
            .map(|r| self.ring_capacity(r))
            .fold(0, usize::saturating_add)
    }

    /// Markers actually emitted: the target clamped to the ring capacity.
    pub fn effective_marker_count(&self) -> usize {
        self.marker_target.min(self.capacity())
    }
}

/// Number of markers that fit on a ring of `radius`, spaced by the packing
/// factor; never fewer than eight and always even.
///
/// Saturates at the largest even `usize` instead of overflowing.
pub fn markers_on_ring(radius: f32, marker_size: f32) -> usize {
    // float-to-int `as` saturates and maps NaN to zero
    let n = (ring_fit(radius, marker_size) as usize).max(MIN_MARKERS_PER_RING);
    if n % 2 != 0 {
        n.checked_add(1).unwrap_or(n - 1)
    } else {
        n
    }
}

#[inline]
fn ring_fit(radius: f32, marker_size: f32) -> f32 {
    (TAU * radius / (marker_size * RING_PACKING_FACTOR)).floor()
}

#[derive(Clone, Debug, PartialEq)]
pub struct Marker {
    /// Center of the marker in canvas px.
    pub position: Vec2,
    /// Euclidean distance from the canvas center; exactly zero for the center marker.
    pub distance: f32,
    pub ring: usize,
}

impl Marker {
    /// Top-left corner of the marker's element, centering it on `position`.
    #[inline]
    pub fn top_left(&self, marker_size: f32) -> Vec2 {
        self.position - Vec2::splat(marker_size / 2.0)
    }
}

/// Lay out markers in concentric rings, stopping at the marker target.
///
/// A ring that would overrun the target is cut short, keeping its first
/// markers in angular order. A target above [`LayoutConfig::capacity`] yields
/// exactly the capacity.
pub fn generate_layout(config: &LayoutConfig) -> ConfigResult<Vec<Marker>> {
    config.validate()?;

    let center = config.center();
    let target = config.marker_target;
    let ring_count = config.ring_count();
    let mut markers = Vec::with_capacity(config.effective_marker_count());

    markers.push(Marker {
        position: center,
        distance: 0.0,
        ring: 0,
    });

    'rings: for ring in 1..ring_count {
        let radius = config.ring_radius(ring);
        let count = config.ring_capacity(ring);
        for i in 0..count {
            if markers.len() >= target {
                log::debug!(
                    "[layout] target {} reached on ring {} after {}/{} markers",
                    target,
                    ring,
                    i,
                    count
                );
                break 'rings;
            }
            let angle = (i as f32 / count as f32) * TAU;
            let position = center + Vec2::new(angle.cos(), angle.sin()) * radius;
            markers.push(Marker {
                position,
                distance: position.distance(center),
                ring,
            });
        }
    }

    if target > markers.len() {
        log::debug!(
            "[layout] target {} exceeds ring capacity, emitted {}",
            target,
            markers.len()
        );
    }
    log::info!(
        "[layout] rings={} markers={} max_radius={:.1}",
        ring_count,
        markers.len(),
        config.max_radius
    );
    Ok(markers)
}
