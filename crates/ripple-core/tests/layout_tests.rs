use ripple_core::*;

fn ring_counts(markers: &[Marker], rings: usize) -> Vec<usize> {
    let mut counts = vec![0; rings];
    for m in markers {
        counts[m.ring] += 1;
    }
    counts
}

#[test]
fn default_grid_has_nine_rings_and_285_markers() {
    let config = LayoutConfig::default();
    assert_eq!(config.grid_size, 17);
    assert_eq!(config.marker_target, 289);
    assert_eq!(config.ring_count(), 9);

    let markers = generate_layout(&config).unwrap();
    assert_eq!(markers.len(), 285);
    assert_eq!(config.capacity(), 285);
    assert_eq!(config.effective_marker_count(), 285);
    assert!(markers.len() <= config.marker_target);
    assert_eq!(
        ring_counts(&markers, 9),
        vec![1, 8, 16, 24, 32, 40, 48, 54, 62]
    );
}

#[test]
fn first_marker_is_the_exact_center() {
    let config = LayoutConfig::default();
    let markers = generate_layout(&config).unwrap();
    assert_eq!(markers[0].distance, 0.0);
    assert_eq!(markers[0].ring, 0);
    assert_eq!(markers[0].position, config.center());
}

#[test]
fn ring_markers_share_a_distance_and_radii_increase() {
    let config = LayoutConfig::default();
    let markers = generate_layout(&config).unwrap();
    let mut prev_radius = 0.0;
    for ring in 1..config.ring_count() {
        let radius = config.ring_radius(ring);
        assert!(radius > prev_radius, "ring {ring} radius did not increase");
        prev_radius = radius;
        for m in markers.iter().filter(|m| m.ring == ring) {
            assert!(
                (m.distance - radius).abs() < DISTANCE_EPSILON,
                "ring {ring}: distance {} vs radius {radius}",
                m.distance
            );
        }
    }
    assert!((config.ring_radius(config.ring_count() - 1) - config.max_radius).abs() < 1e-4);
}

#[test]
fn non_center_distances_are_positive_and_bounded() {
    let config = LayoutConfig::default();
    for m in generate_layout(&config).unwrap().iter().skip(1) {
        assert!(m.distance > 0.0);
        assert!(m.distance <= config.max_radius + DISTANCE_EPSILON);
    }
}

#[test]
fn ring_capacity_is_even_and_at_least_eight() {
    for marker_size in [2.0_f32, 5.0, 12.0, 40.0, 150.0] {
        for radius in [0.5_f32, 10.0, 33.3, 90.0, 180.0, 500.0] {
            let n = markers_on_ring(radius, marker_size);
            assert!(n >= MIN_MARKERS_PER_RING, "{n} at r={radius} size={marker_size}");
            assert_eq!(n % 2, 0, "{n} at r={radius} size={marker_size}");
        }
    }
}

#[test]
fn odd_ring_capacity_is_rounded_up() {
    // 2π·r / 18 = 23.56 for r = 67.5, floored to 23, bumped to 24
    assert_eq!(markers_on_ring(67.5, 12.0), 24);
    // tiny rings clamp to the minimum
    assert_eq!(markers_on_ring(1.0, 12.0), 8);
}

#[test]
fn small_target_truncates_the_first_ring() {
    let mut config = LayoutConfig::default();
    config.marker_target = 5;
    let markers = generate_layout(&config).unwrap();
    assert_eq!(markers.len(), 5);
    assert_eq!(config.effective_marker_count(), 5);
    assert!(markers[1..].iter().all(|m| m.ring == 1));

    // the kept markers are the first angular positions of the full ring
    let full = generate_layout(&LayoutConfig::default()).unwrap();
    assert_eq!(&markers[..], &full[..5]);
}

#[test]
fn target_of_one_is_just_the_center() {
    let mut config = LayoutConfig::default();
    config.marker_target = 1;
    let markers = generate_layout(&config).unwrap();
    assert_eq!(markers.len(), 1);
    assert_eq!(markers[0].distance, 0.0);
}

#[test]
fn large_target_is_clamped_to_capacity() {
    let mut config = LayoutConfig::with_grid_size(5);
    config.marker_target = 10_000;
    let markers = generate_layout(&config).unwrap();
    assert_eq!(config.ring_count(), 3);
    assert_eq!(markers.len(), config.capacity());
    assert_eq!(config.effective_marker_count(), config.capacity());
}

#[test]
fn grid_of_one_has_only_the_center_ring() {
    let config = LayoutConfig::with_grid_size(1);
    assert_eq!(config.ring_count(), 1);
    assert_eq!(config.ring_radius(1), 0.0);
    let markers = generate_layout(&config).unwrap();
    assert_eq!(markers.len(), 1);
}

#[test]
fn invalid_configs_fail_fast() {
    assert_eq!(
        generate_layout(&LayoutConfig::with_grid_size(0)),
        Err(ConfigError::ZeroGridSize)
    );

    let mut config = LayoutConfig::default();
    config.marker_target = 0;
    assert_eq!(generate_layout(&config), Err(ConfigError::ZeroMarkerTarget));

    let mut config = LayoutConfig::default();
    config.marker_size = -3.0;
    assert!(matches!(
        generate_layout(&config),
        Err(ConfigError::NonPositive { name: "marker size", .. })
    ));

    let mut config = LayoutConfig::default();
    config.container_size = f32::INFINITY;
    assert!(matches!(
        config.validate(),
        Err(ConfigError::NonPositive { name: "container size", .. })
    ));

    let mut config = LayoutConfig::default();
    config.set_radius_fraction(1.2);
    assert!(matches!(
        config.validate(),
        Err(ConfigError::RadiusOutsideContainer { .. })
    ));
}

#[test]
fn top_left_centers_the_element_on_the_marker() {
    let config = LayoutConfig::default();
    let markers = generate_layout(&config).unwrap();
    let tl = markers[0].top_left(config.marker_size);
    assert_eq!(tl, glam::Vec2::new(194.0, 194.0));
    // first ring marker sits on the +x axis
    let first_ring = &markers[1];
    assert!((first_ring.position.y - 200.0).abs() < 1e-4);
    assert!((first_ring.position.x - 222.5).abs() < 1e-4);
}

#[test]
fn ring_capacity_saturates_instead_of_overflowing() {
    let n = markers_on_ring(180.0, 1e-30);
    assert_eq!(n % 2, 0);
    assert_eq!(n, usize::MAX - 1);
    assert_eq!(markers_on_ring(180.0, f32::MIN_POSITIVE / 1e6), usize::MAX - 1);

    let mut config = LayoutConfig::default();
    config.marker_size = 1e-30;
    assert_eq!(config.capacity(), usize::MAX);
    assert_eq!(config.effective_marker_count(), config.marker_target);
}

#[test]
fn overly_dense_rings_fail_validation() {
    let mut config = LayoutConfig::default();
    config.marker_size = 1e-30;
    assert!(matches!(
        generate_layout(&config),
        Err(ConfigError::TooDense { .. })
    ));

    // just inside the limit still lays out, capped at the target
    config.marker_size = 0.01;
    assert!(config.validate().is_ok());
    assert_eq!(generate_layout(&config).unwrap().len(), config.marker_target);
}
