use std::env;
use std::str::FromStr;

use anyhow::{bail, Context};
use ripple_core::{generate_layout, AnimatorConfig, LayoutConfig, RippleAnimator};

const DEFAULT_SECONDS: f32 = 20.0;
const DEFAULT_FPS: u32 = 60;

fn parse_arg<T>(arg: Option<String>, default: T, name: &str) -> anyhow::Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match arg {
        Some(raw) => raw
            .parse::<T>()
            .with_context(|| format!("invalid {name}: {raw:?}")),
        None => Ok(default),
    }
}

// Usage: ripple-native [seconds] [fps]
fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut args = env::args().skip(1);
    let seconds: f32 = parse_arg(args.next(), DEFAULT_SECONDS, "seconds")?;
    let fps: u32 = parse_arg(args.next(), DEFAULT_FPS, "fps")?;
    if fps == 0 || !seconds.is_finite() || seconds < 0.0 {
        bail!("seconds must be >= 0 and fps >= 1 (got {seconds}, {fps})");
    }

    let layout = LayoutConfig::default();
    let markers = generate_layout(&layout)?;
    for ring in 0..layout.ring_count() {
        let count = markers.iter().filter(|m| m.ring == ring).count();
        log::info!(
            "ring {:>2}: radius {:>6.1}px markers {:>3}",
            ring,
            layout.ring_radius(ring),
            count
        );
    }

    let mut animator = RippleAnimator::new(markers, AnimatorConfig::default())?;
    let d = animator.durations();
    log::info!(
        "phases: outward {:.3}s inward {:.3}s red {:.3}s settle {:.3}s (cycle {:.3}s)",
        d.outward,
        d.inward,
        d.red,
        d.settle,
        d.cycle_total()
    );

    let dt = 1.0 / fps as f32;
    let frames = (seconds * fps as f32).ceil() as u64;
    let mut elapsed = 0.0_f64;
    let mut last = animator.phase();
    for _ in 0..frames {
        let phase = animator.advance(dt);
        elapsed += f64::from(dt);
        if phase != last {
            log::info!(
                "{:>8.3}s {:?} -> {:?} (cycle_count={})",
                elapsed,
                last,
                phase,
                animator.cycle_count()
            );
            last = phase;
        }
    }

    log::info!(
        "simulated {:.1}s at {} fps: {} cycles, {} blinks",
        elapsed,
        fps,
        animator.completed_cycles(),
        animator.completed_blinks()
    );
    Ok(())
}
