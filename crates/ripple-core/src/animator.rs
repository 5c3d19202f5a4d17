//! Ripple phase state machine.
//!
//! One [`RippleAnimator`] owns the markers, their styles, the cycle counter,
//! and the timeline currently playing. Each call to [`RippleAnimator::advance`]
//! moves the playhead; when a sequence finishes, the transition table in
//! [`next_sequence`] picks what plays next and a fresh timeline is built.
//!
//! A ripple sequence is Reset, Outward, Inward, Red, then a short Settle gap.
//! Every `cycles_per_blink` ripples a Blink sequence plays instead.

use crate::color::Rgb;
use crate::constants::*;
use crate::ease::Ease;
use crate::error::{require_non_negative, require_positive, ConfigError, ConfigResult};
use crate::layout::Marker;
use crate::style::{MarkerStyle, StyleChange};
use crate::timeline::{all_targets, one_target, Timeline};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Palette {
    pub base: Rgb,
    pub cool: Rgb,
    pub warning: Rgb,
    pub highlight: Rgb,
    pub background: Rgb,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            base: BASE_GREEN,
            cool: COOL_BLUE,
            warning: WARNING_RED,
            highlight: HIGHLIGHT_YELLOW,
            background: BACKGROUND_DARK,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BlinkTiming {
    pub repeats: usize,
    pub on: f32,
    pub off: f32,
    pub recover: f32,
}

impl Default for BlinkTiming {
    fn default() -> Self {
        Self {
            repeats: BLINK_REPEATS,
            on: BLINK_ON_DURATION,
            off: BLINK_OFF_DURATION,
            recover: BLINK_RECOVER_DURATION,
        }
    }
}

impl BlinkTiming {
    pub fn total(&self) -> f32 {
        self.repeats as f32 * (self.on + self.off) + self.recover
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct AnimatorConfig {
    /// Start offset per px of distance from the center, in seconds.
    pub delay_per_px: f32,
    /// Duration of each per-marker tween.
    pub marker_duration: f32,
    pub settle_delay: f32,
    pub cycles_per_blink: u32,
    pub outward_scales: [f32; 2],
    pub palette: Palette,
    pub blink: BlinkTiming,
}

impl Default for AnimatorConfig {
    fn default() -> Self {
        Self {
            delay_per_px: DELAY_PER_PX,
            marker_duration: MARKER_TWEEN_DURATION,
            settle_delay: SETTLE_DELAY,
            cycles_per_blink: CYCLES_PER_BLINK,
            outward_scales: OUTWARD_SCALES,
            palette: Palette::default(),
            blink: BlinkTiming::default(),
        }
    }
}

impl AnimatorConfig {
    pub fn validate(&self) -> ConfigResult<()> {
        require_non_negative("delay per px", self.delay_per_px)?;
        require_positive("marker duration", self.marker_duration)?;
        require_non_negative("settle delay", self.settle_delay)?;
        if self.cycles_per_blink == 0 {
            return Err(ConfigError::ZeroCount("cycles per blink"));
        }
        for s in self.outward_scales {
            require_non_negative("outward scale", s)?;
        }
        if self.blink.repeats == 0 {
            return Err(ConfigError::ZeroCount("blink repeats"));
        }
        require_positive("blink on duration", self.blink.on)?;
        require_positive("blink off duration", self.blink.off)?;
        require_positive("blink recover duration", self.blink.recover)?;
        Ok(())
    }
}

/// Lengths of the ripple phases, all derived from the farthest marker.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PhaseDurations {
    pub outward: f32,
    pub inward: f32,
    pub red: f32,
    pub settle: f32,
}

impl PhaseDurations {
    pub fn compute(max_distance: f32, config: &AnimatorConfig) -> Self {
        let sweep = max_distance * config.delay_per_px + config.marker_duration;
        Self {
            outward: sweep,
            inward: sweep,
            red: sweep,
            settle: config.settle_delay,
        }
    }

    #[inline]
    pub fn inward_start(&self) -> f32 {
        self.outward
    }

    #[inline]
    pub fn red_start(&self) -> f32 {
        self.outward + self.inward
    }

    #[inline]
    pub fn settle_start(&self) -> f32 {
        self.red_start() + self.red
    }

    /// Time from Reset until the cycle-completion point.
    #[inline]
    pub fn cycle_total(&self) -> f32 {
        self.settle_start() + self.settle
    }
}

/// Marker indices in ripple order, sorted once.
///
/// Both sorts are stable, so markers at equal distance keep creation order in
/// either direction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RippleOrder {
    pub outward: Vec<usize>,
    pub inward: Vec<usize>,
}

impl RippleOrder {
    pub fn from_markers(markers: &[Marker]) -> Self {
        let mut outward: Vec<usize> = (0..markers.len()).collect();
        outward.sort_by(|&a, &b| markers[a].distance.total_cmp(&markers[b].distance));
        let mut inward: Vec<usize> = (0..markers.len()).collect();
        inward.sort_by(|&a, &b| markers[b].distance.total_cmp(&markers[a].distance));
        Self { outward, inward }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Phase {
    Reset,
    Outward,
    Inward,
    Red,
    Settle,
    Blink,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Sequence {
    Ripple,
    Blink,
}

/// Transition table applied when `current` finishes.
///
/// Returns the next sequence and the updated cycle counter.
pub fn next_sequence(current: Sequence, cycle_count: u32, cycles_per_blink: u32) -> (Sequence, u32) {
    match current {
        Sequence::Ripple => {
            let count = cycle_count + 1;
            if count >= cycles_per_blink {
                (Sequence::Blink, 0)
            } else {
                (Sequence::Ripple, count)
            }
        }
        Sequence::Blink => (Sequence::Ripple, cycle_count),
    }
}

pub struct RippleAnimator {
    markers: Vec<Marker>,
    styles: Vec<MarkerStyle>,
    config: AnimatorConfig,
    order: RippleOrder,
    durations: PhaseDurations,
    sequence: Sequence,
    timeline: Timeline,
    cycle_count: u32,
    completed_cycles: u64,
    completed_blinks: u64,
}

impl RippleAnimator {
    /// Build the animator and apply the initial Reset.
    pub fn new(markers: Vec<Marker>, config: AnimatorConfig) -> ConfigResult<Self> {
        config.validate()?;
        if markers.is_empty() {
            return Err(ConfigError::NoMarkers);
        }
        let order = RippleOrder::from_markers(&markers);
        let max_distance = order
            .outward
            .last()
            .map(|&i| markers[i].distance)
            .unwrap_or(0.0);
        let durations = PhaseDurations::compute(max_distance, &config);
        let styles = vec![MarkerStyle::hidden(config.palette.base); markers.len()];
        let mut animator = Self {
            markers,
            styles,
            config,
            order,
            durations,
            sequence: Sequence::Ripple,
            timeline: Timeline::new(),
            cycle_count: 0,
            completed_cycles: 0,
            completed_blinks: 0,
        };
        animator.timeline = animator.ripple_timeline();
        animator.timeline.advance(0.0, &mut animator.styles);
        log::debug!(
            "[ripple] markers={} max_distance={:.1} cycle={:.3}s blink={:.3}s",
            animator.markers.len(),
            max_distance,
            durations.cycle_total(),
            animator.config.blink.total()
        );
        Ok(animator)
    }

    /// Advance by `dt` seconds, chaining into following sequences as needed.
    pub fn advance(&mut self, dt: f32) -> Phase {
        let mut remaining = if dt.is_finite() { dt.max(0.0) } else { 0.0 };
        remaining = self.skip_whole_loops(remaining);
        loop {
            remaining = self.timeline.advance(remaining, &mut self.styles);
            if !self.timeline.is_complete() {
                break;
            }
            self.finish_sequence();
        }
        self.phase()
    }

    /// Length of one full loop: `cycles_per_blink` ripples plus one blink.
    pub fn loop_period(&self) -> f32 {
        self.config.cycles_per_blink as f32 * self.durations.cycle_total()
            + self.config.blink.total()
    }

    /// Drop whole loops from `dt`. A full loop returns the animator to the
    /// same sequence, counter, and playhead, so only the counters move.
    fn skip_whole_loops(&mut self, dt: f32) -> f32 {
        let period = f64::from(self.loop_period());
        let dt = f64::from(dt);
        if dt < period {
            return dt as f32;
        }
        let loops = (dt / period).floor();
        let whole = loops as u64;
        let cycles = whole.saturating_mul(u64::from(self.config.cycles_per_blink));
        self.completed_cycles = self.completed_cycles.saturating_add(cycles);
        self.completed_blinks = self.completed_blinks.saturating_add(whole);
        log::debug!("[ripple] skipped {} whole loops", loops);
        ((dt - loops * period) as f32).clamp(0.0, period as f32)
    }

    pub fn phase(&self) -> Phase {
        match self.sequence {
            Sequence::Blink => Phase::Blink,
            Sequence::Ripple => {
                let t = self.timeline.time();
                let d = &self.durations;
                if t <= 0.0 {
                    Phase::Reset
                } else if t < d.inward_start() {
                    Phase::Outward
                } else if t < d.red_start() {
                    Phase::Inward
                } else if t < d.settle_start() {
                    Phase::Red
                } else {
                    Phase::Settle
                }
            }
        }
    }

    fn finish_sequence(&mut self) {
        let finished = self.sequence;
        match finished {
            Sequence::Ripple => self.completed_cycles += 1,
            Sequence::Blink => self.completed_blinks += 1,
        }
        let (next, count) =
            next_sequence(finished, self.cycle_count, self.config.cycles_per_blink);
        self.sequence = next;
        self.cycle_count = count;
        self.timeline = match next {
            Sequence::Ripple => self.ripple_timeline(),
            Sequence::Blink => {
                log::info!("[ripple] blink after {} cycles", self.completed_cycles);
                self.blink_timeline()
            }
        };
        log::debug!(
            "[ripple] {:?} -> {:?} (cycle_count={})",
            finished,
            next,
            count
        );
    }

    fn ripple_timeline(&self) -> Timeline {
        let cfg = &self.config;
        let d = &self.durations;
        let delay = |i: usize| self.markers[i].distance * cfg.delay_per_px;
        let mut tl = Timeline::new();

        tl.set(
            all_targets(self.markers.len()),
            StyleChange::default()
                .opacity(0.0)
                .scale(0.0)
                .color(cfg.palette.base),
            0.0,
        );
        for (rank, &i) in self.order.outward.iter().enumerate() {
            let scale = cfg.outward_scales[rank % cfg.outward_scales.len()];
            tl.to(
                one_target(i),
                StyleChange::default().opacity(1.0).scale(scale),
                delay(i),
                cfg.marker_duration,
                Ease::POWER2_OUT,
            );
        }
        for &i in &self.order.inward {
            tl.to(
                one_target(i),
                StyleChange::default().scale(1.0).color(cfg.palette.cool),
                d.inward_start() + delay(i),
                cfg.marker_duration,
                Ease::POWER2_IN_OUT,
            );
        }
        for &i in &self.order.outward {
            tl.to(
                one_target(i),
                StyleChange::default().color(cfg.palette.warning),
                d.red_start() + delay(i),
                cfg.marker_duration,
                Ease::POWER2_IN_OUT,
            );
        }
        tl.hold_until(d.cycle_total());
        tl
    }

    fn blink_timeline(&self) -> Timeline {
        let p = &self.config.palette;
        let b = &self.config.blink;
        let all = all_targets(self.markers.len());
        let mut tl = Timeline::new();
        for _ in 0..b.repeats {
            tl.then(
                all.clone(),
                StyleChange::default().color(p.highlight),
                b.on,
                Ease::POWER1_IN_OUT,
            );
            tl.then(
                all.clone(),
                StyleChange::default().color(p.background),
                b.off,
                Ease::POWER1_IN_OUT,
            );
        }
        tl.then(
            all,
            StyleChange::default().color(p.base),
            b.recover,
            Ease::POWER1_OUT,
        );
        tl
    }

    pub fn markers(&self) -> &[Marker] {
        &self.markers
    }

    pub fn styles(&self) -> &[MarkerStyle] {
        &self.styles
    }

    pub fn config(&self) -> &AnimatorConfig {
        &self.config
    }

    pub fn order(&self) -> &RippleOrder {
        &self.order
    }

    pub fn durations(&self) -> PhaseDurations {
        self.durations
    }

    pub fn sequence(&self) -> Sequence {
        self.sequence
    }

    /// Ripple cycles finished since the last blink.
    pub fn cycle_count(&self) -> u32 {
        self.cycle_count
    }

    pub fn completed_cycles(&self) -> u64 {
        self.completed_cycles
    }

    pub fn completed_blinks(&self) -> u64 {
        self.completed_blinks
    }

    /// Playhead within the current sequence, in seconds.
    pub fn sequence_time(&self) -> f32 {
        self.timeline.time()
    }

    pub fn sequence_duration(&self) -> f32 {
        self.timeline.duration()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transition_table() {
        assert_eq!(next_sequence(Sequence::Ripple, 0, 3), (Sequence::Ripple, 1));
        assert_eq!(next_sequence(Sequence::Ripple, 1, 3), (Sequence::Ripple, 2));
        assert_eq!(next_sequence(Sequence::Ripple, 2, 3), (Sequence::Blink, 0));
        assert_eq!(next_sequence(Sequence::Blink, 0, 3), (Sequence::Ripple, 0));
        assert_eq!(next_sequence(Sequence::Ripple, 0, 1), (Sequence::Blink, 0));
    }

    #[test]
    fn default_blink_total() {
        assert!((BlinkTiming::default().total() - 2.5).abs() < 1e-6);
    }

    #[test]
    fn config_validation_rejects_bad_timing() {
        let mut cfg = AnimatorConfig::default();
        assert!(cfg.validate().is_ok());
        cfg.marker_duration = 0.0;
        assert!(matches!(cfg.validate(), Err(ConfigError::NonPositive { .. })));

        let mut cfg = AnimatorConfig::default();
        cfg.cycles_per_blink = 0;
        assert_eq!(cfg.validate(), Err(ConfigError::ZeroCount("cycles per blink")));

        let mut cfg = AnimatorConfig::default();
        cfg.delay_per_px = f32::NAN;
        assert!(matches!(cfg.validate(), Err(ConfigError::Negative { .. })));
    }
}
