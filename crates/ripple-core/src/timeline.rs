//! Minimal tween timeline over an array of marker styles.
//!
//! A timeline owns a list of tweens placed at absolute offsets. Advancing it
//! renders every tween that has started, in start order, into the caller's
//! style slice. Each tween captures its starting values the first time it
//! becomes active, so chained tweens on one marker pick up where the previous
//! one left off.

use smallvec::{smallvec, SmallVec};

use crate::ease::Ease;
use crate::style::{MarkerStyle, StyleChange};

/// Marker indices driven by one tween.
pub type Targets = SmallVec<[usize; 1]>;

#[derive(Clone, Debug)]
struct Tween {
    targets: Targets,
    change: StyleChange,
    start: f32,
    duration: f32,
    ease: Ease,
    from: Option<Vec<MarkerStyle>>,
    done: bool,
}

impl Tween {
    #[inline]
    fn end(&self) -> f32 {
        self.start + self.duration
    }

    fn render(&mut self, time: f32, styles: &mut [MarkerStyle]) {
        let from = self.from.get_or_insert_with(|| {
            self.targets
                .iter()
                .map(|&i| styles.get(i).copied().unwrap_or_default())
                .collect()
        });
        let progress = if self.duration <= 0.0 {
            1.0
        } else {
            ((time - self.start) / self.duration).clamp(0.0, 1.0)
        };
        let eased = self.ease.apply(progress);
        for (&i, start) in self.targets.iter().zip(from.iter()) {
            if let Some(style) = styles.get_mut(i) {
                self.change.blend_into(start, eased, style);
            }
        }
        self.done = progress >= 1.0;
    }
}

#[derive(Clone, Debug, Default)]
pub struct Timeline {
    tweens: Vec<Tween>,
    time: f32,
    duration: f32,
}

impl Timeline {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule a tween of `targets` toward `change` starting at `at`.
    pub fn to(
        &mut self,
        targets: Targets,
        change: StyleChange,
        at: f32,
        duration: f32,
        ease: Ease,
    ) -> &mut Self {
        let tween = Tween {
            targets,
            change,
            start: at.max(0.0),
            duration: duration.max(0.0),
            ease,
            from: None,
            done: false,
        };
        self.duration = self.duration.max(tween.end());
        // keep start order; equal starts stay in insertion order
        let idx = self.tweens.partition_point(|t| t.start <= tween.start);
        self.tweens.insert(idx, tween);
        self
    }

    /// Apply `change` instantly at `at`.
    pub fn set(&mut self, targets: Targets, change: StyleChange, at: f32) -> &mut Self {
        self.to(targets, change, at, 0.0, Ease::Linear)
    }

    /// Schedule a tween starting at the current end of the timeline.
    pub fn then(
        &mut self,
        targets: Targets,
        change: StyleChange,
        duration: f32,
        ease: Ease,
    ) -> &mut Self {
        let at = self.duration;
        self.to(targets, change, at, duration, ease)
    }

    /// Extend the timeline so it completes no earlier than `at`.
    pub fn hold_until(&mut self, at: f32) -> &mut Self {
        self.duration = self.duration.max(at);
        self
    }

    #[inline]
    pub fn time(&self) -> f32 {
        self.time
    }

    #[inline]
    pub fn duration(&self) -> f32 {
        self.duration
    }

    #[inline]
    pub fn is_complete(&self) -> bool {
        self.time >= self.duration
    }

    pub fn len(&self) -> usize {
        self.tweens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tweens.is_empty()
    }

    /// Move the playhead forward by `dt` seconds and render into `styles`.
    ///
    /// Returns the part of `dt` that ran past the end of the timeline.
    pub fn advance(&mut self, dt: f32, styles: &mut [MarkerStyle]) -> f32 {
        let target = self.time + dt.max(0.0);
        let leftover = (target - self.duration).max(0.0);
        self.time = target.min(self.duration);
        let time = self.time;
        for tween in self.tweens.iter_mut() {
            if tween.start > time {
                break;
            }
            if !tween.done {
                tween.render(time, styles);
            }
        }
        leftover
    }
}

/// Every index in `0..count`.
pub fn all_targets(count: usize) -> Targets {
    (0..count).collect()
}

/// A single marker.
#[inline]
pub fn one_target(index: usize) -> Targets {
    smallvec![index]
}
