/// Polynomial easing curves of the "power" family.
///
/// `Power(n)` raises progress to `n + 1`, so power1 is quadratic and power2 is
/// cubic. `Power(0)` degenerates to linear.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Ease {
    Linear,
    In(u8),
    Out(u8),
    InOut(u8),
}

impl Ease {
    pub const POWER1_OUT: Self = Self::Out(1);
    pub const POWER1_IN_OUT: Self = Self::InOut(1);
    pub const POWER2_OUT: Self = Self::Out(2);
    pub const POWER2_IN_OUT: Self = Self::InOut(2);

    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::In(p) => t.powi(i32::from(p) + 1),
            Self::Out(p) => 1.0 - (1.0 - t).powi(i32::from(p) + 1),
            Self::InOut(p) => {
                let e = i32::from(p) + 1;
                if t < 0.5 {
                    (2.0 * t).powi(e) / 2.0
                } else {
                    1.0 - (2.0 - 2.0 * t).powi(e) / 2.0
                }
            }
        }
    }
}
