/// How a tracked value approaches its target each frame.
///
/// - `PerFrame` moves a fixed fraction of the remaining distance every frame,
///   so the convergence speed follows the display refresh rate.
/// - `TimeScaled` rescales that fraction by the frame delta so a 144 Hz and
///   a 60 Hz display converge in the same wall-clock time. At `reference_hz`
///   both modes are identical.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Smoothing {
    PerFrame { factor: f32 },
    TimeScaled { factor: f32, reference_hz: f32 },
}

impl Smoothing {
    /// Fraction of the remaining distance to cover this frame, in `[0, 1]`.
    pub fn alpha(&self, dt_sec: f32) -> f32 {
        match *self {
            Smoothing::PerFrame { factor } => factor.clamp(0.0, 1.0),
            Smoothing::TimeScaled {
                factor,
                reference_hz,
            } => {
                let f = factor.clamp(0.0, 1.0);
                let frames = (dt_sec.max(0.0) * reference_hz).max(0.0);
                1.0 - (1.0 - f).powf(frames)
            }
        }
    }

    /// How many reference frames `dt_sec` is worth. Used for per-frame
    /// increments such as constant spin.
    pub fn frames(&self, dt_sec: f32) -> f32 {
        match *self {
            Smoothing::PerFrame { .. } => 1.0,
            Smoothing::TimeScaled { reference_hz, .. } => dt_sec.max(0.0) * reference_hz,
        }
    }

    #[inline]
    pub fn step(&self, current: f32, target: f32, dt_sec: f32) -> f32 {
        current + (target - current) * self.alpha(dt_sec)
    }
}
