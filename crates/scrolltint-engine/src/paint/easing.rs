/// Shaping curve applied to a linear `0..=1` progress value.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Easing {
    Linear,
    /// `t^exponent`. Exponents below 1 front-load the change.
    Power(f32),
    /// `1 - (1 - t)^3`.
    CubicOut,
    /// `t^2 (3 - 2t)`.
    Smoothstep,
    /// `weight * smoothstep(t) + (1 - weight) * normalized(1 - e^(-rate t))`.
    SmoothExp { weight: f32, rate: f32 },
}

impl Easing {
    /// Eases `t`. Input is clamped to `[0, 1]` and NaN maps to 0, so the
    /// output is always finite and inside `[0, 1]`.
    pub fn apply(self, t: f32) -> f32 {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };

        let v = match self {
            Easing::Linear => t,
            Easing::Power(exponent) => {
                if exponent.is_finite() && exponent > 0.0 { t.powf(exponent) } else { t }
            }
            Easing::CubicOut => 1.0 - (1.0 - t).powi(3),
            Easing::Smoothstep => smoothstep(t),
            Easing::SmoothExp { weight, rate } => {
                let w = if weight.is_nan() { 1.0 } else { weight.clamp(0.0, 1.0) };
                w * smoothstep(t) + (1.0 - w) * exp_out(t, rate)
            }
        };

        v.clamp(0.0, 1.0)
    }
}

#[inline]
fn smoothstep(t: f32) -> f32 {
    t * t * (3.0 - 2.0 * t)
}

/// Exponential approach normalized so that `exp_out(1) == 1`.
#[inline]
fn exp_out(t: f32, rate: f32) -> f32 {
    if !(rate.is_finite() && rate > 0.0) {
        return t;
    }
    (1.0 - (-rate * t).exp()) / (1.0 - (-rate).exp())
}
