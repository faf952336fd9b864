/// Easing curves for style interpolation.
///
/// `sample` maps normalized progress `t` in `[0, 1]` to an eased fraction.
/// Inputs outside the range are clamped, so a finished animation always
/// reports exactly `1.0`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Easing {
    Linear,
    EaseOut,
    EaseInOut,
    /// Cubic bezier with control points (x1, y1, x2, y2), endpoints pinned
    /// at (0,0) and (1,1) as in CSS timing functions.
    CubicBezier(f64, f64, f64, f64),
}

impl Easing {
    pub fn sample(&self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match *self {
            Easing::Linear => t,
            Easing::EaseOut => 1.0 - (1.0 - t).powi(3),
            Easing::EaseInOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
                }
            }
            Easing::CubicBezier(x1, y1, x2, y2) => cubic_bezier(x1, y1, x2, y2, t),
        }
    }
}

/// Evaluates y(t) for the CSS-style bezier by solving x(s) = t for the
/// curve parameter s with a few Newton iterations, then sampling y(s).
fn cubic_bezier(x1: f64, y1: f64, x2: f64, y2: f64, t: f64) -> f64 {
    if t <= 0.0 {
        return 0.0;
    }
    if t >= 1.0 {
        return 1.0;
    }

    let axis = |p1: f64, p2: f64, s: f64| {
        let inv = 1.0 - s;
        3.0 * inv * inv * s * p1 + 3.0 * inv * s * s * p2 + s * s * s
    };
    let axis_deriv = |p1: f64, p2: f64, s: f64| {
        let inv = 1.0 - s;
        3.0 * inv * inv * p1 + 6.0 * inv * s * (p2 - p1) + 3.0 * s * s * (1.0 - p2)
    };

    let mut s = t;
    for _ in 0..8 {
        let err = axis(x1, x2, s) - t;
        if err.abs() < 1e-7 {
            break;
        }
        let d = axis_deriv(x1, x2, s);
        if d.abs() < 1e-7 {
            break;
        }
        s = (s - err / d).clamp(0.0, 1.0);
    }

    axis(y1, y2, s)
}

#[cfg(test)]
mod tests {
    use super::Easing;

    #[test]
    fn endpoints_are_exact() {
        for e in [
            Easing::Linear,
            Easing::EaseOut,
            Easing::EaseInOut,
            Easing::CubicBezier(0.22, 1.0, 0.36, 1.0),
        ] {
            assert_eq!(e.sample(0.0), 0.0);
            assert_eq!(e.sample(1.0), 1.0);
            // Clamped outside [0, 1].
            assert_eq!(e.sample(-0.5), 0.0);
            assert_eq!(e.sample(1.5), 1.0);
        }
    }

    #[test]
    fn ease_out_front_loads_progress() {
        let e = Easing::EaseOut;
        assert!(e.sample(0.5) > 0.5);
        assert!(e.sample(0.25) > 0.25);
    }

    #[test]
    fn bezier_is_monotonic_for_css_curves() {
        let e = Easing::CubicBezier(0.22, 1.0, 0.36, 1.0);
        let mut prev = 0.0;
        for i in 1..=100 {
            let y = e.sample(i as f64 / 100.0);
            assert!(y >= prev - 1e-9, "not monotonic at step {i}");
            prev = y;
        }
    }

    #[test]
    fn linear_bezier_matches_linear() {
        let b = Easing::CubicBezier(1.0 / 3.0, 1.0 / 3.0, 2.0 / 3.0, 2.0 / 3.0);
        for i in 0..=10 {
            let t = i as f64 / 10.0;
            assert!((b.sample(t) - t).abs() < 1e-4);
        }
    }
}
