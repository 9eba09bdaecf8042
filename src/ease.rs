#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Ease {
    Linear,
    /// CSS `ease-out`.
    EaseOut,
    OutCubic,
    /// CSS style `cubic-bezier(x1, y1, x2, y2)`.
    CubicBezier(f32, f32, f32, f32),
}

/// Ease-in-out curve the collage photos pop in with: a slow start, a fast
/// middle and a soft landing with no overshoot.
pub const PHOTO_CURVE: Ease = Ease::CubicBezier(0.43, 0.13, 0.23, 0.96);

impl Ease {
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::EaseOut => bezier(0.0, 0.0, 0.58, 1.0, t),
            Self::OutCubic => 1.0 - (1.0 - t).powi(3),
            Self::CubicBezier(x1, y1, x2, y2) => bezier(x1, y1, x2, y2, t),
        }
    }
}

fn sample(a1: f32, a2: f32, t: f32) -> f32 {
    // B(t) for a curve anchored at 0 and 1
    let u = 1.0 - t;
    3.0 * u * u * t * a1 + 3.0 * u * t * t * a2 + t * t * t
}

fn slope(a1: f32, a2: f32, t: f32) -> f32 {
    let u = 1.0 - t;
    3.0 * u * u * a1 + 6.0 * u * t * (a2 - a1) + 3.0 * t * t * (1.0 - a2)
}

fn bezier(x1: f32, y1: f32, x2: f32, y2: f32, x: f32) -> f32 {
    if x <= 0.0 || x >= 1.0 {
        return x;
    }

    // Newton first, bisection when the slope flattens out.
    let mut t = x;
    for _ in 0..8 {
        let err = sample(x1, x2, t) - x;
        if err.abs() < 1e-6 {
            return sample(y1, y2, t);
        }
        let d = slope(x1, x2, t);
        if d.abs() < 1e-6 {
            break;
        }
        t -= err / d;
        if !(0.0..=1.0).contains(&t) {
            break;
        }
    }

    let (mut lo, mut hi) = (0.0_f32, 1.0_f32);
    t = x;
    for _ in 0..32 {
        let s = sample(x1, x2, t);
        if (s - x).abs() < 1e-6 {
            break;
        }
        if s < x {
            lo = t;
        } else {
            hi = t;
        }
        t = (lo + hi) * 0.5;
    }
    sample(y1, y2, t)
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Ease; 4] = [Ease::Linear, Ease::EaseOut, Ease::OutCubic, PHOTO_CURVE];

    #[test]
    fn endpoints_are_stable() {
        for ease in ALL {
            assert_eq!(ease.apply(0.0), 0.0);
            assert_eq!(ease.apply(1.0), 1.0);
        }
    }

    #[test]
    fn out_of_range_input_is_clamped() {
        for ease in ALL {
            assert_eq!(ease.apply(-3.0), 0.0);
            assert_eq!(ease.apply(7.5), 1.0);
        }
    }

    #[test]
    fn monotonic_spot_check() {
        for ease in ALL {
            let a = ease.apply(0.25);
            let b = ease.apply(0.5);
            let c = ease.apply(0.75);
            assert!(a < b);
            assert!(b < c);
        }
    }

    #[test]
    fn linear_bezier_is_identity() {
        let ease = Ease::CubicBezier(1.0 / 3.0, 1.0 / 3.0, 2.0 / 3.0, 2.0 / 3.0);
        for x in [0.1, 0.3, 0.5, 0.9] {
            assert!((ease.apply(x) - x).abs() < 1e-4);
        }
    }

    #[test]
    fn photo_curve_matches_reference_points() {
        // cubic-bezier(.43,.13,.23,.96) solved to high precision
        for (x, y) in [(0.25, 0.244_854), (0.5, 0.759_634), (0.75, 0.949_473)] {
            let got = PHOTO_CURVE.apply(x);
            assert!((got - y).abs() < 1e-3, "x {x}: expected {y}, got {got}");
        }
    }

    #[test]
    fn photo_curve_passes_through_its_parametric_midpoint() {
        // B(0.5) on both axes: x = 0.3725, y = 0.53375
        assert!((PHOTO_CURVE.apply(0.3725) - 0.53375).abs() < 1e-3);
    }

    #[test]
    fn ease_out_leads_linear() {
        assert!(Ease::EaseOut.apply(0.5) > 0.5);
        assert!(Ease::OutCubic.apply(0.5) > 0.5);
    }
}
