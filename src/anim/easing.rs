//! Easing curves. Each maps progress `k` in `[0, 1]` to `[0, 1]` with
//! `ease(0) == 0` and `ease(1) == 1`.

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Easing {
    Linear,
    /// Accelerating start.
    ExponentialIn,
    /// Decelerating finish.
    ExponentialOut,
    QuarticInOut,
}

impl Easing {
    /// Apply the curve. Input outside `[0, 1]` is clamped.
    #[must_use]
    pub fn apply(self, k: f64) -> f64 {
        let k = k.clamp(0.0, 1.0);
        match self {
            Easing::Linear => k,
            Easing::ExponentialIn => {
                if k == 0.0 {
                    0.0
                } else {
                    1024f64.powf(k - 1.0)
                }
            }
            Easing::ExponentialOut => {
                if k == 1.0 {
                    1.0
                } else {
                    1.0 - 2f64.powf(-10.0 * k)
                }
            }
            Easing::QuarticInOut => {
                let k2 = k * 2.0;
                if k2 < 1.0 {
                    0.5 * k2.powi(4)
                } else {
                    let t = k2 - 2.0;
                    -0.5 * (t.powi(4) - 2.0)
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Easing; 4] = [
        Easing::Linear,
        Easing::ExponentialIn,
        Easing::ExponentialOut,
        Easing::QuarticInOut,
    ];

    #[test]
    fn test_endpoints() {
        for easing in ALL {
            assert_eq!(easing.apply(0.0), 0.0, "{:?}", easing);
            assert!((easing.apply(1.0) - 1.0).abs() < 1e-12, "{:?}", easing);
        }
    }

    #[test]
    fn test_monotonic() {
        for easing in ALL {
            let mut last = easing.apply(0.0);
            for step in 1..=100 {
                let value = easing.apply(step as f64 / 100.0);
                assert!(value >= last, "{:?} decreased at step {}", easing, step);
                last = value;
            }
        }
    }

    #[test]
    fn test_shapes() {
        // Ease-in lags linear, ease-out leads it.
        assert!(Easing::ExponentialIn.apply(0.5) < 0.5);
        assert!(Easing::ExponentialOut.apply(0.5) > 0.5);
        assert!((Easing::QuarticInOut.apply(0.5) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_clamps_input() {
        assert_eq!(Easing::Linear.apply(-1.0), 0.0);
        assert_eq!(Easing::Linear.apply(2.0), 1.0);
    }
}
