//! Contains curves used to shape offsets and weigh lattice corners.

use bevy_math::{
    Curve, WithDerivative,
    curve::{Interval, derivatives::SampleDerivative},
};

/// Linear interpolation.
/// As an offset hash for [`BitGradients`](crate::cell_noise::BitGradients), this passes offsets through unchanged.
#[derive(Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "bevy_reflect", derive(bevy_reflect::Reflect))]
#[cfg_attr(feature = "serialize", derive(serde::Serialize))]
#[cfg_attr(feature = "debug", derive(Debug))]
pub struct Linear;

impl Curve<f32> for Linear {
    #[inline]
    fn domain(&self) -> Interval {
        Interval::EVERYWHERE
    }

    #[inline]
    fn sample_unchecked(&self, t: f32) -> f32 {
        t
    }
}

impl SampleDerivative<f32> for Linear {
    #[inline]
    fn sample_with_derivative_unchecked(&self, t: f32) -> WithDerivative<f32> {
        WithDerivative {
            value: self.sample_unchecked(t),
            derivative: 1.0,
        }
    }
}

/// The simplex corner falloff `(1 - t²)⁴`.
///
/// This is 1 at `t = 0` and reaches 0 with a zero derivative at `|t| = 1`, which keeps noise continuous across lattice points.
/// Beyond `|t| = 1` it stays 0.
#[derive(Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "bevy_reflect", derive(bevy_reflect::Reflect))]
#[cfg_attr(feature = "serialize", derive(serde::Serialize))]
#[cfg_attr(feature = "debug", derive(Debug))]
pub struct SimplexFalloff;

impl Curve<f32> for SimplexFalloff {
    #[inline]
    fn domain(&self) -> Interval {
        Interval::EVERYWHERE
    }

    #[inline]
    fn sample_unchecked(&self, t: f32) -> f32 {
        let s = 1.0 - t * t;
        if s <= 0.0 {
            0.0
        } else {
            let s = s * s;
            s * s
        }
    }
}

impl SampleDerivative<f32> for SimplexFalloff {
    #[inline]
    fn sample_with_derivative_unchecked(&self, t: f32) -> WithDerivative<f32> {
        let s = 1.0 - t * t;
        if s <= 0.0 {
            WithDerivative {
                value: 0.0,
                derivative: 0.0,
            }
        } else {
            let s2 = s * s;
            WithDerivative {
                value: s2 * s2,
                derivative: -8.0 * t * s2 * s,
            }
        }
    }
}
