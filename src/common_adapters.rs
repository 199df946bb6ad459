//! Contains common adaptive [`NoiseFunction`]s.

use crate::NoiseFunction;

/// Maps values from (-1,1) to (0, 1).
#[derive(Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "bevy_reflect", derive(bevy_reflect::Reflect))]
#[cfg_attr(feature = "serialize", derive(serde::Serialize))]
#[cfg_attr(feature = "debug", derive(Debug))]
pub struct SNormToUNorm;

/// Maps values from (0, 1) to (-1,1).
#[derive(Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "bevy_reflect", derive(bevy_reflect::Reflect))]
#[cfg_attr(feature = "serialize", derive(serde::Serialize))]
#[cfg_attr(feature = "debug", derive(Debug))]
pub struct UNormToSNorm;

/// Takes the absolute value, folding SNorm noise into a billowing UNorm shape.
#[derive(Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "bevy_reflect", derive(bevy_reflect::Reflect))]
#[cfg_attr(feature = "serialize", derive(serde::Serialize))]
#[cfg_attr(feature = "debug", derive(Debug))]
pub struct Abs;

impl NoiseFunction<f32> for SNormToUNorm {
    type Output = f32;

    #[inline]
    fn evaluate(&self, input: f32) -> Self::Output {
        input * 0.5 + 0.5
    }
}

impl NoiseFunction<f32> for UNormToSNorm {
    type Output = f32;

    #[inline]
    fn evaluate(&self, input: f32) -> Self::Output {
        (input - 0.5) * 2.0
    }
}

impl NoiseFunction<f32> for Abs {
    type Output = f32;

    #[inline]
    fn evaluate(&self, input: f32) -> Self::Output {
        f32::from_bits(input.to_bits() & 0x7FFF_FFFF)
    }
}

/// A [`NoiseFunction`] that only runs the inner [`NoiseFunction`] `N` on finite inputs.
/// NaN and infinite inputs produce [`None`] instead of propagating through the noise.
///
/// ```
/// # use lattice_simplex::prelude::*;
/// let noise = Noise::<Finite<common_noise::Simplex>>::default();
/// assert!(noise.sample_for::<Option<f32>>(1.5_f32).is_some());
/// assert_eq!(noise.sample_for::<Option<f32>>(f32::NAN), None);
/// ```
#[derive(Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "bevy_reflect", derive(bevy_reflect::Reflect))]
#[cfg_attr(feature = "serialize", derive(serde::Serialize))]
#[cfg_attr(feature = "debug", derive(Debug))]
pub struct Finite<N>(pub N);

impl<N: NoiseFunction<f32>> NoiseFunction<f32> for Finite<N> {
    type Output = Option<N::Output>;

    #[inline]
    fn evaluate(&self, input: f32) -> Self::Output {
        input.is_finite().then(|| self.0.evaluate(input))
    }
}
