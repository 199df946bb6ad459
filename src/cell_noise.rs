//! Contains logic for blending gradients between the lattice points of a [`DomainCell`].

use core::ops::AddAssign;

use bevy_math::{Curve, VectorSpace, curve::derivatives::SampleDerivative};

use crate::{
    NoiseFunction,
    cells::{DomainCell, Partitioner, WithGradient},
    curves::{Linear, SimplexFalloff},
};

/// Maps the low 4 bits of `bits` to a signed gradient magnitude.
/// Bits 0..3 pick a magnitude in `1..=8`, and bit 3 makes it negative.
#[inline(always)]
pub fn gradient_magnitude(bits: u32) -> f32 {
    let h = bits & 0x0F;
    let magnitude = (1 + (h & 7)) as f32;
    if h & 8 != 0 { -magnitude } else { magnitude }
}

/// Allows blending between different [`CellPoint`](crate::cells::CellPoint)s.
pub trait Blender<I: VectorSpace, V> {
    /// Weighs a `value` by its `offset` from the sample.
    fn weigh_value(&self, value: V, offset: I) -> V;

    /// Collects the values produced by [`weigh_value`](Blender::weigh_value) into one.
    fn collect_weighted(&self, weighed: impl Iterator<Item = V>) -> V;

    /// Scales the collected value so that the output spans roughly `[-1, 1]`.
    fn counter_dot_product(&self, value: V) -> V;
}

/// This trait facilitates generating gradients and computing their dot products.
pub trait GradientGenerator<I: VectorSpace> {
    /// Gets the dot product of `I` with some gradient vector based on these `bits`.
    /// Each element of `offset` can be assumed to be in -1..=1.
    fn get_gradient_dot(&self, bits: u32, offset: I) -> f32;

    /// Gets the gradient that would be used in [`get_gradient_dot`](GradientGenerator::get_gradient_dot).
    fn get_gradient(&self, bits: u32) -> I;
}

/// A [`GradientGenerator`] that can also report how its dot product changes with the offset.
pub trait DifferentiableGradientGenerator<I: VectorSpace>: GradientGenerator<I> {
    /// Same as [`get_gradient_dot`](GradientGenerator::get_gradient_dot) but also gives its derivative with respect to `offset`.
    fn get_gradient_dot_with_derivative(&self, bits: u32, offset: I) -> WithGradient<f32, I>;
}

/// A [`NoiseFunction`] that blends gradients sourced from a [`GradientGenerator`] `G` by a [`Blender`] `B` within some [`DomainCell`] from a [`Partitioner`] `P`.
///
/// When `DIFFERENTIATE` is true, this produces a [`WithGradient`] holding the derivative with respect to the input alongside the value.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct BlendCellGradients<P, B, G, const DIFFERENTIATE: bool = false> {
    /// The [`Partitioner`].
    pub cells: P,
    /// The [`GradientGenerator`].
    pub gradients: G,
    /// The [`Blender`].
    pub blender: B,
}

impl<I: VectorSpace, P: Partitioner<I>, B: Blender<I, f32>, G: GradientGenerator<I>>
    NoiseFunction<I> for BlendCellGradients<P, B, G, false>
{
    type Output = f32;

    #[inline]
    fn evaluate(&self, input: I) -> Self::Output {
        let segment = self.cells.partition(input);
        let weighted = segment.iter_points().map(|p| {
            let dot = self.gradients.get_gradient_dot(p.rough_id, p.offset);
            self.blender.weigh_value(dot, p.offset)
        });
        self.blender
            .counter_dot_product(self.blender.collect_weighted(weighted))
    }
}

impl<
    I: VectorSpace,
    P: Partitioner<I>,
    B: Blender<I, WithGradient<f32, I>>,
    G: DifferentiableGradientGenerator<I>,
> NoiseFunction<I> for BlendCellGradients<P, B, G, true>
{
    type Output = WithGradient<f32, I>;

    #[inline]
    fn evaluate(&self, input: I) -> Self::Output {
        let segment = self.cells.partition(input);
        let weighted = segment.iter_points().map(|p| {
            let dot = self
                .gradients
                .get_gradient_dot_with_derivative(p.rough_id, p.offset);
            self.blender.weigh_value(dot, p.offset)
        });
        self.blender
            .counter_dot_product(self.blender.collect_weighted(weighted))
    }
}

/// A [`GradientGenerator`] for lattice points on a line.
/// It reads the gradient from the low 4 bits of each point's id (see [`gradient_magnitude`]) and multiplies it by the offset after passing it through the offset hash `O`.
///
/// With the default [`Linear`] offset hash, this is the classic 1D simplex gradient: it vanishes on the lattice point itself.
#[derive(Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "bevy_reflect", derive(bevy_reflect::Reflect))]
#[cfg_attr(feature = "serialize", derive(serde::Serialize))]
#[cfg_attr(feature = "debug", derive(Debug))]
pub struct BitGradients<O = Linear> {
    /// The offset hash, applied to each offset before it meets the gradient.
    /// It must be deterministic. For the noise to stay continuous and vanish on lattice points, it must also be continuous and map 0 to 0.
    pub offset_hash: O,
}

impl<O: Curve<f32>> GradientGenerator<f32> for BitGradients<O> {
    #[inline]
    fn get_gradient_dot(&self, bits: u32, offset: f32) -> f32 {
        gradient_magnitude(bits) * self.offset_hash.sample_unchecked(offset)
    }

    #[inline]
    fn get_gradient(&self, bits: u32) -> f32 {
        gradient_magnitude(bits)
    }
}

impl<O: SampleDerivative<f32>> DifferentiableGradientGenerator<f32> for BitGradients<O> {
    #[inline]
    fn get_gradient_dot_with_derivative(&self, bits: u32, offset: f32) -> WithGradient<f32, f32> {
        let gradient = gradient_magnitude(bits);
        let selector = self.offset_hash.sample_with_derivative_unchecked(offset);
        WithGradient {
            value: gradient * selector.value,
            gradient: gradient * selector.derivative,
        }
    }
}

/// The largest `|n0 + n1|` a 1D simplex cell can produce is `2.53125`, reached halfway between two lattice points whose gradients are 8 and -8.
/// This maps it just inside `[-1, 1]`.
const SIMPLECTIC_1D_SCALE: f32 = 0.395;

/// A [`Blender`] that weighs each lattice corner by a radial falloff `F` and sums the results.
#[derive(Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "bevy_reflect", derive(bevy_reflect::Reflect))]
#[cfg_attr(feature = "serialize", derive(serde::Serialize))]
#[cfg_attr(feature = "debug", derive(Debug))]
pub struct SimplecticBlend<F = SimplexFalloff> {
    /// The falloff by distance to a corner.
    pub falloff: F,
}

#[inline]
fn sum_weighted<V: Default + AddAssign<V>>(weighed: impl Iterator<Item = V>) -> V {
    let mut sum = V::default();
    for v in weighed {
        sum += v;
    }
    sum
}

impl<F: Curve<f32>> Blender<f32, f32> for SimplecticBlend<F> {
    #[inline]
    fn weigh_value(&self, value: f32, offset: f32) -> f32 {
        value * self.falloff.sample_unchecked(offset)
    }

    #[inline]
    fn collect_weighted(&self, weighed: impl Iterator<Item = f32>) -> f32 {
        sum_weighted(weighed)
    }

    #[inline]
    fn counter_dot_product(&self, value: f32) -> f32 {
        value * SIMPLECTIC_1D_SCALE
    }
}

impl<F: SampleDerivative<f32>> Blender<f32, WithGradient<f32, f32>> for SimplecticBlend<F> {
    #[inline]
    fn weigh_value(&self, value: WithGradient<f32, f32>, offset: f32) -> WithGradient<f32, f32> {
        let weight = self.falloff.sample_with_derivative_unchecked(offset);
        // product rule
        WithGradient {
            value: value.value * weight.value,
            gradient: value.gradient * weight.value + value.value * weight.derivative,
        }
    }

    #[inline]
    fn collect_weighted(
        &self,
        weighed: impl Iterator<Item = WithGradient<f32, f32>>,
    ) -> WithGradient<f32, f32> {
        sum_weighted(weighed)
    }

    #[inline]
    fn counter_dot_product(&self, value: WithGradient<f32, f32>) -> WithGradient<f32, f32> {
        value * SIMPLECTIC_1D_SCALE
    }
}
