#![no_std]
#![allow(
    clippy::doc_markdown,
    reason = "These rules should not apply to the readme."
)]
#![doc = include_str!("../README.md")]

#[cfg(test)]
extern crate std;

pub mod cell_noise;
pub mod cells;
pub mod common_adapters;
pub mod curves;
pub mod hashing;
pub mod prelude;

use bevy_math::VectorSpace;

pub use cells::fast_floor;

/// One stage of a noise pipeline, mapping an input `I` to an output.
/// Stages are pure: the same input always gives the same output.
pub trait NoiseFunction<I> {
    /// What this stage produces.
    type Output;

    /// Runs this stage on `input`.
    fn evaluate(&self, input: I) -> Self::Output;
}

impl<I, T0: NoiseFunction<I>> NoiseFunction<I> for (T0,) {
    type Output = T0::Output;
    #[inline]
    fn evaluate(&self, input: I) -> Self::Output {
        self.0.evaluate(input)
    }
}

macro_rules! impl_noise_function_tuple {
    ($($l:ident-$t:ident-$i:tt),*) => {
        impl<
            I,
            T0: NoiseFunction<I>,
            $($t: NoiseFunction<$l::Output>,)*
        > NoiseFunction<I> for (T0, $($t,)*)
        {
            type Output = <impl_noise_function_tuple!(last $($t),*)>::Output;

            #[inline]
            fn evaluate(&self, input: I) -> Self::Output {
                let input = self.0.evaluate(input);
                $(let input = self.$i.evaluate(input);)*
                input
            }
        }
    };


    (last $f:ident $(,)? ) => {
        $f
    };

    (last $f:ident, $($items:ident),+ $(,)?) => {
        impl_noise_function_tuple!(last $($items),+)
    };
}

#[rustfmt::skip]
mod function_impls {
    use super::*;
    impl_noise_function_tuple!(T0-T1-1);
    impl_noise_function_tuple!(T0-T1-1, T1-T2-2);
    impl_noise_function_tuple!(T0-T1-1, T1-T2-2, T2-T3-3);
    impl_noise_function_tuple!(T0-T1-1, T1-T2-2, T2-T3-3, T3-T4-4);
    impl_noise_function_tuple!(T0-T1-1, T1-T2-2, T2-T3-3, T3-T4-4, T4-T5-5);
    impl_noise_function_tuple!(T0-T1-1, T1-T2-2, T2-T3-3, T3-T4-4, T4-T5-5, T5-T6-6);
    impl_noise_function_tuple!(T0-T1-1, T1-T2-2, T2-T3-3, T3-T4-4, T4-T5-5, T5-T6-6, T6-T7-7);
}

/// Noise whose input scale can be changed at runtime.
pub trait ConfigurableNoise {
    /// Sets how many lattice segments fit in one unit of input.
    fn set_frequency(&mut self, frequency: f32);

    /// Gets how many lattice segments fit in one unit of input.
    fn get_frequency(&self) -> f32;

    /// Sets how many units of input one lattice segment spans.
    fn set_period(&mut self, period: f32) {
        self.set_frequency(1.0 / period);
    }

    /// Gets how many units of input one lattice segment spans.
    fn get_period(&self) -> f32 {
        1.0 / self.get_frequency()
    }
}

/// Noise that can be sampled at locations of type `I`.
pub trait Sampleable<I: VectorSpace> {
    /// The unconverted output of the inner stages.
    type Result;

    /// Samples the noise at `loc`, returning the raw result of the inner [`NoiseFunction`].
    fn sample_raw(&self, loc: I) -> Self::Result;

    /// Samples at `loc`, converting into `T`.
    /// Unlike [`SampleableFor::sample`], `T` can be named with a turbofish.
    #[inline]
    fn sample_for<T>(&self, loc: I) -> T
    where
        Self: SampleableFor<I, T>,
    {
        self.sample(loc)
    }
}

/// Noise that can be sampled at locations of type `I` into values of type `T`.
pub trait SampleableFor<I: VectorSpace, T> {
    /// Samples at `loc`, converting into `T`.
    fn sample(&self, loc: I) -> T;
}

/// An object safe [`SampleableFor`], for holding differently configured noise behind one `dyn` type.
/// Prefer the static traits in tight loops.
pub trait DynamicSampleable<I: VectorSpace, T>: ConfigurableNoise + SampleableFor<I, T> {
    /// Same as [`SampleableFor::sample`], without inlining.
    fn sample_dyn(&self, loc: I) -> T {
        self.sample(loc)
    }
}

/// Wraps a [`NoiseFunction`] pipeline for sampling.
///
/// It scales inputs by [`frequency`](Self::frequency) before handing them to the inner [`NoiseFunction`].
/// Derivatives reported by the inner function are with respect to the scaled input.
#[derive(Debug, PartialEq, Clone, Copy)]
pub struct Noise<N> {
    /// The pipeline being sampled.
    pub noise: N,
    /// Multiplies every input before it reaches [`noise`](Self::noise).
    pub frequency: f32,
}

impl<N: Default> Default for Noise<N> {
    fn default() -> Self {
        Self {
            noise: N::default(),
            frequency: 1.0,
        }
    }
}

impl<N> From<N> for Noise<N> {
    fn from(value: N) -> Self {
        Self {
            noise: value,
            frequency: 1.0,
        }
    }
}

impl<I: VectorSpace, N: NoiseFunction<I>> NoiseFunction<I> for Noise<N> {
    type Output = N::Output;

    #[inline]
    fn evaluate(&self, input: I) -> Self::Output {
        self.noise.evaluate(input * self.frequency)
    }
}

impl<N> ConfigurableNoise for Noise<N> {
    fn set_frequency(&mut self, frequency: f32) {
        self.frequency = frequency;
    }

    fn get_frequency(&self) -> f32 {
        self.frequency
    }
}

impl<I: VectorSpace, N: NoiseFunction<I>> Sampleable<I> for Noise<N> {
    type Result = N::Output;

    #[inline]
    fn sample_raw(&self, loc: I) -> Self::Result {
        self.evaluate(loc)
    }
}

impl<T, I: VectorSpace, N: NoiseFunction<I, Output: Into<T>>> SampleableFor<I, T> for Noise<N> {
    #[inline]
    fn sample(&self, loc: I) -> T {
        self.sample_raw(loc).into()
    }
}

impl<T, I: VectorSpace, N> DynamicSampleable<I, T> for Noise<N> where
    Self: SampleableFor<I, T> + Sampleable<I>
{
}

/// Computes the signed gradient of the lattice point `lattice_coordinate` and multiplies it by `selector`.
///
/// Only the low 4 bits of `lattice_coordinate` matter: bits 0..3 pick a magnitude in `1..=8` and bit 3 flips its sign.
///
/// ```
/// assert_eq!(lattice_simplex::gradient(0, 1.0), 1.0);
/// assert_eq!(lattice_simplex::gradient(8, 1.0), -1.0);
/// assert_eq!(lattice_simplex::gradient(7, 0.5), 4.0);
/// ```
#[inline]
pub fn gradient(lattice_coordinate: i32, selector: f32) -> f32 {
    cell_noise::gradient_magnitude(lattice_coordinate as u32) * selector
}

/// Samples 1D simplex noise at `x` with the default lattice hash, offset hash, and falloff.
/// The result is within `[-0.99984375, 0.99984375]` and is exactly 0 on every integer.
///
/// This is [`common_noise::Simplex`](prelude::common_noise::Simplex) at a frequency of 1.
///
/// ```
/// let value = lattice_simplex::evaluate_1d(3.25);
/// assert!((-1.0..=1.0).contains(&value));
/// assert_eq!(lattice_simplex::evaluate_1d(-4.0), 0.0);
/// ```
#[inline]
pub fn evaluate_1d(x: f32) -> f32 {
    prelude::common_noise::Simplex::default().evaluate(x)
}
