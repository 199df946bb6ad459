//! Contains common imports

pub use crate::{
    ConfigurableNoise, DynamicSampleable, Noise, NoiseFunction, Sampleable, SampleableFor,
    cell_noise::{BitGradients, BlendCellGradients, SimplecticBlend},
    cells::{Lattice, WithGradient, fast_floor},
    common_adapters::{Abs, Finite, SNormToUNorm, UNormToSNorm},
    curves::{Linear, SimplexFalloff},
    evaluate_1d, gradient,
    hashing::{BitMix, Identity, PermutationTable},
};

/// Contains type aliases for common noise types.
/// This reduces some boiler plate and is educational.
pub mod common_noise {
    use super::*;

    /// A [`NoiseFunction`] that produces 1D simplex noise `f32`s between -1 and 1.
    /// Gradients come straight from the low bits of each integer, so they repeat every 16 units.
    pub type Simplex = BlendCellGradients<Lattice, SimplecticBlend, BitGradients>;

    /// A [`Simplex`] that also produces its derivative as a [`WithGradient`].
    pub type SimplexWithDerivative =
        BlendCellGradients<Lattice, SimplecticBlend, BitGradients, true>;

    /// A [`Simplex`] whose lattice points are shuffled by a [`PermutationTable`], so the pattern repeats every 255 units.
    pub type PermutedSimplex =
        BlendCellGradients<Lattice<PermutationTable>, SimplecticBlend, BitGradients>;

    /// A [`Simplex`] whose lattice points are shuffled by [`BitMix`].
    pub type MixedSimplex = BlendCellGradients<Lattice<BitMix>, SimplecticBlend, BitGradients>;
}
