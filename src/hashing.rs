//! Defines hashes that turn lattice coordinates into gradient selector bits.
//! These are all fixed functions; none of them carry a seed.

/// Represents something that can identify a lattice point by some `u32`.
/// Gradient selection only looks at the low 4 bits of the result, so those must carry the entropy.
pub trait LatticeHash {
    /// Hashes the lattice coordinate `lattice`.
    fn hash_lattice(&self, lattice: i32) -> u32;
}

/// A [`LatticeHash`] that uses the lattice coordinate's bits as they are.
/// Gradients picked through this repeat every 16 lattice points.
#[derive(Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "bevy_reflect", derive(bevy_reflect::Reflect))]
#[cfg_attr(feature = "serialize", derive(serde::Serialize))]
#[cfg_attr(feature = "debug", derive(Debug))]
pub struct Identity;

impl LatticeHash for Identity {
    #[inline(always)]
    fn hash_lattice(&self, lattice: i32) -> u32 {
        lattice as u32
    }
}

/// A [`LatticeHash`] that looks lattice points up in a fixed shuffle of `0..=255`.
/// Lattice points are wrapped modulo 255, so the pattern repeats every 255 lattice points.
#[derive(Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "bevy_reflect", derive(bevy_reflect::Reflect))]
#[cfg_attr(feature = "serialize", derive(serde::Serialize))]
#[cfg_attr(feature = "debug", derive(Debug))]
pub struct PermutationTable;

impl PermutationTable {
    /// A randomly organized set of every `u8`.
    /// Wrapping modulo 255 leaves the last entry unused.
    pub const PERMUTATIONS: [u8; 256] = [
        216, 117, 91, 54, 101, 12, 189, 9, 211, 14, 73, 94, 24, 89, 231, 63, //
        58, 5, 41, 124, 68, 204, 82, 210, 195, 202, 142, 109, 72, 32, 165, 11, //
        60, 214, 2, 74, 193, 118, 217, 213, 92, 105, 158, 227, 20, 138, 70, 113, //
        241, 244, 86, 203, 76, 128, 154, 229, 110, 181, 21, 137, 35, 168, 174, 65, //
        239, 31, 8, 160, 95, 120, 219, 156, 192, 220, 57, 207, 38, 75, 77, 39, //
        159, 25, 246, 235, 240, 221, 133, 85, 3, 106, 43, 200, 17, 228, 232, 248, //
        42, 163, 141, 50, 209, 27, 152, 34, 253, 230, 36, 126, 22, 186, 129, 116, //
        13, 7, 236, 171, 224, 103, 67, 164, 18, 98, 100, 135, 108, 97, 81, 234, //
        212, 222, 4, 150, 166, 84, 1, 251, 206, 201, 49, 61, 180, 96, 170, 6, //
        226, 161, 173, 225, 140, 190, 208, 119, 198, 78, 245, 71, 199, 172, 250, 93, //
        87, 153, 134, 10, 254, 162, 238, 188, 79, 15, 194, 196, 46, 62, 115, 182, //
        184, 66, 52, 104, 37, 205, 45, 16, 218, 243, 197, 29, 23, 111, 144, 59, //
        223, 176, 136, 185, 127, 132, 83, 255, 114, 88, 187, 191, 125, 122, 90, 107, //
        139, 51, 47, 145, 143, 53, 99, 123, 28, 233, 215, 56, 130, 157, 131, 148, //
        80, 64, 55, 249, 48, 177, 33, 252, 242, 179, 44, 237, 19, 112, 146, 102, //
        149, 178, 26, 151, 30, 147, 167, 175, 121, 155, 69, 0, 183, 40, 169, 247, //
    ];
}

impl LatticeHash for PermutationTable {
    #[inline]
    fn hash_lattice(&self, lattice: i32) -> u32 {
        // `rem_euclid` keeps negative lattice points in `0..255`.
        Self::PERMUTATIONS[lattice.rem_euclid(255) as usize] as u32
    }
}

/// A [`LatticeHash`] inspired by [FxHash](https://crates.io/crates/fxhash).
/// This multiplies by a large prime, so entropy collects in the high bits; those are moved down to where gradient selection reads them.
#[derive(Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "bevy_reflect", derive(bevy_reflect::Reflect))]
#[cfg_attr(feature = "serialize", derive(serde::Serialize))]
#[cfg_attr(feature = "debug", derive(Debug))]
pub struct BitMix;

impl BitMix {
    /// This is a large prime number with even bit distribution.
    /// This lets us use it as a multiplier in the hash.
    const KEY: u32 = 249_222_277;
}

impl LatticeHash for BitMix {
    #[inline(always)]
    fn hash_lattice(&self, lattice: i32) -> u32 {
        let i = lattice as u32;
        let a = i.wrapping_mul(Self::KEY);
        let mixed = (a ^ i).wrapping_mul(Self::KEY);
        mixed >> 28
    }
}
