//! This contains logic for dividing the number line into lattice segments.

use core::ops::{Add, AddAssign, Mul};

use bevy_math::VectorSpace;

use crate::hashing::{Identity, LatticeHash};

/// Returns the largest integer less than or equal to `x`.
///
/// This truncates toward zero and then steps down once when truncation rounded a negative value up.
/// Values outside the range of `i32` saturate, and NaN maps to 0.
///
/// ```
/// # use lattice_simplex::fast_floor;
/// assert_eq!(fast_floor(1.5), 1);
/// assert_eq!(fast_floor(-0.25), -1);
/// assert_eq!(fast_floor(-3.0), -3);
/// ```
#[inline(always)]
pub fn fast_floor(x: f32) -> i32 {
    let truncated = x as i32;
    truncated.saturating_sub((x < truncated as f32) as i32)
}

/// Represents a portion or cell of some larger domain and a position within that cell.
pub trait DomainCell {
    /// The larger/full domain this is a segment of.
    type Full: VectorSpace;

    /// Iterates all the points relevant to this segment.
    fn iter_points(&self) -> impl Iterator<Item = CellPoint<Self::Full>>;
}

/// A value `T` with its gradient `G`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct WithGradient<T, G> {
    /// The value.
    pub value: T,
    /// The gradient of the value.
    pub gradient: G,
}

impl<T: Add<Output = T>, G: Add<Output = G>> Add for WithGradient<T, G> {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        Self {
            value: self.value + rhs.value,
            gradient: self.gradient + rhs.gradient,
        }
    }
}

impl<T: AddAssign, G: AddAssign> AddAssign for WithGradient<T, G> {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        self.value += rhs.value;
        self.gradient += rhs.gradient;
    }
}

impl<T: Mul<f32, Output = T>, G: Mul<f32, Output = G>> Mul<f32> for WithGradient<T, G> {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: f32) -> Self::Output {
        Self {
            value: self.value * rhs,
            gradient: self.gradient * rhs,
        }
    }
}

/// Represents a point in some domain `T` that is relevant to a particular [`DomainCell`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellPoint<T> {
    /// Identifies this point roughly from others, roughly meaning the ids are not necessarily unique.
    /// The ids must be deterministic per point. Ids for the same point must match, even if they are from different [`DomainCell`]s.
    pub rough_id: u32,
    /// Defines the offset of the sample point from this one.
    pub offset: T,
}

/// Represents a type that can partition some domain `T` into cells.
pub trait Partitioner<T: VectorSpace> {
    /// The [`DomainCell`] this partitioner produces.
    type Cell: DomainCell<Full = T>;

    /// Constructs this segment based on its full location.
    fn partition(&self, full: T) -> Self::Cell;
}

/// Represents the unit interval between two adjacent lattice points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LatticeSegment<H> {
    /// The lattice point at or below the sample.
    pub floored: i32,
    /// The positive offset from [`floored`](Self::floored) to the sample, in `[0, 1)`.
    pub offset: f32,
    /// The [`LatticeHash`] that ids the lattice points.
    pub hasher: H,
}

impl<H: LatticeHash> LatticeSegment<H> {
    #[inline]
    fn point_at_step(&self, step: i32) -> CellPoint<f32> {
        CellPoint {
            rough_id: self.hasher.hash_lattice(self.floored.wrapping_add(step)),
            offset: self.offset - step as f32,
        }
    }

    /// Maps both ends of this segment, the lower lattice point first.
    #[inline]
    pub fn corners_map<T>(&self, mut f: impl FnMut(CellPoint<f32>) -> T) -> [T; 2] {
        [f(self.point_at_step(0)), f(self.point_at_step(1))]
    }
}

impl<H: LatticeHash> DomainCell for LatticeSegment<H> {
    type Full = f32;

    #[inline]
    fn iter_points(&self) -> impl Iterator<Item = CellPoint<Self::Full>> {
        self.corners_map(|p| p).into_iter()
    }
}

/// A [`Partitioner`] that splits the number line at every integer, identifying each integer with a [`LatticeHash`] `H`.
#[derive(Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "bevy_reflect", derive(bevy_reflect::Reflect))]
#[cfg_attr(feature = "serialize", derive(serde::Serialize))]
#[cfg_attr(feature = "debug", derive(Debug))]
pub struct Lattice<H = Identity> {
    /// The [`LatticeHash`] applied to each lattice point.
    pub hasher: H,
}

/// From here on every `f32` is an integer.
const ALL_INTEGERS: f32 = 16_777_216.0;

impl<H: LatticeHash + Copy> Partitioner<f32> for Lattice<H> {
    type Cell = LatticeSegment<H>;

    #[inline]
    fn partition(&self, full: f32) -> Self::Cell {
        let floored = fast_floor(full);
        // `floored` saturates past the `i32` range, but those inputs sit on a lattice point anyway.
        let offset = if (ALL_INTEGERS..=f32::MAX).contains(&full.abs()) {
            0.0
        } else {
            full - floored as f32
        };
        LatticeSegment {
            floored,
            offset,
            hasher: self.hasher,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hashing::PermutationTable;

    #[test]
    fn fast_floor_matches_floor() {
        for i in -2000..2000 {
            let x = i as f32 * 0.0625 + 0.01;
            assert_eq!(fast_floor(x), x.floor() as i32, "at {x}");
        }
        for whole in [-1025.0_f32, -2.0, -1.0, 0.0, 1.0, 7.0, 65536.0] {
            assert_eq!(fast_floor(whole), whole as i32);
        }
        assert_eq!(fast_floor(-0.0), 0);
        assert_eq!(fast_floor(-1e-7), -1);
        assert_eq!(fast_floor(0.999_999_94), 0);
    }

    #[test]
    fn fast_floor_is_total() {
        assert_eq!(fast_floor(f32::NAN), 0);
        assert_eq!(fast_floor(f32::INFINITY), i32::MAX);
        assert_eq!(fast_floor(f32::NEG_INFINITY), i32::MIN);
        assert_eq!(fast_floor(-3.0e9), i32::MIN);
    }

    #[test]
    fn segments_bracket_the_sample() {
        let lattice = Lattice::<Identity>::default();
        for (x, floored, offset) in [
            (2.25_f32, 2, 0.25_f32),
            (-2.25, -3, 0.75),
            (5.0, 5, 0.0),
            (-0.5, -1, 0.5),
        ] {
            let segment = lattice.partition(x);
            assert_eq!(segment.floored, floored);
            assert_eq!(segment.offset, offset);
        }
    }

    #[test]
    fn huge_inputs_sit_on_lattice_points() {
        let lattice = Lattice::<Identity>::default();
        for x in [f32::MAX, f32::MIN, 1e38, -1e38, 3.0e9, 16_777_216.0, -16_777_216.0] {
            let segment = lattice.partition(x);
            assert_eq!(segment.offset, 0.0, "at {x}");
            let [low, high] = segment.corners_map(|p| p.offset);
            assert_eq!((low, high), (0.0, -1.0), "at {x}");
        }
        assert!(lattice.partition(f32::NAN).offset.is_nan());
        assert!(lattice.partition(f32::INFINITY).offset.is_infinite());
    }

    #[test]
    fn corners_are_offset_by_one() {
        let segment = Lattice::<Identity>::default().partition(-6.75);
        let [low, high] = segment.corners_map(|p| p);
        assert_eq!(low.rough_id, -7_i32 as u32);
        assert_eq!(high.rough_id, -6_i32 as u32);
        assert_eq!(low.offset, 0.25);
        assert_eq!(high.offset, -0.75);
        assert_eq!(segment.iter_points().count(), 2);
    }

    #[test]
    fn shared_lattice_points_share_ids() {
        let lattice = Lattice {
            hasher: PermutationTable,
        };
        for i in -300..300 {
            let left = lattice.partition(i as f32 + 0.5);
            let right = lattice.partition(i as f32 + 1.5);
            let [_, left_high] = left.corners_map(|p| p.rough_id);
            let [right_low, _] = right.corners_map(|p| p.rough_id);
            assert_eq!(left_high, right_low);
        }
    }

    #[test]
    fn with_gradient_arithmetic() {
        let mut sum = WithGradient::<f32, f32>::default();
        sum += WithGradient {
            value: 1.0,
            gradient: -2.0,
        };
        let total = (sum
            + WithGradient {
                value: 0.5,
                gradient: 4.0,
            })
            * 2.0;
        assert_eq!(
            total,
            WithGradient {
                value: 3.0,
                gradient: 4.0
            }
        );
    }
}
