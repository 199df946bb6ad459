//! Benches this noise lib compared to others.
#![expect(
    missing_docs,
    reason = "Its a benchmark and cirterion macros don't add docs."
)]

mod fastnoise_lite;
mod lattice_simplex;
mod libnoise;
mod noise;

use criterion::*;

criterion_main!(benches);
criterion_group!(
    benches,
    lattice_simplex::benches,
    libnoise::benches,
    noise::benches,
    fastnoise_lite::benches
);

/// How many points each bench samples along the line.
const SIZE: u32 = 1 << 20;
/// The period every bench samples at.
const PERIOD: f32 = 32.0;
