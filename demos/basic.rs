//! This example demonstrates how the noise library works from an API perspective.
//! It ends by drawing a stretch of noise in the terminal.

use lattice_simplex::{
    cells::{Lattice, Partitioner, WithGradient},
    cell_noise::{BitGradients, GradientGenerator},
    hashing::LatticeHash,
    prelude::*,
};

fn main() {
    // The free functions
    println!("Noise at 12.75: {}.", evaluate_1d(12.75));
    println!("Noise at 12.0: {}.", evaluate_1d(12.0));
    println!("Gradient of lattice point 7 at offset 0.5: {}.", gradient(7, 0.5));
    println!("Floor of -2.5: {}.", fast_floor(-2.5));

    // Lattice hashes
    for lattice in [-1, 0, 1, 300] {
        println!(
            "Lattice point {lattice} hashes to {} (identity), {} (permutation table), {} (bit mix).",
            Identity.hash_lattice(lattice),
            PermutationTable.hash_lattice(lattice),
            BitMix.hash_lattice(lattice),
        );
    }

    // Cells
    let lattice = Lattice::<Identity>::default();
    let segment = lattice.partition(-6.75);
    let [low, high] = segment.corners_map(|p| p);
    println!(
        "-6.75 is {} past lattice point {} and {} before the next one.",
        low.offset, segment.floored, -high.offset
    );
    let gradients = BitGradients::<Linear>::default();
    println!(
        "Their gradients are {} and {}.",
        gradients.get_gradient(low.rough_id),
        gradients.get_gradient(high.rough_id)
    );

    // Noise type
    let mut noise = Noise::<common_noise::Simplex>::default();
    noise.set_period(8.0);
    let _sample_for = noise.sample_for::<f32>(3.0_f32);
    let or_sample: f64 = noise.sample(3.0_f32); // f32 is still generated, but we can ask for anything that implements into, like f64.
    println!("Noise with a period of 8 at 3: {or_sample}.");

    // Derivatives
    let noise = Noise::<common_noise::SimplexWithDerivative>::default();
    let sample: WithGradient<f32, f32> = noise.sample(0.25_f32);
    println!(
        "At 0.25 the noise is {} and changing at {} per unit.",
        sample.value, sample.gradient
    );

    // Chaining and validation
    let noise = Noise::<Finite<(common_noise::MixedSimplex, SNormToUNorm)>>::default();
    println!(
        "Unorm mixed noise at 4.2: {:?}. At NaN: {:?}.",
        noise.sample_for::<Option<f32>>(4.2_f32),
        noise.sample_for::<Option<f32>>(f32::NAN)
    );

    // Dynamic noise
    // This is not inlined, so it's not recommended to do this for tight loops.
    let dyn_noise: Box<dyn DynamicSampleable<f32, f32>> =
        Box::new(Noise::<common_noise::PermutedSimplex>::default());
    println!("dyn noise sample: {}", dyn_noise.sample_dyn(-1.2));

    plot();
}

/// Draws 64 columns of noise, 4 columns per unit, with the extremes and mean underneath.
fn plot() {
    const COLUMNS: usize = 64;
    const ROWS: usize = 17;
    let mut noise = Noise::<common_noise::Simplex>::default();
    noise.set_frequency(0.25);

    let samples: Vec<f32> = (0..COLUMNS)
        .map(|x| noise.sample_for::<f32>(x as f32))
        .collect();
    for row in 0..ROWS {
        let level = 1.0 - 2.0 * row as f32 / (ROWS - 1) as f32;
        let line: String = samples
            .iter()
            .map(|sample| {
                if (sample - level).abs() <= 1.0 / (ROWS - 1) as f32 {
                    '*'
                } else if row == ROWS / 2 {
                    '-'
                } else {
                    ' '
                }
            })
            .collect();
        println!("{level:>6.2} |{line}");
    }

    let min = samples.iter().copied().fold(f32::INFINITY, f32::min);
    let max = samples.iter().copied().fold(f32::NEG_INFINITY, f32::max);
    let mean = samples.iter().sum::<f32>() / samples.len() as f32;
    println!("min {min:.4}, max {max:.4}, mean {mean:.4}");
}
