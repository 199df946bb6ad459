use super::{PERIOD, SIZE};
use criterion::{measurement::WallTime, *};
use fastnoise_lite::{FastNoiseLite, NoiseType};

/// `fastnoise-lite` has no 1D generators, so these walk the line `y = 0`.
pub fn benches(c: &mut Criterion) {
    let mut group = c.benchmark_group("fastnoise-lite");
    group.warm_up_time(core::time::Duration::from_millis(500));
    group.measurement_time(core::time::Duration::from_secs(4));

    single(&mut group, "open simplex 2", NoiseType::OpenSimplex2);
    single(&mut group, "perlin", NoiseType::Perlin);
}

fn single(group: &mut BenchmarkGroup<WallTime>, name: &str, noise_type: NoiseType) {
    group.bench_function(name, |bencher| {
        bencher.iter(|| {
            let mut noise = FastNoiseLite::new();
            noise.set_noise_type(Some(noise_type));
            noise.set_fractal_type(None);
            noise.frequency = 1.0 / PERIOD;
            noise.octaves = 1;
            let mut res = 0.0;
            for x in 0..SIZE {
                res += noise.get_noise_2d(x as f32, 0.0);
            }
            res
        });
    });
}
