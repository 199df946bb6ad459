use super::{PERIOD, SIZE};
use criterion::*;
use noise::{self as noise_rs, Perlin, Simplex};
use noise_rs::NoiseFn;

/// `noise` has no 1D generators, so these walk the line `y = 0`.
pub fn benches(c: &mut Criterion) {
    let mut group = c.benchmark_group("noise");
    group.warm_up_time(core::time::Duration::from_millis(500));
    group.measurement_time(core::time::Duration::from_secs(4));

    group.bench_function("simplex", |bencher| {
        bencher.iter(|| {
            let noise = Simplex::new(Simplex::DEFAULT_SEED);
            let frequency = 1.0 / PERIOD as f64;
            let mut res = 0.0;
            for x in 0..SIZE {
                res += noise.get([x as f64 * frequency, 0.0]);
            }
            res
        });
    });

    group.bench_function("perlin", |bencher| {
        bencher.iter(|| {
            let noise = Perlin::new(Perlin::DEFAULT_SEED);
            let frequency = 1.0 / PERIOD as f64;
            let mut res = 0.0;
            for x in 0..SIZE {
                res += noise.get([x as f64 * frequency, 0.0]);
            }
            res
        });
    });
}
