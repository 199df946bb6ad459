use super::{PERIOD, SIZE};
use criterion::{measurement::WallTime, *};
use lattice_simplex::{
    ConfigurableNoise, Noise, SampleableFor,
    cells::WithGradient,
    common_adapters::{Abs, Finite},
    evaluate_1d,
    prelude::common_noise::{MixedSimplex, PermutedSimplex, Simplex, SimplexWithDerivative},
};

#[inline]
fn bench_1d(mut noise: impl SampleableFor<f32, f32> + ConfigurableNoise) -> f32 {
    noise.set_period(PERIOD);
    let mut res = 0.0;
    for x in 0..SIZE {
        res += noise.sample(x as f32);
    }
    res
}

pub fn benches(c: &mut Criterion) {
    let mut group = c.benchmark_group("lattice_simplex");
    group.warm_up_time(core::time::Duration::from_millis(500));
    group.measurement_time(core::time::Duration::from_secs(4));

    group.bench_function("evaluate_1d", |bencher| {
        bencher.iter(|| {
            let frequency = black_box(1.0 / PERIOD);
            let mut res = 0.0;
            for x in 0..SIZE {
                res += evaluate_1d(x as f32 * frequency);
            }
            res
        });
    });

    hashed::<Simplex>(&mut group, "simplex");
    hashed::<PermutedSimplex>(&mut group, "permuted simplex");
    hashed::<MixedSimplex>(&mut group, "mixed simplex");

    group.bench_function("simplex with derivative", |bencher| {
        bencher.iter(|| {
            let mut noise = Noise::<SimplexWithDerivative>::default();
            noise.set_period(PERIOD);
            let mut res = 0.0;
            for x in 0..SIZE {
                let sample: WithGradient<f32, f32> = noise.sample(x as f32);
                res += sample.value + sample.gradient;
            }
            res
        });
    });

    group.bench_function("finite billow simplex", |bencher| {
        bencher.iter(|| {
            let mut noise = Noise::<Finite<(Simplex, Abs)>>::default();
            noise.set_period(PERIOD);
            let mut res = 0.0;
            for x in 0..SIZE {
                let sample: Option<f32> = noise.sample(x as f32);
                res += sample.unwrap_or_default();
            }
            res
        });
    });
}

fn hashed<N>(group: &mut BenchmarkGroup<WallTime>, name: &str)
where
    Noise<N>: SampleableFor<f32, f32> + ConfigurableNoise + Default,
{
    group.bench_function(name, |bencher| {
        bencher.iter(|| bench_1d(Noise::<N>::default()));
    });
}
