use super::{PERIOD, SIZE};
use criterion::{measurement::WallTime, *};
use libnoise::{Generator as _, Perlin, Simplex};

pub fn benches(c: &mut Criterion) {
    let mut group = c.benchmark_group("libnoise");
    group.warm_up_time(core::time::Duration::from_millis(500));
    group.measurement_time(core::time::Duration::from_secs(4));

    simplex(&mut group);

    group.bench_function("perlin", |bencher| {
        bencher.iter(|| {
            let noise = Perlin::<1>::new(0);
            let frequency = 1.0 / PERIOD;
            let mut res = 0.0;
            for x in 0..SIZE {
                res += noise.sample([(x as f32 * frequency) as f64]);
            }
            res
        });
    });
}

fn simplex(group: &mut BenchmarkGroup<WallTime>) {
    group.bench_function("simplex", |bencher| {
        bencher.iter(|| {
            let noise = Simplex::<1>::new(0);
            let frequency = 1.0 / PERIOD;
            let mut res = 0.0;
            for x in 0..SIZE {
                res += noise.sample([(x as f32 * frequency) as f64]);
            }
            res
        });
    });
}
