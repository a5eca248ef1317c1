use conv::prelude::*;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use light_curve_feature_space::*;
use rand::prelude::*;
use rand_distr::StandardNormal;
use std::any::type_name;

fn randvec<T>(rng: &mut StdRng, n: usize) -> Vec<T>
where
    T: Float,
    StandardNormal: Distribution<T>,
{
    (0..n)
        .map(|_| {
            let x: T = rng.sample(StandardNormal);
            x.abs() + T::half()
        })
        .collect()
}

fn bench_feature_space<T>(c: &mut Criterion)
where
    T: Float,
    StandardNormal: Distribution<T>,
{
    const N: [usize; 3] = [10, 100, 1000];

    let mut rng = StdRng::seed_from_u64(0);
    let config = FeatureSpaceConfig::new().with_all_channels();
    let mut space = FeatureSpace::<T>::new(&config).unwrap();

    for &n in N.iter() {
        let t: Vec<T> = (0..n).map(|i| i.value_as::<T>().unwrap()).collect();
        let rows: Vec<Vec<T>> = (0..5).map(|_| randvec(&mut rng, n)).collect();
        c.bench_function(
            format!("FeatureSpace all channels {} {}", n, type_name::<T>()).as_str(),
            |b| {
                b.iter(|| {
                    let mut ds = DataSet::from_rows(&[
                        &rows[0][..],
                        &t[..],
                        &rows[1][..],
                        &rows[2][..],
                        &rows[3][..],
                        &rows[4][..],
                    ])
                    .unwrap();
                    space.compute(black_box(&mut ds)).unwrap();
                })
            },
        );
    }

    c.bench_function(
        format!("FeatureSpace construction {}", type_name::<T>()).as_str(),
        |b| b.iter(|| FeatureSpace::<T>::new(black_box(&config)).unwrap()),
    );
}

criterion_group!(
    benches_feature_space,
    bench_feature_space<f32>,
    bench_feature_space<f64>
);
criterion_main!(benches_feature_space);
