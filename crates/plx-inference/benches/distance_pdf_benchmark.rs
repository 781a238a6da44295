use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use plx_inference::{DistancePdfConfig, PriorKind, build_distance_pdf};
use std::hint::black_box;

fn make_sources(m: usize) -> (Vec<f64>, Vec<f64>) {
    let pis: Vec<f64> = (0..m).map(|j| 0.05 + 4.95 * (j as f64) / (m.max(2) - 1) as f64).collect();
    let sigmas = pis.iter().map(|&pi| 0.02 + 0.1 * pi).collect();
    (pis, sigmas)
}

fn bench_single_source(c: &mut Criterion) {
    let mut group = c.benchmark_group("distance_pdf/single/resolution");
    for n in [1_000usize, 10_000, 100_000] {
        let config = DistancePdfConfig::default().with_resolution(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &config, |b, cfg| {
            b.iter(|| black_box(build_distance_pdf(0.5, 0.05, cfg).unwrap()))
        });
    }
    group.finish();
}

fn bench_many_sources(c: &mut Criterion) {
    let mut group = c.benchmark_group("distance_pdf/batch_10k/n_sources");
    for m in [1usize, 16, 256] {
        let (pis, sigmas) = make_sources(m);
        for kind in PriorKind::ALL {
            let config = DistancePdfConfig::default().with_prior(kind);
            group.bench_with_input(BenchmarkId::new(kind.as_str(), m), &m, |b, _| {
                b.iter(|| {
                    black_box(build_distance_pdf(pis.clone(), sigmas.clone(), &config).unwrap())
                })
            });
        }
    }
    group.finish();
}

criterion_group!(benches, bench_single_source, bench_many_sources);
criterion_main!(benches);
