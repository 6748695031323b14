use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;

use gravstm::prelude::*;

fn criterion_benchmark(c: &mut Criterion) {
    let selector = DegreeSelector::default();
    let position = DVec3::new(6900.0, 1100.0, -2100.0);

    c.bench_function("select_degree", |b| {
        b.iter(|| {
            let p = black_box(position);
            selector.select(p, black_box(1e-9));
        })
    });

    let field = ZonalJ2::earth();

    c.bench_function("central_difference_gradient", |b| {
        b.iter(|| {
            let p = black_box(position);
            central_difference_gradient(&field, p, 12, DEFAULT_STEP)
        })
    });

    let rows = uniform_state_block(PV::new(position, (0.1, 7.4, 1.0)));

    c.bench_function("build_gravity_jacobian", |b| {
        b.iter(|| build_gravity_jacobian(black_box(&rows), 12, &field, DEFAULT_STEP))
    });

    c.bench_function("build_gravity_jacobian_par", |b| {
        b.iter(|| build_gravity_jacobian_par(black_box(&rows), 12, &field, DEFAULT_STEP))
    });

    let kernel = VariationalKernel::new(ZonalJ2::earth(), KernelConfig::default());
    let mut buffer = vec![0.0; PACKED_LEN];

    if let Ok(kernel) = kernel {
        c.bench_function("write_gradients", |b| {
            b.iter(|| kernel.write_gradients(black_box(&rows), &mut buffer))
        });
    }
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
