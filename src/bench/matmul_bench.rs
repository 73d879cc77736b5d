use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use matmul_loops::{LoopOrder, multiply, random_matrix};

fn loop_orders(c: &mut Criterion) {
    let mut group = c.benchmark_group("loop_order");
    group.sample_size(10);

    for n in [64usize, 128, 256] {
        let a = random_matrix(n, 0, true);
        let b = random_matrix(n, 1, true);
        group.throughput(Throughput::Elements((2 * n * n * n) as u64));

        for order in LoopOrder::ALL {
            group.bench_with_input(BenchmarkId::new(order.as_str(), n), &n, |bench, _| {
                bench.iter(|| multiply(black_box(&a), black_box(&b), order))
            });
        }
    }

    group.finish();
}

criterion_group!(benches, loop_orders);
criterion_main!(benches);
