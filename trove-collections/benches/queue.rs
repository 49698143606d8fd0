//! Dequeue cost for FIFO vs priority discipline.
//!
//! Run with: cargo bench -p trove-collections

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use trove_collections::{PriorityQueue, Queue, Work};

const SIZES: [usize; 3] = [16, 256, 4096];

fn bench_fifo(c: &mut Criterion) {
    let mut group = c.benchmark_group("fifo");

    for &size in &SIZES {
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::new("append_drain", size), &size, |b, &size| {
            let mut queue: Queue<u64> = Queue::with_capacity(size);
            b.iter(|| {
                for i in 0..size as u64 {
                    queue.append(i);
                }
                while let Some(v) = queue.dequeue() {
                    black_box(v);
                }
            });
        });
    }

    group.finish();
}

fn bench_priority(c: &mut Criterion) {
    let mut group = c.benchmark_group("priority");

    for &size in &SIZES {
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::new("append_drain", size), &size, |b, &size| {
            let mut queue: PriorityQueue<Work> = PriorityQueue::with_capacity(size);
            b.iter(|| {
                for i in 0..size as i64 {
                    queue.append(Work::new("job", (i * 7919) % 101));
                }
                while let Some(w) = queue.dequeue() {
                    black_box(w);
                }
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_fifo, bench_priority);
criterion_main!(benches);
