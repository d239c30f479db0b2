use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::rngs::StdRng;
use rand::{seq::SliceRandom, SeedableRng};
use structures_collections::{BTree, NaturalComparator};

criterion_main!(benches);
criterion_group!(benches, bench_insert, bench_find, bench_lower_bound, bench_remove);

fn shuffled(n: u32, seed: u64) -> Vec<u32> {
    let mut v: Vec<u32> = (0..n).collect();
    let mut rng = StdRng::seed_from_u64(seed);
    v.shuffle(&mut rng);
    v
}

fn bench_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("btree-insert");

    for &n in &[1_000u32, 10_000, 100_000] {
        let keys = shuffled(n, 1);
        group.throughput(Throughput::Elements(n as u64));
        group.bench_with_input(BenchmarkId::from_parameter(n), &keys, |b, keys| {
            b.iter(|| {
                let mut tree: BTree<u32, NaturalComparator> = BTree::new(64, NaturalComparator);
                for &k in keys {
                    tree.insert(k).unwrap();
                }
                tree
            });
        });
    }

    group.finish();
}

fn bench_find(c: &mut Criterion) {
    let mut group = c.benchmark_group("btree-find");

    for &n in &[1_000u32, 10_000, 100_000] {
        let mut tree: BTree<u32, NaturalComparator> = BTree::new(64, NaturalComparator);
        for k in shuffled(n, 2) {
            tree.insert(k).unwrap();
        }
        let probes = shuffled(n, 3);

        group.throughput(Throughput::Elements(n as u64));
        group.bench_with_input(BenchmarkId::from_parameter(n), &probes, |b, probes| {
            b.iter(|| {
                for &k in probes {
                    tree.find(&k).unwrap();
                }
            });
        });
    }

    group.finish();
}

fn bench_lower_bound(c: &mut Criterion) {
    let mut group = c.benchmark_group("btree-lower-bound");

    for &n in &[1_000u32, 10_000, 100_000] {
        let mut tree: BTree<u32, NaturalComparator> = BTree::new(64, NaturalComparator);
        for k in (0..n).map(|i| i * 2) {
            tree.insert(k).unwrap();
        }
        let probes = shuffled(n, 4).iter().map(|&k| k * 2 + 1).collect::<Vec<_>>();

        group.throughput(Throughput::Elements(n as u64));
        group.bench_with_input(BenchmarkId::from_parameter(n), &probes, |b, probes| {
            b.iter(|| {
                for &k in probes {
                    tree.lower_bound(&k);
                }
            });
        });
    }

    group.finish();
}

fn bench_remove(c: &mut Criterion) {
    let mut group = c.benchmark_group("btree-remove");

    for &n in &[1_000u32, 10_000, 100_000] {
        let insert_order = shuffled(n, 5);
        let remove_order = shuffled(n, 6);

        group.throughput(Throughput::Elements(n as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(n),
            &(insert_order, remove_order),
            |b, (insert_order, remove_order)| {
                b.iter(|| {
                    let mut tree: BTree<u32, NaturalComparator> =
                        BTree::new(64, NaturalComparator);
                    for &k in insert_order {
                        tree.insert(k).unwrap();
                    }
                    for &k in remove_order {
                        tree.remove(&k).unwrap();
                    }
                });
            },
        );
    }

    group.finish();
}
