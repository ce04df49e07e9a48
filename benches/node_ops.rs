use criterion::{criterion_group, criterion_main, Criterion, Throughput};
use ebony::red_black::{NodeArena, Node, NodeRef, NodeRefMut, Color};
use std::time::{Duration, Instant};

fn chain_arena(length: u64) -> (NodeArena<u64, u64>, usize) {
    let mut arena = NodeArena::new();
    let mut curr = arena.insert_root(Node::new(0, 0));
    for key in 1..length {
        let mut tip = NodeRefMut::new_raw(&mut arena, curr).expect("the chain tip is live");
        curr = tip
            .attach_right(Node::new(key, key))
            .expect("the chain tip has no right child");
    }
    (arena, curr)
}

pub fn attach(c: &mut Criterion) {
    let mut group = c.benchmark_group("modification");
    group.throughput(Throughput::Elements(1));
    group.bench_function("attach_chain", |b| {
        let mut arena = NodeArena::<u64, u64>::new();
        let mut curr = arena.insert_root(Node::new(0, 0));
        let mut key = 1u64;
        b.iter(|| {
            let mut tip = NodeRefMut::new_raw(&mut arena, curr).expect("the chain tip is live");
            curr = tip
                .attach_right(Node::new(key, key).with_color(Color::Red))
                .expect("the chain tip has no right child");
            key += 1;
        })
    });
    group.finish();
}

pub fn navigation(c: &mut Criterion) {
    let (arena, deepest) = chain_arena(1024);
    let mut group = c.benchmark_group("navigation");
    group.bench_function("ascend_1024", |b| {
        let node = NodeRef::new_raw(&arena, deepest).expect("the chain tip is live");
        b.iter(|| node.ascend(1023).expect("the chain is 1024 nodes deep"))
    });
    group.bench_function("depth_1024", |b| {
        let node = NodeRef::new_raw(&arena, deepest).expect("the chain tip is live");
        b.iter(|| node.depth())
    });
    group.finish();
}

pub fn removal(c: &mut Criterion) {
    let mut group = c.benchmark_group("modification");
    group.throughput(Throughput::Elements(64));
    group.bench_function("remove_subtree_64", |b| {
        b.iter_custom(|iters| {
            let mut total = Duration::new(0, 0);
            for _ in 0..iters {
                let (mut arena, _) = chain_arena(64);
                let root = arena.root_mut().expect("the chain has a root");
                let start = Instant::now();
                root.remove_subtree();
                total += start.elapsed();
            }
            total
        })
    });
    group.finish();
}

criterion_group!(benches, attach, navigation, removal);
criterion_main!(benches);
