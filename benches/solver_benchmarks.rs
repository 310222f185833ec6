use criterion::{black_box, criterion_group, criterion_main, Criterion};
use novem::{
    codec,
    solver::{search::Solver, topology::Topology},
};

const EASY: &str =
    "53..7....6..195....98....6.8...6...34..8.3..17...2...6.6....28....419..5....8..79";
const HARD: &str =
    "4.....8.5.3..........7......2.....6.....8.4......1.......6.3.7.5..2.....1.4......";

fn propagation_benchmark(c: &mut Criterion) {
    let topology = Topology::standard();
    let grid = codec::parse(&topology, EASY).unwrap();
    let solver = Solver::new(topology.clone());

    c.bench_function("easy puzzle, propagation only", |b| {
        b.iter(|| {
            let (solution, _stats) = solver.solve(black_box(grid.clone()));
            assert!(solution.is_some());
        })
    });
}

fn search_benchmarks(c: &mut Criterion) {
    let topology = Topology::standard();
    let grid = codec::parse(&topology, HARD).unwrap();

    let mut group = c.benchmark_group("Hard Puzzle");
    group.sample_size(10);

    group.bench_function("minimum remaining values", |b| {
        let solver = Solver::new(topology.clone());
        b.iter(|| {
            let (solution, _stats) = solver.solve(black_box(grid.clone()));
            assert!(solution.is_some());
        })
    });

    group.bench_function("minimum remaining values + naked twins", |b| {
        let solver = Solver::new(topology.clone()).with_naked_twins(true);
        b.iter(|| {
            let (solution, _stats) = solver.solve(black_box(grid.clone()));
            assert!(solution.is_some());
        })
    });

    group.finish();
}

criterion_group!(benches, propagation_benchmark, search_benchmarks);
criterion_main!(benches);
