use criterion::{criterion_group, criterion_main, Criterion};
use sudoku_logic::{CandidateGrid, Sudoku};

const EASY: &str = "003020600900305001001806400008102900700000008006708200002609500800203009005010300";
const HARD: &str = "4.....8.5.3..........7......2.....6.....8.4......1.......6.3.7.5..2.....1.4......";

fn simplify_easy(c: &mut Criterion) {
    let sudoku = Sudoku::from_str_line(EASY).unwrap();
    c.bench_function("simplify_easy", |b| {
        b.iter(|| {
            let mut grid = CandidateGrid::from(&sudoku);
            grid.simplify().unwrap();
            grid
        })
    });
}

fn solve_easy(c: &mut Criterion) {
    let sudoku = Sudoku::from_str_line(EASY).unwrap();
    c.bench_function("solve_easy", |b| b.iter(|| sudoku.solve().unwrap()));
}

fn solve_hard(c: &mut Criterion) {
    let sudoku = Sudoku::from_str_line(HARD).unwrap();
    c.bench_function("solve_hard", |b| b.iter(|| sudoku.solve().unwrap()));
}

criterion_group!(benches, simplify_easy, solve_easy, solve_hard);
criterion_main!(benches);
