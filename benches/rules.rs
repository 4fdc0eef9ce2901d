use chess_rules::{Algorithm, Board, Color, FirstLegalMove, KingProbe, Piece, PieceType, Square};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn back_rank_mate() -> Board {
    let mut board = Board::empty();
    for (row, col, piece) in [
        (0, 0, Piece::new(Color::Black, PieceType::King)),
        (0, 7, Piece::new(Color::White, PieceType::Rook)),
        (2, 1, Piece::new(Color::White, PieceType::King)),
    ] {
        board.set(Square::new(row, col).unwrap(), piece);
    }
    board
}

fn rules_benchmark(c: &mut Criterion) {
    c.bench_function("legal moves start", |b| {
        b.iter(|| black_box(Board::default()).legal_moves(Color::White))
    });
    c.bench_function("safe moves start", |b| {
        b.iter(|| black_box(Board::default()).safe_moves(Color::White))
    });
    c.bench_function("in check scan", |b| {
        let board = Board::default();
        b.iter(|| black_box(&board).is_in_check(7, 4, Color::White))
    });
    c.bench_function("first legal move", |b| {
        let board = Board::default();
        b.iter(|| FirstLegalMove.solve(black_box(&board), Color::Black))
    });
}

fn terminal_benchmark(c: &mut Criterion) {
    let values: [(&str, Board, Color); 2] = [
        ("terminal start", Board::default(), Color::White),
        ("terminal back rank", back_rank_mate(), Color::Black),
    ];
    for (id, setup, color) in values.into_iter() {
        c.bench_function(&format!("{} - king square", id), |b| {
            let mut board = setup.clone();
            b.iter(|| black_box(&mut board).has_no_escape(color, KingProbe::KingSquare))
        });
        c.bench_function(&format!("{} - mover origin", id), |b| {
            let mut board = setup.clone();
            b.iter(|| black_box(&mut board).has_no_escape(color, KingProbe::MoverOrigin))
        });
    }
}

criterion_group!(benches, rules_benchmark, terminal_benchmark);
criterion_main!(benches);
