use iai::black_box;
use chessai::{catalog, perft, Board, Color, Move};

const ITALIAN: [&str; 10] = [
    "e2-e4", "e7-e5", "g1-f3", "b8-c6", "f1-c4", "f8-c5", "e1-g1", "g8-f6", "d2-d3", "e8-g8",
];

fn italian() -> Board {
    let mut board = Board::new();
    for s in ITALIAN {
        let m = board.parse_move(s).expect("valid notation");
        board.make_move(m, None).expect("legal move");
    }
    board
}

fn bench_shallow_perft() {
    let mut board = Board::new();
    assert_eq!(black_box(perft(black_box(&mut board), 4)), 197_281);
}

fn bench_deep_perft() {
    // No en passant, so the 258 en passant captures at this depth are missing.
    let mut board = Board::new();
    assert_eq!(perft(black_box(&mut board), 5), 4_865_351);
}

fn bench_generate_moves() -> usize {
    let board = black_box(italian());
    board.possible_moves(Color::White).len() + board.possible_moves(Color::Black).len()
}

fn bench_legal_moves() -> usize {
    black_box(italian()).legal_moves().len()
}

fn bench_is_possible_catalog() -> usize {
    let board = black_box(italian());
    catalog::moves().filter(|&m| board.is_possible(m)).count()
}

fn bench_play_and_undo() -> Board {
    let mut board = black_box(italian());
    let m: Move = "c4-f7".parse().expect("valid notation");
    board.make_move_unchecked(m, None);
    board.undo();
    board
}

iai::main!(
    bench_shallow_perft,
    bench_deep_perft,
    bench_generate_moves,
    bench_legal_moves,
    bench_is_possible_catalog,
    bench_play_and_undo,
);
