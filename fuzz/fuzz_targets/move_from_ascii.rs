#![no_main]

use chessai::{Board, Move};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(m) = Move::from_ascii(data) {
        assert!(m.from().is_possible_move(m.to()));
        assert_eq!(m.to_string().parse::<Move>(), Ok(m));

        let board = Board::new();
        if board.is_legal(m) {
            let resolved = board.parse_move(&m.to_string()).expect("parses again");
            assert!(board.legal_moves().contains(&resolved));
        }
    }
});
