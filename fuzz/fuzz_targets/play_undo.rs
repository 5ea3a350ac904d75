#![no_main]

use chessai::{Board, Role};
use libfuzzer_sys::fuzz_target;

const PROMOTIONS: [Option<Role>; 5] = [
    None,
    Some(Role::Knight),
    Some(Role::Bishop),
    Some(Role::Rook),
    Some(Role::Queen),
];

fuzz_target!(|data: &[u8]| {
    let mut board = Board::new();
    let mut snapshots = Vec::new();

    for &byte in data {
        let moves = board.legal_moves();
        if moves.is_empty() {
            break;
        }
        let m = moves[usize::from(byte) % moves.len()];
        let promotion = PROMOTIONS[usize::from(byte) % PROMOTIONS.len()];

        assert!(board.possible_moves(board.turn()).contains(&m));
        snapshots.push(board.clone());
        board.make_move(m, promotion).expect("legal move");
        assert!(!board.in_check(!board.turn()));
    }

    while let Some(snapshot) = snapshots.pop() {
        assert!(board.undo().is_some());
        assert_eq!(board, snapshot);
    }
    assert_eq!(board.undo(), None);
});
