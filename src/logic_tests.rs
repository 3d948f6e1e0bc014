#[cfg(test)]
mod tests {
    use crate::core::{board_from_strings, Board, Cell, Move, Outcome, Player};
    use crate::error::Error;
    use crate::logic::{
        apply, initial_state, is_terminal, legal_moves, outcome, player_to_move, utility, winner,
    };
    use rand::rngs::StdRng;
    use rand::seq::SliceRandom;
    use rand::SeedableRng;

    fn board(rows: [&str; 3]) -> Board {
        board_from_strings(&rows).unwrap()
    }

    #[test]
    fn test_initial_state_is_empty() {
        let b = initial_state();
        assert_eq!(b.count(Cell::Empty), 9);
        assert_eq!(player_to_move(&b), Player::X);
        assert_eq!(winner(&b), None);
        assert!(!is_terminal(&b));
        assert_eq!(outcome(&b), None);
    }

    #[test]
    fn test_player_alternates_along_random_games() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..200 {
            let mut b = initial_state();
            let mut expected = Player::X;
            while !is_terminal(&b) {
                assert_eq!(player_to_move(&b), expected);
                let moves = legal_moves(&b);
                let mv = *moves.choose(&mut rng).unwrap();
                let next = apply(&b, mv).unwrap();
                assert_eq!(next.get(mv), expected.mark());
                b = next;
                expected = expected.opponent();
            }
        }
    }

    #[test]
    fn test_player_to_move_uses_counts_only() {
        assert_eq!(player_to_move(&board(["X..", "...", "..."])), Player::O);
        assert_eq!(player_to_move(&board(["X..", ".O.", "..."])), Player::X);
        assert_eq!(player_to_move(&board(["XOX", "...", "..."])), Player::O);
    }

    #[test]
    fn test_apply_does_not_mutate_input() {
        let before = board(["X..", ".O.", "..."]);
        let snapshot = before;
        let after = apply(&before, Move::new(2, 2)).unwrap();
        assert_eq!(before, snapshot);
        assert_ne!(before, after);
        assert_eq!(after.get(Move::new(2, 2)), Cell::X);
        assert_eq!(after.count(Cell::Empty), before.count(Cell::Empty) - 1);
    }

    #[test]
    fn test_apply_rejects_each_occupied_cell() {
        for row in 0..3 {
            for col in 0..3 {
                let mv = Move::new(row, col);
                let filled = initial_state().with_cell(mv, Cell::X);
                match apply(&filled, mv) {
                    Err(Error::InvalidMove { mv: rejected }) => assert_eq!(rejected, mv),
                    other => panic!("expected InvalidMove for {}, got {:?}", mv, other),
                }
            }
        }
    }

    #[test]
    fn test_apply_rejects_out_of_bounds() {
        assert!(matches!(
            apply(&initial_state(), Move::new(3, 0)),
            Err(Error::OutOfBounds { row: 3, col: 0 })
        ));
        assert!(matches!(
            Move::try_new(1, 5),
            Err(Error::OutOfBounds { row: 1, col: 5 })
        ));
        assert_eq!(Move::try_new(2, 2).unwrap(), Move::new(2, 2));
    }

    #[test]
    fn test_legal_moves_count_and_cells() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut b = initial_state();
        loop {
            let moves = legal_moves(&b);
            let filled = 9 - b.count(Cell::Empty);
            assert_eq!(moves.len(), 9 - filled);
            assert!(moves.iter().all(|&mv| b.get(mv) == Cell::Empty));
            if moves.is_empty() {
                break;
            }
            b = apply(&b, *moves.choose(&mut rng).unwrap()).unwrap();
        }
    }

    #[test]
    fn test_legal_moves_row_major() {
        let moves = legal_moves(&board(["X.O", "...", "X.O"]));
        assert_eq!(
            moves,
            vec![
                Move::new(0, 1),
                Move::new(1, 0),
                Move::new(1, 1),
                Move::new(1, 2),
                Move::new(2, 1),
            ]
        );
    }

    #[test]
    fn test_winner_lines() {
        assert_eq!(winner(&board(["XXX", "OO.", "..."])), Some(Player::X));
        assert_eq!(winner(&board(["XOX", "XO.", ".O."])), Some(Player::O));
        assert_eq!(winner(&board(["X.O", ".XO", "..X"])), Some(Player::X));
        assert_eq!(winner(&board(["X.O", "XO.", "O.X"])), Some(Player::O));
        assert_eq!(winner(&board(["XOX", "XOO", "OXX"])), None);
        assert_eq!(winner(&board(["X..", ".O.", "..."])), None);
    }

    #[test]
    fn test_winner_tie_break_first_line_wins() {
        // Two complete rows: row 0 is checked first.
        let rows = Board::from_cells([
            [Cell::X, Cell::X, Cell::X],
            [Cell::O, Cell::O, Cell::O],
            [Cell::Empty; 3],
        ]);
        assert_eq!(winner(&rows), Some(Player::X));

        let rows = Board::from_cells([
            [Cell::O, Cell::O, Cell::O],
            [Cell::Empty; 3],
            [Cell::X, Cell::X, Cell::X],
        ]);
        assert_eq!(winner(&rows), Some(Player::O));

        // Two complete columns: leftmost is checked first.
        let cols = Board::from_cells([
            [Cell::O, Cell::Empty, Cell::X],
            [Cell::O, Cell::Empty, Cell::X],
            [Cell::O, Cell::Empty, Cell::X],
        ]);
        assert_eq!(winner(&cols), Some(Player::O));
    }

    #[test]
    fn test_is_terminal_iff_winner_or_full() {
        let won = board(["XXX", "OO.", "..."]);
        let draw = board(["XOX", "XOO", "OXX"]);
        let open = board(["XO.", "...", "..."]);
        assert!(is_terminal(&won));
        assert!(is_terminal(&draw));
        assert!(!is_terminal(&open));

        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..100 {
            let mut b = initial_state();
            loop {
                assert_eq!(
                    is_terminal(&b),
                    winner(&b).is_some() || b.count(Cell::Empty) == 0
                );
                if is_terminal(&b) {
                    break;
                }
                let moves = legal_moves(&b);
                b = apply(&b, *moves.choose(&mut rng).unwrap()).unwrap();
            }
        }
    }

    #[test]
    fn test_utility_matches_outcome() {
        let x_wins = board(["XXX", "OO.", "..."]);
        let o_wins = board(["XOX", "XO.", ".OX"]);
        let draw = board(["XOX", "XOO", "OXX"]);
        assert_eq!(utility(&x_wins), 1);
        assert_eq!(utility(&o_wins), -1);
        assert_eq!(utility(&draw), 0);
        assert_eq!(outcome(&x_wins), Some(Outcome::XWins));
        assert_eq!(outcome(&o_wins), Some(Outcome::OWins));
        assert_eq!(outcome(&draw), Some(Outcome::Draw));
    }

    #[test]
    fn test_full_board_with_winner_is_a_win() {
        let b = board(["XXX", "OOX", "XOO"]);
        assert_eq!(utility(&b), 1);
    }

    #[test]
    #[should_panic(expected = "non-terminal")]
    fn test_utility_panics_on_open_board() {
        utility(&board(["X..", ".O.", "..."]));
    }
}
