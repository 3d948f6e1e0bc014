#[cfg(test)]
mod tests {
    use crate::core::{board_from_strings, Board, Move, Player};
    use crate::error::Error;
    use crate::logic::{apply, initial_state, is_terminal, legal_moves, player_to_move, utility};
    use crate::player::ai::{
        best_move, best_move_parallel, max_value, min_value, CachedSearch, MinimaxAI,
    };
    use crate::player::ai::config::SearchConfig;
    use crate::player::ai::minimax::successors;
    use crate::player::PlayerController;
    use rand::rngs::StdRng;
    use rand::seq::SliceRandom;
    use rand::SeedableRng;

    fn board(rows: [&str; 3]) -> Board {
        board_from_strings(&rows).unwrap()
    }

    /// Random boards after a few opening moves, cheap enough to search repeatedly.
    fn sample_positions(seed: u64, count: usize) -> Vec<Board> {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut positions = Vec::new();
        while positions.len() < count {
            let mut b = initial_state();
            let plies = 2 + positions.len() % 5;
            for _ in 0..plies {
                if is_terminal(&b) {
                    break;
                }
                let moves = legal_moves(&b);
                b = apply(&b, *moves.choose(&mut rng).unwrap()).unwrap();
            }
            if !is_terminal(&b) {
                positions.push(b);
            }
        }
        positions
    }

    #[test]
    fn test_successors_agree_with_apply() {
        let mut positions = sample_positions(21, 15);
        positions.push(initial_state());
        positions.push(board(["XX.", "OO.", "X.."]));
        for b in positions {
            let children: Vec<(Move, Board)> = successors(&b).collect();
            assert_eq!(children.len(), legal_moves(&b).len());
            for (mv, child) in children {
                assert_eq!(child, apply(&b, mv).unwrap(), "{} {}", b, mv);
            }
        }
    }

    #[test]
    fn test_takes_immediate_win() {
        let b = board(["XX.", "OO.", "..."]);
        assert_eq!(player_to_move(&b), Player::X);
        assert_eq!(best_move(&b).unwrap(), Move::new(0, 2));
    }

    #[test]
    fn test_blocks_opponent_threat() {
        // X threatens the top row; O must take (0, 2).
        let b = board(["XX.", ".O.", "..."]);
        assert_eq!(player_to_move(&b), Player::O);
        assert_eq!(best_move(&b).unwrap(), Move::new(0, 2));
    }

    #[test]
    fn test_prefers_own_win_over_block() {
        let b = board(["XX.", "OO.", "X.."]);
        assert_eq!(player_to_move(&b), Player::O);
        assert_eq!(best_move(&b).unwrap(), Move::new(1, 2));
    }

    #[test]
    fn test_perfect_play_is_a_draw() {
        let mut b = initial_state();
        let mut plies = 0;
        while !is_terminal(&b) {
            let mv = best_move(&b).unwrap();
            b = apply(&b, mv).unwrap();
            plies += 1;
        }
        assert_eq!(plies, 9);
        assert_eq!(utility(&b), 0);
    }

    #[test]
    fn test_empty_board_value_and_tie_break() {
        let b = initial_state();
        assert_eq!(max_value(&b), 0);
        // Every opening draws, so the first candidate in row-major order is kept.
        assert_eq!(best_move(&b).unwrap(), Move::new(0, 0));
    }

    #[test]
    fn test_value_functions_on_terminal_boards() {
        let x_won = board(["XXX", "OO.", "..."]);
        assert_eq!(max_value(&x_won), 1);
        assert_eq!(min_value(&x_won), 1);
        let draw = board(["XOX", "XOO", "OXX"]);
        assert_eq!(max_value(&draw), 0);
        assert_eq!(min_value(&draw), 0);
    }

    #[test]
    fn test_no_legal_move_on_finished_boards() {
        let won = board(["XXX", "OO.", "..."]);
        let full = board(["XOX", "XOO", "OXX"]);
        assert!(matches!(best_move(&won), Err(Error::NoLegalMove)));
        assert!(matches!(best_move(&full), Err(Error::NoLegalMove)));
        assert!(matches!(best_move_parallel(&full), Err(Error::NoLegalMove)));
        assert!(matches!(
            CachedSearch::new().best_move(&won),
            Err(Error::NoLegalMove)
        ));
    }

    #[test]
    fn test_parallel_matches_sequential() {
        for b in sample_positions(11, 20) {
            assert_eq!(best_move_parallel(&b).unwrap(), best_move(&b).unwrap(), "{}", b);
        }
    }

    #[test]
    fn test_cached_search_matches_plain_search() {
        let mut cached = CachedSearch::new();
        for b in sample_positions(5, 30) {
            assert_eq!(cached.best_move(&b).unwrap(), best_move(&b).unwrap(), "{}", b);
            let expected = match player_to_move(&b) {
                Player::X => max_value(&b),
                Player::O => min_value(&b),
            };
            assert_eq!(cached.value(&b), expected, "{}", b);
        }
        assert!(cached.table().hits() > 0);
        assert!(!cached.table().is_empty());
    }

    #[test]
    fn test_cached_search_from_empty_board() {
        let mut cached = CachedSearch::new();
        assert_eq!(cached.value(&initial_state()), 0);
        assert_eq!(cached.best_move(&initial_state()).unwrap(), Move::new(0, 0));
        // Non-terminal boards reachable from the start.
        assert_eq!(cached.table().len(), 4520);
    }

    #[test]
    fn test_best_move_never_loses_to_any_reply() {
        // O plays optimally against every X reply from a fixed opening.
        fn explore(b: Board, ai: Player) {
            if is_terminal(&b) {
                let u = utility(&b);
                match ai {
                    Player::X => assert!(u >= 0, "{}", b),
                    Player::O => assert!(u <= 0, "{}", b),
                }
                return;
            }
            if player_to_move(&b) == ai {
                let mv = best_move(&b).unwrap();
                explore(apply(&b, mv).unwrap(), ai);
            } else {
                for mv in legal_moves(&b) {
                    explore(apply(&b, mv).unwrap(), ai);
                }
            }
        }
        explore(board(["X..", "...", "..."]), Player::O);
        explore(board(["X..", ".O.", "..."]), Player::X);
    }

    #[test]
    fn test_minimax_ai_controller() {
        let b = board(["XX.", "OO.", "..."]);
        let moves = legal_moves(&b);
        for search in [
            SearchConfig { parallel: false, cache: false },
            SearchConfig { parallel: true, cache: false },
            SearchConfig { parallel: false, cache: true },
        ] {
            let ai = MinimaxAI::with_config("Minimax", search);
            assert_eq!(ai.choose_move(&b, &moves), Some(Move::new(0, 2)));
        }
        let ai = MinimaxAI::new("Minimax");
        assert_eq!(ai.choose_move(&board(["XXX", "OO.", "..."]), &[]), None);
        assert_eq!(ai.name(), "Minimax");
    }
}
