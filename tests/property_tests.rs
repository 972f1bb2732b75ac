//! Property tests: invariants that hold for any deal and any click sequence.

use proptest::prelude::*;

use memory_match::core::{Board, GameConfig, GameRng, ImageId, Phase};
use memory_match::game::{Game, Outcome};

#[derive(Clone, Debug)]
enum Step {
    Click(usize),
    Advance(u64),
    Reset,
}

fn step() -> impl Strategy<Value = Step> {
    prop_oneof![
        8 => (0usize..12).prop_map(Step::Click),
        3 => (0u64..2500).prop_map(Step::Advance),
        1 => Just(Step::Reset),
    ]
}

fn check_invariants(game: &Game) {
    let board = game.board();
    let state = game.state();

    for (index, card) in board.iter() {
        assert!(!card.matched || card.flipped, "{index} matched but face down");
    }

    let pending = board.pending();
    assert!(pending.len() <= 2, "{} cards face up unmatched", pending.len());

    let mut selection = game.selection().to_vec();
    selection.sort();
    assert_eq!(pending, selection);

    assert_eq!(board.matched_count(), state.matches as usize * 2);
    assert!(state.matches <= state.moves);
    assert_eq!(state.phase == Phase::Won, state.matches as usize == board.pair_count());
}

proptest! {
    #[test]
    fn deal_holds_every_image_twice(pairs in 1usize..20, seed in any::<u64>()) {
        let images: Vec<ImageId> = (0..pairs).map(|i| ImageId::new(format!("i{i}"))).collect();
        let board = Board::deal(&images, &mut GameRng::new(seed));

        prop_assert_eq!(board.len(), pairs * 2);
        for image in &images {
            prop_assert_eq!(board.positions_of(image).len(), 2);
        }
        prop_assert!(board.iter().all(|(_, card)| !card.flipped && !card.matched));
    }

    #[test]
    fn mismatched_image_count_is_rejected(pairs in 1usize..12, extra in 1usize..4, shorter in any::<bool>()) {
        let count = if shorter { pairs.saturating_sub(extra) } else { pairs + extra };
        let images: Vec<String> = (0..count).map(|i| format!("i{i}")).collect();
        let config = GameConfig::default().with_pair_count(pairs).with_images(images);

        prop_assert!(Game::new(config).is_err());
    }

    #[test]
    fn click_sequences_keep_invariants(seed in any::<u64>(), steps in prop::collection::vec(step(), 1..120)) {
        let mut game = Game::new(GameConfig::new(["a", "b", "c", "d", "e"]).with_seed(seed)).unwrap();
        let mut comparisons = 0u32;
        let mut equal_pairs = 0u32;
        let mut wins = 0;

        for step in steps {
            let before = *game.state();
            let selection_before = game.selection().to_vec();
            let board_before = game.snapshot();

            match step {
                Step::Click(raw) => {
                    let outcome = game.click(raw);
                    match outcome {
                        Outcome::Ignored(_) => {
                            prop_assert_eq!(*game.state(), before);
                            prop_assert_eq!(game.selection(), selection_before.as_slice());
                            prop_assert_eq!(game.snapshot(), board_before);
                        }
                        Outcome::Flipped(_) => {
                            prop_assert_eq!(game.state().moves, before.moves);
                        }
                        Outcome::Matched(first, second) => {
                            comparisons += 1;
                            equal_pairs += 1;
                            prop_assert!(game.board().same_image(first, second));
                        }
                        Outcome::Mismatched(first, second) => {
                            comparisons += 1;
                            prop_assert!(!game.board().same_image(first, second));
                            prop_assert_eq!(game.state().matches, before.matches);
                        }
                        Outcome::Won { moves, .. } => {
                            comparisons += 1;
                            equal_pairs += 1;
                            wins += 1;
                            prop_assert_eq!(moves, comparisons);
                        }
                        Outcome::Reset => unreachable!("click never resets"),
                    }
                }
                Step::Advance(ms) => {
                    game.advance(ms);
                    prop_assert_eq!(game.state().moves, before.moves);
                    prop_assert_eq!(game.state().matches, before.matches);
                    if before.phase == Phase::Won {
                        prop_assert_eq!(game.state().elapsed_seconds, before.elapsed_seconds);
                    }
                }
                Step::Reset => {
                    game.reset();
                    comparisons = 0;
                    equal_pairs = 0;
                    wins = 0;
                    prop_assert_eq!(game.state().moves, 0);
                }
            }

            prop_assert_eq!(game.state().moves, comparisons);
            prop_assert_eq!(game.state().matches, equal_pairs);
            prop_assert!(wins <= 1);
            check_invariants(&game);
        }
    }
}
