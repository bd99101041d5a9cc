use cube_core::{Algorithm, CubeState, MoveTarget, Scrambler};
use itertools::Itertools;

#[test_log::test]
fn never_turns_a_face_twice_in_a_row() {
    for seed in 0..50 {
        let scramble = Scrambler::with_seed(seed).generate(Scrambler::DEFAULT_LENGTH);
        assert_eq!(scramble.len(), Scrambler::DEFAULT_LENGTH);

        for (a, b) in scramble.moves().iter().tuple_windows() {
            assert_ne!(a.target, b.target, "{scramble}");
        }
    }
}

#[test_log::test]
fn only_outer_face_turns() {
    let scramble = Scrambler::with_seed(1).generate(200);
    assert!(
        scramble
            .moves()
            .iter()
            .all(|move_| matches!(move_.target, MoveTarget::Face(_)))
    );
}

#[test_log::test]
fn zero_length_is_empty() {
    let scramble = Scrambler::new().generate(0);
    assert!(scramble.is_empty());
    assert_eq!(scramble.to_string(), "");
}

#[test_log::test]
fn text_form_parses_back() {
    let scramble = Scrambler::with_seed(21).generate(25);
    let text = scramble.to_string();
    assert_eq!(text.split(' ').count(), 25);

    let parsed: Algorithm = text.parse().unwrap();
    assert_eq!(parsed, scramble);
    assert_eq!(CubeState::scrambled(&parsed).color_counts(), [9; 6]);
}
