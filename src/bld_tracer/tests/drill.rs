use bld_tracer::{
    DrillError, ExecutionError, Letter, NotationReference, PieceClass, validate_drill,
};
use cube_core::MoveParseError;
use itertools::Itertools;

fn letters(s: &str) -> Vec<Letter> {
    s.chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| Letter::new(c).unwrap())
        .collect()
}

#[test_log::test]
fn correct_edge_memo_solves_the_edges() {
    let notation = NotationReference::new();
    let report = validate_drill(&notation, "R U", PieceClass::Edge, "a d c j v t").unwrap();

    assert_eq!(report.expected.to_string(), "a d c j v t");
    assert_eq!(report.user, letters("a d c j v t"));
    assert!(report.solved);
    assert_eq!(report.score, 100);
    assert_eq!(report.in_position().len(), 24);
    assert_eq!(report.summary(), "Score: 100% - Excellent!");
}

#[test_log::test]
fn corner_memo_leaves_twists() {
    let notation = NotationReference::new();
    let report = validate_drill(&notation, "R U", PieceClass::Corner, "D K W Q").unwrap();

    assert_eq!(report.expected.to_string(), "D K W Q");
    assert_eq!(report.score, 100);
    assert!(report.result.cycles.is_empty());
    // The UBL and UFR corners come home twisted, all three stickers reported
    assert_eq!(report.result.misoriented, letters("A C E J M R"));
    assert!(!report.solved);
    assert_eq!(report.in_position().len(), 24);
    assert!(
        report
            .suggestions()
            .iter()
            .any(|suggestion| suggestion.contains("twisted"))
    );
}

#[test_log::test]
fn partial_memo() {
    let notation = NotationReference::new();
    let report = validate_drill(&notation, "R U", PieceClass::Edge, "a d c").unwrap();

    assert!(!report.solved);
    assert_eq!(report.result.to_string(), "j v t");
    // 3 of 6 letters, 3 short
    assert_eq!(report.score, 44);
    assert_eq!(report.summary(), "Score: 44% - Needs significant practice.");
}

#[test_log::test]
fn generated_scrambles_are_solved_by_their_own_trace() {
    let notation = NotationReference::new();
    let mut scrambler = cube_core::Scrambler::with_seed(17);

    for _ in 0..10 {
        let scramble = scrambler.generate(20).to_string();
        for class in PieceClass::ALL {
            let expected = validate_drill(&notation, &scramble, class, "")
                .unwrap()
                .expected;
            let memo = expected.letters().iter().join(" ");

            let report = validate_drill(&notation, &scramble, class, &memo).unwrap();
            assert_eq!(report.score, 100, "{scramble}");
            assert!(report.result.cycles.is_empty(), "{scramble}: {class}");
        }
    }
}

#[test_log::test]
fn rejects_bad_input() {
    let notation = NotationReference::new();

    assert_eq!(
        validate_drill(&notation, "  ", PieceClass::Edge, "a"),
        Err(DrillError::EmptyScramble)
    );
    assert_eq!(
        validate_drill(&notation, "R Q", PieceClass::Edge, "a"),
        Err(DrillError::Scramble(MoveParseError::MalformedToken {
            token: "Q".to_owned()
        }))
    );
    assert_eq!(
        validate_drill(&notation, "R U", PieceClass::Edge, "a m"),
        Err(DrillError::Execution(ExecutionError::BufferLetter(
            Letter::new('m').unwrap()
        )))
    );
}
