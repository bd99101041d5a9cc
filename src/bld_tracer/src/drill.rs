use cube_core::{Algorithm, Color, CubeState, MoveParseError};
use itertools::Itertools;
use log::{debug, info};
use thiserror::Error;

use crate::{
    ExecutionError, Executor, Letter, NotationError, NotationReference, PermutationTrace,
    PieceClass, Tracer, execution::parse_letters,
};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DrillError {
    #[error("The scramble is empty")]
    EmptyScramble,
    #[error(transparent)]
    Scramble(#[from] MoveParseError),
    #[error(transparent)]
    Notation(#[from] NotationError),
    #[error(transparent)]
    Execution(#[from] ExecutionError),
}

/// How a memorized sequence held up when executed on the scramble.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DrillReport {
    pub class: PieceClass,
    /// What the scramble traces to.
    pub expected: PermutationTrace,
    pub user: Vec<Letter>,
    /// The scramble traced again after executing `user`.
    pub result: PermutationTrace,
    /// Whether every piece of the class ended up home and oriented.
    pub solved: bool,
    pub score: u8,
}

impl DrillReport {
    /// Letters whose piece ended up home, oriented or not.
    pub fn in_position(&self) -> Vec<Letter> {
        self.result
            .placed
            .iter()
            .chain(&self.result.misoriented)
            .copied()
            .sorted()
            .collect()
    }

    pub fn summary(&self) -> String {
        let band = match self.score {
            90.. => "Excellent!",
            70.. => "Good job!",
            50.. => "Needs improvement.",
            _ => "Needs significant practice.",
        };
        format!("Score: {}% - {band}", self.score)
    }

    pub fn suggestions(&self) -> Vec<String> {
        let mut suggestions = vec![];
        let (noun, wrong) = match self.class {
            PieceClass::Edge => ("edges", "flipped"),
            PieceClass::Corner => ("corners", "twisted"),
        };

        if self.score < 100 && !self.result.cycles.is_empty() {
            suggestions.push(format!(
                "Focus on getting all {noun} in their correct positions"
            ));
        }
        if !self.result.misoriented.is_empty() {
            suggestions.push(format!(
                "Pay attention to orientation, some {noun} are {wrong}"
            ));
        }
        if self.score >= 90 {
            suggestions.push("Great work! Try more complex scrambles to improve further".to_owned());
        }

        suggestions
    }
}

/// Positional letter matches as a percentage of the expected length, less a
/// penalty for every letter of length difference.
pub fn sequence_score(class: PieceClass, expected: &[Letter], user: &[Letter]) -> u8 {
    match (expected.is_empty(), user.is_empty()) {
        (true, true) => return 100,
        (true, false) | (false, true) => return 0,
        (false, false) => {}
    }

    let (per_letter, cap) = match class {
        PieceClass::Edge => (2, 10),
        PieceClass::Corner => (5, 20),
    };

    let matches = expected.iter().zip(user).filter(|(a, b)| a == b).count();
    let penalty = (expected.len().abs_diff(user.len()) * per_letter).min(cap);

    #[allow(clippy::cast_precision_loss)]
    let score = matches as f64 / expected.len() as f64 * 100.0 - penalty as f64;

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let score = score.max(0.0).round() as u8;
    score
}

/// Traces `scramble`, executes the user's letters on it and reports how
/// close they came.
pub fn validate_drill(
    notation: &NotationReference,
    scramble: &str,
    class: PieceClass,
    user_sequence: &str,
) -> Result<DrillReport, DrillError> {
    let scramble: Algorithm = scramble.parse()?;
    if scramble.is_empty() {
        return Err(DrillError::EmptyScramble);
    }
    let user = parse_letters(user_sequence)?;

    let tracer = Tracer::new(notation);
    let mut state = CubeState::scrambled(&scramble);
    let expected = tracer.trace_class(&state, class)?;

    state.apply_algorithm(&Executor::new(notation).execution_algorithm(class, &user)?);
    let result = tracer.trace_class(&state, class)?;

    let score = sequence_score(class, &expected.letters(), &user);
    info!("Drill on {class}: expected `{expected}`, scored {score}");

    Ok(DrillReport {
        class,
        solved: result.is_solved(),
        expected,
        user,
        result,
        score,
    })
}

/// The outcome of naming the letter of a sticker combination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnswerCheck {
    pub correct: bool,
    pub expected: Letter,
}

/// Compares an answer with the letter whose solved colors are `colors`.
/// Surrounding whitespace and case are ignored, since the number of colors
/// already decides between edges and corners.
pub fn check_answer(
    notation: &NotationReference,
    colors: &[Color],
    answer: &str,
) -> Result<AnswerCheck, NotationError> {
    let expected = notation.letter_for_colors(colors)?;
    let answer = answer.trim();
    let correct = answer.len() == 1
        && answer
            .chars()
            .all(|c| c.eq_ignore_ascii_case(&expected.as_char()));

    debug!("Answer `{answer}` for {expected}: {correct}");

    Ok(AnswerCheck { correct, expected })
}

/// All letters of a class in a uniformly random order.
pub fn shuffled_letters(class: PieceClass, rng: &mut fastrand::Rng) -> Vec<Letter> {
    let mut letters = class.letters().collect_vec();
    rng.shuffle(&mut letters);
    letters
}

#[cfg(test)]
mod tests {
    use super::*;

    fn letters(s: &str) -> Vec<Letter> {
        parse_letters(s).unwrap()
    }

    #[test]
    fn scores() {
        let edge = PieceClass::Edge;
        assert_eq!(sequence_score(edge, &[], &[]), 100);
        assert_eq!(sequence_score(edge, &letters("a"), &[]), 0);
        assert_eq!(sequence_score(edge, &[], &letters("a")), 0);
        assert_eq!(sequence_score(edge, &letters("a c e"), &letters("a c e")), 100);
        // 2 of 3 matched, one letter short
        assert_eq!(sequence_score(edge, &letters("a c e"), &letters("a c")), 65);
        assert_eq!(sequence_score(edge, &letters("a c"), &letters("c a")), 0);
        // Penalty is capped
        assert_eq!(
            sequence_score(edge, &letters("a"), &letters("a c d e f g h i j")),
            90
        );
        assert_eq!(
            sequence_score(PieceClass::Corner, &letters("B C D"), &letters("B C")),
            62
        );
    }

    fn report(score: u8) -> DrillReport {
        let trace = PermutationTrace {
            class: PieceClass::Edge,
            cycles: vec![],
            misoriented: vec![],
            placed: vec![],
        };
        DrillReport {
            class: PieceClass::Edge,
            expected: trace.clone(),
            user: vec![],
            result: trace,
            solved: true,
            score,
        }
    }

    #[test]
    fn summary_bands() {
        assert_eq!(report(100).summary(), "Score: 100% - Excellent!");
        assert_eq!(report(90).summary(), "Score: 90% - Excellent!");
        assert_eq!(report(89).summary(), "Score: 89% - Good job!");
        assert_eq!(report(50).summary(), "Score: 50% - Needs improvement.");
        assert_eq!(report(0).summary(), "Score: 0% - Needs significant practice.");
    }

    #[test]
    fn orientation_feedback_regardless_of_score() {
        let mut perfect = report(100);
        perfect.result.misoriented = letters("a q");
        perfect.solved = false;
        let suggestions = perfect.suggestions();
        assert!(suggestions.iter().any(|line| line.contains("flipped")));
        assert!(!suggestions.iter().any(|line| line.contains("positions")));

        assert!(
            !report(100)
                .suggestions()
                .iter()
                .any(|line| line.contains("flipped"))
        );
    }

    #[test]
    fn answers() {
        let notation = NotationReference::new();
        let check = check_answer(&notation, &[Color::Green, Color::Red], " j ").unwrap();
        assert!(check.correct);
        assert_eq!(check.expected, Letter::new('j').unwrap());

        let check = check_answer(&notation, &[Color::Green, Color::Red], "p").unwrap();
        assert!(!check.correct);

        let check =
            check_answer(&notation, &[Color::White, Color::Red, Color::Green], "c").unwrap();
        assert!(check.correct);

        assert!(check_answer(&notation, &[Color::Red, Color::Orange], "a").is_err());
    }

    #[test]
    fn shuffles_are_permutations() {
        let mut rng = fastrand::Rng::with_seed(4);
        let shuffled = shuffled_letters(PieceClass::Corner, &mut rng);
        assert_eq!(shuffled.len(), 24);
        assert_eq!(
            shuffled.iter().copied().sorted().collect_vec(),
            PieceClass::Corner.letters().collect_vec()
        );
    }
}
