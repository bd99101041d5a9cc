//! Executing a memorized letter sequence with Old Pochmann.
//!
//! Every letter is shot to the target position by a setup, swapped with the
//! buffer by the class's swap algorithm, and the setup is undone. The target
//! itself needs no setup.

use std::sync::LazyLock;

use cube_core::{Algorithm, MoveParseError};
use log::debug;
use thiserror::Error;

use crate::{Letter, NotationError, NotationReference, PieceClass};

/// T perm: swaps the buffer edge `b` with `d`.
pub const EDGE_SWAP: &str = "R U R' U' R' F R2 U' R' U' R U R' F'";

/// Y perm conjugated by F: swaps the buffer corner `A` with `P`.
pub const CORNER_SWAP: &str = "R U' R' U' R U R' F' R U R' U' R' F R";

const EDGE_SETUPS: [(char, &str); 22] = [
    ('a', "Lw2 D' L2"),
    ('c', "Lw2 D L2"),
    ('d', ""),
    ('e', "L' Dw L'"),
    ('f', "Dw' L"),
    ('g', "L Dw L'"),
    ('h', "Dw L'"),
    ('i', "Lw D' L2"),
    ('j', "Dw2 L"),
    ('k', "Lw D L2"),
    ('l', "L'"),
    ('n', "Dw L"),
    ('o', "D' Lw D L2"),
    ('p', "Dw' L'"),
    ('q', "Lw' D L2"),
    ('r', "L"),
    ('s', "Lw' D' L2"),
    ('t', "Dw2 L'"),
    ('u', "D' L2"),
    ('v', "D2 L2"),
    ('w', "D L2"),
    ('x', "L2"),
];

const CORNER_SETUPS: [(char, &str); 21] = [
    ('B', "R D'"),
    ('C', "F"),
    ('D', "F R'"),
    ('F', "F2"),
    ('G', "D2 R"),
    ('H', "D2"),
    ('I', "F' D"),
    ('J', "F2 D"),
    ('K', "D R"),
    ('L', "D"),
    ('M', "R'"),
    ('N', "R2"),
    ('O', "R"),
    ('P', ""),
    ('Q', "R' F"),
    ('S', "D' R"),
    ('T', "D'"),
    ('U', "F'"),
    ('V', "D' F'"),
    ('W', "D2 F'"),
    ('X', "D F'"),
];

static SWAPS: LazyLock<[Algorithm; 2]> = LazyLock::new(|| {
    [EDGE_SWAP, CORNER_SWAP].map(|swap| swap.parse().expect("swap algorithms are well formed"))
});

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExecutionError {
    #[error("`{0}` is a sticker of the buffer piece and cannot be shot to")]
    BufferLetter(Letter),
    #[error("No setup moves are known for `{0}`")]
    NoSetup(Letter),
    #[error("`{letter}` is not one of the {class} letters")]
    WrongClass { letter: Letter, class: PieceClass },
    #[error(transparent)]
    Notation(#[from] NotationError),
    #[error(transparent)]
    Parse(#[from] MoveParseError),
}

/// The swap algorithm of a piece class.
pub fn swap_algorithm(class: PieceClass) -> &'static Algorithm {
    &SWAPS[class as usize]
}

/// Reads a letter sequence. Whitespace between letters is optional.
pub fn parse_letters(text: &str) -> Result<Vec<Letter>, NotationError> {
    text.chars()
        .filter(|c| !c.is_whitespace())
        .map(Letter::new)
        .collect()
}

pub struct Executor<'a> {
    notation: &'a NotationReference,
}

impl<'a> Executor<'a> {
    pub fn new(notation: &'a NotationReference) -> Executor<'a> {
        Executor { notation }
    }

    /// The moves that bring `letter` to the class's target position.
    pub fn setup(&self, letter: Letter) -> Result<Algorithm, ExecutionError> {
        let class = letter.class();
        let table: &[(char, &str)] = match class {
            PieceClass::Edge => &EDGE_SETUPS,
            PieceClass::Corner => &CORNER_SETUPS,
        };

        match table.iter().find(|(c, _)| *c == letter.as_char()) {
            Some((_, setup)) => Ok(setup.parse()?),
            None if self.notation.same_piece(letter, class.buffer()) => {
                Err(ExecutionError::BufferLetter(letter))
            }
            None => Err(ExecutionError::NoSetup(letter)),
        }
    }

    /// Setup, swap, undo setup.
    pub fn letter_algorithm(&self, letter: Letter) -> Result<Algorithm, ExecutionError> {
        let setup = self.setup(letter)?;

        let mut algorithm = setup.clone();
        algorithm.extend(swap_algorithm(letter.class()).moves().iter().copied());
        algorithm.extend(setup.inverse().moves().iter().copied());

        Ok(algorithm)
    }

    /// Everything a solver executes for `letters`, in order.
    ///
    /// # Errors
    ///
    /// If any letter is outside `class`, is on the buffer piece, or has no
    /// setup. Nothing is returned for the letters before it.
    pub fn execution_algorithm(
        &self,
        class: PieceClass,
        letters: &[Letter],
    ) -> Result<Algorithm, ExecutionError> {
        let mut algorithm = Algorithm::default();
        for &letter in letters {
            if letter.class() != class {
                return Err(ExecutionError::WrongClass { letter, class });
            }
            algorithm.extend(self.letter_algorithm(letter)?.moves().iter().copied());
        }

        debug!(
            "Executing {} {class} letters takes {} moves",
            letters.len(),
            algorithm.len()
        );

        Ok(algorithm)
    }
}
