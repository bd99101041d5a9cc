//! Turns a cube state into the letter sequence memorized for a blindfolded
//! solve.
//!
//! For every letter, the locator tells us whose sticker now sits there. That
//! map is walked as disjoint cycles, starting at the buffer and then at the
//! alphabetically first letter not yet accounted for. A walk stops as soon as
//! it returns to any sticker of a piece it has already visited, so a cycle
//! that ends on the other sticker of its starting piece is how a flipped or
//! twisted cycle break shows up.
//!
//! Rendering follows the usual shorthand. The buffer cycle lists the letters
//! it shoots to, without the buffer itself and without the letter it closes
//! on. Every later cycle lists the letter it breaks into, each letter visited
//! and the letter it closes on.
//!
//! Every letter whose piece is home is then checked on its own sticker, so a
//! flipped edge reports both of its letters and a twisted corner all three.

use std::fmt;

use cube_core::CubeState;
use itertools::Itertools;
use log::debug;
use serde::{Serialize, Serializer};

use crate::{Letter, Locator, NotationError, NotationReference, PieceClass};

/// One traversal of the position to home map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cycle {
    /// Letters in visitation order, starting with where the walk began.
    pub positions: Vec<Letter>,
    /// The letter the walk stopped on, a sticker of a piece in `positions`.
    pub closing: Letter,
    pub starts_at_buffer: bool,
}

impl Cycle {
    /// The letters this cycle contributes to the memorized sequence.
    pub fn letters(&self) -> Vec<Letter> {
        if self.starts_at_buffer {
            self.positions[1..].to_vec()
        } else {
            let mut letters = self.positions.clone();
            letters.push(self.closing);
            letters
        }
    }
}

/// The result of tracing one piece class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PermutationTrace {
    pub class: PieceClass,
    /// Only cycles of length two or more.
    pub cycles: Vec<Cycle>,
    /// Letters whose piece is home but flipped or twisted, every sticker of
    /// the piece included.
    pub misoriented: Vec<Letter>,
    /// Letters whose piece is home and correctly oriented.
    pub placed: Vec<Letter>,
}

impl PermutationTrace {
    pub fn letters(&self) -> Vec<Letter> {
        self.cycles.iter().flat_map(Cycle::letters).collect()
    }

    /// No cycles and no misoriented pieces.
    pub fn is_solved(&self) -> bool {
        self.cycles.is_empty() && self.misoriented.is_empty()
    }
}

/// The memorized sequence, letters separated by single spaces. Empty when
/// every piece of the class is home.
impl fmt::Display for PermutationTrace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letters().iter().join(" "))
    }
}

impl Serialize for PermutationTrace {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Both piece classes traced from the same state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CubeTrace {
    pub edges: PermutationTrace,
    pub corners: PermutationTrace,
}

impl CubeTrace {
    pub fn is_solved(&self) -> bool {
        self.edges.is_solved() && self.corners.is_solved()
    }
}

pub struct Tracer<'a> {
    locator: Locator<'a>,
}

impl<'a> Tracer<'a> {
    pub fn new(notation: &'a NotationReference) -> Tracer<'a> {
        Tracer {
            locator: Locator::new(notation),
        }
    }

    pub fn trace(&self, state: &CubeState) -> Result<CubeTrace, NotationError> {
        Ok(CubeTrace {
            edges: self.trace_class(state, PieceClass::Edge)?,
            corners: self.trace_class(state, PieceClass::Corner)?,
        })
    }

    /// # Errors
    ///
    /// If some letter holds colors no solved cube shows together. Nothing is
    /// traced in that case.
    pub fn trace_class(
        &self,
        state: &CubeState,
        class: PieceClass,
    ) -> Result<PermutationTrace, NotationError> {
        let notation = self.locator.notation();
        let buffer = class.buffer();

        let homes = class
            .letters()
            .map(|letter| self.locator.home_of(state, letter))
            .collect::<Result<Vec<_>, _>>()?;
        let home_of = |letter: Letter| homes[letter.index()];
        let in_position = |letter: Letter| notation.same_piece(letter, home_of(letter));

        let mut unvisited = class
            .letters()
            .filter(|&letter| letter != buffer && !in_position(letter))
            .collect_vec();

        let mut cycles = vec![];
        let mut start = buffer;
        let mut starts_at_buffer = true;

        while !unvisited.is_empty() {
            let mut positions = vec![];
            let mut current = start;
            while !positions
                .iter()
                .any(|&visited| notation.same_piece(visited, current))
            {
                positions.push(current);
                current = home_of(current);
            }

            unvisited.retain(|&letter| {
                !positions
                    .iter()
                    .any(|&visited| notation.same_piece(visited, letter))
            });

            let cycle = Cycle {
                positions,
                closing: current,
                starts_at_buffer,
            };
            debug!("Traced {class} cycle {:?}", cycle.letters());
            if cycle.positions.len() >= 2 {
                cycles.push(cycle);
            }

            if let Some(&next) = unvisited.first() {
                start = next;
            }
            starts_at_buffer = false;
        }

        let mut misoriented = vec![];
        let mut placed = vec![];
        for letter in class.letters() {
            if !in_position(letter) {
                continue;
            }

            let entry = notation.entry(letter);
            if state[entry.facelets[0]] == entry.colors[0] {
                placed.push(letter);
            } else {
                misoriented.push(letter);
            }
        }

        Ok(PermutationTrace {
            class,
            cycles,
            misoriented,
            placed,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn solved_cube_traces_empty() {
        let notation = NotationReference::new();
        let trace = Tracer::new(&notation).trace(&CubeState::solved()).unwrap();

        assert_eq!(trace.edges.to_string(), "");
        assert_eq!(trace.corners.to_string(), "");
        assert!(trace.is_solved());
        assert_eq!(trace.edges.placed.len(), 24);
        assert_eq!(trace.corners.placed.len(), 24);
    }

    #[test]
    fn cycle_rendering() {
        let letter = |c| Letter::new(c).unwrap();
        let buffer_cycle = Cycle {
            positions: vec![letter('b'), letter('a'), letter('c')],
            closing: letter('b'),
            starts_at_buffer: true,
        };
        assert_eq!(buffer_cycle.letters(), [letter('a'), letter('c')]);

        let later = Cycle {
            positions: vec![letter('c'), letter('d')],
            closing: letter('c'),
            starts_at_buffer: false,
        };
        assert_eq!(later.letters(), [letter('c'), letter('d'), letter('c')]);
    }
}
