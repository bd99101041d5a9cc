//! The letter scheme: which sticker every letter names, and the colors a
//! solved cube shows there.

use std::fmt;

use cube_core::{
    Color::{self, Blue as B, Green as G, Orange as O, Red as R, White as W, Yellow as Y},
    Face, Facelet,
    geometry::cubie_position,
};
use fxhash::FxHashMap;
use itertools::Itertools;
use log::info;
use thiserror::Error;

/// Edges use two-sticker pieces and lowercase letters, corners three-sticker
/// pieces and uppercase letters.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PieceClass {
    Edge,
    Corner,
}

impl PieceClass {
    pub const ALL: [Self; 2] = [PieceClass::Edge, PieceClass::Corner];

    /// Where tracing starts.
    pub fn buffer(self) -> Letter {
        match self {
            PieceClass::Edge => Letter('b'),
            PieceClass::Corner => Letter('A'),
        }
    }

    pub fn stickers(self) -> usize {
        match self {
            PieceClass::Edge => 2,
            PieceClass::Corner => 3,
        }
    }

    /// The 24 letters of the class in alphabetical order.
    pub fn letters(self) -> impl Iterator<Item = Letter> {
        let first = match self {
            PieceClass::Edge => 'a',
            PieceClass::Corner => 'A',
        };
        (first..).take(24).map(Letter)
    }

    pub fn name(self) -> &'static str {
        match self {
            PieceClass::Edge => "edges",
            PieceClass::Corner => "corners",
        }
    }
}

impl fmt::Display for PieceClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A named sticker position: `a`-`x` for edges, `A`-`X` for corners.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Letter(char);

impl Letter {
    pub fn new(letter: char) -> Result<Letter, NotationError> {
        if matches!(letter, 'a'..='x' | 'A'..='X') {
            Ok(Letter(letter))
        } else {
            Err(NotationError::UnknownLetter(letter))
        }
    }

    pub fn class(self) -> PieceClass {
        if self.0.is_ascii_lowercase() {
            PieceClass::Edge
        } else {
            PieceClass::Corner
        }
    }

    pub fn as_char(self) -> char {
        self.0
    }

    /// Position in `0..24` within the class.
    pub(crate) fn index(self) -> usize {
        let first = match self.class() {
            PieceClass::Edge => 'a',
            PieceClass::Corner => 'A',
        };
        self.0 as usize - first as usize
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<char> for Letter {
    type Error = NotationError;

    fn try_from(value: char) -> Result<Self, Self::Error> {
        Letter::new(value)
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NotationError {
    /// No letter's solved colors are these, so the state was not reachable
    /// from the solved cube.
    #[error("No piece has the colors {}", .0.iter().join("-"))]
    InvalidColorCombination(Vec<Color>),
    #[error("`{0}` is not a letter of the scheme")]
    UnknownLetter(char),
    #[error("Cannot place the {home} piece on {position}, they belong to different piece classes")]
    MixedClasses { position: Letter, home: Letter },
}

/// Letters printed on each face's net grid; `*` marks the centers.
const POSITION_LETTERS: [[[char; 3]; 3]; 6] = [
    [['A', 'a', 'B'], ['d', '*', 'b'], ['D', 'c', 'C']],
    [['E', 'e', 'F'], ['h', '*', 'f'], ['H', 'g', 'G']],
    [['I', 'i', 'J'], ['l', '*', 'j'], ['L', 'k', 'K']],
    [['M', 'm', 'N'], ['p', '*', 'n'], ['P', 'o', 'O']],
    [['Q', 'q', 'R'], ['t', '*', 'r'], ['T', 's', 'S']],
    [['U', 'u', 'V'], ['x', '*', 'v'], ['X', 'w', 'W']],
];

/// Solved colors of each edge letter: its own sticker, then the other one.
const EDGE_COLORS: [[Color; 2]; 24] = [
    [W, B],
    [W, R],
    [W, G],
    [W, O],
    [O, W],
    [O, G],
    [O, Y],
    [O, B],
    [G, W],
    [G, R],
    [G, Y],
    [G, O],
    [R, W],
    [R, B],
    [R, Y],
    [R, G],
    [B, W],
    [B, O],
    [B, Y],
    [B, R],
    [Y, G],
    [Y, R],
    [Y, B],
    [Y, O],
];

/// Solved colors of each corner letter: its own sticker, then the other two
/// in the scheme's order.
const CORNER_COLORS: [[Color; 3]; 24] = [
    [W, O, B],
    [W, B, R],
    [W, R, G],
    [W, G, O],
    [O, B, W],
    [O, W, G],
    [O, G, Y],
    [O, Y, B],
    [G, O, W],
    [G, W, R],
    [G, R, Y],
    [G, Y, O],
    [R, G, W],
    [R, W, B],
    [R, B, Y],
    [R, Y, G],
    [B, R, W],
    [B, W, O],
    [B, O, Y],
    [B, Y, R],
    [Y, O, G],
    [Y, G, R],
    [Y, R, B],
    [Y, B, O],
];

/// Everything the scheme fixes about one letter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotationEntry {
    pub letter: Letter,
    /// The letter's own sticker first, then the rest of its piece in the
    /// order of `colors`.
    pub facelets: Vec<Facelet>,
    /// What `facelets` show on a solved cube.
    pub colors: Vec<Color>,
}

impl NotationEntry {
    fn new(letter: Letter, colors: &[Color]) -> NotationEntry {
        let own = Facelet::all()
            .find(|facelet| {
                POSITION_LETTERS[facelet.face as usize][facelet.row as usize]
                    [facelet.col as usize]
                    == letter.0
            })
            .expect("every letter is printed on the net");
        let cubie = cubie_position(own);

        let mut facelets = vec![own];
        for &color in &colors[1..] {
            let sibling = Facelet::all()
                .find(|facelet| {
                    cubie_position(*facelet) == cubie && facelet.face.solved_color() == color
                })
                .expect("every color of a piece shows on one of its faces");
            facelets.push(sibling);
        }

        NotationEntry {
            letter,
            facelets,
            colors: colors.to_vec(),
        }
    }

    pub fn face(&self) -> Face {
        self.facelets[0].face
    }
}

/// The loaded letter scheme, with the color and correlate indices built once.
#[derive(Debug)]
pub struct NotationReference {
    edges: Vec<NotationEntry>,
    corners: Vec<NotationEntry>,
    by_colors: FxHashMap<Vec<Color>, Letter>,
    correlates: FxHashMap<Letter, Vec<Letter>>,
}

impl NotationReference {
    pub fn new() -> NotationReference {
        let edges = PieceClass::Edge
            .letters()
            .zip(EDGE_COLORS)
            .map(|(letter, colors)| NotationEntry::new(letter, &colors))
            .collect_vec();
        let corners = PieceClass::Corner
            .letters()
            .zip(CORNER_COLORS)
            .map(|(letter, colors)| NotationEntry::new(letter, &colors))
            .collect_vec();

        let by_colors = edges
            .iter()
            .chain(&corners)
            .map(|entry| (entry.colors.clone(), entry.letter))
            .collect::<FxHashMap<_, _>>();

        let correlates = edges
            .iter()
            .chain(&corners)
            .map(|entry| {
                let mut siblings = entry.colors.clone();
                siblings.sort();
                let siblings = edges
                    .iter()
                    .chain(&corners)
                    .filter(|other| {
                        let mut colors = other.colors.clone();
                        colors.sort();
                        other.letter != entry.letter && colors == siblings
                    })
                    .map(|other| other.letter)
                    .collect_vec();
                (entry.letter, siblings)
            })
            .collect::<FxHashMap<_, _>>();

        info!(
            "Loaded {} edge and {} corner letters",
            edges.len(),
            corners.len()
        );

        NotationReference {
            edges,
            corners,
            by_colors,
            correlates,
        }
    }

    pub fn entries(&self, class: PieceClass) -> &[NotationEntry] {
        match class {
            PieceClass::Edge => &self.edges,
            PieceClass::Corner => &self.corners,
        }
    }

    pub fn entry(&self, letter: Letter) -> &NotationEntry {
        &self.entries(letter.class())[letter.index()]
    }

    /// The letter whose solved colors are exactly `colors`, in order.
    pub fn letter_for_colors(&self, colors: &[Color]) -> Result<Letter, NotationError> {
        self.by_colors
            .get(colors)
            .copied()
            .ok_or_else(|| NotationError::InvalidColorCombination(colors.to_vec()))
    }

    /// The other letters on the same piece: one for an edge, two for a
    /// corner.
    pub fn correlates(&self, letter: Letter) -> &[Letter] {
        &self.correlates[&letter]
    }

    /// Whether `a` and `b` name stickers of the same piece.
    pub fn same_piece(&self, a: Letter, b: Letter) -> bool {
        a == b || self.correlates(a).contains(&b)
    }
}

impl Default for NotationReference {
    fn default() -> Self {
        NotationReference::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn letter(c: char) -> Letter {
        Letter::new(c).unwrap()
    }

    #[test]
    fn edge_correlates() {
        let notation = NotationReference::new();
        assert_eq!(notation.correlates(letter('a')), [letter('q')]);
        assert_eq!(notation.correlates(letter('b')), [letter('m')]);
        assert_eq!(notation.correlates(letter('x')), [letter('g')]);
    }

    #[test]
    fn corner_correlates() {
        let notation = NotationReference::new();
        assert_eq!(notation.correlates(letter('A')), [letter('E'), letter('R')]);
        assert_eq!(notation.correlates(letter('C')), [letter('J'), letter('M')]);
    }

    #[test]
    fn letters_must_be_in_the_scheme() {
        assert_eq!(Letter::new('y'), Err(NotationError::UnknownLetter('y')));
        assert_eq!(Letter::new('Z'), Err(NotationError::UnknownLetter('Z')));
        assert_eq!(Letter::new('?'), Err(NotationError::UnknownLetter('?')));
        assert_eq!(letter('x').class(), PieceClass::Edge);
        assert_eq!(letter('X').class(), PieceClass::Corner);
    }

    #[test]
    fn color_lookup_is_order_sensitive() {
        let notation = NotationReference::new();
        assert_eq!(notation.letter_for_colors(&[W, B]), Ok(letter('a')));
        assert_eq!(notation.letter_for_colors(&[B, W]), Ok(letter('q')));
        assert_eq!(notation.letter_for_colors(&[W, O, B]), Ok(letter('A')));
        assert_eq!(
            notation.letter_for_colors(&[W, B, O]),
            Err(NotationError::InvalidColorCombination(vec![W, B, O]))
        );
        assert_eq!(
            notation.letter_for_colors(&[W, Y]),
            Err(NotationError::InvalidColorCombination(vec![W, Y]))
        );
    }
}
