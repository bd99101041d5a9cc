use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::Color;

/// One of the six faces, in the order the letter scheme walks them.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Face {
    U,
    L,
    F,
    R,
    B,
    D,
}

impl FromStr for Face {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "U" => Ok(Face::U),
            "L" => Ok(Face::L),
            "F" => Ok(Face::F),
            "R" => Ok(Face::R),
            "B" => Ok(Face::B),
            "D" => Ok(Face::D),
            _ => Err(()),
        }
    }
}

impl Face {
    pub const ALL: [Self; 6] = {
        use Face::*;
        let v = [U, L, F, R, B, D];

        let mut i = 0;
        while i < v.len() {
            assert!(i == v[i] as usize);
            i += 1;
        }

        v
    };

    /// The color this face carries on the solved reference cube.
    pub const fn solved_color(self) -> Color {
        match self {
            Face::U => Color::White,
            Face::L => Color::Orange,
            Face::F => Color::Green,
            Face::R => Color::Red,
            Face::B => Color::Blue,
            Face::D => Color::Yellow,
        }
    }

    pub const fn opposite(self) -> Face {
        match self {
            Face::U => Face::D,
            Face::L => Face::R,
            Face::F => Face::B,
            Face::R => Face::L,
            Face::B => Face::F,
            Face::D => Face::U,
        }
    }

    pub fn letter(self) -> char {
        match self {
            Face::U => 'U',
            Face::L => 'L',
            Face::F => 'F',
            Face::R => 'R',
            Face::B => 'B',
            Face::D => 'D',
        }
    }
}

impl fmt::Display for Face {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// A single sticker slot: a face plus a row and column on that face's 3x3
/// grid. Rows and columns are numbered as the face is seen on the unfolded
/// net: U with B at the top, D with F at the top, and the four side faces
/// with U at the top.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Facelet {
    pub face: Face,
    pub row: u8,
    pub col: u8,
}

impl Facelet {
    pub const COUNT: usize = 54;

    /// # Panics
    ///
    /// If `row` or `col` is not in `0..3`
    pub const fn new(face: Face, row: u8, col: u8) -> Facelet {
        assert!(row < 3 && col < 3);
        Facelet { face, row, col }
    }

    /// Dense index in `0..54`, face major.
    pub const fn index(self) -> usize {
        self.face as usize * 9 + self.row as usize * 3 + self.col as usize
    }

    /// # Panics
    ///
    /// If `index` is not in `0..54`
    pub fn from_index(index: usize) -> Facelet {
        assert!(index < Self::COUNT);
        #[allow(clippy::cast_possible_truncation)]
        Facelet::new(
            Face::ALL[index / 9],
            (index % 9 / 3) as u8,
            (index % 3) as u8,
        )
    }

    pub fn all() -> impl Iterator<Item = Facelet> {
        (0..Self::COUNT).map(Facelet::from_index)
    }

    pub const fn is_center(self) -> bool {
        self.row == 1 && self.col == 1
    }

    pub const fn is_corner(self) -> bool {
        self.row != 1 && self.col != 1
    }

    pub const fn is_edge(self) -> bool {
        !self.is_center() && !self.is_corner()
    }
}

impl fmt::Display for Facelet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[{}][{}]", self.face, self.row, self.col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_round_trips() {
        for (i, facelet) in Facelet::all().enumerate() {
            assert_eq!(facelet.index(), i);
        }
        assert_eq!(Facelet::new(Face::R, 2, 1).index(), 3 * 9 + 7);
    }

    #[test]
    fn classifies_stickers() {
        assert_eq!(Facelet::all().filter(|f| f.is_center()).count(), 6);
        assert_eq!(Facelet::all().filter(|f| f.is_edge()).count(), 24);
        assert_eq!(Facelet::all().filter(|f| f.is_corner()).count(), 24);
    }
}
