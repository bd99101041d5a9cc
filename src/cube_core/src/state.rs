use std::{fmt, ops::Index};

use itertools::Itertools;
use log::{debug, trace};
use serde::{Deserialize, Serialize};

use crate::{Algorithm, Color, Face, Facelet, Move, geometry};

/// A face's stickers, row major, as the face appears on the unfolded net.
pub type FaceGrid = [[Color; 3]; 3];

/// The color of every sticker on the cube.
///
/// Starts out as the solved reference configuration and is mutated in place by
/// moves. Every move is a permutation of sticker slots, so each color always
/// occupies exactly nine of them.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "CubeStateRepr", into = "CubeStateRepr")]
pub struct CubeState {
    faces: [FaceGrid; 6],
}

impl CubeState {
    pub fn solved() -> CubeState {
        CubeState {
            faces: Face::ALL.map(|face| [[face.solved_color(); 3]; 3]),
        }
    }

    /// A solved cube with `scramble` applied.
    pub fn scrambled(scramble: &Algorithm) -> CubeState {
        let mut state = CubeState::solved();
        state.apply_algorithm(scramble);
        state
    }

    pub fn get(&self, facelet: Facelet) -> Color {
        self.faces[facelet.face as usize][facelet.row as usize][facelet.col as usize]
    }

    /// Overwrites a single sticker. This can break the color count invariant;
    /// it exists for building fixtures and loading external states.
    pub fn set(&mut self, facelet: Facelet, color: Color) {
        self.faces[facelet.face as usize][facelet.row as usize][facelet.col as usize] = color;
    }

    pub fn face(&self, face: Face) -> &FaceGrid {
        &self.faces[face as usize]
    }

    pub fn apply(&mut self, move_: Move) {
        trace!("Applying {move_}");

        let mapping = geometry::quarter_turn(move_.target);
        for _ in 0..move_.amount.quarter_turns() {
            let before = self.clone();
            for (from, &to) in mapping.iter().enumerate() {
                self.set(
                    Facelet::from_index(to as usize),
                    before.get(Facelet::from_index(from)),
                );
            }
        }
    }

    pub fn apply_algorithm(&mut self, algorithm: &Algorithm) {
        debug!("Applying an algorithm of {} moves", algorithm.len());

        for &move_ in algorithm {
            self.apply(move_);
        }
    }

    /// Whether the state equals the solved reference configuration. A solved
    /// cube held in a different orientation does not count.
    pub fn is_solved(&self) -> bool {
        *self == CubeState::solved()
    }

    /// Number of stickers of each color, indexed like [`Color::ALL`].
    pub fn color_counts(&self) -> [usize; 6] {
        let mut counts = [0; 6];
        for color in self.faces.iter().flatten().flatten() {
            counts[*color as usize] += 1;
        }
        counts
    }

    /// The unfolded net: U above, L F R B across the middle, D below. Each
    /// sticker is drawn by `sticker` and stickers are separated by spaces.
    pub fn net(&self, sticker: impl Fn(Color) -> String) -> String {
        let row = |face: Face, i: usize| self[face][i].iter().map(|&c| sticker(c)).join(" ");
        let pad = " ".repeat(6);
        let mut net = String::new();

        for i in 0..3 {
            net += &format!("{pad}{}\n", row(Face::U, i));
        }
        for i in 0..3 {
            net += &format!(
                "{} {} {} {}\n",
                row(Face::L, i),
                row(Face::F, i),
                row(Face::R, i),
                row(Face::B, i)
            );
        }
        for i in 0..3 {
            net += &format!("{pad}{}\n", row(Face::D, i));
        }

        net
    }
}

impl Default for CubeState {
    fn default() -> Self {
        CubeState::solved()
    }
}

impl Index<Face> for CubeState {
    type Output = FaceGrid;

    fn index(&self, index: Face) -> &Self::Output {
        self.face(index)
    }
}

impl Index<Facelet> for CubeState {
    type Output = Color;

    fn index(&self, index: Facelet) -> &Self::Output {
        &self.faces[index.face as usize][index.row as usize][index.col as usize]
    }
}

impl fmt::Debug for CubeState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&CubeStateRepr::from(self.clone()), f)
    }
}

/// The unfolded net with L F R B across the middle band, one initial per
/// sticker.
impl fmt::Display for CubeState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.net(|color| color.initial().to_string()))
    }
}

#[derive(Debug, Serialize, Deserialize)]
#[allow(non_snake_case)]
struct CubeStateRepr {
    U: FaceGrid,
    L: FaceGrid,
    F: FaceGrid,
    R: FaceGrid,
    B: FaceGrid,
    D: FaceGrid,
}

impl From<CubeStateRepr> for CubeState {
    fn from(value: CubeStateRepr) -> Self {
        CubeState {
            faces: [value.U, value.L, value.F, value.R, value.B, value.D],
        }
    }
}

impl From<CubeState> for CubeStateRepr {
    #[allow(non_snake_case)]
    fn from(value: CubeState) -> Self {
        let [U, L, F, R, B, D] = value.faces;
        CubeStateRepr { U, L, F, R, B, D }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn solved_state() {
        let state = CubeState::solved();
        assert!(state.is_solved());
        assert_eq!(state.color_counts(), [9; 6]);
        assert_eq!(state[Face::F][1][1], Color::Green);
        assert_eq!(state[Facelet::new(Face::L, 0, 2)], Color::Orange);
    }

    #[test]
    fn net_rendering() {
        let net = CubeState::solved().to_string();
        let lines = net.lines().collect::<Vec<_>>();
        assert_eq!(lines.len(), 9);
        assert_eq!(lines[0], "      W W W");
        assert_eq!(lines[4], "O O O G G G R R R B B B");
        assert_eq!(lines[8], "      Y Y Y");
    }

    #[test]
    fn net_draws_stickers_through_the_closure() {
        let state = CubeState::scrambled(&"R".parse().unwrap());
        let drawn = state.net(|color| color.initial().to_lowercase().to_string());
        assert_eq!(drawn, state.to_string().to_lowercase());
    }

    #[test]
    fn serializes_keyed_by_face() {
        let mut state = CubeState::solved();
        state.set(Facelet::new(Face::U, 0, 0), Color::Red);

        let toml = toml::to_string(&state).unwrap();
        assert!(toml.contains("\"red\""));

        let back: CubeState = toml::from_str(&toml).unwrap();
        assert_eq!(back, state);
    }
}
