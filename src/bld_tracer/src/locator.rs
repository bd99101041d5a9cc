use cube_core::{Color, CubeState};
use log::trace;

use crate::{Letter, NotationError, NotationReference};

/// Reads letters off a cube state and resolves what is found there.
#[derive(Debug, Clone, Copy)]
pub struct Locator<'a> {
    notation: &'a NotationReference,
}

impl<'a> Locator<'a> {
    pub fn new(notation: &'a NotationReference) -> Locator<'a> {
        Locator { notation }
    }

    pub fn notation(&self) -> &'a NotationReference {
        self.notation
    }

    /// The colors currently at `letter`'s stickers, in the entry's order.
    pub fn colors_at(&self, state: &CubeState, letter: Letter) -> Vec<Color> {
        self.notation
            .entry(letter)
            .facelets
            .iter()
            .map(|facelet| state[*facelet])
            .collect()
    }

    pub fn letter_at_colors(&self, colors: &[Color]) -> Result<Letter, NotationError> {
        self.notation.letter_for_colors(colors)
    }

    /// The letter whose solved position the sticker now at `letter` belongs
    /// to.
    pub fn home_of(&self, state: &CubeState, letter: Letter) -> Result<Letter, NotationError> {
        let home = self.letter_at_colors(&self.colors_at(state, letter))?;
        trace!("{letter} holds {home}");
        Ok(home)
    }

    /// Puts the piece whose home is `home` onto `position`, so that the
    /// sticker read at `position` is the one that belongs at `home`.
    pub fn place_piece(
        &self,
        state: &mut CubeState,
        position: Letter,
        home: Letter,
    ) -> Result<(), NotationError> {
        if position.class() != home.class() {
            return Err(NotationError::MixedClasses { position, home });
        }

        let colors = &self.notation.entry(home).colors;
        for (facelet, color) in self.notation.entry(position).facelets.iter().zip(colors) {
            state.set(*facelet, *color);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use cube_core::{Algorithm, Color::*};

    use super::*;

    fn letter(c: char) -> Letter {
        Letter::new(c).unwrap()
    }

    #[test]
    fn solved_cube_reads_its_own_colors() {
        let notation = NotationReference::new();
        let locator = Locator::new(&notation);
        let state = CubeState::solved();

        assert_eq!(locator.colors_at(&state, letter('a')), [White, Blue]);
        assert_eq!(locator.colors_at(&state, letter('K')), [Green, Red, Yellow]);
        for class in crate::PieceClass::ALL {
            for position in class.letters() {
                assert_eq!(locator.home_of(&state, position), Ok(position));
            }
        }
    }

    #[test]
    fn u_turn_brings_the_right_edge_to_the_front() {
        let notation = NotationReference::new();
        let locator = Locator::new(&notation);
        let state = CubeState::scrambled(&"U".parse::<Algorithm>().unwrap());

        // The UR piece is now at UF, with its white sticker still on U
        assert_eq!(locator.home_of(&state, letter('c')), Ok(letter('b')));
        assert_eq!(locator.home_of(&state, letter('i')), Ok(letter('m')));
    }

    #[test]
    fn placing_flips_with_a_correlate() {
        let notation = NotationReference::new();
        let locator = Locator::new(&notation);
        let mut state = CubeState::solved();

        locator
            .place_piece(&mut state, letter('c'), letter('i'))
            .unwrap();
        assert_eq!(locator.colors_at(&state, letter('c')), [Green, White]);
        assert_eq!(locator.home_of(&state, letter('i')), Ok(letter('c')));
        assert_eq!(state.color_counts(), [9; 6]);

        assert_eq!(
            locator.place_piece(&mut state, letter('c'), letter('C')),
            Err(NotationError::MixedClasses {
                position: letter('c'),
                home: letter('C'),
            })
        );
    }
}
