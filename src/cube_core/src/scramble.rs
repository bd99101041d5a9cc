use log::debug;

use crate::{Algorithm, Amount, Face, Move, MoveTarget};

/// Random outer face turns, never turning the same face twice in a row.
pub struct Scrambler {
    rng: fastrand::Rng,
}

impl Scrambler {
    pub const DEFAULT_LENGTH: usize = 25;

    pub fn new() -> Scrambler {
        Scrambler {
            rng: fastrand::Rng::new(),
        }
    }

    /// Reproducible scrambles.
    pub fn with_seed(seed: u64) -> Scrambler {
        Scrambler {
            rng: fastrand::Rng::with_seed(seed),
        }
    }

    pub fn generate(&mut self, length: usize) -> Algorithm {
        let mut scramble = Algorithm::default();
        let mut previous: Option<Face> = None;

        while scramble.len() < length {
            let face = Face::ALL[self.rng.usize(..Face::ALL.len())];
            if previous == Some(face) {
                continue;
            }
            let amount = Amount::ALL[self.rng.usize(..Amount::ALL.len())];

            scramble.push(Move::new(MoveTarget::Face(face), amount));
            previous = Some(face);
        }

        debug!("Generated scramble {scramble}");

        scramble
    }
}

impl Default for Scrambler {
    fn default() -> Self {
        Scrambler::new()
    }
}
