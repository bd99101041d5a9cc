#![warn(clippy::pedantic)]
#![allow(clippy::too_many_lines)]

//! Sticker-level model of the 3x3x3 cube: colors, faces, the move engine and
//! the scramble generator.

mod color;
mod facelet;
pub mod geometry;
pub mod moves;
pub mod scramble;
mod state;

pub use color::{Color, ParseColorError};
pub use facelet::{Face, Facelet};
pub use moves::{Algorithm, Amount, Axis, Move, MoveParseError, MoveTarget, Slice};
pub use scramble::Scrambler;
pub use state::{CubeState, FaceGrid};

