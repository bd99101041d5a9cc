#![warn(clippy::pedantic)]

//! Letter scheme, piece location and cycle tracing for blindfolded solving
//! drills, on top of the `cube_core` sticker model.

mod drill;
pub mod execution;
mod locator;
mod notation;
mod tracer;

pub use drill::{
    AnswerCheck, DrillError, DrillReport, check_answer, sequence_score, shuffled_letters,
    validate_drill,
};
pub use execution::{ExecutionError, Executor};
pub use locator::Locator;
pub use notation::{Letter, NotationEntry, NotationError, NotationReference, PieceClass};
pub use tracer::{CubeTrace, Cycle, PermutationTrace, Tracer};
