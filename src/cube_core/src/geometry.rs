//! The physical layout of the cube, and the facelet permutations every move
//! target induces.
//!
//! Rather than transcribing which border strip of which neighbor slides onto
//! which under each turn, the only hard-coded geometry is [`FACE_FRAMES`]: the
//! outward normal of every face plus the directions its rows and columns grow
//! in. Each facelet is placed in space from that table, a turn rotates every
//! facelet in the turning layers by a quarter turn about the reference face's
//! normal, and the result is read back into (face, row, column) through the
//! same table. The adjacency of every face, wide, slice and rotation move falls
//! out of those six rows.

use std::sync::LazyLock;

use log::info;

use crate::{Face, Facelet, moves::MoveTarget};

// X is left to right, Y is down to up, and Z is back to front
// The coordinate system is right-handed
pub type Vector = [i8; 3];

/// Where a face sits and which way its grid is drawn on the net.
#[derive(Debug, Clone, Copy)]
pub struct FaceFrame {
    /// Outward normal; also the position of the face's center cubie.
    pub normal: Vector,
    /// Direction of increasing row.
    pub down: Vector,
    /// Direction of increasing column.
    pub right: Vector,
}

/// Indexed by `Face as usize`.
pub const FACE_FRAMES: [FaceFrame; 6] = [
    // U: seen from above, B at the top of the grid
    FaceFrame {
        normal: [0, 1, 0],
        down: [0, 0, 1],
        right: [1, 0, 0],
    },
    // L
    FaceFrame {
        normal: [-1, 0, 0],
        down: [0, -1, 0],
        right: [0, 0, 1],
    },
    // F
    FaceFrame {
        normal: [0, 0, 1],
        down: [0, -1, 0],
        right: [1, 0, 0],
    },
    // R
    FaceFrame {
        normal: [1, 0, 0],
        down: [0, -1, 0],
        right: [0, 0, -1],
    },
    // B: seen from behind, so columns grow towards L
    FaceFrame {
        normal: [0, 0, -1],
        down: [0, -1, 0],
        right: [-1, 0, 0],
    },
    // D: seen from below, F at the top of the grid
    FaceFrame {
        normal: [0, -1, 0],
        down: [0, 0, -1],
        right: [1, 0, 0],
    },
];

/// A facelet permutation: `mapping[from] == to`.
pub type FaceletMapping = [u8; Facelet::COUNT];

fn dot(a: Vector, b: Vector) -> i8 {
    a[0] * b[0] + a[1] * b[1] + a[2] * b[2]
}

fn cross(a: Vector, b: Vector) -> Vector {
    [
        a[1] * b[2] - a[2] * b[1],
        a[2] * b[0] - a[0] * b[2],
        a[0] * b[1] - a[1] * b[0],
    ]
}

fn add(a: Vector, b: Vector) -> Vector {
    [a[0] + b[0], a[1] + b[1], a[2] + b[2]]
}

fn scale(a: Vector, k: i8) -> Vector {
    [a[0] * k, a[1] * k, a[2] * k]
}

/// Quarter turn of `v` about the unit axis `axis`, clockwise when looking at
/// the cube from the tip of `axis`.
fn rotate_clockwise(v: Vector, axis: Vector) -> Vector {
    add(scale(axis, dot(axis, v)), scale(cross(axis, v), -1))
}

/// Position of the cubie carrying this facelet, each coordinate in `-1..=1`.
pub fn cubie_position(facelet: Facelet) -> Vector {
    let frame = FACE_FRAMES[facelet.face as usize];

    #[allow(clippy::cast_possible_wrap)]
    let (row, col) = (facelet.row as i8 - 1, facelet.col as i8 - 1);

    add(
        frame.normal,
        add(scale(frame.down, row), scale(frame.right, col)),
    )
}

/// Inverse of [`cubie_position`] paired with the facelet's normal.
fn facelet_at(position: Vector, normal: Vector) -> Facelet {
    let face = Face::ALL
        .into_iter()
        .find(|face| FACE_FRAMES[*face as usize].normal == normal)
        .expect("every axis-aligned unit normal belongs to a face");
    let frame = FACE_FRAMES[face as usize];

    #[allow(clippy::cast_sign_loss)]
    Facelet::new(
        face,
        (dot(position, frame.down) + 1) as u8,
        (dot(position, frame.right) + 1) as u8,
    )
}

/// Depth of the facelet's layer as seen from `face`: 0 is the outer layer, 1
/// the middle slice and 2 the opposite layer.
pub fn layer_depth(facelet: Facelet, face: Face) -> u8 {
    let normal = FACE_FRAMES[face as usize].normal;

    #[allow(clippy::cast_sign_loss)]
    let depth = (1 - dot(cubie_position(facelet), normal)) as u8;
    depth
}

fn quarter_turn_mapping(face: Face, layers: [bool; 3]) -> FaceletMapping {
    let axis = FACE_FRAMES[face as usize].normal;
    let mut mapping = [0; Facelet::COUNT];

    for facelet in Facelet::all() {
        let target = if layers[layer_depth(facelet, face) as usize] {
            let normal = FACE_FRAMES[facelet.face as usize].normal;
            facelet_at(
                rotate_clockwise(cubie_position(facelet), axis),
                rotate_clockwise(normal, axis),
            )
        } else {
            facelet
        };

        #[allow(clippy::cast_possible_truncation)]
        {
            mapping[facelet.index()] = target.index() as u8;
        }
    }

    mapping
}

static QUARTER_TURNS: LazyLock<Box<[FaceletMapping]>> = LazyLock::new(|| {
    let mappings = MoveTarget::all()
        .map(|target| {
            let (face, layers) = target.layers();
            quarter_turn_mapping(face, layers)
        })
        .collect::<Box<[_]>>();

    info!("Derived {} quarter turn facelet mappings", mappings.len());

    mappings
});

/// The facelet permutation of one clockwise quarter turn of `target`.
pub fn quarter_turn(target: MoveTarget) -> &'static FaceletMapping {
    &QUARTER_TURNS[target.index()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frames_are_right_handed_and_orthogonal() {
        for frame in FACE_FRAMES {
            assert_eq!(dot(frame.normal, frame.down), 0);
            assert_eq!(dot(frame.normal, frame.right), 0);
            assert_eq!(dot(frame.down, frame.right), 0);
            // Looking at a face from outside, right x down points into the cube
            assert_eq!(cross(frame.right, frame.down), scale(frame.normal, -1));
        }
    }

    #[test]
    fn facelet_placement_round_trips() {
        for facelet in Facelet::all() {
            let normal = FACE_FRAMES[facelet.face as usize].normal;
            assert_eq!(facelet_at(cubie_position(facelet), normal), facelet);
        }
    }

    #[test]
    fn mappings_are_permutations() {
        for target in MoveTarget::all() {
            let mapping = quarter_turn(target);
            let mut seen = [false; Facelet::COUNT];
            for &to in mapping {
                assert!(!seen[to as usize], "{target:?} maps twice onto {to}");
                seen[to as usize] = true;
            }
        }
    }

    #[test]
    fn clockwise_u_sends_front_to_left() {
        let uf = cubie_position(Facelet::new(Face::F, 0, 1));
        assert_eq!(uf, [0, 1, 1]);
        assert_eq!(rotate_clockwise(uf, [0, 1, 0]), [-1, 1, 0]);
    }

    #[test]
    fn layer_depths() {
        assert_eq!(layer_depth(Facelet::new(Face::U, 0, 0), Face::U), 0);
        assert_eq!(layer_depth(Facelet::new(Face::F, 1, 0), Face::U), 1);
        assert_eq!(layer_depth(Facelet::new(Face::D, 1, 1), Face::U), 2);
        assert_eq!(layer_depth(Facelet::new(Face::U, 0, 1), Face::L), 1);
    }
}
