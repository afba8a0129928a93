use thiserror::Error;

/// Why an editing operation on a [`Grid`](crate::entities::Grid) was refused.
/// A rejected operation never modifies the grid.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Rejection {
    #[error("a {width}×{depth} footprint at ({x}, {y}) exceeds the grid bounds")]
    OutOfBounds {
        x: usize,
        y: usize,
        width: usize,
        depth: usize,
    },
    #[error("the candidate position overlaps bin {other}")]
    Overlap { other: String },
    #[error("no valid position found for the rotated bin")]
    NoValidRotation,
    #[error("no free position on the grid can hold this bin")]
    Unfittable,
    #[error("no bin with id {0}")]
    UnknownBin(String),
    #[error("a bin with id {0} already exists")]
    DuplicateId(String),
}
