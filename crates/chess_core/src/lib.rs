// Board coordinate primitives
pub mod error;
pub mod piece;
pub mod position;

// Re-export main types for convenience
pub use error::{Axis, PositionError};
pub use piece::{Color, Piece, PieceType};
pub use position::{Position, BOARD_SIZE, MAX_COORD, MIN_COORD};
