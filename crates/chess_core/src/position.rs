use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;
use std::sync::Arc;

use log::{debug, trace};

use crate::error::{Axis, PositionError};
use crate::piece::Piece;

pub const BOARD_SIZE: i8 = 8;
pub const MIN_COORD: i8 = 0;
pub const MAX_COORD: i8 = BOARD_SIZE - 1;

fn on_board(value: i8) -> bool {
    (MIN_COORD..=MAX_COORD).contains(&value)
}

fn check_coord(axis: Axis, value: i8) -> Result<i8, PositionError> {
    if on_board(value) {
        Ok(value)
    } else {
        debug!("rejected {axis} coordinate {value}");
        Err(PositionError::OutOfBounds { axis, value })
    }
}

/// One cell of the 8x8 board, optionally holding an occupant.
///
/// `x` is the file (0 = a) and `y` the rank (0 = rank 1). Both always lie in
/// `MIN_COORD..=MAX_COORD`.
///
/// Equality and hashing look at the coordinates only, so a position stays a
/// valid map key while its occupant changes. The occupant is a shared handle:
/// cloning a position clones the `Arc`, never the occupant itself.
#[derive(Debug)]
pub struct Position<P = Piece> {
    x: i8,
    y: i8,
    occupant: Option<Arc<P>>,
}

impl<P> Position<P> {
    /// Creates an empty position, failing if either coordinate is off the board.
    pub fn new(x: i8, y: i8) -> Result<Self, PositionError> {
        Ok(Self {
            x: check_coord(Axis::X, x)?,
            y: check_coord(Axis::Y, y)?,
            occupant: None,
        })
    }

    pub fn with_occupant(x: i8, y: i8, occupant: Arc<P>) -> Result<Self, PositionError> {
        let mut position = Self::new(x, y)?;
        position.occupant = Some(occupant);
        Ok(position)
    }

    /// Parses algebraic notation such as `e4`. The result is empty.
    pub fn from_algebraic(notation: &str) -> Result<Self, PositionError> {
        let &[file, rank] = notation.as_bytes() else {
            debug!("rejected notation '{notation}': expected two characters");
            return Err(PositionError::InvalidNotation(notation.to_string()));
        };

        if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
            debug!("rejected notation '{notation}': file or rank out of range");
            return Err(PositionError::InvalidNotation(notation.to_string()));
        }

        Self::new((file - b'a') as i8, (rank - b'1') as i8)
    }

    pub fn x(&self) -> i8 {
        self.x
    }

    pub fn y(&self) -> i8 {
        self.y
    }

    pub fn set_x(&mut self, x: i8) -> Result<(), PositionError> {
        self.x = check_coord(Axis::X, x)?;
        Ok(())
    }

    pub fn set_y(&mut self, y: i8) -> Result<(), PositionError> {
        self.y = check_coord(Axis::Y, y)?;
        Ok(())
    }

    pub fn occupant(&self) -> Option<&Arc<P>> {
        self.occupant.as_ref()
    }

    pub fn set_occupant(&mut self, occupant: Option<Arc<P>>) {
        self.occupant = occupant;
    }

    pub fn clear(&mut self) {
        self.occupant = None;
    }

    pub fn is_occupied(&self) -> bool {
        self.occupant.is_some()
    }

    /// a1 is dark on a real board, but callers rely on even `x + y` meaning light.
    pub fn is_light_color(&self) -> bool {
        (self.x + self.y) % 2 == 0
    }

    /// File letter followed by rank digit, e.g. `a1`, `h8`.
    pub fn to_algebraic(&self) -> String {
        let file = (b'a' + self.x as u8) as char;
        let rank = (b'1' + self.y as u8) as char;
        format!("{file}{rank}")
    }

    /// Row-major index with a1 = 0 and h8 = 63.
    pub fn index(&self) -> u8 {
        (self.y * BOARD_SIZE + self.x) as u8
    }

    /// Returns the empty position `(dx, dy)` away, or `None` if that is off the board.
    ///
    /// The result never carries an occupant: it is a coordinate only, and
    /// the real content of the destination has to come from the board.
    pub fn offset(&self, dx: i8, dy: i8) -> Option<Self> {
        let target = self
            .x
            .checked_add(dx)
            .zip(self.y.checked_add(dy))
            .filter(|&(x, y)| on_board(x) && on_board(y));

        match target {
            Some((x, y)) => Some(Self {
                x,
                y,
                occupant: None,
            }),
            None => {
                trace!("{} offset by ({dx}, {dy}) leaves the board", self.to_algebraic());
                None
            }
        }
    }

    pub fn axis_delta_x(&self, other: &Self) -> i8 {
        self.x - other.x
    }

    pub fn axis_delta_y(&self, other: &Self) -> i8 {
        self.y - other.y
    }

    /// King distance: the larger of the two axis distances.
    pub fn chebyshev_distance(&self, other: &Self) -> u8 {
        self.axis_delta_x(other)
            .unsigned_abs()
            .max(self.axis_delta_y(other).unsigned_abs())
    }

    pub fn manhattan_distance(&self, other: &Self) -> u8 {
        self.axis_delta_x(other).unsigned_abs() + self.axis_delta_y(other).unsigned_abs()
    }

    pub fn is_same_file(&self, other: &Self) -> bool {
        self.axis_delta_x(other) == 0
    }

    pub fn is_same_rank(&self, other: &Self) -> bool {
        self.axis_delta_y(other) == 0
    }

    /// True when both positions lie on one diagonal or anti-diagonal,
    /// including when they are the same cell.
    pub fn is_same_diagonal(&self, other: &Self) -> bool {
        self.axis_delta_x(other).abs() == self.axis_delta_y(other).abs()
    }
}

impl<P> Clone for Position<P> {
    fn clone(&self) -> Self {
        Self {
            x: self.x,
            y: self.y,
            occupant: self.occupant.clone(),
        }
    }
}

impl<P> PartialEq for Position<P> {
    fn eq(&self, other: &Self) -> bool {
        self.x == other.x && self.y == other.y
    }
}

impl<P> Eq for Position<P> {}

impl<P> Hash for Position<P> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.x.hash(state);
        self.y.hash(state);
    }
}

/// Algebraic notation, followed by ` (<occupant>)` when occupied.
impl<P: fmt::Display> fmt::Display for Position<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_algebraic())?;
        if let Some(occupant) = &self.occupant {
            write!(f, " ({occupant})")?;
        }
        Ok(())
    }
}

impl<P> FromStr for Position<P> {
    type Err = PositionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_algebraic(s)
    }
}
