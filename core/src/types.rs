use core::fmt;
use core::ops::{Add, Sub};
use serde::{Deserialize, Serialize};

/// Single coordinate axis, signed so offsets can step off the grid.
pub type Coord = i32;

/// Signed `(row, column)` displacement.
pub type Offset = (Coord, Coord);

/// Row/column address of a grid slot.
///
/// A point carries no validity of its own, only a grid can tell whether it is in bounds.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Point {
    pub row: Coord,
    pub column: Coord,
}

impl Point {
    pub const fn new(row: Coord, column: Coord) -> Self {
        Self { row, column }
    }
}

impl From<Offset> for Point {
    fn from((row, column): Offset) -> Self {
        Self { row, column }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.column)
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Self::Output {
        Point::new(self.row + rhs.row, self.column + rhs.column)
    }
}

impl Add<Offset> for Point {
    type Output = Point;

    fn add(self, (row, column): Offset) -> Self::Output {
        Point::new(self.row + row, self.column + column)
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Self::Output {
        Point::new(self.row - rhs.row, self.column - rhs.column)
    }
}

impl Sub<Offset> for Point {
    type Output = Point;

    fn sub(self, (row, column): Offset) -> Self::Output {
        Point::new(self.row - row, self.column - column)
    }
}

/// Offsets of the 3x3 block around a point, row-major, center excluded.
pub(crate) const DISPLACEMENTS: [Offset; 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn adds_and_subtracts_points_and_offsets() {
        let p = Point::new(2, 3);

        assert_eq!(p + Point::new(1, -1), Point::new(3, 2));
        assert_eq!(p + (-1, 1), Point::new(1, 4));
        assert_eq!(p - Point::new(2, 3), Point::new(0, 0));
        assert_eq!(p - (3, 0), Point::new(-1, 3));
    }

    #[test]
    fn equality_is_structural() {
        assert_eq!(Point::new(4, 5), Point::from((4, 5)));
        assert_ne!(Point::new(4, 5), Point::new(5, 4));
    }
}
