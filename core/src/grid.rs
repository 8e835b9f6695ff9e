use core::ops::{Index, IndexMut};
use ndarray::Array2;

use crate::*;

pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Point {
    type Output = [usize; 2];

    /// Only meaningful for points already checked with [`Grid::in_bounds`].
    fn to_nd_index(self) -> Self::Output {
        [self.row as usize, self.column as usize]
    }
}

/// Fixed-size row-major store addressed by [`Point`].
#[derive(Clone, Debug, PartialEq)]
pub struct Grid<T> {
    items: Array2<T>,
    rows: Coord,
    columns: Coord,
}

impl<T: Default> Grid<T> {
    pub fn new(rows: usize, columns: usize) -> Result<Self> {
        if rows == 0 || columns == 0 {
            return Err(GameError::EmptyGrid);
        }
        let (Ok(row_count), Ok(column_count)) = (Coord::try_from(rows), Coord::try_from(columns)) else {
            return Err(GameError::TooLarge { rows, columns });
        };
        if rows.checked_mul(columns).is_none() {
            return Err(GameError::TooLarge { rows, columns });
        }

        Ok(Self {
            items: Array2::default([rows, columns]),
            rows: row_count,
            columns: column_count,
        })
    }
}

impl<T> Grid<T> {
    pub fn rows(&self) -> usize {
        self.rows as usize
    }

    pub fn columns(&self) -> usize {
        self.columns as usize
    }

    /// Total number of slots, `rows * columns`.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn in_bounds(&self, point: Point) -> bool {
        (0..self.rows).contains(&point.row) && (0..self.columns).contains(&point.column)
    }

    pub fn validate(&self, point: Point) -> Result<Point> {
        if self.in_bounds(point) {
            Ok(point)
        } else {
            Err(GameError::OutOfBounds(point))
        }
    }

    pub fn get(&self, point: Point) -> Result<&T> {
        let point = self.validate(point)?;
        Ok(&self.items[point.to_nd_index()])
    }

    pub fn get_mut(&mut self, point: Point) -> Result<&mut T> {
        let point = self.validate(point)?;
        Ok(&mut self.items[point.to_nd_index()])
    }

    pub fn set(&mut self, point: Point, item: T) -> Result<()> {
        *self.get_mut(point)? = item;
        Ok(())
    }

    /// Row-major linear index, `row * columns + column`.
    pub fn index_of(&self, point: Point) -> Result<usize> {
        let point = self.validate(point)?;
        Ok(point.row as usize * self.columns() + point.column as usize)
    }

    /// Inverse of [`Grid::index_of`].
    pub fn point_of(&self, index: usize) -> Result<Point> {
        let row = Coord::try_from(index / self.columns()).unwrap_or(Coord::MAX);
        // always below `columns`, which fits a coordinate
        let column = (index % self.columns()) as Coord;
        self.validate(Point::new(row, column))
    }

    /// In-bounds Moore neighbors of `point`, row-major over the surrounding 3x3 block.
    pub fn neighbors(&self, point: Point) -> NeighborIter {
        NeighborIter::new(point, (self.rows, self.columns))
    }

    /// Every slot with its point, in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Point, &T)> {
        self.items
            .indexed_iter()
            .map(|((row, column), item)| (Point::new(row as Coord, column as Coord), item))
    }

    pub fn points(&self) -> impl Iterator<Item = Point> + use<T> {
        let (rows, columns) = (self.rows, self.columns);
        (0..rows).flat_map(move |row| (0..columns).map(move |column| Point::new(row, column)))
    }
}

impl<T> Index<Point> for Grid<T> {
    type Output = T;

    fn index(&self, point: Point) -> &Self::Output {
        &self.items[point.to_nd_index()]
    }
}

impl<T> IndexMut<Point> for Grid<T> {
    fn index_mut(&mut self, point: Point) -> &mut Self::Output {
        &mut self.items[point.to_nd_index()]
    }
}

#[derive(Debug)]
pub struct NeighborIter {
    center: Point,
    bounds: (Coord, Coord),
    index: u8,
}

impl NeighborIter {
    fn new(center: Point, bounds: (Coord, Coord)) -> Self {
        Self {
            center,
            bounds,
            index: 0,
        }
    }
}

impl Iterator for NeighborIter {
    type Item = Point;

    fn next(&mut self) -> Option<Self::Item> {
        let (rows, columns) = self.bounds;
        while let Some(&delta) = DISPLACEMENTS.get(usize::from(self.index)) {
            self.index += 1;
            let (Some(row), Some(column)) = (
                self.center.row.checked_add(delta.0),
                self.center.column.checked_add(delta.1),
            ) else {
                continue;
            };
            if (0..rows).contains(&row) && (0..columns).contains(&column) {
                return Some(Point::new(row, column));
            }
        }
        None
    }
}
