use serde::{Deserialize, Serialize};

use crate::coordinate::Coordinate;
use crate::error::IndexOutOfRange;

/// Ordered list of coordinates. The order defines the path (or ring) order of the geometry that owns it.
///
/// The sequence cannot be changed after creation. To change coordinates of a geometry, build a new one.
#[derive(Debug, Default, Clone, PartialEq, Deserialize, Serialize)]
#[serde(transparent)]
pub struct CoordinateSequence {
    points: Vec<Coordinate>,
}

impl CoordinateSequence {
    /// Creates a new sequence.
    pub fn new(points: Vec<Coordinate>) -> Self {
        Self { points }
    }

    /// Number of coordinates.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns true if the sequence has no coordinates.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Coordinate at the given position.
    pub fn get(&self, index: usize) -> Result<Coordinate, IndexOutOfRange> {
        self.points.get(index).copied().ok_or(IndexOutOfRange {
            index,
            len: self.points.len(),
        })
    }

    /// First coordinate of the sequence.
    pub fn first(&self) -> Option<Coordinate> {
        self.points.first().copied()
    }

    /// Iterates over the coordinates in order.
    pub fn iter(&self) -> impl Iterator<Item = &Coordinate> {
        self.points.iter()
    }

    /// Copies all coordinates into a new vector.
    pub fn to_vec(&self) -> Vec<Coordinate> {
        self.points.clone()
    }
}

impl From<Vec<Coordinate>> for CoordinateSequence {
    fn from(value: Vec<Coordinate>) -> Self {
        Self::new(value)
    }
}

impl FromIterator<Coordinate> for CoordinateSequence {
    fn from_iter<T: IntoIterator<Item = Coordinate>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a CoordinateSequence {
    type Item = &'a Coordinate;
    type IntoIter = std::slice::Iter<'a, Coordinate>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}
