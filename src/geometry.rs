//! .
//!
//! The origin of coordinate system is in top-left corner, `y` pointing down, one unit per pixel.

use {
  euclid::{Point2D, Vector2D as V2},
  itertools::Itertools,
  std::collections::HashSet
};

/// Pixel coordinate basis
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct PixelSpace;

pub type Point = Point2D<i32, PixelSpace>;
/// Canvas center and other sub-pixel positions
pub type PointF = Point2D<f64, PixelSpace>;
pub type Offset = V2<i32, PixelSpace>;

/// A point together with the side of the square drawn at it.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct SizedPoint {
  pub point: Point,
  pub size: i32
}

/// Set of unique points, remembering the order of first insertion.
///
/// Duplicates collapse silently. Iteration order is the insertion order, which keeps
/// seeded generation reproducible across runs.
#[derive(Debug, Clone, Default)]
pub struct PointSet {
  points: Vec<Point>,
  index: HashSet<Point>
}

impl PointSet {
  pub fn new() -> Self { Self::default() }

  /// Returns `false` if the point was already present.
  pub fn insert(&mut self, point: Point) -> bool {
    let fresh = self.index.insert(point);
    if fresh { self.points.push(point); }
    fresh
  }

  pub fn contains(&self, point: &Point) -> bool { self.index.contains(point) }
  pub fn len(&self) -> usize { self.points.len() }
  pub fn is_empty(&self) -> bool { self.points.is_empty() }
  pub fn as_slice(&self) -> &[Point] { &self.points }
  pub fn iter(&self) -> impl Iterator<Item = &Point> + '_ { self.points.iter() }
}

impl FromIterator<Point> for PointSet {
  fn from_iter<I: IntoIterator<Item = Point>>(iter: I) -> Self {
    let points = iter.into_iter().unique().collect::<Vec<_>>();
    let index = points.iter().copied().collect();
    Self { points, index }
  }
}

impl<'a> IntoIterator for &'a PointSet {
  type Item = &'a Point;
  type IntoIter = std::slice::Iter<'a, Point>;
  fn into_iter(self) -> Self::IntoIter { self.points.iter() }
}

/// Offset of `point` from `center`, in floating point.
pub fn from_center(point: Point, center: PointF) -> V2<f64, PixelSpace> {
  point.to_f64() - center
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test] fn point_set_dedup_keeps_first_order() {
    let mut set = PointSet::new();
    assert!(set.insert(Point::new(3, 4)));
    assert!(set.insert(Point::new(1, 2)));
    assert!(!set.insert(Point::new(3, 4)));
    assert_eq!(set.as_slice(), &[Point::new(3, 4), Point::new(1, 2)]);

    let collected: PointSet = [Point::new(0, 0), Point::new(1, 1), Point::new(0, 0)]
      .into_iter()
      .collect();
    assert_eq!(collected.len(), 2);
    assert!(collected.contains(&Point::new(1, 1)));
  }
}
