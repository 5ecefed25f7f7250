//! The static point populations of the heart.

use {
  crate::{
    config::Config,
    geometry::{from_center, Point, PointF, PointSet}
  },
  rand::{Rng, distributions::OpenClosed01},
  std::f64::consts::PI
};


/// Point on the heart curve in the direction of angle `t`.
///
/// Classic heart parametrisation, enlarged and moved to the canvas center.
/// Coordinates are truncated towards zero.
pub fn curve_point(t: f64, config: &Config) -> Point {
  let center = config.center();
  let x = 16.0 * t.sin().powi(3);
  let y = -(13.0 * t.cos() - 5.0 * (2.0 * t).cos() - 2.0 * (3.0 * t).cos() - (4.0 * t).cos());
  Point::new(
    (x * config.enlarge + center.x) as i32,
    (y * config.enlarge + center.y) as i32
  )
}

/// Push `point` along the axis towards (or through) `center` by an exponentially
/// distributed fraction of its distance, independently per axis.
///
/// Larger `ratio` gives wider scatter. Uniform draws come from `(0, 1]`, so the
/// logarithm is always finite.
pub fn scatter<R: Rng + ?Sized>(point: Point, ratio: f64, center: PointF, rng: &mut R) -> Point {
  let offset = from_center(point, center);
  let r1: f64 = rng.sample(OpenClosed01);
  let r2: f64 = rng.sample(OpenClosed01);
  let dx = (-ratio * r1.ln() * offset.x).floor() as i32;
  let dy = (-ratio * r2.ln() * offset.y).floor() as i32;
  Point::new(point.x - dx, point.y - dy)
}

/// Three immutable populations, built once.
#[derive(Debug, Clone)]
pub struct PointField {
  outline: PointSet,
  near_surface: PointSet,
  interior: PointSet
}

impl PointField {
  pub fn build<R: Rng + ?Sized>(config: &Config, rng: &mut R) -> Self {
    let center = config.center();

    let outline = (0..config.outline_count)
      .map(|_| curve_point(rng.gen_range(0.0..2.0 * PI), config))
      .collect::<PointSet>();

    let mut near_surface = PointSet::new();
    for &point in &outline {
      for _ in 0..config.near_surface_samples {
        near_surface.insert(scatter(point, config.near_surface_ratio, center, rng));
      }
    }

    // nothing to resample from an empty outline
    let mut interior = PointSet::new();
    if !outline.is_empty() {
      let source = outline.as_slice();
      for _ in 0..config.interior_count {
        let point = source[rng.gen_range(0..source.len())];
        interior.insert(scatter(point, config.interior_ratio, center, rng));
      }
    }

    log::debug!(
      "point field: {} outline ({} sampled), {} near surface, {} interior",
      outline.len(), config.outline_count, near_surface.len(), interior.len()
    );
    Self { outline, near_surface, interior }
  }

  /// Points exactly on the curve.
  pub fn outline(&self) -> &PointSet { &self.outline }
  /// Tight scatter around the outline.
  pub fn near_surface(&self) -> &PointSet { &self.near_surface }
  /// Wide scatter, resampled from the outline.
  pub fn interior(&self) -> &PointSet { &self.interior }

  /// Total number of points over all populations.
  pub fn len(&self) -> usize {
    self.outline.len() + self.near_surface.len() + self.interior.len()
  }

  pub fn is_empty(&self) -> bool { self.len() == 0 }
}
