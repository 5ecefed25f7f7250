//! Per-frame transform of the point field and the cache replaying it.

use {
  crate::{
    canvas::Canvas,
    config::Config,
    error::Result,
    field::PointField,
    geometry::{from_center, Point, PointSet, SizedPoint}
  },
  humansize::{FileSize, file_size_opts},
  rand::Rng,
  std::ops::RangeInclusive
};


/// Move `point` radially by `ratio` pixels (towards the center for positive `ratio`),
/// plus a uniform dither in `[-jitter, jitter]` on each axis.
///
/// A point exactly at the center has no direction and stays where it is.
pub fn radial_rescale<R: Rng + ?Sized>(
  point: Point,
  ratio: f64,
  config: &Config,
  rng: &mut R
) -> Point {
  let offset = from_center(point, config.center());
  let distance = offset.length();
  if distance == 0.0 {
    return point;
  }
  let mut dither = || match config.jitter {
    0 => 0,
    j => rng.gen_range(-j..=j)
  };
  let dx = (offset.x / distance * ratio).floor() as i32 + dither();
  let dy = (offset.y / distance * ratio).floor() as i32 + dither();
  Point::new(point.x - dx, point.y - dy)
}

/// Precomputed frames, one slot per position of the cycle.
#[derive(Debug, Clone)]
pub struct FrameCache {
  frames: Vec<Vec<SizedPoint>>
}

impl FrameCache {
  fn with_cycle_length(cycle_length: usize) -> Self {
    Self { frames: vec![vec![]; cycle_length] }
  }

  pub fn cycle_length(&self) -> usize { self.frames.len() }

  /// Frame `index mod cycle_length`.
  pub fn get(&self, index: usize) -> &[SizedPoint] {
    &self.frames[index % self.frames.len()]
  }

  fn put(&mut self, index: usize, frame: Vec<SizedPoint>) {
    let len = self.frames.len();
    self.frames[index % len] = frame;
  }

  /// Bytes held by the cached points.
  pub fn footprint(&self) -> usize {
    self.frames.iter()
      .map(|frame| frame.capacity() * std::mem::size_of::<SizedPoint>())
      .sum()
  }
}

pub struct Animator<R> {
  field: PointField,
  config: Config,
  rng: R,
  cache: FrameCache
}

impl<R: Rng> Animator<R> {
  /// Validates `config` and precomputes every frame of the cycle.
  pub fn new(field: PointField, config: Config, rng: R) -> Result<Self> {
    config.validate()?;
    let mut animator = Self {
      cache: FrameCache::with_cycle_length(config.cycle_length),
      field,
      config,
      rng
    };
    animator.warm_up();
    Ok(animator)
  }

  fn warm_up(&mut self) {
    (0..self.cycle_length()).for_each(|frame| self.precompute(frame));
    let footprint = self.cache.footprint()
      .file_size(file_size_opts::CONVENTIONAL)
      .unwrap_or_else(|e| e);
    log::debug!("frame cache: {} frames x {} points, {}",
      self.cycle_length(), self.field.len(), footprint);
  }

  /// Recompute cycle position `frame mod cycle_length`: outline points first, then
  /// near surface, then interior. Sizes are drawn afresh on every call.
  pub fn precompute(&mut self, frame: usize) {
    let ratio = self.config.ratio(frame);
    let mut points = Vec::with_capacity(self.field.len());

    let populations: [(&PointSet, &RangeInclusive<i32>); 3] = [
      (self.field.outline(), &self.config.outline_size),
      (self.field.near_surface(), &self.config.scatter_size),
      (self.field.interior(), &self.config.scatter_size)
    ];
    for (population, sizes) in populations {
      for &point in population {
        let point = radial_rescale(point, ratio, &self.config, &mut self.rng);
        let size = self.rng.gen_range(sizes.clone());
        points.push(SizedPoint { point, size });
      }
    }
    self.cache.put(frame, points);
  }
}

impl<R> Animator<R> {
  /// Clear `canvas` and draw frame `frame mod cycle_length`.
  pub fn render<C: Canvas + ?Sized>(&self, canvas: &mut C, frame: usize) {
    canvas.clear();
    self.frame(frame).iter().for_each(|SizedPoint { point, size }|
      canvas.draw_rect(*point, *size, self.config.color)
    );
  }

  pub fn frame(&self, frame: usize) -> &[SizedPoint] { self.cache.get(frame) }
  pub fn cycle_length(&self) -> usize { self.cache.cycle_length() }
  pub fn field(&self) -> &PointField { &self.field }
  pub fn config(&self) -> &Config { &self.config }
}
