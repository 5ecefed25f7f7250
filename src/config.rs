//! Named constants of the animation.

use {
  crate::{
    error::{Result, bail},
    geometry::{PixelSpace, PointF}
  },
  euclid::Size2D,
  image::Rgba,
  std::{f64::consts::PI, ops::RangeInclusive, time::Duration}
};

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
  pub width: u32,
  pub height: u32,
  /// Enlargement factor of the heart curve, which natively spans about 32x30 units.
  pub enlarge: f64,
  /// Angles sampled on the curve. Coincident samples collapse, so the outline
  /// usually ends up with fewer points.
  pub outline_count: usize,
  /// Scatter samples derived from every outline point.
  pub near_surface_samples: usize,
  pub near_surface_ratio: f64,
  /// Draws, with replacement, from the outline.
  pub interior_count: usize,
  pub interior_ratio: f64,
  /// Distinct precomputed frames before playback repeats.
  pub cycle_length: usize,
  /// Peak radial displacement of a frame, in pixels.
  pub pulse_amplitude: f64,
  /// Per-axis dither amplitude, `0` disables it.
  pub jitter: i32,
  pub outline_size: RangeInclusive<i32>,
  pub scatter_size: RangeInclusive<i32>,
  pub frame_delay: Duration,
  pub color: Rgba<u8>,
  pub background: Rgba<u8>
}

impl Default for Config {
  fn default() -> Self {
    Self {
      width: 640,
      height: 480,
      enlarge: 8.0,
      outline_count: 2000,
      near_surface_samples: 3,
      near_surface_ratio: 0.05,
      interior_count: 4000,
      interior_ratio: 0.15,
      cycle_length: 20,
      pulse_amplitude: 10.0,
      jitter: 1,
      outline_size: 1..=3,
      scatter_size: 1..=2,
      frame_delay: Duration::from_millis(30),
      color: Rgba([0xff, 0x71, 0x71, 0xff]),
      background: Rgba([0, 0, 0, 0xff])
    }
  }
}

impl Config {
  pub fn with_size(mut self, width: u32, height: u32) -> Self {
    self.width = width;
    self.height = height;
    self
  }

  pub fn with_outline_count(mut self, outline_count: usize) -> Self {
    self.outline_count = outline_count;
    self
  }

  pub fn with_interior_count(mut self, interior_count: usize) -> Self {
    self.interior_count = interior_count;
    self
  }

  pub fn with_cycle_length(mut self, cycle_length: usize) -> Self {
    self.cycle_length = cycle_length;
    self
  }

  pub fn with_jitter(mut self, jitter: i32) -> Self {
    self.jitter = jitter;
    self
  }

  pub fn with_frame_delay(mut self, frame_delay: Duration) -> Self {
    self.frame_delay = frame_delay;
    self
  }

  pub fn with_color(mut self, color: Rgba<u8>) -> Self {
    self.color = color;
    self
  }

  pub fn validate(&self) -> Result<()> {
    if self.width == 0 || self.height == 0 {
      bail!("canvas must not be empty: {}x{}", self.width, self.height);
    }
    if self.cycle_length == 0 {
      bail!("cycle length must be positive");
    }
    for (name, range) in [("outline", &self.outline_size), ("scatter", &self.scatter_size)] {
      if range.is_empty() || *range.start() < 1 {
        bail!("{} size range must be non-empty and positive: {:?}", name, range);
      }
    }
    if !(self.near_surface_ratio >= 0.0 && self.interior_ratio >= 0.0) {
      bail!("scatter ratios must be non-negative: {}, {}",
        self.near_surface_ratio, self.interior_ratio);
    }
    if self.jitter < 0 {
      bail!("jitter must be non-negative: {}", self.jitter);
    }
    Ok(())
  }

  pub fn size(&self) -> Size2D<u32, PixelSpace> {
    Size2D::new(self.width, self.height)
  }

  /// `(W/2, H/2)`, not rounded.
  pub fn center(&self) -> PointF {
    PointF::new(self.width as f64 / 2.0, self.height as f64 / 2.0)
  }

  /// Breathing coefficient of a frame, one full sine period per cycle.
  pub fn ratio(&self, frame: usize) -> f64 {
    let phase = (frame % self.cycle_length) as f64 / self.cycle_length as f64;
    self.pulse_amplitude * (2.0 * PI * phase).sin()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test] fn default_is_valid() -> Result<()> {
    Config::default().validate()
  }

  #[test] fn rejects_degenerate() {
    assert!(Config::default().with_size(0, 480).validate().is_err());
    assert!(Config::default().with_cycle_length(0).validate().is_err());
    assert!(Config::default().with_jitter(-1).validate().is_err());
    let mut config = Config::default();
    config.scatter_size = 0..=2;
    assert!(config.validate().is_err());
    // degenerate, but allowed
    assert!(Config::default().with_outline_count(0).validate().is_ok());
  }

  #[test] fn ratio_matches_breathing_curve() {
    let config = Config::default();
    (0..40).for_each(|frame| {
      let expected = 10.0 * (frame as f64 / 10.0 * PI).sin();
      assert!((config.ratio(frame) - expected).abs() < 1e-9, "frame {}", frame);
    });
    assert_eq!(config.ratio(0), 0.0);
    assert!((config.ratio(5) - 10.0).abs() < 1e-9);
  }
}
