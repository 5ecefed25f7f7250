//! Drawing surfaces.

use {
  crate::{
    error::{ColorError, Result},
    geometry::{Offset, PixelSpace, Point}
  },
  euclid::{Box2D, Size2D},
  image::{Pixel, Rgba, RgbaImage}
};


/// Something that can be wiped and covered in filled squares.
pub trait Canvas {
  fn clear(&mut self);
  /// Filled, borderless square from `origin` to `origin + size` (exclusive).
  fn draw_rect(&mut self, origin: Point, size: i32, color: Rgba<u8>);
}

/// Raster backend.
#[derive(Debug, Clone)]
pub struct ImageCanvas {
  image: RgbaImage,
  background: Rgba<u8>
}

impl ImageCanvas {
  pub fn new(size: Size2D<u32, PixelSpace>, background: Rgba<u8>) -> Self {
    Self {
      image: RgbaImage::from_pixel(size.width, size.height, background),
      background
    }
  }

  pub fn image(&self) -> &RgbaImage { &self.image }
  pub fn into_image(self) -> RgbaImage { self.image }
}

impl Canvas for ImageCanvas {
  fn clear(&mut self) {
    let background = self.background;
    self.image.pixels_mut().for_each(|pixel| *pixel = background);
  }

  fn draw_rect(&mut self, origin: Point, size: i32, color: Rgba<u8>) {
    let (width, height) = self.image.dimensions();
    let screen = Box2D::from_size(Size2D::new(width as i32, height as i32));
    let rect = match Box2D::new(origin, origin + Offset::splat(size)).intersection(&screen) {
      Some(x) => x,
      None => return // entirely off canvas
    };
    itertools::iproduct!(rect.y_range(), rect.x_range())
      .for_each(|(y, x)| self.image.get_pixel_mut(x as u32, y as u32).blend(&color));
  }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct DrawCall {
  pub origin: Point,
  pub size: i32,
  pub color: Rgba<u8>
}

/// Keeps every draw call since the last `clear`, and counts the clears.
#[derive(Debug, Clone, Default)]
pub struct Recorder {
  calls: Vec<DrawCall>,
  clears: usize
}

impl Recorder {
  pub fn calls(&self) -> &[DrawCall] { &self.calls }
  pub fn clears(&self) -> usize { self.clears }
}

impl Canvas for Recorder {
  fn clear(&mut self) {
    self.calls.clear();
    self.clears += 1;
  }

  fn draw_rect(&mut self, origin: Point, size: i32, color: Rgba<u8>) {
    self.calls.push(DrawCall { origin, size, color });
  }
}

/// `#rrggbb` or `#rrggbbaa`.
pub fn parse_color(text: &str) -> Result<Rgba<u8>, ColorError> {
  let hex = text.strip_prefix('#')
    .ok_or_else(|| ColorError::MissingHash(text.to_string()))?;
  if !matches!(hex.len(), 6 | 8) {
    return Err(ColorError::BadLength(hex.len()));
  }
  if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
    return Err(ColorError::BadDigit(text.to_string()));
  }
  let value = u32::from_str_radix(hex, 16)
    .map_err(|_| ColorError::BadDigit(text.to_string()))?;
  let [a, b, c, d] = value.to_be_bytes();
  Ok(match hex.len() {
    6 => Rgba([b, c, d, 0xff]),
    _ => Rgba([a, b, c, d])
  })
}
