use {
  heart_pulse::{
    animator::Animator,
    canvas::{Canvas, ImageCanvas, Recorder},
    config::Config,
    field::PointField,
    geometry::Point
  },
  anyhow::Result,
  rand::SeedableRng,
  rand_pcg::Pcg64,
  std::collections::HashSet
};

fn animator(config: Config) -> Result<Animator<Pcg64>> {
  let mut rng = Pcg64::seed_from_u64(2023);
  let field = PointField::build(&config, &mut rng);
  Animator::new(field, config, rng)
}

fn drawn_points(animator: &Animator<Pcg64>, frame: usize) -> HashSet<Point> {
  let mut canvas = Recorder::default();
  animator.render(&mut canvas, frame);
  canvas.calls().iter().map(|call| call.origin).collect()
}

#[test_log::test]
fn render_repeats_every_cycle() -> Result<()> {
  let animator = animator(Config::default().with_outline_count(100))?;

  let first = drawn_points(&animator, 0);
  assert!(!first.is_empty());
  assert_eq!(first, drawn_points(&animator, 20));
  (1..20).for_each(|k| assert_eq!(drawn_points(&animator, k), drawn_points(&animator, k + 40)));
  Ok(())
}

#[test_log::test]
fn heart_breathes() -> Result<()> {
  let config = Config::default().with_jitter(0);
  let center = config.center();
  let animator = animator(config)?;

  // mean distance from the center, per frame
  let spread = |frame: usize| {
    let points = animator.frame(frame);
    points.iter()
      .map(|p| (p.point.to_f64() - center).length())
      .sum::<f64>() / points.len() as f64
  };
  // ratio peaks at frame 5 (pulled in) and bottoms out at frame 15 (pushed out)
  assert!(spread(5) < spread(0));
  assert!(spread(0) < spread(15));
  Ok(())
}

#[test_log::test]
fn sizes_are_redrawn_per_computation() -> Result<()> {
  let mut animator = animator(Config::default().with_outline_count(300).with_jitter(0))?;
  let before = animator.frame(0).to_vec();
  animator.precompute(0);
  let after = animator.frame(0);

  assert!(before.iter().zip(after).all(|(a, b)| a.point == b.point));
  assert!(before.iter().zip(after).any(|(a, b)| a.size != b.size));
  Ok(())
}

#[test_log::test]
fn raster_frame() -> Result<()> {
  let config = Config::default();
  let (color, background) = (config.color, config.background);
  let animator = animator(config.clone())?;
  let mut canvas = ImageCanvas::new(config.size(), background);

  animator.render(&mut canvas, 3);
  let image = canvas.image();
  assert_eq!(image.dimensions(), (640, 480));
  let painted = image.pixels().filter(|pixel| **pixel == color).count();
  assert!(painted > 1000, "only {} pixels painted", painted);
  // far corners stay empty
  assert_eq!(*image.get_pixel(0, 0), background);
  assert_eq!(*image.get_pixel(639, 479), background);

  canvas.clear();
  assert!(canvas.image().pixels().all(|pixel| *pixel == background));
  Ok(())
}
