//! Headless host: writes the pulsing heart to an animated GIF, or plays it in real time
//! and dumps every frame as PNG.

use {
  heart_pulse::{
    animator::Animator,
    canvas::{parse_color, ImageCanvas, Recorder},
    config::Config,
    error::{self, Result},
    field::PointField,
    scheduler::{Player, SystemClock, TimerLoop}
  },
  anyhow::Context,
  clap::{Parser, Subcommand},
  image::{
    codecs::gif::{GifEncoder, Repeat},
    Delay, Frame, Rgba
  },
  rand::SeedableRng,
  rand_pcg::Pcg64,
  std::{fs, path::{Path, PathBuf}, process::ExitCode, rc::Rc}
};

#[derive(Parser, Debug)]
#[command(name = "heart-pulse", version, about = "Shrinking heart")]
struct Cli {
  /// Random seed. Fresh entropy if omitted.
  #[arg(long)]
  seed: Option<u64>,

  /// Angles sampled on the heart curve.
  #[arg(long, default_value_t = Config::default().outline_count)]
  outline_count: usize,

  /// Dot color, `#rrggbb` or `#rrggbbaa`.
  #[arg(long, value_parser = parse_color)]
  color: Option<Rgba<u8>>,

  /// Render one cycle without drawing pixels and log the draw calls per frame.
  #[arg(long)]
  dry_run: bool,

  #[command(subcommand)]
  cmd: Command
}

#[derive(Subcommand, Debug)]
enum Command {
  /// Render one full cycle as a looping GIF.
  Gif {
    #[arg(long, default_value = "heart.gif")]
    out: PathBuf
  },
  /// Play in real time for a number of frames.
  Play {
    #[arg(long, default_value_t = 100)]
    frames: u64,

    /// Write every rendered frame here as PNG.
    #[arg(long)]
    out_dir: Option<PathBuf>
  }
}

fn main() -> ExitCode {
  env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
  match run(Cli::parse()) {
    Ok(()) => ExitCode::SUCCESS,
    Err(e) => {
      eprint!("{}", error::display(&e));
      ExitCode::FAILURE
    }
  }
}

fn run(cli: Cli) -> Result<()> {
  let mut config = Config::default().with_outline_count(cli.outline_count);
  if let Some(color) = cli.color {
    config = config.with_color(color);
  }
  let mut rng = match cli.seed {
    Some(seed) => Pcg64::seed_from_u64(seed),
    None => Pcg64::from_entropy()
  };

  let field = PointField::build(&config, &mut rng);
  log::info!("{} points ({} on the outline)", field.len(), field.outline().len());
  let animator = Animator::new(field, config.clone(), rng)?;
  if cli.dry_run {
    dry_run(&animator);
    return Ok(());
  }
  let canvas = ImageCanvas::new(config.size(), config.background);

  match cli.cmd {
    Command::Gif { out } => write_gif(&animator, canvas, &out),
    Command::Play { frames, out_dir } => play(animator, canvas, frames, out_dir)
  }
}

/// Draw calls issued by every frame of the cycle.
fn dry_run<R>(animator: &Animator<R>) -> Vec<usize> {
  let mut canvas = Recorder::default();
  (0..animator.cycle_length()).map(|frame| {
    animator.render(&mut canvas, frame);
    log::info!("frame {}: {} draw calls", frame, canvas.calls().len());
    canvas.calls().len()
  }).collect()
}

fn write_gif(animator: &Animator<Pcg64>, mut canvas: ImageCanvas, out: &Path) -> Result<()> {
  let delay = Delay::from_saturating_duration(animator.config().frame_delay);
  let frames = (0..animator.cycle_length()).map(|frame| {
    animator.render(&mut canvas, frame);
    Frame::from_parts(canvas.image().clone(), 0, 0, delay)
  }).collect::<Vec<_>>();

  let file = fs::File::create(out)
    .with_context(|| format!("unable to create {:?}", out))?;
  let mut encoder = GifEncoder::new(file);
  encoder.set_repeat(Repeat::Infinite)?;
  encoder.encode_frames(frames)?;
  log::info!("wrote {} frames to {:?}", animator.cycle_length(), out);
  Ok(())
}

fn play(animator: Animator<Pcg64>, canvas: ImageCanvas, frames: u64, out_dir: Option<PathBuf>) -> Result<()> {
  let mut player = Player::new(animator, canvas).with_limit(frames);
  if let Some(dir) = out_dir {
    fs::create_dir_all(&dir)
      .with_context(|| format!("unable to create {:?}", dir))?;
    let mut index = 0u64;
    player = player.with_frame_hook(move |canvas: &ImageCanvas, _| {
      let path = dir.join(format!("frame_{:05}.png", index));
      index += 1;
      canvas.image().save(&path)
        .with_context(|| format!("unable to write {:?}", path))
    });
  }

  let mut timer = TimerLoop::new(SystemClock::default());
  let player = player.start(&mut timer);
  timer.run();

  let player = Rc::try_unwrap(player)
    .map_err(|_| anyhow::anyhow!("player is still scheduled"))?
    .into_inner();
  log::info!("played {} frames", player.rendered());
  player.finish().map(|_| ())
}
