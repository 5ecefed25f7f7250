use {
  super::*,
  crate::{
    canvas::Recorder,
    config::Config,
    field::PointField
  },
  anyhow::bail,
  rand::SeedableRng,
  rand_pcg::Pcg64
};

fn player(config: Config) -> Result<Player<Pcg64, Recorder>> {
  let mut rng = Pcg64::seed_from_u64(0);
  let field = PointField::build(&config, &mut rng);
  Ok(Player::new(Animator::new(field, config, rng)?, Recorder::default()))
}

fn unwrap(player: Rc<RefCell<Player<Pcg64, Recorder>>>) -> Player<Pcg64, Recorder> {
  match Rc::try_unwrap(player) {
    Ok(cell) => cell.into_inner(),
    Err(_) => panic!("player still referenced by the timer loop")
  }
}

#[test] fn timer_runs_in_deadline_order() {
  let log = Rc::new(RefCell::new(vec![]));
  let mut timer = TimerLoop::new(ManualClock::default());
  for (name, ms) in [("a", 20), ("b", 10), ("c", 10)] {
    let log = log.clone();
    timer.after(Duration::from_millis(ms), Box::new(move |timer: &mut TimerLoop<ManualClock>| {
      log.borrow_mut().push((name, timer.clock().now()))
    }));
  }
  assert_eq!(timer.pending(), 3);
  assert_eq!(timer.run(), 3);
  assert_eq!(*log.borrow(), vec![
    ("b", Duration::from_millis(10)),
    ("c", Duration::from_millis(10)),
    ("a", Duration::from_millis(20))
  ]);
}

#[test] fn callbacks_can_reschedule() {
  let count = Rc::new(Cell::new(0));
  fn again(count: Rc<Cell<u32>>, timer: &mut TimerLoop<ManualClock>) {
    count.set(count.get() + 1);
    if count.get() < 5 {
      timer.after(Duration::from_millis(30), Box::new(move |timer: &mut TimerLoop<ManualClock>| again(count, timer)));
    }
  }
  let mut timer = TimerLoop::new(ManualClock::default());
  again(count.clone(), &mut timer);
  assert_eq!(timer.run(), 4);
  assert_eq!(count.get(), 5);
  assert_eq!(timer.clock().now(), Duration::from_millis(120));
}

#[test] fn player_paces_and_wraps_frames() -> Result<()> {
  let frames = Rc::new(RefCell::new(vec![]));
  let seen = frames.clone();
  let player = player(Config::default().with_outline_count(50))?
    .with_limit(45)
    .with_frame_hook(move |_, frame| { seen.borrow_mut().push(frame); Ok(()) });

  let mut timer = TimerLoop::new(ManualClock::default());
  let player = player.start(&mut timer);
  timer.run();

  assert_eq!(timer.clock().now(), Duration::from_millis(44 * 30));
  let expected = (0..45).map(|k| k % 20).collect::<Vec<_>>();
  assert_eq!(*frames.borrow(), expected);

  let player = unwrap(player);
  assert_eq!(player.rendered(), 45);
  assert_eq!(player.canvas().clears(), 45);
  player.finish()?;
  Ok(())
}

#[test] fn stop_handle_halts_rescheduling() -> Result<()> {
  let player = player(Config::default().with_outline_count(50))?;
  let stop = player.stop_handle();
  let player = player.with_frame_hook(move |_, frame| {
    if frame == 4 { stop.stop(); }
    Ok(())
  });

  let mut timer = TimerLoop::new(ManualClock::default());
  let player = player.start(&mut timer);
  timer.run();
  assert_eq!(timer.pending(), 0);
  assert_eq!(unwrap(player).rendered(), 5);
  Ok(())
}

#[test] fn hook_error_stops_and_surfaces() -> Result<()> {
  let player = player(Config::default().with_outline_count(50))?
    .with_frame_hook(|_, frame| match frame {
      2 => bail!("disk full"),
      _ => Ok(())
    });

  let mut timer = TimerLoop::new(ManualClock::default());
  let player = player.start(&mut timer);
  timer.run();
  let player = unwrap(player);
  assert_eq!(player.rendered(), 3);
  let error = player.finish().err().map(|e| e.to_string());
  assert_eq!(error.as_deref(), Some("disk full"));
  Ok(())
}

#[test] fn stopped_player_does_not_render() -> Result<()> {
  let mut player = player(Config::default().with_outline_count(50))?;
  player.stop_handle().stop();
  assert!(!player.step());
  assert_eq!(player.rendered(), 0);
  assert_eq!(player.canvas().clears(), 0);
  Ok(())
}
