//! Cooperative, single-threaded timing.
//!
//! [`TimerLoop`] runs one-shot callbacks in deadline order, each of which may schedule
//! more. [`Player`] is the callback chain that replays an [`Animator`] at a fixed pace.

use {
  crate::{
    animator::Animator,
    canvas::Canvas,
    error::Result
  },
  std::{
    cell::{Cell, RefCell},
    cmp::Ordering,
    collections::BinaryHeap,
    rc::Rc,
    thread,
    time::{Duration, Instant}
  }
};

#[cfg(test)] mod tests;

pub type Callback<S> = Box<dyn FnOnce(&mut S)>;

pub trait Scheduler: Sized {
  /// Invoke `callback` once, no earlier than `delay` from now.
  fn after(&mut self, delay: Duration, callback: Callback<Self>);
}

pub trait Clock {
  /// Time elapsed since the clock was created.
  fn now(&self) -> Duration;
  fn sleep_until(&mut self, deadline: Duration);
}

#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
  start: Instant
}

impl Default for SystemClock {
  fn default() -> Self { Self { start: Instant::now() } }
}

impl Clock for SystemClock {
  fn now(&self) -> Duration { self.start.elapsed() }

  fn sleep_until(&mut self, deadline: Duration) {
    if let Some(remaining) = deadline.checked_sub(self.now()) {
      thread::sleep(remaining);
    }
  }
}

/// Virtual time, jumps straight to every deadline.
#[derive(Debug, Clone, Copy, Default)]
pub struct ManualClock {
  now: Duration
}

impl Clock for ManualClock {
  fn now(&self) -> Duration { self.now }
  fn sleep_until(&mut self, deadline: Duration) { self.now = self.now.max(deadline); }
}

struct Pending<S> {
  deadline: Duration,
  seq: u64,
  callback: Callback<S>
}

// min-heap on (deadline, seq)
impl<S> Ord for Pending<S> {
  fn cmp(&self, other: &Self) -> Ordering {
    (other.deadline, other.seq).cmp(&(self.deadline, self.seq))
  }
}
impl<S> PartialOrd for Pending<S> {
  fn partial_cmp(&self, other: &Self) -> Option<Ordering> { Some(self.cmp(other)) }
}
impl<S> PartialEq for Pending<S> {
  fn eq(&self, other: &Self) -> bool { self.cmp(other) == Ordering::Equal }
}
impl<S> Eq for Pending<S> {}

/// Deadline-ordered callback queue. Callbacks with equal deadlines run in the order
/// they were scheduled.
pub struct TimerLoop<C> {
  clock: C,
  queue: BinaryHeap<Pending<Self>>,
  seq: u64
}

impl<C: Clock> TimerLoop<C> {
  pub fn new(clock: C) -> Self {
    Self { clock, queue: BinaryHeap::new(), seq: 0 }
  }

  pub fn clock(&self) -> &C { &self.clock }
  pub fn pending(&self) -> usize { self.queue.len() }

  /// Run callbacks until none are left. Returns how many ran.
  pub fn run(&mut self) -> usize {
    let mut count = 0;
    while let Some(Pending { deadline, callback, .. }) = self.queue.pop() {
      self.clock.sleep_until(deadline);
      callback(self);
      count += 1;
    }
    count
  }
}

impl<C: Clock> Scheduler for TimerLoop<C> {
  fn after(&mut self, delay: Duration, callback: Callback<Self>) {
    let deadline = self.clock.now() + delay;
    self.seq += 1;
    self.queue.push(Pending { deadline, seq: self.seq, callback });
  }
}

/// Prevents a [`Player`] from rendering or rescheduling once stopped.
#[derive(Debug, Clone, Default)]
pub struct StopHandle(Rc<Cell<bool>>);

impl StopHandle {
  pub fn stop(&self) { self.0.set(true) }
  pub fn is_stopped(&self) -> bool { self.0.get() }
}

type FrameHook<Cv> = Box<dyn FnMut(&Cv, usize) -> Result<()>>;

/// Renders frame `k`, then schedules frame `k + 1` after the configured delay.
pub struct Player<R, Cv> {
  animator: Animator<R>,
  canvas: Cv,
  /// Always below the cycle length.
  frame: usize,
  rendered: u64,
  limit: Option<u64>,
  stop: StopHandle,
  hook: Option<FrameHook<Cv>>,
  error: Option<anyhow::Error>
}

impl<R, Cv: Canvas> Player<R, Cv> {
  pub fn new(animator: Animator<R>, canvas: Cv) -> Self {
    Self {
      animator,
      canvas,
      frame: 0,
      rendered: 0,
      limit: None,
      stop: StopHandle::default(),
      hook: None,
      error: None
    }
  }

  /// Stop after `frames` renders.
  pub fn with_limit(mut self, frames: u64) -> Self {
    self.limit = Some(frames);
    self
  }

  /// Called with the canvas and the cycle position after every render. An error
  /// stops playback and is returned by [`Player::finish`].
  pub fn with_frame_hook(mut self, hook: impl FnMut(&Cv, usize) -> Result<()> + 'static) -> Self {
    self.hook = Some(Box::new(hook));
    self
  }

  pub fn stop_handle(&self) -> StopHandle { self.stop.clone() }
  pub fn rendered(&self) -> u64 { self.rendered }
  pub fn canvas(&self) -> &Cv { &self.canvas }

  /// Render the current frame and advance. Returns whether another frame is due.
  pub fn step(&mut self) -> bool {
    if self.stop.is_stopped() {
      return false;
    }
    self.animator.render(&mut self.canvas, self.frame);
    if let Some(hook) = self.hook.as_mut() {
      if let Err(e) = hook(&self.canvas, self.frame) {
        log::error!("frame {}: {:#}", self.rendered, e);
        self.error = Some(e);
        self.stop.stop();
      }
    }
    self.rendered += 1;
    self.frame = (self.frame + 1) % self.animator.cycle_length();
    !self.stop.is_stopped() && self.limit.map_or(true, |limit| self.rendered < limit)
  }

  /// Render the first frame now and keep rescheduling on `scheduler`.
  pub fn start<S: Scheduler>(self, scheduler: &mut S) -> Rc<RefCell<Self>>
    where R: 'static, Cv: 'static
  {
    let player = Rc::new(RefCell::new(self));
    Self::tick(player.clone(), scheduler);
    player
  }

  fn tick<S: Scheduler>(player: Rc<RefCell<Self>>, scheduler: &mut S)
    where R: 'static, Cv: 'static
  {
    let (more, delay) = {
      let mut this = player.borrow_mut();
      (this.step(), this.animator.config().frame_delay)
    };
    if more {
      scheduler.after(delay, Box::new(move |scheduler: &mut S| Self::tick(player, scheduler)));
    }
  }

  /// Give back the animator and canvas, or the first hook error.
  pub fn finish(self) -> Result<(Animator<R>, Cv)> {
    match self.error {
      Some(e) => Err(e),
      None => Ok((self.animator, self.canvas))
    }
  }
}
