//! Procedural pulsing heart, drawn as a cloud of small rectangles.
//!
//! The crate is split into a static part and an animated part:
//! - [`field::PointField`] samples the heart curve once and scatters two more point
//!   populations around it;
//! - [`animator::Animator`] derives a finite cycle of "breathing" frames from that
//!   static field and replays them onto a [`canvas::Canvas`].
//!
//! Anything that actually shows pixels to a human lives behind the [`canvas::Canvas`]
//! and [`scheduler::Scheduler`] traits.
//!
//! # Basic usage
//! ```
//! # use {
//! #   heart_pulse::{
//! #     animator::Animator,
//! #     canvas::Recorder,
//! #     config::Config,
//! #     field::PointField,
//! #   },
//! #   rand::SeedableRng,
//! # };
//! # fn main() -> anyhow::Result<()> {
//! let config = Config::default().with_outline_count(100);
//! let mut rng = rand_pcg::Pcg64::seed_from_u64(0);
//!
//! // sample the curve and both scatter populations, once
//! let field = PointField::build(&config, &mut rng);
//! // precompute every frame of the cycle
//! let animator = Animator::new(field, config, rng)?;
//!
//! let mut canvas = Recorder::default();
//! animator.render(&mut canvas, 0);
//! assert_eq!(canvas.calls().len(), animator.frame(0).len());
//! # Ok(())
//! # }
//! ```
//!
//! The real-time loop is a [`scheduler::Player`] pushed onto a [`scheduler::TimerLoop`];
//! see `src/main.rs` for a headless host writing GIF or PNG frames.

pub mod error;
pub mod config;
pub mod geometry;
pub mod field;
pub mod animator;
pub mod canvas;
pub mod scheduler;
