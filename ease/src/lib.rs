//! Easing curves and a fixed-tick tween driver.
//!
//! A [`Curve`] maps the progress of an animation in `[0., 1.]` to a shaped
//! progress. [`tween`] drives a value from one end to the other by sampling a
//! curve every [`TICK`], handing each value to a write callback.
//!
//! ```no_run
//! use std::time::Duration;
//!
//! use ribir_ease::prelude::*;
//!
//! let handle = tween(|v| println!("{v}"), 0., 10., Duration::from_millis(300), &OUT_BOUNCE)
//!   .expect("non-zero duration");
//! handle.wait();
//! ```

pub mod curve;
pub mod error;
pub mod tween;

pub use curve::{
  Curve, Derivative, Easing, IN_BOUNCE, IN_CUBIC, IN_OUT_BOUNCE, IN_OUT_CUBIC, IN_OUT_SINE,
  IN_SINE, LINEAR, OUT_BOUNCE, OUT_CUBIC, OUT_SINE,
};
pub use error::{CurveError, TweenError};
pub use tween::{TICK, TweenHandle, TweenOptions, tween};

pub mod prelude {
  pub use crate::{
    curve::*,
    error::{CurveError, TweenError},
    tween::{TICK, TweenHandle, TweenOptions, tween},
  };
}
