use std::{f64::consts::PI, fmt, str::FromStr, sync::Arc};

use crate::error::CurveError;

mod bounce;

/// Maps the progress of an animation, `t` in `[0., 1.]`, to the shaped
/// progress that is applied to the animated value.
///
/// Implementations must not clamp `t`: the last tick of a tween may pass a
/// value slightly above `1.`.
pub trait Easing {
  fn position(&self, t: f64) -> f64;
}

/// The velocity half of a curve. Curves without a closed-form derivative are
/// `Unsupported` rather than reporting a placeholder number.
#[derive(Clone, Copy, Debug)]
pub enum Derivative {
  Closed(fn(f64) -> f64),
  Unsupported,
}

/// A named, stateless easing curve.
///
/// The catalog curves are process-wide statics and may be shared freely
/// across threads and tween sessions.
#[derive(Clone, Copy, Debug)]
pub struct Curve {
  name: &'static str,
  position: fn(f64) -> f64,
  velocity: Derivative,
}

/// Animates at an even speed.
pub static LINEAR: Curve = Curve::new("Linear", |t| t).with_velocity(|_| 1.);

/// Starts slowly and accelerates, `t³`.
pub static IN_CUBIC: Curve = Curve::new("InCubic", |t| t * t * t).with_velocity(|t| 3. * t * t);

/// Starts quickly and decelerates to the end.
pub static OUT_CUBIC: Curve = Curve::new("OutCubic", |t| {
  let t = t - 1.;
  t * t * t + 1.
})
.with_velocity(|t| {
  let t = t - 1.;
  3. * t * t
});

/// Accelerates through the first half and decelerates through the second.
///
/// The velocity is measured per half of the curve, that is with respect to
/// `2t`, so it is half the slope of `position` against `t`.
pub static IN_OUT_CUBIC: Curve = Curve::new("InOutCubic", |t| {
  let t = t * 2.;
  if t < 1. {
    t * t * t / 2.
  } else {
    let t = t - 2.;
    (t * t * t + 2.) / 2.
  }
})
.with_velocity(|t| {
  let t = t * 2.;
  if t < 1. {
    3. * t * t / 2.
  } else {
    let t = t - 2.;
    3. * t * t / 2.
  }
});

/// Eases in along a quarter cosine.
pub static IN_SINE: Curve = Curve::new("InSine", |t| -(t * PI / 2.).cos() + 1.);

/// Eases out along a quarter sine.
pub static OUT_SINE: Curve = Curve::new("OutSine", |t| (t * PI / 2.).sin());

/// Half a cosine period: slow at both ends, fastest in the middle.
pub static IN_OUT_SINE: Curve = Curve::new("InOutSine", |t| -((PI * t).cos() - 1.) / 2.)
  .with_velocity(|t| PI * (PI * t).sin() / 2.);

/// Mirror of [`OUT_BOUNCE`]: bounces off the start before leaving it.
pub static IN_BOUNCE: Curve = Curve::new("InBounce", bounce::in_bounce);

/// Falls to the end and bounces three times with decreasing height.
pub static OUT_BOUNCE: Curve = Curve::new("OutBounce", bounce::out_bounce);

/// [`IN_BOUNCE`] over the first half followed by [`OUT_BOUNCE`] over the
/// second.
pub static IN_OUT_BOUNCE: Curve = Curve::new("InOutBounce", bounce::in_out_bounce);

impl Curve {
  /// Every catalog curve, in declaration order.
  pub const ALL: [&'static Curve; 10] = [
    &LINEAR,
    &IN_CUBIC,
    &OUT_CUBIC,
    &IN_OUT_CUBIC,
    &IN_SINE,
    &OUT_SINE,
    &IN_OUT_SINE,
    &IN_BOUNCE,
    &OUT_BOUNCE,
    &IN_OUT_BOUNCE,
  ];

  /// A curve without a velocity. Chain [`Curve::with_velocity`] to attach
  /// one.
  pub const fn new(name: &'static str, position: fn(f64) -> f64) -> Self {
    Self { name, position, velocity: Derivative::Unsupported }
  }

  pub const fn with_velocity(mut self, velocity: fn(f64) -> f64) -> Self {
    self.velocity = Derivative::Closed(velocity);
    self
  }

  /// Look up a catalog curve by its exact name, e.g. `"InOutSine"`.
  pub fn by_name(name: &str) -> Option<&'static Curve> {
    Self::ALL
      .iter()
      .copied()
      .find(|c| c.name == name)
  }

  #[inline]
  pub fn name(&self) -> &'static str { self.name }

  #[inline]
  pub fn position(&self, t: f64) -> f64 { (self.position)(t) }

  /// The rate of change of [`Curve::position`] at `t`.
  ///
  /// # Errors
  ///
  /// [`CurveError::VelocityUnsupported`] if the curve has no derivative.
  pub fn velocity(&self, t: f64) -> Result<f64, CurveError> {
    match self.velocity {
      Derivative::Closed(f) => Ok(f(t)),
      Derivative::Unsupported => Err(CurveError::VelocityUnsupported { curve: self.name }),
    }
  }

  #[inline]
  pub fn derivative(&self) -> Derivative { self.velocity }

  #[inline]
  pub fn has_velocity(&self) -> bool { matches!(self.velocity, Derivative::Closed(_)) }
}

impl PartialEq for Curve {
  fn eq(&self, other: &Self) -> bool { self.name == other.name }
}

impl Eq for Curve {}

impl fmt::Display for Curve {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(self.name) }
}

impl FromStr for Curve {
  type Err = CurveError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    Curve::by_name(s)
      .copied()
      .ok_or_else(|| CurveError::Unknown(s.to_owned()))
  }
}

impl Easing for Curve {
  #[inline]
  fn position(&self, t: f64) -> f64 { Curve::position(self, t) }
}

impl<E: Easing + ?Sized> Easing for &E {
  #[inline]
  fn position(&self, t: f64) -> f64 { (**self).position(t) }
}

impl<E: Easing + ?Sized> Easing for Arc<E> {
  #[inline]
  fn position(&self, t: f64) -> f64 { (**self).position(t) }
}

impl<E: Easing + ?Sized> Easing for Box<E> {
  #[inline]
  fn position(&self, t: f64) -> f64 { (**self).position(t) }
}

impl Easing for fn(f64) -> f64 {
  #[inline]
  fn position(&self, t: f64) -> f64 { self(t) }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Curve {
  fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(self.name)
  }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Curve {
  fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
    let name = <std::borrow::Cow<'de, str>>::deserialize(deserializer)?;
    name.parse().map_err(serde::de::Error::custom)
  }
}
