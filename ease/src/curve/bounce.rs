//! Bounce curves. The piecewise parabolas approximate a ball dropped onto
//! the end value; the breakpoints and coefficients are fixed.

pub(super) fn out_bounce(t: f64) -> f64 {
  if t < 0.3636 {
    7.5625 * t * t
  } else if t < 0.7272 {
    let t = t - 0.5455;
    9.075 * t * t + 0.7
  } else if t < 0.9 {
    let t = t - 0.8136;
    12.0665 * t * t + 0.91
  } else {
    let t = t - 0.95;
    10.8 * t * t + 0.973
  }
}

pub(super) fn in_bounce(t: f64) -> f64 { 1. - out_bounce(1. - t) }

pub(super) fn in_out_bounce(t: f64) -> f64 {
  if t < 0.5 { in_bounce(2. * t) / 2. } else { out_bounce(2. * t - 1.) / 2. + 0.5 }
}
