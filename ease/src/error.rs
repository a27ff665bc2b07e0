/// Failure when asking a curve for something it cannot provide.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CurveError {
  #[error("curve `{curve}` has no closed-form velocity")]
  VelocityUnsupported { curve: &'static str },
  #[error("unknown curve name: {0}")]
  Unknown(String),
}

/// Failure when starting a tween session.
#[derive(Debug, thiserror::Error)]
pub enum TweenError {
  #[error("tween duration must be greater than zero")]
  ZeroDuration,
  #[error("tween tick interval must be greater than zero")]
  ZeroTick,
  #[error("failed to start the tween session: {0}")]
  Spawn(#[from] std::io::Error),
}
