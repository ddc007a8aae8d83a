use thiserror::Error;

#[derive(Debug, Error)]
pub enum WizardError {
  #[error("answer is empty")]
  EmptyAnswer,
  #[error("nothing to finalize yet")]
  EmptyDraft,
  #[error("unknown quick preset: {0}")]
  UnknownPreset(String),
  #[error(transparent)]
  Core(#[from] picturediary_core::Error),
  #[error("i/o error: {0}")]
  Io(#[from] std::io::Error),
  #[error("json error: {0}")]
  Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, WizardError>;
