//! Wizard state machine: walks the main questions once, then cycles the
//! refine questions until the caller finalizes.

use picturediary_core::clock::Clock;
use picturediary_core::{DiaryMode, ImageComposer, ImagePromptRequest, ImagePromptResult};
use serde::Serialize;
use tracing::debug;

use crate::compose::{compose_raw_from_answers, Answers};
use crate::error::{Result, WizardError};
use crate::steps::{Phase, Step, WizardMode};

#[derive(Debug, Clone, Default)]
pub struct WizardSession {
  mode: WizardMode,
  phase: Phase,
  index: usize,
  answers: Answers,
  memo: String,
}

/// Output of [`WizardSession::finalize`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Finalized {
  pub raw_text: String,
  pub diary: String,
  pub image: ImagePromptResult,
}

impl WizardSession {
  pub fn new(mode: WizardMode) -> Self {
    Self {
      mode,
      ..Self::default()
    }
  }

  pub fn mode(&self) -> WizardMode {
    self.mode
  }

  pub fn phase(&self) -> Phase {
    self.phase
  }

  pub fn answers(&self) -> &Answers {
    &self.answers
  }

  /// The step waiting for an answer; memo sessions never have one.
  pub fn current_step(&self) -> Option<&'static Step> {
    self.phase.steps(self.mode).get(self.index)
  }

  pub fn current_question(&self) -> Option<&'static str> {
    self.current_step().map(|step| step.question)
  }

  /// Record `text` for the current step and move on. Memo sessions append
  /// the line to the draft instead.
  pub fn answer(&mut self, text: &str) -> Result<()> {
    let text = text.trim_end();
    if text.trim().is_empty() {
      return Err(WizardError::EmptyAnswer);
    }
    if self.mode == WizardMode::Memo {
      self.memo.push_str(text);
      self.memo.push('\n');
      return Ok(());
    }
    if let Some(step) = self.current_step() {
      self.answers.insert(step.key, text);
    }
    self.advance();
    Ok(())
  }

  /// Move past the current step without recording anything.
  pub fn skip(&mut self) {
    if self.mode != WizardMode::Memo {
      self.advance();
    }
  }

  /// Step back once and forget the answer given there. Returns `false` when
  /// there is nothing to undo in the current phase.
  pub fn undo(&mut self) -> bool {
    if self.mode == WizardMode::Memo || self.index == 0 {
      return false;
    }
    self.index -= 1;
    if let Some(step) = self.current_step() {
      self.answers.remove(step.key);
    }
    true
  }

  /// Clear everything, optionally switching to another mode.
  pub fn restart(&mut self, mode: Option<WizardMode>) {
    *self = Self::new(mode.unwrap_or(self.mode));
  }

  pub fn raw_text(&self) -> String {
    match self.mode {
      WizardMode::Memo => self.memo.clone(),
      mode => compose_raw_from_answers(&self.answers, mode),
    }
  }

  /// Whether every main question has been asked (or, for memo, any text
  /// exists).
  pub fn is_complete_enough(&self) -> bool {
    match self.mode {
      WizardMode::Memo => !self.memo.trim().is_empty(),
      _ => self.phase == Phase::Refine,
    }
  }

  /// Render the diary and image prompt for the gathered text.
  ///
  /// `request` supplies style, mood, aspect, detail and title settings; its
  /// raw text and diary are replaced.
  pub fn finalize(
    &self,
    diary_mode: DiaryMode,
    request: ImagePromptRequest,
    composer: &ImageComposer,
    clock: &dyn Clock,
  ) -> Result<Finalized> {
    let raw_text = self.raw_text().trim().to_string();
    if raw_text.is_empty() {
      return Err(WizardError::EmptyDraft);
    }
    let request = ImagePromptRequest {
      raw_text: raw_text.clone(),
      ..request
    };
    let image = composer.compose_with_diary(request, diary_mode, clock);
    debug!(
      mode = self.mode.key(),
      answers = self.answers.len(),
      complete = self.is_complete_enough(),
      "wizard finalized"
    );
    Ok(Finalized {
      raw_text,
      diary: image.diary.clone(),
      image,
    })
  }

  fn advance(&mut self) {
    self.index += 1;
    if self.index < self.phase.steps(self.mode).len() {
      return;
    }
    if self.phase == Phase::Main {
      debug!(mode = self.mode.key(), "main questions done, entering refine phase");
      self.phase = Phase::Refine;
    }
    self.index = 0;
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::steps::{DIARY_STEPS, REFINE_STEPS};
  use picturediary_core::FixedClock;

  fn answer_all(session: &mut WizardSession, values: &[&str]) {
    for value in values {
      session.answer(value).unwrap();
    }
  }

  #[test]
  fn walks_main_steps_then_cycles_refine() {
    let mut session = WizardSession::new(WizardMode::Diary);
    assert_eq!(session.current_question(), Some(DIARY_STEPS[0].question));
    for _ in 0..DIARY_STEPS.len() {
      assert!(!session.is_complete_enough());
      session.skip();
    }
    assert_eq!(session.phase(), Phase::Refine);
    assert!(session.is_complete_enough());

    for round in 0..2 {
      for step in REFINE_STEPS {
        assert_eq!(session.current_step(), Some(&step), "round {round}");
        session.skip();
      }
    }
  }

  #[test]
  fn answers_feed_raw_text_live() {
    let mut session = WizardSession::new(WizardMode::Diary);
    answer_all(&mut session, &["朝", "晴れ", "公園"]);
    assert_eq!(session.raw_text(), "朝、晴れ。公園で。");
  }

  #[test]
  fn undo_removes_answer_of_previous_step() {
    let mut session = WizardSession::new(WizardMode::Diary);
    assert!(!session.undo());
    answer_all(&mut session, &["朝", "晴れ"]);
    assert!(session.undo());
    assert_eq!(session.current_step().map(|step| step.key), Some("weather"));
    assert_eq!(session.answers().get("weather"), None);
    assert_eq!(session.answers().get("time"), Some("朝"));
  }

  #[test]
  fn skip_records_nothing() {
    let mut session = WizardSession::new(WizardMode::Rap);
    session.skip();
    session.answer("nostalgic").unwrap();
    assert_eq!(session.answers().get("theme"), None);
    assert_eq!(session.answers().get("vibe"), Some("nostalgic"));
  }

  #[test]
  fn empty_answers_are_rejected() {
    let mut session = WizardSession::new(WizardMode::Essay);
    assert!(matches!(session.answer("  \n"), Err(WizardError::EmptyAnswer)));
    assert_eq!(session.current_step().map(|step| step.key), Some("theme"));
  }

  #[test]
  fn memo_appends_lines() {
    let mut session = WizardSession::new(WizardMode::Memo);
    assert_eq!(session.current_question(), None);
    assert!(!session.is_complete_enough());
    answer_all(&mut session, &["メモ1  ", "メモ2"]);
    assert_eq!(session.raw_text(), "メモ1\nメモ2\n");
    assert!(session.is_complete_enough());
    assert!(!session.undo());
  }

  #[test]
  fn restart_clears_and_switches_mode() {
    let mut session = WizardSession::new(WizardMode::Diary);
    answer_all(&mut session, &["朝"]);
    session.restart(Some(WizardMode::Rap));
    assert_eq!(session.mode(), WizardMode::Rap);
    assert!(session.answers().is_empty());
    assert_eq!(session.phase(), Phase::Main);
  }

  #[test]
  fn finalize_requires_some_text() {
    let session = WizardSession::new(WizardMode::Diary);
    let clock = FixedClock::ymd(2024, 5, 1).unwrap();
    let result = session.finalize(
      DiaryMode::Prose,
      ImagePromptRequest::default(),
      &ImageComposer::default(),
      &clock,
    );
    assert!(matches!(result, Err(WizardError::EmptyDraft)));
  }
}
