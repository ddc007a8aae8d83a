//! Question tables for each wizard mode.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
  pub key: &'static str,
  pub question: &'static str,
}

const fn step(key: &'static str, question: &'static str) -> Step {
  Step { key, question }
}

pub const DIARY_STEPS: [Step; 7] = [
  step("time", "いつの出来事？（朝/昼/夕方/夜など）"),
  step("weather", "天気は？（晴れ/雨/曇り など）"),
  step("place", "どこで？（場所や雰囲気）"),
  step("people", "誰と？（一人/友達/家族/同僚など）"),
  step("event", "何をした？（印象的な出来事）"),
  step("feeling", "どう感じた？（感情・気づき）"),
  step("detail", "色・音・匂いなど、覚えている細部は？"),
];

pub const ESSAY_STEPS: [Step; 13] = [
  step("theme", "エッセイのテーマは？（一言で）"),
  step("audience", "誰に向けて書きますか？（読者像）"),
  step("purpose", "何を伝えたい？主張を一言でどう言える？"),
  step("hook", "冒頭のフック/導入のイメージは？（印象的な一文や出来事）"),
  step("scene", "核となる具体的な場面は？（いつ/どこで/誰が/何を）"),
  step("conflict", "どんな葛藤・問題がありましたか？"),
  step("turn", "転機や気づきは？どの瞬間に変化が起きた？"),
  step("evidence", "根拠や具体例は？（数字・引用・エピソード）"),
  step("sensory", "感覚描写を追加しましょう（色/音/匂い/手触り）"),
  step("reflection", "そこから得た学びは？"),
  step("takeaway", "読者への持ち帰り（メッセージ）は？"),
  step("tone", "文体や雰囲気は？（親しみ/静か/ユーモア/情熱的 など）"),
  step("title", "仮タイトル案を1〜3つください"),
];

pub const RAP_STEPS: [Step; 12] = [
  step("theme", "曲のテーマは？（一言で）"),
  step("vibe", "雰囲気/ムードは？（例：ノスタルジック/夜/雨上がり）"),
  step("persona", "語り手の視点やキャラは？"),
  step("rhyme", "韻の方向性は？（末尾/内部/ゆるめ 等）"),
  step("tempo", "テンポ感は？（ゆっくり/ふつう/はやい）"),
  step("imagery", "映像的な情景（色/匂い/音）をいくつか"),
  step("wordplay", "言葉遊びや反復したいフレーズは？"),
  step("hook", "サビ/フックの核となる一行を"),
  step("v1a", "1番A：出来事や情景（短句）"),
  step("v1b", "1番B：内面/比喩（短句）"),
  step("v2a", "2番A：別の情景（短句）"),
  step("v2b", "2番B：締めに向けた流れ（短句）"),
];

/// Asked in a loop once the main questions are done.
pub const REFINE_STEPS: [Step; 3] = [
  step("analogy", "比喩や対比を一つ加えるなら？"),
  step("cut", "削れる冗長部分や言い換えたい表現は？"),
  step("closing", "締めの一文をより強く（短く力強く）してみましょう。案は？"),
];

pub const REFINE_NOTICE: &str =
  "基本項目は揃いました。さらに少し掘り下げます。終わるときは「終わり」と入力してください。";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum WizardMode {
  Diary,
  #[default]
  Essay,
  Rap,
  /// Free-form notes, no questions.
  Memo,
}

impl WizardMode {
  pub const ALL: [WizardMode; 4] = [
    WizardMode::Diary,
    WizardMode::Essay,
    WizardMode::Rap,
    WizardMode::Memo,
  ];

  pub fn key(&self) -> &'static str {
    match self {
      WizardMode::Diary => "diary",
      WizardMode::Essay => "essay",
      WizardMode::Rap => "rap",
      WizardMode::Memo => "memo",
    }
  }

  /// Unknown keys fall back to essay.
  pub fn from_key(key: &str) -> Self {
    let key = key.trim().to_lowercase();
    Self::ALL
      .into_iter()
      .find(|mode| mode.key() == key)
      .unwrap_or_default()
  }

  pub fn steps(&self) -> &'static [Step] {
    match self {
      WizardMode::Diary => &DIARY_STEPS,
      WizardMode::Essay => &ESSAY_STEPS,
      WizardMode::Rap => &RAP_STEPS,
      WizardMode::Memo => &[],
    }
  }

  pub fn intro(&self) -> &'static str {
    match self {
      WizardMode::Diary => "日記作成を手伝います。いくつか質問しますね。",
      WizardMode::Essay => "エッセイ作成を手伝います。テーマから順に質問します。",
      WizardMode::Rap => "ラップの下書きを作ります。短いフレーズで答えてください。",
      WizardMode::Memo => "メモをどうぞ。入力内容はそのまま下書きになります。",
    }
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
  #[default]
  Main,
  Refine,
}

impl Phase {
  pub fn steps(&self, mode: WizardMode) -> &'static [Step] {
    match self {
      Phase::Main => mode.steps(),
      Phase::Refine => &REFINE_STEPS,
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn step_counts_per_mode() {
    assert_eq!(WizardMode::Diary.steps().len(), 7);
    assert_eq!(WizardMode::Essay.steps().len(), 13);
    assert_eq!(WizardMode::Rap.steps().len(), 12);
    assert!(WizardMode::Memo.steps().is_empty());
    assert_eq!(Phase::Refine.steps(WizardMode::Diary).len(), 3);
  }

  #[test]
  fn step_keys_are_unique_within_a_mode() {
    for mode in WizardMode::ALL {
      let mut keys: Vec<&str> = mode.steps().iter().map(|step| step.key).collect();
      keys.extend(REFINE_STEPS.iter().map(|step| step.key));
      let total = keys.len();
      keys.sort_unstable();
      keys.dedup();
      assert_eq!(keys.len(), total, "{}", mode.key());
    }
  }

  #[test]
  fn unknown_mode_is_essay() {
    assert_eq!(WizardMode::from_key(" RAP "), WizardMode::Rap);
    assert_eq!(WizardMode::from_key("poem"), WizardMode::Essay);
  }
}
