//! Turning wizard answers into the raw text the composers consume.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::steps::WizardMode;

/// Answers keyed by step key. Blank answers are never stored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Answers {
  values: BTreeMap<&'static str, String>,
}

impl Answers {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn insert(&mut self, key: &'static str, value: impl Into<String>) {
    let value = value.into();
    if value.trim().is_empty() {
      self.values.remove(key);
    } else {
      self.values.insert(key, value);
    }
  }

  pub fn remove(&mut self, key: &str) -> Option<String> {
    self.values.remove(key)
  }

  pub fn get(&self, key: &str) -> Option<&str> {
    self.values.get(key).map(String::as_str)
  }

  pub fn len(&self) -> usize {
    self.values.len()
  }

  pub fn is_empty(&self) -> bool {
    self.values.is_empty()
  }

  pub fn clear(&mut self) {
    self.values.clear();
  }
}

/// Compose the draft for `mode`. Memo drafts are kept by the session itself,
/// so memo yields an empty string here.
pub fn compose_raw_from_answers(answers: &Answers, mode: WizardMode) -> String {
  match mode {
    WizardMode::Diary => compose_diary(answers),
    WizardMode::Rap => compose_rap(answers),
    WizardMode::Essay => compose_essay(answers),
    WizardMode::Memo => String::new(),
  }
}

fn compose_diary(a: &Answers) -> String {
  let mut clauses = Vec::new();
  let when: Vec<&str> = [a.get("time"), a.get("weather")].into_iter().flatten().collect();
  if !when.is_empty() {
    clauses.push(when.join("、"));
  }
  if let Some(place) = a.get("place") {
    clauses.push(format!("{place}で"));
  }
  if let Some(people) = a.get("people") {
    clauses.push(format!("{people}と"));
  }
  clauses.extend(
    ["event", "detail", "feeling"]
      .into_iter()
      .filter_map(|key| a.get(key))
      .map(str::to_string),
  );

  if clauses.is_empty() {
    String::new()
  } else {
    format!("{}。", clauses.join("。"))
  }
}

fn compose_rap(a: &Answers) -> String {
  let hook = a.get("hook").or_else(|| a.get("wordplay")).or_else(|| a.get("theme"));
  let pair = |first: &str, second: &str| -> Option<String> {
    let joined = [a.get(first), a.get(second)]
      .into_iter()
      .flatten()
      .collect::<Vec<_>>()
      .join(" / ");
    (!joined.is_empty()).then_some(joined)
  };

  let mut lines = Vec::new();
  if let Some(hook) = hook {
    lines.push(format!("Hook) {hook}"));
  }
  if let Some(verse) = pair("v1a", "v1b") {
    lines.push(format!("Verse1) {verse}"));
  }
  if let Some(verse) = pair("v2a", "v2b") {
    lines.push(format!("Verse2) {verse}"));
  }
  if let Some(vibe) = pair("vibe", "persona") {
    lines.push(format!("Vibe) {vibe}"));
  }
  for (key, label) in [("imagery", "Imagery"), ("rhyme", "Rhyme"), ("tempo", "Tempo")] {
    if let Some(value) = a.get(key) {
      lines.push(format!("{label}) {value}"));
    }
  }
  lines.join("\n")
}

fn compose_essay(a: &Answers) -> String {
  let labelled = |key: &str, label: &str| a.get(key).map(|value| format!("{label}: {value}"));

  let opening = [
    a.get("hook").map(str::to_string),
    a.get("theme").map(str::to_string),
    a.get("purpose").map(|purpose| format!("（狙い: {purpose}）")),
    labelled("audience", "読者"),
  ];
  let scene = [
    labelled("scene", "場面"),
    labelled("conflict", "葛藤"),
    labelled("turn", "転機"),
  ];
  let support = [
    labelled("evidence", "根拠/具体例"),
    labelled("sensory", "感覚描写"),
  ];
  let closing = [
    labelled("reflection", "学び"),
    labelled("takeaway", "読者への持ち帰り"),
    labelled("tone", "文体"),
    labelled("analogy", "比喩/対比"),
    labelled("cut", "削除/言い換え"),
    labelled("closing", "締め案"),
    labelled("title", "仮タイトル"),
  ];

  let paragraphs = [
    join_present(opening, " "),
    join_present(scene, "。"),
    join_present(support, "。"),
    join_present(closing, "。"),
  ];
  paragraphs
    .into_iter()
    .filter(|paragraph| !paragraph.trim().is_empty())
    .collect::<Vec<_>>()
    .join("\n\n")
}

fn join_present<const N: usize>(parts: [Option<String>; N], separator: &str) -> String {
  parts.into_iter().flatten().collect::<Vec<_>>().join(separator)
}

#[cfg(test)]
mod tests {
  use super::*;

  fn answers(pairs: &[(&'static str, &str)]) -> Answers {
    let mut answers = Answers::new();
    for (key, value) in pairs {
      answers.insert(*key, *value);
    }
    answers
  }

  #[test]
  fn diary_clauses_follow_fixed_order() {
    let a = answers(&[
      ("feeling", "少し嬉しい"),
      ("time", "夕方"),
      ("weather", "晴れ"),
      ("place", "川沿い"),
      ("people", "友達"),
      ("event", "散歩した"),
      ("detail", "コーヒーの香り"),
    ]);
    assert_eq!(
      compose_raw_from_answers(&a, WizardMode::Diary),
      "夕方、晴れ。川沿いで。友達と。散歩した。コーヒーの香り。少し嬉しい。"
    );
  }

  #[test]
  fn diary_with_partial_answers() {
    let a = answers(&[("weather", "雨"), ("event", "傘を買った")]);
    assert_eq!(compose_raw_from_answers(&a, WizardMode::Diary), "雨。傘を買った。");
    assert_eq!(compose_raw_from_answers(&Answers::new(), WizardMode::Diary), "");
  }

  #[test]
  fn rap_hook_falls_back_to_wordplay_then_theme() {
    let a = answers(&[
      ("theme", "city night"),
      ("v1a", "帰り道"),
      ("v1b", "胸の奥"),
      ("vibe", "nostalgic"),
      ("persona", "静かな語り手"),
      ("tempo", "ゆっくり"),
    ]);
    assert_eq!(
      compose_raw_from_answers(&a, WizardMode::Rap),
      "Hook) city night\nVerse1) 帰り道 / 胸の奥\nVibe) nostalgic / 静かな語り手\nTempo) ゆっくり"
    );

    let with_wordplay = answers(&[("theme", "city night"), ("wordplay", "light / night")]);
    assert!(compose_raw_from_answers(&with_wordplay, WizardMode::Rap).starts_with("Hook) light / night"));
  }

  #[test]
  fn essay_has_four_labelled_paragraphs() {
    let a = answers(&[
      ("theme", "静けさについて"),
      ("purpose", "気づきを共有したい"),
      ("scene", "終電前の駅で"),
      ("turn", "見上げた瞬間に気づいた"),
      ("sensory", "湿った空気"),
      ("closing", "急がない日を増やす"),
      ("title", "窓辺の青"),
    ]);
    let essay = compose_raw_from_answers(&a, WizardMode::Essay);
    let paragraphs: Vec<&str> = essay.split("\n\n").collect();
    assert_eq!(
      paragraphs,
      vec![
        "静けさについて （狙い: 気づきを共有したい）",
        "場面: 終電前の駅で。転機: 見上げた瞬間に気づいた",
        "感覚描写: 湿った空気",
        "締め案: 急がない日を増やす。仮タイトル: 窓辺の青",
      ]
    );
  }

  #[test]
  fn essay_skips_empty_paragraphs() {
    let a = answers(&[("theme", "習慣の力"), ("reflection", "余白は余裕を生む")]);
    assert_eq!(
      compose_raw_from_answers(&a, WizardMode::Essay),
      "習慣の力\n\n学び: 余白は余裕を生む"
    );
  }

  #[test]
  fn blank_answers_are_not_stored() {
    let mut a = answers(&[("time", "朝")]);
    a.insert("time", "  ");
    assert!(a.is_empty());
  }
}
