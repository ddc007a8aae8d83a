//! Date-stamped diary layouts built from raw journal text.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::analysis::{first_line, split_sentences, Tone};
use crate::clock::{format_date_header, Clock};
use crate::presets::lookup;

const EVENT_LABEL: &str = "【今日の出来事】";
const INSIGHT_LABEL: &str = "【気づき/感情】";
const SENTENCES_PER_PARAGRAPH: usize = 3;
const RAP_FRAGMENTS: usize = 3;

static RAP_TERMINATORS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[。！？!?]").expect("valid regex"));
static RAP_BREAKS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[、，,\s]+").expect("valid regex"));

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
#[serde(from = "String")]
pub enum DiaryMode {
    #[default]
    Prose,
    Essay,
    Rap,
    /// Raw text is kept verbatim.
    Memo,
}

impl From<String> for DiaryMode {
    fn from(key: String) -> Self {
        Self::from_key(&key)
    }
}

impl DiaryMode {
    pub const ALL: [DiaryMode; 4] = [
        DiaryMode::Prose,
        DiaryMode::Essay,
        DiaryMode::Rap,
        DiaryMode::Memo,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            DiaryMode::Prose => "prose",
            DiaryMode::Essay => "essay",
            DiaryMode::Rap => "rap",
            DiaryMode::Memo => "memo",
        }
    }

    /// Unknown keys fall back to prose.
    pub fn from_key(key: &str) -> Self {
        lookup(&Self::ALL, key, DiaryMode::key)
    }

    fn empty_body(&self) -> &'static str {
        match self {
            DiaryMode::Rap => "・静かな一日 / short memo\n・また明日 / keep it mellow",
            DiaryMode::Essay => "（短いエッセイ）静かな一日。",
            DiaryMode::Prose | DiaryMode::Memo => "今日は短いメモだけ。静かな一日。",
        }
    }
}

/// Render `text` as a diary entry headed by today's date.
pub fn generate_diary(text: &str, mode: DiaryMode, clock: &dyn Clock) -> String {
    if mode == DiaryMode::Memo {
        return text.to_string();
    }

    let header = format_date_header(clock.today());
    let sentences = split_sentences(text);
    debug!(mode = mode.key(), sentences = sentences.len(), "rendering diary");
    if sentences.is_empty() {
        return format!("{header}\n{}", mode.empty_body());
    }

    match mode {
        DiaryMode::Essay => format!("{header}\n{}", render_essay(text, &sentences)),
        DiaryMode::Rap => format!("{header}\n{}", render_rap(&sentences)),
        DiaryMode::Prose | DiaryMode::Memo => format!("{header}\n{}", render_prose(&sentences)),
    }
}

fn render_prose(sentences: &[String]) -> String {
    let mut lines = Vec::with_capacity(sentences.len());
    let first = &sentences[0];
    lines.push(format!("{EVENT_LABEL}{first}。"));

    if sentences.len() > 2 {
        for sentence in &sentences[1..sentences.len() - 1] {
            lines.push(format!("・{sentence}。"));
        }
    }
    if let Some(last) = insight_sentence(sentences) {
        lines.push(format!("{INSIGHT_LABEL}{last}。"));
    }
    lines.join("\n")
}

// The closing sentence only becomes an insight line when it is distinct from
// the opening event.
fn insight_sentence(sentences: &[String]) -> Option<&str> {
    if sentences.len() < 2 {
        return None;
    }
    let last = sentences.last()?.trim();
    if last.chars().count() < 2 || last == sentences[0].trim() {
        return None;
    }
    Some(last)
}

fn render_essay(text: &str, sentences: &[String]) -> String {
    let title = first_line(text);
    let paragraphs: Vec<String> = essay_paragraphs(sentences)
        .into_iter()
        .map(|group| format!("{}。", group.join("。")))
        .collect();
    format!("{title}\n\n{}", paragraphs.join("\n\n"))
}

/// Group sentences into paragraphs of at most three.
pub fn essay_paragraphs(sentences: &[String]) -> Vec<&[String]> {
    sentences.chunks(SENTENCES_PER_PARAGRAPH).collect()
}

fn render_rap(sentences: &[String]) -> String {
    sentences
        .iter()
        .map(|sentence| {
            let cleaned = RAP_TERMINATORS.replace_all(sentence, " ");
            let fragments: Vec<&str> = RAP_BREAKS
                .split(&cleaned)
                .map(str::trim)
                .filter(|fragment| !fragment.is_empty())
                .take(RAP_FRAGMENTS)
                .collect();
            if fragments.is_empty() {
                format!("・{sentence}")
            } else {
                format!("・{}", fragments.join(" / "))
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Wrap a diary for pasting into an external chat agent.
///
/// Essay and rap drafts get an explicit writing request in front of them;
/// prose and memo text are returned unchanged.
pub fn agent_request(diary: &str, mode: DiaryMode, tone: Tone) -> String {
    let memo = diary.trim();
    match mode {
        DiaryMode::Essay => {
            let tone_word = match tone {
                Tone::Positive => "前向き",
                Tone::Negative => "静か",
                Tone::Neutral => "自然",
            };
            [
                "エッセイを日本語で作成してください。".to_string(),
                format!("条件: 3〜5段落、読みやすい構成、{tone_word}なトーン。箇条書きは使わず、滑らかに。"),
                String::new(),
                "題材メモ:".to_string(),
                memo.to_string(),
            ]
            .join("\n")
        }
        DiaryMode::Rap => [
            "日本語のラップ歌詞を作成してください。",
            "構成: intro, verse, pre-chorus, chorus（hook）。短いフレーズで、自然な韻や反復を適度に。",
            "表現: 過度に露骨な表現は避け、読みやすさとリズムを両立。",
            "",
            "題材メモ:",
            memo,
        ]
        .join("\n"),
        DiaryMode::Prose | DiaryMode::Memo => diary.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;

    fn clock() -> FixedClock {
        FixedClock::ymd(2024, 5, 1).unwrap()
    }

    const HEADER: &str = "2024年05月01日(水)";

    #[test]
    fn empty_input_uses_per_mode_filler() {
        assert_eq!(
            generate_diary("", DiaryMode::Prose, &clock()),
            format!("{HEADER}\n今日は短いメモだけ。静かな一日。")
        );
        assert_eq!(
            generate_diary("  \n ", DiaryMode::Essay, &clock()),
            format!("{HEADER}\n（短いエッセイ）静かな一日。")
        );
        let rap = generate_diary("", DiaryMode::Rap, &clock());
        assert_eq!(rap.lines().count(), 3);
        assert!(rap.ends_with("keep it mellow"));
    }

    #[test]
    fn prose_splits_event_middle_and_insight() {
        let diary = generate_diary("朝起きた。公園に行った。猫がいた。楽しかった。", DiaryMode::Prose, &clock());
        let expected = [
            HEADER,
            "【今日の出来事】朝起きた。",
            "・公園に行った。",
            "・猫がいた。",
            "【気づき/感情】楽しかった。",
        ]
        .join("\n");
        assert_eq!(diary, expected);
    }

    #[test]
    fn prose_single_sentence_has_no_insight() {
        let diary = generate_diary("散歩した", DiaryMode::Prose, &clock());
        assert_eq!(diary, format!("{HEADER}\n【今日の出来事】散歩した。"));
        assert!(!diary.contains(INSIGHT_LABEL));
    }

    #[test]
    fn prose_skips_repeated_or_tiny_closing_sentence() {
        let repeated = generate_diary("雨。雨。", DiaryMode::Prose, &clock());
        assert!(!repeated.contains(INSIGHT_LABEL));
        let tiny = generate_diary("散歩した。あ。", DiaryMode::Prose, &clock());
        assert!(!tiny.contains(INSIGHT_LABEL));
    }

    #[test]
    fn essay_groups_three_sentences_per_paragraph() {
        let text = "一。二。三。四。五。六。七。";
        let sentences = split_sentences(text);
        let sizes: Vec<usize> = essay_paragraphs(&sentences).iter().map(|p| p.len()).collect();
        assert_eq!(sizes, vec![3, 3, 1]);

        let diary = generate_diary(text, DiaryMode::Essay, &clock());
        let expected = format!("{HEADER}\n一\n\n一。二。三。\n\n四。五。六。\n\n七。");
        assert_eq!(diary, expected);
    }

    #[test]
    fn essay_title_is_first_line() {
        let diary = generate_diary("雨の日の記録\n駅まで歩いた。傘を忘れた。", DiaryMode::Essay, &clock());
        let mut lines = diary.lines();
        assert_eq!(lines.next(), Some(HEADER));
        assert_eq!(lines.next(), Some("雨の日の記録"));
    }

    #[test]
    fn essay_title_without_newline_is_first_sentence() {
        let diary = generate_diary("公園を散歩した。天気が良かった。帰った。", DiaryMode::Essay, &clock());
        let expected = format!("{HEADER}\n公園を散歩した\n\n公園を散歩した。天気が良かった。帰った。");
        assert_eq!(diary, expected);
    }

    #[test]
    fn rap_keeps_three_fragments_without_hook() {
        let diary = generate_diary(
            "夜の街、ネオン、雨 音 まだ続く。帰り道！",
            DiaryMode::Rap,
            &clock(),
        );
        let expected = format!("{HEADER}\n・夜の街 / ネオン / 雨\n・帰り道");
        assert_eq!(diary, expected);
        assert!(!diary.contains("hook"));
    }

    #[test]
    fn memo_is_passthrough() {
        let raw = "メモ1\nメモ2\n";
        assert_eq!(generate_diary(raw, DiaryMode::Memo, &clock()), raw);
    }

    #[test]
    fn mode_keys_round_trip_with_fallback() {
        for mode in DiaryMode::ALL {
            assert_eq!(DiaryMode::from_key(mode.key()), mode);
        }
        assert_eq!(DiaryMode::from_key("haiku"), DiaryMode::Prose);
        let mode: DiaryMode = serde_json::from_str(r#""haiku""#).unwrap();
        assert_eq!(mode, DiaryMode::Prose);
        let mode: DiaryMode = serde_json::from_str(r#""rap""#).unwrap();
        assert_eq!(mode, DiaryMode::Rap);
    }

    #[test]
    fn agent_request_wraps_essay_and_rap_only() {
        let essay = agent_request("下書き\n", DiaryMode::Essay, Tone::Positive);
        assert!(essay.starts_with("エッセイを日本語で作成してください。"));
        assert!(essay.contains("前向きなトーン"));
        assert!(essay.ends_with("題材メモ:\n下書き"));

        let rap = agent_request("・夜 / 街", DiaryMode::Rap, Tone::Neutral);
        assert!(rap.starts_with("日本語のラップ歌詞を作成してください。"));

        assert_eq!(agent_request("そのまま", DiaryMode::Prose, Tone::Negative), "そのまま");
    }
}
