//! Text normalization, sentence segmentation, tone detection and keyword
//! extraction over raw journal text.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// Keywords returned by [`extract_keywords`] callers that have no preference.
pub const DEFAULT_KEYWORD_LIMIT: usize = 10;

static STOPWORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "の", "に", "は", "を", "た", "が", "で", "て", "と", "も", "な", "だ", "です", "ます",
        "する", "いる", "ある", "から", "まで", "よう", "こと", "もの", "それ", "これ", "あれ",
        "そして", "でも", "しかし", "また", "ので", "ため", "今日", "昨日", "明日", "今", "あと",
        "とても", "すごく", "少し", "ちょっと", "など",
    ]
    .into_iter()
    .collect()
});

static CONTROL_RUNS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[\t\r]+").expect("valid regex"));
static WHITESPACE_RUNS: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s{2,}").expect("valid regex"));
static SENTENCE_BREAKS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[。！!？?\n]+").expect("valid regex"));
static SYMBOLS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[\p{P}\p{S}]").expect("valid regex"));

static POSITIVE_MARKERS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"嬉|楽し|わくわく|最高|良かっ|良く|気持ちよ|元気|笑|晴れ").expect("valid regex")
});
static NEGATIVE_MARKERS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"疲れ|大変|忙し|泣|悲し|失敗|雨|曇").expect("valid regex"));

/// Coarse emotional tone of a piece of text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Positive,
    Negative,
    #[default]
    Neutral,
}

impl Tone {
    pub fn as_str(&self) -> &'static str {
        match self {
            Tone::Positive => "positive",
            Tone::Negative => "negative",
            Tone::Neutral => "neutral",
        }
    }
}

impl std::fmt::Display for Tone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Collapse tab/CR runs and repeated whitespace into single spaces, then trim.
pub fn normalize(text: &str) -> String {
    let spaced = CONTROL_RUNS.replace_all(text, " ");
    WHITESPACE_RUNS.replace_all(&spaced, " ").trim().to_string()
}

/// Split text into trimmed, non-empty sentences on `。！!？?` and newlines.
pub fn split_sentences(text: &str) -> Vec<String> {
    let normalized = normalize(text);
    if normalized.is_empty() {
        return Vec::new();
    }
    SENTENCE_BREAKS
        .split(&normalized)
        .map(str::trim)
        .filter(|sentence| !sentence.is_empty())
        .map(str::to_string)
        .collect()
}

/// First non-empty line of `text`. Single-line text yields its first
/// sentence instead, as does a leading line of only whitespace.
pub fn first_line(text: &str) -> String {
    let line = if text.contains('\n') {
        text.split('\n')
            .find(|line| !line.is_empty())
            .map(str::trim)
            .unwrap_or_default()
    } else {
        ""
    };
    if !line.is_empty() {
        return line.to_string();
    }
    split_sentences(text).into_iter().next().unwrap_or_default()
}

/// Net affect score: +2 when any positive marker occurs, -2 when any negative
/// marker occurs. Both present cancel out.
pub fn tone_score(text: &str) -> i32 {
    let mut score = 0;
    if POSITIVE_MARKERS.is_match(text) {
        score += 2;
    }
    if NEGATIVE_MARKERS.is_match(text) {
        score -= 2;
    }
    score
}

pub fn detect_tone(text: &str) -> Tone {
    match tone_score(text) {
        score if score >= 2 => Tone::Positive,
        score if score <= -2 => Tone::Negative,
        _ => Tone::Neutral,
    }
}

/// Replace every Unicode punctuation or symbol character with a space.
pub fn strip_symbols(text: &str) -> String {
    SYMBOLS.replace_all(text, " ").into_owned()
}

pub fn is_stopword(token: &str) -> bool {
    STOPWORDS.contains(token)
}

/// Most frequent tokens of `text`, at most `limit` of them.
///
/// Ties keep the order in which tokens were first seen.
pub fn extract_keywords(text: &str, limit: usize) -> Vec<String> {
    let stripped = strip_symbols(text);
    let mut ranked: Vec<(&str, usize)> = Vec::new();
    let mut positions: HashMap<&str, usize> = HashMap::new();

    for token in stripped.split_whitespace() {
        if is_stopword(token) || token.chars().count() <= 1 {
            continue;
        }
        match positions.get(token) {
            Some(&idx) => ranked[idx].1 += 1,
            None => {
                positions.insert(token, ranked.len());
                ranked.push((token, 1));
            }
        }
    }

    ranked.sort_by(|(_, a_count), (_, b_count)| b_count.cmp(a_count));
    ranked
        .into_iter()
        .take(limit)
        .map(|(token, _)| token.to_string())
        .collect()
}
