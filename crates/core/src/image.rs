//! Image-generation instruction built from a diary and style parameters.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::analysis::{detect_tone, extract_keywords, split_sentences, Tone};
use crate::clock::Clock;
use crate::config::ComposerConfig;
use crate::diary::{generate_diary, DiaryMode};
use crate::presets::{tone_hint, Detail, Mood, Style};
use crate::template::{Slot, SlotValues};

const TITLE_MAX_CHARS: usize = 20;

const PREAMBLE: &str =
    "以下の日記の内容を元に、最も印象的な場面を想像して、感情が伝わるような画像を1枚作成してください。";
const COMPOSITION_JP: &str = "構図: 自然で読みやすいレイアウトで、日記の主題が伝わるように。";
const COMPOSITION_EN: &str = "composition: readable layout, main subject near center";
const QUALITY_JP: &str = "高品質で、焦点が合い、照明が一貫していること";
const QUALITY_EN: &str = "high quality, sharp focus, coherent anatomy, consistent lighting";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ImagePromptRequest {
    pub raw_text: String,
    pub diary: String,
    pub style: Style,
    pub mood: Mood,
    /// Passed through verbatim.
    pub aspect: String,
    pub detail: Detail,
    pub include_title: bool,
}

impl Default for ImagePromptRequest {
    fn default() -> Self {
        Self {
            raw_text: String::new(),
            diary: String::new(),
            style: Style::default(),
            mood: Mood::default(),
            aspect: "1:1".to_string(),
            detail: Detail::default(),
            include_title: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImagePromptResult {
    pub prompt: String,
    pub tone: Tone,
    pub keywords: Vec<String>,
    pub diary: String,
}

/// What lettering the generated image may contain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextPolicy {
    NoText,
    /// A tiny title taken from the opening sentence.
    TinyTitle(String),
    /// Title allowed but none could be derived; ask for a short Japanese one.
    JapaneseTitle,
}

impl TextPolicy {
    pub fn for_request(include_title: bool, raw_text: &str) -> Self {
        if !include_title {
            return TextPolicy::NoText;
        }
        match split_sentences(raw_text).into_iter().next() {
            Some(sentence) => TextPolicy::TinyTitle(sentence.chars().take(TITLE_MAX_CHARS).collect()),
            None => TextPolicy::JapaneseTitle,
        }
    }

    pub fn clause_jp(&self) -> String {
        match self {
            TextPolicy::NoText => {
                "文章はイメージ作成の参考情報であり、画像内に文字（字幕・透かし・ロゴ・英字）は描かないでください。"
                    .to_string()
            }
            TextPolicy::TinyTitle(title) => format!(
                "文章はイメージ作成の参考情報です。画像内の文字は隅に小さく入れるタイトル「{title}」のみとし、それ以外の文字（字幕・透かし・ロゴ）は描かないでください。"
            ),
            TextPolicy::JapaneseTitle => {
                "文章はイメージ作成の参考情報です。文字を入れる場合は短い日本語のタイトルを小さく1つだけにし、それ以外の文字は描かないでください。"
                    .to_string()
            }
        }
    }

    pub fn clause_en(&self) -> String {
        match self {
            TextPolicy::NoText => "text: none (no captions, watermarks, logos or letters)".to_string(),
            TextPolicy::TinyTitle(title) => format!("text: only a tiny title \"{title}\" in a corner"),
            TextPolicy::JapaneseTitle => "text: at most one tiny short Japanese title".to_string(),
        }
    }
}

/// Composes image prompts. Holds only keyword sizing, so one instance can be
/// shared freely.
#[derive(Debug, Clone)]
pub struct ImageComposer {
    keyword_limit: usize,
    subject_keywords: usize,
}

impl Default for ImageComposer {
    fn default() -> Self {
        Self::new(&ComposerConfig::default())
    }
}

impl ImageComposer {
    pub fn new(config: &ComposerConfig) -> Self {
        Self {
            keyword_limit: config.keyword_limit,
            subject_keywords: config.subject_keywords,
        }
    }

    pub fn compose(&self, request: &ImagePromptRequest) -> ImagePromptResult {
        let tone = detect_tone(&request.raw_text);
        let keywords = extract_keywords(&request.raw_text, self.keyword_limit);
        let subject = &keywords[..keywords.len().min(self.subject_keywords)];

        let preset = request.style.preset();
        let mood = request.mood.scene();
        let hint = tone_hint(tone);
        let texture = request.detail.texture();
        let policy = TextPolicy::for_request(request.include_title, &request.raw_text);

        let style_jp = preset.jp.render(&slot_values(
            subject.join("、"),
            mood.jp,
            "白",
            "シンプルな背景",
        ));
        let style_en = preset.en.render(&slot_values(
            subject.join(", "),
            mood.en,
            "white",
            "simple background",
        ));

        let scene = if subject.is_empty() {
            "scene from a diary".to_string()
        } else {
            format!("scene from a diary: {}", subject.join(", "))
        };
        let english = [
            scene,
            policy.clause_en(),
            style_en,
            format!("{} ({})", mood.en, hint.en),
            COMPOSITION_EN.to_string(),
            format!("aspect: {}", request.aspect),
            texture.en.to_string(),
            QUALITY_EN.to_string(),
        ]
        .join(" / ");

        let prompt = [
            PREAMBLE.to_string(),
            policy.clause_jp(),
            String::new(),
            "【日記】".to_string(),
            request.diary.clone(),
            String::new(),
            "【画像のスタイル・雰囲気】".to_string(),
            String::new(),
            format!("スタイル: {style_jp}"),
            String::new(),
            format!("雰囲気: {}（{}）", mood.jp, hint.jp),
            String::new(),
            COMPOSITION_JP.to_string(),
            String::new(),
            format!("アスペクト比: {}", request.aspect),
            String::new(),
            format!("質感: {}", texture.jp),
            String::new(),
            QUALITY_JP.to_string(),
            String::new(),
            "【生成の指示】".to_string(),
            english,
        ]
        .join("\n");

        debug!(
            style = request.style.key(),
            mood = request.mood.key(),
            tone = %tone,
            keywords = keywords.len(),
            "composed image prompt"
        );

        ImagePromptResult {
            prompt,
            tone,
            keywords,
            diary: request.diary.clone(),
        }
    }

    /// Render the diary for `mode` first, then compose the prompt around it.
    pub fn compose_with_diary(
        &self,
        mut request: ImagePromptRequest,
        mode: DiaryMode,
        clock: &dyn Clock,
    ) -> ImagePromptResult {
        request.diary = generate_diary(&request.raw_text, mode, clock);
        self.compose(&request)
    }
}

fn slot_values(subject: String, emotion: &str, color: &str, background: &str) -> SlotValues {
    let mut values = SlotValues::new();
    values.insert(Slot::Person, subject.clone());
    values.insert(Slot::Character, subject.clone());
    values.insert(Slot::Subject, subject);
    values.insert(Slot::Emotion, emotion.to_string());
    values.insert(Slot::Color, color.to_string());
    values.insert(Slot::Background, background.to_string());
    values
}

/// Compose with the default keyword sizing.
pub fn build_image_prompt(request: &ImagePromptRequest) -> ImagePromptResult {
    ImageComposer::default().compose(request)
}
