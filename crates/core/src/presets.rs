//! Static bilingual lookup tables for image styles, moods, detail levels and
//! tone hints.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::analysis::Tone;
use crate::template::Template;

/// A short Japanese/English phrase pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Phrase {
    pub jp: &'static str,
    pub en: &'static str,
}

impl Phrase {
    pub const fn new(jp: &'static str, en: &'static str) -> Self {
        Self { jp, en }
    }
}

/// Parsed style templates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StylePreset {
    pub jp: Template,
    pub en: Template,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
#[serde(from = "String")]
pub enum Style {
    #[default]
    Watercolor,
    Ukiyoe,
    PhotorealPortrait,
    AnimeCharacter,
    ImpastoOil,
    RetroFilm,
    DetailedPen,
    #[serde(rename = "3d-character")]
    Character3d,
    PopArt,
    Steampunk,
    MinimalistLineArt,
}

// Deserializing goes through `from_key`, so unknown keys fall back too.
impl From<String> for Style {
    fn from(key: String) -> Self {
        Self::from_key(&key)
    }
}

impl Style {
    pub const ALL: [Style; 11] = [
        Style::Watercolor,
        Style::Ukiyoe,
        Style::PhotorealPortrait,
        Style::AnimeCharacter,
        Style::ImpastoOil,
        Style::RetroFilm,
        Style::DetailedPen,
        Style::Character3d,
        Style::PopArt,
        Style::Steampunk,
        Style::MinimalistLineArt,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            Style::Watercolor => "watercolor",
            Style::Ukiyoe => "ukiyoe",
            Style::PhotorealPortrait => "photoreal-portrait",
            Style::AnimeCharacter => "anime-character",
            Style::ImpastoOil => "impasto-oil",
            Style::RetroFilm => "retro-film",
            Style::DetailedPen => "detailed-pen",
            Style::Character3d => "3d-character",
            Style::PopArt => "pop-art",
            Style::Steampunk => "steampunk",
            Style::MinimalistLineArt => "minimalist-line-art",
        }
    }

    /// Unknown keys fall back to watercolor.
    pub fn from_key(key: &str) -> Self {
        lookup(&Self::ALL, key, Style::key)
    }

    pub fn templates(&self) -> Phrase {
        match self {
            Style::Watercolor => Phrase::new(
                "[描きたいもの]の水彩画、にじみを生かした柔らかな筆致、透明感のある色彩、紙の質感",
                "Watercolor painting of [subject], soft bleeding brushwork, translucent colors, visible paper texture",
            ),
            Style::Ukiyoe => Phrase::new(
                "[描きたいもの]の浮世絵、歌川広重風、大胆な構図と美しいぼかし、哀愁漂う雰囲気",
                "Ukiyo-e of [subject], Hiroshige Utagawa style, bold composition and beautiful blurring, melancholic atmosphere",
            ),
            Style::PhotorealPortrait => Phrase::new(
                "[人物の説明]の超リアルなポートレート、[感情や表情]、スタジオ照明、背景は[色]の無地、髪の毛一本一本まで鮮明",
                "Ultra-realistic portrait of [person description], [emotion/expression], studio lighting, solid [color] background, every single hair is clear",
            ),
            Style::AnimeCharacter => Phrase::new(
                "[キャラクターの説明]、人気アニメ映画風の壮大なイラスト、[感情]を表現する表情、[背景]、デジタルペインティング",
                "[Character description], epic illustration in the style of a popular anime movie, facial expression that expresses [emotion], [background], digital painting",
            ),
            Style::ImpastoOil => Phrase::new(
                "[描きたいもの]の厚塗りの油絵、レンブラント風の劇的な光と影、重厚な色彩、クラシックな雰囲気",
                "Impasto oil painting of [subject], dramatic light and shadow in the style of Rembrandt, deep colors, classic atmosphere",
            ),
            Style::RetroFilm => Phrase::new(
                "[被写体]を写した80年代の日本のフィルム写真風、少しノイズの入った質感、温かみのある色合い、ノスタルジックな夏の日の雰囲気",
                "80s Japanese film style photo of [subject], slightly noisy texture, warm colors, nostalgic summer day atmosphere",
            ),
            Style::DetailedPen => Phrase::new(
                "[描きたいもの]の非常に詳細なペン画、銅版画風の繊細な線、アンティークな雰囲気、イラストレーション",
                "Very detailed pen drawing of [subject], delicate lines in the style of a copperplate engraving, antique atmosphere, illustration",
            ),
            Style::Character3d => Phrase::new(
                "[キャラクターの説明]、高品質な3Dキャラクターモデル、トゥーンレンダリング、生き生きとした表情、明るいライティング",
                "[Character description], high-quality 3D character model, toon rendering, lively expression, bright lighting",
            ),
            Style::PopArt => Phrase::new(
                "[描きたいもの]のポップアート、鮮やかなシルクスクリーン風、大胆な色彩の反復、グラフィカルなデザイン",
                "Pop art of [subject], vivid silkscreen style, bold color repetition, graphical design",
            ),
            Style::Steampunk => Phrase::new(
                "[描きたいもの]のスチームパンク風イラスト、歯車と真鍮の装飾、緻密なメカニカルデザイン、ヴィクトリア朝の雰囲気、セピア調の色合い",
                "Steampunk illustration of [subject], gears and brass decoration, intricate mechanical design, Victorian atmosphere, sepia tones",
            ),
            Style::MinimalistLineArt => Phrase::new(
                "[描きたいもの]のミニマリストなラインアート、一筆書き風、シンプルな線、白背景、洗練されたデザイン",
                "Minimalist line art of [subject], one-stroke style, simple lines, white background, sophisticated design",
            ),
        }
    }

    pub fn preset(&self) -> StylePreset {
        let templates = self.templates();
        StylePreset {
            jp: Template::parse(templates.jp),
            en: Template::parse(templates.en),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
#[serde(from = "String")]
pub enum Mood {
    #[default]
    Calm,
    Warm,
    Nostalgic,
    Dreamy,
    Energetic,
    Melancholy,
    Cozy,
    Rainy,
    Night,
    Sunny,
}

impl From<String> for Mood {
    fn from(key: String) -> Self {
        Self::from_key(&key)
    }
}

impl Mood {
    pub const ALL: [Mood; 10] = [
        Mood::Calm,
        Mood::Warm,
        Mood::Nostalgic,
        Mood::Dreamy,
        Mood::Energetic,
        Mood::Melancholy,
        Mood::Cozy,
        Mood::Rainy,
        Mood::Night,
        Mood::Sunny,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            Mood::Calm => "calm",
            Mood::Warm => "warm",
            Mood::Nostalgic => "nostalgic",
            Mood::Dreamy => "dreamy",
            Mood::Energetic => "energetic",
            Mood::Melancholy => "melancholy",
            Mood::Cozy => "cozy",
            Mood::Rainy => "rainy",
            Mood::Night => "night",
            Mood::Sunny => "sunny",
        }
    }

    /// Unknown keys fall back to calm.
    pub fn from_key(key: &str) -> Self {
        lookup(&Self::ALL, key, Mood::key)
    }

    /// Atmosphere description for image prompts.
    pub fn scene(&self) -> Phrase {
        match self {
            Mood::Calm => Phrase::new("穏やかな雰囲気、自然な色調", "calm mood, natural palette"),
            Mood::Warm => Phrase::new("あたたかい雰囲気、柔らかな光、やさしい色調", "warm mood, soft light, gentle colors"),
            Mood::Nostalgic => Phrase::new("ノスタルジック、少し退色した色、フィルム風", "nostalgic, slightly faded colors, film-like"),
            Mood::Dreamy => Phrase::new("夢のよう、ふんわり、淡いボケ", "dreamy, airy, soft bokeh"),
            Mood::Energetic => Phrase::new("元気で明るい、コントラスト強め、活気", "energetic, bright, strong contrast"),
            Mood::Melancholy => Phrase::new("もの静か、落ち着いた色調、やわらかな陰影", "melancholic, muted tones, soft shadows"),
            Mood::Cozy => Phrase::new("居心地よい、あたたかな室内灯、リラックス", "cozy, warm indoor light, relaxed"),
            Mood::Rainy => Phrase::new("雨の情緒、濡れた路面の反射、しっとり", "rainy mood, wet reflections, gentle"),
            Mood::Night => Phrase::new("夜景、ネオンや街灯、深い陰影", "night scene, neon/street lights, deep shadows"),
            Mood::Sunny => Phrase::new("晴れやか、クリアな光、鮮やかな色", "sunny, clear light, vivid colors"),
        }
    }

    /// One-word label for music prompts.
    pub fn label(&self) -> Phrase {
        match self {
            Mood::Calm => Phrase::new("穏やか", "calm"),
            Mood::Warm => Phrase::new("あたたかい", "warm"),
            Mood::Nostalgic => Phrase::new("ノスタルジック", "nostalgic"),
            Mood::Dreamy => Phrase::new("夢のよう", "dreamy"),
            Mood::Energetic => Phrase::new("元気", "energetic"),
            Mood::Melancholy => Phrase::new("もの静か", "melancholy"),
            Mood::Cozy => Phrase::new("居心地よい", "cozy"),
            Mood::Rainy => Phrase::new("雨の情緒", "rainy"),
            Mood::Night => Phrase::new("夜", "night"),
            Mood::Sunny => Phrase::new("晴れやか", "sunny"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
#[serde(from = "String")]
pub enum Detail {
    Simple,
    #[default]
    Balanced,
    High,
}

impl From<String> for Detail {
    fn from(key: String) -> Self {
        Self::from_key(&key)
    }
}

impl Detail {
    pub const ALL: [Detail; 3] = [Detail::Simple, Detail::Balanced, Detail::High];

    pub fn key(&self) -> &'static str {
        match self {
            Detail::Simple => "simple",
            Detail::Balanced => "balanced",
            Detail::High => "high",
        }
    }

    /// Unknown keys fall back to balanced.
    pub fn from_key(key: &str) -> Self {
        lookup(&Self::ALL, key, Detail::key)
    }

    pub fn texture(&self) -> Phrase {
        match self {
            Detail::Simple => Phrase::new("簡潔な質感、フラットな陰影", "minimal detail, clean composition"),
            Detail::Balanced => Phrase::new("程よい質感、柔らかな陰影", "balanced detail"),
            Detail::High => Phrase::new("精密な質感、繊細な陰影", "highly detailed, intricate textures, fine lighting"),
        }
    }
}

/// Lighting/colour hint matching the detected tone.
pub fn tone_hint(tone: Tone) -> Phrase {
    match tone {
        Tone::Positive => Phrase::new("明るい雰囲気、爽やか、優しい光", "bright mood, fresh, gentle light"),
        Tone::Negative => Phrase::new("静かな雰囲気、落ち着いた色調、弱い光", "calm mood, muted colors, soft light"),
        Tone::Neutral => Phrase::new("自然な雰囲気、穏やかな色調", "natural mood, soft palette"),
    }
}

pub(crate) fn lookup<T: Copy + Default>(all: &[T], key: &str, key_of: fn(&T) -> &'static str) -> T {
    let wanted = key.trim().to_lowercase();
    match all.iter().find(|item| key_of(item) == wanted) {
        Some(item) => *item,
        None => {
            let fallback = T::default();
            warn!(key = %wanted, fallback = key_of(&fallback), "unknown preset key");
            fallback
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::template::Slot;

    #[test]
    fn every_style_round_trips_and_has_a_subject_slot() {
        for style in Style::ALL {
            assert_eq!(Style::from_key(style.key()), style);
            let preset = style.preset();
            assert!(!preset.jp.is_empty());
            assert!(preset.jp.slots().count() >= 1, "{} has no jp slot", style.key());
            assert!(preset.en.slots().count() >= 1, "{} has no en slot", style.key());
        }
    }

    #[test]
    fn portrait_template_uses_person_emotion_and_color() {
        let slots: Vec<Slot> = Style::PhotorealPortrait.preset().jp.slots().collect();
        assert_eq!(slots, vec![Slot::Person, Slot::Emotion, Slot::Color]);
    }

    #[test]
    fn unknown_keys_use_defaults() {
        assert_eq!(Style::from_key("cubism"), Style::Watercolor);
        assert_eq!(Mood::from_key(""), Mood::Calm);
        assert_eq!(Mood::from_key(" Rainy "), Mood::Rainy);
        assert_eq!(Detail::from_key("ultra"), Detail::Balanced);
    }

    #[test]
    fn serde_uses_preset_keys() {
        assert_eq!(serde_json::to_string(&Style::Character3d).unwrap(), "\"3d-character\"");
        assert_eq!(serde_json::to_string(&Style::MinimalistLineArt).unwrap(), "\"minimalist-line-art\"");
        let mood: Mood = serde_json::from_str("\"night\"").unwrap();
        assert_eq!(mood, Mood::Night);
    }
}
