//! Composer configuration, loadable from a JSON file.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::Result;
use crate::image::ImagePromptRequest;
use crate::music::{GenreDraft, Language, LyricTone, MusicPromptRequest, Tempo, VocalMode};
use crate::presets::{Detail, Mood, Style};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ComposerConfig {
    /// Keywords extracted per image prompt.
    pub keyword_limit: usize,
    /// Leading keywords substituted into subject-like slots.
    pub subject_keywords: usize,
    pub image: ImageDefaults,
    pub music: MusicDefaults,
    /// Extra genres registered on top of the built-in table.
    pub custom_genres: BTreeMap<String, GenreDraft>,
}

impl Default for ComposerConfig {
    fn default() -> Self {
        Self {
            keyword_limit: 12,
            subject_keywords: 6,
            image: ImageDefaults::default(),
            music: MusicDefaults::default(),
            custom_genres: BTreeMap::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImageDefaults {
    pub style: Style,
    pub mood: Mood,
    pub aspect: String,
    pub detail: Detail,
    pub include_title: bool,
}

impl Default for ImageDefaults {
    fn default() -> Self {
        Self {
            style: Style::Watercolor,
            mood: Mood::Calm,
            aspect: "1:1".to_string(),
            detail: Detail::Balanced,
            include_title: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MusicDefaults {
    pub mood: Mood,
    pub genre: String,
    pub vocal: VocalMode,
    pub language: Language,
    pub tempo: Tempo,
    pub tone: LyricTone,
}

impl Default for MusicDefaults {
    fn default() -> Self {
        Self {
            mood: Mood::Nostalgic,
            genre: "citypop".to_string(),
            vocal: VocalMode::Sing,
            language: Language::Ja,
            tempo: Tempo::Mid,
            tone: LyricTone::Introspective,
        }
    }
}

impl ComposerConfig {
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_json_str(&content)?;
        info!(
            path = %path.display(),
            custom_genres = config.custom_genres.len(),
            "loaded composer config"
        );
        Ok(config)
    }

    pub fn from_json_str(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    /// Image request for `raw_text` using the configured defaults.
    pub fn image_request(&self, raw_text: impl Into<String>) -> ImagePromptRequest {
        ImagePromptRequest {
            raw_text: raw_text.into(),
            diary: String::new(),
            style: self.image.style,
            mood: self.image.mood,
            aspect: self.image.aspect.clone(),
            detail: self.image.detail,
            include_title: self.image.include_title,
        }
    }

    /// Music request for `theme` using the configured defaults.
    pub fn music_request(&self, theme: impl Into<String>) -> MusicPromptRequest {
        MusicPromptRequest {
            theme: theme.into(),
            mood: self.music.mood,
            genre: self.music.genre.clone(),
            vocal: self.music.vocal,
            language: self.music.language,
            tempo: self.music.tempo,
            tone: self.music.tone,
        }
    }
}
