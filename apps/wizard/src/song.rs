//! Song prompts from a wizard draft.

use picturediary_core::music::{quick_preset, Language, LyricTone, Tempo, VocalMode};
use picturediary_core::{extract_keywords, ComposerConfig, Mood, MusicComposer, MusicPromptRequest, MusicPromptResult};
use serde::Serialize;
use tracing::debug;

use crate::error::{Result, WizardError};

const THEME_KEYWORDS: usize = 3;

/// Front-end choices for a song prompt. `None` keeps the preset or
/// configured value.
#[derive(Debug, Clone, Default)]
pub struct SongOptions {
  pub preset: Option<String>,
  pub theme: Option<String>,
  pub mood: Option<String>,
  pub genre: Option<String>,
  pub vocal: Option<String>,
  pub language: Option<String>,
  pub tempo: Option<String>,
  pub tone: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Song {
  pub request: MusicPromptRequest,
  pub result: MusicPromptResult,
}

/// Build the request: quick preset or configured defaults first, then the
/// explicit options. The theme is the `theme` option, else the draft's top
/// keywords, else whatever the preset carried.
pub fn song_request(config: &ComposerConfig, options: &SongOptions, draft: &str) -> Result<MusicPromptRequest> {
  let mut request = match &options.preset {
    Some(name) => quick_preset(name.trim()).ok_or_else(|| WizardError::UnknownPreset(name.clone()))?,
    None => config.music_request(""),
  };

  if let Some(mood) = &options.mood {
    request.mood = Mood::from_key(mood);
  }
  if let Some(genre) = &options.genre {
    request.genre = genre.trim().to_string();
  }
  if let Some(vocal) = &options.vocal {
    request.vocal = VocalMode::from_key(vocal);
  }
  if let Some(language) = &options.language {
    request.language = Language::from_key(language);
  }
  if let Some(tempo) = &options.tempo {
    request.tempo = Tempo::from_key(tempo);
  }
  if let Some(tone) = &options.tone {
    request.tone = LyricTone::from_key(tone);
  }

  let keywords = extract_keywords(draft, THEME_KEYWORDS);
  match &options.theme {
    Some(theme) => request.theme = theme.trim().to_string(),
    None if !keywords.is_empty() => request.theme = keywords.join(" / "),
    None => {}
  }
  Ok(request)
}

pub fn compose_song(config: &ComposerConfig, options: &SongOptions, draft: &str) -> Result<Song> {
  let request = song_request(config, options, draft)?;
  let composer = MusicComposer::from_config(config);
  let result = composer.compose(&request);
  debug!(genre = %request.genre, theme = %request.theme, "composed song prompt");
  Ok(Song { request, result })
}
