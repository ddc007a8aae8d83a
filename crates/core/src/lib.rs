//! Diary rendering and prompt composition for image and song generators.
//!
//! Everything here is synchronous and total over its inputs: unknown preset
//! keys fall back to defaults and empty text yields fallback diaries. Only
//! configuration loading and genre registration can fail.

pub mod analysis;
pub mod clock;
pub mod config;
pub mod diary;
pub mod error;
pub mod image;
pub mod music;
pub mod presets;
pub mod template;

pub use analysis::{detect_tone, extract_keywords, split_sentences, Tone};
pub use clock::{Clock, FixedClock, SystemClock};
pub use config::ComposerConfig;
pub use diary::{agent_request, generate_diary, DiaryMode};
pub use error::{Error, Result};
pub use image::{build_image_prompt, ImageComposer, ImagePromptRequest, ImagePromptResult};
pub use music::{GenreDraft, GenrePreset, GenreRegistry, MusicComposer, MusicPromptRequest, MusicPromptResult};
pub use presets::{Detail, Mood, Phrase, Style};
