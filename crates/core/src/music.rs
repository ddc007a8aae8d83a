//! Song-generation prompts: genre registry, vocal/tempo/tone tables and
//! seed lyric lines.

use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::config::ComposerConfig;
use crate::error::{Error, Result};
use crate::presets::{lookup, Mood, Phrase};

pub const DEFAULT_GENRE: &str = "citypop";
const DEFAULT_THEME_JP: &str = "日常 / 都会 / 余韻";
const DEFAULT_THEME_EN: &str = "everyday / city / afterglow";
const DEFAULT_LYRIC_THEME: &str = "日常の一コマ";
const MIX_JP: &str = "ミックス: ボーカル前面、楽器は歌を支える。過度な歪みを避け、明瞭さ重視。";
const MIX_EN: &str = "mix: vocals forward; instruments supportive; avoid harsh distortion; keep clarity.";
const ASCII_THEME_RATIO: f32 = 0.8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
#[serde(from = "String")]
pub enum VocalMode {
    #[default]
    Sing,
    Rap,
    /// Singing and rap in the same song.
    Both,
}

impl From<String> for VocalMode {
    fn from(key: String) -> Self {
        Self::from_key(&key)
    }
}

impl VocalMode {
    pub const ALL: [VocalMode; 3] = [VocalMode::Sing, VocalMode::Rap, VocalMode::Both];

    pub fn key(&self) -> &'static str {
        match self {
            VocalMode::Sing => "sing",
            VocalMode::Rap => "rap",
            VocalMode::Both => "both",
        }
    }

    pub fn from_key(key: &str) -> Self {
        lookup(&Self::ALL, key, VocalMode::key)
    }

    pub fn label(&self) -> Phrase {
        match self {
            VocalMode::Sing => Phrase::new("歌中心", "singing-focused"),
            VocalMode::Rap => Phrase::new("ラップ中心", "rap-focused"),
            VocalMode::Both => Phrase::new("歌とラップのミックス", "singing + rap mix"),
        }
    }

    pub fn structure(&self) -> &'static str {
        match self {
            VocalMode::Rap => "intro, verse, verse, hook, verse, hook, outro",
            VocalMode::Both => "intro, verse (sing), pre, chorus, verse (rap), chorus, bridge, outro",
            VocalMode::Sing => "intro, verse, pre, chorus, verse, chorus, bridge, outro",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
#[serde(from = "String")]
pub enum Language {
    #[default]
    Ja,
    En,
    Mix,
}

impl From<String> for Language {
    fn from(key: String) -> Self {
        Self::from_key(&key)
    }
}

impl Language {
    pub const ALL: [Language; 3] = [Language::Ja, Language::En, Language::Mix];

    pub fn key(&self) -> &'static str {
        match self {
            Language::Ja => "ja",
            Language::En => "en",
            Language::Mix => "mix",
        }
    }

    pub fn from_key(key: &str) -> Self {
        lookup(&Self::ALL, key, Language::key)
    }

    pub fn label(&self) -> Phrase {
        match self {
            Language::Ja => Phrase::new("日本語", "Japanese"),
            Language::En => Phrase::new("英語", "English"),
            Language::Mix => Phrase::new("日英ミックス", "Japanese-English mix"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
#[serde(from = "String")]
pub enum Tempo {
    Slow,
    #[default]
    Mid,
    Fast,
}

impl From<String> for Tempo {
    fn from(key: String) -> Self {
        Self::from_key(&key)
    }
}

impl Tempo {
    pub const ALL: [Tempo; 3] = [Tempo::Slow, Tempo::Mid, Tempo::Fast];

    pub fn key(&self) -> &'static str {
        match self {
            Tempo::Slow => "slow",
            Tempo::Mid => "mid",
            Tempo::Fast => "fast",
        }
    }

    /// Unknown keys fall back to mid.
    pub fn from_key(key: &str) -> Self {
        lookup(&Self::ALL, key, Tempo::key)
    }

    pub fn label(&self) -> Phrase {
        match self {
            Tempo::Slow => Phrase::new("ゆっくり", "slow"),
            Tempo::Mid => Phrase::new("ふつう", "medium"),
            Tempo::Fast => Phrase::new("はやい", "fast"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
#[serde(from = "String")]
pub enum LyricTone {
    #[default]
    Introspective,
    Poetic,
    Colloquial,
    Punchy,
    Humorous,
    Melancholic,
    Romantic,
    Empowering,
    Storytelling,
    Minimal,
}

impl From<String> for LyricTone {
    fn from(key: String) -> Self {
        Self::from_key(&key)
    }
}

impl LyricTone {
    pub const ALL: [LyricTone; 10] = [
        LyricTone::Introspective,
        LyricTone::Poetic,
        LyricTone::Colloquial,
        LyricTone::Punchy,
        LyricTone::Humorous,
        LyricTone::Melancholic,
        LyricTone::Romantic,
        LyricTone::Empowering,
        LyricTone::Storytelling,
        LyricTone::Minimal,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            LyricTone::Introspective => "introspective",
            LyricTone::Poetic => "poetic",
            LyricTone::Colloquial => "colloquial",
            LyricTone::Punchy => "punchy",
            LyricTone::Humorous => "humorous",
            LyricTone::Melancholic => "melancholic",
            LyricTone::Romantic => "romantic",
            LyricTone::Empowering => "empowering",
            LyricTone::Storytelling => "storytelling",
            LyricTone::Minimal => "minimal",
        }
    }

    /// Unknown keys fall back to introspective.
    pub fn from_key(key: &str) -> Self {
        lookup(&Self::ALL, key, LyricTone::key)
    }

    pub fn label(&self) -> Phrase {
        match self {
            LyricTone::Introspective => Phrase::new("内省的", "introspective"),
            LyricTone::Poetic => Phrase::new("詩的", "poetic"),
            LyricTone::Colloquial => Phrase::new("口語的", "colloquial"),
            LyricTone::Punchy => Phrase::new("力強い", "punchy"),
            LyricTone::Humorous => Phrase::new("ユーモア", "humorous"),
            LyricTone::Melancholic => Phrase::new("物悲しい", "melancholic"),
            LyricTone::Romantic => Phrase::new("ロマンチック", "romantic"),
            LyricTone::Empowering => Phrase::new("前向き", "empowering"),
            LyricTone::Storytelling => Phrase::new("物語調", "storytelling"),
            LyricTone::Minimal => Phrase::new("ミニマル", "minimal"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenrePreset {
    pub jp: String,
    pub en: String,
    /// Comma-separated instrumentation.
    pub instruments: String,
    /// BPM range such as `70-90`.
    pub bpm: String,
}

impl GenrePreset {
    fn builtin(jp: &str, en: &str, instruments: &str, bpm: &str) -> Self {
        Self {
            jp: jp.to_string(),
            en: en.to_string(),
            instruments: instruments.to_string(),
            bpm: bpm.to_string(),
        }
    }
}

/// User-supplied genre fields; blanks are filled in on registration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenreDraft {
    pub jp: Option<String>,
    pub en: Option<String>,
    pub instruments: Option<String>,
    pub bpm: Option<String>,
}

impl GenreDraft {
    fn into_preset(self, key: &str) -> GenrePreset {
        let jp = filled(self.jp);
        let en = filled(self.en);
        GenrePreset {
            jp: jp.clone().or_else(|| en.clone()).unwrap_or_else(|| key.to_string()),
            en: en.or(jp).unwrap_or_else(|| key.to_string()),
            instruments: filled(self.instruments).unwrap_or_else(|| "custom instruments".to_string()),
            bpm: filled(self.bpm).unwrap_or_else(|| "90-110".to_string()),
        }
    }
}

// Whitespace runs, newlines included, collapse to one space so custom fields
// keep the prompt on a single line.
fn filled(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.split_whitespace().collect::<Vec<_>>().join(" "))
        .filter(|v| !v.is_empty())
}

static BUILTIN_GENRES: Lazy<BTreeMap<&'static str, GenrePreset>> = Lazy::new(|| {
    [
        ("rap", GenrePreset::builtin("Rap / Hip Hop", "rap / hip hop", "boom bap drums or modern trap hats, 808/sub, piano/keys, sparse textures", "80-100")),
        ("reggae", GenrePreset::builtin("Reggae", "reggae", "offbeat guitar/skank, deep bass, laid-back drums, organ", "70-90")),
        ("dub", GenrePreset::builtin("Dub", "dub", "heavy bass, echo/delay, spring reverb, stripped drums, tape fx", "70-90")),
        ("jungle", GenrePreset::builtin("Jungle", "jungle", "amen breaks, fast breakbeats, sub-bass, pads", "160-175")),
        ("jpop", GenrePreset::builtin("J-POP", "J-POP", "clean electric guitar, synth pad, tight drums", "90-110")),
        ("citypop", GenrePreset::builtin("City Pop", "city pop", "electric piano, slap bass, clean guitar, 80s drum machine", "95-110")),
        ("lofi", GenrePreset::builtin("Lo-fi Hip Hop", "lo-fi hip hop", "dusty drums, warm tape, jazzy chords, vinyl crackle", "70-90")),
        ("trap", GenrePreset::builtin("Trap / Emo Rap", "trap / emo rap", "808 sub-bass, crisp hats, sparse keys, atmospheric pad", "120-150")),
        ("rb", GenrePreset::builtin("R&B", "R&B", "smooth Rhodes, sub bass, mellow drums, backing vocals", "85-100")),
        ("rock", GenrePreset::builtin("Rock / Indie", "rock / indie", "overdrive guitars, live drums, bass guitar", "100-140")),
        ("acoustic", GenrePreset::builtin("Acoustic / Folk", "acoustic / folk", "acoustic guitar, light percussion, soft pad", "80-105")),
        ("edm", GenrePreset::builtin("EDM / House", "EDM / house", "sidechain pad, punchy kick, pluck synth, risers", "120-128")),
        ("futurebass", GenrePreset::builtin("Future Bass", "future bass", "detuned saw chords, modulated bass, bright leads", "140-160")),
        ("jazz", GenrePreset::builtin("Jazz", "jazz", "upright bass, brushed drums, piano, sax", "80-120")),
        ("bossa", GenrePreset::builtin("Bossa Nova", "bossa nova", "nylon guitar, gentle percussion, soft keys", "70-100")),
    ]
    .into_iter()
    .collect()
});

/// Lower-case and join whitespace-separated words with `-`.
pub fn normalize_genre_key(key: &str) -> String {
    key.split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join("-")
}

pub fn is_builtin_genre(key: &str) -> bool {
    BUILTIN_GENRES.contains_key(key)
}

/// Genre table owned by one composer. Registration upserts; nothing is ever
/// removed, so the default genre always resolves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenreRegistry {
    presets: BTreeMap<String, GenrePreset>,
}

impl Default for GenreRegistry {
    fn default() -> Self {
        Self::with_builtins()
    }
}

impl GenreRegistry {
    pub fn with_builtins() -> Self {
        let presets = BUILTIN_GENRES
            .iter()
            .map(|(key, preset)| (key.to_string(), preset.clone()))
            .collect();
        Self { presets }
    }

    /// Insert or replace the genre stored under the normalized form of `key`.
    /// Returns the normalized key.
    pub fn register(&mut self, key: &str, draft: GenreDraft) -> Result<String> {
        let normalized = normalize_genre_key(key);
        if normalized.is_empty() {
            return Err(Error::InvalidPresetKey(key.to_string()));
        }
        let preset = draft.into_preset(&normalized);
        match self.presets.insert(normalized.clone(), preset) {
            Some(_) => warn!(
                key = %normalized,
                builtin = is_builtin_genre(&normalized),
                "genre preset replaced"
            ),
            None => debug!(key = %normalized, "genre preset registered"),
        }
        Ok(normalized)
    }

    /// Exact lookup; keys are not normalized here.
    pub fn get(&self, key: &str) -> Option<&GenrePreset> {
        self.presets.get(key)
    }

    /// Lookup falling back to the city pop preset.
    pub fn resolve(&self, key: &str) -> &GenrePreset {
        self.presets
            .get(key)
            .or_else(|| self.presets.get(DEFAULT_GENRE))
            .unwrap_or(&BUILTIN_GENRES[DEFAULT_GENRE])
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.presets.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.presets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.presets.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MusicPromptRequest {
    pub theme: String,
    pub mood: Mood,
    pub genre: String,
    pub vocal: VocalMode,
    pub language: Language,
    pub tempo: Tempo,
    pub tone: LyricTone,
}

impl Default for MusicPromptRequest {
    fn default() -> Self {
        Self {
            theme: String::new(),
            mood: Mood::Nostalgic,
            genre: DEFAULT_GENRE.to_string(),
            vocal: VocalMode::Sing,
            language: Language::Ja,
            tempo: Tempo::Mid,
            tone: LyricTone::Introspective,
        }
    }
}

/// Labelled Japanese and English detail lines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Breakdown {
    pub jp: String,
    pub en: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MusicPromptResult {
    /// Single line, ready to paste.
    pub prompt: String,
    pub ideas: Vec<String>,
    pub tone_label: Phrase,
    pub theme_en: Option<String>,
    pub breakdown: Breakdown,
}

#[derive(Debug, Clone, Default)]
pub struct MusicComposer {
    genres: GenreRegistry,
}

impl MusicComposer {
    pub fn new(genres: GenreRegistry) -> Self {
        Self { genres }
    }

    /// Built-in genres plus the config's custom ones. Blank custom keys are
    /// skipped.
    pub fn from_config(config: &ComposerConfig) -> Self {
        let mut genres = GenreRegistry::with_builtins();
        for (key, draft) in &config.custom_genres {
            if let Err(err) = genres.register(key, draft.clone()) {
                warn!(%err, "skipping custom genre");
            }
        }
        Self { genres }
    }

    pub fn genres(&self) -> &GenreRegistry {
        &self.genres
    }

    pub fn register_genre(&mut self, key: &str, draft: GenreDraft) -> Result<String> {
        self.genres.register(key, draft)
    }

    pub fn compose(&self, request: &MusicPromptRequest) -> MusicPromptResult {
        if self.genres.get(&request.genre).is_none() {
            debug!(genre = %request.genre, "unknown genre, falling back to city pop");
        }
        let genre = self.genres.resolve(&request.genre);
        let mood = request.mood.label();
        let vocal = request.vocal.label();
        let language = request.language.label();
        let tempo = request.tempo.label();
        let tone = request.tone.label();
        let structure = request.vocal.structure();

        let theme = request.theme.split_whitespace().collect::<Vec<_>>().join(" ");
        let theme_en = Some(theme_to_english(&theme)).filter(|en| !en.is_empty());
        let theme_phrase = match (&theme_en, theme.is_empty()) {
            (_, true) => DEFAULT_THEME_EN.to_string(),
            (Some(en), false) => en.clone(),
            (None, false) => theme.clone(),
        };

        let mut parts = vec![genre.en.clone()];
        parts.extend(
            genre
                .instruments
                .split(',')
                .map(str::trim)
                .filter(|instrument| !instrument.is_empty())
                .map(str::to_string),
        );
        parts.push(format!("{} mood", mood.en));
        parts.push(format!("{} tempo ({} bpm)", tempo.en, genre.bpm));
        parts.push(format!("{} lyrics, {} vocals", language.en, vocal.en));
        parts.push(format!("{} tone", tone.en));
        parts.push(format!("theme: {theme_phrase}"));
        parts.push(format!("structure: {}", structure.replace(", ", " > ")));
        let prompt = parts.join(", ");

        let breakdown = Breakdown {
            jp: [
                format!("ジャンル: {}（{}）", genre.jp, genre.instruments),
                format!("雰囲気: {}", mood.jp),
                format!("テンポ: {}（目安BPM: {}）", tempo.jp, genre.bpm),
                format!("ボーカル: {}", vocal.jp),
                format!("言語: {}", language.jp),
                format!("歌詞トーン: {}", tone.jp),
                format!("テーマ: {}", if theme.is_empty() { DEFAULT_THEME_JP } else { theme.as_str() }),
                format!("構成: {structure}"),
                MIX_JP.to_string(),
            ]
            .join(", "),
            en: [
                format!("genre: {} ({})", genre.en, genre.instruments),
                format!("mood: {}", mood.en),
                format!("tempo: {} (bpm guide: {})", tempo.en, genre.bpm),
                format!("vocal: {}", vocal.en),
                format!("language: {}", language.en),
                format!("lyric tone: {}", tone.en),
                format!("theme: {theme_phrase}"),
                format!("structure: {structure}"),
                MIX_EN.to_string(),
            ]
            .join(", "),
        };

        MusicPromptResult {
            prompt,
            ideas: lyric_ideas(&theme, request.mood, request.vocal, request.language),
            tone_label: tone,
            theme_en,
            breakdown,
        }
    }
}

/// Seed lyric lines for the chosen vocal mode. English gets English
/// scaffolds; Japanese and mixed-language songs get Japanese ones.
pub fn lyric_ideas(theme: &str, mood: Mood, vocal: VocalMode, language: Language) -> Vec<String> {
    let theme = match theme.trim() {
        "" => DEFAULT_LYRIC_THEME,
        trimmed => trimmed,
    };
    let label = mood.label();

    match (language, vocal) {
        (Language::En, VocalMode::Rap) => vec![
            format!("hook) {theme}, {} night — we glow in slow motion", label.en),
            "verse) footsteps on wet streets, basslines under the neon".to_string(),
            "hook) breathe in, breathe out — let the city keep going".to_string(),
        ],
        (Language::En, VocalMode::Both) => vec![
            format!("chorus) {theme}, under soft lights — I keep on going"),
            "rap) pen taps, heart maps — tracing what I’m holding".to_string(),
            "chorus) a small spark in a quiet ocean".to_string(),
        ],
        (Language::En, VocalMode::Sing) => vec![
            format!("chorus) {theme} — softly, we are floating"),
            "verse) streetlights hum, tender and golden".to_string(),
            "bridge) promises folded in the pocket I’m holding".to_string(),
        ],
        (_, VocalMode::Rap) => vec![
            format!("hook）{theme}、{}な夜に — 静かな鼓動が刻む", label.jp),
            "verse）濡れた路地、ネオンの気配、胸のリズム".to_string(),
            "hook）吸って吐いて、街はまだ続く".to_string(),
        ],
        (_, VocalMode::Both) => vec![
            format!("サビ）{theme}、柔らかな灯りの下で まだ歩ける"),
            "ラップ）ペンが鳴る 心の地図をなぞる".to_string(),
            "サビ）静かな海に灯る小さな光".to_string(),
        ],
        (_, VocalMode::Sing) => vec![
            format!("サビ）{theme} — そっと浮かぶ夜の色"),
            "Aメロ）街灯が揺れて ひかりはやさしい".to_string(),
            "ブリッジ）ポケットの中に たたんだ約束".to_string(),
        ],
    }
}

// Longest entries first so that compound words win over their parts.
static THEME_TERMS: Lazy<Vec<(&'static str, &'static str)>> = Lazy::new(|| {
    let mut terms = vec![
        ("雨上がり", "after the rain"),
        ("帰り道", "way home"),
        ("夕焼け", "sunset"),
        ("夕暮れ", "dusk"),
        ("思い出", "memories"),
        ("カフェ", "cafe"),
        ("窓辺", "window"),
        ("散歩", "walk"),
        ("都会", "city"),
        ("手紙", "letter"),
        ("週末", "weekend"),
        ("約束", "promise"),
        ("余韻", "afterglow"),
        ("友達", "friends"),
        ("海", "ocean"),
        ("夜", "night"),
        ("雨", "rain"),
        ("街", "city"),
        ("朝", "morning"),
        ("夏", "summer"),
        ("冬", "winter"),
        ("春", "spring"),
        ("秋", "autumn"),
        ("恋", "love"),
        ("星", "stars"),
        ("旅", "journey"),
    ];
    terms.sort_by(|(a, _), (b, _)| b.chars().count().cmp(&a.chars().count()));
    terms
});

/// English keyword preview for a theme.
///
/// Mostly-ASCII input is returned as is. Otherwise recognised Japanese words
/// are mapped in order of appearance, deduplicated and joined with ` / `;
/// nothing recognised yields an empty string.
pub fn theme_to_english(theme: &str) -> String {
    let trimmed = theme.trim();
    let visible: Vec<char> = trimmed.chars().filter(|c| !c.is_whitespace()).collect();
    if visible.is_empty() {
        return String::new();
    }
    let ascii = visible.iter().filter(|c| c.is_ascii()).count();
    if ascii as f32 / visible.len() as f32 >= ASCII_THEME_RATIO {
        return trimmed.to_string();
    }

    let mut found: Vec<&str> = Vec::new();
    let mut rest = trimmed;
    while let Some(first) = rest.chars().next() {
        match THEME_TERMS.iter().find(|(jp, _)| rest.starts_with(jp)) {
            Some(&(jp, en)) => {
                if !found.contains(&en) {
                    found.push(en);
                }
                rest = &rest[jp.len()..];
            }
            None => rest = &rest[first.len_utf8()..],
        }
    }
    found.join(" / ")
}

pub const QUICK_PRESETS: [&str; 16] = [
    "lofi_night",
    "acoustic_morning",
    "jpop_ballad",
    "indie_pop",
    "boom_bap_jp",
    "lofi_rap",
    "trap_rain",
    "chill_rap",
    "city_afterglow",
    "jazz_cafe",
    "bossa_sunset",
    "ambient_afterglow",
    "dub_night",
    "emo_rock",
    "punk_garage",
    "edm_house",
];

/// Named parameter bundles for one-click song setups.
pub fn quick_preset(name: &str) -> Option<MusicPromptRequest> {
    use Language::{Ja, Mix};
    use LyricTone::*;
    use Tempo::{Fast, Mid, Slow};
    use VocalMode::{Rap, Sing};

    let (genre, mood, vocal, language, tempo, tone, theme) = match name {
        "lofi_night" => ("lofi", Mood::Night, Rap, Ja, Mid, Introspective, "夜散歩 / 雨上がり"),
        "acoustic_morning" => ("acoustic", Mood::Sunny, Sing, Ja, Slow, Minimal, "朝 / 窓辺"),
        "jpop_ballad" => ("jpop", Mood::Nostalgic, Sing, Ja, Mid, Romantic, "memories / letter"),
        "indie_pop" => ("rock", Mood::Sunny, Sing, Ja, Mid, Empowering, "weekend / small town"),
        "boom_bap_jp" => ("rap", Mood::Calm, Rap, Ja, Mid, Introspective, "city night / way home"),
        "lofi_rap" => ("lofi", Mood::Rainy, Rap, Ja, Mid, Storytelling, "afterglow / neon"),
        "trap_rain" => ("trap", Mood::Rainy, Rap, Ja, Fast, Punchy, "雨 / 都会の夜"),
        "chill_rap" => ("lofi", Mood::Dreamy, Rap, Ja, Slow, Minimal, "low-pressure day"),
        "city_afterglow" => ("citypop", Mood::Nostalgic, Sing, Ja, Mid, Romantic, "highway / afterglow"),
        "jazz_cafe" => ("jazz", Mood::Cozy, Sing, Mix, Slow, Poetic, "cafe / rain"),
        "bossa_sunset" => ("bossa", Mood::Warm, Sing, Ja, Slow, Romantic, "sunset / ocean"),
        "ambient_afterglow" => ("edm", Mood::Dreamy, Sing, Ja, Slow, Minimal, "city / afterglow"),
        "dub_night" => ("dub", Mood::Rainy, Sing, Mix, Slow, Introspective, "alley / echoes"),
        "emo_rock" => ("rock", Mood::Energetic, Sing, Ja, Mid, Empowering, "school / after school"),
        "punk_garage" => ("rock", Mood::Sunny, Sing, Ja, Fast, Punchy, "weekend / skate"),
        "edm_house" => ("edm", Mood::Sunny, Sing, Mix, Fast, Empowering, "party / dance"),
        _ => return None,
    };
    Some(MusicPromptRequest {
        theme: theme.to_string(),
        mood,
        genre: genre.to_string(),
        vocal,
        language,
        tempo,
        tone,
    })
}
