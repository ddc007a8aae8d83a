use picturediary_core::music::{quick_preset, Language, LyricTone, Tempo, VocalMode};
use picturediary_core::{
    build_image_prompt, detect_tone, generate_diary, ComposerConfig, DiaryMode, FixedClock,
    GenreDraft, ImageComposer, ImagePromptRequest, Mood, MusicComposer, MusicPromptRequest,
    Style, Tone,
};

fn clock() -> FixedClock {
    FixedClock::ymd(2024, 7, 7).unwrap()
}

const HEADER: &str = "2024年07月07日(日)";

#[test]
fn empty_prose_diary_is_header_plus_filler() {
    let diary = generate_diary("", DiaryMode::Prose, &clock());
    assert_eq!(diary, format!("{HEADER}\n今日は短いメモだけ。静かな一日。"));
}

#[test]
fn park_walk_scenario() {
    let raw = "公園を散歩した。天気が良くて気持ちよかった。";
    let diary = generate_diary(raw, DiaryMode::Prose, &clock());
    assert!(diary.contains("【今日の出来事】公園を散歩した。"));
    assert!(diary.contains("【気づき/感情】天気が良くて気持ちよかった。"));
    assert_eq!(detect_tone(raw), Tone::Positive);
}

#[test]
fn image_composer_is_deterministic_under_fixed_clock() {
    let composer = ImageComposer::default();
    let request = ImagePromptRequest {
        raw_text: "雨の駅で友達を待った。少し寒かった。".to_string(),
        style: Style::RetroFilm,
        mood: Mood::Rainy,
        ..ImagePromptRequest::default()
    };
    let first = composer.compose_with_diary(request.clone(), DiaryMode::Prose, &clock());
    let second = composer.compose_with_diary(request, DiaryMode::Prose, &clock());
    assert_eq!(first.prompt.as_bytes(), second.prompt.as_bytes());
    assert_eq!(first, second);
    assert_eq!(first.tone, Tone::Negative);
    assert!(first.prompt.contains(HEADER));
}

#[test]
fn image_prompt_has_japanese_and_english_blocks() {
    let result = build_image_prompt(&ImagePromptRequest {
        raw_text: "夕焼け 海辺 散歩".to_string(),
        diary: "日記本文".to_string(),
        ..ImagePromptRequest::default()
    });
    let (jp, en) = result.prompt.split_once("【生成の指示】\n").unwrap();
    assert!(jp.contains("【日記】\n日記本文\n"));
    assert!(jp.contains("水彩画"));
    assert!(en.starts_with("scene from a diary: 夕焼け, 海辺, 散歩"));
    assert!(en.contains("Watercolor painting of 夕焼け, 海辺, 散歩"));
}

#[test]
fn lofi_rap_scenario() {
    let request = MusicPromptRequest {
        theme: "city night".to_string(),
        mood: Mood::Rainy,
        genre: "lofi".to_string(),
        vocal: VocalMode::Rap,
        language: Language::Ja,
        tempo: Tempo::Mid,
        tone: LyricTone::Introspective,
    };
    let result = MusicComposer::default().compose(&request);
    assert!(result.prompt.starts_with("lo-fi hip hop, dusty drums, warm tape"));
    assert!(result.prompt.contains("70-90"));
    assert!(!result.prompt.contains('\n'));
    assert_eq!(result.ideas.len(), 3);
    assert!(result.ideas.iter().all(|line| line.contains('）')));
    assert!(result.ideas[0].starts_with("hook）city night、雨の情緒な夜に"));
    assert_eq!(result.theme_en.as_deref(), Some("city night"));
}

#[test]
fn registered_genre_is_found_only_by_normalized_key() {
    let mut composer = MusicComposer::default();
    let key = composer
        .register_genre(
            "Night Drive",
            GenreDraft {
                en: Some("night drive synthwave".into()),
                instruments: Some("analog synths, gated drums".into()),
                bpm: Some("100-118".into()),
                ..GenreDraft::default()
            },
        )
        .unwrap();
    assert_eq!(key, "night-drive");
    assert!(composer.genres().get("night-drive").is_some());
    assert!(composer.genres().get("Night Drive").is_none());

    let result = composer.compose(&MusicPromptRequest {
        genre: key,
        ..MusicPromptRequest::default()
    });
    assert!(result.prompt.starts_with("night drive synthwave, analog synths, gated drums"));
    assert!(result.prompt.contains("100-118"));
}

#[test]
fn independent_composers_do_not_share_registries() {
    let mut first = MusicComposer::default();
    let second = MusicComposer::default();
    first.register_genre("vaporwave", GenreDraft::default()).unwrap();
    assert!(first.genres().get("vaporwave").is_some());
    assert!(second.genres().get("vaporwave").is_none());
}

#[test]
fn config_custom_genres_are_registered() {
    let config = ComposerConfig::from_json_str(
        r#"{ "custom_genres": { "City Folk": { "jp": "シティフォーク" }, " ": {} } }"#,
    )
    .unwrap();
    let composer = MusicComposer::from_config(&config);
    let preset = composer.genres().get("city-folk").unwrap();
    assert_eq!(preset.en, "シティフォーク");
    assert_eq!(composer.genres().len(), 16);
}

#[test]
fn quick_preset_composes() {
    let request = quick_preset("trap_rain").unwrap();
    let result = MusicComposer::default().compose(&request);
    assert!(result.prompt.contains("120-150"));
    assert_eq!(result.theme_en.as_deref(), Some("rain / city / night"));
}
