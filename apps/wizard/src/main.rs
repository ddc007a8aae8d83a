use std::{
  io::{self, BufRead, Write},
  path::PathBuf,
  process::ExitCode,
};

use clap::Parser;
use picturediary_core::{
  agent_request, ComposerConfig, Detail, DiaryMode, ImageComposer, Mood, Style, SystemClock,
};
use picturediary_wizard::{
  compose_song, song_request, steps::REFINE_NOTICE, Finalized, Song, SongOptions, WizardError, WizardMode,
  WizardSession,
};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

const FINISH_WORD: &str = "終わり";

/// Answer the wizard's questions line by line, then print the diary and an
/// image prompt, or a song prompt with `--music`.
#[derive(Debug, Parser)]
#[command(name = "picturediary", version)]
struct Args {
  /// Question set: diary, essay, rap or memo.
  #[arg(long, default_value = "essay")]
  mode: String,
  /// Diary layout: prose, essay, rap or memo.
  #[arg(long, default_value = "prose")]
  diary_style: String,
  #[arg(long)]
  style: Option<String>,
  #[arg(long)]
  mood: Option<String>,
  #[arg(long)]
  aspect: Option<String>,
  #[arg(long)]
  detail: Option<String>,
  /// Forbid any lettering in the image.
  #[arg(long)]
  no_title: bool,
  /// JSON composer configuration.
  #[arg(long)]
  config: Option<PathBuf>,
  /// Print the diary wrapped as a request for a chat agent.
  #[arg(long)]
  agent: bool,
  /// Print the result as JSON instead of plain text.
  #[arg(long)]
  json: bool,
  /// Compose a song prompt instead of an image prompt.
  #[arg(long)]
  music: bool,
  /// Quick song preset such as lofi_night; implies --music.
  #[arg(long)]
  preset: Option<String>,
  /// Song theme; defaults to the answers' top keywords.
  #[arg(long)]
  theme: Option<String>,
  #[arg(long)]
  genre: Option<String>,
  /// Song vocals: sing, rap or both.
  #[arg(long)]
  vocal: Option<String>,
  /// Lyric language: ja, en or mix.
  #[arg(long)]
  language: Option<String>,
  #[arg(long)]
  tempo: Option<String>,
  /// Lyric tone such as introspective or punchy.
  #[arg(long)]
  tone: Option<String>,
}

impl Args {
  fn wants_song(&self) -> bool {
    self.music || self.preset.is_some()
  }

  fn song_options(&self) -> SongOptions {
    SongOptions {
      preset: self.preset.clone(),
      theme: self.theme.clone(),
      mood: self.mood.clone(),
      genre: self.genre.clone(),
      vocal: self.vocal.clone(),
      language: self.language.clone(),
      tempo: self.tempo.clone(),
      tone: self.tone.clone(),
    }
  }
}

enum Command<'a> {
  Finish,
  Skip,
  Undo,
  Answer(&'a str),
}

fn parse_command(line: &str) -> Command<'_> {
  match line.trim() {
    FINISH_WORD | "/end" => Command::Finish,
    "/skip" => Command::Skip,
    "/undo" => Command::Undo,
    _ => Command::Answer(line),
  }
}

fn main() -> ExitCode {
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
    .with_writer(io::stderr)
    .init();

  match run(Args::parse()) {
    Ok(()) => ExitCode::SUCCESS,
    Err(error) => {
      eprintln!("picturediary: {error}");
      ExitCode::FAILURE
    }
  }
}

fn run(args: Args) -> Result<(), WizardError> {
  let config = match &args.config {
    Some(path) => ComposerConfig::load(path)?,
    None => ComposerConfig::default(),
  };
  let mode = WizardMode::from_key(&args.mode);
  let diary_mode = DiaryMode::from_key(&args.diary_style);
  info!(mode = mode.key(), diary = diary_mode.key(), song = args.wants_song(), "starting wizard");
  if args.wants_song() {
    // Reject a bad preset name before any questions are asked.
    song_request(&config, &args.song_options(), "")?;
  }

  let mut session = WizardSession::new(mode);
  prompt_line(mode.intro())?;
  ask(&session)?;

  let stdin = io::stdin();
  for line in stdin.lock().lines() {
    let line = line?;
    match parse_command(&line) {
      Command::Finish => break,
      Command::Skip => session.skip(),
      Command::Undo => {
        if !session.undo() {
          prompt_line("（戻れる質問はありません）")?;
        }
      }
      Command::Answer(text) => {
        if text.trim().is_empty() {
          continue;
        }
        let was_main = !session.is_complete_enough();
        session.answer(text)?;
        if was_main && session.is_complete_enough() && mode != WizardMode::Memo {
          prompt_line(REFINE_NOTICE)?;
        }
      }
    }
    ask(&session)?;
  }

  if !session.is_complete_enough() {
    warn!(answers = session.answers().len(), "finalizing before the main questions were done");
  }

  if args.wants_song() {
    let song = compose_song(&config, &args.song_options(), &session.raw_text())?;
    return print_song(&song, args.json);
  }

  let mut request = config.image_request("");
  if let Some(style) = &args.style {
    request.style = Style::from_key(style);
  }
  if let Some(mood) = &args.mood {
    request.mood = Mood::from_key(mood);
  }
  if let Some(aspect) = &args.aspect {
    request.aspect = aspect.clone();
  }
  if let Some(detail) = &args.detail {
    request.detail = Detail::from_key(detail);
  }
  if args.no_title {
    request.include_title = false;
  }

  let composer = ImageComposer::new(&config);
  let mut finalized = session.finalize(diary_mode, request, &composer, &SystemClock)?;
  if args.agent {
    finalized.diary = agent_request(&finalized.diary, diary_mode, finalized.image.tone);
  }
  print_result(&finalized, args.json)
}

fn ask(session: &WizardSession) -> io::Result<()> {
  match session.current_question() {
    Some(question) => prompt_line(question),
    None => Ok(()),
  }
}

// Questions go to stderr so stdout carries only the generated texts.
fn prompt_line(text: &str) -> io::Result<()> {
  let mut stderr = io::stderr().lock();
  writeln!(stderr, "{text}")?;
  stderr.flush()
}

fn print_result(finalized: &Finalized, json: bool) -> Result<(), WizardError> {
  let mut stdout = io::stdout().lock();
  if json {
    serde_json::to_writer_pretty(&mut stdout, finalized)?;
    writeln!(stdout)?;
  } else {
    writeln!(stdout, "{}\n\n{}", finalized.diary, finalized.image.prompt)?;
  }
  Ok(())
}

fn print_song(song: &Song, json: bool) -> Result<(), WizardError> {
  let mut stdout = io::stdout().lock();
  if json {
    serde_json::to_writer_pretty(&mut stdout, song)?;
    writeln!(stdout)?;
    return Ok(());
  }
  writeln!(stdout, "{}\n", song.result.prompt)?;
  for idea in &song.result.ideas {
    writeln!(stdout, "{idea}")?;
  }
  Ok(())
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn commands_are_recognised_after_trimming() {
    assert!(matches!(parse_command(" 終わり "), Command::Finish));
    assert!(matches!(parse_command("/end"), Command::Finish));
    assert!(matches!(parse_command("/skip"), Command::Skip));
    assert!(matches!(parse_command("/undo\t"), Command::Undo));
    assert!(matches!(parse_command("雨だった"), Command::Answer("雨だった")));
  }

  #[test]
  fn flags_parse() {
    let args = Args::parse_from(["picturediary", "--mode", "diary", "--no-title", "--diary-style", "essay"]);
    assert_eq!(args.mode, "diary");
    assert_eq!(args.diary_style, "essay");
    assert!(args.no_title);
    assert!(args.style.is_none());
    assert!(!args.wants_song());
  }

  #[test]
  fn preset_flag_selects_song_output() {
    let args = Args::parse_from(["picturediary", "--preset", "trap_rain", "--tempo", "slow", "--mood", "night"]);
    assert!(args.wants_song());
    let options = args.song_options();
    assert_eq!(options.preset.as_deref(), Some("trap_rain"));
    assert_eq!(options.tempo.as_deref(), Some("slow"));
    assert_eq!(options.mood.as_deref(), Some("night"));
  }
}
