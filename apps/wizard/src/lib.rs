//! Step-by-step question wizard that gathers journal text for the
//! picture-diary composers.

pub mod compose;
pub mod error;
pub mod session;
pub mod song;
pub mod steps;

pub use compose::{compose_raw_from_answers, Answers};
pub use error::{Result, WizardError};
pub use session::{Finalized, WizardSession};
pub use song::{compose_song, song_request, Song, SongOptions};
pub use steps::{Phase, Step, WizardMode};
