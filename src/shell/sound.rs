//! Terminal sound cues.

use crate::config::Config;
use crate::effects::{SoundBoard, SoundCue};
use std::collections::HashMap;
use std::io::{self, Write};
use std::path::PathBuf;
use tracing::info;

/// Rings the terminal bell for each cue and logs which asset it stands for.
#[derive(Clone, Debug, Default)]
pub struct TerminalBell {
    files: HashMap<SoundCue, PathBuf>,
}

impl TerminalBell {
    pub fn new(config: &Config) -> Self {
        let files = SoundCue::ALL
            .iter()
            .filter_map(|cue| config.sound_path(*cue).map(|path| (*cue, path)))
            .collect();
        Self { files }
    }

    pub fn file_for(&self, cue: SoundCue) -> Option<&PathBuf> {
        self.files.get(&cue)
    }
}

impl SoundBoard for TerminalBell {
    fn play(&self, cue: SoundCue) {
        match self.file_for(cue) {
            Some(path) => info!(?cue, file = %path.display(), "playing sound cue"),
            None => info!(?cue, "playing sound cue"),
        }
        let mut err = io::stderr();
        let _ = err.write_all(b"\x07").and_then(|_| err.flush());
    }
}
