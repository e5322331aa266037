//! Fire-and-forget cue playback.
//!
//! The round engine only decides *which* cue applies each tick; this module
//! owns getting a sound out of the speakers without ever stalling the tick
//! loop. Cues are handed over a channel to a dedicated playback thread that
//! shells out to an external player command; playback failures are logged
//! to stderr and swallowed, so a missing asset or a broken player can never
//! block or alter a phase transition.

use std::path::{Path, PathBuf};
use std::process::Command;
use std::sync::mpsc::{self, Sender};
use std::thread;

use rochambot_engine::round::Cue;

/// Maps a cue to its sound asset file name.
pub fn asset_name(cue: Cue) -> &'static str {
    match cue {
        Cue::GameWin => "winner.mp3",
        Cue::GameLose => "loser.mp3",
        Cue::RoundWin => "win.wav",
        Cue::RoundLose => "loose.wav",
        Cue::Draw => "draw.mp3",
    }
}

/// Consumer side of the per-tick cue output.
pub trait CueSink {
    /// Fire-and-forget: must not block the caller and must not fail it.
    fn play(&self, cue: Cue);
}

/// Sink for headless runs and tests: drops every cue.
pub struct NullSink;

impl CueSink for NullSink {
    fn play(&self, _cue: Cue) {}
}

/// Dispatches cues to a playback thread which runs an external player
/// command (e.g. `aplay`, `mpv`) against the mapped asset.
pub struct CommandSink {
    tx: Sender<Cue>,
}

impl CommandSink {
    pub fn new(player: String, assets_dir: PathBuf) -> Self {
        let (tx, rx) = mpsc::channel::<Cue>();
        thread::spawn(move || {
            for cue in rx {
                let path = assets_dir.join(asset_name(cue));
                if let Err(e) = play_asset(&player, &path) {
                    eprintln!(
                        "WARNING: sound playback failed for {}: {}",
                        path.display(),
                        e
                    );
                }
            }
        });
        Self { tx }
    }
}

impl CueSink for CommandSink {
    fn play(&self, cue: Cue) {
        // a closed receiver means the playback thread died; nothing to do
        let _ = self.tx.send(cue);
    }
}

fn play_asset(player: &str, path: &Path) -> std::io::Result<()> {
    let status = Command::new(player).arg(path).status()?;
    if !status.success() {
        return Err(std::io::Error::other(format!(
            "player exited with {}",
            status
        )));
    }
    Ok(())
}
