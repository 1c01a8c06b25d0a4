//! Sequential playback of synthesized audio files.
//!
//! Shells out to the first command-line player found on PATH. Playback is
//! strictly sequential in the order the files are given; playing chunk
//! files out of order would scramble the audio narrative.
//!
//! Player preference: ffplay, then mpv, then afplay (macOS). A missing
//! player is a logged degradation, not an error; the files stay on disk.

use std::io;
use std::path::{Path, PathBuf};
use std::process::Command;

use tracing::{debug, info, warn};

/// Players probed in order of preference.
const PLAYERS: [&str; 3] = ["ffplay", "mpv", "afplay"];

/// Locate a binary on PATH.
fn find_in_path(bin: &str) -> Option<PathBuf> {
    let paths = std::env::var_os("PATH")?;
    for dir in std::env::split_paths(&paths) {
        let candidate = dir.join(bin);
        if candidate.is_file() {
            return Some(candidate);
        }
    }
    None
}

/// First available player on PATH, honoring an optional preference.
pub fn select_player(preference: Option<&str>) -> Option<PathBuf> {
    if let Some(name) = preference
        && let Some(path) = find_in_path(name)
    {
        return Some(path);
    }
    PLAYERS.iter().find_map(|name| find_in_path(name))
}

/// Play one file with the given player binary, blocking until it exits.
fn play_file_with(player: &Path, file: &Path) -> io::Result<()> {
    let name = player.file_name().and_then(|s| s.to_str()).unwrap_or("");
    let mut cmd = Command::new(player);
    match name {
        "ffplay" => {
            cmd.arg("-autoexit").arg("-nodisp").arg("-loglevel").arg("error");
        }
        "mpv" => {
            cmd.arg("--no-video").arg("--really-quiet");
        }
        _ => {}
    }
    debug!(player = %player.display(), file = %file.display(), "Playing audio file");
    let status = cmd.arg(file).status()?;
    if !status.success() {
        return Err(io::Error::other(format!(
            "{name} exited with {status} for {}",
            file.display()
        )));
    }
    Ok(())
}

/// Play `files` sequentially with the first available player.
///
/// Returns the number of files played. With no player on PATH nothing is
/// played and a warning is logged.
pub fn play_files<P: AsRef<Path>>(files: &[P], preference: Option<&str>) -> io::Result<usize> {
    if files.is_empty() {
        return Ok(0);
    }

    let Some(player) = select_player(preference) else {
        warn!("No audio player found on PATH; files kept on disk");
        return Ok(0);
    };

    info!(player = %player.display(), files = files.len(), "Starting playback");
    for file in files {
        play_file_with(&player, file.as_ref())?;
    }
    Ok(files.len())
}
