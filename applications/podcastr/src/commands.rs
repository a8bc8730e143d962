//! Keyboard commands accepted while the player runs.

use podcastr_playback::{MediaElement, PlayerSurface};

/// A line typed by the listener
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerCommand {
    TogglePlay,
    Next,
    Previous,
    ToggleShuffle,
    ToggleLoop,
    Seek(u64),
    Quit,
}

impl PlayerCommand {
    /// Parse one input line
    ///
    /// Accepts single letters (`p`, `n`, `b`, `s`, `l`, `q`) or the full
    /// word, and `seek <seconds>` / `seek <mm:ss>`. An empty line toggles
    /// play/pause.
    pub fn parse(line: &str) -> Option<Self> {
        let line = line.trim().to_ascii_lowercase();
        let mut words = line.split_whitespace();

        let command = match words.next() {
            None | Some("p" | "play" | "pause") => Self::TogglePlay,
            Some("n" | "next") => Self::Next,
            Some("b" | "prev" | "previous") => Self::Previous,
            Some("s" | "shuffle") => Self::ToggleShuffle,
            Some("l" | "loop" | "repeat") => Self::ToggleLoop,
            Some("q" | "quit" | "exit") => Self::Quit,
            Some("seek") => Self::Seek(parse_position(words.next()?)?),
            Some(_) => return None,
        };

        Some(command)
    }

    /// Apply to the surface; returns `false` for [`PlayerCommand::Quit`]
    pub fn apply<M: MediaElement>(self, surface: &mut PlayerSurface<M>) -> bool {
        match self {
            Self::TogglePlay => surface.toggle_play(),
            Self::Next => surface.play_next(),
            Self::Previous => surface.play_previous(),
            Self::ToggleShuffle => surface.toggle_shuffle(),
            Self::ToggleLoop => surface.toggle_loop(),
            Self::Seek(secs) => surface.handle_seek(secs),
            Self::Quit => return false,
        }
        true
    }
}

/// `90`, `1:30` or `01:01:30` to seconds
fn parse_position(text: &str) -> Option<u64> {
    text.split(':')
        .try_fold((0u64, 0usize), |(total, parts), part| {
            let value: u64 = part.parse().ok()?;
            Some((total.checked_mul(60)?.checked_add(value)?, parts + 1))
        })
        .filter(|&(_, parts)| parts <= 3)
        .map(|(total, _)| total)
}
