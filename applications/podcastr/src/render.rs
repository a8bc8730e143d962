//! Plain-text rendering of the views.

use crate::views::{EpisodeDetailView, EpisodeRow, HomeView};
use podcastr_playback::{ControlState, PlayerView};
use std::fmt::Write;

fn row_line(out: &mut String, row: &EpisodeRow) {
    let _ = writeln!(
        out,
        "  [{:>2}] {}\n       {} | {} | {}",
        row.play_index, row.title, row.members, row.published, row.duration
    );
}

/// Home page: latest releases, then everything else
pub fn render_home(view: &HomeView) -> String {
    let mut out = String::new();

    if view.is_empty() {
        out.push_str("No episodes yet.\n");
        return out;
    }

    out.push_str("Latest releases\n");
    for row in view.latest() {
        row_line(&mut out, row);
    }

    if !view.all().is_empty() {
        out.push_str("\nAll episodes\n");
        for row in view.all() {
            row_line(&mut out, row);
        }
    }

    out
}

/// Episode page
pub fn render_episode(view: &EpisodeDetailView) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", view.title);
    let _ = writeln!(out, "{}", view.members);
    let _ = writeln!(out, "{} | {}", view.published, view.duration);
    out.push('\n');
    let _ = writeln!(out, "{}", view.description_text());
    out
}

fn button(label: &str, state: ControlState) -> String {
    match (state.enabled, state.active) {
        (false, _) => format!("({})", label),
        (true, true) => format!("[{}]", label.to_uppercase()),
        (true, false) => format!("[{}]", label),
    }
}

/// One-line player panel
pub fn render_player(view: &PlayerView) -> String {
    let Some(now_playing) = &view.now_playing else {
        return "Select an episode to listen to".to_string();
    };

    let controls = &view.controls;
    let play_label = if controls.play_pause.active {
        "pause"
    } else {
        "play"
    };

    format!(
        "{} - {}  {} / {}  {} {} {} {} {}",
        now_playing.title,
        now_playing.members,
        view.elapsed,
        view.total,
        button("shuffle", controls.shuffle),
        button("prev", controls.previous),
        button(play_label, controls.play_pause),
        button("next", controls.next),
        button("loop", controls.repeat),
    )
}
