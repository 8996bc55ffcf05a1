//! UI rendering helpers for the terminal user interface.
//!
//! This module renders the single player screen using `ratatui`: now-playing
//! info, the scrubber with its time labels, transport controls and the
//! playlist.

use std::time::Duration;

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, List, ListItem, ListState, Padding, Paragraph, Wrap},
};

use crate::app::App;
use crate::config::{ControlsSettings, UiSettings};
use crate::library::display_title;
use crate::playback::{PlaybackSession, PlaybackStatus};

const CONTROLS: [(&str, &str); 6] = [
    ("space/p", "play/pause"),
    ("s", "stop"),
    ("h/l", "prev/next song"),
    ("H/L", "scrub"),
    ("0", "restart"),
    ("q", "quit"),
];

/// Render the controls help text, incorporating scrub seconds.
fn controls_text(scrub_seconds: u64) -> String {
    CONTROLS
        .iter()
        .map(|(k, v)| {
            if *k == "H/L" {
                format!("[H/L] scrub -/+{}s", scrub_seconds)
            } else {
                format!("[{}] {}", k, v)
            }
        })
        .collect::<Vec<String>>()
        .join(" | ")
}

/// Format a `Duration` as `MM:SS`, truncating partial seconds.
pub fn format_mmss(d: Duration) -> String {
    let secs = d.as_secs();
    format!("{:02}:{:02}", secs / 60, secs % 60)
}

/// Elapsed and total labels shown under the scrubber.
fn time_labels(session: &PlaybackSession) -> (String, String) {
    (format_mmss(session.position), format_mmss(session.duration))
}

fn status_text(status: PlaybackStatus) -> &'static str {
    match status {
        PlaybackStatus::Stopped => "Stopped",
        PlaybackStatus::Playing => "Playing",
        PlaybackStatus::Paused => "Paused",
    }
}

/// The play/pause button shows what pressing it would do.
fn transport_line(status: PlaybackStatus) -> Line<'static> {
    let toggle = if status == PlaybackStatus::Playing {
        "⏸"
    } else {
        "▶"
    };
    Line::from(vec![
        Span::raw("⏮  [h]"),
        Span::raw("        "),
        Span::styled(
            format!("{toggle}  [space]"),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::raw("        "),
        Span::raw("[l]  ⏭"),
    ])
}

/// Render the entire UI into the provided `frame` using `app` state and settings.
pub fn draw(
    frame: &mut Frame,
    app: &App,
    ui_settings: &UiSettings,
    controls_settings: &ControlsSettings,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(4),
            Constraint::Length(4),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Min(1),
            Constraint::Length(3),
        ])
        .split(frame.area());

    // Header
    let header = Paragraph::new(ui_settings.header_text.as_str())
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" cadenza ")
                .title_alignment(Alignment::Center),
        );
    frame.render_widget(header, chunks[0]);

    // Now playing
    let session = &app.session;
    let title = display_title(&session.track.title, ui_settings.strip_track_numbers);
    let now_playing = Paragraph::new(vec![
        Line::from(title.to_string()).bold(),
        Line::from(session.track.artist.clone()).fg(Color::Gray),
    ])
    .block(
        Block::bordered()
            .padding(Padding::horizontal(1))
            .title(format!(" {} ", status_text(session.status))),
    )
    .wrap(Wrap { trim: true });
    frame.render_widget(now_playing, chunks[1]);

    // Scrubber with elapsed/total labels underneath
    let scrub_block = Block::bordered().padding(Padding::horizontal(1));
    let scrub_inner = scrub_block.inner(chunks[2]);
    frame.render_widget(scrub_block, chunks[2]);
    let scrub_rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(1)])
        .split(scrub_inner);

    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(Color::Red))
        .use_unicode(true)
        .ratio(session.progress())
        .label("");
    frame.render_widget(gauge, scrub_rows[0]);

    let (elapsed, total) = time_labels(session);
    frame.render_widget(Paragraph::new(elapsed), scrub_rows[1]);
    frame.render_widget(
        Paragraph::new(total).alignment(Alignment::Right),
        scrub_rows[1],
    );

    // Transport
    let transport = Paragraph::new(transport_line(session.status))
        .alignment(Alignment::Center)
        .block(Block::bordered());
    frame.render_widget(transport, chunks[3]);

    // Notification
    if let Some(note) = &app.notification {
        let note = Paragraph::new(note.as_str()).fg(Color::Yellow);
        frame.render_widget(note, chunks[4]);
    }

    // Playlist
    let items: Vec<ListItem> = app
        .tracks
        .iter()
        .enumerate()
        .map(|(i, track)| {
            let shown = display_title(&track.title, ui_settings.strip_track_numbers);
            if app.is_current(i) {
                ListItem::new(shown.to_string()).add_modifier(Modifier::BOLD)
            } else {
                ListItem::new(shown.to_string())
            }
        })
        .collect();

    let list_title = match &app.current_dir {
        Some(dir) => format!(" playlist • {} ", dir),
        None => " playlist ".to_string(),
    };
    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title(list_title))
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .highlight_symbol("> ");
    let mut state = ListState::default();
    if !app.tracks.is_empty() {
        state.select(Some(session.index));
    }
    frame.render_stateful_widget(list, chunks[5], &mut state);

    let footer = Paragraph::new(controls_text(controls_settings.scrub_seconds))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" controls ")
                .padding(Padding::horizontal(1)),
        )
        .wrap(Wrap { trim: true });
    frame.render_widget(footer, chunks[6]);
}
