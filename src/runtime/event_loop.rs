use std::sync::mpsc::Receiver;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyEventKind};
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing::debug;

use crate::app::App;
use crate::audio::AudioOutput;
use crate::config;
use crate::playback::{PlaybackController, PlaybackEvent};
use crate::ui;

use super::keymap::{Action, action_for};

/// Main terminal event loop: schedules position ticks, mirrors controller
/// events into `app`, draws, and dispatches key presses. Returns `Ok(())`
/// when the user quits.
pub fn run<O: AudioOutput>(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    settings: &config::Settings,
    app: &mut App,
    controller: &mut PlaybackController<O>,
    events: &Receiver<PlaybackEvent>,
) -> Result<(), Box<dyn std::error::Error>> {
    let tick_every = Duration::from_millis(settings.ui.tick_interval_ms);
    let mut next_tick = Instant::now();

    loop {
        // The only recurring callback; it runs here and nowhere else.
        let now = Instant::now();
        if now >= next_tick {
            controller.tick();
            next_tick = now + tick_every;
        }

        for event in events.try_iter() {
            app.apply(event);
        }

        terminal.draw(|f| ui::draw(f, app, &settings.ui, &settings.controls))?;

        let timeout = next_tick.saturating_duration_since(Instant::now());
        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                if let Some(action) = action_for(key, settings.controls.scrub_seconds) {
                    if handle_action(action, settings, controller) {
                        break;
                    }
                }
            }
        }
    }

    Ok(())
}

/// Apply `action` to the controller. Returns `true` when the loop should exit.
///
/// Navigation failures are already published as `LoadFailed` events, so they
/// are only logged here.
fn handle_action<O: AudioOutput>(
    action: Action,
    settings: &config::Settings,
    controller: &mut PlaybackController<O>,
) -> bool {
    match action {
        Action::TogglePlay => controller.toggle(),
        Action::Stop => controller.stop(),
        Action::Next => {
            if let Err(e) = controller.next() {
                debug!(error = %e, "next failed");
            }
        }
        Action::Previous => {
            if let Err(e) = controller.previous() {
                debug!(error = %e, "previous failed");
            }
        }
        Action::SeekBy(delta) => controller.seek_by(delta),
        Action::Restart => controller.seek(0.0),
        Action::Quit => {
            controller.shutdown(Duration::from_millis(settings.audio.quit_fade_out_ms));
            return true;
        }
    }
    false
}
