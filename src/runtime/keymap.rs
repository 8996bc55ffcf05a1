use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// What a key press asks the player to do.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Action {
    TogglePlay,
    Stop,
    Next,
    Previous,
    /// Relative seek in seconds.
    SeekBy(f64),
    /// Seek back to the start of the track.
    Restart,
    Quit,
}

pub fn action_for(key: KeyEvent, scrub_seconds: u64) -> Option<Action> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Some(Action::Quit),
            _ => None,
        };
    }

    let scrub = scrub_seconds as f64;
    match key.code {
        KeyCode::Char(' ') | KeyCode::Char('p') => Some(Action::TogglePlay),
        KeyCode::Char('s') => Some(Action::Stop),
        KeyCode::Char('l') | KeyCode::Right => Some(Action::Next),
        KeyCode::Char('h') | KeyCode::Left => Some(Action::Previous),
        KeyCode::Char('L') => Some(Action::SeekBy(scrub)),
        KeyCode::Char('H') => Some(Action::SeekBy(-scrub)),
        KeyCode::Char('0') => Some(Action::Restart),
        KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
        _ => None,
    }
}
