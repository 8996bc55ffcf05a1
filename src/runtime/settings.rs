use crate::config::Settings;

/// Settings to run with, plus why the configured ones were rejected.
///
/// A missing, unreadable or invalid config never stops startup; the caller
/// reports the problem once logging is up.
pub fn load_settings() -> (Settings, Option<String>) {
    settle(Settings::load())
}

fn settle(loaded: Result<Settings, ::config::ConfigError>) -> (Settings, Option<String>) {
    match loaded {
        Ok(s) => match s.validate() {
            Ok(()) => (s, None),
            Err(msg) => (Settings::default(), Some(format!("invalid config: {msg}"))),
        },
        Err(e) => (
            Settings::default(),
            Some(format!("failed to load config: {e}")),
        ),
    }
}
