use super::load::{default_config_path, default_log_path, resolve_config_path};
use super::schema::*;
use std::sync::{Mutex, OnceLock};

static ENV_LOCK: OnceLock<Mutex<()>> = OnceLock::new();

fn env_lock() -> std::sync::MutexGuard<'static, ()> {
    ENV_LOCK
        .get_or_init(|| Mutex::new(()))
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
}

struct EnvGuard {
    key: &'static str,
    old: Option<std::ffi::OsString>,
}

impl EnvGuard {
    fn set(key: &'static str, val: &str) -> Self {
        let old = std::env::var_os(key);
        unsafe {
            std::env::set_var(key, val);
        }
        Self { key, old }
    }

    fn remove(key: &'static str) -> Self {
        let old = std::env::var_os(key);
        unsafe {
            std::env::remove_var(key);
        }
        Self { key, old }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        match self.old.take() {
            Some(v) => unsafe {
                std::env::set_var(self.key, v);
            },
            None => unsafe {
                std::env::remove_var(self.key);
            },
        }
    }
}

#[test]
fn resolve_config_path_prefers_cadenza_config_path() {
    let _lock = env_lock();
    let _g1 = EnvGuard::set("CADENZA_CONFIG_PATH", "/tmp/cadenza-test-config.toml");
    assert_eq!(
        resolve_config_path().unwrap(),
        std::path::PathBuf::from("/tmp/cadenza-test-config.toml")
    );
}

#[test]
fn default_config_path_prefers_xdg_config_home() {
    let _lock = env_lock();
    let _g1 = EnvGuard::set("XDG_CONFIG_HOME", "/tmp/xdg-config-home");
    let _g2 = EnvGuard::set("HOME", "/tmp/home-should-not-win");

    let p = default_config_path().unwrap();
    assert_eq!(
        p,
        std::path::PathBuf::from("/tmp/xdg-config-home")
            .join("cadenza")
            .join("config.toml")
    );
}

#[test]
fn default_config_path_falls_back_to_home_dot_config() {
    let _lock = env_lock();
    let _g1 = EnvGuard::remove("XDG_CONFIG_HOME");
    let _g2 = EnvGuard::set("HOME", "/tmp/home-dir");

    let p = default_config_path().unwrap();
    assert_eq!(
        p,
        std::path::PathBuf::from("/tmp/home-dir")
            .join(".config")
            .join("cadenza")
            .join("config.toml")
    );
}

#[test]
fn default_log_path_falls_back_to_local_state() {
    let _lock = env_lock();
    let _g1 = EnvGuard::remove("XDG_STATE_HOME");
    let _g2 = EnvGuard::set("HOME", "/tmp/home-dir");

    assert_eq!(
        default_log_path().unwrap(),
        std::path::PathBuf::from("/tmp/home-dir/.local/state/cadenza/cadenza.log")
    );
}

#[test]
fn settings_load_from_config_file_with_explicit_tracks() {
    let _lock = env_lock();

    let dir = tempfile::tempdir().unwrap();
    let cfg_path = dir.path().join("config.toml");
    std::fs::write(
        &cfg_path,
        r#"
[audio]
quit_fade_out_ms = 0
volume = 0.5

[ui]
header_text = "hello"
tick_interval_ms = 250
strip_track_numbers = false

[controls]
scrub_seconds = 9

[playback]
autoplay = true
start_index = 2

[library]
directory = "/srv/music"
artist = "Taco"
resource_extension = "flac"

[[library.tracks]]
title = "01 Intro"

[[library.tracks]]
title = "02 Outro"
artist = "Guest"
resource = "outro-final"

[logging]
enabled = false
level = "debug"
"#,
    )
    .unwrap();

    let _g1 = EnvGuard::set("CADENZA_CONFIG_PATH", cfg_path.to_str().unwrap());
    let _g2 = EnvGuard::remove("CADENZA__CONTROLS__SCRUB_SECONDS");

    let s = Settings::load().unwrap();
    assert_eq!(s.audio.quit_fade_out_ms, 0);
    assert_eq!(s.audio.volume, 0.5);
    assert_eq!(s.ui.header_text, "hello");
    assert_eq!(s.ui.tick_interval_ms, 250);
    assert!(!s.ui.strip_track_numbers);
    assert_eq!(s.controls.scrub_seconds, 9);
    assert!(s.playback.autoplay);
    assert_eq!(s.playback.start_index, 2);
    assert_eq!(
        s.library.directory,
        Some(std::path::PathBuf::from("/srv/music"))
    );
    assert_eq!(s.library.artist, "Taco");
    assert_eq!(s.library.resource_extension, "flac");
    assert_eq!(s.library.tracks.len(), 2);
    assert_eq!(s.library.tracks[0].title, "01 Intro");
    assert!(s.library.tracks[0].artist.is_none());
    assert_eq!(s.library.tracks[1].artist.as_deref(), Some("Guest"));
    assert_eq!(s.library.tracks[1].resource.as_deref(), Some("outro-final"));
    assert!(!s.logging.enabled);
    assert_eq!(s.logging.level, "debug");
    assert!(s.validate().is_ok());
}

#[test]
fn settings_env_overrides_config_file() {
    let _lock = env_lock();

    let dir = tempfile::tempdir().unwrap();
    let cfg_path = dir.path().join("config.toml");
    std::fs::write(
        &cfg_path,
        r#"
[controls]
scrub_seconds = 10
"#,
    )
    .unwrap();

    let _g1 = EnvGuard::set("CADENZA_CONFIG_PATH", cfg_path.to_str().unwrap());
    let _g2 = EnvGuard::set("CADENZA__CONTROLS__SCRUB_SECONDS", "3");

    let s = Settings::load().unwrap();
    assert_eq!(s.controls.scrub_seconds, 3);
}

#[test]
fn validate_rejects_out_of_range_values() {
    let mut s = Settings::default();
    assert!(s.validate().is_ok());

    s.ui.tick_interval_ms = 5;
    assert!(s.validate().is_err());
    s.ui.tick_interval_ms = 100;

    s.controls.scrub_seconds = 0;
    assert!(s.validate().is_err());
    s.controls.scrub_seconds = 5;

    s.audio.volume = 1.5;
    assert!(s.validate().is_err());
    s.audio.volume = 1.0;

    s.library.resource_extension = "  ".to_string();
    assert!(s.validate().is_err());
}
