use std::env;
use std::path::PathBuf;

use crossterm::execute;
use crossterm::terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode};
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing::{info, warn};

use crate::app::App;
use crate::audio::{ResourceResolver, RodioOutput};
use crate::library::build_catalog;
use crate::logging;
use crate::playback::PlaybackController;

mod event_loop;
mod keymap;
mod settings;
mod startup;

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let (settings, config_problem) = settings::load_settings();

    match logging::init(&settings.logging) {
        Ok(Some(path)) => info!(log = %path.display(), "cadenza starting"),
        Ok(None) => {}
        Err(e) => eprintln!("cadenza: logging disabled: {e}"),
    }
    if let Some(problem) = &config_problem {
        eprintln!("cadenza: {problem}, using defaults");
        warn!(%problem, "using default settings");
    }

    let dir_arg = env::args().nth(1).map(PathBuf::from);
    let catalog = build_catalog(&settings.library, dir_arg.as_deref())?;

    let resolver = ResourceResolver::new(&catalog.root, &settings.library.resource_extension);
    let output = RodioOutput::open_default(resolver, settings.audio.volume)?;

    let mut controller = PlaybackController::new(catalog.playlist, output);
    let events = controller.subscribe();

    let mut app = App::new(
        controller.playlist().tracks().to_vec(),
        controller.session().clone(),
    );
    app.set_current_dir(catalog.root.display().to_string());

    startup::load_initial_track(&mut controller, &settings.playback);

    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let run_result =
        event_loop::run(&mut terminal, &settings, &mut app, &mut controller, &events);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    info!("cadenza exiting");
    run_result
}
