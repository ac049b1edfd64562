use std::rc::Rc;
use std::time::Instant;

use crossterm::execute;
use crossterm::terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode};
use ratatui::{Terminal, backend::CrosstermBackend};

use crate::app::App;
use crate::remote::SpotifyClient;

mod event_loop;
mod logging;
mod schedule;
mod settings;

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let startup = settings::load_settings();
    logging::init(&startup.settings.log);
    log::info!("encore starting, api base {}", startup.settings.remote.api_base);
    startup.report();
    let settings = startup.settings;

    let has_token = settings
        .remote
        .access_token
        .as_deref()
        .is_some_and(|t| !t.trim().is_empty());
    if !has_token {
        eprintln!("encore: no access token configured; set ENCORE__REMOTE__ACCESS_TOKEN");
        log::warn!("starting without an access token, every remote call will fail");
    }

    // One long-lived client shared by the reconciler and the playback facade.
    let client = Rc::new(SpotifyClient::new(&settings.remote));
    let mut app = App::new(client, settings.remote.search_limit);

    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let run_result: Result<(), Box<dyn std::error::Error>> = (|| {
        let mut state = event_loop::EventLoopState::new(&settings.refresh, Instant::now());
        event_loop::run(&mut terminal, &settings, &mut app, &mut state)
    })();

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(e) = &run_result {
        log::error!("event loop exited with error: {e}");
    }
    log::info!("encore exiting");
    run_result
}
