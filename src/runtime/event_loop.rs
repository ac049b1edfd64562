use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{Terminal, backend::CrosstermBackend};

use crate::app::{App, Screen};
use crate::config;
use crate::remote::RemoteMusicClient;
use crate::runtime::schedule::Ticker;
use crate::ui;

/// State tracked by the runtime event loop across iterations.
pub struct EventLoopState {
    /// Drives "refresh current track".
    pub now_playing: Ticker,
    /// Drives "refresh queue"; independent of `now_playing`.
    pub queue: Ticker,
    input_poll: Duration,
}

impl EventLoopState {
    /// Both tickers start due so the first iteration polls the remote.
    pub fn new(settings: &config::RefreshSettings, now: Instant) -> Self {
        Self {
            now_playing: Ticker::new(Duration::from_millis(settings.now_playing_ms), now),
            queue: Ticker::new(Duration::from_millis(settings.queue_ms), now),
            input_poll: Duration::from_millis(settings.input_poll_ms.max(1)),
        }
    }

    /// How long the loop may block on input before a ticker is due.
    fn poll_timeout(&self, now: Instant) -> Duration {
        self.input_poll
            .min(self.now_playing.until_due(now))
            .min(self.queue.until_due(now))
    }
}

/// Main terminal event loop: runs the refresh timers, redraws when the model
/// changed and dispatches key presses. Every callback runs to completion
/// before the next one starts. Returns `Ok(())` when the user quits.
pub fn run<C: RemoteMusicClient>(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    settings: &config::Settings,
    app: &mut App<C>,
    state: &mut EventLoopState,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        let now = Instant::now();
        if state.now_playing.fire(now) {
            app.refresh_now_playing();
        }
        if state.queue.fire(now) {
            app.refresh_queue();
        }

        if app.dirty {
            terminal.draw(|f| ui::draw(f, app, &settings.ui))?;
            app.clear_dirty();
        }

        if event::poll(state.poll_timeout(Instant::now()))? {
            match event::read()? {
                Event::Key(key) => {
                    if key.kind != KeyEventKind::Press {
                        continue;
                    }
                    if handle_key_event(key, app, state) {
                        break;
                    }
                }
                Event::Resize(_, _) => app.mark_dirty(),
                _ => {}
            }
        }
    }

    Ok(())
}

/// Dispatch a key press. Returns true when the app should exit.
fn handle_key_event<C: RemoteMusicClient>(
    key: KeyEvent,
    app: &mut App<C>,
    state: &mut EventLoopState,
) -> bool {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return true;
    }

    if app.screen == Screen::Search {
        match key.code {
            KeyCode::Esc => app.close_search(),
            KeyCode::Enter => app.activate_search(),
            KeyCode::Backspace => app.pop_search_char(),
            KeyCode::Down => app.next_result(),
            KeyCode::Up => app.prev_result(),
            KeyCode::Char('j') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                app.next_result()
            }
            KeyCode::Char('k') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                app.prev_result()
            }
            KeyCode::Char(c) => {
                if !c.is_control() {
                    app.push_search_char(c);
                }
            }
            _ => {}
        }
        return false;
    }

    match key.code {
        KeyCode::Char('q') => return true,
        KeyCode::Char('/') | KeyCode::Char('s') => app.open_search(),
        KeyCode::Char('j') | KeyCode::Down => app.next_queued(),
        KeyCode::Char('k') | KeyCode::Up => app.prev_queued(),
        KeyCode::Char(' ') | KeyCode::Char('p') => {
            app.toggle_play_pause();
        }
        KeyCode::Char('l') | KeyCode::Char('n') => {
            app.next_track();
        }
        KeyCode::Char('h') | KeyCode::Char('b') => {
            app.previous_track();
        }
        KeyCode::Enter => {
            app.play_selected_queued();
        }
        KeyCode::Char('d') => {
            app.remove_selected_queued();
        }
        KeyCode::Char('c') => app.clear_local_queue(),
        KeyCode::Char('r') => {
            let now = Instant::now();
            state.now_playing.force(now);
            state.queue.force(now);
        }
        _ => {}
    }

    false
}
