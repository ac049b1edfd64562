//! UI rendering helpers for the terminal user interface.
//!
//! This module contains functions to render the TUI using `ratatui`.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style, Stylize},
    text::Line,
    widgets::{Block, Borders, Gauge, List, ListItem, Padding, Paragraph, Wrap},
};

use crate::app::{App, Screen};
use crate::config::UiSettings;
use crate::track::Track;

const MAIN_CONTROLS: &[(&str, &str)] = &[
    ("j/k", "up/down"),
    ("space/p", "play/pause"),
    ("l/n", "next"),
    ("h/b", "previous"),
    ("enter", "play selected"),
    ("d", "remove from local queue"),
    ("c", "clear local queue"),
    ("r", "refresh"),
    ("/ or s", "search"),
    ("q", "quit"),
];

const SEARCH_CONTROLS: &[(&str, &str)] = &[
    ("type", "query"),
    ("enter", "search / add selected"),
    ("up/down", "select"),
    ("esc", "back"),
];

fn controls_text(controls: &[(&str, &str)]) -> String {
    controls
        .iter()
        .map(|(k, v)| format!("[{k}] {v}"))
        .collect::<Vec<String>>()
        .join(" | ")
}

fn left_padded(title: &str) -> Block<'_> {
    Block::default()
        .borders(Borders::ALL)
        .title(title)
        .padding(Padding {
            left: 1,
            right: 0,
            top: 0,
            bottom: 0,
        })
}

/// Render the entire UI into the provided `frame`.
///
/// Takes the model mutably so the list widgets can persist their scroll
/// offsets between frames.
pub fn draw<C>(frame: &mut Frame, app: &mut App<C>, ui: &UiSettings) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(1),
            Constraint::Length(3),
            Constraint::Length(3),
        ])
        .split(frame.area());

    let header = Paragraph::new(ui.header_text.as_str())
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" encore ")
                .title_alignment(Alignment::Center),
        );
    frame.render_widget(header, chunks[0]);

    match app.screen {
        Screen::Main => draw_main(frame, app, ui, chunks[1]),
        Screen::Search => draw_search(frame, app, ui, chunks[1]),
    }

    let status = app.notification.as_deref().unwrap_or("");
    let status_par = Paragraph::new(status)
        .block(left_padded(" status "))
        .wrap(Wrap { trim: true });
    frame.render_widget(status_par, chunks[2]);

    let controls = match app.screen {
        Screen::Main => MAIN_CONTROLS,
        Screen::Search => SEARCH_CONTROLS,
    };
    let footer = Paragraph::new(controls_text(controls))
        .block(left_padded(" controls "))
        .wrap(Wrap { trim: true });
    frame.render_widget(footer, chunks[3]);
}

fn draw_main<C>(frame: &mut Frame, app: &mut App<C>, ui: &UiSettings, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(7), Constraint::Min(1)])
        .split(area);

    draw_now_playing(frame, app.now_playing.as_ref(), ui, chunks[0]);

    let items: Vec<ListItem> = app
        .queue
        .iter()
        .map(|t| ListItem::new(t.display_line(&ui.track_separator)))
        .collect();
    let title = format!(" up next ({}) ", app.queue.len());
    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title(title))
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .highlight_symbol("> ");
    frame.render_stateful_widget(list, chunks[1], &mut app.queue_view);
}

fn draw_now_playing(frame: &mut Frame, track: Option<&Track>, ui: &UiSettings, area: Rect) {
    let block = left_padded(" now playing ");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(inner);

    let Some(track) = track else {
        frame.render_widget(Paragraph::new("Nothing playing"), rows[0]);
        return;
    };

    let state = if track.is_playing { "Playing" } else { "Paused" };
    let mut lines = vec![
        Line::from(track.title.clone()).bold(),
        Line::from(track.artist.clone()),
    ];
    if ui.show_album && !track.album.trim().is_empty() {
        lines.push(Line::from(track.album.clone()).italic());
    }
    lines.push(Line::from(format!("{}  [{}]", track.duration_text(), state)));
    frame.render_widget(Paragraph::new(lines), rows[0]);

    let gauge = Gauge::default()
        .gauge_style(Style::default().add_modifier(Modifier::BOLD))
        .ratio(track.progress_ratio().unwrap_or(0.0))
        .label(format!("{}%", track.progress_percent()));
    frame.render_widget(gauge, rows[1]);
}

fn draw_search<C>(frame: &mut Frame, app: &mut App<C>, ui: &UiSettings, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(1)])
        .split(area);

    let input = Paragraph::new(format!("{}_", app.search_query))
        .block(left_padded(" search "));
    frame.render_widget(input, chunks[0]);

    let items: Vec<ListItem> = app
        .search_results
        .iter()
        .map(|t| {
            let mut line = t.display_line(&ui.track_separator);
            if !t.album.is_empty() {
                line.push_str(&format!(" ({})", t.album));
            }
            ListItem::new(line)
        })
        .collect();
    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title(" results "))
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .highlight_symbol("> ");
    frame.render_stateful_widget(list, chunks[1], &mut app.results_view);
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use ratatui::{Terminal, backend::TestBackend};

    use super::*;
    use crate::remote::fake::{FakeRemote, raw_track};

    fn render(app: &mut App<FakeRemote>) -> String {
        let mut terminal = Terminal::new(TestBackend::new(90, 30)).unwrap();
        terminal
            .draw(|f| draw(f, app, &UiSettings::default()))
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn controls_text_joins_pairs() {
        assert_eq!(
            controls_text(&[("a", "b"), ("c", "d")]),
            "[a] b | [c] d"
        );
    }

    #[test]
    fn main_screen_shows_now_playing_and_queue() {
        let fake = Rc::new(FakeRemote::new());
        fake.set_playing(raw_track("t1", "Song A", "Artist A"), true, 30_000);
        *fake.queue.borrow_mut() = vec![raw_track("n1", "Next Up", "Band")];

        let mut app = App::new(Rc::clone(&fake), 10);
        app.refresh_now_playing();
        app.refresh_queue();

        let screen = render(&mut app);
        assert!(screen.contains("Song A"));
        assert!(screen.contains("Artist A"));
        assert!(screen.contains("Next Up - Band"));
        assert!(screen.contains("up next (1)"));
    }

    #[test]
    fn idle_player_renders_placeholder() {
        let fake = Rc::new(FakeRemote::new());
        let mut app = App::new(fake, 10);
        assert!(render(&mut app).contains("Nothing playing"));
    }

    #[test]
    fn search_screen_shows_query_and_results() {
        let fake = Rc::new(FakeRemote::new());
        *fake.search_results.borrow_mut() = vec![raw_track("s1", "Found", "Band")];
        let mut app = App::new(Rc::clone(&fake), 10);
        app.open_search();
        for c in "found".chars() {
            app.push_search_char(c);
        }
        app.submit_search();

        let screen = render(&mut app);
        assert!(screen.contains("found_"));
        assert!(screen.contains("Found - Band"));
    }

    #[test]
    fn redraws_keep_the_queue_scrolled_where_the_user_left_it() {
        let fake = Rc::new(FakeRemote::new());
        *fake.queue.borrow_mut() = (0..30)
            .map(|i| raw_track(&format!("id{i}"), &format!("T{i:02}"), "X"))
            .collect();
        let mut app = App::new(Rc::clone(&fake), 10);
        app.refresh_queue();

        // 60x30 leaves twelve visible queue rows
        let mut terminal = Terminal::new(TestBackend::new(60, 30)).unwrap();
        let settings = UiSettings::default();
        let mut draw_once = |app: &mut App<FakeRemote>| {
            terminal.draw(|f| draw(f, app, &settings)).unwrap();
            terminal
                .backend()
                .buffer()
                .content()
                .iter()
                .map(|c| c.symbol())
                .collect::<String>()
        };

        for _ in 0..15 {
            app.next_queued();
        }
        draw_once(&mut app);
        assert_eq!(app.queue_view.offset(), 4);

        for _ in 0..5 {
            app.prev_queued();
        }
        let before = draw_once(&mut app);
        assert_eq!(app.queue_view.offset(), 4);

        // a now-playing poll marks the model dirty without touching the queue
        fake.set_playing(raw_track("t1", "Song A", "Artist A"), true, 1_000);
        assert!(app.refresh_now_playing());
        assert!(!app.refresh_queue());
        let after = draw_once(&mut app);
        assert_eq!(app.queue_view.offset(), 4);
        assert!(after.contains("T04 - X"));
        assert!(!after.contains("T00 - X"));
        assert!(before.contains("T04 - X"));
    }
}
