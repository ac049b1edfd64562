//! Application module: exposes the app model used by the TUI and runtime.
//!
//! The `App` model lives in `app::model` and holds the displayed
//! now-playing track, the displayed queue, the search screen and the
//! redraw flag.

mod model;

pub use model::*;
