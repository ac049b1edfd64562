mod app;
mod config;
mod playback;
mod queue;
mod remote;
mod runtime;
mod track;
mod ui;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    runtime::run()
}
