pub mod app;
pub mod backdrop;
pub mod contact;
pub mod events;
pub mod footer;
pub mod gallery;
pub mod header;
pub mod layout;
pub mod mvi;
pub mod nav;
pub mod render;
pub mod terminal;
pub mod theme;
pub mod typing;
pub mod views;

use std::io;
use std::time::Duration;

use crate::config::{ConfigStore, ThemeMode};
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::terminal::setup_terminal;

/// Animation smoothness depends on this; transitions are 600 ms, so a
/// 50 ms tick gives them a dozen frames.
const TICK_RATE: Duration = Duration::from_millis(50);

pub fn run(config: ConfigStore, theme_override: Option<ThemeMode>) -> io::Result<()> {
    let (mut terminal, guard) = setup_terminal()?;
    let mut app = App::new(config, theme_override);
    let events = EventHandler::new(TICK_RATE);

    loop {
        terminal.draw(|frame| render::draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(TICK_RATE) {
            Ok(AppEvent::Key(key)) => app.on_key(key),
            Ok(AppEvent::Mouse(mouse)) => app.on_mouse(mouse),
            Ok(AppEvent::Tick) => app.on_tick(),
            Ok(AppEvent::Resize(cols, rows)) => app.on_resize(cols, rows),
            Err(std::sync::mpsc::RecvTimeoutError::Timeout) => {}
            Err(std::sync::mpsc::RecvTimeoutError::Disconnected) => break,
        }
    }

    drop(guard);
    Ok(())
}
