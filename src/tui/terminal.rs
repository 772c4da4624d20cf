//! Terminal setup and the main event loop

use std::io::{self, Stdout};

use anyhow::Result;
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use crate::config::paths::PaisaPaths;
use crate::config::settings::Settings;
use crate::store::RecordStore;

use super::app::App;
use super::event::EventHandler;
use super::{handler, views};

pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Initialize the terminal for TUI mode
pub fn init_terminal() -> Result<Tui> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    Ok(Terminal::new(CrosstermBackend::new(stdout))?)
}

/// Restore the terminal to its original state
pub fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)?;
    Ok(())
}

/// Restore the terminal even when the app panics
fn install_panic_hook() {
    let hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = restore_terminal();
        hook(info);
    }));
}

/// Run the TUI until the user quits
pub fn run_tui(store: &RecordStore, settings: &Settings, paths: &PaisaPaths) -> Result<()> {
    let mut app = App::new(store, settings, paths);
    app.reload()?;

    install_panic_hook();
    let mut terminal = init_terminal()?;
    let events = EventHandler::default();

    let result = run_loop(&mut terminal, &mut app, &events);
    restore_terminal()?;
    result
}

fn run_loop(terminal: &mut Tui, app: &mut App, events: &EventHandler) -> Result<()> {
    while !app.should_quit {
        terminal.draw(|frame| views::render(frame, app))?;
        let event = events.next()?;
        handler::handle_event(app, event);
    }
    Ok(())
}
