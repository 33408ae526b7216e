//! TUI module for interactive menu editing.

pub mod app;
pub mod event;
pub mod ui;

use std::io::{self, Stdout};

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};

pub use app::App;

use crate::config::Config;
use crate::error::Result;

/// Run the editor until the user quits.
pub fn run(config: &Config) -> Result<()> {
    install_panic_hook();
    let mut terminal = setup_terminal()?;

    let mut app = App::new(config);
    let result = run_app(&mut terminal, &mut app);

    restore_terminal()?;
    terminal.show_cursor()?;

    tracing::info!(
        nodes = app.editor.tree().len(),
        created = app.editor.nodes_created(),
        "Editor closed"
    );
    result
}

/// Draw/input loop, independent of the concrete backend.
pub fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    let tick_rate = app.config.tick_rate();

    while !app.should_quit {
        terminal.draw(|frame| ui::render(app, frame))?;
        event::handle_events(app, tick_rate)?;
    }

    Ok(())
}

fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    Ok(Terminal::new(CrosstermBackend::new(stdout))?)
}

fn restore_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)
}

/// Leave the alternate screen before the panic message is printed.
fn install_panic_hook() {
    let original = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = restore_terminal();
        original(info);
    }));
}
