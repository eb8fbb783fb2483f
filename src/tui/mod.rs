// Module declarations
pub mod widgets;

pub mod action;
pub mod app;
pub mod error;
pub mod events;
pub mod outside_click;
pub mod pickers;
pub mod theme;
pub mod viewport;

#[cfg(test)]
pub mod testing;


pub use action::{Action, PickerSlot};
pub use app::App;
pub use error::{TuiError, TuiResult};
pub use events::event_to_action;
pub use outside_click::{ListenerId, OutsideClickListeners, OutsideClickSubscription};
pub use pickers::{
    DatePickerProps, DateViewMode, MonthPickerMode, MonthPickerProps, Picker, PickerContext,
    ThaiDatePicker, ThaiMonthPicker,
};
pub use theme::{Accent, Theme};
pub use viewport::{FixedViewport, TerminalViewport, Viewport};

use std::io;
use std::time::Duration;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    Terminal,
};
use crate::calendar::SystemClock;
use crate::config::Config;

/// Main entry point for TUI mode
pub fn run(config: Config) -> TuiResult<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(&config, Box::new(TerminalViewport), Box::new(SystemClock));
    let result = event_loop(&mut terminal, &mut app);

    // Restore terminal even when the loop failed
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> TuiResult<()> {
    loop {
        // Apply committed values before drawing so triggers show them
        let actions_processed = app.process_actions();
        if actions_processed > 0 {
            tracing::debug!("LOOP: Processed {} actions", actions_processed);
        }
        if app.should_quit() {
            tracing::debug!("ACTION: Quitting application");
            return Ok(());
        }

        terminal.draw(|f| {
            let area = f.area();
            app.render(area, f.buffer_mut());
        })?;

        if event::poll(Duration::from_millis(100))? {
            let event = event::read()?;
            if let Some(action) = event_to_action(&event) {
                app.dispatch(action);
            }
        }
    }
}
