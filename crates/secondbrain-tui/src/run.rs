//! Main run loop for the ward UI
//!
//! Handles terminal initialization, event loop, and cleanup.

use crate::{
    app::App,
    event::{self, AppEvent},
    terminal, ui, Result,
};
use secondbrain_core::{TuiConfig, Ward};
use std::time::Duration;
use tracing::info;

/// Run the interactive UI until the user quits
pub fn run(ward: Ward, config: TuiConfig) -> Result<()> {
    // The guard restores the terminal even if drawing fails or we panic
    let (mut terminal, guard) = terminal::init()?;

    let timeout = Duration::from_millis(config.tick_ms);
    let mut app = App::new(ward, config);
    info!(
        "Ward open: {} patients, {} tasks",
        app.ward.patients().len(),
        app.ward.tasks().len()
    );

    // One event is handled to completion before the next frame is drawn
    loop {
        terminal.draw(|frame| ui::draw(frame, &app))?;

        match event::poll_event(timeout)? {
            AppEvent::Key(key) => app.handle_key(key),
            AppEvent::Resize(_, _) | AppEvent::Tick => {}
        }

        if app.should_quit {
            break;
        }
    }

    info!("Ward closed with {} tasks", app.ward.tasks().len());
    guard.restore()?;

    Ok(())
}
