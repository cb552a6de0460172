use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_session::TerminalSession;
use std::io;
use std::sync::mpsc::RecvTimeoutError;
use std::time::Duration;

/// Run the dashboard until the user quits. The terminal is restored on return.
pub fn run(app: &mut App, tick_rate: Duration) -> io::Result<()> {
    let mut session = TerminalSession::enter()?;
    let events = EventHandler::new(tick_rate);
    tracing::info!(role = %app.state().user.role, "Dashboard started");

    loop {
        session.terminal().draw(|frame| draw(frame, app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => handle_key(app, key),
            // Redraw only; the next loop iteration picks up the new size.
            Ok(AppEvent::Tick) | Ok(AppEvent::Resize(..)) => {}
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    tracing::info!("Dashboard closed");
    Ok(())
}
