//! Raw-mode, alternate-screen terminal owned by the dashboard while it runs.

use crossterm::cursor::{Hide, Show};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use std::io::{self, Stdout};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Once;

/// Set while raw mode is on; cleared by whichever of drop or panic restores first.
static RAW_MODE: AtomicBool = AtomicBool::new(false);
static PANIC_HOOK: Once = Once::new();

pub type DashboardTerminal = Terminal<CrosstermBackend<Stdout>>;

/// The terminal is handed back to the shell on drop, and on panic before the
/// panic message is printed.
pub struct TerminalSession {
    terminal: DashboardTerminal,
}

impl TerminalSession {
    pub fn enter() -> io::Result<Self> {
        install_panic_hook();
        enable_raw_mode()?;
        RAW_MODE.store(true, Ordering::SeqCst);

        match open_alternate_screen() {
            Ok(terminal) => Ok(Self { terminal }),
            Err(err) => {
                restore();
                Err(err)
            }
        }
    }

    pub fn terminal(&mut self) -> &mut DashboardTerminal {
        &mut self.terminal
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        restore();
    }
}

fn open_alternate_screen() -> io::Result<DashboardTerminal> {
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    stdout.execute(Hide)?;
    Terminal::new(CrosstermBackend::new(stdout))
}

fn restore() {
    if !RAW_MODE.swap(false, Ordering::SeqCst) {
        return;
    }
    let _ = disable_raw_mode();
    let mut stdout = io::stdout();
    let _ = stdout.execute(LeaveAlternateScreen);
    let _ = stdout.execute(Show);
}

fn install_panic_hook() {
    PANIC_HOOK.call_once(|| {
        let default_hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            restore();
            default_hook(info);
        }));
    });
}
