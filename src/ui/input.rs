use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::domain::Role;
use crate::ui::app::App;
use crate::ui::nav::View;

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'c') {
        app.request_quit();
        return;
    }

    match key.code {
        KeyCode::Esc if app.view() == View::Alerts => app.toggle_alerts(),
        KeyCode::Char('q') | KeyCode::Esc => app.request_quit(),
        KeyCode::Char(ch @ '1'..='4') => {
            let index = ch.to_digit(10).unwrap_or(1) as usize - 1;
            app.switch_role(Role::ALL[index]);
        }
        KeyCode::Tab => app.cycle_section(1),
        KeyCode::BackTab => app.cycle_section(-1),
        KeyCode::Up | KeyCode::Char('k') => app.move_selection(-1),
        KeyCode::Down | KeyCode::Char('j') => app.move_selection(1),
        KeyCode::Char('f') => app.fulfill_selected(),
        KeyCode::Char('a') => app.apply_selected(),
        KeyCode::Char('d') => app.donate_selected(),
        KeyCode::Char('s') => app.cycle_selected_status(),
        KeyCode::Char('t') => app.cycle_filter(),
        KeyCode::Char('n') => app.toggle_alerts(),
        KeyCode::Char('r') => app.acknowledge_selected(),
        KeyCode::Char('m') => app.acknowledge_alerts(),
        _ => {}
    }
}

fn is_ctrl_char(key: KeyEvent, ch: char) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL)
        && matches!(key.code, KeyCode::Char(c) if c.eq_ignore_ascii_case(&ch))
}
