use crate::ui::nav::View;
use crate::ui::theme::{GLOBAL_BORDER, HEADER_TEXT, STATUS_WARN};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub struct Footer;

impl Footer {
    fn hints(view: View) -> &'static str {
        match view {
            View::Crises => " ↑↓: Select │ t: Filter │ s: Cycle status │ Tab: Next │ 1-4: Role │ n: Alerts │ q: Quit",
            View::Resources => " ↑↓: Select │ t: Filter │ f: Contribute │ Tab: Next │ 1-4: Role │ n: Alerts │ q: Quit",
            View::Opportunities => " ↑↓: Select │ t: Filter │ a: Apply │ Tab: Next │ 1-4: Role │ n: Alerts │ q: Quit",
            View::Donations => " ↑↓: Select │ d: Quick donate │ Tab: Next │ 1-4: Role │ n: Alerts │ q: Quit",
            View::Alerts => " ↑↓: Select │ t: Filter │ r: Mark read │ m: Mark all read │ n/Esc: Close │ q: Quit",
            View::Dashboard => " Tab: Next section │ 1-4: Switch role │ n: Alerts │ m: Read alerts │ q: Quit",
        }
    }

    /// Key hints on the left, the last action notice or version on the right.
    pub fn widget(view: View, notice: Option<&str>, area: Rect) -> Paragraph<'static> {
        let hints = Self::hints(view);
        let right = match notice {
            Some(notice) => format!("{notice} "),
            None => format!("v{} ", VERSION),
        };

        // Calculate padding using char count, not byte count (for Unicode)
        let hints_width = hints.chars().count();
        let right_width = right.chars().count();
        let content_width = area.width.saturating_sub(2) as usize; // minus borders
        let padding = content_width
            .saturating_sub(hints_width)
            .saturating_sub(right_width);

        let text_style = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM);
        let right_style = if notice.is_some() {
            Style::default().fg(STATUS_WARN)
        } else {
            text_style
        };

        let line = Line::from(vec![
            Span::styled(hints, text_style),
            Span::styled(" ".repeat(padding), text_style),
            Span::styled(right, right_style),
        ]);

        Paragraph::new(line)
            .alignment(Alignment::Left)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(GLOBAL_BORDER)),
            )
    }
}
