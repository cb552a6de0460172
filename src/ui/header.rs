use crate::domain::Role;
use crate::store::ReliefState;
use crate::ui::nav::RoleConfig;
use crate::ui::theme::{
    BRAND, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT, STATUS_ERROR, STATUS_OK,
};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

pub struct Header;

impl Header {
    /// Brand, role switcher, unread alert count and the current user.
    pub fn widget(state: &ReliefState) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);
        let current = RoleConfig::for_role(state.user.role);

        let mut spans = vec![
            Span::styled("  ", text_style),
            Span::styled(
                "ResQLink",
                Style::default().fg(BRAND).add_modifier(Modifier::BOLD),
            ),
            Span::styled("  │  ", separator_style),
        ];

        for (idx, role) in Role::ALL.iter().enumerate() {
            let style = if *role == state.user.role {
                Style::default()
                    .fg(Color::White)
                    .bg(RoleConfig::for_role(*role).color)
                    .add_modifier(Modifier::BOLD)
            } else {
                text_style
            };
            spans.push(Span::styled(format!(" {} {} ", idx + 1, role), style));
        }

        let unread = state.unacknowledged_alerts();
        let alert_style = if unread > 0 {
            Style::default().fg(STATUS_ERROR).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(STATUS_OK)
        };
        spans.push(Span::styled("  │  ", separator_style));
        spans.push(Span::styled(format!("alerts: {unread}"), alert_style));
        spans.push(Span::styled("  │  ", separator_style));
        spans.push(Span::styled(state.user.name.clone(), text_style));
        spans.push(Span::styled(
            format!(" ({})", current.label),
            Style::default().fg(current.color),
        ));

        Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
