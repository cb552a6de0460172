//! Body views: entity lists and the role dashboards.

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph};
use ratatui::Frame;

use crate::dashboard::{
    format_amount, resource_stats, DonorSummary, GovernmentSummary, NgoSummary, RoleDashboard,
    VolunteerSummary,
};
use crate::domain::{
    Alert, Contribution, Crisis, Donation, ResourceNeed, Role, VolunteerOpportunity,
};
use crate::store::ReliefState;
use crate::ui::app::App;
use crate::ui::filter::ListFilter;
use crate::ui::nav::View;
use crate::ui::theme::{
    crisis_status_color, priority_color, resource_status_color, severity_color, ACTIVE_HIGHLIGHT,
    GLOBAL_BORDER, HEADER_TEXT, MUTED_TEXT, STATUS_ERROR, STATUS_OK, STATUS_WARN,
};

const BAR_WIDTH: usize = 10;

pub fn render_body(frame: &mut Frame<'_>, area: Rect, app: &App) {
    let state = app.state();
    let filters = app.filters();
    match app.view() {
        View::Dashboard => render_dashboard(frame, area, state),
        View::Crises => {
            let items = app.visible_crises().map(crisis_line).collect();
            let title = format!("Crises [{}]", filters.crises.label());
            render_list(frame, area, &title, items, app.selection(), "No crises match this filter.");
        }
        View::Resources => {
            let items = app
                .visible_resources()
                .map(|resource| resource_line(resource, state))
                .collect();
            let stats = resource_stats(state);
            let title = format!(
                "Resource Needs [{}] │ urgent {} · fulfilled {} · pending {}",
                filters.resources.label(),
                stats.urgent,
                stats.fulfilled,
                stats.pending
            );
            render_list(
                frame,
                area,
                &title,
                items,
                app.selection(),
                "No resource needs match this filter.",
            );
        }
        View::Opportunities => {
            let items = app.visible_opportunities().map(opportunity_line).collect();
            let title = format!("Volunteer Opportunities [{}]", filters.opportunities.label());
            render_list(
                frame,
                area,
                &title,
                items,
                app.selection(),
                "No volunteer opportunities match this filter.",
            );
        }
        View::Alerts => {
            let role = state.user.role;
            let items = app.visible_alerts().map(|alert| alert_line(alert, role)).collect();
            let title = format!(
                "Alerts [{}] │ {} unread",
                filters.alerts.label(),
                state.unacknowledged_alerts()
            );
            render_list(frame, area, &title, items, app.selection(), "No alerts match this filter.");
        }
        View::Donations => render_donations(frame, area, app),
    }
}

fn panel(title: &str) -> Block<'static> {
    Block::default()
        .title(format!(" {title} "))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(GLOBAL_BORDER))
}

fn render_list(
    frame: &mut Frame<'_>,
    area: Rect,
    title: &str,
    items: Vec<Line<'static>>,
    selection: usize,
    empty: &'static str,
) {
    if items.is_empty() {
        let placeholder = Paragraph::new(Line::styled(empty, Style::default().fg(MUTED_TEXT)))
            .block(panel(title));
        frame.render_widget(placeholder, area);
        return;
    }

    let selected = selection.min(items.len() - 1);
    let list = List::new(items.into_iter().map(ListItem::new))
        .block(panel(title))
        .highlight_style(
            Style::default()
                .bg(ACTIVE_HIGHLIGHT)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("▶ ");
    let mut list_state = ListState::default().with_selected(Some(selected));
    frame.render_stateful_widget(list, area, &mut list_state);
}

fn progress_bar(percent: f64) -> String {
    let filled = ((percent / 100.0) * BAR_WIDTH as f64).round() as usize;
    let filled = filled.min(BAR_WIDTH);
    format!("[{}{}]", "#".repeat(filled), "-".repeat(BAR_WIDTH - filled))
}

fn crisis_line(crisis: &Crisis) -> Line<'static> {
    let text = Style::default().fg(HEADER_TEXT);
    Line::from(vec![
        Span::styled(
            format!("{:<8} ", crisis.severity.label()),
            Style::default().fg(severity_color(crisis.severity)),
        ),
        Span::styled(
            format!("{:<11} ", crisis.status.label()),
            Style::default().fg(crisis_status_color(crisis.status)),
        ),
        Span::styled(crisis.title.clone(), text.add_modifier(Modifier::BOLD)),
        Span::styled(
            format!("  {} · {}", crisis.kind.label(), crisis.location),
            Style::default().fg(MUTED_TEXT),
        ),
        Span::styled(
            format!(
                "  {} {} / {} ",
                progress_bar(crisis.funding_percentage()),
                format_amount(crisis.total_funding),
                format_amount(crisis.funding_goal)
            ),
            text,
        ),
        Span::styled(
            format!("{} affected", crisis.affected_population),
            Style::default().fg(MUTED_TEXT),
        ),
    ])
}

fn resource_line(resource: &ResourceNeed, state: &ReliefState) -> Line<'static> {
    let crisis = state
        .crisis(&resource.crisis_id)
        .map(|crisis| crisis.title.clone())
        .unwrap_or_else(|| "unknown crisis".to_string());
    Line::from(vec![
        Span::styled(
            format!("{:<7} ", resource.priority.label()),
            Style::default().fg(priority_color(resource.priority)),
        ),
        Span::styled(
            format!("{:<20} ", resource.status.label()),
            Style::default().fg(resource_status_color(resource.status)),
        ),
        Span::styled(
            resource.item.clone(),
            Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!(
                "  {} {}/{} {}",
                progress_bar(resource.fulfillment_percentage()),
                resource.fulfilled,
                resource.quantity,
                resource.unit
            ),
            Style::default().fg(HEADER_TEXT),
        ),
        Span::styled(
            format!("  {} · {} · {}", resource.kind.label(), crisis, resource.requested_by),
            Style::default().fg(MUTED_TEXT),
        ),
    ])
}

fn opportunity_line(opportunity: &VolunteerOpportunity) -> Line<'static> {
    let (slots, slots_color) = if opportunity.has_open_slots() {
        ("open", STATUS_OK)
    } else {
        ("full", STATUS_ERROR)
    };
    Line::from(vec![
        Span::styled(format!("{slots:<5} "), Style::default().fg(slots_color)),
        Span::styled(
            opportunity.title.clone(),
            Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!(
                "  {} {}/{} volunteers",
                progress_bar(opportunity.fill_percentage()),
                opportunity.volunteers_registered,
                opportunity.volunteers_needed
            ),
            Style::default().fg(HEADER_TEXT),
        ),
        Span::styled(
            format!(
                "  {} · {} · {} · {}",
                opportunity.kind.label(),
                opportunity.ngo_name,
                opportunity.location,
                opportunity.time_commitment
            ),
            Style::default().fg(MUTED_TEXT),
        ),
    ])
}

/// Alerts aimed at other roles are dimmed and name their audience.
fn alert_line(alert: &Alert, role: Role) -> Line<'static> {
    let (marker, marker_color) = if alert.acknowledged {
        ("read  ", MUTED_TEXT)
    } else {
        ("new   ", STATUS_WARN)
    };
    let title_style = if alert.targets(role) {
        Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(MUTED_TEXT)
    };
    let mut spans = vec![
        Span::styled(marker, Style::default().fg(marker_color)),
        Span::styled(
            format!("{:<10} ", alert.kind.label()),
            Style::default().fg(severity_color(alert.severity)),
        ),
        Span::styled(alert.title.clone(), title_style),
        Span::styled(
            format!("  {}", alert.message),
            Style::default().fg(HEADER_TEXT),
        ),
        Span::styled(
            format!("  {}", alert.timestamp.format("%Y-%m-%d %H:%M")),
            Style::default().fg(MUTED_TEXT),
        ),
    ];
    if let Some(roles) = &alert.target_roles {
        let audience: Vec<&str> = roles.iter().map(|role| role.as_str()).collect();
        spans.push(Span::styled(
            format!(" · for {}", audience.join(", ")),
            Style::default().fg(MUTED_TEXT),
        ));
    }
    Line::from(spans)
}

fn contribution_text(contribution: &Contribution) -> String {
    match contribution {
        Contribution::Monetary { amount, currency } => format!(
            "{} {}",
            format_amount(amount.unwrap_or(0)),
            currency.as_deref().unwrap_or("")
        ),
        Contribution::Goods { items } => {
            let names: Vec<String> = items
                .iter()
                .map(|item| format!("{} {} {}", item.quantity, item.unit, item.name))
                .collect();
            format!("goods: {}", names.join(", "))
        }
        Contribution::Services => "services".to_string(),
    }
}

fn donation_line(donation: &Donation, state: &ReliefState) -> Line<'static> {
    let crisis = state
        .crisis(&donation.crisis_id)
        .map(|crisis| crisis.title.clone())
        .unwrap_or_else(|| "unknown crisis".to_string());
    Line::from(vec![
        Span::styled(
            format!("{:<10} ", donation.status.label()),
            Style::default().fg(MUTED_TEXT),
        ),
        Span::styled(
            contribution_text(&donation.contribution),
            Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!(
                "  → {} · {} · {}",
                crisis,
                donation.display_name(),
                donation.timestamp.format("%Y-%m-%d")
            ),
            Style::default().fg(MUTED_TEXT),
        ),
    ])
}

fn render_donations(frame: &mut Frame<'_>, area: Rect, app: &App) {
    let state = app.state();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(area);

    let crises = state.active_crises().map(crisis_line).collect();
    render_list(
        frame,
        chunks[0],
        "Active Crises",
        crises,
        app.selection(),
        "No active crises to donate to.",
    );

    let mine: Vec<&Donation> = state
        .donations
        .iter()
        .filter(|donation| donation.donor_id == state.user.id)
        .collect();
    let total: u64 = mine
        .iter()
        .filter_map(|donation| donation.contribution.monetary_amount())
        .sum();
    let mut lines = vec![Line::styled(
        format!("Total donated: {}", format_amount(total)),
        Style::default().fg(STATUS_OK).add_modifier(Modifier::BOLD),
    )];
    if mine.is_empty() {
        lines.push(Line::styled(
            "No donations yet.",
            Style::default().fg(MUTED_TEXT),
        ));
    }
    lines.extend(mine.iter().map(|donation| donation_line(donation, state)));
    frame.render_widget(Paragraph::new(lines).block(panel("My Donations")), chunks[1]);
}

fn stat(label: &str, value: String) -> Span<'static> {
    Span::styled(
        format!("  {label}: {value}  "),
        Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
    )
}

fn heading(text: &'static str) -> Line<'static> {
    Line::styled(text, Style::default().fg(MUTED_TEXT).add_modifier(Modifier::UNDERLINED))
}

fn render_dashboard(frame: &mut Frame<'_>, area: Rect, state: &ReliefState) {
    let (title, lines) = match RoleDashboard::for_state(state) {
        RoleDashboard::Ngo(summary) => ("Overview", ngo_lines(&summary)),
        RoleDashboard::Volunteer(summary) => ("My Dashboard", volunteer_lines(&summary)),
        RoleDashboard::Donor(summary) => ("Overview", donor_lines(&summary)),
        RoleDashboard::Government(summary) => ("Command Center", government_lines(&summary)),
    };
    frame.render_widget(Paragraph::new(lines).block(panel(title)), area);
}

fn ngo_lines(summary: &NgoSummary<'_>) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(vec![
            stat("Active crises", summary.active_crises.len().to_string()),
            stat("Urgent resources", summary.urgent_resources.len().to_string()),
            stat("Volunteers", summary.total_volunteers.to_string()),
            stat("Funding", format_amount(summary.total_funding)),
        ]),
        Line::default(),
        heading("Active crises"),
    ];
    lines.extend(summary.active_crises.iter().map(|crisis| crisis_line(crisis)));
    lines.push(Line::default());
    lines.push(heading("Urgent resource needs"));
    lines.extend(summary.urgent_resources.iter().map(|resource| {
        Line::styled(
            format!(
                "  {} ({}/{} {})",
                resource.item, resource.fulfilled, resource.quantity, resource.unit
            ),
            Style::default().fg(STATUS_ERROR),
        )
    }));
    lines
}

fn volunteer_lines(summary: &VolunteerSummary<'_>) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(vec![stat(
            "Available opportunities",
            summary.available_opportunities.len().to_string(),
        )]),
        Line::default(),
        heading("Open opportunities"),
    ];
    lines.extend(
        summary
            .available_opportunities
            .iter()
            .map(|opportunity| opportunity_line(opportunity)),
    );
    lines
}

fn donor_lines(summary: &DonorSummary<'_>) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(vec![
            stat("Total donated", format_amount(summary.total_donated)),
            stat("Confirmed", summary.confirmed_donations.to_string()),
            stat("People helped", summary.people_helped.to_string()),
            stat("Impact score", summary.impact_score.to_string()),
        ]),
        Line::default(),
        heading("Urgent crises"),
    ];
    lines.extend(summary.urgent_crises.iter().map(|crisis| crisis_line(crisis)));
    lines.push(Line::default());
    lines.push(heading("Donated by kind"));
    lines.extend(summary.donated_by_kind.iter().map(|(kind, amount)| {
        Line::styled(
            format!("  {kind}: {}", format_amount(*amount)),
            Style::default().fg(HEADER_TEXT),
        )
    }));
    lines
}

fn government_lines(summary: &GovernmentSummary<'_>) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(vec![
            stat("Active crises", summary.active_crises.len().to_string()),
            stat("Critical", summary.critical_crises.to_string()),
            stat("People affected", summary.total_affected.to_string()),
            stat("Engaged NGOs", summary.engaged_ngos.to_string()),
            stat("Funding", format_amount(summary.total_funding)),
        ]),
        Line::default(),
        heading("Active situations"),
    ];
    lines.extend(summary.active_crises.iter().map(|crisis| crisis_line(crisis)));
    lines.push(Line::default());
    lines.push(heading("Resource needs by category"));
    lines.extend(summary.resources_by_kind.iter().map(|(kind, count)| {
        Line::styled(
            format!("  {}: {count}", kind.label()),
            Style::default().fg(HEADER_TEXT),
        )
    }));
    lines
}
