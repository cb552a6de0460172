//! Role-keyed navigation: which sections each role sees and how it is colored.

use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::domain::{Role, Section};
use crate::ui::theme::{
    DONOR_PURPLE, GOVERNMENT_RED, HEADER_SEPARATOR, HEADER_TEXT, NGO_BLUE, VOLUNTEER_GREEN,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub section: Section,
    pub label: &'static str,
}

const fn item(section: Section, label: &'static str) -> NavItem {
    NavItem { section, label }
}

const NGO_NAV: &[NavItem] = &[
    item(Section::Dashboard, "Overview"),
    item(Section::Crises, "Active Crises"),
    item(Section::Resources, "Resources"),
    item(Section::Volunteers, "Volunteers"),
    item(Section::Reports, "Reports"),
    item(Section::Tasks, "Tasks"),
    item(Section::Communications, "Communications"),
    item(Section::Analytics, "Analytics"),
];

const VOLUNTEER_NAV: &[NavItem] = &[
    item(Section::Dashboard, "My Dashboard"),
    item(Section::Opportunities, "Opportunities"),
    item(Section::MyActivities, "My Activities"),
    item(Section::Training, "Training"),
    item(Section::Tasks, "My Tasks"),
    item(Section::Communications, "Communications"),
];

const DONOR_NAV: &[NavItem] = &[
    item(Section::Dashboard, "Overview"),
    item(Section::Donate, "Donate Now"),
    item(Section::MyDonations, "My Donations"),
    item(Section::Impact, "Impact Reports"),
    item(Section::Communications, "Communications"),
    item(Section::Analytics, "My Impact"),
];

const GOVERNMENT_NAV: &[NavItem] = &[
    item(Section::Dashboard, "Command Center"),
    item(Section::Coordination, "Coordination"),
    item(Section::Resources, "Resource Allocation"),
    item(Section::Analytics, "Analytics"),
    item(Section::Tasks, "Task Management"),
    item(Section::Communications, "Communications"),
    item(Section::Reports, "Reports"),
];

/// Presentation settings for one role.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoleConfig {
    pub color: Color,
    pub label: &'static str,
    pub nav_items: &'static [NavItem],
}

impl RoleConfig {
    pub fn for_role(role: Role) -> Self {
        match role {
            Role::Ngo => RoleConfig {
                color: NGO_BLUE,
                label: "NGO Dashboard",
                nav_items: NGO_NAV,
            },
            Role::Volunteer => RoleConfig {
                color: VOLUNTEER_GREEN,
                label: "Volunteer Portal",
                nav_items: VOLUNTEER_NAV,
            },
            Role::Donor => RoleConfig {
                color: DONOR_PURPLE,
                label: "Donor Portal",
                nav_items: DONOR_NAV,
            },
            Role::Government => RoleConfig {
                color: GOVERNMENT_RED,
                label: "Government Portal",
                nav_items: GOVERNMENT_NAV,
            },
        }
    }

    pub fn position(&self, section: Section) -> Option<usize> {
        self.nav_items.iter().position(|item| item.section == section)
    }
}

/// Body view rendered for a section. Sections without a view of their own
/// show the role dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Dashboard,
    Crises,
    Resources,
    Opportunities,
    Donations,
    /// Alert list, opened over any section with `n`.
    Alerts,
}

impl View {
    pub fn for_section(section: Section) -> Self {
        match section {
            Section::Crises => View::Crises,
            Section::Resources => View::Resources,
            Section::Volunteers | Section::Opportunities => View::Opportunities,
            Section::Donate | Section::MyDonations => View::Donations,
            Section::Dashboard
            | Section::MyActivities
            | Section::Training
            | Section::Impact
            | Section::Coordination
            | Section::Reports
            | Section::Tasks
            | Section::Communications
            | Section::Analytics => View::Dashboard,
        }
    }
}

pub struct NavBar;

impl NavBar {
    pub fn widget(config: &RoleConfig, active: Section) -> Paragraph<'static> {
        let mut spans = vec![Span::raw(" ")];
        for (idx, item) in config.nav_items.iter().enumerate() {
            if idx > 0 {
                spans.push(Span::styled(" │ ", Style::default().fg(HEADER_SEPARATOR)));
            }
            let style = if item.section == active {
                Style::default()
                    .fg(Color::White)
                    .bg(config.color)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(HEADER_TEXT)
            };
            spans.push(Span::styled(format!(" {} ", item.label), style));
        }
        Paragraph::new(Line::from(spans))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_role_starts_at_dashboard() {
        for role in Role::ALL {
            let config = RoleConfig::for_role(role);
            assert_eq!(config.nav_items[0].section, Section::Dashboard);
        }
    }

    #[test]
    fn roles_have_distinct_colors() {
        let colors: Vec<Color> = Role::ALL
            .iter()
            .map(|role| RoleConfig::for_role(*role).color)
            .collect();
        for (i, a) in colors.iter().enumerate() {
            for b in &colors[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn peripheral_sections_fall_back_to_dashboard() {
        assert_eq!(View::for_section(Section::Reports), View::Dashboard);
        assert_eq!(View::for_section(Section::Training), View::Dashboard);
        assert_eq!(View::for_section(Section::Volunteers), View::Opportunities);
        assert_eq!(View::for_section(Section::MyDonations), View::Donations);
    }

    #[test]
    fn donor_nav_reaches_donations() {
        let config = RoleConfig::for_role(Role::Donor);
        assert_eq!(config.position(Section::Donate), Some(1));
        assert_eq!(config.position(Section::Crises), None);
    }
}
