//! Role-specific dashboard aggregates.
//!
//! Each dashboard is a pure read over a [`ReliefState`] snapshot; nothing here
//! mutates the store.

use std::collections::BTreeMap;

use crate::domain::{
    Crisis, DonationStatus, Priority, ResourceKind, ResourceNeed, ResourceStatus, Role, Severity,
    VolunteerOpportunity,
};
use crate::store::ReliefState;

/// How many critical crises the donor dashboard highlights.
pub const URGENT_CRISIS_LIMIT: usize = 3;

#[derive(Debug, Clone, PartialEq)]
pub struct NgoSummary<'a> {
    pub active_crises: Vec<&'a Crisis>,
    pub urgent_resources: Vec<&'a ResourceNeed>,
    pub total_volunteers: u64,
    pub total_funding: u64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct VolunteerSummary<'a> {
    pub available_opportunities: Vec<&'a VolunteerOpportunity>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DonorSummary<'a> {
    pub total_donated: u64,
    pub confirmed_donations: usize,
    pub people_helped: u64,
    pub impact_score: u64,
    pub urgent_crises: Vec<&'a Crisis>,
    /// Monetary total per contribution kind label.
    pub donated_by_kind: BTreeMap<&'static str, u64>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GovernmentSummary<'a> {
    pub active_crises: Vec<&'a Crisis>,
    pub critical_crises: usize,
    pub total_affected: u64,
    pub total_funding: u64,
    pub engaged_ngos: usize,
    pub resources_by_kind: BTreeMap<ResourceKind, usize>,
}

/// Counts shown above the resource list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ResourceStats {
    pub total: usize,
    /// Urgent priority and nothing delivered yet.
    pub urgent: usize,
    pub fulfilled: usize,
    /// Still in the `needed` status.
    pub pending: usize,
}

/// The dashboard shown for the current user's role.
#[derive(Debug, Clone, PartialEq)]
pub enum RoleDashboard<'a> {
    Ngo(NgoSummary<'a>),
    Volunteer(VolunteerSummary<'a>),
    Donor(DonorSummary<'a>),
    Government(GovernmentSummary<'a>),
}

impl<'a> RoleDashboard<'a> {
    pub fn for_state(state: &'a ReliefState) -> Self {
        Self::for_role(state.user.role, state)
    }

    pub fn for_role(role: Role, state: &'a ReliefState) -> Self {
        match role {
            Role::Ngo => RoleDashboard::Ngo(ngo_summary(state)),
            Role::Volunteer => RoleDashboard::Volunteer(volunteer_summary(state)),
            Role::Donor => RoleDashboard::Donor(donor_summary(state)),
            Role::Government => RoleDashboard::Government(government_summary(state)),
        }
    }
}

fn total_funding(state: &ReliefState) -> u64 {
    state.crises.iter().map(|crisis| crisis.total_funding).sum()
}

pub fn ngo_summary(state: &ReliefState) -> NgoSummary<'_> {
    NgoSummary {
        active_crises: state.active_crises().collect(),
        urgent_resources: state
            .resources
            .iter()
            .filter(|r| r.priority == Priority::Urgent && r.status == ResourceStatus::Needed)
            .collect(),
        total_volunteers: state
            .opportunities
            .iter()
            .map(|o| u64::from(o.volunteers_registered))
            .sum(),
        total_funding: total_funding(state),
    }
}

pub fn volunteer_summary(state: &ReliefState) -> VolunteerSummary<'_> {
    VolunteerSummary {
        available_opportunities: state
            .opportunities
            .iter()
            .filter(|o| o.has_open_slots())
            .collect(),
    }
}

pub fn donor_summary(state: &ReliefState) -> DonorSummary<'_> {
    let total_donated: u64 = state
        .donations
        .iter()
        .filter_map(|d| d.contribution.monetary_amount())
        .sum();
    let confirmed_donations = state
        .donations
        .iter()
        .filter(|d| d.status == DonationStatus::Confirmed)
        .count();
    let people_helped = state
        .crises
        .iter()
        .filter(|c| state.donations.iter().any(|d| d.crisis_id == c.id))
        .map(|c| c.affected_population)
        .sum();
    let urgent_crises = state
        .crises
        .iter()
        .filter(|c| c.severity == Severity::Critical && c.is_active())
        .take(URGENT_CRISIS_LIMIT)
        .collect();

    let mut donated_by_kind = BTreeMap::new();
    for donation in &state.donations {
        *donated_by_kind
            .entry(donation.contribution.label())
            .or_insert(0) += donation.contribution.monetary_amount().unwrap_or(0);
    }

    DonorSummary {
        total_donated,
        confirmed_donations,
        people_helped,
        impact_score: total_donated / 100 + confirmed_donations as u64 * 10,
        urgent_crises,
        donated_by_kind,
    }
}

pub fn government_summary(state: &ReliefState) -> GovernmentSummary<'_> {
    let mut resources_by_kind = BTreeMap::new();
    for resource in &state.resources {
        *resources_by_kind.entry(resource.kind).or_insert(0) += 1;
    }

    GovernmentSummary {
        active_crises: state.active_crises().collect(),
        critical_crises: state
            .crises
            .iter()
            .filter(|c| c.severity == Severity::Critical)
            .count(),
        total_affected: state.crises.iter().map(|c| c.affected_population).sum(),
        total_funding: total_funding(state),
        engaged_ngos: state.ngos.iter().filter(|n| n.is_engaged()).count(),
        resources_by_kind,
    }
}

pub fn resource_stats(state: &ReliefState) -> ResourceStats {
    state
        .resources
        .iter()
        .fold(ResourceStats::default(), |mut stats, resource| {
            stats.total += 1;
            match resource.status {
                ResourceStatus::Needed => {
                    stats.pending += 1;
                    if resource.priority == Priority::Urgent {
                        stats.urgent += 1;
                    }
                }
                ResourceStatus::Fulfilled => stats.fulfilled += 1,
                ResourceStatus::PartiallyFulfilled => {}
            }
            stats
        })
}

/// Compact money rendering used by the summaries: `$1.2K`, `$45.0M`.
pub fn format_amount(amount: u64) -> String {
    match amount {
        0..=999 => format!("${amount}"),
        1_000..=999_999 => format!("${:.1}K", amount as f64 / 1_000.0),
        _ => format!("${:.1}M", amount as f64 / 1_000_000.0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_amounts_by_magnitude() {
        assert_eq!(format_amount(950), "$950");
        assert_eq!(format_amount(2_500), "$2.5K");
        assert_eq!(format_amount(45_000_000), "$45.0M");
    }

    #[test]
    fn empty_state_yields_zeroes() {
        let state = ReliefState::default();
        let donor = donor_summary(&state);
        assert_eq!(donor.total_donated, 0);
        assert_eq!(donor.impact_score, 0);
        assert!(donor.urgent_crises.is_empty());

        let government = government_summary(&state);
        assert_eq!(government.total_affected, 0);
        assert!(government.resources_by_kind.is_empty());
    }

    #[test]
    fn dashboard_follows_user_role() {
        let mut state = ReliefState::default();
        state.user.role = Role::Government;
        assert!(matches!(
            RoleDashboard::for_state(&state),
            RoleDashboard::Government(_)
        ));
        state.user.role = Role::Volunteer;
        assert!(matches!(
            RoleDashboard::for_state(&state),
            RoleDashboard::Volunteer(_)
        ));
    }
}
