use serde::Serialize;

use crate::domain::{
    Alert, Crisis, Donation, EntityId, Ngo, ResourceNeed, Section, User, VolunteerOpportunity,
};
use crate::mvi::State;

/// Every entity collection plus the current user and section.
///
/// Collections are kept newest-first: creation prepends.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReliefState {
    pub user: User,
    pub section: Section,
    pub crises: Vec<Crisis>,
    pub resources: Vec<ResourceNeed>,
    pub opportunities: Vec<VolunteerOpportunity>,
    pub donations: Vec<Donation>,
    pub ngos: Vec<Ngo>,
    pub alerts: Vec<Alert>,
}

impl State for ReliefState {}

impl ReliefState {
    pub fn crisis(&self, id: &EntityId) -> Option<&Crisis> {
        self.crises.iter().find(|crisis| &crisis.id == id)
    }

    pub fn resource(&self, id: &EntityId) -> Option<&ResourceNeed> {
        self.resources.iter().find(|resource| &resource.id == id)
    }

    pub fn opportunity(&self, id: &EntityId) -> Option<&VolunteerOpportunity> {
        self.opportunities
            .iter()
            .find(|opportunity| &opportunity.id == id)
    }

    pub fn donation(&self, id: &EntityId) -> Option<&Donation> {
        self.donations.iter().find(|donation| &donation.id == id)
    }

    pub fn alert(&self, id: &EntityId) -> Option<&Alert> {
        self.alerts.iter().find(|alert| &alert.id == id)
    }

    pub fn active_crises(&self) -> impl Iterator<Item = &Crisis> {
        self.crises.iter().filter(|crisis| crisis.is_active())
    }

    /// Unread alerts, whatever their target roles.
    pub fn unacknowledged_alerts(&self) -> usize {
        self.alerts.iter().filter(|alert| !alert.acknowledged).count()
    }

    /// True when any collection already uses `id`.
    pub fn id_in_use(&self, id: &EntityId) -> bool {
        self.crisis(id).is_some()
            || self.resource(id).is_some()
            || self.opportunity(id).is_some()
            || self.donation(id).is_some()
            || self.alert(id).is_some()
    }
}
