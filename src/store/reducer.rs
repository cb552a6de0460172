//! Reducer for the relief store.

use crate::domain::Section;
use crate::mvi::Reducer;

use super::intent::StoreIntent;
use super::state::ReliefState;

/// Pure state transitions for every store operation.
///
/// Id assignment and logging happen in [`super::Store`] around the dispatch.
pub struct StoreReducer;

impl Reducer for StoreReducer {
    type State = ReliefState;
    type Intent = StoreIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            StoreIntent::AddCrisis { id, draft } => {
                state.crises.insert(0, draft.into_crisis(id));
            }
            StoreIntent::UpdateCrisis { id, patch } => {
                if let Some(crisis) = state.crises.iter_mut().find(|c| c.id == id) {
                    patch.apply(crisis);
                }
            }
            StoreIntent::AddResource { id, draft } => {
                state.resources.insert(0, draft.into_resource(id));
            }
            StoreIntent::UpdateResource { id, patch } => {
                if let Some(resource) = state.resources.iter_mut().find(|r| r.id == id) {
                    patch.apply(resource);
                }
            }
            StoreIntent::FulfillResource { id, contribution } => {
                if let Some(resource) = state.resources.iter_mut().find(|r| r.id == id) {
                    let patch = resource.fulfillment_patch(contribution);
                    patch.apply(resource);
                }
            }
            StoreIntent::AddOpportunity { id, draft } => {
                state.opportunities.insert(0, draft.into_opportunity(id));
            }
            StoreIntent::ApplyToOpportunity { id } => {
                if let Some(opportunity) = state.opportunities.iter_mut().find(|o| o.id == id) {
                    opportunity.volunteers_registered =
                        opportunity.volunteers_registered.saturating_add(1);
                }
            }
            StoreIntent::MakeDonation { id, draft } => {
                let donation = draft.into_donation(id);
                if let Some(amount) = donation.contribution.monetary_amount() {
                    if let Some(crisis) =
                        state.crises.iter_mut().find(|c| c.id == donation.crisis_id)
                    {
                        crisis.total_funding = crisis.total_funding.saturating_add(amount);
                    }
                }
                state.donations.insert(0, donation);
            }
            StoreIntent::AcknowledgeAlert { id } => {
                if let Some(alert) = state.alerts.iter_mut().find(|a| a.id == id) {
                    alert.acknowledged = true;
                }
            }
            StoreIntent::AcknowledgeAllAlerts => {
                for alert in &mut state.alerts {
                    alert.acknowledged = true;
                }
            }
            StoreIntent::SwitchRole { role } => {
                state.user.role = role;
                state.section = Section::Dashboard;
            }
            StoreIntent::Navigate { section } => {
                state.section = section;
            }
        }
        state
    }
}
