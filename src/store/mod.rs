//! Central relief state and its cross-entity update rules.
//!
//! [`Store`] owns the only copy of [`ReliefState`]. Every operation is turned
//! into a [`StoreIntent`] and run through [`StoreReducer`], which takes the old
//! state by value and returns the next one, so readers never observe a
//! half-applied update (a donation and its funding increment land together).

mod intent;
mod reducer;
mod seed;
mod state;

pub use intent::StoreIntent;
pub use reducer::StoreReducer;
pub use seed::{Seed, SeedError};
pub use state::ReliefState;

use crate::domain::{
    CrisisPatch, EntityId, NewCrisis, NewDonation, NewOpportunity, NewResource, ResourcePatch,
    Role, Section,
};
use crate::mvi::Reducer;

/// Owned state container. Unknown ids are silent no-ops, logged at debug level.
#[derive(Debug, Default)]
pub struct Store {
    state: ReliefState,
}

impl Store {
    pub fn new(state: ReliefState) -> Self {
        Self { state }
    }

    pub fn from_seed(seed: Seed) -> Self {
        Self::new(seed.into_state())
    }

    /// Read-only snapshot for views.
    pub fn state(&self) -> &ReliefState {
        &self.state
    }

    pub fn into_state(self) -> ReliefState {
        self.state
    }

    pub fn dispatch(&mut self, intent: StoreIntent) {
        self.state = StoreReducer::reduce(std::mem::take(&mut self.state), intent);
    }

    pub fn add_crisis(&mut self, draft: NewCrisis) -> EntityId {
        let id = self.fresh_id();
        tracing::info!(crisis_id = %id, title = %draft.title, "Crisis added");
        self.dispatch(StoreIntent::AddCrisis {
            id: id.clone(),
            draft,
        });
        id
    }

    pub fn update_crisis(&mut self, id: &EntityId, patch: CrisisPatch) {
        if self.state.crisis(id).is_none() {
            tracing::debug!(crisis_id = %id, "Crisis update ignored: unknown id");
        }
        self.dispatch(StoreIntent::UpdateCrisis {
            id: id.clone(),
            patch,
        });
    }

    pub fn add_resource(&mut self, draft: NewResource) -> EntityId {
        let id = self.fresh_id();
        tracing::info!(
            resource_id = %id,
            crisis_id = %draft.crisis_id,
            item = %draft.item,
            "Resource need added"
        );
        self.dispatch(StoreIntent::AddResource {
            id: id.clone(),
            draft,
        });
        id
    }

    pub fn update_resource(&mut self, id: &EntityId, patch: ResourcePatch) {
        if self.state.resource(id).is_none() {
            tracing::debug!(resource_id = %id, "Resource update ignored: unknown id");
        }
        self.dispatch(StoreIntent::UpdateResource {
            id: id.clone(),
            patch,
        });
    }

    pub fn fulfill_resource(&mut self, id: &EntityId, contribution: u64) {
        match self.state.resource(id) {
            Some(resource) => tracing::info!(
                resource_id = %id,
                contribution,
                fulfilled = resource.fulfilled,
                quantity = resource.quantity,
                "Resource fulfillment recorded"
            ),
            None => tracing::debug!(resource_id = %id, "Fulfillment ignored: unknown id"),
        }
        self.dispatch(StoreIntent::FulfillResource {
            id: id.clone(),
            contribution,
        });
    }

    pub fn add_opportunity(&mut self, draft: NewOpportunity) -> EntityId {
        let id = self.fresh_id();
        tracing::info!(opportunity_id = %id, title = %draft.title, "Volunteer opportunity added");
        self.dispatch(StoreIntent::AddOpportunity {
            id: id.clone(),
            draft,
        });
        id
    }

    pub fn apply_to_opportunity(&mut self, id: &EntityId) {
        match self.state.opportunity(id) {
            Some(opportunity) if !opportunity.has_open_slots() => tracing::warn!(
                opportunity_id = %id,
                needed = opportunity.volunteers_needed,
                registered = opportunity.volunteers_registered,
                "Registration exceeds volunteers needed"
            ),
            Some(_) => tracing::info!(opportunity_id = %id, "Volunteer registered"),
            None => tracing::debug!(opportunity_id = %id, "Application ignored: unknown id"),
        }
        self.dispatch(StoreIntent::ApplyToOpportunity { id: id.clone() });
    }

    pub fn make_donation(&mut self, draft: NewDonation) -> EntityId {
        let id = self.fresh_id();
        tracing::info!(
            donation_id = %id,
            crisis_id = %draft.crisis_id,
            kind = draft.contribution.label(),
            amount = ?draft.contribution.monetary_amount(),
            "Donation recorded"
        );
        self.dispatch(StoreIntent::MakeDonation {
            id: id.clone(),
            draft,
        });
        id
    }

    pub fn acknowledge_alert(&mut self, id: &EntityId) {
        if self.state.alert(id).is_none() {
            tracing::debug!(alert_id = %id, "Acknowledge ignored: unknown id");
        }
        self.dispatch(StoreIntent::AcknowledgeAlert { id: id.clone() });
    }

    pub fn acknowledge_all_alerts(&mut self) {
        self.dispatch(StoreIntent::AcknowledgeAllAlerts);
    }

    pub fn switch_role(&mut self, role: Role) {
        tracing::info!(
            old_role = %self.state.user.role,
            new_role = %role,
            "Role switched"
        );
        self.dispatch(StoreIntent::SwitchRole { role });
    }

    pub fn navigate(&mut self, section: Section) {
        tracing::debug!(section = section.id(), "Navigated");
        self.dispatch(StoreIntent::Navigate { section });
    }

    fn fresh_id(&self) -> EntityId {
        loop {
            let id = EntityId::generate();
            if !self.state.id_in_use(&id) {
                return id;
            }
        }
    }
}
