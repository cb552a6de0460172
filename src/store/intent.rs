use crate::domain::{
    CrisisPatch, EntityId, NewCrisis, NewDonation, NewOpportunity, NewResource, ResourcePatch,
    Role, Section,
};
use crate::mvi::Intent;

/// Store operations. Creation intents carry the id assigned by the caller.
#[derive(Debug, Clone)]
pub enum StoreIntent {
    AddCrisis { id: EntityId, draft: NewCrisis },
    /// Unknown id: no-op.
    UpdateCrisis { id: EntityId, patch: CrisisPatch },
    AddResource { id: EntityId, draft: NewResource },
    /// Unknown id: no-op. Status is taken from the patch as-is.
    UpdateResource { id: EntityId, patch: ResourcePatch },
    /// Add `contribution` units, clamped at quantity, and recompute status.
    FulfillResource { id: EntityId, contribution: u64 },
    AddOpportunity { id: EntityId, draft: NewOpportunity },
    /// Increments registrations by one with no capacity check.
    ApplyToOpportunity { id: EntityId },
    /// Monetary donations with an amount also raise the crisis funding total.
    MakeDonation { id: EntityId, draft: NewDonation },
    AcknowledgeAlert { id: EntityId },
    AcknowledgeAllAlerts,
    /// Replaces the user's role and returns to the dashboard.
    SwitchRole { role: Role },
    Navigate { section: Section },
}

impl Intent for StoreIntent {}
