//! Resource needs: quantified material or personnel requests tied to a crisis.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::id::EntityId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ResourceKind {
    Food,
    Water,
    Shelter,
    Medical,
    Clothing,
    Transport,
    Equipment,
    Personnel,
}

impl ResourceKind {
    pub const ALL: [ResourceKind; 8] = [
        ResourceKind::Food,
        ResourceKind::Water,
        ResourceKind::Shelter,
        ResourceKind::Medical,
        ResourceKind::Clothing,
        ResourceKind::Transport,
        ResourceKind::Equipment,
        ResourceKind::Personnel,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ResourceKind::Food => "food",
            ResourceKind::Water => "water",
            ResourceKind::Shelter => "shelter",
            ResourceKind::Medical => "medical",
            ResourceKind::Clothing => "clothing",
            ResourceKind::Transport => "transport",
            ResourceKind::Equipment => "equipment",
            ResourceKind::Personnel => "personnel",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Priority {
    Low,
    Medium,
    High,
    Urgent,
}

impl Priority {
    pub fn label(self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
            Priority::Urgent => "urgent",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ResourceStatus {
    Needed,
    PartiallyFulfilled,
    Fulfilled,
}

impl ResourceStatus {
    /// Status implied by a fulfilled count against the requested quantity.
    pub fn from_progress(fulfilled: u64, quantity: u64) -> Self {
        if fulfilled >= quantity {
            ResourceStatus::Fulfilled
        } else if fulfilled > 0 {
            ResourceStatus::PartiallyFulfilled
        } else {
            ResourceStatus::Needed
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ResourceStatus::Needed => "needed",
            ResourceStatus::PartiallyFulfilled => "partially-fulfilled",
            ResourceStatus::Fulfilled => "fulfilled",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceNeed {
    pub id: EntityId,
    pub crisis_id: EntityId,
    #[serde(rename = "type")]
    pub kind: ResourceKind,
    pub item: String,
    pub quantity: u64,
    pub unit: String,
    pub priority: Priority,
    pub status: ResourceStatus,
    pub requested_by: String,
    #[serde(default)]
    pub deadline: Option<DateTime<Utc>>,
    #[serde(default)]
    pub description: Option<String>,
    pub fulfilled: u64,
}

impl ResourceNeed {
    pub fn remaining(&self) -> u64 {
        self.quantity.saturating_sub(self.fulfilled)
    }

    pub fn fulfillment_percentage(&self) -> f64 {
        if self.quantity == 0 {
            return 100.0;
        }
        (self.fulfilled as f64 / self.quantity as f64 * 100.0).min(100.0)
    }

    /// Patch recording `contribution` more units, clamped at `quantity`,
    /// with the status recomputed from the new count.
    pub fn fulfillment_patch(&self, contribution: u64) -> ResourcePatch {
        let fulfilled = self.fulfilled.saturating_add(contribution).min(self.quantity);
        ResourcePatch {
            fulfilled: Some(fulfilled),
            status: Some(ResourceStatus::from_progress(fulfilled, self.quantity)),
            ..ResourcePatch::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewResource {
    pub crisis_id: EntityId,
    #[serde(rename = "type")]
    pub kind: ResourceKind,
    pub item: String,
    pub quantity: u64,
    pub unit: String,
    pub priority: Priority,
    pub requested_by: String,
    pub deadline: Option<DateTime<Utc>>,
    pub description: Option<String>,
}

impl NewResource {
    /// Materialize the need with nothing fulfilled yet.
    pub fn into_resource(self, id: EntityId) -> ResourceNeed {
        ResourceNeed {
            id,
            crisis_id: self.crisis_id,
            kind: self.kind,
            item: self.item,
            quantity: self.quantity,
            unit: self.unit,
            priority: self.priority,
            status: ResourceStatus::Needed,
            requested_by: self.requested_by,
            deadline: self.deadline,
            description: self.description,
            fulfilled: 0,
        }
    }
}

/// Shallow patch. Status is stored as given; it is not derived from `fulfilled` here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ResourcePatch {
    pub crisis_id: Option<EntityId>,
    #[serde(rename = "type")]
    pub kind: Option<ResourceKind>,
    pub item: Option<String>,
    pub quantity: Option<u64>,
    pub unit: Option<String>,
    pub priority: Option<Priority>,
    pub status: Option<ResourceStatus>,
    pub requested_by: Option<String>,
    pub deadline: Option<DateTime<Utc>>,
    pub description: Option<String>,
    pub fulfilled: Option<u64>,
}

impl ResourcePatch {
    pub fn apply(self, resource: &mut ResourceNeed) {
        if let Some(crisis_id) = self.crisis_id {
            resource.crisis_id = crisis_id;
        }
        if let Some(kind) = self.kind {
            resource.kind = kind;
        }
        if let Some(item) = self.item {
            resource.item = item;
        }
        if let Some(quantity) = self.quantity {
            resource.quantity = quantity;
        }
        if let Some(unit) = self.unit {
            resource.unit = unit;
        }
        if let Some(priority) = self.priority {
            resource.priority = priority;
        }
        if let Some(status) = self.status {
            resource.status = status;
        }
        if let Some(requested_by) = self.requested_by {
            resource.requested_by = requested_by;
        }
        if let Some(deadline) = self.deadline {
            resource.deadline = Some(deadline);
        }
        if let Some(description) = self.description {
            resource.description = Some(description);
        }
        if let Some(fulfilled) = self.fulfilled {
            resource.fulfilled = fulfilled;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tents(quantity: u64, fulfilled: u64) -> ResourceNeed {
        ResourceNeed {
            id: EntityId::from("r1"),
            crisis_id: EntityId::from("c1"),
            kind: ResourceKind::Shelter,
            item: "Emergency Tents".to_string(),
            quantity,
            unit: "units".to_string(),
            priority: Priority::Urgent,
            status: ResourceStatus::from_progress(fulfilled, quantity),
            requested_by: "UNHCR".to_string(),
            deadline: None,
            description: None,
            fulfilled,
        }
    }

    #[test]
    fn status_tracks_progress() {
        assert_eq!(ResourceStatus::from_progress(0, 10), ResourceStatus::Needed);
        assert_eq!(
            ResourceStatus::from_progress(1, 10),
            ResourceStatus::PartiallyFulfilled
        );
        assert_eq!(
            ResourceStatus::from_progress(9, 10),
            ResourceStatus::PartiallyFulfilled
        );
        assert_eq!(ResourceStatus::from_progress(10, 10), ResourceStatus::Fulfilled);
    }

    #[test]
    fn fulfillment_clamps_at_quantity() {
        let patch = tents(10_000, 3_500).fulfillment_patch(9_000);
        assert_eq!(patch.fulfilled, Some(10_000));
        assert_eq!(patch.status, Some(ResourceStatus::Fulfilled));
    }

    #[test]
    fn partial_fulfillment_is_partially_fulfilled() {
        let patch = tents(10_000, 0).fulfillment_patch(100);
        assert_eq!(patch.fulfilled, Some(100));
        assert_eq!(patch.status, Some(ResourceStatus::PartiallyFulfilled));
    }

    #[test]
    fn zero_contribution_on_empty_need_stays_needed() {
        let patch = tents(50, 0).fulfillment_patch(0);
        assert_eq!(patch.fulfilled, Some(0));
        assert_eq!(patch.status, Some(ResourceStatus::Needed));
    }

    #[test]
    fn patch_leaves_unset_fields_alone() {
        let mut resource = tents(10, 2);
        ResourcePatch {
            priority: Some(Priority::Low),
            ..ResourcePatch::default()
        }
        .apply(&mut resource);
        assert_eq!(resource.priority, Priority::Low);
        assert_eq!(resource.fulfilled, 2);
        assert_eq!(resource.item, "Emergency Tents");
    }

    #[test]
    fn status_serializes_kebab_case() {
        let json = serde_json::to_string(&ResourceStatus::PartiallyFulfilled).unwrap();
        assert_eq!(json, "\"partially-fulfilled\"");
    }
}
