//! Crisis entity: a tracked disaster with funding and NGO assignment state.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use super::id::EntityId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CrisisKind {
    Earthquake,
    Flood,
    Hurricane,
    Wildfire,
    Drought,
    Pandemic,
    Conflict,
    Other,
}

impl CrisisKind {
    pub const ALL: [CrisisKind; 8] = [
        CrisisKind::Earthquake,
        CrisisKind::Flood,
        CrisisKind::Hurricane,
        CrisisKind::Wildfire,
        CrisisKind::Drought,
        CrisisKind::Pandemic,
        CrisisKind::Conflict,
        CrisisKind::Other,
    ];

    pub fn label(self) -> &'static str {
        match self {
            CrisisKind::Earthquake => "earthquake",
            CrisisKind::Flood => "flood",
            CrisisKind::Hurricane => "hurricane",
            CrisisKind::Wildfire => "wildfire",
            CrisisKind::Drought => "drought",
            CrisisKind::Pandemic => "pandemic",
            CrisisKind::Conflict => "conflict",
            CrisisKind::Other => "other",
        }
    }
}

/// Severity scale shared by crises and alerts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Severity {
    Low,
    Medium,
    High,
    Critical,
}

impl Severity {
    pub fn label(self) -> &'static str {
        match self {
            Severity::Low => "low",
            Severity::Medium => "medium",
            Severity::High => "high",
            Severity::Critical => "critical",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CrisisStatus {
    Active,
    Monitoring,
    Resolved,
}

impl CrisisStatus {
    pub fn label(self) -> &'static str {
        match self {
            CrisisStatus::Active => "active",
            CrisisStatus::Monitoring => "monitoring",
            CrisisStatus::Resolved => "resolved",
        }
    }

    /// Next status in the active → monitoring → resolved → active cycle.
    pub fn next(self) -> Self {
        match self {
            CrisisStatus::Active => CrisisStatus::Monitoring,
            CrisisStatus::Monitoring => CrisisStatus::Resolved,
            CrisisStatus::Resolved => CrisisStatus::Active,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Crisis {
    pub id: EntityId,
    pub title: String,
    #[serde(rename = "type")]
    pub kind: CrisisKind,
    pub severity: Severity,
    pub status: CrisisStatus,
    pub location: String,
    #[serde(default)]
    pub coordinates: Option<Coordinates>,
    #[serde(default)]
    pub description: String,
    pub affected_population: u64,
    pub start_date: DateTime<Utc>,
    #[serde(default)]
    pub estimated_duration: Option<String>,
    /// Ids of resource needs attached to this crisis. Empty on creation.
    /// Seeds may list either ids or whole resource objects; only the ids are kept.
    #[serde(default, deserialize_with = "ids_or_entities")]
    pub required_resources: Vec<EntityId>,
    #[serde(default, rename = "assignedNGOs")]
    pub assigned_ngos: Vec<EntityId>,
    pub total_funding: u64,
    pub funding_goal: u64,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum IdOrEntity {
    Id(EntityId),
    Entity { id: EntityId },
}

fn ids_or_entities<'de, D>(deserializer: D) -> Result<Vec<EntityId>, D::Error>
where
    D: Deserializer<'de>,
{
    let entries = Vec::<IdOrEntity>::deserialize(deserializer)?;
    Ok(entries
        .into_iter()
        .map(|entry| match entry {
            IdOrEntity::Id(id) | IdOrEntity::Entity { id } => id,
        })
        .collect())
}

impl Crisis {
    /// Funding progress in percent, capped at 100. A zero goal reads as fully funded.
    pub fn funding_percentage(&self) -> f64 {
        if self.funding_goal == 0 {
            return 100.0;
        }
        (self.total_funding as f64 / self.funding_goal as f64 * 100.0).min(100.0)
    }

    pub fn is_active(&self) -> bool {
        self.status == CrisisStatus::Active
    }
}

/// Caller-supplied fields for a new crisis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCrisis {
    pub title: String,
    #[serde(rename = "type")]
    pub kind: CrisisKind,
    pub severity: Severity,
    pub location: String,
    pub coordinates: Option<Coordinates>,
    pub description: String,
    pub affected_population: u64,
    pub start_date: DateTime<Utc>,
    pub estimated_duration: Option<String>,
    pub funding_goal: u64,
}

impl NewCrisis {
    /// Materialize the crisis: active, unfunded, no resources or NGOs yet.
    pub fn into_crisis(self, id: EntityId) -> Crisis {
        Crisis {
            id,
            title: self.title,
            kind: self.kind,
            severity: self.severity,
            status: CrisisStatus::Active,
            location: self.location,
            coordinates: self.coordinates,
            description: self.description,
            affected_population: self.affected_population,
            start_date: self.start_date,
            estimated_duration: self.estimated_duration,
            required_resources: Vec::new(),
            assigned_ngos: Vec::new(),
            total_funding: 0,
            funding_goal: self.funding_goal,
        }
    }
}

/// Shallow patch: every `Some` field replaces the stored value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CrisisPatch {
    pub title: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<CrisisKind>,
    pub severity: Option<Severity>,
    pub status: Option<CrisisStatus>,
    pub location: Option<String>,
    pub coordinates: Option<Coordinates>,
    pub description: Option<String>,
    pub affected_population: Option<u64>,
    pub start_date: Option<DateTime<Utc>>,
    pub estimated_duration: Option<String>,
    pub required_resources: Option<Vec<EntityId>>,
    #[serde(rename = "assignedNGOs")]
    pub assigned_ngos: Option<Vec<EntityId>>,
    pub total_funding: Option<u64>,
    pub funding_goal: Option<u64>,
}

impl CrisisPatch {
    pub fn status(status: CrisisStatus) -> Self {
        Self {
            status: Some(status),
            ..Self::default()
        }
    }

    pub fn apply(self, crisis: &mut Crisis) {
        if let Some(title) = self.title {
            crisis.title = title;
        }
        if let Some(kind) = self.kind {
            crisis.kind = kind;
        }
        if let Some(severity) = self.severity {
            crisis.severity = severity;
        }
        if let Some(status) = self.status {
            crisis.status = status;
        }
        if let Some(location) = self.location {
            crisis.location = location;
        }
        if let Some(coordinates) = self.coordinates {
            crisis.coordinates = Some(coordinates);
        }
        if let Some(description) = self.description {
            crisis.description = description;
        }
        if let Some(affected) = self.affected_population {
            crisis.affected_population = affected;
        }
        if let Some(start_date) = self.start_date {
            crisis.start_date = start_date;
        }
        if let Some(duration) = self.estimated_duration {
            crisis.estimated_duration = Some(duration);
        }
        if let Some(resources) = self.required_resources {
            crisis.required_resources = resources;
        }
        if let Some(ngos) = self.assigned_ngos {
            crisis.assigned_ngos = ngos;
        }
        if let Some(total) = self.total_funding {
            crisis.total_funding = total;
        }
        if let Some(goal) = self.funding_goal {
            crisis.funding_goal = goal;
        }
    }
}
