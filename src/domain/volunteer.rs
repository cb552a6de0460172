use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::id::EntityId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OpportunityKind {
    FieldWork,
    Logistics,
    Medical,
    Technical,
    Administrative,
    Transport,
}

impl OpportunityKind {
    pub const ALL: [OpportunityKind; 6] = [
        OpportunityKind::FieldWork,
        OpportunityKind::Logistics,
        OpportunityKind::Medical,
        OpportunityKind::Technical,
        OpportunityKind::Administrative,
        OpportunityKind::Transport,
    ];

    pub fn label(self) -> &'static str {
        match self {
            OpportunityKind::FieldWork => "field-work",
            OpportunityKind::Logistics => "logistics",
            OpportunityKind::Medical => "medical",
            OpportunityKind::Technical => "technical",
            OpportunityKind::Administrative => "administrative",
            OpportunityKind::Transport => "transport",
        }
    }
}

/// A staffing slot offered by an NGO for a crisis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VolunteerOpportunity {
    pub id: EntityId,
    pub title: String,
    pub crisis_id: EntityId,
    pub ngo_id: EntityId,
    pub ngo_name: String,
    #[serde(rename = "type")]
    pub kind: OpportunityKind,
    pub location: String,
    #[serde(default)]
    pub required_skills: Vec<String>,
    pub time_commitment: String,
    pub start_date: DateTime<Utc>,
    #[serde(default)]
    pub end_date: Option<DateTime<Utc>>,
    pub volunteers_needed: u32,
    /// Not capped at `volunteers_needed`; see `has_open_slots`.
    pub volunteers_registered: u32,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub requirements: Vec<String>,
}

impl VolunteerOpportunity {
    pub fn has_open_slots(&self) -> bool {
        self.volunteers_registered < self.volunteers_needed
    }

    /// Less than half of the requested volunteers have signed up.
    pub fn is_urgent(&self) -> bool {
        (self.volunteers_registered as f64) < self.volunteers_needed as f64 * 0.5
    }

    pub fn fill_percentage(&self) -> f64 {
        if self.volunteers_needed == 0 {
            return 100.0;
        }
        (self.volunteers_registered as f64 / self.volunteers_needed as f64 * 100.0).min(100.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewOpportunity {
    pub title: String,
    pub crisis_id: EntityId,
    pub ngo_id: EntityId,
    pub ngo_name: String,
    #[serde(rename = "type")]
    pub kind: OpportunityKind,
    pub location: String,
    pub required_skills: Vec<String>,
    pub time_commitment: String,
    pub start_date: DateTime<Utc>,
    pub end_date: Option<DateTime<Utc>>,
    pub volunteers_needed: u32,
    pub description: String,
    pub requirements: Vec<String>,
}

impl NewOpportunity {
    pub fn into_opportunity(self, id: EntityId) -> VolunteerOpportunity {
        VolunteerOpportunity {
            id,
            title: self.title,
            crisis_id: self.crisis_id,
            ngo_id: self.ngo_id,
            ngo_name: self.ngo_name,
            kind: self.kind,
            location: self.location,
            required_skills: self.required_skills,
            time_commitment: self.time_commitment,
            start_date: self.start_date,
            end_date: self.end_date,
            volunteers_needed: self.volunteers_needed,
            volunteers_registered: 0,
            description: self.description,
            requirements: self.requirements,
        }
    }
}
