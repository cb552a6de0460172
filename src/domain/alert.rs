use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::crisis::Severity;
use super::id::EntityId;
use super::user::Role;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AlertKind {
    Emergency,
    Update,
    Request,
    Success,
}

impl AlertKind {
    pub const ALL: [AlertKind; 4] = [
        AlertKind::Emergency,
        AlertKind::Update,
        AlertKind::Request,
        AlertKind::Success,
    ];

    pub fn label(self) -> &'static str {
        match self {
            AlertKind::Emergency => "emergency",
            AlertKind::Update => "update",
            AlertKind::Request => "request",
            AlertKind::Success => "success",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Alert {
    pub id: EntityId,
    pub title: String,
    pub message: String,
    #[serde(rename = "type")]
    pub kind: AlertKind,
    pub severity: Severity,
    /// `None` means every role sees the alert.
    #[serde(default)]
    pub target_roles: Option<Vec<Role>>,
    #[serde(default)]
    pub crisis_id: Option<EntityId>,
    pub timestamp: DateTime<Utc>,
    #[serde(default)]
    pub acknowledged: bool,
    #[serde(default)]
    pub expires_at: Option<DateTime<Utc>>,
}

impl Alert {
    pub fn targets(&self, role: Role) -> bool {
        self.target_roles
            .as_ref()
            .map_or(true, |roles| roles.contains(&role))
    }
}
