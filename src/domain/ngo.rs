use serde::{Deserialize, Serialize};

use super::id::EntityId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NgoKind {
    Relief,
    Medical,
    Education,
    Development,
    Environmental,
    Advocacy,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactInfo {
    pub email: String,
    pub phone: String,
    #[serde(default)]
    pub website: Option<String>,
}

/// Relief organization. Reference data: the store never mutates it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ngo {
    pub id: EntityId,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: NgoKind,
    pub location: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub specializations: Vec<String>,
    #[serde(default)]
    pub verified: bool,
    #[serde(default)]
    pub rating: f32,
    #[serde(default)]
    pub total_projects: u32,
    #[serde(default)]
    pub active_crises: Vec<EntityId>,
    pub contact_info: ContactInfo,
}

impl Ngo {
    pub fn is_engaged(&self) -> bool {
        !self.active_crises.is_empty()
    }
}
